//! Various in-place partition implementations.
//!
//! All of them move every element for which the predicate returns `true` in front of every element
//! for which it returns `false`, and return the index of the first `false` element. Neither keeps
//! the relative order inside the two sides.

pub trait Partition {
    fn name() -> String;

    /// Partitions `v` into `[< pivot, >= pivot]`.
    fn partition<T>(v: &mut [T], pivot: &T) -> usize
    where
        T: Ord;

    fn partition_by<T, F>(v: &mut [T], pred: F) -> usize
    where
        F: FnMut(&T) -> bool;
}

macro_rules! partition_impl {
    ($name:expr) => {
        pub struct PartitionImpl;

        impl crate::partition::Partition for PartitionImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition<T>(v: &mut [T], pivot: &T) -> usize
            where
                T: Ord,
            {
                partition(v, |elem| elem.lt(pivot))
            }

            #[inline]
            fn partition_by<T, F>(v: &mut [T], pred: F) -> usize
            where
                F: FnMut(&T) -> bool,
            {
                partition(v, pred)
            }
        }
    };
}

pub mod cyclic;
pub mod hoare;
