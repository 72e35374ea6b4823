use core::mem::{self, ManuallyDrop};
use core::ptr;

partition_impl!("cyclic");

// Instead of swapping pairs like the Hoare scheme, the first misplaced element is moved out into a
// temporary, leaving a hole. Elements are then shifted into the hole alternately from the right
// and from the left, each move leaving a new hole behind, until both cursors meet at the final
// hole, which receives the temporary. That is one copy per misplaced element plus two for the
// temporary, instead of three per swapped pair.

/// Cycle based partition that moves elements through a single hole.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition<T, F>(v: &mut [T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let len = v.len();

    // Skip the prefix that is already in place.
    let mut l = 0;
    while l < len && pred(&v[l]) {
        l += 1;
    }

    if l == len {
        // Every element satisfies the predicate, nothing to move.
        return len;
    }

    let mut r = len - 1;

    // SAFETY: `l < len` and `r == len - 1` here. Inside the loop every read is guarded by
    // `l != r`, and the loop keeps `l <= r`: `l` only grows while `l != r` and `r` only shrinks
    // while `l != r`. So all accesses stay within `0..len`.
    //
    // At every point where `pred` can be called there is exactly one slot whose value is a bitwise
    // duplicate, the hole, and `hole.dest` points to it. `pred` is never called on the hole. If
    // `pred` panics, dropping `hole` fills it with `tmp` so the slice holds every original element
    // exactly once. On the normal path the same drop writes `tmp` into the final hole.
    unsafe {
        let arr_ptr = v.as_mut_ptr();

        // The only copy out of the slice.
        let tmp = ManuallyDrop::new(ptr::read(arr_ptr.add(l)));
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: arr_ptr.add(l),
        };

        loop {
            debug_assert!(l <= r);

            // Fill the hole on the left with the next element from the right that belongs there.
            while l != r && !pred(&*arr_ptr.add(r)) {
                r -= 1;
            }
            if l == r {
                break;
            }
            ptr::copy_nonoverlapping(arr_ptr.add(r), arr_ptr.add(l), 1);
            hole.dest = arr_ptr.add(r);
            l += 1;

            // Fill the hole on the right with the next element from the left that belongs there.
            while l != r && pred(&*arr_ptr.add(l)) {
                l += 1;
            }
            if l == r {
                break;
            }
            ptr::copy_nonoverlapping(arr_ptr.add(l), arr_ptr.add(r), 1);
            hole.dest = arr_ptr.add(l);
            r -= 1;
        }

        debug_assert!(l == r && hole.dest == arr_ptr.add(l));

        // The only copy back into the slice.
        mem::drop(hole);
    }

    l
}

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points to the temporary, which outlives the guard, and `dest` is the
        // current hole inside the slice. They never overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}
