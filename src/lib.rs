pub mod large_element;
pub mod partition;
pub mod patterns;

pub use partition::Partition;
