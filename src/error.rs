#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An insert was attempted while every slot of the heap was occupied.
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
}
