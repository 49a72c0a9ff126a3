use thiserror::Error;

/// Errors raised while applying an [`ElementDiff`](crate::ElementDiff) to a collection.
///
/// Computing a diff never fails, these only surface at the boundary where a diff meets the
/// collection it is supposed to describe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The collection does not hold the number of items the diff was computed from
    #[error("collection holds {actual} items but the diff was computed from {expected}")]
    CountMismatch { expected: usize, actual: usize },
    /// A position lies outside the sequence it refers to
    #[error("index {index} is out of bounds for a sequence of {len} items")]
    OutOfBounds { index: usize, len: usize },
    /// Two operations claim the same position
    #[error("position {0} is claimed more than once")]
    SlotConflict(usize),
    /// Surviving items and free slots don't pair up, usually caused by duplicate identifiers
    #[error("{0} items could not be placed")]
    Unplaced(usize),
}
