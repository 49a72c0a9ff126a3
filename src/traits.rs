use std::hash::Hash;

use crate::{diff, diff_by, Animation, ElementDiff};

/// Diff methods on sequences, so that `previous.element_diff(&current)` reads like the call site
/// it usually lives at.
///
/// ```
/// use element_diff::SequenceDiff;
///
/// let previous = vec![1, 2, 3];
/// let current = vec![3, 1, 2];
///
/// let diff = previous.element_diff(&current);
/// assert_eq!(diff.moved().len(), 3);
/// ```
pub trait SequenceDiff<T> {
    /// See [`diff`](crate::diff)
    fn element_diff(&self, updated: &Self) -> ElementDiff
    where
        T: Hash + Eq;

    /// See [`diff_by`](crate::diff_by)
    fn element_diff_by<H, F>(&self, updated: &Self, identifier: F) -> ElementDiff
    where
        H: Hash + Eq,
        F: FnMut(&T) -> H;
}

impl<T> SequenceDiff<T> for [T] {
    fn element_diff(&self, updated: &Self) -> ElementDiff
    where
        T: Hash + Eq,
    {
        diff(self, updated)
    }

    fn element_diff_by<H, F>(&self, updated: &Self, identifier: F) -> ElementDiff
    where
        H: Hash + Eq,
        F: FnMut(&T) -> H,
    {
        diff_by(self, updated, identifier)
    }
}

/// A list or grid widget that accepts batched structural updates.
///
/// Positions are plain item indices scoped to a `section`. Implementations without animation
/// styles can ignore the `animation` arguments.
pub trait ItemUpdates {
    /// Number of items currently shown in `section`
    fn item_count(&self, section: usize) -> usize;

    /// Opens a batch, every call until [`ItemUpdates::end_updates`] is committed together
    fn begin_updates(&mut self);

    /// `items` are positions before the batch
    fn delete_items(&mut self, section: usize, items: &[usize], animation: Animation);

    /// `items` are positions after the batch
    fn insert_items(&mut self, section: usize, items: &[usize], animation: Animation);

    fn move_item(&mut self, section: usize, from: usize, to: usize);

    fn end_updates(&mut self);
}
