use std::{collections::BTreeMap, fmt::Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Differences between two snapshots of a sequence, computed by [`diff`](crate::diff) or
/// [`diff_by`](crate::diff_by).
///
/// `deleted` and `moved` keys are positions in the *original* sequence, `inserted`, `unmoved` and
/// `moved` values are positions in the *updated* sequence.
///
/// A diff is a plain value, it borrows nothing from the sequences it was computed from. It is meant
/// to be consumed once, typically by [`update_section`](crate::update_section).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementDiff {
    deleted: Vec<usize>,
    inserted: Vec<usize>,
    moved: BTreeMap<usize, usize>,
    unmoved: Vec<usize>,
    original_len: usize,
    updated_len: usize,
}

impl ElementDiff {
    /// Create a diff from its parts.
    ///
    /// No validation happens here, [`ElementDiff::apply_to`] reports inconsistent parts.
    pub fn new(
        deleted: Vec<usize>,
        inserted: Vec<usize>,
        moved: BTreeMap<usize, usize>,
        unmoved: Vec<usize>,
        original_len: usize,
        updated_len: usize,
    ) -> Self {
        Self {
            deleted,
            inserted,
            moved,
            unmoved,
            original_len,
            updated_len,
        }
    }

    /// Positions in the original sequence whose identifier is gone, ascending
    pub fn deleted(&self) -> &[usize] {
        &self.deleted[..]
    }

    /// Positions in the updated sequence whose identifier is new, ascending
    pub fn inserted(&self) -> &[usize] {
        &self.inserted[..]
    }

    /// `original position -> updated position` for identifiers that changed slot
    pub fn moved(&self) -> &BTreeMap<usize, usize> {
        &self.moved
    }

    /// Updated positions of survivors that need no move
    pub fn unmoved(&self) -> &[usize] {
        &self.unmoved[..]
    }

    /// Length of the sequence passed as `original`
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Length of the sequence passed as `updated`
    pub fn updated_len(&self) -> usize {
        self.updated_len
    }

    /// `true` if applying this diff issues no structural mutation at all
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.inserted.is_empty() && self.moved.is_empty()
    }

    /// Replays this diff on `original` with the semantics of a batched list update and returns the
    /// updated sequence.
    ///
    /// Moved items land on their destination, `insert` is called with every inserted position to
    /// produce the new item and the remaining slots are filled, in order, by the survivors that were
    /// not moved.
    ///
    /// E.g.
    /// ```
    /// use element_diff::diff;
    ///
    /// let old = ["a", "b", "c"];
    /// let new = ["c", "a", "d"];
    ///
    /// let diff = diff(&old, &new);
    /// assert_eq!(diff.apply_to(&old, |ix| new[ix]).unwrap(), new);
    /// ```
    ///
    /// For inputs without duplicate identifiers the result always equals the `updated` sequence
    /// the diff was computed from. Duplicates can leave items without a slot, reported as
    /// [`Error::Unplaced`].
    pub fn apply_to<T: Clone>(
        &self,
        original: &[T],
        mut insert: impl FnMut(usize) -> T,
    ) -> Result<Vec<T>, Error> {
        if original.len() != self.original_len {
            return Err(Error::CountMismatch {
                expected: self.original_len,
                actual: original.len(),
            });
        }

        // survivors plus insertions must fill the updated sequence exactly
        let updated_len = original
            .len()
            .checked_sub(self.deleted.len())
            .and_then(|n| n.checked_add(self.inserted.len()));
        match updated_len {
            Some(n) if n == self.updated_len => {}
            Some(n) => return Err(Error::Unplaced(n.abs_diff(self.updated_len))),
            None => {
                return Err(Error::Unplaced(
                    self.deleted.len().saturating_sub(original.len()),
                ))
            }
        }

        let mut slots: Vec<Option<T>> = vec![None; self.updated_len];
        // original positions consumed by a delete or a move
        let mut taken = vec![false; original.len()];

        for &ix in self.deleted.iter() {
            *Self::slot(&mut taken, ix)? = true;
        }

        for (&from, &to) in self.moved.iter() {
            let flag = Self::slot(&mut taken, from)?;
            if *flag {
                return Err(Error::SlotConflict(from));
            }
            *flag = true;

            Self::place(&mut slots, to, original[from].clone())?;
        }

        for &ix in self.inserted.iter() {
            Self::place(&mut slots, ix, insert(ix))?;
        }

        let mut survivors = original
            .iter()
            .zip(taken.iter())
            .filter(|&(_, &t)| !t)
            .map(|(item, _)| item);

        let mut empty = 0;
        for slot in slots.iter_mut().filter(|s| s.is_none()) {
            match survivors.next() {
                Some(item) => *slot = Some(item.clone()),
                None => empty += 1,
            }
        }

        let unplaced = empty + survivors.count();
        if unplaced > 0 {
            tracing::debug!(unplaced, "diff does not describe a complete reordering");
            return Err(Error::Unplaced(unplaced));
        }

        Ok(slots.into_iter().flatten().collect())
    }

    fn slot<V>(slots: &mut [V], index: usize) -> Result<&mut V, Error> {
        let len = slots.len();
        slots.get_mut(index).ok_or(Error::OutOfBounds { index, len })
    }

    fn place<T>(slots: &mut [Option<T>], index: usize, item: T) -> Result<(), Error> {
        let slot = Self::slot(slots, index)?;
        if slot.is_some() {
            return Err(Error::SlotConflict(index));
        }

        *slot = Some(item);
        Ok(())
    }
}

/// Compact single line form, used when logging diffs
/// `-0,3 +1 >2:0 =4` means delete `0` and `3`, insert `1`, move `2` to `0`, leave `4`
impl Display for ElementDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn join<'a>(ixs: impl Iterator<Item = &'a usize>) -> String {
            ixs.map(|ix| ix.to_string()).collect::<Vec<_>>().join(",")
        }

        let moved = self
            .moved
            .iter()
            .map(|(from, to)| format!("{from}:{to}"))
            .collect::<Vec<_>>()
            .join(",");

        write!(
            f,
            "-{} +{} >{} ={}",
            join(self.deleted.iter()),
            join(self.inserted.iter()),
            moved,
            join(self.unmoved.iter())
        )
    }
}
