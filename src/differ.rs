use std::{
    collections::{BTreeMap, HashMap, HashSet},
    hash::Hash,
};

use crate::ElementDiff;

/// Compute the differences between two snapshots of a sequence of identifiers.
///
/// Elements are matched by identity (`Hash` + `Eq`), not by position. Every position of `original`
/// ends up either `deleted`, as a key of `moved` or as one entry of `unmoved`. Every position of
/// `updated` is either `inserted` or reached by a survivor.
///
/// The result can be passed to [`update_section`](crate::update_section) to animate the transition.
///
/// E.g.
/// ```
/// use element_diff::diff;
///
/// let diff = diff(&["a", "b", "c", "d"], &["a", "c", "d", "b"]);
///
/// assert!(diff.deleted().is_empty());
/// assert!(diff.inserted().is_empty());
/// assert_eq!(diff.moved().iter().collect::<Vec<_>>(), [(&1, &3), (&2, &1), (&3, &2)]);
/// assert_eq!(diff.unmoved(), [0]);
/// ```
///
/// Identifiers are expected to be unique within each sequence. When one repeats, only its *last*
/// position is visible to lookups, the result stays deterministic but may not describe the
/// transition correctly.
pub fn diff<T: Hash + Eq>(original: &[T], updated: &[T]) -> ElementDiff {
    let original_index = index_of(original);
    let updated_index = index_of(updated);

    let mut deleted = Vec::new();
    let mut deleted_set = HashSet::new();
    for (ix, orig) in original.iter().enumerate() {
        if updated_index.contains_key(orig) {
            continue;
        }

        deleted.push(ix);
        deleted_set.insert(ix);
    }

    let inserted = updated
        .iter()
        .enumerate()
        .filter(|(_, new)| !original_index.contains_key(new))
        .map(|(ix, _)| ix)
        .collect::<Vec<_>>();

    let mut moved = BTreeMap::new();
    // destinations already claimed by a move
    let mut moved_set = HashSet::new();
    let mut unmoved = Vec::new();

    for (previous_ix, orig) in original.iter().enumerate() {
        if deleted_set.contains(&previous_ix) {
            continue;
        }

        if let Some(&current_ix) = updated_index.get(orig) {
            // first survivor scanned wins a shared destination
            if current_ix != previous_ix && moved_set.insert(current_ix) {
                moved.insert(previous_ix, current_ix);
            } else {
                unmoved.push(current_ix);
            }
        }
    }

    tracing::debug!(
        original = original.len(),
        updated = updated.len(),
        deleted = deleted.len(),
        inserted = inserted.len(),
        moved = moved.len(),
        unmoved = unmoved.len(),
        "computed element diff"
    );

    ElementDiff::new(
        deleted,
        inserted,
        moved,
        unmoved,
        original.len(),
        updated.len(),
    )
}

/// Compute differences between two sequences of elements using a custom identifier.
///
/// Both sequences are mapped through `identifier` and compared with [`diff`], positions in the
/// result refer to the element sequences.
///
/// E.g.
/// ```
/// use element_diff::diff_by;
///
/// struct Row { id: u32, title: &'static str }
///
/// let old = [Row { id: 1, title: "one" }, Row { id: 2, title: "two" }];
/// let new = [Row { id: 2, title: "two, edited" }, Row { id: 1, title: "one" }];
///
/// let diff = diff_by(&old, &new, |row| row.id);
/// assert_eq!(diff.moved().len(), 2);
/// ```
pub fn diff_by<E, H, F>(original: &[E], updated: &[E], mut identifier: F) -> ElementDiff
where
    H: Hash + Eq,
    F: FnMut(&E) -> H,
{
    let original = original.iter().map(&mut identifier).collect::<Vec<_>>();
    let updated = updated.iter().map(&mut identifier).collect::<Vec<_>>();

    diff(&original, &updated)
}

// identifier -> last position it occurs at
fn index_of<T: Hash + Eq>(seq: &[T]) -> HashMap<&T, usize> {
    seq.iter().enumerate().map(|(ix, obj)| (obj, ix)).collect()
}
