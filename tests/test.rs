use std::collections::{BTreeMap, HashSet};

use element_diff::{diff, diff_by, ElementDiff, Error, SequenceDiff};
use proptest::prelude::*;

// Scenarios

#[test]
fn test_diff_scenarios() {
    // a b c d -> a c d b
    let d = diff(&["a", "b", "c", "d"], &["a", "c", "d", "b"]);
    assert!(d.deleted().is_empty());
    assert!(d.inserted().is_empty());
    assert_eq!(&BTreeMap::from([(1, 3), (2, 1), (3, 2)]), d.moved());
    assert_eq!([0], d.unmoved());

    // a b c -> b c a d
    let d = diff(&["a", "b", "c"], &["b", "c", "a", "d"]);
    assert!(d.deleted().is_empty());
    assert_eq!([3], d.inserted());
    assert_eq!(&BTreeMap::from([(0, 2), (1, 0), (2, 1)]), d.moved());
    assert!(d.unmoved().is_empty());

    // x x -> x
    let d = diff(&["x", "x"], &["x"]);
    assert!(d.deleted().is_empty());
    assert!(d.inserted().is_empty());
    assert_eq!(&BTreeMap::from([(1, 0)]), d.moved());
    assert_eq!([0], d.unmoved());
}

#[test]
fn test_diff_mixed() -> Result<(), Error> {
    let old = [10, 20, 30, 40, 50, 60];
    let new = [60, 20, 70, 40, 10, 80];

    let d = diff(&old, &new);

    assert_eq!([2, 4], d.deleted());
    assert_eq!([2, 5], d.inserted());
    assert_eq!(&BTreeMap::from([(0, 4), (5, 0)]), d.moved());
    assert_eq!([1, 3], d.unmoved());

    assert_eq!(new.to_vec(), d.apply_to(&old, |ix| new[ix])?);

    Ok(())
}

#[test]
fn test_sequence_diff() {
    let previous = vec!["a".to_string(), "b".to_string()];
    let current = vec!["b".to_string(), "c".to_string()];

    let d = previous.element_diff(&current);
    assert_eq!(d, diff(&previous, &current));
    assert_eq!([0], d.deleted());
    assert_eq!([1], d.inserted());
    assert_eq!(&BTreeMap::from([(1, 0)]), d.moved());

    let by_upper = previous.element_diff_by(&current, |s| s.to_uppercase());
    assert_eq!(d, by_upper);

    // every identifier collapses to the same key
    let d = previous.element_diff_by(&current, |s| s.len());
    assert!(d.deleted().is_empty());
    assert!(d.inserted().is_empty());
    assert_eq!(&BTreeMap::from([(0, 1)]), d.moved());
    assert_eq!([1], d.unmoved());
}

#[test]
fn test_diff_by_projection_keeps_positions() {
    let old = [(1, "one"), (2, "two"), (3, "three")];
    let new = [(3, "three"), (4, "four")];

    let d = diff_by(&old, &new, |&(id, _)| id);

    assert_eq!([0, 1], d.deleted());
    assert_eq!([1], d.inserted());
    assert_eq!(&BTreeMap::from([(2, 0)]), d.moved());
    assert_eq!(3, d.original_len());
    assert_eq!(2, d.updated_len());
}

#[test]
fn test_error_display() {
    assert_eq!(
        "collection holds 2 items but the diff was computed from 3",
        Error::CountMismatch {
            expected: 3,
            actual: 2
        }
        .to_string()
    );
    assert_eq!(
        "index 9 is out of bounds for a sequence of 4 items",
        Error::OutOfBounds { index: 9, len: 4 }.to_string()
    );
    assert_eq!("1 items could not be placed", Error::Unplaced(1).to_string());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> Result<(), serde_json::Error> {
    use element_diff::Animation;

    let d = diff(&[1, 2, 3], &[3, 1, 4]);
    let json = serde_json::to_string(&d)?;
    assert_eq!(d, serde_json::from_str::<ElementDiff>(&json)?);

    assert_eq!("100", serde_json::to_string(&Animation::Automatic)?);
    assert_eq!(Animation::Top, serde_json::from_str::<Animation>("3")?);

    Ok(())
}

// Properties

// sequences of distinct identifiers drawn from a shared pool, so that they overlap
fn unique_ids() -> impl Strategy<Value = Vec<u16>> {
    prop::sample::subsequence((0u16..40).collect::<Vec<_>>(), 0..=40).prop_shuffle()
}

fn updated_positions(d: &ElementDiff) -> Vec<usize> {
    let mut reached = d
        .inserted()
        .iter()
        .chain(d.moved().values())
        .chain(d.unmoved().iter())
        .copied()
        .collect::<Vec<_>>();
    reached.sort_unstable();
    reached
}

fn strictly_ascending(ixs: &[usize]) -> bool {
    ixs.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn diff_with_itself_moves_nothing(a in unique_ids()) {
        let d = diff(&a, &a);

        prop_assert!(d.is_empty());
        prop_assert_eq!((0..a.len()).collect::<Vec<_>>(), d.unmoved());
    }

    #[test]
    fn disjoint_sequences_replace_everything(a in unique_ids(), b in unique_ids()) {
        // shift `b` out of the pool of `a`
        let b = b.into_iter().map(|id| id + 100).collect::<Vec<_>>();
        let d = diff(&a, &b);

        prop_assert_eq!((0..a.len()).collect::<Vec<_>>(), d.deleted());
        prop_assert_eq!((0..b.len()).collect::<Vec<_>>(), d.inserted());
        prop_assert!(d.moved().is_empty());
        prop_assert!(d.unmoved().is_empty());
    }

    #[test]
    fn diff_partitions_both_sequences(a in unique_ids(), b in unique_ids()) {
        let d = diff(&a, &b);

        prop_assert_eq!(a.len(), d.deleted().len() + d.moved().len() + d.unmoved().len());
        prop_assert_eq!((0..b.len()).collect::<Vec<_>>(), updated_positions(&d));

        // no original position is both deleted and moved
        let deleted = d.deleted().iter().collect::<HashSet<_>>();
        prop_assert!(d.moved().keys().all(|k| !deleted.contains(k)));
    }

    #[test]
    fn applying_diff_reproduces_update(a in unique_ids(), b in unique_ids()) {
        let d = diff(&a, &b);

        prop_assert_eq!(b.clone(), d.apply_to(&a, |ix| b[ix])?);
    }

    #[test]
    fn duplicates_stay_well_formed(
        a in prop::collection::vec(0u8..6, 0..16),
        b in prop::collection::vec(0u8..6, 0..16),
    ) {
        let d = diff(&a, &b);

        prop_assert!(strictly_ascending(d.deleted()));
        prop_assert!(strictly_ascending(d.inserted()));
        prop_assert_eq!(a.len(), d.deleted().len() + d.moved().len() + d.unmoved().len());

        let targets = d.moved().values().collect::<HashSet<_>>();
        prop_assert_eq!(d.moved().len(), targets.len());

        prop_assert!(d.deleted().iter().all(|&ix| ix < a.len()));
        prop_assert!(d.inserted().iter().all(|&ix| ix < b.len()));
        prop_assert!(d.unmoved().iter().all(|&ix| ix < b.len()));

        // deterministic, and replaying never panics
        prop_assert_eq!(&d, &diff(&a, &b));
        let _ = d.apply_to(&a, |ix| b[ix]);
    }
}
