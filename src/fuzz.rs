use std::collections::HashSet;

use crate::{diff, Error};

/// Checks the invariants of [`diff`] for an arbitrary pair of byte sequences.
///
/// Duplicates are dropped first (keeping the first occurrence) so that replaying the diff must
/// reproduce `new` exactly.
pub fn fuzz(old: &[u8], new: &[u8]) -> Result<(), Error> {
    let old = unique(old);
    let new = unique(new);

    let d = diff(&old, &new);

    // every original position is accounted for exactly once
    assert_eq!(
        old.len(),
        d.deleted().len() + d.moved().len() + d.unmoved().len()
    );

    // and every updated position is reached exactly once
    let mut reached = d
        .inserted()
        .iter()
        .chain(d.moved().values())
        .chain(d.unmoved().iter())
        .copied()
        .collect::<Vec<_>>();
    reached.sort_unstable();
    assert_eq!((0..new.len()).collect::<Vec<_>>(), reached);

    assert_eq!(new, d.apply_to(&old, |ix| new[ix])?);

    Ok(())
}

fn unique(seq: &[u8]) -> Vec<u8> {
    let mut seen = HashSet::new();
    seq.iter().copied().filter(|b| seen.insert(*b)).collect()
}
