//! Pure ordering transitions over card identifiers.
//!
//! None of these touch storage. [`super::GalleryOrderStore`] wires them to
//! the persistence port.

use std::collections::HashSet;

use rand::Rng;

use super::card::{CardId, PinSet};

/// Stable partition: pinned cards first, then the rest, each group keeping
/// its relative order from `order`.
pub fn pinned_first(order: &[CardId], pinned: &PinSet) -> Vec<CardId> {
    let (mut front, back): (Vec<CardId>, Vec<CardId>) =
        order.iter().cloned().partition(|id| pinned.contains(id));
    front.extend(back);
    front
}

/// Lay the currently known cards out along a persisted order.
///
/// Persisted ids that are not known any more are dropped, repeated ids keep
/// their first position, and known cards missing from the persisted order
/// (added since the last save) follow in their natural order.
pub fn arrange(persisted: &[CardId], known: &[CardId]) -> Vec<CardId> {
    let known_set: HashSet<&CardId> = known.iter().collect();
    let mut seen: HashSet<&CardId> = HashSet::with_capacity(known.len());
    let mut arranged = Vec::with_capacity(known.len());

    for id in persisted {
        if known_set.contains(id) && seen.insert(id) {
            arranged.push(id.clone());
        }
    }
    for id in known {
        if seen.insert(id) {
            arranged.push(id.clone());
        }
    }
    arranged
}

/// In-place Fisher–Yates: for `i` from the last index down to 1, swap
/// element `i` with a uniformly chosen element at index `0..=i`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Keep pinned cards in place at the front and permute the rest.
pub fn shuffle_unpinned<R: Rng + ?Sized>(
    order: &[CardId],
    pinned: &PinSet,
    rng: &mut R,
) -> Vec<CardId> {
    let (mut front, mut back): (Vec<CardId>, Vec<CardId>) =
        order.iter().cloned().partition(|id| pinned.contains(id));
    fisher_yates(&mut back, rng);
    front.extend(back);
    front
}
