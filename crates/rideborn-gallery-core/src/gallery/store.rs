use std::collections::HashSet;

use rand::Rng;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::card::{CardId, GalleryState, PinSet};
use super::config::StorageKeys;
use super::order;
use crate::error::CoreError;
use crate::system::Persistence;

/// Persists and restores the gallery's card order and pin set.
///
/// The store keeps no gallery state of its own. Callers hold the current
/// [`GalleryState`], pass it to the transitions here, and render whatever
/// comes back. The only collaborator is the injected [`Persistence`] port.
///
/// Both values are stored as JSON arrays of strings:
///
/// ```text
/// gallery-order = ["post-3","post-1","post-2"]
/// pinned-cards  = ["post-1"]
/// ```
pub struct GalleryOrderStore<P> {
    storage: P,
    keys: StorageKeys,
}

impl<P: Persistence> GalleryOrderStore<P> {
    /// A store using the default `gallery-order` / `pinned-cards` keys.
    pub fn new(storage: P) -> Self {
        Self::with_keys(storage, StorageKeys::default())
    }

    pub fn with_keys(storage: P, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn storage(&self) -> &P {
        &self.storage
    }

    /// Rebuild the gallery state for the cards currently rendered.
    ///
    /// With no saved order this returns the empty default and the caller
    /// keeps its natural order. Otherwise `known` is laid out along the
    /// saved order (see [`order::arrange`]) with pinned cards moved to the
    /// front, and the pin set is narrowed to cards that still exist.
    ///
    /// Never fails: unreadable saved data is logged and treated as absent.
    pub fn restore(&self, known: &[CardId]) -> GalleryState {
        let Some(saved_order) = self.load_json::<Vec<CardId>>(&self.keys.order) else {
            return GalleryState::default();
        };
        let saved_pins: PinSet = self
            .load_json::<Vec<CardId>>(&self.keys.pinned)
            .unwrap_or_default()
            .into_iter()
            .collect();

        let known_set: HashSet<&CardId> = known.iter().collect();
        let arranged = order::arrange(&saved_order, known);
        let pinned: PinSet = saved_pins
            .into_iter()
            .filter(|id| known_set.contains(id))
            .collect();

        let dropped = saved_order.iter().filter(|id| !known_set.contains(id)).count();
        if dropped > 0 {
            debug!(dropped, "dropped saved cards that are no longer rendered");
        }

        GalleryState {
            order: order::pinned_first(&arranged, &pinned),
            pinned,
        }
    }

    /// Persist the display order exactly as given.
    ///
    /// Call this once a drag has been dropped on a valid target, never for
    /// intermediate moves or aborted drags.
    pub fn save_order(&mut self, order: &[CardId]) -> Result<(), CoreError> {
        let json = serde_json::to_string(order)?;
        self.storage.save(&self.keys.order, &json)?;
        debug!(key = %self.keys.order, cards = order.len(), "saved gallery order");
        Ok(())
    }

    /// Persist the pin set, replacing any previous one.
    pub fn save_pinned(&mut self, pinned: &PinSet) -> Result<(), CoreError> {
        let json = serde_json::to_string(pinned)?;
        self.storage.save(&self.keys.pinned, &json)?;
        debug!(key = %self.keys.pinned, cards = pinned.len(), "saved pinned cards");
        Ok(())
    }

    /// Persist order and pins together.
    ///
    /// If the pins cannot be written, the previous order value is put back
    /// so a later restore never pairs the new order with the old pins.
    pub fn save_state(&mut self, state: &GalleryState) -> Result<(), CoreError> {
        let previous_order = self.storage.load(&self.keys.order);
        self.save_order(&state.order)?;
        if let Err(e) = self.save_pinned(&state.pinned) {
            let rollback = match previous_order.as_deref() {
                Some(raw) => self.storage.save(&self.keys.order, raw),
                None => self.storage.remove(&self.keys.order),
            };
            if let Err(rollback_err) = rollback {
                warn!(key = %self.keys.order, "failed to roll back gallery order: {rollback_err}");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Pin `id` if it is unpinned, unpin it otherwise, then persist both
    /// order and pins.
    ///
    /// Pinning moves every pinned card to the front, keeping their relative
    /// order. Unpinning leaves the order alone unless the card sat in front
    /// of other pinned cards; then it steps back to the head of the unpinned
    /// group so pinned cards still lead.
    ///
    /// An `id` that is not part of `state.order` changes nothing, though the
    /// state is still written back.
    pub fn toggle_pin(
        &mut self,
        state: &GalleryState,
        id: &CardId,
    ) -> Result<GalleryState, CoreError> {
        let next = if state.order.contains(id) {
            let mut pinned = state.pinned.clone();
            if !pinned.remove(id) {
                pinned.insert(id.clone());
            }
            GalleryState {
                order: order::pinned_first(&state.order, &pinned),
                pinned,
            }
        } else {
            debug!(card = %id, "ignoring pin toggle for unknown card");
            state.clone()
        };
        self.save_state(&next)?;
        Ok(next)
    }

    /// Shuffle the unpinned cards, leaving the pinned ones in front in their
    /// current order.
    ///
    /// Nothing is persisted; call [`Self::save_order`] with the result once
    /// the shuffle animation has finished.
    pub fn shuffle<R: Rng + ?Sized>(&self, state: &GalleryState, rng: &mut R) -> Vec<CardId> {
        order::shuffle_unpinned(&state.order, &state.pinned, rng)
    }

    /// Forget the saved order and pins.
    ///
    /// In-memory state is untouched; the caller reloads the gallery from its
    /// source data afterwards.
    pub fn reset(&mut self) -> Result<(), CoreError> {
        for key in self.keys.all() {
            self.storage.remove(key)?;
        }
        debug!("reset gallery order and pins");
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.storage.load(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, "ignoring malformed saved gallery data: {e}");
                None
            }
        }
    }
}
