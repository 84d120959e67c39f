use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a gallery card: the CMS post id.
///
/// The store never looks inside it beyond equality and ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Cards marked "pinned". Iterates (and serializes) in sorted order.
pub type PinSet = BTreeSet<CardId>;

/// What the rendering layer holds between user actions: the display order
/// and the pinned cards.
///
/// Every transition the store hands back keeps pinned cards ahead of
/// unpinned ones (see [`GalleryState::is_partitioned`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryState {
    pub order: Vec<CardId>,
    pub pinned: PinSet,
}

impl GalleryState {
    pub fn new(order: Vec<CardId>, pinned: PinSet) -> Self {
        Self { order, pinned }
    }

    /// A never-customized gallery: cards in their natural order, none pinned.
    pub fn natural(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            order: cards.into_iter().collect(),
            pinned: PinSet::new(),
        }
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned.contains(id)
    }

    /// `true` when no pinned card comes after an unpinned one.
    pub fn is_partitioned(&self) -> bool {
        let first_unpinned = self
            .order
            .iter()
            .position(|id| !self.pinned.contains(id))
            .unwrap_or(self.order.len());
        self.order[first_unpinned..]
            .iter()
            .all(|id| !self.pinned.contains(id))
    }

    /// Number of leading cards that are pinned.
    pub fn pinned_prefix_len(&self) -> usize {
        self.order
            .iter()
            .take_while(|id| self.pinned.contains(*id))
            .count()
    }
}

/// Build a `Vec<CardId>` from string literals.
pub fn card_ids<I, S>(ids: I) -> Vec<CardId>
where
    I: IntoIterator<Item = S>,
    S: Into<CardId>,
{
    ids.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_serializes_as_bare_string() {
        let json = serde_json::to_string(&card_ids(["post-3", "post-1"])).unwrap();
        assert_eq!(json, r#"["post-3","post-1"]"#);
    }

    #[test]
    fn pin_set_lookup_by_str() {
        let pinned: PinSet = card_ids(["p2"]).into_iter().collect();
        let state = GalleryState::new(card_ids(["p2", "p1"]), pinned);
        assert!(state.is_pinned("p2"));
        assert!(!state.is_pinned("p1"));
    }

    #[test]
    fn partition_check() {
        let pinned: PinSet = card_ids(["a", "b"]).into_iter().collect();
        assert!(GalleryState::new(card_ids(["b", "a", "c"]), pinned.clone()).is_partitioned());
        assert!(!GalleryState::new(card_ids(["a", "c", "b"]), pinned.clone()).is_partitioned());
        assert_eq!(
            GalleryState::new(card_ids(["b", "a", "c"]), pinned).pinned_prefix_len(),
            2
        );
        assert!(GalleryState::default().is_partitioned());
    }
}
