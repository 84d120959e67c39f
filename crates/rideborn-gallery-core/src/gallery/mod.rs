pub mod card;
pub mod config;
pub mod order;
pub mod store;

pub use card::{card_ids, CardId, GalleryState, PinSet};
pub use config::{StorageKeys, ORDER_KEY, PINNED_KEY};
pub use store::GalleryOrderStore;
