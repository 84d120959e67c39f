//! Order, pin and shuffle state for the RIDE BORN photo gallery.
//!
//! [`GalleryOrderStore`] keeps a gallery's card order and pinned cards in a
//! key-value [`Persistence`] backend and enforces one rule on every
//! transition: pinned cards come first.

pub mod error;
pub mod gallery;
pub mod site;
pub mod system;

pub use error::CoreError;
pub use gallery::{CardId, GalleryOrderStore, GalleryState, PinSet, StorageKeys};
pub use site::CardSource;
pub use system::{FileStorage, MemoryStorage, Persistence};
