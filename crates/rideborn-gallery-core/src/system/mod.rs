pub mod file;
pub mod persistence;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use file::FileStorage;
pub use persistence::{MemoryStorage, Persistence};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::LocalStorage;
