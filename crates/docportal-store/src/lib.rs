//! # docportal-store
//!
//! Persistence for per-user state: the favorites set and the recently
//! viewed list. Values are JSON documents stored under fixed keys in a
//! [`KeyValueStorage`], either on disk ([`FileStorage`]) or in memory
//! ([`MemoryStorage`]).

pub mod config;
pub mod favorites;
pub mod recents;
pub mod storage;

pub use config::StoreConfig;
pub use favorites::PersistentFavorites;
pub use recents::PersistentRecents;
pub use storage::{load_json, FileStorage, KeyValueStorage, MemoryStorage};
