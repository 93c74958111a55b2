//! Persistent state: keyed storage and the session/stats adapter

mod persistence;
mod store;

pub use persistence::{SESSION_KEY, STATS_KEY, load_session, load_stats, save_session, save_stats};
pub use store::{FileStore, KeyValueStore, MemoryStore};
