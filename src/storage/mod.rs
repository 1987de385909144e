//! Persistent configuration history.
//!
//! # Error Handling Strategy
//!
//! History is a convenience, so storage problems never interrupt the session:
//!
//! - **Malformed persisted data**: logged at `warn` and treated as an empty history.
//!
//! - **Write failures** (disabled storage, full disk): logged at `error`; the in-memory
//!   list stays authoritative until the process exits.
//!
//! - **Backends** report failures through `anyhow::Result` with context, so the log
//!   line carries the file path or reason. Only [`HistoryStore`] decides to swallow them.

pub mod backend;
pub mod history;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use history::{HistoryStore, STORAGE_KEY, SaveOutcome, load_entries};
