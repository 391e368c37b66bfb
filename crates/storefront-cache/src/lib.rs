//! Durable key-value storage for the storefront cart.
//!
//! Provides a small synchronous storage port ([`KvStore`]) with in-memory
//! and directory-backed implementations, plus a typed [`Cache`] that handles
//! JSON serialization.
//!
//! # Example
//!
//! ```
//! use storefront_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Draft {
//!     items: Vec<String>,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("cart:guest", &Draft { items: vec!["p1".into()] }).unwrap();
//!
//! // Retrieve a value
//! let draft: Option<Draft> = cache.get("cart:guest").unwrap();
//! assert_eq!(draft.unwrap().items, vec!["p1"]);
//!
//! // Delete a value
//! cache.delete("cart:guest").unwrap();
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
