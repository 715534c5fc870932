//! Cinegraph - In-memory film/user relation core
//!
//! This crate re-exports both layers of the Cinegraph system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: cinegraph_storage    — Entity stores, friendship graph, likes, ranking
//! Layer 0: cinegraph_foundation — Identifiers, allocation, error taxonomy
//! ```
//!
//! A surrounding service wires the components once at process start:
//!
//! ```
//! use std::sync::Arc;
//! use cinegraph::foundation::Result;
//! use cinegraph::storage::{EntityStore, FriendshipGraph, LikeIndex, PopularityRanker};
//!
//! # fn main() -> Result<()> {
//! let users = Arc::new(EntityStore::new());
//! let films = Arc::new(EntityStore::new());
//! let friendships = FriendshipGraph::new(Arc::clone(&users));
//! let likes = Arc::new(LikeIndex::new(Arc::clone(&users), Arc::clone(&films)));
//! let ranker = PopularityRanker::new(Arc::clone(&films), Arc::clone(&likes));
//!
//! let top = ranker.top_films(10)?;
//! assert!(top.is_empty());
//! # let _ = friendships;
//! # Ok(())
//! # }
//! ```

pub use cinegraph_foundation as foundation;
pub use cinegraph_storage as storage;
