//! Entity stores, relations, and ranking for Cinegraph.
//!
//! This crate provides:
//! - [`EntityStore`] - Validated, id-assigning record storage
//! - [`Film`] / [`User`] - The two entity kinds and their field policies
//! - [`FriendshipGraph`] - Symmetric is-friend-of relation between users
//! - [`LikeIndex`] - Directed liked relation from users to films
//! - [`PopularityRanker`] - Read-side most-liked-films ordering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod film;
mod friendship;
mod likes;
mod ranking;
mod store;
mod user;

pub use film::{EARLIEST_RELEASE_DATE, Film};
pub use friendship::FriendshipGraph;
pub use likes::LikeIndex;
pub use ranking::PopularityRanker;
pub use store::{Entity, EntityStore};
pub use user::User;
