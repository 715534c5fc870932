//! Identifiers, identity allocation, and the error taxonomy for Cinegraph.
//!
//! This crate provides:
//! - [`FilmId`] / [`UserId`] - Typed entity identifiers
//! - [`IdAllocator`] - Atomic, strictly increasing id allocation
//! - [`Error`] - The three caller-visible failure kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod id;

pub use error::{Error, ErrorKind, Result};
pub use id::{FilmId, IdAllocator, UserId};
