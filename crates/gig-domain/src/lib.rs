//! Domain types shared across gig crates.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod game;
pub mod pagination;
pub mod tag;
pub mod user;
