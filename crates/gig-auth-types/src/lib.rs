//! Auth types shared across gig crates.
//!
//! Provides JWT issuing/validation and the bearer-token `Identity` extractor.

pub mod identity;
pub mod token;
