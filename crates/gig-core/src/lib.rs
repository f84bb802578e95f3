//! Shared service plumbing: config loading, request ids,
//! tracing setup, serde helpers and sea-orm extensions.

pub mod config;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
