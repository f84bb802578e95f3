use serde::Deserialize;

use gig_auth_types::token::ACCESS_TOKEN_TTL_SECS;
use gig_core::config::Config;

/// Gig service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct GigConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing access tokens.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 3000). Env var: `GIG_PORT`.
    #[serde(default = "default_port")]
    pub gig_port: u16,
    /// Access-token lifetime in seconds (default 7 days). Env var: `TOKEN_TTL_SECS`.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

fn default_port() -> u16 {
    3000
}

fn default_token_ttl_secs() -> u64 {
    ACCESS_TOKEN_TTL_SECS
}

impl Config for GigConfig {}
