//! Create a superuser account.
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/gig \
//!     cargo run -p gig --bin create-superuser -- --email admin@example.com --password hunter22
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use sea_orm::Database;
use serde::Deserialize;
use tracing::info;

use gig::infra::db::DbUserRepository;
use gig::usecase::user::{CreateUserInput, CreateUserUseCase};
use gig_core::config::Config;
use gig_core::tracing::init_tracing;

#[derive(Parser)]
#[command(about = "Create a staff account with full catalogue access")]
struct Args {
    /// Login email; the domain part is lower-cased
    #[arg(long)]
    email: String,

    /// Plain-text password, at least 5 characters
    #[arg(long)]
    password: String,

    /// Display name
    #[arg(long, default_value = "")]
    name: String,
}

#[derive(Deserialize)]
struct SuperuserConfig {
    database_url: String,
}

impl Config for SuperuserConfig {}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = SuperuserConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let usecase = CreateUserUseCase {
        repo: DbUserRepository { db },
    };
    let user = usecase
        .execute(CreateUserInput {
            email: args.email,
            password: args.password,
            name: args.name,
            superuser: true,
        })
        .await?;

    info!(user_id = user.id, email = %user.email, "superuser created");
    Ok(())
}
