use sea_orm::Database;
use tracing::info;

use gig::config::GigConfig;
use gig::router::build_router;
use gig::state::AppState;
use gig_core::config::Config;
use gig_core::tracing::init_tracing;
use gig_migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = GigConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    let state = AppState::new(db, &config);

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.gig_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("gig service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
