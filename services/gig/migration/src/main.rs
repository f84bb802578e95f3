use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(gig_migration::Migrator).await;
}
