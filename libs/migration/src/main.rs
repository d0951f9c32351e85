//! Migration CLI for the catalog database.
//!
//! `DATABASE_URL=postgresql://... cargo run -p migration -- up`

use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
