use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    tracing::info!(target: "bridge::migration", "Running database migrations.");
    cli::run_cli(rollup_bridge_migration::Migrator).await;
    tracing::info!(target: "bridge::migration", "Database migrations complete.")
}
