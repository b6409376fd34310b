use anyhow::Result;
use receipts::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        bind_address = %config.server.bind_address,
        item_description = ?config.validation.item_description,
        "starting receipt-points"
    );

    ServerBuilder::new()
        .with_store(InMemoryReceiptStore::new())
        .with_config(config)
        .serve()
        .await
}
