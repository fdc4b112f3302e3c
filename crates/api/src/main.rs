use anyhow::Context;

use storefront_api::config::ServerConfig;
use storefront_inventory::InventoryLedger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ServerConfig::from_env();
    let app = storefront_api::app::build_app(InventoryLedger::seeded());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    let addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!("E-Commerce API running at http://{addr}");

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
