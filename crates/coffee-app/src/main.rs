use coffee_hex::application::shop_service::CoffeeShopService;
use coffee_hex::config::Config;
use coffee_hex::inbound::http::{HttpServer, HttpServerConfig};
use coffee_repo::build_repo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for SERVER_HOST / SERVER_PORT / DELETE_TOKEN when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = Config::from_env()?;
    if config.delete_token == coffee_hex::config::DEFAULT_DELETE_TOKEN {
        tracing::warn!("DELETE_TOKEN not set, using the built-in default");
    }

    let repo = build_repo().await?;
    let service = CoffeeShopService::new(repo, config.delete_token.clone());

    let server_cfg = HttpServerConfig {
        host: config.server_host.clone(),
        port: config.server_port.clone(),
    };

    let http = HttpServer::new(service, server_cfg).await?;
    http.run().await
}
