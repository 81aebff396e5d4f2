use coffee_client::CoffeeClient;
use coffee_hex::application::shop_service::CoffeeShopService;
use coffee_hex::config::Config;
use coffee_hex::inbound::http::{HttpServer, HttpServerConfig};
use coffee_repo::build_repo;
use coffee_types::domain::coffee::CATALOG;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn status_of(err: &anyhow::Error) -> Option<reqwest::StatusCode> {
    err.downcast_ref::<reqwest::Error>().and_then(|e| e.status())
}

// Wires the stack the same way the binary does, with config taken from a fixed lookup.
#[tokio::test]
async fn client_drives_the_configured_server() {
    let port = find_free_port().to_string();
    let config = Config::from_lookup(|key| match key {
        "SERVER_PORT" => Some(port.clone()),
        "DELETE_TOKEN" => Some("barista".into()),
        _ => None,
    })
    .expect("config");

    let repo = build_repo().await.expect("build repo");
    let service = CoffeeShopService::new(repo, config.delete_token.clone());
    let server = HttpServer::new(
        service,
        HttpServerConfig {
            host: config.server_host.clone(),
            port: config.server_port.clone(),
        },
    )
    .await
    .unwrap();
    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let client = CoffeeClient::new(&format!("http://127.0.0.1:{port}/")).unwrap();

    let menu = client.menu().await.unwrap();
    for coffee in CATALOG.iter() {
        assert_eq!(menu[&coffee.id], coffee.name);
        assert_eq!(client.describe(coffee.id as i64).await.unwrap(), coffee.description);
        let quote = client.price(coffee.id as i64).await.unwrap();
        assert_eq!(quote.total, quote.price * 1.1);
    }

    let err = client.price(5).await.unwrap_err();
    assert_eq!(status_of(&err), Some(reqwest::StatusCode::NOT_FOUND));

    for id in [1, 3, 1] {
        client.order(id, 1, true).await.unwrap();
    }
    let err = client.order(2, 1, false).await.unwrap_err();
    assert_eq!(status_of(&err), Some(reqwest::StatusCode::PAYMENT_REQUIRED));
    assert_eq!(client.list_orders().await.unwrap(), vec![1, 3, 1]);

    // the default token is not accepted once another one is configured
    let err = client.delete_order(2, "secret").await.unwrap_err();
    assert_eq!(status_of(&err), Some(reqwest::StatusCode::FORBIDDEN));

    client.delete_order(2, "barista").await.unwrap();
    assert_eq!(client.list_orders().await.unwrap(), vec![1, 1]);

    let err = client.delete_order(3, "barista").await.unwrap_err();
    assert_eq!(status_of(&err), Some(reqwest::StatusCode::NOT_FOUND));

    handle.abort();
}
