///  To run :
///  cargo r --example client_example
use coffee_client::CoffeeClient;
use coffee_hex::application::shop_service::CoffeeShopService;
use coffee_hex::inbound::http::{HttpServer, HttpServerConfig};
use coffee_repo::build_repo;
use reqwest::StatusCode;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Start server on ephemeral port with the in-memory ledger.
    let port = find_free_port();
    let addr = format!("http://127.0.0.1:{port}/");

    let repo = build_repo().await?;
    let service = CoffeeShopService::new(repo, "secret");
    let server = HttpServer::new(
        service,
        HttpServerConfig {
            host: "127.0.0.1".into(),
            port: port.to_string(),
        },
    )
    .await?;

    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let client = CoffeeClient::new(&addr)?;
    for (id, name) in client.menu().await? {
        let quote = client.price(id as i64).await?;
        println!("{id}: {name} {} {} (total {})", quote.price, quote.currency, quote.total);
    }

    for id in [1, 3, 1] {
        println!("{}", client.order(id, 1, true).await?);
    }
    println!("Orders: {:?}", client.list_orders().await?);

    match client.order(2, 1, false).await {
        Ok(_) => println!("Unpaid order was accepted?"),
        Err(err) => {
            let status = err.downcast_ref::<reqwest::Error>().and_then(|e| e.status());
            assert_eq!(status, Some(StatusCode::PAYMENT_REQUIRED));
            println!("Unpaid order rejected with {status:?}");
        }
    }

    println!("{}", client.delete_order(2, "secret").await?);
    println!("Orders after delete: {:?}", client.list_orders().await?);

    handle.abort();
    Ok(())
}
