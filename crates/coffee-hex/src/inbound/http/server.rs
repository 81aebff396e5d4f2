use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    serve, Json, Router,
};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::application::shop_service::CoffeeShopService;
use crate::errors::AppError;
use coffee_types::domain::coffee::PriceQuote;
use coffee_types::ports::order_repository::OrderRepository;

#[derive(Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: String,
}

#[derive(Clone)]
pub struct HttpServer<R>
where
    R: OrderRepository,
{
    pub service: Arc<CoffeeShopService<R>>,
    pub config: HttpServerConfig,
}

fn default_quantity() -> i64 {
    1
}

fn default_payed() -> bool {
    true
}

/// Accepts the boolean spellings web forms and older clients send:
/// `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, `t`/`f`, `y`/`n`, in any case.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::custom(format!("invalid boolean {raw:?}"))),
    }
}

#[derive(Deserialize)]
pub struct OrderParams {
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default = "default_payed", deserialize_with = "lenient_bool")]
    pub payed: bool,
}

/// Body of a delete request: `{"id": "<token>"}`.
#[derive(Deserialize)]
pub struct AccessToken {
    pub id: String,
}

#[derive(Serialize)]
struct MenuResponse {
    menu: BTreeMap<u32, String>,
}

#[derive(Serialize)]
struct DescriptionResponse {
    description: &'static str,
}

#[derive(Serialize)]
struct OrdersResponse {
    orders: Vec<u32>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

impl<R> HttpServer<R>
where
    R: OrderRepository + Send + Sync + 'static,
{
    pub async fn new(
        service: CoffeeShopService<R>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }

    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        Router::new()
            .route("/", get(menu::<R>))
            .route("/health", get(health))
            .route("/coffee/{id}", get(describe_coffee::<R>))
            .route("/coffee/{id}/price", get(price_coffee::<R>))
            .route("/coffee/{id}/order", post(place_order::<R>))
            .route("/orders", get(list_orders::<R>))
            .route("/orders/{order_number}", delete(delete_order::<R>))
            .layer(trace_layer)
            .with_state(self.service.clone())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("starting server on {}", listener.local_addr()?);
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (axum::http::StatusCode, Json<serde_json::Value>) {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn menu<R>(State(service): State<Arc<CoffeeShopService<R>>>) -> Json<MenuResponse>
where
    R: OrderRepository + Send + Sync + 'static,
{
    Json(MenuResponse {
        menu: service.get_menu(),
    })
}

async fn describe_coffee<R>(
    State(service): State<Arc<CoffeeShopService<R>>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DescriptionResponse>, AppError>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let Path(id) = path?;
    let description = service.describe_coffee(id)?;
    Ok(Json(DescriptionResponse { description }))
}

async fn price_coffee<R>(
    State(service): State<Arc<CoffeeShopService<R>>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<PriceQuote>, AppError>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let Path(id) = path?;
    Ok(Json(service.price_coffee(id)?))
}

async fn place_order<R>(
    State(service): State<Arc<CoffeeShopService<R>>>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<OrderParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let Path(id) = path?;
    let Query(params) = query?;
    service
        .place_order(id, params.quantity, params.payed)
        .await?;
    Ok(Json(MessageResponse {
        message: "Your coffee has been ordered",
    }))
}

async fn list_orders<R>(
    State(service): State<Arc<CoffeeShopService<R>>>,
) -> Result<Json<OrdersResponse>, AppError>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let orders = service.list_orders().await?;
    Ok(Json(OrdersResponse { orders }))
}

async fn delete_order<R>(
    State(service): State<Arc<CoffeeShopService<R>>>,
    path: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError>
where
    R: OrderRepository + Send + Sync + 'static,
{
    let Path(order_number) = path?;
    // A missing or unreadable token is just a wrong token.
    let token = serde_json::from_slice::<AccessToken>(&body)
        .map(|t| t.id)
        .unwrap_or_default();
    service.delete_order(order_number, &token).await?;
    Ok(Json(MessageResponse {
        message: "Your order has been deleted",
    }))
}
