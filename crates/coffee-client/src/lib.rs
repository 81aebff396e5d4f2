use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use coffee_types::domain::coffee::PriceQuote;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct CoffeeClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

#[derive(Clone)]
pub struct CoffeeClient {
    base: Url,
    client: reqwest::Client,
}

impl CoffeeClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<CoffeeClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(CoffeeClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    pub async fn menu(&self) -> anyhow::Result<BTreeMap<u32, String>> {
        let res = self
            .client
            .get(self.url("./")?)
            .send()
            .await?
            .error_for_status()?;
        let body: MenuResponse = res.json().await?;
        Ok(body.menu)
    }

    pub async fn describe(&self, id: i64) -> anyhow::Result<String> {
        let res = self
            .client
            .get(self.url(&format!("coffee/{id}"))?)
            .send()
            .await?
            .error_for_status()?;
        let body: DescriptionResponse = res.json().await?;
        Ok(body.description)
    }

    pub async fn price(&self, id: i64) -> anyhow::Result<PriceQuote> {
        let res = self
            .client
            .get(self.url(&format!("coffee/{id}/price"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn order(&self, id: i64, quantity: i64, payed: bool) -> anyhow::Result<String> {
        tracing::debug!(id, quantity, payed, "placing order");
        let res = self
            .client
            .post(self.url(&format!("coffee/{id}/order"))?)
            .query(&OrderQuery { quantity, payed })
            .send()
            .await?
            .error_for_status()?;
        let body: MessageResponse = res.json().await?;
        Ok(body.message)
    }

    pub async fn list_orders(&self) -> anyhow::Result<Vec<u32>> {
        let res = self
            .client
            .get(self.url("orders")?)
            .send()
            .await?
            .error_for_status()?;
        let body: OrdersResponse = res.json().await?;
        Ok(body.orders)
    }

    pub async fn delete_order(&self, order_number: i64, token: &str) -> anyhow::Result<String> {
        let res = self
            .client
            .delete(self.url(&format!("orders/{order_number}"))?)
            .json(&DeleteOrderRequest {
                id: token.to_string(),
            })
            .send()
            .await?
            .error_for_status()?;
        let body: MessageResponse = res.json().await?;
        Ok(body.message)
    }
}

impl CoffeeClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<CoffeeClient> {
        if let Some(client) = self.client {
            return Ok(CoffeeClient {
                base: self.base,
                client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(CoffeeClient {
            base: self.base,
            client,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MenuResponse {
    pub menu: BTreeMap<u32, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrdersResponse {
    pub orders: Vec<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeleteOrderRequest {
    pub id: String,
}

#[derive(Serialize, Debug)]
struct OrderQuery {
    quantity: i64,
    payed: bool,
}
