use serde::Deserialize;
use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "8000";
pub const DEFAULT_DELETE_TOKEN: &str = "secret";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: String,
    /// Shared secret callers must present to delete orders.
    pub delete_token: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let server_port = lookup("SERVER_PORT").unwrap_or_else(|| DEFAULT_PORT.into());
        server_port
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("invalid SERVER_PORT {server_port:?}: {e}"))?;
        let delete_token =
            lookup("DELETE_TOKEN").unwrap_or_else(|| DEFAULT_DELETE_TOKEN.into());
        if delete_token.is_empty() {
            anyhow::bail!("DELETE_TOKEN must not be empty");
        }
        Ok(Self {
            server_host,
            server_port,
            delete_token,
        })
    }
}
