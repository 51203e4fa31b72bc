//! Outbound retrieval capability used by [`crate::fetch::FetchResource`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait TodoTransport: Send + Sync {
    async fn get(&self, locator: &str) -> Result<TransportResponse>;
}

pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoTransport for HttpTransport {
    async fn get(&self, locator: &str) -> Result<TransportResponse> {
        let res = self
            .http
            .get(locator)
            .send()
            .await
            .with_context(|| format!("GET {locator}"))?;
        let status = res.status().as_u16();
        let body = res
            .bytes()
            .await
            .with_context(|| format!("reading response body from {locator}"))?;
        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
