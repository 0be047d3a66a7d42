use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw outcome of one HTTP round trip.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The network collaborator: a synchronous-per-call GET with query
/// parameters, returning status and body.
///
/// The client owns no transport details; anything satisfying this trait can
/// be injected, which is also how the tests assert request contents without
/// a network.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<HttpResponse, Error>;
}

/// Default transport backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// Wrap a caller-configured client (custom timeout, proxy, ...).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<HttpResponse, Error> {
        let res = self.http.get(url).query(params).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(HttpResponse { status, body })
    }
}
