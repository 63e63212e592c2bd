use crate::error::MonitorError;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::time::Duration;

pub const FETCH_CONNECT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Where lag reports come from. Returns the raw body so it can be logged verbatim.
#[async_trait]
pub trait LagReportSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, MonitorError>;
}

pub struct HttpLagReportSource {
    client: reqwest::Client,
}

impl HttpLagReportSource {
    pub fn new(request_timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(FETCH_CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()
            .context("While building lag report client")?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<String, anyhow::Error> {
        let body = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .context("While sending lag report request")?
            .error_for_status()
            .context("While checking lag report response status")?
            .text()
            .await
            .context("While reading lag report body")?;

        Ok(body)
    }
}

#[async_trait]
impl LagReportSource for HttpLagReportSource {
    async fn fetch(&self, url: &str) -> Result<String, MonitorError> {
        self.get(url).await.map_err(MonitorError::Fetch)
    }
}
