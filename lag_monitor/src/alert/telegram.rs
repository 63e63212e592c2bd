use crate::alert::{AlertNotifier, AlertRouting};
use crate::severity::Severity;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
}

impl TelegramNotifier {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("While building telegram client")?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    async fn send_to(&self, url: &str) -> Result<String, anyhow::Error> {
        let body = self
            .client
            .get(url)
            .send()
            .await
            .context("While sending telegram message")?
            .text()
            .await
            .context("While reading telegram response")?;

        Ok(body)
    }
}

/// Only spaces are escaped in `text`, everything else goes out as is.
pub fn send_message_url(api_url: &str, token: &str, chat_id: &str, text: &str) -> String {
    format!(
        "{api_url}/bot{token}/sendmessage?chat_id={chat_id}&text={}",
        text.replace(' ', "%20")
    )
}

#[async_trait]
impl AlertNotifier for TelegramNotifier {
    async fn send(&self, routing: &AlertRouting, severity: Severity, message: &str) {
        for chat_id in routing.recipients() {
            let url = send_message_url(&self.api_url, routing.token(), chat_id, message);

            match self.send_to(&url).await {
                Ok(response) => debug!("Telegram {severity} alert sent to {chat_id}: {response}"),
                Err(e) => warn!("Telegram {severity} alert to {chat_id} failed: {e:?}"),
            }
        }
    }
}
