use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::roster::errors::RosterError;

/// Where the raw roster CSV comes from. The manager polls through this seam
/// so refresh cycles can be driven without a live sheet.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_csv(&self) -> Result<String, RosterError>;
}

/// Fetches the published spreadsheet export over HTTP. No caching: every
/// refresh is a fresh GET against the configured URL.
pub struct SheetClient {
    client: Client,
    sheet_url: String,
}

impl SheetClient {
    pub fn new(sheet_url: String) -> Result<Self, RosterError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RosterError::Fetch(format!("Failed to build client: {}", e)))?;

        Ok(SheetClient { client, sheet_url })
    }
}

#[async_trait]
impl SheetSource for SheetClient {
    async fn fetch_csv(&self) -> Result<String, RosterError> {
        let response = self
            .client
            .get(&self.sheet_url)
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|e| RosterError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| RosterError::Fetch(e.to_string()))
    }
}
