// src/health/checker.rs
use super::validator::{check_body, check_status};
use super::CheckError;
use crate::config::Config;
use reqwest::{Client, Response};
use std::time::Instant;
use tracing::debug;

/// Runs the one GET request a process invocation is allowed, then validates it.
pub struct HealthChecker {
    config: Config,
    client: Client,
}

impl HealthChecker {
    pub fn new(config: Config) -> Result<Self, CheckError> {
        // Client timeout covers connect, headers and body.
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(CheckError::Client)?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch, then check status, then (if configured) the body.
    pub async fn check(&self) -> Result<(), CheckError> {
        let response = self.fetch().await?;
        let status = response.status().as_u16();

        check_status(&self.config.codes, status)?;

        if self.config.requires_body() {
            let body = response.bytes().await.map_err(CheckError::BodyRead)?;
            debug!("Read {} body bytes", body.len());
            check_body(&self.config.contain, &body)?;
        }

        debug!("Check passed for {}", self.config.url);
        Ok(())
    }

    async fn fetch(&self) -> Result<Response, CheckError> {
        let start = Instant::now();
        debug!(
            "GET {} (timeout {:?})",
            self.config.url,
            self.config.timeout()
        );

        let response = self
            .client
            .get(self.config.url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CheckError::Timeout {
                        secs: self.config.timeout_secs,
                        source: e,
                    }
                } else {
                    CheckError::Transport(e)
                }
            })?;

        debug!(
            "Received HTTP {} in {} ms",
            response.status(),
            start.elapsed().as_millis()
        );

        Ok(response)
    }
}
