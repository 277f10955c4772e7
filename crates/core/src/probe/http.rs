// HTTP probe: native GET with a per-request deadline

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::Probe;
use crate::error::{HttpError, Result};

pub struct HttpProbe {
    endpoint: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl HttpProbe {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| HttpError::Request {
                url: endpoint.clone(),
                source,
            })?;

        Ok(Self {
            endpoint,
            timeout,
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, source: reqwest::Error) -> HttpError {
        let url = self.endpoint.clone();
        if source.is_timeout() {
            HttpError::Timeout {
                url,
                timeout: self.timeout,
            }
        } else if source.is_connect() {
            HttpError::Connect { url, source }
        } else {
            HttpError::Request { url, source }
        }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn send(&self) -> Result<String> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: the status is the failure, the body is only context
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        // Read the whole body so the sample covers the complete response
        let body = response.text().await.map_err(|e| self.classify(e))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Response received");
        Ok(body)
    }
}
