use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::error::SdkError;

/// What the workflow endpoint answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowReceipt {
    pub status: u16,
    pub body: String,
}

impl WorkflowReceipt {
    /// The endpoint stored the record: 200 (synchronous run) or 202 (queued run)
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, 200 | 202)
    }
}

/// Client for a signed workflow-automation HTTP trigger.
///
/// The endpoint URL carries its access signature in the query string, so the
/// full URL is a secret and is never logged.
pub struct WorkflowClient {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl WorkflowClient {
    /// Create a client for the given trigger URL; `timeout` of `None` waits forever
    pub fn new(endpoint_url: &str, timeout: Option<Duration>) -> Result<Self, SdkError> {
        let endpoint = Url::parse(endpoint_url.trim())
            .map_err(|e| SdkError::configuration(format!("Invalid workflow endpoint URL: {}", e)))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SdkError::configuration(format!(
                "Workflow endpoint must use http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| SdkError::Network { source: e })?;

        Ok(Self {
            endpoint,
            http_client,
        })
    }

    /// Host part of the endpoint, safe to log
    pub fn endpoint_host(&self) -> &str {
        self.endpoint.host_str().unwrap_or("unknown")
    }

    /// POST one JSON record to the trigger.
    ///
    /// Any HTTP answer is returned as a receipt; only transport faults are errors.
    pub async fn submit<T: Serialize + ?Sized>(
        &self,
        record: &T,
    ) -> Result<WorkflowReceipt, SdkError> {
        let body = serde_json::to_vec(record)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!(
            host = %self.endpoint_host(),
            bytes = body.len(),
            "Posting record to workflow endpoint"
        );

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| SdkError::Network {
                source: e.without_url(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Ok(WorkflowReceipt { status, body })
    }
}
