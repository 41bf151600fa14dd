use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use thiserror::Error;

use crate::config::ReportConfig;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to post to {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} answered {status}")]
    Status { endpoint: String, status: StatusCode },
}

/// Body posted to the report endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    pub logfile: String,
    pub appname: String,
    pub zone: String,
    pub logsize: String,
    pub loginfo: String,
}

/// Posts filtered logs to a collection server
#[derive(Debug, Clone)]
pub struct Reporter {
    client: reqwest::Client,
    endpoint: String,
}

impl Reporter {
    /// `api_server` is `host[:port][/path]`; a URL with a scheme is used as is
    pub fn new(api_server: &str, config: &ReportConfig) -> Result<Self, ReportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ReportError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint_url(api_server),
        })
    }

    /// Send one report, printing the server's reply or the failure.
    ///
    /// Only HTTP 200 counts as success. There are no retries.
    pub async fn report(
        &self,
        app_name: &str,
        zone: &str,
        log_size: &str,
        file_name: &str,
        filtered_text: &str,
    ) -> bool {
        let payload = ReportPayload {
            logfile: file_name.to_string(),
            appname: app_name.to_string(),
            zone: zone.to_string(),
            logsize: log_size.to_string(),
            loginfo: filtered_text.to_string(),
        };

        match self.send(&payload).await {
            Ok(body) => {
                println!("{body}");
                true
            }
            Err(e) => {
                tracing::error!("Report failed: {e}");
                println!("post api server err {}: {e}", self.endpoint);
                false
            }
        }
    }

    /// Post the payload and return the response body on HTTP 200
    pub async fn send(&self, payload: &ReportPayload) -> Result<String, ReportError> {
        let body = serde_json::to_vec(payload)?;

        tracing::debug!("Posting {} bytes to {}", body.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| ReportError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ReportError::Status {
                endpoint: self.endpoint.clone(),
                status,
            });
        }

        let text = response.text().await.map_err(|source| ReportError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        tracing::info!("Report accepted by {}", self.endpoint);
        Ok(text)
    }
}

fn endpoint_url(api_server: &str) -> String {
    if api_server.starts_with("http://") || api_server.starts_with("https://") {
        api_server.to_string()
    } else {
        format!("http://{api_server}")
    }
}
