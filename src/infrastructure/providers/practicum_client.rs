/// Review service client
///
/// Fetches homework statuses over HTTPS with an OAuth token.
use crate::domain::errors::{Malformed, PollError, PollResult};
use crate::domain::ports::homework_source::HomeworkSource;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub struct PracticumClient {
    http_client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, since: i64) -> PollResult<Value> {
        tracing::debug!("Fetching homework statuses since {}", since);

        let response = self
            .http_client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", since)])
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                "Review service returned status {}: {}",
                status.as_u16(),
                truncate(&body, 500)
            );
            return Err(PollError::Transport(format!(
                "review service returned HTTP {}",
                status.as_u16()
            )));
        }

        let body = response.text().await.map_err(request_error)?;
        serde_json::from_str(&body)
            .map_err(|e| PollError::MalformedResponse(Malformed::NotJson(e.to_string())))
    }
}

/// The URL carries `from_date`, so it is stripped to keep messages stable.
fn request_error(e: reqwest::Error) -> PollError {
    if e.is_builder() {
        return PollError::Internal(format!("could not build request: {}", e.without_url()));
    }

    let message = if e.is_timeout() {
        format!("request timed out: {}", e.without_url())
    } else if e.is_connect() {
        format!("connection failed: {}", e.without_url())
    } else {
        format!("network error: {}", e.without_url())
    };
    PollError::Transport(message)
}

fn truncate(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
