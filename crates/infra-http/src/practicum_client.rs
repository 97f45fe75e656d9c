// Practicum review API client (HomeworkApi adapter)

use async_trait::async_trait;
use homework_bot_core::config::BotConfig;
use homework_bot_core::port::{FetchError, HomeworkApi};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error};

/// HTTP client for `GET <endpoint>?from_date=<cursor>`
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &BotConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError> {
        debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, self.authorization())
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                let err = FetchError::Transport(e.to_string());
                error!(endpoint = %self.endpoint, error = %err, "Review API request failed");
                err
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            let err = FetchError::Transport(e.to_string());
            error!(endpoint = %self.endpoint, error = %err, "Reading review API body failed");
            err
        })?;

        decode_response(status, &body).map_err(|err| {
            error!(endpoint = %self.endpoint, error = %err, "Unusable review API response");
            err
        })
    }
}

/// Map status code and raw body to the decoded payload
fn decode_response(status: StatusCode, body: &[u8]) -> Result<Value, FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::RemoteStatus {
            status: status.as_u16(),
        });
    }

    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}
