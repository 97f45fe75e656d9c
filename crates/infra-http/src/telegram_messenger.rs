// Telegram Bot API messenger (Messenger adapter)

use async_trait::async_trait;
use homework_bot_core::config::BotConfig;
use homework_bot_core::port::{DeliveryError, Messenger};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotApiReply {
    ok: bool,
    description: Option<String>,
}

/// Sends messages to one chat through `sendMessage`
pub struct TelegramMessenger {
    client: reqwest::Client,
    send_url: String,
    chat_id: String,
}

impl TelegramMessenger {
    pub fn new(config: &BotConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            send_url: send_message_url(&config.telegram_api_url, &config.telegram_token),
            chat_id: config.telegram_chat_id.clone(),
        })
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(&self, text: &str) -> Result<(), DeliveryError> {
        debug!(chat_id = %self.chat_id, "Sending Telegram message");

        // The URL embeds the bot token; keep it out of error text
        let response = self
            .client
            .post(&self.send_url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| DeliveryError::Transport(e.without_url().to_string()))?;

        interpret_reply(status, &body)
    }
}

fn send_message_url(api_url: &str, token: &str) -> String {
    format!("{}/bot{}/sendMessage", api_url.trim_end_matches('/'), token)
}

/// Bot API answers `{"ok": bool, "description": ...}` for success and failure alike
fn interpret_reply(status: StatusCode, body: &[u8]) -> Result<(), DeliveryError> {
    let reply = serde_json::from_slice::<BotApiReply>(body).ok();

    if !status.is_success() {
        let description = reply
            .and_then(|r| r.description)
            .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());
        return Err(DeliveryError::Rejected {
            status: status.as_u16(),
            description,
        });
    }

    match reply {
        Some(BotApiReply { ok: true, .. }) => Ok(()),
        Some(BotApiReply {
            ok: false,
            description,
        }) => Err(DeliveryError::Api(
            description.unwrap_or_else(|| "ok=false without description".to_string()),
        )),
        None => Err(DeliveryError::Api("unreadable Bot API reply".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_url() {
        assert_eq!(
            send_message_url("https://api.telegram.org/", "123:abc"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
        assert_eq!(
            send_message_url("http://localhost:8081", "t"),
            "http://localhost:8081/bott/sendMessage"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(SendMessageRequest {
            chat_id: "-100200",
            text: "hi",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"chat_id": "-100200", "text": "hi"}));
    }

    #[test]
    fn test_reply_ok() {
        let body = br#"{"ok": true, "result": {"message_id": 1}}"#;
        assert_eq!(interpret_reply(StatusCode::OK, body), Ok(()));
    }

    #[test]
    fn test_reply_rejected_with_description() {
        let body = br#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#;
        assert_eq!(
            interpret_reply(StatusCode::BAD_REQUEST, body),
            Err(DeliveryError::Rejected {
                status: 400,
                description: "Bad Request: chat not found".to_string()
            })
        );
    }

    #[test]
    fn test_reply_rejected_plain_body() {
        assert_eq!(
            interpret_reply(StatusCode::BAD_GATEWAY, b"upstream down"),
            Err(DeliveryError::Rejected {
                status: 502,
                description: "upstream down".to_string()
            })
        );
    }

    #[test]
    fn test_reply_ok_false() {
        let body = br#"{"ok": false, "description": "Forbidden: bot was blocked by the user"}"#;
        assert_eq!(
            interpret_reply(StatusCode::OK, body),
            Err(DeliveryError::Api(
                "Forbidden: bot was blocked by the user".to_string()
            ))
        );
    }

    #[test]
    fn test_reply_unreadable() {
        assert!(matches!(
            interpret_reply(StatusCode::OK, b"not json"),
            Err(DeliveryError::Api(_))
        ));
    }
}
