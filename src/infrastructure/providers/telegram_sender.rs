/// Telegram Bot API delivery
///
/// Implements MessageSender by calling `sendMessage` for the configured bot.
use crate::domain::errors::DeliveryError;
use crate::domain::ports::message_sender::MessageSender;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

pub struct TelegramSender {
    http_client: Client,
    api_url: String,
    bot_token: String,
}

impl TelegramSender {
    pub fn new(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.into(),
            bot_token: bot_token.into(),
        })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_url.trim_end_matches('/'),
            self.bot_token
        )
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError> {
        let response = self
            .http_client
            .post(self.send_message_url())
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            // The URL embeds the bot token
            .map_err(|e| DeliveryError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .json::<BotApiResponse>()
            .await
            .map_err(|e| DeliveryError::Transport(e.without_url().to_string()));

        match body {
            Ok(body) if status.is_success() && body.ok => Ok(()),
            Ok(body) => Err(DeliveryError::Rejected {
                status: status.as_u16(),
                description: body
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            }),
            Err(_) if !status.is_success() => Err(DeliveryError::Rejected {
                status: status.as_u16(),
                description: "no description".to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    fn provider_name(&self) -> &'static str {
        "telegram"
    }
}
