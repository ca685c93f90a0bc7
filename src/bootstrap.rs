use crate::application::services::{Notifier, PollState, Poller};
use crate::config::Config;
use crate::domain::ports::homework_source::HomeworkSource;
use crate::domain::ports::message_sender::MessageSender;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::providers::{PracticumClient, TelegramSender};
use crate::infrastructure::runtime::tokio::TokioTimeService;
use anyhow::Context;
use std::sync::Arc;

/// Wire the poller with the production review service, Telegram and tokio clock.
pub fn build_poller(config: &Config) -> anyhow::Result<(Poller, PollState)> {
    let source: Arc<dyn HomeworkSource> = Arc::new(
        PracticumClient::new(
            config.practicum_endpoint.clone(),
            config.practicum_token.clone(),
            config.http_timeout,
        )
        .context("Failed to build review service HTTP client")?,
    );
    tracing::info!("Review service client targets {}", config.practicum_endpoint);

    let sender: Arc<dyn MessageSender> = Arc::new(
        TelegramSender::new(
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
            config.http_timeout,
        )
        .context("Failed to build Telegram HTTP client")?,
    );

    let time_service: Arc<dyn TimeService> = Arc::new(TokioTimeService::new());

    let since = config.from_date.unwrap_or_else(|| time_service.now());
    let state = PollState::new(since, config.error_cache_capacity);

    let poller = Poller::new(
        source,
        Notifier::new(sender, config.telegram_chat_id.clone()),
        time_service,
        config.retry_interval,
        config.cursor_policy,
    );

    Ok((poller, state))
}
