use crate::application::services::error_cache::ErrorMessageCache;
use crate::domain::entities::{Homework, Verdict};
use crate::domain::errors::{PollError, PollResult};
use crate::domain::ports::message_sender::MessageSender;
use std::sync::Arc;

/// Formats notifications and hands them to the messaging channel.
///
/// Delivery failures stop here: they are logged and counted, never returned.
#[derive(Clone)]
pub struct Notifier {
    sender: Arc<dyn MessageSender>,
    chat_id: String,
}

impl Notifier {
    pub fn new(sender: Arc<dyn MessageSender>, chat_id: impl Into<String>) -> Self {
        Self {
            sender,
            chat_id: chat_id.into(),
        }
    }

    /// Notify about a status change.
    ///
    /// Fails with `UnknownVerdict` without sending anything when the status is
    /// not in the verdict table.
    pub async fn notify_change(&self, homework: &Homework) -> PollResult<()> {
        let verdict =
            Verdict::from_status(&homework.status).ok_or_else(|| PollError::UnknownVerdict {
                homework: homework.name.clone(),
                status: homework.status.clone(),
            })?;

        let text = format_status_change(&homework.name, verdict);
        metrics::counter!("homework_notifications_total", "kind" => "status_change").increment(1);
        self.dispatch(&text).await;
        Ok(())
    }

    /// Notify about a failure unless the same text was already sent.
    ///
    /// Returns whether a delivery was attempted.
    pub async fn notify_error(&self, sent_errors: &mut ErrorMessageCache, message: &str) -> bool {
        if !sent_errors.insert(message) {
            tracing::debug!("Suppressing repeated error notification: {}", message);
            metrics::counter!("homework_error_notifications_suppressed_total").increment(1);
            return false;
        }

        metrics::counter!("homework_notifications_total", "kind" => "error").increment(1);
        self.dispatch(message).await;
        true
    }

    /// Send text to the configured chat. Returns whether delivery succeeded.
    pub async fn dispatch(&self, text: &str) -> bool {
        match self.sender.send(&self.chat_id, text).await {
            Ok(()) => {
                tracing::info!(
                    "Delivered message via {} to chat {}",
                    self.sender.provider_name(),
                    self.chat_id
                );
                metrics::counter!("homework_deliveries_total", "result" => "success").increment(1);
                true
            }
            Err(e) => {
                tracing::error!(
                    "Failed to deliver message via {} to chat {}: {}",
                    self.sender.provider_name(),
                    self.chat_id,
                    e
                );
                metrics::counter!("homework_deliveries_total", "result" => "failure").increment(1);
                false
            }
        }
    }
}

pub fn format_status_change(name: &str, verdict: Verdict) -> String {
    format!("Status changed for \"{}\": {}", name, verdict.sentence())
}
