use crate::domain::errors::DeliveryError;
use async_trait::async_trait;

/// Messaging channel used to reach the user
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError>;

    /// Get the provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}
