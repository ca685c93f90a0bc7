use crate::domain::errors::PollResult;
use async_trait::async_trait;
use serde_json::Value;

/// Remote review service.
///
/// Returns the raw decoded payload; shape checks happen in the validator.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch homework statuses changed since `since` (unix seconds)
    async fn fetch(&self, since: i64) -> PollResult<Value>;
}
