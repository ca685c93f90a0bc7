use crate::domain::ports::time_service::TimeService;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Clone)]
pub struct TokioTimeService;

impl TokioTimeService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioTimeService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeService for TokioTimeService {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
