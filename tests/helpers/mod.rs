#![allow(dead_code)]
use async_trait::async_trait;
use homework_notifier::domain::errors::{DeliveryError, PollResult};
use homework_notifier::domain::ports::homework_source::HomeworkSource;
use homework_notifier::domain::ports::message_sender::MessageSender;
use homework_notifier::domain::ports::time_service::TimeService;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Review service returning scripted responses in order, then empty batches.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<PollResult<Value>>>,
    requested_since: Mutex<Vec<i64>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<PollResult<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requested_since: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_since(&self) -> Vec<i64> {
        self.requested_since.lock().unwrap().clone()
    }
}

#[async_trait]
impl HomeworkSource for ScriptedSource {
    async fn fetch(&self, since: i64) -> PollResult<Value> {
        self.requested_since.lock().unwrap().push(since);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"homeworks": []})))
    }
}

/// Messaging channel that records every text it is asked to send.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send(&self, _chat_id: &str, text: &str) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(DeliveryError::Rejected {
                status: 400,
                description: "Bad Request: chat not found".to_string(),
            });
        }
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

/// Clock that starts at a fixed instant and moves only when slept on.
pub struct ManualClock {
    now: AtomicI64,
    sleeps: AtomicUsize,
}

impl ManualClock {
    pub fn starting_at(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
            sleeps: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn sleeps(&self) -> usize {
        self.sleeps.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TimeService for ManualClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        self.now
            .fetch_add(duration.as_secs() as i64, Ordering::SeqCst);
        // Let the test task observe progress between iterations
        tokio::task::yield_now().await;
    }

    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

pub fn homework(id: i64, name: &str, status: &str) -> Value {
    json!({"id": id, "name": name, "status": status})
}

pub fn batch(records: Vec<Value>) -> PollResult<Value> {
    Ok(json!({ "homeworks": records }))
}
