//! Poll loop
//!
//! Drives fetch → validate → diff → notify → sleep forever. Every failure
//! inside an iteration is classified and turned into at most one error
//! notification; nothing escapes the loop.

use crate::application::services::error_cache::ErrorMessageCache;
use crate::application::services::error_classifier::{user_message, ErrorKind};
use crate::application::services::notifier::Notifier;
use crate::application::services::response_validator::parse_homeworks;
use crate::application::services::status_cache::StatusCache;
use crate::domain::errors::PollResult;
use crate::domain::ports::homework_source::HomeworkSource;
use crate::domain::ports::time_service::TimeService;
use std::sync::Arc;
use std::time::Duration;

/// When the fetch window moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPolicy {
    /// Only after an iteration finished without error
    #[default]
    OnSuccess,
    /// After every iteration, failed or not
    Always,
}

impl std::str::FromStr for CursorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on_success" => Ok(CursorPolicy::OnSuccess),
            "always" => Ok(CursorPolicy::Always),
            other => Err(format!("unknown cursor policy: {}", other)),
        }
    }
}

/// Start of the time window requested on the next fetch (unix seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollCursor(i64);

impl PollCursor {
    pub fn new(since: i64) -> Self {
        Self(since)
    }

    pub fn since(&self) -> i64 {
        self.0
    }

    pub fn advance_to(&mut self, now: i64) {
        self.0 = now;
    }
}

/// Mutable state threaded through every iteration.
#[derive(Debug, Clone)]
pub struct PollState {
    pub cursor: PollCursor,
    pub status_cache: StatusCache,
    pub error_cache: ErrorMessageCache,
}

impl PollState {
    pub fn new(since: i64, error_cache_capacity: usize) -> Self {
        Self {
            cursor: PollCursor::new(since),
            status_cache: StatusCache::new(),
            error_cache: ErrorMessageCache::new(error_cache_capacity),
        }
    }
}

/// Result of a single iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationOutcome {
    Processed { fetched: usize, notified: usize },
    Failed(ErrorKind),
}

impl IterationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, IterationOutcome::Processed { .. })
    }
}

pub struct Poller {
    source: Arc<dyn HomeworkSource>,
    notifier: Notifier,
    time_service: Arc<dyn TimeService>,
    interval: Duration,
    cursor_policy: CursorPolicy,
}

impl Poller {
    pub fn new(
        source: Arc<dyn HomeworkSource>,
        notifier: Notifier,
        time_service: Arc<dyn TimeService>,
        interval: Duration,
        cursor_policy: CursorPolicy,
    ) -> Self {
        Self {
            source,
            notifier,
            time_service,
            interval,
            cursor_policy,
        }
    }

    /// Run forever. The next scheduled iteration is the only retry.
    pub async fn run(&self, mut state: PollState) {
        tracing::info!(
            "Homework poller started (interval {:?}, cursor policy {:?}, from_date {})",
            self.interval,
            self.cursor_policy,
            state.cursor.since()
        );

        loop {
            self.run_iteration(&mut state).await;
            self.time_service.sleep(self.interval).await;
        }
    }

    /// One iteration without the trailing sleep.
    pub async fn run_iteration(&self, state: &mut PollState) -> IterationOutcome {
        let started_at = self.time_service.now();

        let outcome = match self.poll_once(state).await {
            Ok((fetched, notified)) => {
                if notified > 0 {
                    tracing::info!("Sent {} status notifications ({} fetched)", notified, fetched);
                } else {
                    tracing::debug!("No status changes ({} fetched)", fetched);
                }
                IterationOutcome::Processed { fetched, notified }
            }
            Err(err) => {
                let kind = ErrorKind::of(&err);
                tracing::error!(kind = kind.as_str(), "Poll iteration failed: {}", err);
                let message = user_message(&err);
                self.notifier
                    .notify_error(&mut state.error_cache, &message)
                    .await;
                IterationOutcome::Failed(kind)
            }
        };

        let outcome_label = match outcome {
            IterationOutcome::Processed { .. } => "success",
            IterationOutcome::Failed(kind) => kind.as_str(),
        };
        metrics::counter!("homework_poll_iterations_total", "outcome" => outcome_label)
            .increment(1);

        if outcome.is_success() || self.cursor_policy == CursorPolicy::Always {
            state.cursor.advance_to(started_at);
        } else {
            tracing::debug!(
                "Keeping fetch cursor at {} after failed iteration",
                state.cursor.since()
            );
        }

        outcome
    }

    /// Fetch, validate and notify. Returns (fetched, notified).
    async fn poll_once(&self, state: &mut PollState) -> PollResult<(usize, usize)> {
        let payload = self.source.fetch(state.cursor.since()).await?;
        let homeworks = parse_homeworks(&payload)?;

        let changed: Vec<_> = state
            .status_cache
            .diff(&homeworks)
            .into_iter()
            .filter_map(|(homework, changed)| changed.then_some(homework))
            .collect();

        let mut notified = 0;
        for homework in changed {
            self.notifier.notify_change(homework).await?;
            state.status_cache.record(homework);
            notified += 1;
        }

        Ok((homeworks.len(), notified))
    }
}
