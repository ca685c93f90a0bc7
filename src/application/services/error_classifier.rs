use crate::domain::errors::PollError;

/// Coarse classification of in-loop failures, used for logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    MalformedResponse,
    UnknownVerdict,
    Internal,
}

impl ErrorKind {
    pub fn of(error: &PollError) -> Self {
        match error {
            PollError::Transport(_) => ErrorKind::Transport,
            PollError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            PollError::UnknownVerdict { .. } => ErrorKind::UnknownVerdict,
            PollError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::UnknownVerdict => "unknown_verdict",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Render the user-facing notification text for a failure.
///
/// The text must be stable for a persisting failure, otherwise the error
/// message cache cannot suppress repeats.
pub fn user_message(error: &PollError) -> String {
    match error {
        PollError::Transport(detail) => format!("Review service is unreachable: {}", detail),
        PollError::MalformedResponse(malformed) => format!(
            "Review service returned an unexpected response: {}",
            malformed
        ),
        PollError::UnknownVerdict { homework, status } => format!(
            "Unknown review status \"{}\" for homework \"{}\"",
            status, homework
        ),
        PollError::Internal(detail) => format!("Program failure: {}", detail),
    }
}
