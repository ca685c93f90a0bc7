use thiserror::Error;

/// Shape violations found while validating a review service payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    #[error("response body is not valid JSON: {0}")]
    NotJson(String),
    #[error("response is not a JSON object")]
    NotAMapping,
    #[error("response has no \"homeworks\" key")]
    MissingKey,
    #[error("\"homeworks\" is not a list")]
    WrongType,
    #[error("homework #{index} is not a JSON object")]
    RecordNotAMapping { index: usize },
    #[error("homework #{index} has no \"{field}\" field")]
    MissingField { index: usize, field: &'static str },
    #[error("homework #{index} has a \"{field}\" field of the wrong type")]
    WrongFieldType { index: usize, field: &'static str },
}

/// Failures raised while fetching, validating or diffing one poll iteration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] Malformed),
    #[error("Unknown verdict \"{status}\" for homework \"{homework}\"")]
    UnknownVerdict { homework: String, status: String },
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PollResult<T> = Result<T, PollError>;

/// Failures of the messaging collaborator. Logged by the notifier, never escalated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Delivery transport error: {0}")]
    Transport(String),
    #[error("Delivery rejected with status {status}: {description}")]
    Rejected { status: u16, description: String },
}
