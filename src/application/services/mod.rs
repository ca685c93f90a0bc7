pub mod error_cache;
pub mod error_classifier;
pub mod notifier;
pub mod poller;
pub mod response_validator;
pub mod status_cache;

pub use error_cache::ErrorMessageCache;
pub use error_classifier::{user_message, ErrorKind};
pub use notifier::Notifier;
pub use poller::{CursorPolicy, IterationOutcome, PollCursor, PollState, Poller};
pub use response_validator::{parse_homework, parse_homeworks, validate_response};
pub use status_cache::StatusCache;
