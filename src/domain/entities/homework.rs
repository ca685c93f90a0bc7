use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque homework identifier. The review service sends either a number or a
/// string; both are normalised to their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HomeworkId(String);

impl HomeworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HomeworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single submitted homework as reported by the review service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    pub id: HomeworkId,
    pub name: String,
    pub status: String,
}

impl Homework {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: HomeworkId::new(id),
            name: name.into(),
            status: status.into(),
        }
    }
}
