use crate::domain::entities::{Homework, HomeworkId};
use std::collections::HashMap;

/// Last status seen per homework. Lives for the process lifetime.
#[derive(Debug, Default, Clone)]
pub struct StatusCache {
    statuses: HashMap<HomeworkId, String>,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &HomeworkId) -> Option<&str> {
        self.statuses.get(id).map(String::as_str)
    }

    /// True when the homework is new or its status differs from the cached one.
    pub fn is_changed(&self, homework: &Homework) -> bool {
        self.get(&homework.id) != Some(homework.status.as_str())
    }

    /// Pair every record with whether it needs a notification.
    ///
    /// Records repeating an id earlier in the same batch are compared against
    /// that earlier record, so one batch never flags the same transition twice.
    pub fn diff<'a>(&self, records: &'a [Homework]) -> Vec<(&'a Homework, bool)> {
        let mut pending: HashMap<&HomeworkId, &str> = HashMap::new();
        records
            .iter()
            .map(|homework| {
                let previous = pending
                    .get(&homework.id)
                    .copied()
                    .or_else(|| self.get(&homework.id));
                let changed = previous != Some(homework.status.as_str());
                pending.insert(&homework.id, homework.status.as_str());
                (homework, changed)
            })
            .collect()
    }

    /// Remember the status of a homework whose notification was processed.
    pub fn record(&mut self, homework: &Homework) {
        self.statuses
            .insert(homework.id.clone(), homework.status.clone());
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
