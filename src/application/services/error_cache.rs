use std::collections::{HashSet, VecDeque};

/// Error notifications already delivered, used to suppress repeats.
///
/// With a capacity the oldest message is forgotten first. A capacity of 0
/// keeps every message.
#[derive(Debug, Clone)]
pub struct ErrorMessageCache {
    seen: HashSet<String>,
    order: VecDeque<String>,
    capacity: usize,
}

impl ErrorMessageCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            seen: HashSet::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(0)
    }

    pub fn contains(&self, message: &str) -> bool {
        self.seen.contains(message)
    }

    /// Returns `false` if the message was already present.
    pub fn insert(&mut self, message: &str) -> bool {
        if self.seen.contains(message) {
            return false;
        }

        if self.capacity > 0 && self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }

        self.seen.insert(message.to_string());
        self.order.push_back(message.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for ErrorMessageCache {
    fn default() -> Self {
        Self::unbounded()
    }
}
