//! Bounded memory of completed runs.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Run {
    prompt: String,
    answer: String,
}

/// The most recent `capacity` runs of one session.
///
/// The lock is only held while copying in or out, never across an await.
#[derive(Debug)]
pub struct RunHistory {
    capacity: usize,
    runs: Mutex<VecDeque<Run>>,
}

impl RunHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            runs: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Stores a completed run, evicting the oldest beyond capacity.
    pub fn record(&self, prompt: impl Into<String>, answer: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        let mut runs = self.lock();
        runs.push_back(Run {
            prompt: prompt.into(),
            answer: answer.into(),
        });
        while runs.len() > self.capacity {
            runs.pop_front();
        }
    }

    /// Replays stored runs as user/assistant message pairs, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.lock()
            .iter()
            .flat_map(|run| [Message::user(&run.prompt), Message::assistant(&run.answer)])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Run>> {
        self.runs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
