//! Review History and Counters
//!
//! The scheduler returns full before/after snapshots; this module packages
//! them into the immutable history record the caller persists, plus the
//! simple aggregate counters tracked per user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::WordProgress;

/// Immutable record of one review trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvent {
    pub word_id: String,
    pub is_correct: bool,
    pub response_time_ms: i64,
    pub memory_strength_before: f64,
    pub memory_strength_after: f64,
    pub interval_before: f64,
    pub interval_after: f64,
    pub timestamp: DateTime<Utc>,
}

impl ReviewEvent {
    /// Build the history entry from the scheduler's before/after pair
    pub fn from_transition(
        word_id: impl Into<String>,
        before: &WordProgress,
        after: &WordProgress,
        is_correct: bool,
        response_time_ms: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            word_id: word_id.into(),
            is_correct,
            response_time_ms,
            memory_strength_before: before.memory_strength,
            memory_strength_after: after.memory_strength,
            interval_before: before.interval,
            interval_after: after.interval,
            timestamp,
        }
    }
}

/// Per-user aggregate review counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCounters {
    pub total_reviews: u64,
    pub correct_reviews: u64,
    pub incorrect_reviews: u64,
}

impl ReviewCounters {
    pub fn record(&mut self, is_correct: bool) {
        self.total_reviews += 1;
        if is_correct {
            self.correct_reviews += 1;
        } else {
            self.incorrect_reviews += 1;
        }
    }

    /// Fraction of correct reviews, 0.0 when nothing recorded yet
    pub fn accuracy(&self) -> f64 {
        if self.total_reviews == 0 {
            return 0.0;
        }
        self.correct_reviews as f64 / self.total_reviews as f64
    }
}
