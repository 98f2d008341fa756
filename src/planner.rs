//! Review Planning
//!
//! Turns per-word scheduling state into a prioritized review queue:
//! due/overdue classification, review priority and type, per-item duration
//! estimates, and queue assembly. Pure functions over an explicit `now`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::WordProgress;

/// Overdue grace period before a word escalates to URGENT
const URGENT_OVERDUE_DAYS: i64 = 1;

/// Window ahead of the due date that still counts as MEDIUM priority
const MEDIUM_LOOKAHEAD_DAYS: i64 = 3;

/// Below this strength a review counts as reinforcement rather than maintenance
const REINFORCEMENT_STRENGTH_THRESHOLD: f64 = 60.0;

/// Base duration of a single review (minutes)
const BASE_REVIEW_MINUTES: f64 = 2.0;

// ==================== Classification ====================

/// Urgency bucket for a scheduled review
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// What kind of review session an item needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewType {
    /// First or second exposure to the word
    Initial,
    /// Word lapsed after earlier reviews
    Recovery,
    /// Weak memory that needs shoring up
    Reinforcement,
    /// Routine review of a well-known word
    Maintenance,
}

/// A word offered to the planner, with its review history count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCandidate {
    pub word_id: String,
    pub progress: WordProgress,
    pub total_reviews: u32,
}

/// One entry of the assembled review queue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledReview {
    pub word_id: String,
    pub scheduled_for: DateTime<Utc>,
    pub priority: ReviewPriority,
    pub review_type: ReviewType,
    pub estimated_minutes: u32,
    pub memory_strength: f64,
}

/// True when the word's review date has arrived
pub fn is_due(progress: &WordProgress, now: DateTime<Utc>) -> bool {
    progress.next_review_at <= now
}

/// True when the word is overdue by more than the grace period
pub fn is_overdue(progress: &WordProgress, now: DateTime<Utc>) -> bool {
    progress.next_review_at < now - Duration::days(URGENT_OVERDUE_DAYS)
}

/// Priority of a review relative to `now`
pub fn review_priority(next_review_at: DateTime<Utc>, now: DateTime<Utc>) -> ReviewPriority {
    let late = now - next_review_at;
    if late > Duration::days(URGENT_OVERDUE_DAYS) {
        ReviewPriority::Urgent
    } else if late >= Duration::zero() {
        ReviewPriority::High
    } else if late > -Duration::days(MEDIUM_LOOKAHEAD_DAYS) {
        ReviewPriority::Medium
    } else {
        ReviewPriority::Low
    }
}

/// Review type from the word's state and history
pub fn review_type(progress: &WordProgress, total_reviews: u32) -> ReviewType {
    if total_reviews <= 1 {
        ReviewType::Initial
    } else if progress.repetitions == 0 {
        ReviewType::Recovery
    } else if progress.memory_strength < REINFORCEMENT_STRENGTH_THRESHOLD {
        ReviewType::Reinforcement
    } else {
        ReviewType::Maintenance
    }
}

/// Rough time budget for reviewing one word (minutes, at least 1)
pub fn estimate_review_minutes(progress: &WordProgress, total_reviews: u32) -> u32 {
    let mut minutes = BASE_REVIEW_MINUTES;
    if progress.memory_strength < 30.0 {
        minutes += 3.0;
    } else if progress.memory_strength > 80.0 {
        minutes -= 1.0;
    }
    if total_reviews < 3 {
        minutes *= 1.2;
    }
    minutes.round().max(1.0) as u32
}

// ==================== Queue Assembly ====================

/// Build a prioritized review queue from candidate words
///
/// Sorted by priority (urgent first), ties broken by scheduled time
/// ascending, truncated to `max_items`.
pub fn build_review_queue(
    candidates: &[ReviewCandidate],
    now: DateTime<Utc>,
    max_items: usize,
) -> Vec<ScheduledReview> {
    let mut queue: Vec<ScheduledReview> = candidates
        .iter()
        .map(|c| ScheduledReview {
            word_id: c.word_id.clone(),
            scheduled_for: c.progress.next_review_at,
            priority: review_priority(c.progress.next_review_at, now),
            review_type: review_type(&c.progress, c.total_reviews),
            estimated_minutes: estimate_review_minutes(&c.progress, c.total_reviews),
            memory_strength: c.progress.memory_strength,
        })
        .collect();

    queue.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.scheduled_for.cmp(&b.scheduled_for))
    });
    queue.truncate(max_items);

    debug!(candidates = candidates.len(), queued = queue.len(), "review queue built");
    queue
}

// ==================== Tests ====================
