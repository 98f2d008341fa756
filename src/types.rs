//! Common Types and Constants
//!
//! Shared data structures and policy constants used across the scheduler.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ==================== Policy Constants ====================

/// Starting ease factor for a freshly seeded word (classic SM-2 default)
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Ease factor never drops below this, no matter how many lapses
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Ease factor step applied on a correct answer
pub const EASE_GAIN: f64 = 0.1;

/// Ease factor step applied on an incorrect answer
pub const EASE_PENALTY: f64 = 0.2;

/// Interval (days) after the first correct answer in a streak
pub const FIRST_INTERVAL_DAYS: f64 = 1.0;

/// Interval (days) after the second consecutive correct answer
pub const SECOND_INTERVAL_DAYS: f64 = 6.0;

/// Longest interval the scheduler will ever emit (days)
pub const MAX_INTERVAL_DAYS: f64 = 365.0;

/// Memory strength ceiling
pub const MAX_MEMORY_STRENGTH: f64 = 100.0;

/// Below this strength a word with no streak still counts as NEW
pub const NEW_STRENGTH_THRESHOLD: f64 = 20.0;

/// Repetition streak at which a word leaves LEARNING
pub const REVIEWING_MIN_REPETITIONS: u32 = 3;

/// Interval (days) at which a strong word counts as MASTERED
pub const MASTERED_MIN_INTERVAL_DAYS: f64 = 21.0;

/// Minimum memory strength for MASTERED classification
pub const MASTERED_MIN_STRENGTH: f64 = 80.0;

// ==================== Word Status ====================

/// Lifecycle classification of a word, recomputed on every update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WordStatus {
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl Default for WordStatus {
    fn default() -> Self {
        Self::New
    }
}

impl WordStatus {
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "LEARNING" => Self::Learning,
            "REVIEWING" => Self::Reviewing,
            "MASTERED" => Self::Mastered,
            _ => Self::New,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Learning => "LEARNING",
            Self::Reviewing => "REVIEWING",
            Self::Mastered => "MASTERED",
        }
    }
}

// ==================== Word Progress ====================

/// Per-user, per-word scheduling state
///
/// A full snapshot: the scheduler consumes one and returns a replacement,
/// never a delta. Persistence is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProgress {
    /// Consecutive correct-answer streak; resets to 0 on a lapse
    pub repetitions: u32,
    /// Days until the next scheduled review
    pub interval: f64,
    /// SM-2 E-Factor, floored at [`MIN_EASE_FACTOR`]
    pub ease_factor: f64,
    /// Continuous confidence score in [0, 100]
    pub memory_strength: f64,
    /// When the word is next due
    pub next_review_at: DateTime<Utc>,
    pub status: WordStatus,
}

impl WordProgress {
    /// Seed state for a word's first-ever review
    pub fn seed(now: DateTime<Utc>) -> Self {
        Self {
            repetitions: 0,
            interval: FIRST_INTERVAL_DAYS,
            ease_factor: INITIAL_EASE_FACTOR,
            memory_strength: 0.0,
            next_review_at: now + Duration::days(1),
            status: WordStatus::New,
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!(WordStatus::from_str("LEARNING"), WordStatus::Learning);
        assert_eq!(WordStatus::from_str("reviewing"), WordStatus::Reviewing);
        assert_eq!(WordStatus::from_str("Mastered"), WordStatus::Mastered);
        assert_eq!(WordStatus::from_str("NEW"), WordStatus::New);
        assert_eq!(WordStatus::from_str(""), WordStatus::New);
        assert_eq!(WordStatus::from_str("garbage"), WordStatus::New);
    }

    #[test]
    fn test_status_as_str_roundtrip() {
        for status in [
            WordStatus::New,
            WordStatus::Learning,
            WordStatus::Reviewing,
            WordStatus::Mastered,
        ] {
            assert_eq!(WordStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn test_status_serde_labels() {
        assert_eq!(
            serde_json::to_string(&WordStatus::Mastered).unwrap(),
            "\"MASTERED\""
        );
        assert_eq!(
            serde_json::from_str::<WordStatus>("\"LEARNING\"").unwrap(),
            WordStatus::Learning
        );
    }

    #[test]
    fn test_seed_defaults() {
        let now = Utc::now();
        let seed = WordProgress::seed(now);
        assert_eq!(seed.repetitions, 0);
        assert_eq!(seed.interval, FIRST_INTERVAL_DAYS);
        assert_eq!(seed.ease_factor, INITIAL_EASE_FACTOR);
        assert_eq!(seed.memory_strength, 0.0);
        assert_eq!(seed.status, WordStatus::New);
        assert!(seed.next_review_at > now);
    }

    #[test]
    fn test_progress_serde_camel_case() {
        let now = Utc::now();
        let progress = WordProgress::seed(now);
        let json = serde_json::to_value(&progress).unwrap();
        assert!(json.get("easeFactor").is_some());
        assert!(json.get("memoryStrength").is_some());
        assert!(json.get("nextReviewAt").is_some());
        assert!(json.get("ease_factor").is_none());
    }

    #[test]
    fn test_constants() {
        assert!(MIN_EASE_FACTOR < INITIAL_EASE_FACTOR);
        assert!(EASE_PENALTY > EASE_GAIN);
        assert!(FIRST_INTERVAL_DAYS < SECOND_INTERVAL_DAYS);
        assert!(SECOND_INTERVAL_DAYS < MASTERED_MIN_INTERVAL_DAYS);
        assert!(MASTERED_MIN_INTERVAL_DAYS < MAX_INTERVAL_DAYS);
        assert!(MASTERED_MIN_STRENGTH < MAX_MEMORY_STRENGTH);
    }
}
