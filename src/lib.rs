//! # srs-algo - Spaced-Repetition Scheduling
//!
//! Pure Rust scheduling core for vocabulary learning:
//!
//! - **SM-2 variant** - discrete interval / ease-factor / streak state
//! - **Memory strength** - continuous 0-100 confidence score
//! - **Review planning** - prioritized queues of due and overdue words
//!
//! The scheduler is a pure function over a full per-word snapshot: the
//! caller loads (or seeds) a [`WordProgress`], calls [`update`] with the
//! review outcome and an explicit `now`, persists the returned replacement,
//! and logs a [`ReviewEvent`] built from the before/after pair. No I/O, no
//! clock reads, no shared state; concurrent reviews of the same word must
//! be serialized by the persistence layer.
//!
//! ## Module structure
//!
//! - [`sm2`] - the `update()` scheduler core
//! - [`strength`] - saturating memory-strength curve
//! - [`planner`] - due/overdue classification and queue assembly
//! - [`stats`] - review history records and aggregate counters
//! - [`types`] - shared types and policy constants
//! - [`error`] - input-contract violations
//!
//! ## Usage example
//!
//! ```rust
//! use chrono::Utc;
//! use srs_algo::{update, ReviewEvent, WordProgress};
//!
//! let now = Utc::now();
//! let before = WordProgress::seed(now);
//! let after = update(&before, true, now)?;
//! let event = ReviewEvent::from_transition("word-1", &before, &after, true, 1500, now);
//! assert!(after.next_review_at > now);
//! # Ok::<(), srs_algo::SrsError>(())
//! ```

pub mod error;
pub mod planner;
pub mod sm2;
pub mod stats;
pub mod strength;
pub mod types;

pub use error::SrsError;
pub use planner::{
    build_review_queue, estimate_review_minutes, is_due, is_overdue, review_priority,
    review_type, ReviewCandidate, ReviewPriority, ReviewType, ScheduledReview,
};
pub use sm2::{classify, update};
pub use stats::{ReviewCounters, ReviewEvent};
pub use types::{WordProgress, WordStatus};
