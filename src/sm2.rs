//! SM-2 Scheduler Core
//!
//! Computes the next review state for one vocabulary item from the previous
//! state and a binary outcome. Deterministic, no side effects, no clock
//! reads: `now` is an explicit parameter.
//!
//! Policy (SM-2 variant with a binary quality signal):
//! - repetitions: streak of consecutive correct answers, reset on a lapse
//! - ease factor: +0.1 per correct answer, -0.2 per lapse, floored at 1.3
//! - interval: 1 day, 1 day, 6 days, then previous * ease factor
//! - memory strength: saturating 0-100 curve, see [`crate::strength`]

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::error::SrsError;
use crate::strength::next_strength;
use crate::types::{
    WordProgress, WordStatus, EASE_GAIN, EASE_PENALTY, FIRST_INTERVAL_DAYS,
    MASTERED_MIN_INTERVAL_DAYS, MASTERED_MIN_STRENGTH, MAX_INTERVAL_DAYS,
    MAX_MEMORY_STRENGTH, MIN_EASE_FACTOR, NEW_STRENGTH_THRESHOLD,
    REVIEWING_MIN_REPETITIONS, SECOND_INTERVAL_DAYS,
};

/// Compute the next scheduling state for one word
///
/// Takes a full snapshot and returns a full replacement; the input is never
/// mutated. Returns an error when `current` violates its invariants, since
/// that signals corrupted stored state rather than a user mistake.
pub fn update(
    current: &WordProgress,
    is_correct: bool,
    now: DateTime<Utc>,
) -> Result<WordProgress, SrsError> {
    validate(current)?;

    let repetitions = if is_correct { current.repetitions + 1 } else { 0 };
    let ease_factor = next_ease_factor(current.ease_factor, is_correct);
    let interval = next_interval(current.interval, repetitions, ease_factor);
    let memory_strength = next_strength(current.memory_strength, is_correct);
    let status = classify(repetitions, interval, memory_strength);

    debug!(
        is_correct,
        repetitions,
        interval,
        ease_factor,
        memory_strength,
        status = status.as_str(),
        "srs update"
    );

    Ok(WordProgress {
        repetitions,
        interval,
        ease_factor,
        memory_strength,
        next_review_at: next_review_at(now, interval),
        status,
    })
}

/// Reject out-of-range input up front; no partial computation happens after
fn validate(current: &WordProgress) -> Result<(), SrsError> {
    if !current.interval.is_finite() || current.interval <= 0.0 {
        return Err(SrsError::InvalidInterval(current.interval));
    }
    if !current.ease_factor.is_finite() || current.ease_factor < MIN_EASE_FACTOR {
        return Err(SrsError::InvalidEaseFactor(current.ease_factor));
    }
    if !current.memory_strength.is_finite()
        || !(0.0..=MAX_MEMORY_STRENGTH).contains(&current.memory_strength)
    {
        return Err(SrsError::InvalidMemoryStrength(current.memory_strength));
    }
    Ok(())
}

fn next_ease_factor(current: f64, is_correct: bool) -> f64 {
    if is_correct {
        current + EASE_GAIN
    } else {
        (current - EASE_PENALTY).max(MIN_EASE_FACTOR)
    }
}

/// Interval policy table, keyed on the new repetition count
///
/// The multiplicative branch rounds to whole days and is capped at one year.
fn next_interval(previous_interval: f64, repetitions: u32, ease_factor: f64) -> f64 {
    match repetitions {
        0 | 1 => FIRST_INTERVAL_DAYS,
        2 => SECOND_INTERVAL_DAYS,
        _ => (previous_interval * ease_factor)
            .round()
            .clamp(1.0, MAX_INTERVAL_DAYS),
    }
}

fn next_review_at(now: DateTime<Utc>, interval_days: f64) -> DateTime<Utc> {
    // whole-day intervals by construction, but go through seconds so a
    // fractional policy change would still schedule strictly in the future
    let seconds = (interval_days * 86_400.0).round().max(1.0) as i64;
    now + Duration::seconds(seconds)
}

/// Status is a pure function of (repetitions, interval, strength)
///
/// The threshold rules overlap, so they apply in precedence order:
/// NEW, then LEARNING, then MASTERED, then REVIEWING.
pub fn classify(repetitions: u32, interval: f64, memory_strength: f64) -> WordStatus {
    if repetitions == 0 && memory_strength < NEW_STRENGTH_THRESHOLD {
        WordStatus::New
    } else if repetitions < REVIEWING_MIN_REPETITIONS {
        WordStatus::Learning
    } else if interval >= MASTERED_MIN_INTERVAL_DAYS && memory_strength >= MASTERED_MIN_STRENGTH {
        WordStatus::Mastered
    } else {
        WordStatus::Reviewing
    }
}

// ==================== Tests ====================
