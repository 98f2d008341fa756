//! Memory Strength Curve
//!
//! Continuous 0-100 confidence score, updated alongside the discrete SM-2
//! counters. Gains saturate toward 100 (bigger steps when strength is low),
//! the lapse penalty grows with current strength so repeated failures
//! dominate any single gain.

use crate::types::MAX_MEMORY_STRENGTH;

/// Base gain for a correct answer, before the saturation bonus
const GAIN_BASE: f64 = 10.0;

/// Fraction of the remaining headroom added on a correct answer
const GAIN_HEADROOM_RATE: f64 = 0.3;

/// Base penalty for an incorrect answer
const PENALTY_BASE: f64 = 20.0;

/// Extra penalty per point of current strength
const PENALTY_STRENGTH_RATE: f64 = 0.1;

/// Gain applied to `current` strength on a correct answer
pub fn correct_gain(current: f64) -> f64 {
    GAIN_BASE + (MAX_MEMORY_STRENGTH - current) * GAIN_HEADROOM_RATE
}

/// Penalty applied to `current` strength on an incorrect answer
pub fn incorrect_penalty(current: f64) -> f64 {
    PENALTY_BASE + current * PENALTY_STRENGTH_RATE
}

/// Next memory strength for a single review outcome, clamped to [0, 100]
pub fn next_strength(current: f64, is_correct: bool) -> f64 {
    let next = if is_correct {
        current + correct_gain(current)
    } else {
        current - incorrect_penalty(current)
    };
    next.clamp(0.0, MAX_MEMORY_STRENGTH)
}
