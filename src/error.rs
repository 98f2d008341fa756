use crate::types::MIN_EASE_FACTOR;

/// Contract violations in a stored [`WordProgress`](crate::WordProgress)
///
/// These indicate a persistence or prior-computation bug and are never
/// silently corrected. The clamps on ease factor and memory strength only
/// apply to scheduler output, not to input validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SrsError {
    #[error("invalid interval: {0} (must be a finite number of days > 0)")]
    InvalidInterval(f64),
    #[error("invalid ease factor: {0} (must be finite and >= {MIN_EASE_FACTOR})")]
    InvalidEaseFactor(f64),
    #[error("invalid memory strength: {0} (must be within [0, 100])")]
    InvalidMemoryStrength(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SrsError::InvalidInterval(-1.0);
        assert!(err.to_string().contains("invalid interval"));
        assert!(err.to_string().contains("-1"));

        let err = SrsError::InvalidEaseFactor(0.5);
        assert!(err.to_string().contains("1.3"));

        let err = SrsError::InvalidMemoryStrength(120.0);
        assert!(err.to_string().contains("[0, 100]"));
    }
}
