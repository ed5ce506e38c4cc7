//! Engine error type.

use thiserror::Error;

/// Errors raised by the Knock Out! engine.
///
/// Both kinds surface before or instead of play; once a game has started,
/// rolling and scoring cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnockOutError {
    /// A construction parameter was out of range (player count, die faces,
    /// sampling ranges, win threshold).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `play()` was called on a game that has already been played.
    #[error("game has already been played")]
    RepeatedPlayInvocation,
}

impl KnockOutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KnockOutError::invalid("player count must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: player count must be at least 1"
        );
        assert_eq!(
            KnockOutError::RepeatedPlayInvocation.to_string(),
            "game has already been played"
        );
    }
}
