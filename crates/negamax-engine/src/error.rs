//! Errors raised while configuring a searcher.

/// Errors from validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A move generator was supplied without a way to reverse its moves.
    #[error("move generator configured without unmake_move")]
    MissingUnmakeMove,
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingUnmakeMove;
        assert_eq!(
            format!("{err}"),
            "move generator configured without unmake_move"
        );
    }
}
