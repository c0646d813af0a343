use std::path::PathBuf;

/// Errors returned when a placement is rejected. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board (expected 0..7)")]
    ColumnOutOfRange(usize),

    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised while reading a choice typed by a human.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NonNumericInput(String),

    #[error("column {0} is out of range, input must be a number 1-7")]
    InvalidColumnRange(i64),

    #[error("'{0}' is not a game mode, type 1 or 2")]
    InvalidMode(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display_is_one_based() {
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::ColumnOutOfRange(9).to_string(),
            "column 9 is outside the board (expected 0..7)"
        );
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::NonNumericInput("abc".to_string());
        assert_eq!(err.to_string(), "'abc' is not a number");

        let err = InputError::InvalidColumnRange(8);
        assert_eq!(
            err.to_string(),
            "column 8 is out of range, input must be a number 1-7"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("log.level is empty".to_string());
        assert_eq!(err.to_string(), "config validation error: log.level is empty");
    }
}
