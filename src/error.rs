use std::path::PathBuf;

/// Reasons a move is refused. The session is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    #[error("cell ({row}, {col}) is outside the grid")]
    InvalidPosition { row: usize, col: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("the game is over")]
    GameOver,
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
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::CellOccupied { row: 5, col: 0 }.to_string(),
            "cell (5, 0) is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the game is over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be in 1..=16".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be in 1..=16"
        );
    }

    #[test]
    fn test_file_read_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file missing.toml: not found"
        );
    }
}
