use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Invalid team index: {0}")]
    InvalidTeam(u8),

    #[error("Not enough players to analyze a match: found {found}, need {required}")]
    NotEnoughPlayers { found: usize, required: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Errors caused by the caller's input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, CoreError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
