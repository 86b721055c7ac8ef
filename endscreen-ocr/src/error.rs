use std::fmt;

/// Reasons an `extract` invocation is rejected before any output is produced.
#[derive(Debug)]
pub enum ExtractError {
    /// No `--input` flag followed by a non-empty value.
    MissingInput,
    /// The `--input` value is not valid JSON.
    InvalidInput(serde_json::Error),
}

impl ExtractError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingInput => "Missing --input",
            Self::InvalidInput(_) => "Invalid JSON input",
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingInput => None,
            Self::InvalidInput(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidInput(error)
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
