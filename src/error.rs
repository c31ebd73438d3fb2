use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonShapeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error at line {line}: {message}")]
    JsonParse { line: usize, message: String },

    #[error("Invalid UTF-8 at line {line}")]
    InvalidUtf8 { line: usize },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Line {line} is not JSON-shaped")]
    NotJsonShaped { line: usize },
}

pub type Result<T> = std::result::Result<T, JsonShapeError>;
