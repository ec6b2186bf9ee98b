use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("setting {0} is already registered")]
    DuplicateName(String),
    #[error("unknown setting {0}")]
    UnknownSetting(String),
    #[error("{name} expects {expected}")]
    TypeMismatch { name: String, expected: &'static str },
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
