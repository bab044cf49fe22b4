use thiserror::Error;

use crate::element::ElementId;

pub mod code;
pub mod formatter;

pub use code::ErrorCode;

/// elfilter統一エラー型
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid splitting pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// 表示用のエラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            FilterError::InvalidArgument(_) => ErrorCode::Val001,
            FilterError::InvalidPattern(_) => ErrorCode::Val002,
            FilterError::ElementNotFound(_) => ErrorCode::Mdl001,
            FilterError::InvalidModel(_) | FilterError::Json(_) => ErrorCode::Mdl002,
            FilterError::Config(_) | FilterError::Toml(_) => ErrorCode::Cfg001,
            FilterError::Prompt(_) => ErrorCode::Ui001,
            FilterError::Io(_) => ErrorCode::Io001,
        }
    }
}
