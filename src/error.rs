//! Crate error type / 错误类型

use thiserror::Error;

/// Search widget errors / 搜索组件错误
#[derive(Debug, Error)]
pub enum Error {
    /// Caller passed an argument outside the accepted range / 参数非法
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Configuration could not be loaded or saved / 配置错误
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
