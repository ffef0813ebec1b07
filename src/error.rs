use clashtrack_shared::CocApiError;
use thiserror::Error;
use tracing_appender::rolling::InitError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Clash of Clans API error: {0}")]
    Api(#[from] CocApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup error: {0}")]
    Logging(#[from] InitError),
}
