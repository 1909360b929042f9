use thiserror::Error;

use mockforge_download::DownloadError;
use mockforge_generate::GenerationError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Validation(String),
    #[error("core error: {0}")]
    Core(#[from] mockforge_core::Error),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("download error: {0}")]
    Download(#[from] DownloadError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
