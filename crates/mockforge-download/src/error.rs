use thiserror::Error;

/// Errors emitted by the image download subsystem.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request to '{url}' failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("empty response body from '{0}'")]
    EmptyBody(String),
    #[error("requested {requested} images but provider allows at most {max}")]
    TooMany { requested: u32, max: u32 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
