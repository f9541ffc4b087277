use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    Url(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with {status}")]
    Status { status: StatusCode, url: String },

    #[error("cannot decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;
