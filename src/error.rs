use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid client options: {0}")]
    InvalidOptions(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// True for failures of the network round trip itself (connection, status, body read).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Status { .. })
    }

    /// True when the payload arrived but could not be mapped onto the requested shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Json(_))
    }
}
