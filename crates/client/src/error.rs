/// Failure talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Request could not be built or sent
    #[error("HTTP error: {0}")]
    Http(String),
    /// Response body did not match the expected shape
    #[error("parse error: {0}")]
    Parse(String),
    /// Backend unreachable
    #[error("connection error: {0}")]
    Connection(String),
    /// Transport gave up waiting
    #[error("timeout")]
    Timeout,
    /// Backend answered with a non-2xx status
    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_connect() {
            HttpError::Connection(err.to_string())
        } else if err.is_decode() {
            HttpError::Parse(err.to_string())
        } else {
            HttpError::Http(err.to_string())
        }
    }
}
