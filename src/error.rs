use thiserror::Error;

/// Classified failure for a single input line.
///
/// Failures are never fatal to the batch; each one is reported next to the
/// line that produced it while the other lines keep resolving.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("malformed request URL")]
    MalformedRequestUrl(#[source] reqwest::Error),
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    #[error("network or decode failure")]
    NetworkOrDecode(#[source] reqwest::Error),
}

impl FetchError {
    pub fn classify(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::MalformedRequestUrl(err)
        } else if let Some(status) = err.status() {
            Self::HttpStatus(status.as_u16())
        } else {
            Self::NetworkOrDecode(err)
        }
    }
}
