use thiserror::Error;

/// Failure talking to an upstream player provider.
///
/// Never reaches an HTTP caller: providers turn it into fallback data.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT is not the correct format: {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
