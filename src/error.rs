//! Failure kinds for a single speculative request

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}
