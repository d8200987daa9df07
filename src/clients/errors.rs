use rspotify::{ClientError, model::IdError};
use thiserror::Error;

/// Everything that can go wrong while talking to Spotify or the terminal.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP, auth or API failure reported by rspotify
    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    /// A URI or user id that rspotify could not parse
    #[error("Invalid Spotify identifier: {0}")]
    InvalidId(#[from] IdError),

    /// The API answered with something other than what was asked for
    #[error("Spotify API unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Reading a prompt answer or writing output failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
