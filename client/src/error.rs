//! Error taxonomy for the accounts API client.
//!
//! # Design
//! Three kinds, matching the three ways a call can go wrong: the request
//! never got a response (`Transport`), the response arrived but a payload
//! would not (de)serialize (`Decode`), or the server answered with a
//! non-success status (`Api`). `Api` keeps the server's literal body text
//! and displays it byte-for-byte, so callers can compare against exact wire
//! strings like `{"error_message":"invalid version"}`.

use thiserror::Error;

/// Errors returned by [`crate::AccountClient`] operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection failure — no usable response was obtained.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A payload failed to (de)serialize: a success-status body that is not
    /// a valid envelope, or a request body that could not be encoded.
    #[error("invalid JSON payload: {0}")]
    Decode(String),

    /// The server responded with a non-success status. `message` is the
    /// verbatim response body and is this error's entire `Display` output.
    #[error("{message}")]
    Api { status: u16, message: String },
}
