//! Error types for the book API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server returned an unexpected
//! status" — deleting an already-gone book is the common case. All other
//! non-2xx responses land in `HttpStatusError` with the raw status code and
//! body for debugging. `NetworkError` is produced by `Transport`
//! implementations, never by the parse methods themselves.

use std::fmt;

/// Errors returned by `BookClient` parse methods and `Transport` impls.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed — connection refused, DNS failure,
    /// interrupted body read.
    NetworkError(String),

    /// The server returned 404 — the requested book does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpStatusError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    ParseError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "network error: {msg}"),
            ApiError::NotFound => write!(f, "book not found"),
            ApiError::HttpStatusError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::ParseError(msg) => {
                write!(f, "malformed response body: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
