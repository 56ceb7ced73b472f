//! Error types for the TD Ameritrade API client.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// Every operation surfaces one of these variants; there is no retry or
/// recovery logic anywhere in the crate, errors always propagate to the
/// caller.
#[derive(Debug)]
pub enum AppError {
    /// Credential file missing, unreadable, or empty
    Config(String),
    /// Request was rejected with 401 Unauthorized
    Unauthorized,
    /// Request failed with a non-2xx status; carries the raw response body
    Request(StatusCode, String),
    /// Response had an unexpected shape while reshaping (e.g. missing keys)
    Parse(String),
    /// Response body was not valid JSON
    Json(serde_json::Error),
    /// Transport-level failure (connection, TLS, timeout)
    Http(reqwest::Error),
    /// Filesystem failure while reading credentials or dumping responses
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "config error: {msg}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Request(status, body) => {
                write!(f, "request failed with status {status}: {body}")
            }
            AppError::Parse(msg) => write!(f, "parse error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Http(e) => write!(f, "http error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(e) => Some(e),
            AppError::Http(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
