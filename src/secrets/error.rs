use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use std::fmt;
use thiserror::Error;

/// Shown whenever the command line does not name exactly one secret
pub const USAGE: &str = "You must pass in one argument in the format <bucket>/<key-path>";

/// Cause reported by the storage backend (or the SDK on its behalf)
///
/// The message is always a single line so every failure prints as one line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.code, .message))]
pub struct BackendError {
    pub code: Option<String>,
    pub message: String,
}

impl BackendError {
    pub fn new(code: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            code: code.map(str::to_string),
            message: single_line(&message.into()),
        }
    }

    /// Flatten an SDK request failure, keeping the service error code when there is one
    pub fn from_sdk<E, R>(err: &SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: fmt::Debug,
    {
        Self::new(err.code(), DisplayErrorContext(err).to_string())
    }

    /// Flatten any other error, including its source chain
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        Self::new(None, DisplayErrorContext(err).to_string())
    }
}

fn render(code: &Option<String>, message: &str) -> String {
    match code {
        Some(code) => format!("{code}: {message}"),
        None => message.to_string(),
    }
}

/// Join non-blank lines with "; "
fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure from a single object download, split by the step that failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    #[error("{0}")]
    Request(BackendError),

    #[error("{0}")]
    Body(BackendError),
}

#[derive(Debug, Error)]
pub enum SummonError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to load config: {0}")]
    Config(#[source] BackendError),

    #[error("HeadBucket failed: {source} {reference}")]
    Bucket {
        reference: String,
        #[source]
        source: BackendError,
    },

    #[error("GetObject failed: {source} {reference}")]
    Fetch {
        reference: String,
        #[source]
        source: BackendError,
    },

    #[error("Failed to read object: {0}")]
    Read(#[source] BackendError),

    #[error("Failed to write secret: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SummonError>;
