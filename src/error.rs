use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    /// A base variant was asked for behavior only its subtypes provide.
    #[error("subclasses must implement the '{operation}' method")]
    Unimplemented { operation: &'static str },

    #[error("failed to write demo output")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
