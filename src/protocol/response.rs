//! Response definitions
//!
//! Represents the outcome of a command.

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    Error,
}

/// A response to render for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Optional payload (value for GET, message for ERROR)
    pub payload: Option<String>,
}

impl Response {
    /// Create an OK response with optional payload
    pub fn ok(payload: Option<String>) -> Self {
        Self {
            status: Status::Ok,
            payload,
        }
    }

    /// Create a NOT_FOUND response
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            payload: None,
        }
    }

    /// Create an ERROR response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            payload: Some(message.into()),
        }
    }
}
