//! Error types used by the crate.

use thiserror::Error;

/// Bridge error type.
///
/// Every failed operation maps to exactly one of these variants, and every
/// variant has a stable wire code (see [`BridgeError::code`]) so channel hosts
/// can match on the failure kind without parsing messages.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The operation needs a foreground UI, but the call carried no foreground
    /// token.
    #[error("No activity available")]
    NoForeground,
    /// A required argument is missing, blank, or has the wrong shape.
    #[error("{0}")]
    InvalidArguments(String),
    /// The vendor application rejected or failed a call.
    #[error("{0}")]
    Vendor(#[from] VendorError),
}

impl BridgeError {
    /// Stable code identifying the error kind on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::NoForeground => "NO_ACTIVITY",
            BridgeError::InvalidArguments(_) => "INVALID_ARGUMENTS",
            BridgeError::Vendor(_) => "LOCUS_API_ERROR",
        }
    }
}

/// Failure reported by the vendor seam.
///
/// The bridge does not interpret these beyond passing the message through to
/// the channel host under the `LOCUS_API_ERROR` code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct VendorError {
    message: String,
}

impl VendorError {
    /// Creates an error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}
