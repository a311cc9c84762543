use serde_json::{json, Value};

use crate::error::BridgeError;

/// Result of dispatching a single method call.
#[derive(Debug)]
pub enum Outcome {
    /// The operation completed and produced this value.
    Success(Value),
    /// The operation name is not part of the bridge contract.
    NotImplemented,
    /// The operation failed.
    Failure(BridgeError),
}

impl Outcome {
    /// Serializes the outcome into the shape channel hosts forward to the UI
    /// layer.
    ///
    /// Successes become `{"status": "ok", "value": ...}`, failures become
    /// `{"status": "error", "code": ..., "message": ...}` with the stable
    /// error code, and unknown operations become
    /// `{"status": "notImplemented"}`.
    pub fn to_wire(&self) -> Value {
        match self {
            Outcome::Success(value) => json!({"status": "ok", "value": value}),
            Outcome::NotImplemented => json!({"status": "notImplemented"}),
            Outcome::Failure(err) => json!({
                "status": "error",
                "code": err.code(),
                "message": err.to_string(),
            }),
        }
    }

    /// Returns the success value, or `None` for failures and unknown
    /// operations.
    pub fn success(&self) -> Option<&Value> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Result<Value, BridgeError>> for Outcome {
    fn from(result: Result<Value, BridgeError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err),
        }
    }
}
