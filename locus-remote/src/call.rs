use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::BridgeError;

/// A single operation request received from the channel host.
///
/// The argument bag is loosely typed on purpose: the channel transport hands
/// over whatever the UI layer sent, and each operation converts the bag into
/// its own typed request during dispatch.
#[derive(Debug, Clone)]
pub struct MethodCall {
    /// Name of the requested operation.
    pub operation: String,
    /// Operation arguments as sent over the channel.
    pub arguments: Map<String, Value>,
}

impl MethodCall {
    /// Creates a call with an empty argument bag.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            arguments: Map::new(),
        }
    }

    /// Creates a call with the given arguments.
    pub fn with_arguments(operation: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            operation: operation.into(),
            arguments,
        }
    }

    /// Converts the argument bag into an operation's typed request.
    ///
    /// Missing fields take the request type's defaults. Values of the wrong
    /// shape fail with [`BridgeError::InvalidArguments`]; unknown fields are
    /// ignored.
    pub(crate) fn parse<T: DeserializeOwned>(&self) -> Result<T, BridgeError> {
        serde_json::from_value(Value::Object(self.arguments.clone()))
            .map_err(|err| BridgeError::InvalidArguments(err.to_string()))
    }
}
