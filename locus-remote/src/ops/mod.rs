//! Operation handlers.
//!
//! Each function implements one operation of the bridge contract: it converts
//! the call's argument bag into a typed request, checks the operation's
//! preconditions and performs at most one kind of call through the vendor
//! seam. Handlers return plain JSON values; the dispatcher wraps them into
//! outcomes.

pub(crate) mod files;
pub(crate) mod info;
pub(crate) mod points;
pub(crate) mod recording;
pub(crate) mod screens;
pub(crate) mod shapes;
pub(crate) mod tracks;

use log::debug;
use serde_json::Value;

use crate::dispatcher::Dispatcher;
use crate::error::BridgeError;
use crate::foreground::Foreground;
use crate::vendor::{VendorApi, VendorVersion};

/// Value produced by an operation handler.
pub(crate) type OpResult = Result<Value, BridgeError>;

/// Unwraps the foreground token, failing the operation when the host has no
/// foreground UI.
pub(crate) fn require_foreground(
    foreground: Option<Foreground>,
) -> Result<Foreground, BridgeError> {
    foreground.ok_or(BridgeError::NoForeground)
}

/// Returns the active vendor version, or `None` when the vendor application
/// is not available. Operations that need one answer plain `false` in that
/// case instead of failing.
pub(crate) fn active_version<V: VendorApi>(bridge: &Dispatcher<V>) -> Option<VendorVersion> {
    let version = bridge.vendor.active_version();
    if version.is_none() {
        debug!("No active vendor version");
    }

    version
}
