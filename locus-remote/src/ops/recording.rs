//! Track recorder control operations.

use serde_json::Value;

use super::{active_version, require_foreground, OpResult};
use crate::dispatcher::Dispatcher;
use crate::foreground::Foreground;
use crate::vendor::{RecordingCommand, VendorApi};

fn control<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    command: RecordingCommand,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let Some(version) = active_version(bridge) else {
        return Ok(Value::Bool(false));
    };

    let accepted = bridge.vendor.recording(foreground, &version, command)?;
    Ok(Value::Bool(accepted))
}

pub(crate) fn start<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
) -> OpResult {
    control(bridge, foreground, RecordingCommand::Start)
}

pub(crate) fn stop<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
) -> OpResult {
    control(bridge, foreground, RecordingCommand::Stop { auto_save: true })
}

pub(crate) fn pause<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
) -> OpResult {
    control(bridge, foreground, RecordingCommand::Pause)
}

/// The vendor recorder resumes when told to start while paused, so resume is
/// forwarded as a start command.
pub(crate) fn resume<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
) -> OpResult {
    control(bridge, foreground, RecordingCommand::Start)
}

/// The bridge holds no recording state and the vendor protocol offers no
/// synchronous recorder query, so this always answers `false`.
pub(crate) fn is_recording() -> OpResult {
    Ok(Value::Bool(false))
}
