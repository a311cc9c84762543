//! Shared fixtures for the operation tests.

use std::cell::RefCell;

use locus_remote_types::{Circle, Track};
use serde_json::Value;

use crate::call::MethodCall;
use crate::error::VendorError;
use crate::foreground::Foreground;
use crate::pack::PointPack;
use crate::vendor::{
    AppInfo, GeoDataKind, RecordingCommand, ScreenAction, SendMode, VendorApi, VendorResult,
    VendorVersion,
};

/// Builds a method call from a `json!` object literal.
pub(crate) fn call(operation: &str, arguments: Value) -> MethodCall {
    let Value::Object(arguments) = arguments else {
        panic!("arguments must be an object");
    };

    MethodCall::with_arguments(operation, arguments)
}

/// A foreground token as the host integration would pass it.
pub(crate) fn foreground() -> Option<Foreground> {
    Some(Foreground::new(1))
}

/// One call that reached the vendor seam, with everything the bridge passed
/// into it except the foreground token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum VendorCall {
    StartApp,
    SendPoints {
        pack: PointPack,
        mode: SendMode,
    },
    RemovePoints {
        pack_name: String,
    },
    SendTracks {
        tracks: Vec<Track>,
        mode: SendMode,
    },
    SendCircles {
        circles: Vec<Circle>,
        center_on_data: bool,
    },
    ImportFile {
        kind: GeoDataKind,
        uri: String,
        center_on_data: bool,
    },
    ViewFile {
        uri: String,
        mime_type: Option<String>,
    },
    StartScreen(ScreenAction),
    Recording(RecordingCommand),
}

/// Spy implementation of the vendor seam recording every call it receives.
pub(crate) struct RecordingVendor {
    installed: bool,
    /// Acknowledgement the vendor application answers sends with.
    pub(crate) send_result: bool,
    fail_message: Option<String>,
    calls: RefCell<Vec<VendorCall>>,
}

impl RecordingVendor {
    /// A vendor application that is installed, running and accepts everything.
    pub(crate) fn new() -> Self {
        Self {
            installed: true,
            send_result: true,
            fail_message: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A device without the vendor application.
    pub(crate) fn not_installed() -> Self {
        Self {
            installed: false,
            ..Self::new()
        }
    }

    /// A vendor application that fails every call with the given message.
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            fail_message: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Everything that reached the seam, in call order.
    pub(crate) fn calls(&self) -> Vec<VendorCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: VendorCall) -> VendorResult<()> {
        if let Some(message) = &self.fail_message {
            return Err(VendorError::new(message));
        }

        self.calls.borrow_mut().push(call);
        Ok(())
    }

    fn version() -> VendorVersion {
        VendorVersion {
            package_name: "menion.android.locus.pro".to_string(),
            version_name: "4.26.1".to_string(),
            version_code: 1091,
        }
    }
}

impl VendorApi for RecordingVendor {
    fn is_installed(&self) -> bool {
        self.installed
    }

    fn active_version(&self) -> Option<VendorVersion> {
        self.installed.then(Self::version)
    }

    fn app_info(&self, version: &VendorVersion) -> Option<AppInfo> {
        self.installed.then(|| AppInfo {
            package_name: version.package_name.clone(),
            is_running: true,
        })
    }

    fn start_app(&self) -> VendorResult<bool> {
        self.record(VendorCall::StartApp)?;
        Ok(true)
    }

    fn send_points(
        &self,
        _foreground: Foreground,
        pack: &PointPack,
        mode: SendMode,
    ) -> VendorResult<bool> {
        self.record(VendorCall::SendPoints {
            pack: pack.clone(),
            mode,
        })?;
        Ok(self.send_result)
    }

    fn remove_points(&self, _foreground: Foreground, pack_name: &str) -> VendorResult<()> {
        self.record(VendorCall::RemovePoints {
            pack_name: pack_name.to_string(),
        })
    }

    fn send_tracks(
        &self,
        _foreground: Foreground,
        tracks: &[Track],
        mode: SendMode,
    ) -> VendorResult<bool> {
        self.record(VendorCall::SendTracks {
            tracks: tracks.to_vec(),
            mode,
        })?;
        Ok(self.send_result)
    }

    fn send_circles(
        &self,
        _version: &VendorVersion,
        circles: &[Circle],
        center_on_data: bool,
    ) -> VendorResult<()> {
        self.record(VendorCall::SendCircles {
            circles: circles.to_vec(),
            center_on_data,
        })
    }

    fn import_file(
        &self,
        _version: &VendorVersion,
        kind: GeoDataKind,
        uri: &str,
        center_on_data: bool,
    ) -> VendorResult<()> {
        self.record(VendorCall::ImportFile {
            kind,
            uri: uri.to_string(),
            center_on_data,
        })
    }

    fn view_file(
        &self,
        _foreground: Foreground,
        _version: &VendorVersion,
        uri: &str,
        mime_type: Option<&str>,
    ) -> VendorResult<()> {
        self.record(VendorCall::ViewFile {
            uri: uri.to_string(),
            mime_type: mime_type.map(str::to_string),
        })
    }

    fn start_screen(&self, _foreground: Foreground, action: ScreenAction) -> VendorResult<()> {
        self.record(VendorCall::StartScreen(action))
    }

    fn recording(
        &self,
        _foreground: Foreground,
        _version: &VendorVersion,
        command: RecordingCommand,
    ) -> VendorResult<bool> {
        self.record(VendorCall::Recording(command))?;
        Ok(self.send_result)
    }
}
