//! The seam between the bridge and the installed vendor application.
//!
//! [`VendorApi`] is what a host integration implements on top of the vendor's
//! platform SDK; on Android that means intents and broadcasts, elsewhere it
//! can be a test double or a remote shim. The bridge validates and shapes
//! every request first and then performs at most one call through this trait
//! per dispatched operation, so implementations never see half-validated
//! data.

use locus_remote_types::{Circle, Track};

use crate::error::VendorError;
use crate::foreground::Foreground;
use crate::pack::PointPack;

/// Result of a vendor seam call.
pub type VendorResult<T> = Result<T, VendorError>;

/// Description of an installed vendor application version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorVersion {
    /// Platform package name of the application.
    pub package_name: String,
    /// Human readable version, e.g. `"4.26.1"`.
    pub version_name: String,
    /// Numeric version code.
    pub version_code: i64,
}

/// Runtime information about the vendor application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Platform package name of the application.
    pub package_name: String,
    /// Whether the application is currently running.
    pub is_running: bool,
}

/// How a pack or track send should behave in the vendor application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMode {
    /// Show the data.
    Display,
    /// Show the data and center the map on it.
    Center,
    /// Import the data without bringing the vendor application to front.
    Silent {
        /// Whether the vendor application should center its map on the data
        /// once it is displayed.
        center_on_data: bool,
    },
}

/// A vendor UI screen the bridge can open.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Detail page of an item stored in the vendor application.
    PointDetail {
        /// Identifier of the stored item.
        item_id: i64,
    },
    /// Turn-by-turn navigation to a stored item.
    NavigationToItem {
        /// Identifier of the stored item.
        item_id: i64,
    },
    /// Straight-line guiding to a stored item.
    GuidingToItem {
        /// Identifier of the stored item.
        item_id: i64,
    },
    /// Navigation to an address the vendor application geocodes itself.
    NavigationToAddress {
        /// Free-form address text.
        address: String,
    },
    /// Navigation to a coordinate.
    Navigation {
        /// Optional label of the destination.
        name: Option<String>,
        /// Latitude of the destination in degrees.
        latitude: f64,
        /// Longitude of the destination in degrees.
        longitude: f64,
    },
    /// Dialog for adding a WMS map source.
    AddWmsMap {
        /// URL of the WMS endpoint.
        url: String,
    },
    /// The field notes screen.
    FieldNotes {
        /// Identifiers of the notes to log, empty to just open the screen.
        ids: Vec<i64>,
        /// Whether the vendor application should start composing a log.
        create_log: bool,
    },
}

/// Track recorder control command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingCommand {
    /// Start recording, or resume a paused recording.
    Start,
    /// Stop recording.
    Stop {
        /// Whether the recorded track should be saved without asking.
        auto_save: bool,
    },
    /// Pause recording.
    Pause,
}

/// Kind of geodata contained in a file handed over for import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoDataKind {
    /// Points of interest.
    Points,
    /// Tracks.
    Tracks,
}

/// Calls into the installed vendor application.
///
/// Methods returning [`VendorResult`] report delivery failures; a `bool`
/// success value is the vendor application's own acknowledgement and is
/// passed through to the channel host unchanged.
pub trait VendorApi {
    /// Returns true if any version of the vendor application is installed.
    fn is_installed(&self) -> bool;

    /// Returns the installed version the bridge should talk to, if any.
    fn active_version(&self) -> Option<VendorVersion>;

    /// Returns runtime information about the given version.
    fn app_info(&self, version: &VendorVersion) -> Option<AppInfo>;

    /// Brings the vendor application to front, starting it if necessary.
    fn start_app(&self) -> VendorResult<bool>;

    /// Sends a pack of points for display.
    fn send_points(
        &self,
        foreground: Foreground,
        pack: &PointPack,
        mode: SendMode,
    ) -> VendorResult<bool>;

    /// Removes a previously sent pack by name.
    fn remove_points(&self, foreground: Foreground, pack_name: &str) -> VendorResult<()>;

    /// Sends tracks for display.
    ///
    /// An empty list sent with [`SendMode::Silent`] clears all previously
    /// sent tracks; the vendor application's validating path rejects empty
    /// payloads in the other modes.
    fn send_tracks(
        &self,
        foreground: Foreground,
        tracks: &[Track],
        mode: SendMode,
    ) -> VendorResult<bool>;

    /// Sends circle overlays. An empty list clears previously sent circles.
    fn send_circles(
        &self,
        version: &VendorVersion,
        circles: &[Circle],
        center_on_data: bool,
    ) -> VendorResult<()>;

    /// Asks the vendor application to import the geodata file at `uri`.
    fn import_file(
        &self,
        version: &VendorVersion,
        kind: GeoDataKind,
        uri: &str,
        center_on_data: bool,
    ) -> VendorResult<()>;

    /// Opens the file at `uri` in the vendor application without importing it.
    fn view_file(
        &self,
        foreground: Foreground,
        version: &VendorVersion,
        uri: &str,
        mime_type: Option<&str>,
    ) -> VendorResult<()>;

    /// Opens one of the vendor application's UI screens.
    fn start_screen(&self, foreground: Foreground, action: ScreenAction) -> VendorResult<()>;

    /// Controls the track recorder.
    fn recording(
        &self,
        foreground: Foreground,
        version: &VendorVersion,
        command: RecordingCommand,
    ) -> VendorResult<bool>;
}
