//! Geodata file import and viewing operations.

use serde::Deserialize;
use serde_json::Value;

use super::{active_version, require_foreground, OpResult};
use crate::call::MethodCall;
use crate::dispatcher::Dispatcher;
use crate::error::BridgeError;
use crate::foreground::Foreground;
use crate::vendor::{GeoDataKind, VendorApi};

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ImportRequest {
    file_uri: String,
    center_on_data: bool,
}

impl Default for ImportRequest {
    fn default() -> Self {
        Self {
            file_uri: String::new(),
            center_on_data: true,
        }
    }
}

impl ImportRequest {
    fn uri(&self) -> Result<&str, BridgeError> {
        if self.file_uri.trim().is_empty() {
            return Err(BridgeError::InvalidArguments(
                "fileUri is required".to_string(),
            ));
        }

        Ok(&self.file_uri)
    }
}

/// Point imports are delivered as a broadcast, so no foreground is needed.
pub(crate) fn import_points<V: VendorApi>(bridge: &Dispatcher<V>, call: &MethodCall) -> OpResult {
    let request: ImportRequest = call.parse()?;
    let uri = request.uri()?;
    let Some(version) = active_version(bridge) else {
        return Ok(Value::Bool(false));
    };

    bridge
        .vendor
        .import_file(&version, GeoDataKind::Points, uri, request.center_on_data)?;
    Ok(Value::Bool(true))
}

/// Track imports open the vendor import dialog and need a foreground UI.
pub(crate) fn import_tracks<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    require_foreground(foreground)?;
    let request: ImportRequest = call.parse()?;
    let uri = request.uri()?;
    let Some(version) = active_version(bridge) else {
        return Ok(Value::Bool(false));
    };

    bridge
        .vendor
        .import_file(&version, GeoDataKind::Tracks, uri, request.center_on_data)?;
    Ok(Value::Bool(true))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ViewFileRequest {
    file_uri: String,
    mime_type: Option<String>,
}

pub(crate) fn view_file<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: ViewFileRequest = call.parse()?;
    if request.file_uri.trim().is_empty() {
        return Err(BridgeError::InvalidArguments(
            "fileUri is required".to_string(),
        ));
    }

    let Some(version) = active_version(bridge) else {
        return Ok(Value::Bool(false));
    };

    bridge.vendor.view_file(
        foreground,
        &version,
        &request.file_uri,
        request.mime_type.as_deref(),
    )?;
    Ok(Value::Bool(true))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use crate::error::BridgeError;
    use crate::tests::{call, foreground, RecordingVendor, VendorCall};
    use crate::vendor::GeoDataKind;
    use crate::{Dispatcher, Outcome};

    #[test]
    fn imports_require_a_file_uri() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());

        for operation in ["importPointsFromFile", "importTracksFromFile", "viewFileInLocus"] {
            let outcome = dispatcher.dispatch(foreground(), &call(operation, json!({})));
            assert_matches!(
                outcome,
                Outcome::Failure(BridgeError::InvalidArguments(message))
                    if message == "fileUri is required"
            );
        }

        assert!(dispatcher.vendor().calls().is_empty());
    }

    #[test]
    fn point_import_is_a_broadcast_without_foreground() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());
        let outcome = dispatcher.dispatch(
            None,
            &call("importPointsFromFile", json!({"fileUri": "file:///tmp/caches.gpx"})),
        );

        assert_eq!(outcome.success(), Some(&json!(true)));
        let calls = dispatcher.vendor().calls();
        assert_matches!(
            &calls[0],
            VendorCall::ImportFile { kind: GeoDataKind::Points, uri, center_on_data: true }
                if uri == "file:///tmp/caches.gpx"
        );
    }

    #[test]
    fn track_import_needs_a_foreground() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());
        let outcome = dispatcher.dispatch(
            None,
            &call("importTracksFromFile", json!({"fileUri": "file:///tmp/run.gpx"})),
        );

        assert_matches!(outcome, Outcome::Failure(BridgeError::NoForeground));
        assert!(dispatcher.vendor().calls().is_empty());
    }

    #[test]
    fn center_on_data_can_be_disabled() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());
        dispatcher.dispatch(
            foreground(),
            &call(
                "importTracksFromFile",
                json!({"fileUri": "file:///tmp/run.gpx", "centerOnData": false}),
            ),
        );

        let calls = dispatcher.vendor().calls();
        assert_matches!(
            &calls[0],
            VendorCall::ImportFile { kind: GeoDataKind::Tracks, center_on_data: false, .. }
        );
    }

    #[test]
    fn view_file_forwards_the_mime_type() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());
        let outcome = dispatcher.dispatch(
            foreground(),
            &call(
                "viewFileInLocus",
                json!({"fileUri": "file:///tmp/map.kmz", "mimeType": "application/vnd.google-earth.kmz"}),
            ),
        );

        assert_eq!(outcome.success(), Some(&json!(true)));
        let calls = dispatcher.vendor().calls();
        assert_matches!(
            &calls[0],
            VendorCall::ViewFile { uri, mime_type: Some(mime) }
                if uri == "file:///tmp/map.kmz" && mime == "application/vnd.google-earth.kmz"
        );
    }

    #[test]
    fn files_without_vendor_answer_false() {
        let dispatcher = Dispatcher::new(RecordingVendor::not_installed());
        let outcome = dispatcher.dispatch(
            foreground(),
            &call("importPointsFromFile", json!({"fileUri": "file:///tmp/caches.gpx"})),
        );

        assert_eq!(outcome.success(), Some(&json!(false)));
        assert!(dispatcher.vendor().calls().is_empty());
    }
}
