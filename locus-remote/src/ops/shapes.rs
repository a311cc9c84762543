//! Circle, polyline and polygon overlay operations.
//!
//! Polylines and polygons are not separate concepts in the vendor protocol:
//! both are sent as tracks, a polygon being a track whose point ring is
//! closed first.

use locus_remote_types::{Circle, LineStyle, Track, TrackPoint};
use serde::Deserialize;
use serde_json::Value;

use super::tracks::{build_style, TrackRequest};
use super::{active_version, require_foreground, OpResult};
use crate::call::MethodCall;
use crate::dispatcher::Dispatcher;
use crate::foreground::Foreground;
use crate::vendor::{SendMode, VendorApi};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DisplayCirclesRequest {
    circles: Vec<Circle>,
    center_on_data: bool,
}

/// Circles are delivered as a broadcast, so no foreground is needed. An
/// empty list is forwarded as-is and clears the circle overlay.
pub(crate) fn display_circles<V: VendorApi>(bridge: &Dispatcher<V>, call: &MethodCall) -> OpResult {
    let request: DisplayCirclesRequest = call.parse()?;
    let Some(version) = active_version(bridge) else {
        return Ok(Value::Bool(false));
    };

    bridge
        .vendor
        .send_circles(&version, &request.circles, request.center_on_data)?;
    Ok(Value::Bool(true))
}

/// Clears all displayed circles. The vendor protocol cannot remove circles
/// selectively, so this also backs the id-based removal operation.
pub(crate) fn clear_circles<V: VendorApi>(bridge: &Dispatcher<V>) -> OpResult {
    let Some(version) = active_version(bridge) else {
        return Ok(Value::Bool(false));
    };

    bridge.vendor.send_circles(&version, &[], false)?;
    Ok(Value::Bool(true))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DisplayPolylinesRequest {
    polylines: Vec<TrackRequest>,
    center_on_data: bool,
}

pub(crate) fn display_polylines<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: DisplayPolylinesRequest = call.parse()?;
    if request.polylines.is_empty() {
        return Ok(Value::Bool(true));
    }

    let tracks: Vec<Track> = request
        .polylines
        .into_iter()
        .map(|polyline| polyline.into_track(&bridge.config.default_style))
        .collect();

    let mode = send_mode(request.center_on_data);
    let sent = bridge.vendor.send_tracks(foreground, &tracks, mode)?;
    Ok(Value::Bool(sent))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PolygonRequest {
    name: String,
    points: Vec<TrackPoint>,
    stroke_color: Option<String>,
    stroke_width: Option<f64>,
}

impl PolygonRequest {
    fn into_track(self, defaults: &LineStyle) -> Track {
        let style = build_style(self.stroke_color.as_deref(), self.stroke_width, defaults);
        let mut track = Track::new(self.name, self.points);
        if let Some(style) = style {
            track = track.with_style(style);
        }
        track.close_ring();

        track
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DisplayPolygonsRequest {
    polygons: Vec<PolygonRequest>,
    center_on_data: bool,
}

pub(crate) fn display_polygons<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: DisplayPolygonsRequest = call.parse()?;
    if request.polygons.is_empty() {
        return Ok(Value::Bool(true));
    }

    let tracks: Vec<Track> = request
        .polygons
        .into_iter()
        .map(|polygon| polygon.into_track(&bridge.config.default_style))
        .collect();

    let mode = send_mode(request.center_on_data);
    let sent = bridge.vendor.send_tracks(foreground, &tracks, mode)?;
    Ok(Value::Bool(sent))
}

fn send_mode(center_on_data: bool) -> SendMode {
    if center_on_data {
        SendMode::Center
    } else {
        SendMode::Display
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use locus_remote_types::{Color, LineStyle};
    use serde_json::json;

    use crate::error::BridgeError;
    use crate::tests::{call, foreground, RecordingVendor, VendorCall};
    use crate::vendor::SendMode;
    use crate::{Dispatcher, Outcome};

    #[test]
    fn circles_are_sent_without_foreground() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());
        let outcome = dispatcher.dispatch(
            None,
            &call(
                "displayCircles",
                json!({"circles": [
                    {"name": "range", "latitude": 50.0, "longitude": 14.0, "radius": 250.0},
                ]}),
            ),
        );

        assert_eq!(outcome.success(), Some(&json!(true)));
        let calls = dispatcher.vendor().calls();
        assert_matches!(
            &calls[0],
            VendorCall::SendCircles { circles, center_on_data: false }
                if circles.len() == 1 && circles[0].radius == 250.0
        );
    }

    #[test]
    fn circles_without_vendor_answer_false() {
        let dispatcher = Dispatcher::new(RecordingVendor::not_installed());
        let outcome = dispatcher.dispatch(None, &call("displayCircles", json!({})));

        assert_eq!(outcome.success(), Some(&json!(false)));
        assert!(dispatcher.vendor().calls().is_empty());
    }

    #[test]
    fn clearing_circles_sends_an_empty_list() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());

        let by_ids =
            dispatcher.dispatch(None, &call("removeCirclesByIds", json!({"ids": [1, 2]})));
        let all = dispatcher.dispatch(None, &call("clearCircles", json!({})));

        assert_eq!(by_ids.success(), Some(&json!(true)));
        assert_eq!(all.success(), Some(&json!(true)));

        let calls = dispatcher.vendor().calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_matches!(
            &calls[0],
            VendorCall::SendCircles { circles, center_on_data: false } if circles.is_empty()
        );
    }

    #[test]
    fn polylines_need_a_foreground() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());
        let outcome = dispatcher.dispatch(
            None,
            &call(
                "displayPolylines",
                json!({"polylines": [{"name": "route", "points": []}]}),
            ),
        );

        assert_matches!(outcome, Outcome::Failure(BridgeError::NoForeground));
        assert!(dispatcher.vendor().calls().is_empty());
    }

    #[test]
    fn polylines_become_styled_tracks() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());
        let outcome = dispatcher.dispatch(
            foreground(),
            &call(
                "displayPolylines",
                json!({
                    "polylines": [{
                        "name": "border",
                        "color": "#00FF00",
                        "width": 3.0,
                        "points": [
                            {"latitude": 0.0, "longitude": 0.0},
                            {"latitude": 0.0, "longitude": 1.0},
                        ],
                    }],
                    "centerOnData": true,
                }),
            ),
        );

        assert_eq!(outcome.success(), Some(&json!(true)));
        let calls = dispatcher.vendor().calls();
        assert_matches!(
            &calls[0],
            VendorCall::SendTracks { tracks, mode: SendMode::Center }
                if tracks[0].name == "border"
                    && tracks[0].points.len() == 2
                    && tracks[0].style == Some(LineStyle::new(Color::GREEN, 3.0))
        );
    }

    #[test]
    fn polygons_get_a_closed_ring() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());
        dispatcher.dispatch(
            foreground(),
            &call(
                "displayPolygons",
                json!({"polygons": [{
                    "name": "zone",
                    "strokeColor": "#0000FF",
                    "points": [
                        {"latitude": 0.0, "longitude": 0.0},
                        {"latitude": 0.0, "longitude": 1.0},
                        {"latitude": 1.0, "longitude": 1.0},
                    ],
                }]}),
            ),
        );

        let calls = dispatcher.vendor().calls();
        assert_matches!(
            &calls[0],
            VendorCall::SendTracks { tracks, mode: SendMode::Display }
                if tracks[0].points.len() == 4
                    && tracks[0].points[3] == tracks[0].points[0]
                    && tracks[0].style.map(|style| style.color) == Some(Color::BLUE)
        );
    }

    #[test]
    fn already_closed_polygons_are_unchanged() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());
        dispatcher.dispatch(
            foreground(),
            &call(
                "displayPolygons",
                json!({"polygons": [{
                    "name": "zone",
                    "points": [
                        {"latitude": 0.0, "longitude": 0.0},
                        {"latitude": 0.0, "longitude": 1.0},
                        {"latitude": 0.0, "longitude": 0.0},
                    ],
                }]}),
            ),
        );

        let calls = dispatcher.vendor().calls();
        assert_matches!(
            &calls[0],
            VendorCall::SendTracks { tracks, .. } if tracks[0].points.len() == 3
        );
    }

    #[test]
    fn empty_shape_lists_short_circuit() {
        let dispatcher = Dispatcher::new(RecordingVendor::new());

        let polylines = dispatcher.dispatch(foreground(), &call("displayPolylines", json!({})));
        let polygons = dispatcher.dispatch(foreground(), &call("displayPolygons", json!({})));

        assert_eq!(polylines.success(), Some(&json!(true)));
        assert_eq!(polygons.success(), Some(&json!(true)));
        assert!(dispatcher.vendor().calls().is_empty());
    }
}
