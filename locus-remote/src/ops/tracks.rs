//! Track display operations.

use locus_remote_types::{Color, LineStyle, Track, TrackPoint};
use serde::Deserialize;
use serde_json::Value;

use super::{active_version, require_foreground, OpResult};
use crate::call::MethodCall;
use crate::dispatcher::Dispatcher;
use crate::error::BridgeError;
use crate::foreground::Foreground;
use crate::vendor::{SendMode, VendorApi};

/// Wire shape shared by track sends and polyline sends.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct TrackRequest {
    pub(super) name: String,
    pub(super) points: Vec<TrackPoint>,
    pub(super) color: Option<String>,
    pub(super) width: Option<f64>,
}

impl TrackRequest {
    pub(super) fn into_track(self, defaults: &LineStyle) -> Track {
        let style = build_style(self.color.as_deref(), self.width, defaults);
        let mut track = Track::new(self.name, self.points);
        if let Some(style) = style {
            track = track.with_style(style);
        }

        track
    }
}

/// Builds a line style when the request carries any style field. Unusable
/// values (unparsable color, non-positive width) fall back to the defaults.
pub(super) fn build_style(
    color: Option<&str>,
    width: Option<f64>,
    defaults: &LineStyle,
) -> Option<LineStyle> {
    if color.is_none() && width.is_none() {
        return None;
    }

    let color = color
        .filter(|hex| !hex.is_empty())
        .and_then(Color::try_from_hex)
        .unwrap_or(defaults.color);
    let width = width
        .filter(|width| *width > 0.0)
        .map(|width| width as f32)
        .unwrap_or(defaults.width);

    Some(LineStyle::new(color, width))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SingleTrackRequest {
    track: Option<TrackRequest>,
}

impl SingleTrackRequest {
    fn into_track(self, defaults: &LineStyle) -> Result<Track, BridgeError> {
        let track = self.track.ok_or_else(|| {
            BridgeError::InvalidArguments("Track data is required".to_string())
        })?;
        Ok(track.into_track(defaults))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TrackListRequest {
    tracks: Vec<TrackRequest>,
}

impl TrackListRequest {
    fn into_tracks(self, defaults: &LineStyle) -> Vec<Track> {
        self.tracks
            .into_iter()
            .map(|track| track.into_track(defaults))
            .collect()
    }
}

pub(crate) fn display_track<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: SingleTrackRequest = call.parse()?;
    let track = request.into_track(&bridge.config.default_style)?;

    let sent = bridge
        .vendor
        .send_tracks(foreground, &[track], SendMode::Display)?;
    Ok(Value::Bool(sent))
}

pub(crate) fn display_tracks<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: TrackListRequest = call.parse()?;
    if request.tracks.is_empty() {
        return Ok(Value::Bool(true));
    }

    let tracks = request.into_tracks(&bridge.config.default_style);
    let sent = bridge
        .vendor
        .send_tracks(foreground, &tracks, SendMode::Display)?;
    Ok(Value::Bool(sent))
}

pub(crate) fn update_track<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: SingleTrackRequest = call.parse()?;
    let track = request.into_track(&bridge.config.default_style)?;

    let mode = SendMode::Silent {
        center_on_data: false,
    };
    let sent = bridge.vendor.send_tracks(foreground, &[track], mode)?;
    Ok(Value::Bool(sent))
}

pub(crate) fn update_tracks<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: TrackListRequest = call.parse()?;
    if request.tracks.is_empty() {
        return Ok(Value::Bool(true));
    }

    let tracks = request.into_tracks(&bridge.config.default_style);
    let mode = SendMode::Silent {
        center_on_data: false,
    };
    let sent = bridge.vendor.send_tracks(foreground, &tracks, mode)?;
    Ok(Value::Bool(sent))
}

pub(crate) fn clear_tracks<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    clear_all_tracks(bridge, foreground)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ClearTrackByNameRequest {
    track_name: String,
}

pub(crate) fn clear_track_by_name<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: ClearTrackByNameRequest = call.parse()?;
    if request.track_name.is_empty() {
        return Err(BridgeError::InvalidArguments(
            "Track name is required".to_string(),
        ));
    }

    // The vendor protocol cannot remove a single track, so this clears the
    // whole track overlay.
    clear_all_tracks(bridge, foreground)
}

fn clear_all_tracks<V: VendorApi>(bridge: &Dispatcher<V>, foreground: Foreground) -> OpResult {
    if active_version(bridge).is_none() {
        return Ok(Value::Bool(false));
    }

    // There is no dedicated clear command. An empty silent send replaces all
    // displayed tracks.
    let mode = SendMode::Silent {
        center_on_data: false,
    };
    bridge.vendor.send_tracks(foreground, &[], mode)?;
    Ok(Value::Bool(true))
}
