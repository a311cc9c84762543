//! Point display and update operations. All of them need a foreground UI.

use std::sync::Arc;

use locus_remote_types::GeoPoint;
use serde::Deserialize;
use serde_json::Value;

use super::{active_version, require_foreground, OpResult};
use crate::call::MethodCall;
use crate::decoded_image::DecodedImage;
use crate::dispatcher::Dispatcher;
use crate::error::BridgeError;
use crate::foreground::Foreground;
use crate::image_loader::ImageLoader;
use crate::pack::{group_by_icon, PointPack};
use crate::vendor::{SendMode, VendorApi};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DisplayPointRequest {
    name: String,
    latitude: f64,
    longitude: f64,
    image_path: Option<String>,
}

pub(crate) fn display_point<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: DisplayPointRequest = call.parse()?;

    let point = GeoPoint::new(request.name.clone(), request.latitude, request.longitude);
    let mut pack = PointPack::new(request.name, vec![point]);
    if let Some(icon) = load_icon(&bridge.images, request.image_path.as_deref()) {
        pack = pack.with_icon(icon);
    }

    let sent = bridge
        .vendor
        .send_points(foreground, &pack, SendMode::Display)?;
    Ok(Value::Bool(sent))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DisplayPointsRequest {
    points: Vec<GeoPoint>,
    image_path: Option<String>,
}

pub(crate) fn display_points<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: DisplayPointsRequest = call.parse()?;
    if request.points.is_empty() {
        return Ok(Value::Bool(true));
    }

    let mut pack = PointPack::new(bridge.config.multi_point_pack_name.clone(), request.points);
    if let Some(icon) = load_icon(&bridge.images, request.image_path.as_deref()) {
        pack = pack.with_icon(icon);
    }

    let sent = bridge
        .vendor
        .send_points(foreground, &pack, SendMode::Display)?;
    Ok(Value::Bool(sent))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StartNavigationRequest {
    name: String,
    latitude: f64,
    longitude: f64,
}

pub(crate) fn start_navigation<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: StartNavigationRequest = call.parse()?;

    let point = GeoPoint::new(request.name, request.latitude, request.longitude);
    let pack = PointPack::new(bridge.config.navigation_pack_name.clone(), vec![point]);

    let sent = bridge
        .vendor
        .send_points(foreground, &pack, SendMode::Center)?;
    Ok(Value::Bool(sent))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdatePointRequest {
    name: String,
    latitude: f64,
    longitude: f64,
    icon: Option<String>,
}

pub(crate) fn update_point<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: UpdatePointRequest = call.parse()?;

    let point = GeoPoint::new(request.name.clone(), request.latitude, request.longitude);
    let mut pack = PointPack::new(bridge.config.update_pack_name(&request.name), vec![point]);
    if let Some(icon) = load_icon(&bridge.images, request.icon.as_deref()) {
        pack = pack.with_icon(icon);
    }

    let mode = SendMode::Silent {
        center_on_data: false,
    };
    let sent = bridge.vendor.send_points(foreground, &pack, mode)?;
    Ok(Value::Bool(sent))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdatePointsRequest {
    points: Vec<GeoPoint>,
}

pub(crate) fn update_points<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: UpdatePointsRequest = call.parse()?;
    if request.points.is_empty() {
        return Ok(Value::Bool(true));
    }

    if active_version(bridge).is_none() {
        return Ok(Value::Bool(false));
    }

    let mut all_sent = true;
    for (icon_path, points) in group_by_icon(request.points) {
        let (name, icon) = match &icon_path {
            Some(path) => (
                bridge.config.update_group_for_icon(path),
                bridge.images.load(path),
            ),
            None => (bridge.config.default_update_group(), None),
        };

        let mut pack = PointPack::new(name, points);
        if let Some(icon) = icon {
            pack = pack.with_icon(icon);
        }

        let mode = SendMode::Silent {
            center_on_data: false,
        };
        all_sent &= bridge.vendor.send_points(foreground, &pack, mode)?;
    }

    Ok(Value::Bool(all_sent))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ClearPointsRequest {
    pack_names: Option<Vec<String>>,
}

pub(crate) fn clear_points<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: ClearPointsRequest = call.parse()?;

    // Without an explicit list, clear the packs this bridge creates itself.
    // Packs from single point updates are keyed by point name and must be
    // listed explicitly.
    let names = request.pack_names.unwrap_or_else(|| {
        vec![
            bridge.config.multi_point_pack_name.clone(),
            bridge.config.default_update_group(),
        ]
    });

    for name in &names {
        bridge.vendor.remove_points(foreground, name)?;
    }

    Ok(Value::Bool(true))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ClearPointsWithNameRequest {
    pack_name: String,
}

pub(crate) fn clear_points_with_name<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: ClearPointsWithNameRequest = call.parse()?;
    if request.pack_name.is_empty() {
        return Err(BridgeError::InvalidArguments(
            "Pack name is required".to_string(),
        ));
    }

    bridge
        .vendor
        .remove_points(foreground, &request.pack_name)?;
    Ok(Value::Bool(true))
}

fn load_icon(images: &ImageLoader, path: Option<&str>) -> Option<Arc<DecodedImage>> {
    let path = path.filter(|path| !path.is_empty())?;
    images.load(path)
}
