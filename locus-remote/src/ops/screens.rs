//! Operations that open a screen of the vendor application.

use serde::Deserialize;
use serde_json::Value;

use super::{require_foreground, OpResult};
use crate::call::MethodCall;
use crate::dispatcher::Dispatcher;
use crate::error::BridgeError;
use crate::foreground::Foreground;
use crate::vendor::{ScreenAction, VendorApi};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ItemIdRequest {
    item_id: i64,
}

fn item_screen<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
    action: fn(i64) -> ScreenAction,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: ItemIdRequest = call.parse()?;
    if request.item_id <= 0 {
        return Err(BridgeError::InvalidArguments(
            "itemId is required > 0".to_string(),
        ));
    }

    bridge
        .vendor
        .start_screen(foreground, action(request.item_id))?;
    Ok(Value::Bool(true))
}

pub(crate) fn open_point_detail<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    item_screen(bridge, foreground, call, |item_id| {
        ScreenAction::PointDetail { item_id }
    })
}

pub(crate) fn start_navigation_to_item<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    item_screen(bridge, foreground, call, |item_id| {
        ScreenAction::NavigationToItem { item_id }
    })
}

pub(crate) fn start_guiding_to_item<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    item_screen(bridge, foreground, call, |item_id| {
        ScreenAction::GuidingToItem { item_id }
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AddressRequest {
    address: String,
}

pub(crate) fn open_address<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: AddressRequest = call.parse()?;
    if request.address.trim().is_empty() {
        return Err(BridgeError::InvalidArguments(
            "address is required".to_string(),
        ));
    }

    let action = ScreenAction::NavigationToAddress {
        address: request.address,
    };
    bridge.vendor.start_screen(foreground, action)?;
    Ok(Value::Bool(true))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NavigateToRequest {
    name: Option<String>,
    latitude: f64,
    longitude: f64,
}

pub(crate) fn navigate_to<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: NavigateToRequest = call.parse()?;

    let action = ScreenAction::Navigation {
        name: request.name.filter(|name| !name.trim().is_empty()),
        latitude: request.latitude,
        longitude: request.longitude,
    };
    bridge.vendor.start_screen(foreground, action)?;
    Ok(Value::Bool(true))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WmsMapRequest {
    url: String,
}

pub(crate) fn add_wms_map<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: WmsMapRequest = call.parse()?;
    if request.url.trim().is_empty() {
        return Err(BridgeError::InvalidArguments("url is required".to_string()));
    }

    let action = ScreenAction::AddWmsMap { url: request.url };
    bridge.vendor.start_screen(foreground, action)?;
    Ok(Value::Bool(true))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OpenFieldNotesRequest {
    create_log: bool,
}

pub(crate) fn open_field_notes<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: OpenFieldNotesRequest = call.parse()?;

    let action = ScreenAction::FieldNotes {
        ids: Vec::new(),
        create_log: request.create_log,
    };
    bridge.vendor.start_screen(foreground, action)?;
    Ok(Value::Bool(true))
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LogFieldNotesRequest {
    ids: Vec<i64>,
    create_log: bool,
}

impl Default for LogFieldNotesRequest {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            create_log: true,
        }
    }
}

pub(crate) fn log_field_notes<V: VendorApi>(
    bridge: &Dispatcher<V>,
    foreground: Option<Foreground>,
    call: &MethodCall,
) -> OpResult {
    let foreground = require_foreground(foreground)?;
    let request: LogFieldNotesRequest = call.parse()?;
    if request.ids.is_empty() {
        return Err(BridgeError::InvalidArguments("ids is required".to_string()));
    }

    let action = ScreenAction::FieldNotes {
        ids: request.ids,
        create_log: request.create_log,
    };
    bridge.vendor.start_screen(foreground, action)?;
    Ok(Value::Bool(true))
}
