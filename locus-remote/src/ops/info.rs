//! Availability and version queries. None of these need a foreground UI.

use serde_json::{json, Value};

use super::OpResult;
use crate::dispatcher::Dispatcher;
use crate::vendor::VendorApi;

pub(crate) fn is_installed<V: VendorApi>(bridge: &Dispatcher<V>) -> OpResult {
    Ok(Value::Bool(bridge.vendor.is_installed()))
}

pub(crate) fn locus_info<V: VendorApi>(bridge: &Dispatcher<V>) -> OpResult {
    let info = bridge
        .vendor
        .active_version()
        .and_then(|version| bridge.vendor.app_info(&version));

    match info {
        Some(info) => Ok(json!({
            "isInstalled": true,
            "isRunning": info.is_running,
            "packageName": info.package_name,
        })),
        None => Ok(json!({ "isInstalled": false })),
    }
}

pub(crate) fn active_version_info<V: VendorApi>(bridge: &Dispatcher<V>) -> OpResult {
    match bridge.vendor.active_version() {
        Some(version) => Ok(json!({
            "packageName": version.package_name,
            "versionName": version.version_name,
            "versionCode": version.version_code,
        })),
        None => Ok(Value::Null),
    }
}

pub(crate) fn open_app<V: VendorApi>(bridge: &Dispatcher<V>) -> OpResult {
    Ok(Value::Bool(bridge.vendor.start_app()?))
}
