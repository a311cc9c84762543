use serde::{Deserialize, Serialize};

/// A named point of interest to display in the vendor application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoPoint {
    /// Display name. The vendor application uses it as the point label.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Path to an icon image for this point, if it has one.
    pub icon: Option<String>,
}

impl GeoPoint {
    /// Creates a new point without an icon.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            icon: None,
        }
    }
}

/// A single position within a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude in meters above sea level, if known.
    pub altitude: Option<f64>,
    /// Unix timestamp of the position fix in milliseconds, if known.
    pub timestamp: Option<i64>,
    /// Speed in meters per second, if known.
    pub speed: Option<f64>,
}

impl TrackPoint {
    /// Creates a track point from latitude and longitude values (in degrees).
    pub fn latlon(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }
}
