use serde::{Deserialize, Serialize};

/// A circle overlay centered on a geographic position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Circle {
    /// Display name of the circle.
    pub name: String,
    /// Latitude of the center in degrees.
    pub latitude: f64,
    /// Longitude of the center in degrees.
    pub longitude: f64,
    /// Radius in meters.
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            radius,
        }
    }
}
