use serde::{Deserialize, Serialize};

use crate::{LineStyle, TrackPoint};

/// An ordered sequence of positions displayed as a single line in the vendor
/// application.
///
/// The name doubles as the track's identity: sending a track with the name of
/// an already displayed one replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    /// Display name of the track.
    pub name: String,
    /// Track positions in order.
    pub points: Vec<TrackPoint>,
    /// Stroke style. When `None`, the vendor application uses its own default.
    pub style: Option<LineStyle>,
}

impl Track {
    /// Creates a new track without a style.
    pub fn new(name: impl Into<String>, points: Vec<TrackPoint>) -> Self {
        Self {
            name: name.into(),
            points,
            style: None,
        }
    }

    /// Sets the stroke style of the track.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Closes the track into a ring by appending a copy of the first point,
    /// making it render as a polygon outline.
    ///
    /// Tracks with fewer than two points and tracks whose first and last
    /// points already share latitude and longitude are left unchanged, so
    /// calling this repeatedly has no further effect.
    pub fn close_ring(&mut self) {
        if self.points.len() < 2 {
            return;
        }

        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if first.latitude == last.latitude && first.longitude == last.longitude {
            return;
        }

        self.points.push(first);
    }
}
