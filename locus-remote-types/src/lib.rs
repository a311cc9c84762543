//! Geodata value objects for the Locus Map remote bridge.
//!
//! These are the values the bridge hands to the vendor application: display
//! points, track positions, styled tracks and circle overlays. They are plain
//! data with `serde` support matching the bridge's wire format, kept separate
//! from the bridge itself so host integrations can construct and inspect them
//! without pulling in the dispatch machinery.

mod circle;
mod color;
mod point;
mod style;
mod track;

pub use circle::Circle;
pub use color::Color;
pub use point::{GeoPoint, TrackPoint};
pub use style::LineStyle;
pub use track::Track;
