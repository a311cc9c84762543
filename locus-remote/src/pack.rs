use std::collections::BTreeMap;
use std::sync::Arc;

use locus_remote_types::GeoPoint;
use sha2::{Digest, Sha256};

use crate::decoded_image::DecodedImage;

/// A named collection of points sent to the vendor application as one unit.
///
/// The name is the pack's identity: sending a pack under the name of an
/// already displayed one replaces it, and removal works by name only. The
/// bridge performs no name mangling, so whatever created a pack must use the
/// same name to clear it.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPack {
    /// Name of the pack.
    pub name: String,
    /// The points of the pack.
    pub points: Vec<GeoPoint>,
    /// Icon shared by every point of the pack.
    pub icon: Option<Arc<DecodedImage>>,
}

impl PointPack {
    /// Creates a pack without an icon.
    pub fn new(name: impl Into<String>, points: Vec<GeoPoint>) -> Self {
        Self {
            name: name.into(),
            points,
            icon: None,
        }
    }

    /// Sets the icon shared by every point of the pack.
    pub fn with_icon(mut self, icon: Arc<DecodedImage>) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Splits points into groups sharing the same icon path.
///
/// Points without an icon, or with an empty icon path, form the `None` group.
/// The result is ordered by icon path so that the packs derived from the
/// groups are always produced in the same order.
pub(crate) fn group_by_icon(points: Vec<GeoPoint>) -> BTreeMap<Option<String>, Vec<GeoPoint>> {
    let mut groups: BTreeMap<Option<String>, Vec<GeoPoint>> = BTreeMap::new();
    for point in points {
        let key = point.icon.clone().filter(|icon| !icon.is_empty());
        groups.entry(key).or_default().push(point);
    }

    groups
}

/// Digest of an icon path embedded into update pack names.
///
/// Stable across processes and runs, so clients observing the vendor
/// application can rely on a given icon always producing the same pack name.
pub(crate) fn icon_digest(path: &str) -> String {
    let digest = Sha256::digest(path.as_bytes());
    hex::encode(&digest[..4])
}
