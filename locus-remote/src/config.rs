use locus_remote_types::LineStyle;

use crate::pack::icon_digest;

/// Bridge behavior settings.
///
/// The defaults reproduce the wire contract the existing mobile integrations
/// rely on; change the pack naming only if every connected UI layer is updated
/// with it, since pack names are the only removal keys the vendor application
/// knows.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Name of the pack created by `displayPoints` sends.
    pub multi_point_pack_name: String,
    /// Name of the pack holding `startNavigation` target points.
    pub navigation_pack_name: String,
    /// Prefix of pack names created by single point updates.
    pub update_pack_prefix: String,
    /// Prefix of pack group names created by batched point updates.
    pub update_group_prefix: String,
    /// Style applied to tracks and shapes whose requests customize the stroke
    /// only partially or with unparsable values.
    pub default_style: LineStyle,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            multi_point_pack_name: "Multiple Points".to_string(),
            navigation_pack_name: "Navigation".to_string(),
            update_pack_prefix: "RealTime_".to_string(),
            update_group_prefix: "RealTime_Updates_".to_string(),
            default_style: LineStyle::default(),
        }
    }
}

impl BridgeConfig {
    /// Name of the pack a single point update with the given point name goes
    /// to.
    pub fn update_pack_name(&self, point_name: &str) -> String {
        format!("{}{}", self.update_pack_prefix, point_name)
    }

    /// Name of the pack batched updates use for points without an icon.
    pub fn default_update_group(&self) -> String {
        format!("{}Default", self.update_group_prefix)
    }

    /// Name of the pack batched updates use for points with the given icon
    /// path.
    ///
    /// The name embeds a digest of the path rather than the path itself, so it
    /// stays a valid pack name regardless of the characters in the path and is
    /// stable across processes and runs.
    pub fn update_group_for_icon(&self, icon_path: &str) -> String {
        format!("{}{}", self.update_group_prefix, icon_digest(icon_path))
    }
}
