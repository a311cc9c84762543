//! The operation dispatch table.

use log::{debug, warn};

use crate::call::MethodCall;
use crate::config::BridgeConfig;
use crate::foreground::Foreground;
use crate::image_loader::ImageLoader;
use crate::ops;
use crate::outcome::Outcome;
use crate::vendor::VendorApi;

/// Routes method calls from the channel host to their operation handlers.
///
/// A dispatcher is constructed once per host integration and then handed
/// every incoming call. It owns the vendor seam, the bridge configuration and
/// the icon loader; the handlers borrow all three through it. Dispatch is
/// synchronous: a call runs to completion, producing exactly one [`Outcome`],
/// before the next one is accepted.
///
/// ```ignore
/// let dispatcher = Dispatcher::new(AndroidVendor::new())
///     .with_images(ImageLoader::new().with_assets(DirAssetReader::new("res")));
///
/// let outcome = dispatcher.dispatch(foreground, &method_call);
/// channel.respond(outcome.to_wire());
/// ```
pub struct Dispatcher<V: VendorApi> {
    pub(crate) vendor: V,
    pub(crate) config: BridgeConfig,
    pub(crate) images: ImageLoader,
}

impl<V: VendorApi> Dispatcher<V> {
    /// Creates a dispatcher with the default configuration and an icon loader
    /// without an asset source.
    pub fn new(vendor: V) -> Self {
        Self {
            vendor,
            config: BridgeConfig::default(),
            images: ImageLoader::new(),
        }
    }

    /// Sets the bridge configuration.
    pub fn with_config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the icon loader.
    pub fn with_images(mut self, images: ImageLoader) -> Self {
        self.images = images;
        self
    }

    /// The vendor seam this dispatcher forwards to.
    pub fn vendor(&self) -> &V {
        &self.vendor
    }

    /// Runs one operation and reports its outcome.
    ///
    /// `foreground` is the host's current foreground token; operations that
    /// interact with the vendor UI fail with
    /// [`BridgeError::NoForeground`](crate::BridgeError) when it is `None`.
    /// Operation names outside the contract produce
    /// [`Outcome::NotImplemented`].
    pub fn dispatch(&self, foreground: Option<Foreground>, call: &MethodCall) -> Outcome {
        debug!("Dispatching operation {}", call.operation);

        let result = match call.operation.as_str() {
            "isLocusMapInstalled" => ops::info::is_installed(self),
            "getLocusInfo" => ops::info::locus_info(self),
            "getActiveVersionInfo" => ops::info::active_version_info(self),
            "openLocusMap" => ops::info::open_app(self),

            "displayPoint" => ops::points::display_point(self, foreground, call),
            "displayPoints" => ops::points::display_points(self, foreground, call),
            "startNavigation" => ops::points::start_navigation(self, foreground, call),
            "updatePoint" => ops::points::update_point(self, foreground, call),
            "updatePoints" => ops::points::update_points(self, foreground, call),
            "clearPoints" => ops::points::clear_points(self, foreground, call),
            "clearPointsWithName" => ops::points::clear_points_with_name(self, foreground, call),

            "startTrackRecording" => ops::recording::start(self, foreground),
            "stopTrackRecording" => ops::recording::stop(self, foreground),
            "pauseTrackRecording" => ops::recording::pause(self, foreground),
            "resumeTrackRecording" => ops::recording::resume(self, foreground),
            "isTrackRecording" => ops::recording::is_recording(),

            "displayTrack" => ops::tracks::display_track(self, foreground, call),
            "displayTracks" => ops::tracks::display_tracks(self, foreground, call),
            "updateTrack" => ops::tracks::update_track(self, foreground, call),
            "updateTracks" => ops::tracks::update_tracks(self, foreground, call),
            "clearTracks" => ops::tracks::clear_tracks(self, foreground),
            "clearTrackByName" => ops::tracks::clear_track_by_name(self, foreground, call),

            "openPointDetailById" => ops::screens::open_point_detail(self, foreground, call),
            "startNavigationById" => {
                ops::screens::start_navigation_to_item(self, foreground, call)
            }
            "startGuidingById" => ops::screens::start_guiding_to_item(self, foreground, call),
            "openAddress" => ops::screens::open_address(self, foreground, call),
            "navigateTo" => ops::screens::navigate_to(self, foreground, call),
            "addNewWmsMap" => ops::screens::add_wms_map(self, foreground, call),
            "openFieldNotes" => ops::screens::open_field_notes(self, foreground, call),
            "logFieldNotes" => ops::screens::log_field_notes(self, foreground, call),

            "importPointsFromFile" => ops::files::import_points(self, call),
            "importTracksFromFile" => ops::files::import_tracks(self, foreground, call),
            "viewFileInLocus" => ops::files::view_file(self, foreground, call),

            "displayCircles" => ops::shapes::display_circles(self, call),
            "removeCirclesByIds" => ops::shapes::clear_circles(self),
            "clearCircles" => ops::shapes::clear_circles(self),
            "displayPolylines" => ops::shapes::display_polylines(self, foreground, call),
            "displayPolygons" => ops::shapes::display_polygons(self, foreground, call),

            _ => {
                debug!("Operation {} is not implemented", call.operation);
                return Outcome::NotImplemented;
            }
        };

        if let Err(err) = &result {
            warn!("Operation {} failed: {err}", call.operation);
        }

        result.into()
    }
}
