//! Loading and caching of point icons.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use log::{debug, warn};
use quick_cache::sync::Cache;

use crate::decoded_image::DecodedImage;

const DEFAULT_ASSET_PREFIX: &str = "assets/";
const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Source of files bundled with the host application.
///
/// Icon paths starting with the loader's asset prefix are read through this
/// trait instead of the filesystem, and paths that cannot be resolved any
/// other way fall back to it. What an asset is depends on the host: a file
/// packaged into the application bundle, an embedded resource, a directory
/// shipped next to the binary.
pub trait AssetReader: Send + Sync {
    /// Returns the raw contents of the asset at `path`, or `None` if there is
    /// no such asset.
    fn read(&self, path: &str) -> Option<Bytes>;
}

/// Asset reader resolving asset paths against a directory on disk.
pub struct DirAssetReader {
    root: PathBuf,
}

impl DirAssetReader {
    /// Creates a reader serving assets from the given directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().into(),
        }
    }
}

impl AssetReader for DirAssetReader {
    fn read(&self, path: &str) -> Option<Bytes> {
        read_file(&self.root.join(path))
    }
}

/// Asset reader for hosts that bundle no assets.
pub struct NoAssets;

impl AssetReader for NoAssets {
    fn read(&self, _path: &str) -> Option<Bytes> {
        None
    }
}

/// Loads and decodes point icons, keeping recently used ones in memory.
///
/// An icon path is resolved in this order:
///
/// 1. already decoded icons are served from the in-memory cache;
/// 2. paths starting with the asset prefix are read from the asset source;
/// 3. absolute paths are read from the filesystem;
/// 4. any other path is resolved against the files directory, falling back to
///    the asset source when that read fails.
///
/// Only successful decodes are memoized. A path that failed to load or decode
/// is attempted again on every call, so icons that appear on disk later are
/// picked up.
pub struct ImageLoader {
    assets: Box<dyn AssetReader>,
    files_dir: Option<PathBuf>,
    asset_prefix: String,
    cache: Cache<String, Arc<DecodedImage>>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    /// Creates a loader with no asset source, no files directory and the
    /// default cache size.
    pub fn new() -> Self {
        Self {
            assets: Box::new(NoAssets),
            files_dir: None,
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            cache: Cache::new(DEFAULT_CACHE_CAPACITY),
        }
    }

    /// Sets the source of bundled assets.
    pub fn with_assets(mut self, assets: impl AssetReader + 'static) -> Self {
        self.assets = Box::new(assets);
        self
    }

    /// Sets the directory against which relative icon paths are resolved.
    pub fn with_files_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.files_dir = Some(path.as_ref().into());
        self
    }

    /// Sets the path prefix that routes icon loads to the asset source.
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }

    /// Sets the maximum number of decoded icons kept in memory.
    ///
    /// Replaces the cache, so icons decoded before the call are dropped.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = Cache::new(capacity);
        self
    }

    /// Loads and decodes the icon at `path`.
    ///
    /// Returns `None` when the path cannot be resolved or its contents are not
    /// a decodable image. Repeated loads of the same path return the same
    /// shared image without touching storage.
    pub fn load(&self, path: &str) -> Option<Arc<DecodedImage>> {
        if let Some(image) = self.cache.get(path) {
            return Some(image);
        }

        let bytes = self.read(path)?;
        match DecodedImage::new(&bytes) {
            Ok(decoded) => {
                debug!("Icon {path} decoded ({} bytes)", bytes.len());
                let image = Arc::new(decoded);
                self.cache.insert(path.to_string(), image.clone());
                Some(image)
            }
            Err(err) => {
                warn!("Icon {path} could not be decoded: {err}");
                None
            }
        }
    }

    fn read(&self, path: &str) -> Option<Bytes> {
        if path.starts_with(&self.asset_prefix) {
            return self.assets.read(path);
        }

        if Path::new(path).is_absolute() {
            return read_file(Path::new(path));
        }

        if let Some(files_dir) = &self.files_dir {
            if let Some(bytes) = read_file(&files_dir.join(path)) {
                return Some(bytes);
            }
        }

        self.assets.read(path)
    }
}

fn read_file(path: &Path) -> Option<Bytes> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes.into()),
        Err(err) => {
            debug!("Icon file {path:?} could not be read: {err}");
            None
        }
    }
}
