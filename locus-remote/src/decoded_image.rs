//! Decoded raster images attached to point packs as icons.

/// An image that has been loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    bytes: Vec<u8>,
    dimensions: (u32, u32),
}

impl DecodedImage {
    /// Decode an image from a byte slice.
    ///
    /// Attempts to guess the format of the image from the data. Non-RGBA
    /// images will be converted to RGBA.
    pub fn new(bytes: &[u8]) -> Result<Self, image::ImageError> {
        use image::GenericImageView;
        let decoded = image::load_from_memory(bytes)?;
        let rgba = decoded.to_rgba8();
        let dimensions = decoded.dimensions();

        Ok(Self {
            bytes: rgba.into_vec(),
            dimensions,
        })
    }

    /// Raw bytes of the image in RGBA row-major order.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.dimensions.0
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.dimensions.1
    }
}
