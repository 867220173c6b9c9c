//! Pixel sources that feed tone counting.

use histo_common::{HistoError, HistoResult};

/// A source of raw pixel data.
///
/// The counting pass only needs dimensions and a flat RGBA byte buffer
/// in row-major order, four bytes per pixel. Alpha is carried but
/// ignored by the counter.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Flat RGBA bytes, `width * height * 4` long.
    fn rgba(&self) -> &[u8];
}

/// Pixel source backed by a decoded image.
pub struct DecodedImage {
    image: image::RgbaImage,
}

impl DecodedImage {
    /// Decode an encoded image (PNG, JPEG, ...) into RGBA pixels.
    pub fn from_bytes(bytes: &[u8]) -> HistoResult<Self> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| HistoError::ImageDecode(e.to_string()))?;
        Ok(Self {
            image: decoded.to_rgba8(),
        })
    }

    pub fn from_image(image: image::DynamicImage) -> Self {
        Self {
            image: image.to_rgba8(),
        }
    }
}

impl From<image::RgbaImage> for DecodedImage {
    fn from(image: image::RgbaImage) -> Self {
        Self { image }
    }
}

impl PixelSource for DecodedImage {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn rgba(&self) -> &[u8] {
        self.image.as_raw()
    }
}
