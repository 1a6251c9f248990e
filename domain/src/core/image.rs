//! Decoded image value object

use std::sync::Arc;

/// A decoded picture ready for display (Value Object)
///
/// Pixels are RGBA8, row-major, `width * height * 4` bytes. The buffer is
/// shared, so cloning is cheap and the UI state can hold the same image as
/// the quiz it came from.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    source_url: String,
    width: u32,
    height: u32,
    rgba: Arc<[u8]>,
}

impl DecodedImage {
    /// Wrap an RGBA8 buffer.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn from_rgba(
        source_url: impl Into<String>,
        width: u32,
        height: u32,
        rgba: impl Into<Arc<[u8]>>,
    ) -> Option<Self> {
        let rgba = rgba.into();
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if rgba.len() != expected {
            return None;
        }
        Some(Self {
            source_url: source_url.into(),
            width,
            height,
            rgba,
        })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// RGBA value at `(x, y)`, or `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("source_url", &self.source_url)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}
