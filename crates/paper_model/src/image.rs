//! Raster image probing
//!
//! Detects the format of attached diagrams and logos from their magic bytes
//! and reads pixel dimensions straight from the file header, so no decoder
//! is needed just to size a picture on the page.

use serde::{Deserialize, Serialize};

/// Image formats that can be embedded in a printed paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Unknown,
}

impl ImageFormat {
    /// Detect format from magic bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        if data.len() < 4 {
            return Self::Unknown;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Self::Png;
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Self::Jpeg;
        }

        // GIF: 47 49 46 38
        if data.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
            return Self::Gif;
        }

        // BMP: 42 4D
        if data.starts_with(&[0x42, 0x4D]) {
            return Self::Bmp;
        }

        Self::Unknown
    }

    /// Get the MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Unknown => "application/octet-stream",
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Unknown => "bin",
        }
    }

    /// Check if this is a supported format
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Format and pixel size of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Probe raw bytes. Returns `None` for unknown formats or when the
    /// header carries no usable dimensions.
    pub fn probe(data: &[u8]) -> Option<Self> {
        let format = ImageFormat::from_bytes(data);
        let (width, height) = match format {
            ImageFormat::Png => png_dimensions(data),
            ImageFormat::Jpeg => jpeg_dimensions(data),
            ImageFormat::Gif => gif_dimensions(data),
            ImageFormat::Bmp => bmp_dimensions(data),
            ImageFormat::Unknown => None,
        }?;

        if width == 0 || height == 0 {
            return None;
        }

        Some(Self {
            format,
            width,
            height,
        })
    }

    /// Height divided by width
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }
}

fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    // IHDR: width at 16, height at 20
    let header = data.get(16..24)?;
    let width = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);
    let height = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);
    Some((width, height))
}

fn jpeg_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let mut i = 2;
    while i + 9 <= data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }
        let marker = data[i + 1];
        // Fill bytes and standalone markers carry no length
        if marker == 0xFF || marker == 0x01 || (0xD0..=0xD8).contains(&marker) {
            i += if marker == 0xFF { 1 } else { 2 };
            continue;
        }
        // SOF markers, excluding DHT (C4), JPG (C8) and DAC (CC)
        if (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC) {
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            return Some((width, height));
        }
        let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        if length < 2 {
            return None;
        }
        i += 2 + length;
    }
    None
}

fn gif_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let header = data.get(6..10)?;
    let width = u16::from_le_bytes([header[0], header[1]]) as u32;
    let height = u16::from_le_bytes([header[2], header[3]]) as u32;
    Some((width, height))
}

fn bmp_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let header = data.get(18..26)?;
    let width = i32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    // Height is negative for top-down bitmaps
    let height = i32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    Some((width.unsigned_abs(), height.unsigned_abs()))
}
