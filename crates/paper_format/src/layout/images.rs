//! Loading and sizing of logo and question images
//!
//! Each file is read once per invocation. Anything that cannot be read or
//! recognized is skipped with a warning so the element simply renders
//! without a picture.

use paper_model::{ImageInfo, ImageKey};
use std::collections::BTreeMap;
use std::path::Path;

/// Centimetres per pixel at 96 dpi
pub const CM_PER_PIXEL: f32 = 0.0264583;

/// Image bytes with their probed header information
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    pub data: Vec<u8>,
    pub info: ImageInfo,
    pub name: String,
}

impl LoadedImage {
    /// Probe bytes that are already in memory
    pub fn from_bytes(data: Vec<u8>, name: impl Into<String>) -> Option<Self> {
        let info = ImageInfo::probe(&data)?;
        Some(Self {
            data,
            info,
            name: name.into(),
        })
    }

    /// Size on the page for the given width/height cap
    ///
    /// The natural size at 96 dpi is used when it fits. Otherwise the width
    /// is capped first, and if the resulting height still exceeds the cap
    /// the width is re-derived from the capped height.
    pub fn capped_size_cm(&self, cap_cm: f32) -> (f32, f32) {
        let aspect = self.info.aspect();
        let mut width = (self.info.width as f32 * CM_PER_PIXEL).min(cap_cm);
        let mut height = width * aspect;
        if height > cap_cm {
            height = cap_cm;
            width = height / aspect;
        }
        (width, height)
    }

    /// Size on the page at a fixed height, preserving aspect ratio
    pub fn size_for_height_cm(&self, height_cm: f32) -> (f32, f32) {
        (height_cm / self.info.aspect(), height_cm)
    }
}

/// Read and probe an image file; `None` (with a warning) when unusable
pub fn load_image(path: &Path) -> Option<LoadedImage> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Skipping image {}: {}", path.display(), e);
            return None;
        }
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let image = LoadedImage::from_bytes(data, name);
    if image.is_none() {
        tracing::warn!(
            "Skipping image {}: not a readable PNG, JPEG, GIF or BMP",
            path.display()
        );
    }
    image
}

/// Header and question pictures for one formatting run
#[derive(Debug, Clone, Default)]
pub struct ImageAssets {
    pub logo: Option<LoadedImage>,
    pub questions: BTreeMap<ImageKey, LoadedImage>,
}

impl ImageAssets {
    /// Load the logo and every question image that resolves
    pub fn load(logo: Option<&Path>, questions: &BTreeMap<ImageKey, std::path::PathBuf>) -> Self {
        let logo = logo.and_then(load_image);
        let questions = questions
            .iter()
            .filter_map(|(key, path)| load_image(path).map(|image| (*key, image)))
            .collect();
        Self { logo, questions }
    }
}
