//! Feature map loading from binary mask images
//!
//! Feature detection happens upstream: any tool that writes an edge or point mask
//! as an image can feed a walk. Pixels at or above the luma threshold are eligible.

use crate::io::configuration::MAX_MAP_DIMENSION;
use crate::io::error::{Result, WalkError};
use crate::spatial::feature_map::FeatureMap;
use image::GrayImage;
use ndarray::Array2;
use std::path::Path;

/// How mask pixels are turned into eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskOptions {
    /// Luma value at or above which a pixel is "on"
    pub threshold: u8,
    /// Treat dark pixels as "on" instead
    pub invert: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            threshold: crate::io::configuration::DEFAULT_LUMA_THRESHOLD,
            invert: false,
        }
    }
}

impl MaskOptions {
    /// Decide eligibility for a single luma value
    pub const fn is_on(&self, luma: u8) -> bool {
        (luma >= self.threshold) != self.invert
    }
}

/// Convert a grayscale image into a feature map in (row, col) = (y, x) layout
pub fn feature_map_from_luma(image: &GrayImage, options: MaskOptions) -> FeatureMap {
    let (width, height) = image.dimensions();
    let mut cells = Array2::from_elem((height as usize, width as usize), false);

    for (x, y, pixel) in image.enumerate_pixels() {
        if let Some(cell) = cells.get_mut([y as usize, x as usize]) {
            *cell = options.is_on(pixel.0[0]);
        }
    }

    FeatureMap::from_mask(cells)
}

/// Load a mask image from disk into a feature map
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - Either image dimension exceeds the supported maximum
/// - No pixel passes the threshold
pub fn load_feature_map<P: AsRef<Path>>(path: P, options: MaskOptions) -> Result<FeatureMap> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| WalkError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;

    let (width, height) = (img.width() as usize, img.height() as usize);
    if width > MAX_MAP_DIMENSION || height > MAX_MAP_DIMENSION {
        return Err(WalkError::InvalidSourceData {
            reason: format!(
                "mask '{}' is {width}x{height}, limit is {MAX_MAP_DIMENSION} per side",
                path_buf.display()
            ),
        });
    }

    let map = feature_map_from_luma(&img.to_luma8(), options);
    if map.eligible_count() == 0 {
        return Err(WalkError::InvalidSourceData {
            reason: format!(
                "mask '{}' has no pixels passing threshold {}",
                path_buf.display(),
                options.threshold
            ),
        });
    }

    Ok(map)
}
