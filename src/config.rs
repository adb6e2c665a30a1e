// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the cropper.

use std::path::{Path, PathBuf};

use crate::app::CropperProps;
use crate::app::document::cache;
use crate::constant::DEFAULT_VIEWPORT_WIDTH;

/// Global configuration for the cropper.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Width of the screen area the image is fitted to.
    pub viewport_width: f64,
    /// Crop window size; `None` means a square of `viewport_width`.
    pub crop_area_width: Option<f64>,
    pub crop_area_height: Option<f64>,
    /// Locked target aspect ratio (width : height).
    pub width_ratio: f64,
    pub height_ratio: f64,
    /// Allow zooming out beyond fit.
    pub allow_negative_scale: bool,
    /// Directory cropped images are written to.
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            crop_area_width: None,
            crop_area_height: None,
            width_ratio: 1.0,
            height_ratio: 1.0,
            allow_negative_scale: false,
            output_dir: cache::default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Cropper props for `image` under this configuration.
    pub fn props_for(&self, image: &Path) -> CropperProps {
        let mut props = CropperProps::new(image, self.viewport_width);
        if let Some(width) = self.crop_area_width {
            props.crop_area_width = width;
        }
        if let Some(height) = self.crop_area_height {
            props.crop_area_height = height;
        }
        props.width_ratio = self.width_ratio;
        props.height_ratio = self.height_ratio;
        props.allow_negative_scale = self.allow_negative_scale;
        props
    }
}
