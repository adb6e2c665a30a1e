// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Whole-pixel crop region derived from fractional crop data.

use crate::domain::cropper::CropData;

/// Crop region in pixel coordinates.
///
/// Pure domain model: the rectangle actually cut out of the decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Round fractional crop data to pixels and clamp it into a
    /// `img_width` x `img_height` image.
    pub fn from_crop_data(data: &CropData, img_width: u32, img_height: u32) -> Self {
        let x = to_pixels(data.offset.x).min(img_width);
        let y = to_pixels(data.offset.y).min(img_height);
        let width = to_pixels(data.size.w).min(img_width - x);
        let height = to_pixels(data.size.h).min(img_height - y);
        Self { x, y, width, height }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Round to the nearest pixel; NaN and negatives become 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_pixels(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.round().min(f64::from(u32::MAX)) as u32
    }
}
