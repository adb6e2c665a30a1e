// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/cropper/region.rs
//
// Map the visible crop window back to source-image pixels.

use std::path::PathBuf;

use crate::constant::DISPLAY_MAX_SIZE;
use crate::domain::geometry::{Orientation, Point, Size, percent_diff, percent_of};

/// Current view parameters handed to the crop computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub image: PathBuf,
    pub position_x: f64,
    pub position_y: f64,
    pub scale: f64,
    /// Crop window; `None` means a square of `viewport_width`.
    pub crop_area_size: Option<Size>,
    pub src_size: Size,
    pub fitted_size: Size,
    pub viewport_width: f64,
}

impl CropParams {
    pub fn crop_area(&self) -> Size {
        self.crop_area_size
            .unwrap_or_else(|| Size::square(self.viewport_width))
    }
}

/// Source-pixel rectangle plus the size the cropped output is encoded at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropData {
    pub offset: Point,
    pub size: Size,
    pub display_size: Size,
}

impl CropData {
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.size.orientation()
    }
}

/// Cap the longest side at [`DISPLAY_MAX_SIZE`], keeping the aspect ratio when
/// the image has a dominant side.
#[must_use]
pub fn display_size(size: Size) -> Size {
    let max = DISPLAY_MAX_SIZE;
    match size.orientation() {
        Orientation::Landscape if size.w > max => Size::new(max, size.h / (size.w / max)),
        Orientation::Portrait if size.h > max => Size::new(size.w / (size.h / max), max),
        _ => Size::new(size.w.min(max), size.h.min(max)),
    }
}

/// Per cent of the fitted image covered by the crop window along one axis,
/// and the hidden remainder in fitted pixels.
fn visible_axis(crop_extent: f64, scale: f64, fitted_extent: f64) -> (f64, f64) {
    let scaled = crop_extent / scale;
    let percent = cap_percent(percent_diff(scaled, fitted_extent));
    let hidden = percent_of(100.0 - percent, fitted_extent);
    (percent, hidden)
}

/// Cap at 100; NaN passes through unchanged.
fn cap_percent(value: f64) -> f64 {
    if value > 100.0 { 100.0 } else { value }
}

fn clamp_offset(value: f64) -> f64 {
    if value <= 0.0 { 0.0 } else { value }
}

/// Compute the source-pixel crop rectangle for the current view.
#[must_use]
pub fn compute_crop_data(params: &CropParams) -> CropData {
    let crop_area = params.crop_area();
    let fitted = params.fitted_size;
    let src = params.src_size;

    let (percent_w, hidden_w) = visible_axis(crop_area.w, params.scale, fitted.w);
    let (percent_h, hidden_h) = visible_axis(crop_area.h, params.scale, fitted.h);

    let x = clamp_offset(hidden_w / 2.0 - params.position_x);
    let y = clamp_offset(hidden_h / 2.0 - params.position_y);

    let offset = Point::new(
        percent_of(percent_diff(x, fitted.w), src.w),
        percent_of(percent_diff(y, fitted.h), src.h),
    );
    let size = Size::new(percent_of(percent_w, src.w), percent_of(percent_h, src.h));

    CropData {
        offset,
        size,
        display_size: display_size(size),
    }
}
