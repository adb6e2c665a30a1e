// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Cropper properties, transient view state and widget-facing types.

use std::path::PathBuf;

use crate::domain::geometry::Size;

// =============================================================================
// Properties
// =============================================================================

/// Caller-supplied cropper configuration for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct CropperProps {
    pub image: PathBuf,
    pub viewport_width: f64,
    pub crop_area_width: f64,
    pub crop_area_height: f64,
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub allow_negative_scale: bool,
    /// Optional dimensions used for fitting instead of the probed ones.
    pub image_width: Option<f64>,
    pub image_height: Option<f64>,
}

impl CropperProps {
    /// Defaults: square crop window of `viewport_width`, 1:1 ratio lock,
    /// no zooming out past fit.
    pub fn new(image: impl Into<PathBuf>, viewport_width: f64) -> Self {
        Self {
            image: image.into(),
            viewport_width,
            crop_area_width: viewport_width,
            crop_area_height: viewport_width,
            width_ratio: 1.0,
            height_ratio: 1.0,
            allow_negative_scale: false,
            image_width: None,
            image_height: None,
        }
    }

    pub fn crop_area(&self) -> Size {
        Size::new(self.crop_area_width, self.crop_area_height)
    }

    /// The override size, only when both sides are given and non-zero.
    pub fn override_size(&self) -> Option<Size> {
        match (self.image_width, self.image_height) {
            (Some(w), Some(h)) if w != 0.0 && h != 0.0 => Some(Size::new(w, h)),
            _ => None,
        }
    }
}

// =============================================================================
// State
// =============================================================================

/// Transient state, recomputed per image load and per gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub position_x: f64,
    pub position_y: f64,
    /// Unset until the first gesture or smart zoom.
    pub scale: Option<f64>,
    pub min_scale: f64,
    pub loading: bool,
    pub allow_negative_scale: bool,
    /// `1.0` in fixed-cover mode, the image aspect ratio otherwise.
    pub orientation_hint: Option<f64>,
    pub src_size: Option<Size>,
    pub fitted_size: Option<Size>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            position_x: 0.0,
            position_y: 0.0,
            scale: None,
            min_scale: 1.0,
            loading: true,
            allow_negative_scale: false,
            orientation_hint: None,
            src_size: None,
            fitted_size: None,
        }
    }
}

// =============================================================================
// Pan/zoom widget
// =============================================================================

/// Request to move the pan/zoom widget's viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterOn {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Animation length in milliseconds; `None` uses the widget default.
    pub duration: Option<u32>,
}

/// Properties the external pan/zoom widget is rendered with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanZoomProps {
    pub crop_width: f64,
    pub crop_height: f64,
    pub image_width: f64,
    pub image_height: f64,
    pub min_scale: f64,
    pub enable_center_focus: bool,
}
