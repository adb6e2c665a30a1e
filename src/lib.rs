// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Pan/zoom image cropper: fit-to-viewport sizing, crop-window mapping and
// pixel cropping through a pluggable image editor.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;

pub use app::{CropOutcome, CropperListener, ImageCropper, PanZoomHandle, ViewState, crop};
pub use config::AppConfig;
pub use domain::cropper::{CropData, CropParams, compute_crop_data};
pub use domain::geometry::{Orientation, Point, Size};
