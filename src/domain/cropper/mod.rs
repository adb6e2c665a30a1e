// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/cropper/mod.rs
//
// Pure cropper arithmetic: fit-to-viewport on load, crop-window mapping on crop.

mod fit;
mod region;

pub use fit::{Fit, FitInput, fit, fitted_size};
pub use region::{CropData, CropParams, compute_crop_data, display_size};
