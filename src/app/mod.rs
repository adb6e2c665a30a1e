// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Application layer: the cropper component and its external collaborators.

pub mod cropper;
pub mod document;
pub mod message;
pub mod model;

pub use cropper::{
    CropOutcome, CropperListener, HeadlessPanZoom, ImageCropper, PanZoomHandle, crop,
};
pub use message::CropperMessage;
pub use model::{CenterOn, CropperProps, PanZoomProps, ViewState};
