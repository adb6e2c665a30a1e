// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Cropper messages: gestures from the pan/zoom widget and prop changes.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum CropperMessage {
    // Gestures.
    Moved {
        position_x: f64,
        position_y: f64,
        scale: f64,
    },
    SmartZoom,

    // Props.
    ImageChanged(PathBuf),
}
