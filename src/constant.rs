// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Cropper constants that should not be changed by the user.

/// Added to the rounded-up minimum scale so it never lands exactly on a step.
pub const SCALE_EPSILON: f64 = 0.0001;

/// Minimum scale used when the computed one would zoom out below fit.
pub const MIN_SCALE_FALLBACK: f64 = 1.001;

/// Scale rounding granularity (tenths).
pub const SCALE_ROUNDING_STEPS: f64 = 10.0;

/// Aspect ratio below which a portrait image gets the locked-ratio scale.
pub const PORTRAIT_RATIO_THRESHOLD: f64 = 0.8;

/// Aspect ratio above which a landscape image gets the locked-ratio scale.
pub const LANDSCAPE_RATIO_THRESHOLD: f64 = 1.25;

/// Longest side of the encoded crop output, in pixels.
pub const DISPLAY_MAX_SIZE: f64 = 1000.0;

/// Viewport width used when nothing else is configured (a typical phone, in points).
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 375.0;

/// Output cache directory name.
pub const CACHE_DIR: &str = "cropframe";

/// Output file extension.
pub const OUTPUT_EXT: &str = "png";
