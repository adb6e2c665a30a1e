// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/cropper/fit.rs
//
// Fit-to-viewport sizing and minimum zoom scale for a freshly loaded image.

use crate::constant::{
    LANDSCAPE_RATIO_THRESHOLD, MIN_SCALE_FALLBACK, PORTRAIT_RATIO_THRESHOLD, SCALE_EPSILON,
    SCALE_ROUNDING_STEPS,
};
use crate::domain::geometry::Size;

/// Everything the fit computation depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitInput {
    /// Size reported by the image probe.
    pub natural: Size,
    /// Caller-supplied dimensions that replace `natural` for fitting.
    pub override_size: Option<Size>,
    pub viewport_width: f64,
    pub crop_area: Size,
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub allow_negative_scale: bool,
}

/// Result of [`fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Always the probed size, even when an override was used for fitting.
    pub src_size: Size,
    pub fitted_size: Size,
    pub min_scale: f64,
    /// `1.0` in fixed-cover mode, the image aspect ratio when negative scale is allowed.
    pub orientation_hint: f64,
}

/// Scale the image so its shorter side matches the viewport width.
#[must_use]
pub fn fitted_size(actual: Size, viewport_width: f64) -> Size {
    if actual.w > actual.h {
        let ratio = viewport_width / actual.h;
        Size::new(actual.w * ratio, viewport_width)
    } else if actual.w < actual.h {
        let ratio = viewport_width / actual.w;
        Size::new(viewport_width, actual.h * ratio)
    } else {
        Size::square(viewport_width)
    }
}

fn round_up_scale(value: f64) -> f64 {
    (value * SCALE_ROUNDING_STEPS).ceil() / SCALE_ROUNDING_STEPS + SCALE_EPSILON
}

/// Minimum scale that keeps the crop window covered by the image.
fn cover_scale(natural: Size, fitted: Size, crop_area: Size) -> f64 {
    let mut scale = 1.0;

    if crop_area.w <= crop_area.h {
        scale = if natural.w < natural.h {
            if fitted.h < crop_area.h {
                round_up_scale(crop_area.h / fitted.h)
            } else {
                round_up_scale(crop_area.w / fitted.w)
            }
        } else {
            round_up_scale(crop_area.h / fitted.h)
        };
    }

    if scale < 1.0 { MIN_SCALE_FALLBACK } else { scale }
}

/// Minimum scale when zooming out past fit is allowed, honouring the ratio lock
/// for strongly portrait or landscape images.
fn locked_ratio_scale(actual: Size, width_ratio: f64, height_ratio: f64) -> f64 {
    let ratio = actual.aspect_ratio();

    if ratio < 1.0 {
        let maximum_height = (height_ratio / width_ratio) * actual.w;
        if ratio < PORTRAIT_RATIO_THRESHOLD {
            return actual.w / maximum_height;
        }
    } else {
        let maximum_width = (width_ratio / height_ratio) * actual.h;
        if ratio > LANDSCAPE_RATIO_THRESHOLD {
            return maximum_width / actual.h;
        }
    }

    ratio
}

/// Compute fitted size and minimum scale for a loaded image.
#[must_use]
pub fn fit(input: &FitInput) -> Fit {
    let actual = input.override_size.unwrap_or(input.natural);
    let fitted = fitted_size(actual, input.viewport_width);

    let (min_scale, orientation_hint) = if input.allow_negative_scale {
        (
            locked_ratio_scale(actual, input.width_ratio, input.height_ratio),
            actual.aspect_ratio(),
        )
    } else {
        (cover_scale(input.natural, fitted, input.crop_area), 1.0)
    };

    Fit {
        src_size: input.natural,
        fitted_size: fitted,
        min_scale,
        orientation_hint,
    }
}
