// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/percent.rs
//
// Percentage helpers used by the crop-window mapping.

/// `percent` per cent of `number`.
#[must_use]
pub fn percent_of(percent: f64, number: f64) -> f64 {
    percent / 100.0 * number
}

/// How many per cent `number` is of `number_from`.
///
/// Not guarded: a zero `number_from` gives an infinite or NaN result.
#[must_use]
pub fn percent_diff(number: f64, number_from: f64) -> f64 {
    number / number_from * 100.0
}
