// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/mod.rs
//
// Numeric primitives shared by the fit and crop computations.

mod percent;
mod size;

pub use percent::{percent_diff, percent_of};
pub use size::{Orientation, Point, Size};
