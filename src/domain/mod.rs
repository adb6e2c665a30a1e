// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: pure models and arithmetic, no I/O.

pub mod cropper;
pub mod document;
pub mod geometry;
