// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry/size.rs
//
// Size, point and orientation primitives.

use std::fmt;

/// Width/height pair in (possibly fractional) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Square of side `side`.
    pub fn square(side: f64) -> Self {
        Self { w: side, h: side }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self {
            w: f64::from(width),
            h: f64::from(height),
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.w, self.h)
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.w / self.h
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Aspect classification. The discriminants are the numeric codes callers see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Square = 0,
    Landscape = 1,
    Portrait = 2,
}

impl Orientation {
    pub fn of(w: f64, h: f64) -> Self {
        if w > h {
            Self::Landscape
        } else if h > w {
            Self::Portrait
        } else {
            Self::Square
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => write!(f, "Square"),
            Self::Landscape => write!(f, "Landscape"),
            Self::Portrait => write!(f, "Portrait"),
        }
    }
}
