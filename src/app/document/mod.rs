// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// External image primitives: size probing and pixel crop/encode.

pub mod cache;
pub mod raster;

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;

use crate::domain::cropper::CropData;

pub use self::raster::{ImageSizeProbe, RasterEditor, RasterDocument};

/// Asynchronously reports the natural (width, height) of an image.
pub trait SizeProbe: Send + Sync {
    fn probe<'a>(&'a self, image: &'a Path) -> BoxFuture<'a, anyhow::Result<(u32, u32)>>;
}

/// Cuts `data` out of `image` and returns a reference to the new image.
pub trait ImageEditor: Send + Sync {
    fn crop_image<'a>(
        &'a self,
        image: &'a Path,
        data: &'a CropData,
    ) -> BoxFuture<'a, anyhow::Result<PathBuf>>;
}
