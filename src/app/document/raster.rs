// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, ensure};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use image::{DynamicImage, GenericImageView, ImageReader, imageops::FilterType};
use log::debug;

use super::{ImageEditor, SizeProbe, cache};
use crate::domain::cropper::{CropData, display_size};
use crate::domain::geometry::Size;
use crate::domain::document::operations::crop::{CropRegion, to_pixels};

/// Represents a raster image document (PNG, JPEG, WebP, ...).
pub struct RasterDocument {
    /// The decoded image document.
    document: DynamicImage,
}

impl RasterDocument {
    /// Load a raster document from disk.
    pub fn open(path: &Path) -> image::ImageResult<Self> {
        let document = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(Self { document })
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    /// Cut `region` out of the document.
    pub fn crop(&mut self, region: CropRegion) {
        let (x, y, width, height) = region.as_tuple();
        self.document = self.document.crop_imm(x, y, width, height);
    }

    /// Resample to exactly `width` x `height`; no-op when already that size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.dimensions() != (width, height) {
            self.document = self
                .document
                .resize_exact(width, height, FilterType::Lanczos3);
        }
    }

    /// Save the current document to disk.
    pub fn save(&self, path: &Path) -> image::ImageResult<()> {
        self.document.save(path)
    }
}

/// Read only the image header to get its size.
pub fn probe_dimensions(path: &Path) -> anyhow::Result<(u32, u32)> {
    image::image_dimensions(path)
        .with_context(|| format!("failed to read image size of {}", path.display()))
}

/// Encoded size for `region`: the requested display size, or one derived from
/// the region itself when it had to be trimmed to the image bounds.
fn output_size(data: &CropData, region: CropRegion) -> (u32, u32) {
    let requested = (to_pixels(data.size.w), to_pixels(data.size.h));
    let display = if requested == (region.width, region.height) {
        data.display_size
    } else {
        display_size(Size::from_pixels(region.width, region.height))
    };
    (to_pixels(display.w).max(1), to_pixels(display.h).max(1))
}

/// Crop, resize to the display size, and write the result as a new file.
pub fn crop_to_file(source: &Path, data: &CropData, output_dir: &Path) -> anyhow::Result<PathBuf> {
    let mut document = RasterDocument::open(source)
        .with_context(|| format!("failed to open {}", source.display()))?;
    let (img_width, img_height) = document.dimensions();

    let region = CropRegion::from_crop_data(data, img_width, img_height);
    ensure!(
        region.is_valid(),
        "crop region {:?} is empty for a {}x{} image",
        region.as_tuple(),
        img_width,
        img_height
    );
    document.crop(region);

    let (display_w, display_h) = output_size(data, region);
    document.resize(display_w, display_h);

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let output = cache::output_path(output_dir, source, data);
    document
        .save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    debug!(
        "Cropped {} region {:?} -> {} ({}x{})",
        source.display(),
        region.as_tuple(),
        output.display(),
        display_w,
        display_h
    );
    Ok(output)
}

/// [`ImageEditor`] backed by the `image` crate, writing into `output_dir`.
#[derive(Debug, Clone)]
pub struct RasterEditor {
    output_dir: PathBuf,
}

impl RasterEditor {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for RasterEditor {
    fn default() -> Self {
        Self::new(cache::default_output_dir())
    }
}

impl ImageEditor for RasterEditor {
    fn crop_image<'a>(
        &'a self,
        image: &'a Path,
        data: &'a CropData,
    ) -> BoxFuture<'a, anyhow::Result<PathBuf>> {
        let source = image.to_path_buf();
        let data = *data;
        let output_dir = self.output_dir.clone();

        async move {
            tokio::task::spawn_blocking(move || crop_to_file(&source, &data, &output_dir))
                .await
                .context("crop task failed")?
        }
        .boxed()
    }
}

/// [`SizeProbe`] reading the image header on a blocking thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageSizeProbe;

impl SizeProbe for ImageSizeProbe {
    fn probe<'a>(&'a self, image: &'a Path) -> BoxFuture<'a, anyhow::Result<(u32, u32)>> {
        let path = image.to_path_buf();
        async move {
            tokio::task::spawn_blocking(move || probe_dimensions(&path))
                .await
                .context("size probe task failed")?
        }
        .boxed()
    }
}
