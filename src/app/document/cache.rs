// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/cache.rs
//
// Output locations for cropped images.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::constant::{CACHE_DIR, OUTPUT_EXT};
use crate::domain::cropper::CropData;

/// Per-user cache directory for crop output, falling back to the temp dir.
pub fn default_output_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(CACHE_DIR)
}

/// Stable file name for cropping `source` with `data`.
///
/// The same source and crop data always map to the same file, so repeated
/// crops of an unchanged view overwrite instead of piling up.
pub fn output_path(dir: &Path, source: &Path, data: &CropData) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(source.to_string_lossy().as_bytes());
    for value in [
        data.offset.x,
        data.offset.y,
        data.size.w,
        data.size.h,
        data.display_size.w,
        data.display_size.h,
    ] {
        hasher.update(value.to_bits().to_le_bytes());
    }
    let digest = format!("{:x}", hasher.finalize());

    dir.join(format!("crop-{}.{}", &digest[..16], OUTPUT_EXT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::{Point, Size};

    fn data(x: f64) -> CropData {
        CropData {
            offset: Point::new(x, 0.0),
            size: Size::square(100.0),
            display_size: Size::square(100.0),
        }
    }

    #[test]
    fn test_output_path_is_stable() {
        let dir = Path::new("/tmp/out");
        let a = output_path(dir, Path::new("a.jpg"), &data(1.0));
        let b = output_path(dir, Path::new("a.jpg"), &data(1.0));
        assert_eq!(a, b);
        assert!(a.starts_with(dir));
        assert_eq!(a.extension().and_then(|e| e.to_str()), Some(OUTPUT_EXT));
    }

    #[test]
    fn test_output_path_depends_on_inputs() {
        let dir = Path::new("/tmp/out");
        let base = output_path(dir, Path::new("a.jpg"), &data(1.0));
        assert_ne!(base, output_path(dir, Path::new("b.jpg"), &data(1.0)));
        assert_ne!(base, output_path(dir, Path::new("a.jpg"), &data(2.0)));
    }

    #[test]
    fn test_default_output_dir_name() {
        assert!(default_output_dir().ends_with(CACHE_DIR));
    }
}
