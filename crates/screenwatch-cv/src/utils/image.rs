//! Conversions between `image` buffers and OpenCV Mats

use crate::Result;
use anyhow::Context;
use opencv::{
    core::{Mat, Vector},
    imgcodecs, imgproc,
    prelude::*,
};
use std::path::Path;

/// Image conversion helpers shared by the pipeline and the collaborator
/// integrations.
pub struct ImageUtils;

impl ImageUtils {
    /// Capture buffers arrive as RGBA; the pipeline works on the capture
    /// source's native BGRA layout.
    pub fn rgba_to_bgra_mat(rgba: &image::RgbaImage) -> Result<Mat> {
        let flat = Mat::from_slice(rgba.as_raw()).context("failed to wrap capture buffer")?;
        let packed = flat
            .reshape(4, rgba.height() as i32)
            .context("capture buffer has unexpected size")?;

        let mut bgra = Mat::default();
        imgproc::cvt_color(&packed, &mut bgra, imgproc::COLOR_RGBA2BGRA, 0)
            .context("RGBA to BGRA conversion failed")?;
        Ok(bgra)
    }

    /// Single-channel Mat to an owned grayscale buffer for the recognizer.
    pub fn gray_mat_to_image(mat: &Mat) -> Result<image::GrayImage> {
        anyhow::ensure!(
            mat.channels() == 1,
            "expected single-channel mat, got {} channels",
            mat.channels()
        );
        // Region crops are views into a larger mask; clone to get contiguous
        // row data before handing the bytes over.
        let contiguous;
        let mat = if mat.is_continuous() {
            mat
        } else {
            contiguous = mat.try_clone()?;
            &contiguous
        };

        let size = mat.size()?;
        let data = mat.data_bytes()?.to_vec();
        image::GrayImage::from_raw(size.width as u32, size.height as u32, data)
            .context("mat dimensions do not match its data")
    }

    /// Save a single-channel Mat, used for debug dumps of intermediates.
    pub fn save_gray<P: AsRef<Path>>(mat: &Mat, path: P) -> Result<()> {
        let path_str = path.as_ref().to_string_lossy();
        imgcodecs::imwrite(&path_str, mat, &Vector::new())
            .with_context(|| format!("failed to save image: {}", path_str))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{Rect, Scalar, CV_8UC1};

    #[test]
    fn test_rgba_round_trip_keeps_dimensions() {
        let rgba = image::RgbaImage::from_pixel(64, 48, image::Rgba([10, 20, 30, 255]));
        let mat = ImageUtils::rgba_to_bgra_mat(&rgba).unwrap();

        let size = mat.size().unwrap();
        assert_eq!((size.width, size.height), (64, 48));
        assert_eq!(mat.channels(), 4);
    }

    #[test]
    fn test_non_contiguous_crop_converts() {
        let mut mask =
            Mat::new_rows_cols_with_default(100, 100, CV_8UC1, Scalar::all(255.0)).unwrap();
        // Mat::roi returns a BoxedRef which can't be passed as &Mat;
        // adjust_roi yields an owned Mat that is still a non-contiguous view.
        // These deltas shrink the mat to Rect::new(10, 10, 30, 20).
        let crop = mask.adjust_roi(-10, -70, -10, -60).unwrap();

        let img = ImageUtils::gray_mat_to_image(&crop).unwrap();

        assert_eq!(img.dimensions(), (30, 20));
        assert!(img.pixels().all(|p| p.0[0] == 255));
    }
}
