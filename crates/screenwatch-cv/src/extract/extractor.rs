//! Mask-to-regions extraction
//!
//! Fixed stage order: blur, inverted Otsu threshold, dilation, external
//! contours, bounding rectangles, size filter, left-to-right sort, crop.
//! An empty result is the expected degenerate case for a quiet frame, not an
//! error.

use super::config::ExtractConfig;
use crate::region::Region;
use crate::utils::ImageUtils;
use crate::Result;
use anyhow::Context;
use opencv::{
    core::{self, Mat, Point, Rect, Size, Vector},
    imgproc,
    prelude::*,
};
use std::path::Path;

pub struct RegionExtractor {
    config: ExtractConfig,
}

impl RegionExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract candidate text-line regions from an isolation mask, ordered by
    /// ascending x. Downstream consumers rely on that on-screen reading order.
    pub fn extract_regions(&self, mask: &Mat) -> Result<Vec<Region>> {
        let (bk_w, bk_h) = self.config.blur_kernel;
        let mut blurred = Mat::default();
        imgproc::gaussian_blur(
            mask,
            &mut blurred,
            Size::new(bk_w, bk_h),
            0.0,
            0.0,
            core::BORDER_DEFAULT,
        )
        .context("gaussian blur failed")?;

        // Otsu picks the threshold from the histogram; the inversion turns
        // the dark text strokes into foreground blobs.
        let mut binary = Mat::default();
        imgproc::threshold(
            &blurred,
            &mut binary,
            0.0,
            255.0,
            imgproc::THRESH_BINARY_INV + imgproc::THRESH_OTSU,
        )
        .context("otsu threshold failed")?;

        let (dk_w, dk_h) = self.config.dilate_kernel;
        let kernel = imgproc::get_structuring_element(
            imgproc::MORPH_RECT,
            Size::new(dk_w, dk_h),
            Point::new(-1, -1),
        )?;
        let mut dilated = Mat::default();
        imgproc::dilate(
            &binary,
            &mut dilated,
            &kernel,
            Point::new(-1, -1),
            self.config.dilate_iterations,
            core::BORDER_CONSTANT,
            imgproc::morphology_default_border_value()?,
        )
        .context("dilation failed")?;

        // Outer contours only; holes inside a line blob are irrelevant.
        let mut contours: Vector<Vector<Point>> = Vector::new();
        imgproc::find_contours(
            &dilated,
            &mut contours,
            imgproc::RETR_EXTERNAL,
            imgproc::CHAIN_APPROX_SIMPLE,
            Point::new(0, 0),
        )
        .context("contour extraction failed")?;

        let mut rects: Vec<Rect> = Vec::new();
        for contour in contours.iter() {
            let rect = imgproc::bounding_rect(&contour)?;
            if rect.height > self.config.min_height && rect.width > self.config.min_width {
                rects.push(rect);
            }
        }
        // Stable sort keeps ties deterministic.
        rects.sort_by_key(|rect| rect.x);

        let mut regions = Vec::with_capacity(rects.len());
        for rect in rects {
            // Crop from the input mask, not the dilated intermediate: the
            // recognizer wants the clean strokes, not the merged blobs.
            let crop = Mat::roi(mask, rect)?.try_clone()?;
            regions.push(Region::new(rect, crop));
        }

        if let Some(dir) = &self.config.dump_dir {
            self.dump_intermediates(dir, &blurred, &binary, &dilated)?;
        }

        log::debug!(
            "extracted {} candidate region(s) from {} contour(s)",
            regions.len(),
            contours.len()
        );
        Ok(regions)
    }

    fn dump_intermediates(
        &self,
        dir: &Path,
        blurred: &Mat,
        binary: &Mat,
        dilated: &Mat,
    ) -> Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create dump directory {:?}", dir))?;
        ImageUtils::save_gray(blurred, dir.join("blurred.png"))?;
        ImageUtils::save_gray(binary, dir.join("thresholded.png"))?;
        ImageUtils::save_gray(dilated, dir.join("dilated.png"))?;
        Ok(())
    }
}

impl Default for RegionExtractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{Scalar, CV_8UC1};
    use opencv::imgproc::LINE_8;

    /// All-white mask (no text strokes anywhere).
    fn blank_mask(rows: i32, cols: i32) -> Mat {
        Mat::new_rows_cols_with_default(rows, cols, CV_8UC1, Scalar::all(255.0)).unwrap()
    }

    /// Stamp a black blob, the way isolated text appears in the mask.
    fn stamp(mask: &mut Mat, rect: Rect) {
        imgproc::rectangle(mask, rect, Scalar::all(0.0), imgproc::FILLED, LINE_8, 0).unwrap();
    }

    #[test]
    fn test_empty_mask_yields_no_regions() {
        let mask = blank_mask(200, 600);
        let regions = RegionExtractor::default().extract_regions(&mask).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_undersized_noise_is_filtered() {
        let mut mask = blank_mask(200, 600);
        // Far below both minima even after dilation growth.
        stamp(&mut mask, Rect::new(10, 10, 50, 10));

        let regions = RegionExtractor::default().extract_regions(&mask).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_qualifying_blob_survives_next_to_noise() {
        let mut mask = blank_mask(200, 600);
        stamp(&mut mask, Rect::new(10, 10, 50, 10)); // too small
        stamp(&mut mask, Rect::new(50, 100, 250, 25)); // a text line

        let regions = RegionExtractor::default().extract_regions(&mask).unwrap();
        assert_eq!(regions.len(), 1);
        // Dilation grows the rectangle, so assert containment rather than
        // exact geometry.
        assert!(regions[0].contains(Rect::new(50, 100, 250, 25)));
        assert_eq!(regions[0].crop.size().unwrap().width, regions[0].width);
        assert_eq!(regions[0].crop.size().unwrap().height, regions[0].height);
    }

    #[test]
    fn test_regions_come_out_in_reading_order() {
        let mut mask = blank_mask(300, 900);
        // Stamped right-to-left; extraction must still order by x.
        stamp(&mut mask, Rect::new(300, 200, 250, 25));
        stamp(&mut mask, Rect::new(10, 50, 250, 25));

        let regions = RegionExtractor::default().extract_regions(&mask).unwrap();
        assert_eq!(regions.len(), 2);
        assert!(regions[0].x < regions[1].x);
        assert!(regions[0].contains(Rect::new(10, 50, 250, 25)));
        assert!(regions[1].contains(Rect::new(300, 200, 250, 25)));
    }

    #[test]
    fn test_minima_are_configurable() {
        let mut mask = blank_mask(200, 600);
        stamp(&mut mask, Rect::new(10, 10, 50, 10));

        let relaxed = RegionExtractor::new(ExtractConfig::with_minima(30, 5));
        let regions = relaxed.extract_regions(&mask).unwrap();
        assert_eq!(regions.len(), 1);
    }
}
