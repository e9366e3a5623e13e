//! Color isolation
//!
//! The watched text renders in a narrow, known color band. Isolation converts
//! the frame to HSV, marks the in-band pixels, and returns the complement:
//! text comes out black and everything else white, like print on a page,
//! which is the orientation both the contour stage and the recognizer expect.

use crate::Result;
use opencv::{
    core::{self, Mat, Scalar},
    imgproc,
};
use screenwatch_core::HsvBounds;

/// Pure frame-to-mask converter for one HSV window.
#[derive(Debug, Clone, Copy)]
pub struct ColorIsolator {
    bounds: HsvBounds,
}

impl ColorIsolator {
    pub fn new(bounds: HsvBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> HsvBounds {
        self.bounds
    }

    /// BGR(A) frame to binary mask. In-band pixels become 0, all others 255.
    /// Deterministic for a given frame and bounds; no side effects.
    pub fn isolate(&self, frame: &Mat) -> Result<Mat> {
        // BGR2HSV accepts a 4th channel and ignores it, so BGRA captures
        // pass through unchanged.
        let mut hsv = Mat::default();
        imgproc::cvt_color(frame, &mut hsv, imgproc::COLOR_BGR2HSV, 0)?;

        let lower = scalar(self.bounds.lower);
        let upper = scalar(self.bounds.upper);

        let mut in_band = Mat::default();
        core::in_range(&hsv, &lower, &upper, &mut in_band)?;

        let mut mask = Mat::default();
        core::bitwise_not(&in_band, &mut mask, &core::no_array())?;
        Ok(mask)
    }
}

fn scalar(hsv: [u8; 3]) -> Scalar {
    Scalar::new(hsv[0] as f64, hsv[1] as f64, hsv[2] as f64, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::CV_8UC4;
    use opencv::prelude::*;

    fn solid_bgra(rows: i32, cols: i32, b: u8, g: u8, r: u8) -> Mat {
        Mat::new_rows_cols_with_default(
            rows,
            cols,
            CV_8UC4,
            Scalar::new(b as f64, g as f64, r as f64, 255.0),
        )
        .unwrap()
    }

    #[test]
    fn test_out_of_band_frame_is_all_foreground() {
        // Solid white sits far outside the narrow equipment band, so the
        // complement mask must be foreground everywhere.
        let frame = solid_bgra(40, 60, 255, 255, 255);
        let isolator = ColorIsolator::new(HsvBounds::for_mode("equipment"));

        let mask = isolator.isolate(&frame).unwrap();
        assert_eq!(mask.size().unwrap(), frame.size().unwrap());
        assert_eq!(core::count_non_zero(&mask).unwrap(), 40 * 60);
    }

    #[test]
    fn test_in_band_frame_is_all_background() {
        // The full range catches every pixel, so everything is "text".
        let frame = solid_bgra(40, 60, 10, 20, 30);
        let isolator = ColorIsolator::new(HsvBounds::full_range());

        let mask = isolator.isolate(&frame).unwrap();
        assert_eq!(core::count_non_zero(&mask).unwrap(), 0);
    }
}
