//! Text recognition via Tesseract

use anyhow::Context;
use opencv::core::Mat;
use rusty_tesseract::Args;
use screenwatch_cv::traits::TextRecognizer;
use screenwatch_cv::utils::ImageUtils;
use std::collections::HashMap;

/// Recognizes one line of text per region crop.
///
/// Errors propagate to the pipeline, which treats them as "no output" for the
/// affected region; recognition failure is never fatal to an invocation.
pub struct TesseractRecognizer {
    args: Args,
}

impl TesseractRecognizer {
    pub fn new(lang: &str) -> Self {
        Self {
            args: Args {
                lang: lang.to_string(),
                config_variables: HashMap::new(),
                dpi: Some(150),
                // Region crops are single text lines by construction.
                psm: Some(7),
                oem: Some(3),
            },
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, crop: &Mat) -> screenwatch_cv::Result<String> {
        let gray = ImageUtils::gray_mat_to_image(crop)?;
        let dynamic = image::DynamicImage::ImageLuma8(gray);
        let input = rusty_tesseract::Image::from_dynamic_image(&dynamic)
            .context("tesseract rejected region crop")?;
        let text = rusty_tesseract::image_to_string(&input, &self.args)
            .context("tesseract recognition failed")?;
        // Tesseract appends a trailing newline and form feed.
        Ok(text.trim_end().to_string())
    }
}
