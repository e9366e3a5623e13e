//! Concrete collaborator integrations
//!
//! Real backends behind the pipeline's `FrameSource` / `TextRecognizer` /
//! `AlertSink` seams: xcap for capture, Tesseract for recognition, rodio for
//! the alert clip. Unit tests of the pipeline never link these.

pub mod alert;
pub mod capture;
pub mod ocr;

pub use alert::AudioAlert;
pub use capture::MonitorSource;
pub use ocr::TesseractRecognizer;
