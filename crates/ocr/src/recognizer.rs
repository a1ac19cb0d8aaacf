use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("Tesseract not available — build with `tesseract` feature")]
    NotAvailable,
}

/// The OCR provider boundary: image bytes in, one newline-delimited text blob out.
pub trait OcrBackend: Send + Sync {
    fn detect_text(&self, image_bytes: &[u8]) -> Result<String, OcrError>;
}

impl<T: OcrBackend + ?Sized> OcrBackend for std::sync::Arc<T> {
    fn detect_text(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        (**self).detect_text(image_bytes)
    }
}

// ── Mock backend (always available, used for tests) ───────────────────────────

/// Returns a pre-set string regardless of input.
pub struct MockRecognizer {
    pub text: String,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OcrBackend for MockRecognizer {
    fn detect_text(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}

// ── Plain-text backend ────────────────────────────────────────────────────────

/// For input that has already been through OCR: the bytes are the text.
/// Invalid UTF-8 is replaced rather than rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRecognizer;

impl OcrBackend for PlainTextRecognizer {
    fn detect_text(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        Ok(String::from_utf8_lossy(image_bytes).into_owned())
    }
}

// ── Tesseract backend (optional, gated behind `tesseract` feature) ─────────────

#[cfg(feature = "tesseract")]
pub mod tesseract_backend {
    use super::{OcrBackend, OcrError};
    use leptess::LepTess;

    pub struct TesseractRecognizer {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractRecognizer {
        pub fn new(data_path: Option<String>, lang: &str) -> Self {
            Self { data_path, lang: lang.to_string() }
        }
    }

    impl OcrBackend for TesseractRecognizer {
        fn detect_text(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
            let mut lt = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.set_image_from_mem(image_bytes)
                .map_err(|e| OcrError::ImageDecode(e.to_string()))?;
            lt.get_utf8_text().map_err(|e| OcrError::Engine(e.to_string()))
        }
    }
}

/// Stand-in used when the crate is built without the `tesseract` feature.
#[cfg(not(feature = "tesseract"))]
pub struct UnavailableRecognizer;

#[cfg(not(feature = "tesseract"))]
impl OcrBackend for UnavailableRecognizer {
    fn detect_text(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Err(OcrError::NotAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_preset_text() {
        let r = MockRecognizer::new("STARBUCKS\n$5.50");
        assert_eq!(r.detect_text(b"fake image data").unwrap(), "STARBUCKS\n$5.50");
        assert_eq!(r.detect_text(b"").unwrap(), "STARBUCKS\n$5.50");
    }

    #[test]
    fn plain_text_passes_bytes_through() {
        let r = PlainTextRecognizer;
        assert_eq!(r.detect_text(b"Shell\nTotal $38.40").unwrap(), "Shell\nTotal $38.40");
    }

    #[test]
    fn plain_text_replaces_invalid_utf8() {
        let text = PlainTextRecognizer.detect_text(b"Caf\xff").unwrap();
        assert_eq!(text, "Caf\u{FFFD}");
    }

    #[test]
    fn arc_backend_delegates() {
        let r = std::sync::Arc::new(MockRecognizer::new("hello"));
        assert_eq!(r.detect_text(b"x").unwrap(), "hello");
    }

    #[cfg(not(feature = "tesseract"))]
    #[test]
    fn unavailable_backend_errors() {
        assert!(matches!(
            UnavailableRecognizer.detect_text(b"png"),
            Err(OcrError::NotAvailable)
        ));
    }
}
