use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::extract::Extractor;
use crate::recognizer::{OcrBackend, OcrError};
use crate::types::ExtractionResult;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("OCR provider returned no text")]
    NoText,
    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// The result of processing one receipt file.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    pub source: PathBuf,
    #[serde(flatten)]
    pub result: ExtractionResult,
}

/// Orchestrates: OCR → empty-text check → extract.
///
/// Cloning is cheap and clones share the recognizer and extractor, so a
/// pipeline can be handed to as many tasks as needed.
pub struct ReceiptPipeline<R: OcrBackend> {
    recognizer: Arc<R>,
    extractor: Arc<Extractor>,
}

impl<R: OcrBackend> Clone for ReceiptPipeline<R> {
    fn clone(&self) -> Self {
        Self {
            recognizer: Arc::clone(&self.recognizer),
            extractor: Arc::clone(&self.extractor),
        }
    }
}

impl<R: OcrBackend + 'static> ReceiptPipeline<R> {
    pub fn new(recognizer: R, extractor: Extractor) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
            extractor: Arc::new(extractor),
        }
    }

    /// Run OCR on raw bytes and extract fields. Extraction is skipped when the
    /// provider yields nothing but whitespace.
    pub fn process_bytes(&self, data: &[u8]) -> Result<ExtractionResult, PipelineError> {
        let text = self.recognizer.detect_text(data)?;
        if text.trim().is_empty() {
            return Err(PipelineError::NoText);
        }
        Ok(self.extractor.extract(&text))
    }

    /// Process a file on disk. OCR and extraction run on the blocking pool.
    pub async fn process_file(&self, path: &Path) -> Result<ScanOutcome, PipelineError> {
        let bytes = tokio::fs::read(path).await?;
        let pipeline = self.clone();
        let result = tokio::task::spawn_blocking(move || pipeline.process_bytes(&bytes)).await??;

        info!(
            path = %path.display(),
            amount = ?result.amount,
            date = ?result.date,
            category = %result.category,
            "receipt processed"
        );
        Ok(ScanOutcome { source: path.to_path_buf(), result })
    }

    /// Process many files concurrently. Results come back in input order;
    /// one file failing does not affect the others.
    pub async fn process_batch(
        &self,
        paths: Vec<PathBuf>,
    ) -> Vec<(PathBuf, Result<ScanOutcome, PipelineError>)> {
        let handles: Vec<_> = paths
            .into_iter()
            .map(|path| {
                let pipeline = self.clone();
                let task_path = path.clone();
                let handle = tokio::spawn(async move { pipeline.process_file(&task_path).await });
                (path, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (path, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => Err(PipelineError::Task(e)),
            };
            if let Err(e) = &outcome {
                warn!(path = %path.display(), "receipt pipeline error: {e}");
            }
            results.push((path, outcome));
        }
        results
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
