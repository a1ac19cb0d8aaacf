pub mod amount;
pub mod classify;
pub mod config;
pub mod date;
pub mod extract;
pub mod normalize;
mod patterns;
pub mod pipeline;
pub mod recognizer;
pub mod types;
pub mod vendor;

pub use classify::{classify, CATEGORY_RULES};
pub use config::{ConfigError, ExtractorConfig};
pub use date::{DateFormat, DatePatternEntry, DATE_PATTERNS};
pub use extract::Extractor;
pub use normalize::LineList;
pub use pipeline::{PipelineError, ReceiptPipeline, ScanOutcome};
pub use recognizer::{MockRecognizer, OcrBackend, OcrError, PlainTextRecognizer};
pub use types::{ExpenseDraft, ExtractionResult, FieldConfidence};
