use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use tracing::info;

use slipscan_ocr::{
    ExtractionResult, Extractor, OcrBackend, PlainTextRecognizer, ReceiptPipeline, ScanOutcome,
    CATEGORY_RULES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Input files already contain OCR text
    Text,
    /// Run Tesseract on image files (requires the `tesseract` feature)
    Tesseract,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Receipt files to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// How to turn file contents into text
    #[arg(long, value_enum, default_value_t = Engine::Text)]
    pub engine: Engine,

    /// Reference date for the validity window (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

fn backend(engine: Engine) -> Arc<dyn OcrBackend> {
    match engine {
        Engine::Text => Arc::new(PlainTextRecognizer),
        #[cfg(feature = "tesseract")]
        Engine::Tesseract => Arc::new(
            slipscan_ocr::recognizer::tesseract_backend::TesseractRecognizer::new(None, "eng"),
        ),
        #[cfg(not(feature = "tesseract"))]
        Engine::Tesseract => Arc::new(slipscan_ocr::recognizer::UnavailableRecognizer),
    }
}

/// Returns the number of files that could not be processed.
pub async fn extract(args: ExtractArgs, extractor: Extractor) -> anyhow::Result<usize> {
    let extractor = match args.today {
        Some(today) => extractor.with_today(today),
        None => extractor,
    };
    let pipeline = ReceiptPipeline::new(backend(args.engine), extractor);

    let mut failed = 0usize;
    let mut outcomes = Vec::new();
    for (path, result) in pipeline.process_batch(args.files).await {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                failed += 1;
                eprintln!("{}: {e}", path.display());
            }
        }
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Text => {
            for outcome in &outcomes {
                print!("{}", render_outcome(outcome));
            }
        }
    }

    info!(processed = outcomes.len(), failed, "extraction run finished");
    Ok(failed)
}

fn field<T: std::fmt::Display>(value: Option<T>, confidence: f32) -> String {
    match value {
        Some(v) => format!("{v} ({confidence:.1})"),
        None => "-".to_string(),
    }
}

pub fn render_outcome(outcome: &ScanOutcome) -> String {
    let r: &ExtractionResult = &outcome.result;
    let mut out = String::new();
    let _ = writeln!(out, "{}", outcome.source.display());
    let _ = writeln!(out, "  vendor:   {}", field(r.vendor.as_deref(), r.confidence.vendor));
    let _ = writeln!(out, "  date:     {}", field(r.date, r.confidence.date));
    let _ = writeln!(out, "  amount:   {}", field(r.amount, r.confidence.amount));
    let _ = writeln!(out, "  category: {}", r.category);
    if r.needs_review() {
        let _ = writeln!(out, "  (needs review)");
    }
    out
}

pub fn render_categories() -> String {
    let mut out = String::new();
    for (i, (category, keywords)) in CATEGORY_RULES.iter().enumerate() {
        let _ = writeln!(out, "{}. {}: {}", i + 1, category, keywords.join(", "));
    }
    let _ = writeln!(out, "{}. Other (no keyword matched)", CATEGORY_RULES.len() + 1);
    out
}
