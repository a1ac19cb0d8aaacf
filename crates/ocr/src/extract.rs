use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::amount::extract_amount;
use crate::classify::classify;
use crate::config::ExtractorConfig;
use crate::date::extract_date;
use crate::normalize::LineList;
use crate::types::{ExtractionResult, FieldConfidence};
use crate::vendor::{extract_vendor, VendorRules};

// ── Public extraction API ─────────────────────────────────────────────────────

/// Turns raw OCR text into an [`ExtractionResult`]. Holds only read-only
/// settings, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
    today: Option<NaiveDate>,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config, today: None }
    }

    /// Pin the reference date for the validity window instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Extract structured fields from raw OCR text.
    pub fn extract(&self, raw_text: &str) -> ExtractionResult {
        let lines = LineList::from_raw(raw_text);
        let c = &self.config;

        let amount = extract_amount(&lines, c.amount_ceiling);
        let date = extract_date(&lines, self.today(), c.window_years, c.year_pivot);
        let vendor = extract_vendor(
            &lines,
            VendorRules {
                scan_lines: c.vendor_scan_lines,
                min_chars: c.vendor_min_chars,
                max_chars: c.vendor_max_chars,
            },
        );
        let category = classify(vendor.as_deref());

        debug!(
            lines = lines.len(),
            amount = amount.is_some(),
            date = date.is_some(),
            vendor = vendor.is_some(),
            "extraction finished"
        );

        ExtractionResult {
            confidence: FieldConfidence::for_presence(
                amount.is_some(),
                date.is_some(),
                vendor.is_some(),
            ),
            amount,
            date,
            vendor,
            category,
            raw_text: raw_text.to_string(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
