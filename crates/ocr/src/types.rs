use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slipscan_core::{Category, Money};

pub const AMOUNT_CONFIDENCE: f32 = 0.9;
pub const DATE_CONFIDENCE: f32 = 0.8;
pub const VENDOR_CONFIDENCE: f32 = 0.7;

/// Per-field confidence. Not a probability: each value is a fixed constant
/// when the field was found and zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfidence {
    pub amount: f32,
    pub date: f32,
    pub vendor: f32,
}

impl FieldConfidence {
    pub fn for_presence(amount: bool, date: bool, vendor: bool) -> Self {
        let score = |present: bool, value: f32| if present { value } else { 0.0 };
        Self {
            amount: score(amount, AMOUNT_CONFIDENCE),
            date: score(date, DATE_CONFIDENCE),
            vendor: score(vendor, VENDOR_CONFIDENCE),
        }
    }
}

/// Structured fields pulled out of one receipt's OCR text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub amount: Option<Money>,
    /// Serialized as `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    pub vendor: Option<String>,
    pub category: Category,
    pub confidence: FieldConfidence,
    /// The OCR output exactly as received.
    pub raw_text: String,
}

impl ExtractionResult {
    /// Whether a human should look at this before it is saved.
    pub fn needs_review(&self) -> bool {
        self.amount.is_none() || self.date.is_none() || self.vendor.is_none()
    }

    /// Mean of the three field confidences.
    pub fn overall_confidence(&self) -> f32 {
        let c = self.confidence;
        (c.amount + c.date + c.vendor) / 3.0
    }
}

/// User-entered expense fields, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub vendor: Option<String>,
    pub category: Option<Category>,
}

impl ExpenseDraft {
    /// Fill fields the user left blank from an extraction. A supplied value is
    /// never overwritten, and `Other` is not worth suggesting. Returns the names
    /// of the fields that were filled.
    pub fn apply_suggestions(&mut self, result: &ExtractionResult) -> Vec<&'static str> {
        let mut filled = Vec::new();

        if self.amount.is_none() && result.amount.is_some() {
            self.amount = result.amount;
            filled.push("amount");
        }
        if self.date.is_none() && result.date.is_some() {
            self.date = result.date;
            filled.push("date");
        }
        if self.vendor.is_none() {
            if let Some(vendor) = &result.vendor {
                self.vendor = Some(vendor.clone());
                filled.push("vendor");
            }
        }
        if self.category.is_none() && !result.category.is_other() {
            self.category = Some(result.category);
            filled.push("category");
        }

        filled
    }
}
