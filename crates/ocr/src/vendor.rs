use tracing::debug;

use crate::normalize::LineList;
use crate::patterns::re_numeric_noise;

#[derive(Debug, Clone, Copy)]
pub struct VendorRules {
    pub scan_lines: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

/// Merchant names are printed at the top of a receipt: take the first of the
/// leading lines that is long enough and is not just digits or a date.
pub fn extract_vendor(lines: &LineList<'_>, rules: VendorRules) -> Option<String> {
    let vendor = lines
        .head(rules.scan_lines)
        .iter()
        .copied()
        .filter(|l| l.chars().count() >= rules.min_chars)
        .find(|l| !is_numeric_noise(l))
        .map(|l| l.chars().take(rules.max_chars).collect::<String>());

    debug!(vendor = vendor.as_deref(), "vendor scan finished");
    vendor
}

/// Digits only, or digits mixed with whitespace, `-` and `/`. Price-shaped
/// lines (`$3.00`, `1,250.00`) count as noise too.
fn is_numeric_noise(line: &str) -> bool {
    line.chars().all(|c| c.is_ascii_digit()) || re_numeric_noise().is_match(line)
}
