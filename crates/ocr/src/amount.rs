use slipscan_core::Money;
use tracing::debug;

use crate::normalize::LineList;
use crate::patterns::{re_amount_currency, re_amount_labeled};

/// Scan every line for amount candidates and keep the largest one in
/// `(0, ceiling)`.
///
/// Both the labeled form (`Total: $12.50`) and bare two-decimal currency
/// tokens contribute candidates. The maximum is taken on the assumption that
/// the total is the biggest figure on a receipt; a large line item or a
/// points balance will win instead.
pub fn extract_amount(lines: &LineList<'_>, ceiling: u32) -> Option<Money> {
    let ceiling = Money::from_cents(i64::from(ceiling) * 100);
    let patterns = [re_amount_labeled(), re_amount_currency()];

    let mut candidates = 0usize;
    let best = lines
        .iter()
        .flat_map(|line| {
            patterns
                .into_iter()
                .flat_map(move |re| re.captures_iter(line))
                .filter_map(|c| Money::parse(c.get(1)?.as_str()))
        })
        .inspect(|_| candidates += 1)
        .filter(|m| m.is_positive() && *m < ceiling)
        .max();

    debug!(candidates, amount = ?best, "amount scan finished");
    best
}
