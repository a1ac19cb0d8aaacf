use std::sync::OnceLock;

use regex::Regex;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        pub(crate) fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// The whole numeric token, however many decimals it has; `Money::parse`
// decides whether it is a usable amount.
const MONEY: &str = r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)";

const MONTH: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

// Amounts

re!(re_amount_labeled,
    &format!(r"(?i)\b(?:total|amount|sum)\b\s*:?\s*\$?\s*{MONEY}\b"));
re!(re_amount_currency,
    r"(?:\$\s*)?(\d{1,3}(?:,\d{3})+\.\d{2}|\d+\.\d{2})\b");

// Dates, in table order

re!(re_date_iso,
    r"\b(\d{4})-(\d{2})-(\d{2})\b");
re!(re_date_slash_long,
    r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b");
re!(re_date_slash_short,
    r"\b(\d{1,2})/(\d{1,2})/(\d{2})\b");
re!(re_date_dash_long,
    r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b");
re!(re_date_dash_short,
    r"\b(\d{1,2})-(\d{1,2})-(\d{2})\b");
re!(re_date_month_first,
    &format!(r"(?i)\b{MONTH}\.?\s+(\d{{1,2}}),?\s+(\d{{4}})\b"));
re!(re_date_day_first,
    &format!(r"(?i)\b(\d{{1,2}})\s+{MONTH}\.?,?\s+(\d{{4}})\b"));

// Vendor noise

re!(re_numeric_noise,
    r"^[\d\s/\-.,$]+$");
