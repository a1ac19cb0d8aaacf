use slipscan_core::Category;
use tracing::debug;

/// Keyword table for vendor classification. Order is the tie-break: the first
/// category with a keyword contained in the lower-cased vendor wins.
pub static CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::FoodAndDining,
        &[
            "restaurant", "cafe", "coffee", "pizza", "burger", "food", "dining", "kitchen",
            "bar", "pub", "starbucks", "mcdonald",
        ],
    ),
    (
        Category::Groceries,
        &[
            "grocery", "supermarket", "market", "whole foods", "trader joe", "safeway",
            "kroger", "aldi",
        ],
    ),
    (
        Category::GasAndFuel,
        &["gas", "fuel", "shell", "chevron", "exxon", "mobil", "petrol"],
    ),
    (
        Category::Shopping,
        &["store", "shop", "mall", "amazon", "target", "walmart", "retail"],
    ),
    (
        Category::Transportation,
        &["uber", "lyft", "taxi", "transit", "parking", "airline", "metro"],
    ),
    (
        Category::Healthcare,
        &["pharmacy", "hospital", "clinic", "medical", "doctor", "dental", "cvs", "walgreens"],
    ),
    (
        Category::Entertainment,
        &["cinema", "movie", "theater", "theatre", "netflix", "spotify", "concert"],
    ),
];

pub fn classify(vendor: Option<&str>) -> Category {
    let Some(vendor) = vendor else {
        return Category::Other;
    };
    let text = vendor.to_lowercase();

    let category = CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map_or(Category::Other, |(category, _)| *category);

    debug!(vendor, %category, "classified vendor");
    category
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_vendor_is_other() {
        assert_eq!(classify(None), Category::Other);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(classify(Some("STARBUCKS #1123")), Category::FoodAndDining);
        assert_eq!(classify(Some("Joe's Pizza")), Category::FoodAndDining);
        assert_eq!(classify(Some("WHOLE FOODS MARKET")), Category::FoodAndDining);
        assert_eq!(classify(Some("Trader Joe's")), Category::Groceries);
    }

    #[test]
    fn each_category_reachable() {
        assert_eq!(classify(Some("Kroger")), Category::Groceries);
        assert_eq!(classify(Some("Shell Gas Station")), Category::GasAndFuel);
        assert_eq!(classify(Some("Target")), Category::Shopping);
        assert_eq!(classify(Some("Uber Trip")), Category::Transportation);
        assert_eq!(classify(Some("CVS Pharmacy")), Category::Healthcare);
        assert_eq!(classify(Some("AMC Cinema 12")), Category::Entertainment);
    }

    #[test]
    fn table_order_breaks_ties() {
        // "market" (Groceries) and "gas" (Gas & Fuel) both match; Groceries is earlier.
        assert_eq!(classify(Some("Gas Market")), Category::Groceries);
        // "bar" is a Food & Dining keyword and sits ahead of everything else.
        assert_eq!(classify(Some("Barnes Book Store")), Category::FoodAndDining);
    }

    #[test]
    fn no_match_is_other() {
        assert_eq!(classify(Some("ACME Widgets LLC")), Category::Other);
        assert_eq!(classify(Some("")), Category::Other);
    }

    #[test]
    fn deterministic() {
        let a = classify(Some("Corner Cafe"));
        let b = classify(Some("Corner Cafe"));
        assert_eq!(a, b);
    }

    #[test]
    fn table_lists_every_category_but_other_once() {
        let cats: Vec<_> = CATEGORY_RULES.iter().map(|(c, _)| *c).collect();
        assert_eq!(cats.len(), 7);
        assert!(!cats.contains(&Category::Other));
        for (i, c) in cats.iter().enumerate() {
            assert!(!cats[i + 1..].contains(c));
        }
    }
}
