/// Ordered, non-empty, trimmed lines of an OCR text blob. Borrowed from the
/// raw text so the original stays untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineList<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineList<'a> {
    pub fn from_raw(raw: &'a str) -> Self {
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        Self { lines }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }

    /// The first `n` lines (fewer if the list is shorter).
    pub fn head(&self, n: usize) -> &[&'a str] {
        &self.lines[..n.min(self.lines.len())]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for LineList<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            lines: iter
                .into_iter()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let lines = LineList::from_raw("  STARBUCKS  \n\n\t\n 05/12/2023\r\nTotal: $12.50 ");
        assert_eq!(
            lines.iter().collect::<Vec<_>>(),
            vec!["STARBUCKS", "05/12/2023", "Total: $12.50"]
        );
    }

    #[test]
    fn empty_text_yields_empty_list() {
        assert!(LineList::from_raw("").is_empty());
        assert!(LineList::from_raw("   \n \n").is_empty());
    }

    #[test]
    fn head_clamps_to_length() {
        let lines = LineList::from_raw("a\nb");
        assert_eq!(lines.head(3), &["a", "b"]);
        assert_eq!(lines.head(1), &["a"]);
    }

    #[test]
    fn collect_from_slices() {
        let lines: LineList = ["  x ", "", "y"].into_iter().collect();
        assert_eq!(lines.len(), 2);
    }
}
