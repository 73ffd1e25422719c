use crate::domain::ports::TextCleaner;
use crate::utils::error::Result;
use regex::Regex;

/// A period, the digit `1`, then one whitespace character. The character in
/// front of the period is checked separately so that back-to-back markers
/// (`a.1 b.1 `) never share a match.
// Unlike the lookbehind form `(?<![\d])(?<=\.)1(?=\s)`, whose digit guard tests
// the `.` itself and never fires, this keeps `1.1 ` intact on purpose.
pub const CITATION_PATTERN: &str = r"\.1\s";

/// Decimal digits only (Unicode `Nd`), so `²` or `½` before the period do not
/// protect a marker.
const DIGIT_PATTERN: &str = r"^\d$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub text: String,
    pub removed: usize,
}

/// Removes footnote digits such as the `1` in `sentence.1 Next` while leaving
/// numbers like `1.1` and `1.1.` alone.
#[derive(Debug, Clone)]
pub struct CitationStripper {
    pattern: Regex,
    digit: Regex,
}

impl CitationStripper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(CITATION_PATTERN)?,
            digit: Regex::new(DIGIT_PATTERN)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn is_digit(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.digit.is_match(c.encode_utf8(&mut buf))
    }

    pub fn strip(&self, text: &str) -> StripOutcome {
        let mut cleaned = String::with_capacity(text.len());
        let mut last = 0;
        let mut removed = 0;

        for m in self.pattern.find_iter(text) {
            let preceded_by_digit = text[..m.start()]
                .chars()
                .next_back()
                .is_some_and(|c| self.is_digit(c));
            if preceded_by_digit {
                continue;
            }

            // The `1` sits one byte past the period.
            let digit_at = m.start() + 1;
            cleaned.push_str(&text[last..digit_at]);
            last = digit_at + 1;
            removed += 1;
        }

        if removed == 0 {
            return StripOutcome {
                text: text.to_string(),
                removed,
            };
        }

        cleaned.push_str(&text[last..]);
        StripOutcome {
            text: cleaned,
            removed,
        }
    }
}

impl TextCleaner for CitationStripper {
    fn clean(&self, text: &str) -> (String, usize) {
        let outcome = self.strip(text);
        (outcome.text, outcome.removed)
    }

    fn describe(&self) -> &str {
        self.pattern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(text: &str) -> StripOutcome {
        CitationStripper::new().unwrap().strip(text)
    }

    #[test]
    fn test_removes_citation_digit() {
        let out = strip("See note.1 here");
        assert_eq!(out.text, "See note. here");
        assert_eq!(out.removed, 1);
    }

    #[test]
    fn test_keeps_version_with_trailing_period() {
        let out = strip("Version 1.1. released");
        assert_eq!(out.text, "Version 1.1. released");
        assert_eq!(out.removed, 0);
    }

    #[test]
    fn test_keeps_decimal_followed_by_space() {
        assert_eq!(strip("Pi is about 3.1 here").text, "Pi is about 3.1 here");
        assert_eq!(strip("Section 1.1 covers joins").text, "Section 1.1 covers joins");
    }

    #[test]
    fn test_only_decimal_digits_guard_the_period() {
        assert_eq!(strip("x².1 y").text, "x². y");
        assert_eq!(strip("half½.1 y").text, "half½. y");
        // Arabic-Indic three is a decimal digit.
        assert_eq!(strip("\u{663}.1 y").text, "\u{663}.1 y");
    }

    #[test]
    fn test_requires_trailing_whitespace() {
        assert_eq!(strip("end.1").text, "end.1");
        assert_eq!(strip("file.10 lines").text, "file.10 lines");
        assert_eq!(strip("a.12 b").text, "a.12 b");
    }

    #[test]
    fn test_only_digit_one_is_a_marker() {
        assert_eq!(strip("note.2 here").text, "note.2 here");
    }

    #[test]
    fn test_multiple_markers_and_line_endings() {
        let input = "First claim.1 Second claim.1\nThird.1\tdone.";
        let out = strip(input);
        assert_eq!(out.text, "First claim. Second claim.\nThird.\tdone.");
        assert_eq!(out.removed, 3);
    }

    #[test]
    fn test_adjacent_markers_do_not_share_a_match() {
        let out = strip("a.1 .1 b");
        assert_eq!(out.text, "a. . b");
        assert_eq!(out.removed, 2);
    }

    #[test]
    fn test_marker_at_start_of_text() {
        assert_eq!(strip(".1 leading").text, ". leading");
    }

    #[test]
    fn test_markdown_table_and_code_survive() {
        let input = "| v1.1 | 2.1 |\n`x = 0.1 * y`\nSQL joins are covered in chapter.1 \n";
        let out = strip(input);
        assert_eq!(
            out.text,
            "| v1.1 | 2.1 |\n`x = 0.1 * y`\nSQL joins are covered in chapter. \n"
        );
    }

    #[test]
    fn test_non_ascii_text_is_preserved() {
        let out = strip("Café au lait.1 très bon.1 ");
        assert_eq!(out.text, "Café au lait. très bon. ");
        assert_eq!(out.removed, 2);
    }

    #[test]
    fn test_idempotent() {
        let stripper = CitationStripper::new().unwrap();
        let input = "A.1 B 1.1. C 2.1 D.1\n.1 .1 e";
        let once = stripper.strip(input);
        let twice = stripper.strip(&once.text);
        assert_eq!(once.text, twice.text);
        assert_eq!(twice.removed, 0);
    }

    #[test]
    fn test_text_cleaner_reports_pattern() {
        let stripper = CitationStripper::new().unwrap();
        assert_eq!(stripper.describe(), CITATION_PATTERN);
        assert_eq!(stripper.clean("x.1 y"), ("x. y".to_string(), 1));
    }
}
