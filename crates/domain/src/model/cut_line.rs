// crates/domain/src/model/cut_line.rs
//! Cut-file line grammar.
//!
//! A cut file is line oriented. Every line containing `#` is a comment and is
//! dropped in full, even when the `#` trails a definition. Every other
//! non-blank line has the form `name = expression`.

use cut_check_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Delimiter between references on the right-hand side of a run-type definition.
pub const TERM_DELIMITER: char = '+';

/// `true` for lines that never carry a definition.
#[inline]
pub fn is_comment(line: &str) -> bool {
    line.contains('#')
}

/// Non-comment, non-blank lines of `text`, in file order, without line terminators.
pub fn definition_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !is_comment(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

/// One `name = expression` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutLine {
    pub name: String,
    pub expression: String,
}

impl CutLine {
    /// Split `line` on its first `=`; both sides are trimmed.
    ///
    /// Only the first `=` separates, so comparison operators such as `<=`
    /// inside the expression are kept intact.
    ///
    /// # Errors
    /// Returns [`DomainError::MalformedLine`] for comment lines, lines without
    /// `=`, and lines with an empty name.
    pub fn parse(line: &str) -> DomainResult<Self> {
        if is_comment(line) {
            return Err(malformed(line, "comment line"));
        }
        let (lhs, rhs) = line
            .split_once('=')
            .ok_or_else(|| malformed(line, "missing '=' separator"))?;
        let name = lhs.trim();
        if name.is_empty() {
            return Err(malformed(line, "empty cut name"));
        }
        Ok(Self { name: name.to_owned(), expression: rhs.trim().to_owned() })
    }

    /// Whether this line defines `target` (exact match after trimming).
    #[inline]
    pub fn defines(&self, target: &str) -> bool {
        self.name == target.trim()
    }

    /// Non-empty `+`-separated terms of the expression.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.expression
            .split(TERM_DELIMITER)
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

fn malformed(line: &str, reason: &str) -> DomainError {
    DomainError::MalformedLine { line: line.trim().to_owned(), reason: reason.to_owned() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_expression() {
        let line = CutLine::parse("  sample = pid.p1+track.t1 ").unwrap();
        assert_eq!(line.name, "sample");
        assert_eq!(line.expression, "pid.p1+track.t1");
        assert_eq!(line.terms().collect::<Vec<_>>(), ["pid.p1", "track.t1"]);
    }

    #[test]
    fn only_first_equals_separates() {
        let line = CutLine::parse("delta = H.gtr.dp>=-8 && H.gtr.dp<=8").unwrap();
        assert_eq!(line.name, "delta");
        assert_eq!(line.expression, "H.gtr.dp>=-8 && H.gtr.dp<=8");
    }

    #[test]
    fn rejects_lines_without_separator() {
        let err = CutLine::parse("just text").unwrap_err();
        assert!(matches!(err, DomainError::MalformedLine { .. }));
        assert!(CutLine::parse(" = 5").is_err());
    }

    #[test]
    fn comment_lines_never_define_anything() {
        assert!(CutLine::parse("# t1 = 999").is_err());
        assert!(CutLine::parse("t1 = 999 # old value").is_err());
    }

    #[test]
    fn defines_requires_exact_name() {
        let line = CutLine::parse("coin_epi = pid.a").unwrap();
        assert!(line.defines("coin_epi"));
        assert!(line.defines(" coin_epi "));
        assert!(!line.defines("coin"));
        assert!(!line.defines("coin_epi_extra"));
    }

    #[test]
    fn definition_lines_drop_comments_and_blanks() {
        let text = "# header\nsample = pid.p1\n\n   \nother = track.t1 # inline\nlast = 3\r\n";
        assert_eq!(definition_lines(text), ["sample = pid.p1", "last = 3"]);
    }

    #[test]
    fn empty_terms_are_skipped() {
        let line = CutLine::parse("x = pid.a + + track.b +").unwrap();
        assert_eq!(line.terms().collect::<Vec<_>>(), ["pid.a", "track.b"]);
    }
}
