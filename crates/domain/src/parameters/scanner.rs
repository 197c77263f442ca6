// crates/domain/src/parameters/scanner.rs
//! Finds `category.field` parameter references inside a cut expression.
//!
//! A reference starts at an identifier boundary: it is either at the start of
//! the expression or preceded by a character that is neither an identifier
//! character nor `.`. That keeps `H.accept.x` (a branch path) from being read
//! as the `accept.x` parameter, while `abs(accept.x)` and `accept.x+CT.y` are
//! both found.

use std::ops::Range;

use cut_check_shared_kernel::{DomainError, DomainResult};
use regex::Regex;

/// A parameter reference located inside an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRef<'t> {
    pub category: &'t str,
    pub field: &'t str,
    /// Byte span of `category.field` in the scanned text.
    pub span: Range<usize>,
}

#[derive(Debug, Clone)]
pub struct ReferenceScanner {
    pattern: Option<Regex>,
}

impl ReferenceScanner {
    /// Build a scanner recognising the given category names.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidConfiguration`] if the pattern cannot be compiled.
    pub fn new<I, S>(categories: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = categories
            .into_iter()
            .map(|c| c.as_ref().trim().to_owned())
            .filter(|c| !c.is_empty())
            .collect();
        if names.is_empty() {
            return Ok(Self { pattern: None });
        }
        // Longest first so `CT` never shadows `CTX`.
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();

        let alternatives = names.iter().map(|n| regex::escape(n)).collect::<Vec<_>>().join("|");
        let source = format!(r"(?:^|[^A-Za-z0-9_.])({alternatives})\.([A-Za-z0-9_]+)");
        let pattern = Regex::new(&source).map_err(|e| DomainError::InvalidConfiguration {
            reason: format!("parameter reference pattern: {e}"),
        })?;
        Ok(Self { pattern: Some(pattern) })
    }

    /// All references in `text`, left to right.
    pub fn scan<'t>(&self, text: &'t str) -> Vec<ParameterRef<'t>> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let category = caps.get(1)?;
                let field = caps.get(2)?;
                Some(ParameterRef {
                    category: category.as_str(),
                    field: field.as_str(),
                    span: category.start()..field.end(),
                })
            })
            .collect()
    }

    /// Rebuild `text`, replacing each reference for which `replace` returns `Some`.
    pub fn replace_with<F>(&self, text: &str, mut replace: F) -> String
    where
        F: FnMut(&ParameterRef<'_>) -> Option<String>,
    {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for reference in self.scan(text) {
            if let Some(value) = replace(&reference) {
                out.push_str(&text[last..reference.span.start]);
                out.push_str(&value);
                last = reference.span.end;
            }
        }
        out.push_str(&text[last..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> ReferenceScanner {
        ReferenceScanner::new(["accept", "track", "CT", "CTX"]).unwrap()
    }

    #[test]
    fn finds_bare_reference() {
        let refs = scanner().scan("track.t1");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].category, "track");
        assert_eq!(refs[0].field, "t1");
        assert_eq!(refs[0].span, 0..8);
    }

    #[test]
    fn finds_references_inside_function_calls() {
        let refs = scanner().scan("abs(P.gtr.th)<accept.th_max&&CT.coin_lo<=x");
        let found: Vec<_> = refs.iter().map(|r| (r.category, r.field)).collect();
        assert_eq!(found, [("accept", "th_max"), ("CT", "coin_lo")]);
    }

    #[test]
    fn ignores_branch_paths_and_longer_identifiers() {
        assert!(scanner().scan("H.accept.x>0").is_empty());
        assert!(scanner().scan("myaccept.x>0").is_empty());
        assert!(scanner().scan("accept_x>0").is_empty());
    }

    #[test]
    fn prefers_longest_category() {
        let refs = scanner().scan("CTX.a+CT.b");
        let found: Vec<_> = refs.iter().map(|r| (r.category, r.field)).collect();
        assert_eq!(found, [("CTX", "a"), ("CT", "b")]);
    }

    #[test]
    fn replaces_selected_references() {
        let out = scanner().replace_with("(track.t1>accept.a)&&track.t2", |r| {
            (r.field != "t2").then(|| format!("<{}>", r.field))
        });
        assert_eq!(out, "(<t1>><a>)&&track.t2");
    }

    #[test]
    fn empty_scanner_finds_nothing() {
        let empty = ReferenceScanner::new(Vec::<String>::new()).unwrap();
        assert!(empty.scan("track.t1").is_empty());
        assert_eq!(empty.replace_with("track.t1", |_| Some("x".into())), "track.t1");
    }
}
