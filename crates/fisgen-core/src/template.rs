//! Structured template representation.
//!
//! A template is an ordered list of segments: literal text, positional slots
//! `{0}`, `{1}`, … and named slots `{material}`, `{datalib}`, … Keeping the
//! parsed structure (rather than leaning on a generic formatting facility)
//! turns argument-count mismatches into typed errors instead of panics.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RenderError, Result};

static SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9]+|[A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Positional(usize),
    Named(String),
}

#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text. Anything not matching a `{slot}` token is literal.
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in SLOT.captures_iter(text) {
            let m = caps.get(0).unwrap();
            if m.start() > last {
                segments.push(Segment::Literal(text[last..m.start()].to_string()));
            }
            let token = &caps[1];
            match token.parse::<usize>() {
                Ok(index) => segments.push(Segment::Positional(index)),
                Err(_) => segments.push(Segment::Named(token.to_string())),
            }
            last = m.end();
        }

        if last < text.len() {
            segments.push(Segment::Literal(text[last..].to_string()));
        }

        Template { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of positional slots in the template.
    pub fn positional_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Positional(_)))
            .count()
    }

    /// Fill every slot. `positional` must supply exactly as many values as
    /// there are positional slots; every named slot must appear in `named`.
    pub fn render(&self, positional: &[String], named: &HashMap<&str, &str>) -> Result<String> {
        let expected = self.positional_count();
        if positional.len() != expected {
            return Err(RenderError::PositionalCount {
                expected,
                got: positional.len(),
            });
        }

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Positional(index) => {
                    let value = positional
                        .get(*index)
                        .ok_or_else(|| RenderError::UnknownSlot(index.to_string()))?;
                    out.push_str(value);
                }
                Segment::Named(name) => {
                    let value = named
                        .get(name.as_str())
                        .ok_or_else(|| RenderError::UnknownSlot(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named<'a>(pairs: &[(&'a str, &'a str)]) -> HashMap<&'a str, &'a str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_parse_mixed_slots() {
        let t = Template::parse("FLUX {0}\nDENSITY {material} end");
        assert_eq!(
            t.segments(),
            &[
                Segment::Literal("FLUX ".to_string()),
                Segment::Positional(0),
                Segment::Literal("\nDENSITY ".to_string()),
                Segment::Named("material".to_string()),
                Segment::Literal(" end".to_string()),
            ]
        );
    }

    #[test]
    fn test_literal_only() {
        let t = Template::parse("no slots here");
        assert_eq!(t.positional_count(), 0);
        let out = t.render(&[], &HashMap::new()).unwrap();
        assert_eq!(out, "no slots here");
    }

    #[test]
    fn test_render_positional_in_order() {
        let t = Template::parse("a={0} b={1}");
        let out = t
            .render(&["first".to_string(), "second".to_string()], &HashMap::new())
            .unwrap();
        assert_eq!(out, "a=first b=second");
    }

    #[test]
    fn test_render_named() {
        let t = Template::parse("GETXS {libxs} {nestrc}");
        let out = t
            .render(&[], &named(&[("libxs", "-1"), ("nestrc", "709")]))
            .unwrap();
        assert_eq!(out, "GETXS -1 709");
    }

    #[test]
    fn test_positional_count_mismatch() {
        let t = Template::parse("{0} {1}");
        let err = t.render(&["only".to_string()], &HashMap::new()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::PositionalCount {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_missing_named_slot() {
        let t = Template::parse("{material}");
        let err = t.render(&[], &HashMap::new()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownSlot(name) if name == "material"));
    }

    #[test]
    fn test_unmatched_braces_stay_literal() {
        // `{not a slot}` contains a space, `{}` is empty: both literal
        let t = Template::parse("{not a slot} {} {0}");
        assert_eq!(t.positional_count(), 1);
        let out = t.render(&["X".to_string()], &HashMap::new()).unwrap();
        assert_eq!(out, "{not a slot} {} X");
    }

    #[test]
    fn test_out_of_range_positional_index() {
        let t = Template::parse("{5}");
        let err = t.render(&["v".to_string()], &HashMap::new()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownSlot(_)));
    }
}
