// SPDX-License-Identifier: MPL-2.0
//! Minimal CSS selector support.
//!
//! Supports selector lists (`a, b`), descendant combinators (`a b`) and
//! compound selectors built from a type (`div`, `*`), ids (`#nav`),
//! classes (`.card`) and attribute tests (`[data-src]`, `[type="submit"]`,
//! `[href^="#"]`).

use crate::error::{Error, Result};

/// Attribute test inside a compound selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeMatch {
    /// `[name]`
    Exists(String),
    /// `[name=value]`
    Equals(String, String),
    /// `[name^=value]`
    Prefix(String, String),
}

impl AttributeMatch {
    fn name(&self) -> &str {
        match self {
            AttributeMatch::Exists(name)
            | AttributeMatch::Equals(name, _)
            | AttributeMatch::Prefix(name, _) => name,
        }
    }

    /// Tests an attribute value (or its absence).
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (AttributeMatch::Exists(_), Some(_)) => true,
            (AttributeMatch::Equals(_, expected), Some(actual)) => actual == expected,
            (AttributeMatch::Prefix(_, prefix), Some(actual)) => actual.starts_with(prefix.as_str()),
            (_, None) => false,
        }
    }
}

/// A single compound selector such as `button.primary[type="submit"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<AttributeMatch>,
}

impl Compound {
    /// Checks the compound against an element's tag, id, classes and attributes.
    pub fn matches<'a>(
        &self,
        tag: &str,
        classes: &[String],
        attribute: impl Fn(&str) -> Option<&'a str>,
    ) -> bool {
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(expected) = &self.id {
            if attribute("id") != Some(expected.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| classes.contains(class)) {
            return false;
        }
        self.attributes
            .iter()
            .all(|test| test.matches(attribute(test.name())))
    }
}

/// One complex selector: compounds joined by descendant combinators,
/// stored left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complex {
    pub compounds: Vec<Compound>,
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub alternatives: Vec<Complex>,
}

impl Selector {
    /// Parses a selector list.
    pub fn parse(input: &str) -> Result<Self> {
        let mut alternatives = Vec::new();
        for part in split_top_level(input, ',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(Error::Selector(format!("empty selector in '{input}'")));
            }
            let mut compounds = Vec::new();
            for token in split_top_level(part, ' ') {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                compounds.push(parse_compound(token)?);
            }
            alternatives.push(Complex { compounds });
        }
        if alternatives.is_empty() {
            return Err(Error::Selector("empty selector".into()));
        }
        Ok(Self { alternatives })
    }
}

/// Splits on `separator` while ignoring separators inside `[...]` or quotes.
fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (index, ch) in input.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, c) if c == separator && depth == 0 => {
                parts.push(&input[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

fn parse_compound(token: &str) -> Result<Compound> {
    let mut compound = Compound::default();
    let chars: Vec<char> = token.chars().collect();
    let mut pos = 0;

    let read_ident = |pos: &mut usize| -> String {
        let start = *pos;
        while *pos < chars.len() && is_ident_char(chars[*pos]) {
            *pos += 1;
        }
        chars[start..*pos].iter().collect()
    };

    if chars.first() == Some(&'*') {
        pos = 1;
    } else if chars.first().is_some_and(|c| is_ident_char(*c)) {
        compound.tag = Some(read_ident(&mut pos).to_ascii_lowercase());
    }

    while pos < chars.len() {
        match chars[pos] {
            '#' => {
                pos += 1;
                let ident = read_ident(&mut pos);
                if ident.is_empty() {
                    return Err(Error::Selector(format!("missing id in '{token}'")));
                }
                compound.id = Some(ident);
            }
            '.' => {
                pos += 1;
                let ident = read_ident(&mut pos);
                if ident.is_empty() {
                    return Err(Error::Selector(format!("missing class in '{token}'")));
                }
                compound.classes.push(ident);
            }
            '[' => {
                let close = closing_bracket(&chars, pos)
                    .ok_or_else(|| Error::Selector(format!("unclosed '[' in '{token}'")))?;
                let body: String = chars[pos + 1..close].iter().collect();
                compound.attributes.push(parse_attribute(&body, token)?);
                pos = close + 1;
            }
            other => {
                return Err(Error::Selector(format!(
                    "unexpected '{other}' in '{token}'"
                )))
            }
        }
    }

    Ok(compound)
}

/// Index of the `]` closing the `[` at `open`, skipping quoted values.
fn closing_bracket(chars: &[char], open: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (index, ch) in chars.iter().enumerate().skip(open + 1) {
        match (quote, *ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(*ch),
            (None, ']') => return Some(index),
            _ => {}
        }
    }
    None
}

fn parse_attribute(body: &str, token: &str) -> Result<AttributeMatch> {
    let unquote = |value: &str| -> String {
        let value = value.trim();
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        }
    };

    if let Some((name, value)) = body.split_once("^=") {
        return Ok(AttributeMatch::Prefix(name.trim().to_string(), unquote(value)));
    }
    if let Some((name, value)) = body.split_once('=') {
        return Ok(AttributeMatch::Equals(name.trim().to_string(), unquote(value)));
    }
    let name = body.trim();
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(Error::Selector(format!("invalid attribute in '{token}'")));
    }
    Ok(AttributeMatch::Exists(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selector_list() {
        let selector = Selector::parse(".hero-shape, .hero-shape-2, .hero-shape-3").unwrap();
        assert_eq!(selector.alternatives.len(), 3);
        assert_eq!(selector.alternatives[1].compounds[0].classes, vec!["hero-shape-2"]);
    }

    #[test]
    fn parses_prefix_attribute_with_quotes() {
        let selector = Selector::parse(r##"a[href^="#"]"##).unwrap();
        let compound = &selector.alternatives[0].compounds[0];
        assert_eq!(compound.tag.as_deref(), Some("a"));
        assert_eq!(
            compound.attributes,
            vec![AttributeMatch::Prefix("href".into(), "#".into())]
        );
    }

    #[test]
    fn parses_descendant_combinator() {
        let selector = Selector::parse(".portfolio .swiper-pagination").unwrap();
        assert_eq!(selector.alternatives[0].compounds.len(), 2);
    }

    #[test]
    fn parses_existence_attribute() {
        let selector = Selector::parse("section[id]").unwrap();
        let compound = &selector.alternatives[0].compounds[0];
        assert_eq!(compound.attributes, vec![AttributeMatch::Exists("id".into())]);
    }

    #[test]
    fn comma_inside_attribute_value_is_not_a_separator() {
        let selector = Selector::parse(r#"[data-list="a,b"]"#).unwrap();
        assert_eq!(selector.alternatives.len(), 1);
    }

    #[test]
    fn bracket_inside_quoted_value_does_not_close_the_attribute() {
        let selector = Selector::parse(r#"a[title="a]b"].link"#).unwrap();
        let compound = &selector.alternatives[0].compounds[0];
        assert_eq!(
            compound.attributes,
            vec![AttributeMatch::Equals("title".into(), "a]b".into())]
        );
        assert_eq!(compound.classes, vec!["link"]);
        assert!(Selector::parse(r#"[title="a]"#).is_err());
    }

    #[test]
    fn rejects_malformed_selectors() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("div,").is_err());
        assert!(Selector::parse("#").is_err());
        assert!(Selector::parse("img[data-src").is_err());
        assert!(Selector::parse("div > p").is_err());
    }

    #[test]
    fn compound_matches_tag_class_and_attribute() {
        let selector = Selector::parse(r#"button.primary[type="submit"]"#).unwrap();
        let compound = &selector.alternatives[0].compounds[0];
        let classes = vec!["primary".to_string()];
        assert!(compound.matches("BUTTON", &classes, |name| (name == "type").then_some("submit")));
        assert!(!compound.matches("button", &classes, |_| None));
    }
}
