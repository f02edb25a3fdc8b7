// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal, non-validating XML pull scanner.
//!
//! Only what vector artwork documents need: start/empty/end tags with
//! attributes. Text content, comments, processing instructions, and doctype
//! declarations are skipped. Well-formedness is not checked; the caller
//! decides how much structure to demand.

use crate::ParseError;

/// One markup event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    /// `<name attr="value">`
    Start {
        /// Tag name.
        name: String,
        /// Attributes, in document order.
        attributes: Vec<(String, String)>,
    },
    /// `<name attr="value"/>`
    Empty {
        /// Tag name.
        name: String,
        /// Attributes, in document order.
        attributes: Vec<(String, String)>,
    },
    /// `</name>`
    End {
        /// Tag name.
        name: String,
    },
}

/// Pull scanner over a markup string.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Advance to the next tag event, or `None` at end of input.
    pub(crate) fn next_event(&mut self) -> Result<Option<Event>, ParseError> {
        loop {
            let Some(open) = self.input[self.pos..].find('<') else {
                self.pos = self.input.len();
                return Ok(None);
            };
            self.pos += open;
            let rest = &self.input[self.pos..];

            if let Some(skipped) = skip_non_tag(rest) {
                self.pos += skipped;
                continue;
            }

            if let Some(end_rest) = rest.strip_prefix("</") {
                let close = end_rest
                    .find('>')
                    .ok_or(self.error("unterminated end tag"))?;
                let name = end_rest[..close].trim().to_string();
                self.pos += 2 + close + 1;
                return Ok(Some(Event::End { name }));
            }

            return self.tag().map(Some);
        }
    }

    /// Parse a start or empty tag beginning at `self.pos` (which points at
    /// the `<`).
    fn tag(&mut self) -> Result<Event, ParseError> {
        let start = self.pos;
        self.pos += 1;

        let name_start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '>' || c == '/' {
                break;
            }
            self.pos += c.len_utf8();
        }
        let name = self.input[name_start..self.pos].to_string();
        if name.is_empty() {
            self.pos = start;
            return Err(self.error("empty tag name"));
        }

        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('>') => {
                    self.pos += 1;
                    return Ok(Event::Start { name, attributes });
                }
                Some('/') => {
                    self.pos += 1;
                    if self.peek() == Some('>') {
                        self.pos += 1;
                        return Ok(Event::Empty { name, attributes });
                    }
                    return Err(self.error("expected `>` after `/`"));
                }
                Some(_) => attributes.push(self.attribute()?),
                None => return Err(self.error("unterminated tag")),
            }
        }
    }

    fn attribute(&mut self) -> Result<(String, String), ParseError> {
        let name_start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '=' || c == '>' || c == '/' {
                break;
            }
            self.pos += c.len_utf8();
        }
        let name = self.input[name_start..self.pos].to_string();
        if name.is_empty() {
            return Err(self.error("empty attribute name"));
        }

        self.skip_whitespace();
        if self.peek() != Some('=') {
            return Err(self.error("expected `=` after attribute name"));
        }
        self.pos += 1;
        self.skip_whitespace();

        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.error("expected quoted attribute value")),
        };
        self.pos += 1;
        let value_start = self.pos;
        let close = self.input[self.pos..]
            .find(quote)
            .ok_or(self.error("unterminated attribute value"))?;
        self.pos += close + 1;
        let value = decode_entities(&self.input[value_start..value_start + close]);

        Ok((name, value))
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn error(&self, message: &'static str) -> ParseError {
        ParseError::Markup {
            offset: self.pos,
            message,
        }
    }
}

/// If `rest` (starting with `<`) is a comment, processing instruction, or
/// declaration, return how many bytes to skip past it.
fn skip_non_tag(rest: &str) -> Option<usize> {
    if rest.starts_with("<!--") {
        let len = rest.find("-->").map_or(rest.len(), |i| i + 3);
        return Some(len);
    }
    if rest.starts_with("<?") {
        let len = rest.find("?>").map_or(rest.len(), |i| i + 2);
        return Some(len);
    }
    if rest.starts_with("<!") {
        let len = rest.find('>').map_or(rest.len(), |i| i + 1);
        return Some(len);
    }
    None
}

/// Decode the five predefined XML entities.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(input: &str) -> Vec<Event> {
        let mut scanner = Scanner::new(input);
        let mut out = Vec::new();
        while let Some(event) = scanner.next_event().unwrap() {
            out.push(event);
        }
        out
    }

    #[test]
    fn scans_nested_tags() {
        let got = events(r#"<?xml version="1.0"?><svg width="1"><g></g><path d="M0 0"/></svg>"#);
        assert_eq!(
            got,
            vec![
                Event::Start {
                    name: "svg".into(),
                    attributes: vec![("width".into(), "1".into())],
                },
                Event::Start {
                    name: "g".into(),
                    attributes: vec![],
                },
                Event::End { name: "g".into() },
                Event::Empty {
                    name: "path".into(),
                    attributes: vec![("d".into(), "M0 0".into())],
                },
                Event::End { name: "svg".into() },
            ]
        );
    }

    #[test]
    fn skips_comments_and_doctype() {
        let got = events("<!DOCTYPE svg><!-- a <tag> inside --><svg/>");
        assert_eq!(
            got,
            vec![Event::Empty {
                name: "svg".into(),
                attributes: vec![],
            }]
        );
    }

    #[test]
    fn decodes_attribute_entities() {
        let got = events(r#"<path d="M0 0" title="a &amp; b"/>"#);
        let Event::Empty { attributes, .. } = &got[0] else {
            panic!("empty tag expected");
        };
        assert_eq!(attributes[1].1, "a & b");
    }

    #[test]
    fn unterminated_attribute_is_an_error() {
        let mut scanner = Scanner::new(r#"<svg width="1>"#);
        assert!(scanner.next_event().is_err());
    }
}
