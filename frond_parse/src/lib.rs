// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup parsing for vector artwork documents.
//!
//! The entry point is [`parse_document`], which scans markup text, picks
//! the document variant from the root element (`<svg>` or `<vector>`), and
//! builds the element tree with that format's attribute conventions and
//! defaults. Path data is broken out into single-record commands as it is
//! parsed; coordinate-space normalization is left to the model's
//! normalization passes.
//!
//! The scanner is deliberately non-validating: unknown elements become
//! pass-through containers, and stray end tags simply close the current
//! scope.

mod color;
mod path_data;
mod transform;
mod xml;

pub use color::{parse_drawable_color, parse_svg_color};
pub use path_data::parse_path_data;
pub use transform::{drawable_group_transform, parse_transform_list};

use std::collections::HashMap;

use frond_graphic::{
    ClipPath, Color, Document, Element, Extra, FillRule, Group, LineCap, LineJoin, Path, Svg,
    VectorDrawable,
};
use kurbo::Affine;
use thiserror::Error;

use xml::{Event, Scanner};

/// Errors produced while turning markup into a document tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The markup itself could not be scanned.
    #[error("markup error at byte {offset}: {message}")]
    Markup {
        /// Byte offset of the failure in the input.
        offset: usize,
        /// What went wrong.
        message: &'static str,
    },
    /// The document root is not a supported vector format.
    #[error("unsupported document root <{0}>")]
    UnsupportedRoot(String),
    /// Path data did not follow the path-data grammar.
    #[error("malformed path data near `{0}`")]
    PathData(String),
    /// A transform attribute did not parse.
    #[error("malformed transform list `{0}`")]
    Transform(String),
    /// A color attribute did not parse.
    #[error("malformed color `{0}`")]
    Color(String),
}

/// Which format's element and attribute conventions apply.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Format {
    Svg,
    Drawable,
}

/// Parse a complete document from markup text.
pub fn parse_document(text: &str) -> Result<Document, ParseError> {
    let mut scanner = Scanner::new(text);
    let Some(event) = scanner.next_event()? else {
        return Err(ParseError::Markup {
            offset: 0,
            message: "no root element",
        });
    };

    let (name, attributes, has_children) = match event {
        Event::Start { name, attributes } => (name, attributes, true),
        Event::Empty { name, attributes } => (name, attributes, false),
        Event::End { .. } => {
            return Err(ParseError::Markup {
                offset: 0,
                message: "unexpected end tag before the root element",
            });
        }
    };

    match name.as_str() {
        "svg" => {
            let elements = if has_children {
                parse_children(&mut scanner, Format::Svg)?
            } else {
                Vec::new()
            };
            Ok(Document::Svg(Svg {
                attributes: attribute_map(attributes),
                elements,
            }))
        }
        "vector" => {
            let elements = if has_children {
                parse_children(&mut scanner, Format::Drawable)?
            } else {
                Vec::new()
            };
            Ok(Document::VectorDrawable(VectorDrawable {
                attributes: attribute_map(attributes),
                elements,
            }))
        }
        _ => Err(ParseError::UnsupportedRoot(name)),
    }
}

/// Build sibling elements until the enclosing scope closes.
fn parse_children(scanner: &mut Scanner<'_>, format: Format) -> Result<Vec<Element>, ParseError> {
    let mut elements = Vec::new();
    while let Some(event) = scanner.next_event()? {
        match event {
            Event::End { .. } => return Ok(elements),
            Event::Start { name, attributes } => {
                let children = parse_children(scanner, format)?;
                elements.push(build_element(format, &name, attributes, children)?);
            }
            Event::Empty { name, attributes } => {
                elements.push(build_element(format, &name, attributes, Vec::new())?);
            }
        }
    }
    Ok(elements)
}

fn build_element(
    format: Format,
    name: &str,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
) -> Result<Element, ParseError> {
    let attributes = attribute_map(attributes);
    let element = match (format, name) {
        (Format::Svg, "g") => {
            let transform = match attributes.get("transform") {
                Some(raw) => parse_transform_list(raw)?,
                None => Affine::IDENTITY,
            };
            Element::Group(Group {
                transform,
                elements: children,
            })
        }
        (Format::Svg, "clipPath") => Element::ClipPath(ClipPath { elements: children }),
        (Format::Svg, "path") => Element::Path(svg_path(&attributes)?),
        (Format::Drawable, "group") => Element::Group(Group {
            transform: drawable_group_transform(&attributes),
            elements: children,
        }),
        (Format::Drawable, "clip-path") => {
            // A drawable clip is a bare path-data attribute; wrap it as the
            // clip container's path child.
            let mut elements = vec![Element::Path(drawable_clip_path(&attributes)?)];
            elements.extend(children);
            Element::ClipPath(ClipPath { elements })
        }
        (Format::Drawable, "path") => Element::Path(drawable_path(&attributes)?),
        _ => Element::Extra(Extra {
            name: name.to_string(),
            elements: children,
        }),
    };
    Ok(element)
}

fn svg_path(attributes: &HashMap<String, String>) -> Result<Path, ParseError> {
    let data = match attributes.get("d") {
        Some(d) => parse_path_data(d)?,
        None => Vec::new(),
    };
    let fill = match attributes.get("fill") {
        Some(raw) => parse_svg_color(raw)?,
        None => Color::BLACK,
    };
    let stroke = match attributes.get("stroke") {
        Some(raw) => parse_svg_color(raw)?,
        None => Color::TRANSPARENT,
    };

    Ok(Path {
        id: attributes.get("id").cloned(),
        data,
        fill,
        fill_rule: match attributes.get("fill-rule").map(String::as_str) {
            Some("evenodd") => FillRule::EvenOdd,
            _ => FillRule::NonZero,
        },
        stroke,
        stroke_width: number_attribute(attributes, "stroke-width", 1.0),
        stroke_miter_limit: number_attribute(attributes, "stroke-miterlimit", 4.0),
        stroke_line_cap: match attributes.get("stroke-linecap").map(String::as_str) {
            Some("round") => LineCap::Round,
            Some("square") => LineCap::Square,
            _ => LineCap::Butt,
        },
        stroke_line_join: match attributes.get("stroke-linejoin").map(String::as_str) {
            Some("round") => LineJoin::Round,
            Some("bevel") => LineJoin::Bevel,
            Some("arcs") => LineJoin::Arcs,
            Some("miter-clip") => LineJoin::MiterClip,
            _ => LineJoin::Miter,
        },
    })
}

fn drawable_path(attributes: &HashMap<String, String>) -> Result<Path, ParseError> {
    let data = match attributes.get("android:pathData") {
        Some(d) => parse_path_data(d)?,
        None => Vec::new(),
    };
    let fill = match attributes.get("android:fillColor") {
        Some(raw) => parse_drawable_color(raw)?,
        None => Color::TRANSPARENT,
    };
    let stroke = match attributes.get("android:strokeColor") {
        Some(raw) => parse_drawable_color(raw)?,
        None => Color::TRANSPARENT,
    };

    Ok(Path {
        id: attributes.get("android:name").cloned(),
        data,
        fill,
        fill_rule: match attributes.get("android:fillType").map(String::as_str) {
            Some("evenOdd") => FillRule::EvenOdd,
            _ => FillRule::NonZero,
        },
        stroke,
        stroke_width: number_attribute(attributes, "android:strokeWidth", 0.0),
        stroke_miter_limit: number_attribute(attributes, "android:strokeMiterLimit", 4.0),
        stroke_line_cap: match attributes.get("android:strokeLineCap").map(String::as_str) {
            Some("round") => LineCap::Round,
            Some("square") => LineCap::Square,
            _ => LineCap::Butt,
        },
        stroke_line_join: match attributes.get("android:strokeLineJoin").map(String::as_str) {
            Some("round") => LineJoin::Round,
            Some("bevel") => LineJoin::Bevel,
            _ => LineJoin::Miter,
        },
    })
}

/// Only the geometry of a clip path matters; paint attributes are fixed.
fn drawable_clip_path(attributes: &HashMap<String, String>) -> Result<Path, ParseError> {
    let data = match attributes.get("android:pathData") {
        Some(d) => parse_path_data(d)?,
        None => Vec::new(),
    };
    Ok(Path {
        id: attributes.get("android:name").cloned(),
        data,
        fill: Color::BLACK,
        fill_rule: match attributes.get("android:fillType").map(String::as_str) {
            Some("evenOdd") => FillRule::EvenOdd,
            _ => FillRule::NonZero,
        },
        stroke: Color::TRANSPARENT,
        stroke_width: 0.0,
        stroke_miter_limit: 4.0,
        stroke_line_cap: LineCap::Butt,
        stroke_line_join: LineJoin::Miter,
    })
}

fn number_attribute(attributes: &HashMap<String, String>, name: &str, default: f32) -> f32 {
    match attributes.get(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    attribute = name,
                    value = %raw,
                    "ignoring malformed numeric attribute"
                );
                default
            }
        },
        None => default,
    }
}

fn attribute_map(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    pairs.into_iter().collect()
}
