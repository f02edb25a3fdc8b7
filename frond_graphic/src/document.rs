// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsed documents: the concrete root variants and their typed accessors.

use std::collections::HashMap;

use thiserror::Error;

use crate::Element;

/// Failure to read a typed dimension attribute off a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    /// The attribute is absent.
    #[error("missing required attribute `{0}`")]
    Missing(&'static str),
    /// The attribute is present but does not parse as a dimension.
    #[error("attribute `{name}` has malformed value `{value}`")]
    Malformed {
        /// Attribute name as written in markup.
        name: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// The bounding box declared by a browser-viewport document.
///
/// The four numbers are read as (minX, minY, maxX, maxY); the viewport size
/// is the difference per axis, and a non-zero origin implies a translation
/// of all path coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewBox {
    /// Minimum x coordinate.
    pub min_x: f32,
    /// Minimum y coordinate.
    pub min_y: f32,
    /// Maximum x coordinate.
    pub max_x: f32,
    /// Maximum y coordinate.
    pub max_y: f32,
}

impl ViewBox {
    /// Viewport width.
    #[inline]
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Viewport height.
    #[inline]
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }
}

/// An Android Vector Drawable document.
///
/// The viewport comes from dedicated viewport attributes; the display size
/// is declared in density-independent (dp-suffixed) units.
#[derive(Clone, Debug)]
pub struct VectorDrawable {
    /// Raw root attributes, by name.
    pub attributes: HashMap<String, String>,
    /// Top-level elements, in document order.
    pub elements: Vec<Element>,
}

impl VectorDrawable {
    /// Intrinsic viewport size, from `android:viewportWidth` and
    /// `android:viewportHeight`.
    pub fn viewport_size(&self) -> Result<(f32, f32), AttributeError> {
        Ok((
            dimension(&self.attributes, "android:viewportWidth")?,
            dimension(&self.attributes, "android:viewportHeight")?,
        ))
    }

    /// Declared display size, from the dp-suffixed `android:width` and
    /// `android:height`.
    pub fn display_size(&self) -> Result<(f32, f32), AttributeError> {
        Ok((
            dimension(&self.attributes, "android:width")?,
            dimension(&self.attributes, "android:height")?,
        ))
    }
}

/// A Scalable Vector Graphics document.
///
/// The viewport comes from the `viewBox` bounding box; the display size from
/// the (possibly unit-suffixed) `width` and `height` attributes.
#[derive(Clone, Debug)]
pub struct Svg {
    /// Raw root attributes, by name.
    pub attributes: HashMap<String, String>,
    /// Top-level elements, in document order.
    pub elements: Vec<Element>,
}

impl Svg {
    /// The declared bounding box.
    pub fn view_box(&self) -> Result<ViewBox, AttributeError> {
        let raw = self
            .attributes
            .get("viewBox")
            .ok_or(AttributeError::Missing("viewBox"))?;
        let numbers: Vec<f32> = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map_while(|part| part.parse().ok())
            .collect();
        if numbers.len() != 4 {
            return Err(AttributeError::Malformed {
                name: "viewBox",
                value: raw.clone(),
            });
        }
        Ok(ViewBox {
            min_x: numbers[0],
            min_y: numbers[1],
            max_x: numbers[2],
            max_y: numbers[3],
        })
    }

    /// Declared display size, from `width` and `height`.
    pub fn display_size(&self) -> Result<(f32, f32), AttributeError> {
        Ok((
            dimension(&self.attributes, "width")?,
            dimension(&self.attributes, "height")?,
        ))
    }
}

/// A parsed document, one of the supported root variants.
#[derive(Clone, Debug)]
pub enum Document {
    /// Android Vector Drawable (`<vector>` root).
    VectorDrawable(VectorDrawable),
    /// Scalable Vector Graphics (`<svg>` root).
    Svg(Svg),
}

impl Document {
    /// Top-level elements, in document order.
    pub fn elements(&self) -> &[Element] {
        match self {
            Self::VectorDrawable(drawable) => &drawable.elements,
            Self::Svg(svg) => &svg.elements,
        }
    }

    /// Mutable access to the top-level elements, for normalization.
    pub fn elements_mut(&mut self) -> &mut Vec<Element> {
        match self {
            Self::VectorDrawable(drawable) => &mut drawable.elements,
            Self::Svg(svg) => &mut svg.elements,
        }
    }

    /// Short human-readable description of the variant, for diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            Self::VectorDrawable(_) => "vector drawable",
            Self::Svg(_) => "svg",
        }
    }
}

/// Read a numeric attribute, stripping any trailing unit suffix
/// (`24dp`, `48px`, `100%`).
fn dimension(
    attributes: &HashMap<String, String>,
    name: &'static str,
) -> Result<f32, AttributeError> {
    let raw = attributes.get(name).ok_or(AttributeError::Missing(name))?;
    let numeric = raw
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    numeric
        .parse()
        .map_err(|_| AttributeError::Malformed {
            name,
            value: raw.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn drawable_dimensions_strip_units() {
        let drawable = VectorDrawable {
            attributes: attrs(&[
                ("android:width", "24dp"),
                ("android:height", "24dp"),
                ("android:viewportWidth", "24"),
                ("android:viewportHeight", "24"),
            ]),
            elements: Vec::new(),
        };
        assert_eq!(drawable.display_size().unwrap(), (24.0, 24.0));
        assert_eq!(drawable.viewport_size().unwrap(), (24.0, 24.0));
    }

    #[test]
    fn missing_dimension_reports_attribute_name() {
        let drawable = VectorDrawable {
            attributes: attrs(&[("android:height", "24dp")]),
            elements: Vec::new(),
        };
        assert_eq!(
            drawable.display_size(),
            Err(AttributeError::Missing("android:width"))
        );
    }

    #[test]
    fn malformed_dimension_reports_raw_value() {
        let drawable = VectorDrawable {
            attributes: attrs(&[("android:width", "wide")]),
            elements: Vec::new(),
        };
        assert!(matches!(
            drawable.display_size(),
            Err(AttributeError::Malformed { name: "android:width", .. })
        ));
    }

    #[test]
    fn view_box_accepts_commas_and_whitespace() {
        let svg = Svg {
            attributes: attrs(&[("viewBox", "0, 0 24,24")]),
            elements: Vec::new(),
        };
        let view_box = svg.view_box().unwrap();
        assert_eq!(view_box.width(), 24.0);
        assert_eq!(view_box.height(), 24.0);
        assert_eq!((view_box.min_x, view_box.min_y), (0.0, 0.0));
    }

    #[test]
    fn short_view_box_is_malformed() {
        let svg = Svg {
            attributes: attrs(&[("viewBox", "0 0 24")]),
            elements: Vec::new(),
        };
        assert!(matches!(
            svg.view_box(),
            Err(AttributeError::Malformed { name: "viewBox", .. })
        ));
    }
}
