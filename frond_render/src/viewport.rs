// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport and scale resolution.

use frond_graphic::{Document, Point, Scale};

use crate::RenderError;

/// Resolved output geometry for one render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Output surface width in pixels.
    pub width: u16,
    /// Output surface height in pixels.
    pub height: u16,
    /// Per-axis scale from viewport units to output pixels.
    pub scale: Scale,
    /// Origin of the viewport in document coordinates. A non-zero origin
    /// means all geometry must be translated by its negation before
    /// scaling.
    pub origin: Point,
}

/// Reconcile a document's intrinsic viewport with its declared display size
/// and the user's scale factor.
///
/// The per-axis scale is (display / viewport) × user scale: artwork whose
/// display size differs from its authored coordinate space renders at the
/// declared physical size while still honoring the user's zoom. The output
/// surface is the scaled viewport, rounded to whole pixels.
pub fn resolve(document: &Document, user_scale: f32) -> Result<Resolution, RenderError> {
    let dimension_error = |source| RenderError::Dimension {
        document: document.description(),
        source,
    };

    let (viewport, display, origin) = match document {
        Document::VectorDrawable(drawable) => (
            drawable.viewport_size().map_err(dimension_error)?,
            drawable.display_size().map_err(dimension_error)?,
            Point::ZERO,
        ),
        Document::Svg(svg) => {
            let view_box = svg.view_box().map_err(dimension_error)?;
            (
                (view_box.width(), view_box.height()),
                svg.display_size().map_err(dimension_error)?,
                Point::new(view_box.min_x, view_box.min_y),
            )
        }
    };

    let scale = Scale::new(
        display.0 / viewport.0 * user_scale,
        display.1 / viewport.1 * user_scale,
    );

    let width = f64::from(viewport.0 * scale.x).round() as i64;
    let height = f64::from(viewport.1 * scale.y).round() as i64;
    let (Ok(width), Ok(height)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(RenderError::Surface { width, height });
    };
    if width == 0 || height == 0 {
        return Err(RenderError::Surface {
            width: i64::from(width),
            height: i64::from(height),
        });
    }

    Ok(Resolution {
        width,
        height,
        scale,
        origin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use frond_graphic::{AttributeError, Svg, VectorDrawable};
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn drawable(pairs: &[(&str, &str)]) -> Document {
        Document::VectorDrawable(VectorDrawable {
            attributes: attrs(pairs),
            elements: Vec::new(),
        })
    }

    #[test]
    fn display_size_and_user_scale_compound() {
        let document = drawable(&[
            ("android:width", "48dp"),
            ("android:height", "48dp"),
            ("android:viewportWidth", "24"),
            ("android:viewportHeight", "24"),
        ]);
        let resolution = resolve(&document, 2.0).unwrap();
        assert_eq!(resolution.scale, Scale::new(4.0, 4.0));
        assert_eq!((resolution.width, resolution.height), (96, 96));
    }

    #[test]
    fn axes_scale_independently() {
        let document = drawable(&[
            ("android:width", "48dp"),
            ("android:height", "48dp"),
            ("android:viewportWidth", "24"),
            ("android:viewportHeight", "12"),
        ]);
        let resolution = resolve(&document, 1.0).unwrap();
        assert_eq!(resolution.scale, Scale::new(2.0, 4.0));
        assert_eq!((resolution.width, resolution.height), (48, 48));
    }

    #[test]
    fn a_missing_display_width_is_reported_by_name() {
        let document = drawable(&[
            ("android:height", "48dp"),
            ("android:viewportWidth", "24"),
            ("android:viewportHeight", "24"),
        ]);
        let error = resolve(&document, 1.0).unwrap_err();
        let RenderError::Dimension { document, source } = error else {
            panic!("dimension error expected, got {error}");
        };
        assert_eq!(document, "vector drawable");
        assert_eq!(source, AttributeError::Missing("android:width"));
    }

    #[test]
    fn the_svg_view_box_supplies_viewport_and_origin() {
        let document = Document::Svg(Svg {
            attributes: attrs(&[
                ("viewBox", "4 2 28 26"),
                ("width", "48px"),
                ("height", "48px"),
            ]),
            elements: Vec::new(),
        });
        let resolution = resolve(&document, 1.0).unwrap();
        assert_eq!(resolution.scale, Scale::new(2.0, 2.0));
        assert_eq!((resolution.width, resolution.height), (48, 48));
        assert_eq!(resolution.origin, Point::new(4.0, 2.0));
    }

    #[test]
    fn an_svg_without_a_view_box_fails() {
        let document = Document::Svg(Svg {
            attributes: attrs(&[("width", "48"), ("height", "48")]),
            elements: Vec::new(),
        });
        assert!(matches!(
            resolve(&document, 1.0),
            Err(RenderError::Dimension {
                document: "svg",
                source: AttributeError::Missing("viewBox"),
            }),
        ));
    }

    #[test]
    fn an_oversized_surface_is_rejected() {
        let document = drawable(&[
            ("android:width", "100000dp"),
            ("android:height", "48dp"),
            ("android:viewportWidth", "24"),
            ("android:viewportHeight", "24"),
        ]);
        assert!(matches!(
            resolve(&document, 1.0),
            Err(RenderError::Surface { .. }),
        ));
    }
}
