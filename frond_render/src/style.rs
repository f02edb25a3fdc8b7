// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint style mapping.

use frond_graphic::{Color, FillRule, LineCap, LineJoin, Path};
use kurbo::{Cap, Join, Stroke};
use peniko::Fill;

/// Backend paint configuration for one path: one stroke pass and one fill
/// pass.
#[derive(Clone, Debug)]
pub struct PaintStyle {
    /// Stroke geometry parameters.
    pub stroke: Stroke,
    /// Stroke pass color.
    pub stroke_color: peniko::Color,
    /// Fill pass color.
    pub fill_color: peniko::Color,
    /// Backend fill rule.
    pub fill_rule: Fill,
}

/// Map a path's paint attributes into the backend's representation.
pub fn paint_style(path: &Path) -> PaintStyle {
    let mut stroke = Stroke::new(f64::from(path.stroke_width));
    stroke.miter_limit = f64::from(path.stroke_miter_limit);
    stroke.join = join(path.stroke_line_join);
    stroke.start_cap = cap(path.stroke_line_cap);
    stroke.end_cap = cap(path.stroke_line_cap);

    PaintStyle {
        stroke,
        stroke_color: color(path.stroke),
        fill_color: color(path.fill),
        fill_rule: fill_rule(path.fill_rule),
    }
}

/// Normalize 8-bit channels to the backend's floating-point color
/// (channel / 255).
pub(crate) fn color(color: Color) -> peniko::Color {
    peniko::Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}

/// The two fill rules map one-to-one onto the backend's.
pub fn fill_rule(rule: FillRule) -> Fill {
    match rule {
        FillRule::NonZero => Fill::NonZero,
        FillRule::EvenOdd => Fill::EvenOdd,
    }
}

fn cap(cap: LineCap) -> Cap {
    match cap {
        LineCap::Butt => Cap::Butt,
        LineCap::Round => Cap::Round,
        LineCap::Square => Cap::Square,
    }
}

fn join(join: LineJoin) -> Join {
    match join {
        LineJoin::Miter => Join::Miter,
        LineJoin::Round => Join::Round,
        LineJoin::Bevel => Join::Bevel,
        // kurbo strokes have no arcs or miter-clip joins; approximate each
        // with the nearest supported join.
        LineJoin::Arcs => Join::Round,
        LineJoin::MiterClip => Join::Miter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_with_join(stroke_line_join: LineJoin) -> Path {
        Path {
            id: None,
            data: Vec::new(),
            fill: Color::rgba(255, 0, 0, 51),
            fill_rule: FillRule::NonZero,
            stroke: Color::WHITE,
            stroke_width: 2.5,
            stroke_miter_limit: 10.0,
            stroke_line_cap: LineCap::Square,
            stroke_line_join,
        }
    }

    #[test]
    fn channels_normalize_by_255() {
        let mapped = color(Color::rgba(255, 0, 51, 51));
        assert_eq!(mapped.components[0], 1.0);
        assert_eq!(mapped.components[1], 0.0);
        assert!((mapped.components[2] - 0.2).abs() < 1e-3);
        assert!((mapped.components[3] - 0.2).abs() < 1e-3);
    }

    #[test]
    fn fill_rules_map_bijectively() {
        assert_eq!(fill_rule(FillRule::NonZero), Fill::NonZero);
        assert_eq!(fill_rule(FillRule::EvenOdd), Fill::EvenOdd);
    }

    #[test]
    fn stroke_parameters_carry_over() {
        let style = paint_style(&path_with_join(LineJoin::Bevel));
        assert_eq!(style.stroke.width, 2.5);
        assert_eq!(style.stroke.miter_limit, 10.0);
        assert_eq!(style.stroke.join, Join::Bevel);
        assert_eq!(style.stroke.start_cap, Cap::Square);
        assert_eq!(style.stroke.end_cap, Cap::Square);
    }

    #[test]
    fn unsupported_joins_map_to_stable_approximations() {
        // Deliberately lossy: the backend has no equivalents.
        assert_eq!(paint_style(&path_with_join(LineJoin::Arcs)).stroke.join, Join::Round);
        assert_eq!(
            paint_style(&path_with_join(LineJoin::MiterClip)).stroke.join,
            Join::Miter,
        );
    }
}
