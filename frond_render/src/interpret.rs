// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The path command interpreter.

use frond_graphic::{ArcCurve, ArcFlag, Command, Path, Point, Scale, SweepDirection};
use kurbo::{Affine, Arc, BezPath, SvgArc, Vec2};
use peniko::Fill;

use crate::{RenderError, style};

/// Tolerance used when lowering arcs to cubic Béziers.
const ARC_TOLERANCE: f64 = 0.1;

/// Interpret a path's command sequence into backend geometry, returning the
/// finished path and its resolved fill rule.
///
/// Commands must be in relative form (see
/// [`frond_graphic::normalize::to_relative`]); that is this function's
/// precondition, established once per document before rendering. When
/// `scale` is not the identity it is applied to the completed path as a
/// whole, not per command, so curve shapes stay consistent under
/// anisotropic scaling.
pub fn interpret(path: &Path, scale: Scale) -> Result<(BezPath, Fill), RenderError> {
    let mut builder = PenPathBuilder::new();

    for command in &path.data {
        if clears_reflection(command) {
            builder.reflection = None;
        }

        match command {
            Command::MoveTo(_, target) => builder.move_by(*target),
            Command::LineTo(_, target) => builder.line_by(*target),
            // Each axis line zeroes its unused axis itself; neither
            // delegates to the other.
            Command::HorizontalLineTo(_, dx) => builder.line_by(Point::new(*dx, 0.0)),
            Command::VerticalLineTo(_, dy) => builder.line_by(Point::new(0.0, *dy)),
            Command::CubicBezierCurve(_, curve) => {
                builder.cubic_by(curve.start_control, curve.end_control, curve.end);
                builder.reflection = Some(curve.end_control);
            }
            Command::SmoothCubicBezierCurve(_, curve) => {
                let implied = -builder.reflection_point(path)?;
                builder.cubic_by(implied, curve.end_control, curve.end);
                builder.reflection = Some(curve.end_control);
            }
            Command::QuadraticBezierCurve(_, curve) => {
                builder.quad_by(curve.control, curve.end);
                builder.reflection = Some(curve.control);
            }
            Command::SmoothQuadraticBezierCurve(_, end) => {
                let implied = -builder.reflection_point(path)?;
                builder.quad_by(implied, *end);
                builder.reflection = Some(implied);
            }
            Command::EllipticalArcCurve(_, arc) => builder.arc_by(arc),
            Command::ClosePath => builder.close(),
        }
    }

    let mut geometry = builder.bez;
    if !scale.is_identity() {
        geometry.apply_affine(Affine::scale_non_uniform(
            f64::from(scale.x),
            f64::from(scale.y),
        ));
    }
    Ok((geometry, style::fill_rule(path.fill_rule)))
}

/// Commands that neither produce nor consume reflection state clear it
/// before they are applied.
fn clears_reflection(command: &Command) -> bool {
    matches!(
        command,
        Command::MoveTo(..)
            | Command::LineTo(..)
            | Command::HorizontalLineTo(..)
            | Command::VerticalLineTo(..)
            | Command::EllipticalArcCurve(..)
            | Command::ClosePath
    )
}

/// Pen-tracking builder over [`BezPath`], which only accepts absolute
/// coordinates.
struct PenPathBuilder {
    bez: BezPath,
    pen: kurbo::Point,
    subpath_start: kurbo::Point,
    /// End control point of the previous curve, in the relative frame, for
    /// smooth variants to negate. `None` until a curve establishes it.
    reflection: Option<Point>,
}

impl PenPathBuilder {
    fn new() -> Self {
        Self {
            bez: BezPath::new(),
            pen: kurbo::Point::ZERO,
            subpath_start: kurbo::Point::ZERO,
            reflection: None,
        }
    }

    fn reflection_point(&self, path: &Path) -> Result<Point, RenderError> {
        self.reflection
            .ok_or_else(|| RenderError::DanglingSmoothCurve {
                path: path.id.clone().unwrap_or_else(|| "<unnamed>".to_string()),
            })
    }

    /// The absolute position `offset` away from the pen.
    fn at(&self, offset: Point) -> kurbo::Point {
        self.pen + Vec2::new(f64::from(offset.x), f64::from(offset.y))
    }

    fn move_by(&mut self, offset: Point) {
        let target = self.at(offset);
        self.bez.move_to(target);
        self.pen = target;
        self.subpath_start = target;
    }

    fn line_by(&mut self, offset: Point) {
        let target = self.at(offset);
        self.bez.line_to(target);
        self.pen = target;
    }

    fn cubic_by(&mut self, control1: Point, control2: Point, end: Point) {
        let (p1, p2, p3) = (self.at(control1), self.at(control2), self.at(end));
        self.bez.curve_to(p1, p2, p3);
        self.pen = p3;
    }

    fn quad_by(&mut self, control: Point, end: Point) {
        let (p1, p2) = (self.at(control), self.at(end));
        self.bez.quad_to(p1, p2);
        self.pen = p2;
    }

    fn arc_by(&mut self, arc: &ArcCurve) {
        let to = self.at(arc.end);
        let svg_arc = SvgArc {
            from: self.pen,
            to,
            radii: Vec2::new(
                f64::from(arc.radius_x).abs(),
                f64::from(arc.radius_y).abs(),
            ),
            x_rotation: f64::from(arc.angle).to_radians(),
            large_arc: arc.arc == ArcFlag::Large,
            // Clockwise is taken to be the positive-angle direction of the
            // y-down viewport. Whether vello_cpu's sweep orientation agrees
            // has not been verified visually yet.
            sweep: arc.sweep == SweepDirection::Clockwise,
        };

        match Arc::from_svg_arc(&svg_arc) {
            Some(resolved) => resolved.to_cubic_beziers(ARC_TOLERANCE, |p1, p2, p3| {
                self.bez.curve_to(p1, p2, p3);
            }),
            // Degenerate radii or coincident endpoints collapse the arc to
            // a line segment.
            None => self.bez.line_to(to),
        }
        self.pen = to;
    }

    fn close(&mut self) {
        self.bez.close_path();
        self.pen = self.subpath_start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frond_graphic::{
        Color, CoordinateSpace, CubicCurve, FillRule, LineCap, LineJoin, QuadraticCurve,
        SmoothCubicCurve,
    };
    use kurbo::PathEl;

    const REL: CoordinateSpace = CoordinateSpace::Relative;

    fn path(data: Vec<Command>) -> Path {
        Path {
            id: Some("test".to_string()),
            data,
            fill: Color::BLACK,
            fill_rule: FillRule::NonZero,
            stroke: Color::TRANSPARENT,
            stroke_width: 0.0,
            stroke_miter_limit: 4.0,
            stroke_line_cap: LineCap::Butt,
            stroke_line_join: LineJoin::Miter,
        }
    }

    fn last_point(bez: &BezPath) -> kurbo::Point {
        match *bez.elements().last().expect("path should not be empty") {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => p,
            PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => p,
            PathEl::ClosePath => panic!("test paths should not end closed"),
        }
    }

    #[test]
    fn lines_accumulate_relative_offsets() {
        let (bez, _) = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::new(1.0, 2.0)),
                Command::LineTo(REL, Point::new(3.0, 4.0)),
                Command::LineTo(REL, Point::new(-1.0, 0.5)),
            ]),
            Scale::IDENTITY,
        )
        .unwrap();
        assert_eq!(last_point(&bez), kurbo::Point::new(3.0, 6.5));
    }

    #[test]
    fn axis_lines_leave_the_other_axis_untouched() {
        let (bez, _) = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::new(5.0, 5.0)),
                Command::HorizontalLineTo(REL, 7.0),
                Command::VerticalLineTo(REL, -2.0),
            ]),
            Scale::IDENTITY,
        )
        .unwrap();
        let elements = bez.elements();
        assert_eq!(elements[1], PathEl::LineTo(kurbo::Point::new(12.0, 5.0)));
        assert_eq!(elements[2], PathEl::LineTo(kurbo::Point::new(12.0, 3.0)));
    }

    #[test]
    fn smooth_cubic_negates_the_previous_end_control() {
        let (bez, _) = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::new(10.0, 10.0)),
                Command::CubicBezierCurve(
                    REL,
                    CubicCurve {
                        start_control: Point::new(1.0, 0.0),
                        end_control: Point::new(2.0, 1.0),
                        end: Point::new(3.0, 3.0),
                    },
                ),
                Command::SmoothCubicBezierCurve(
                    REL,
                    SmoothCubicCurve {
                        end_control: Point::new(1.0, 1.0),
                        end: Point::new(2.0, 2.0),
                    },
                ),
            ]),
            Scale::IDENTITY,
        )
        .unwrap();

        // The pen sits at (13, 13) when the smooth command starts; its
        // implied start control is the negated (2, 1).
        let PathEl::CurveTo(control1, _, _) = bez.elements()[2] else {
            panic!("smooth cubic should emit a cubic");
        };
        assert_eq!(control1, kurbo::Point::new(11.0, 12.0));
    }

    #[test]
    fn smooth_quadratic_reuses_the_reflected_control() {
        let (bez, _) = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::ZERO),
                Command::QuadraticBezierCurve(
                    REL,
                    QuadraticCurve {
                        control: Point::new(2.0, -2.0),
                        end: Point::new(4.0, 0.0),
                    },
                ),
                Command::SmoothQuadraticBezierCurve(REL, Point::new(4.0, 0.0)),
                Command::SmoothQuadraticBezierCurve(REL, Point::new(4.0, 0.0)),
            ]),
            Scale::IDENTITY,
        )
        .unwrap();

        // First smooth: control = -(2, -2) from pen (4, 0). Second smooth
        // reflects the control the first one used.
        let PathEl::QuadTo(control1, _) = bez.elements()[2] else {
            panic!("quadratic expected");
        };
        assert_eq!(control1, kurbo::Point::new(2.0, 2.0));
        let PathEl::QuadTo(control2, _) = bez.elements()[3] else {
            panic!("quadratic expected");
        };
        assert_eq!(control2, kurbo::Point::new(10.0, -2.0));
    }

    #[test]
    fn smooth_curve_without_a_preceding_curve_is_an_error() {
        let result = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::ZERO),
                Command::SmoothQuadraticBezierCurve(REL, Point::new(4.0, 0.0)),
            ]),
            Scale::IDENTITY,
        );
        assert!(matches!(
            result,
            Err(RenderError::DanglingSmoothCurve { .. }),
        ));
    }

    #[test]
    fn an_intervening_line_clears_reflection_state() {
        let result = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::ZERO),
                Command::QuadraticBezierCurve(
                    REL,
                    QuadraticCurve {
                        control: Point::new(1.0, 1.0),
                        end: Point::new(2.0, 0.0),
                    },
                ),
                Command::LineTo(REL, Point::new(1.0, 0.0)),
                Command::SmoothQuadraticBezierCurve(REL, Point::new(2.0, 0.0)),
            ]),
            Scale::IDENTITY,
        );
        assert!(matches!(
            result,
            Err(RenderError::DanglingSmoothCurve { .. }),
        ));
    }

    #[test]
    fn close_path_returns_the_pen_to_the_subpath_start() {
        let (bez, _) = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::new(5.0, 5.0)),
                Command::LineTo(REL, Point::new(4.0, 0.0)),
                Command::ClosePath,
                Command::LineTo(REL, Point::new(0.0, 3.0)),
            ]),
            Scale::IDENTITY,
        )
        .unwrap();
        assert_eq!(last_point(&bez), kurbo::Point::new(5.0, 8.0));
    }

    #[test]
    fn a_degenerate_arc_becomes_a_line() {
        let (bez, _) = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::ZERO),
                Command::EllipticalArcCurve(
                    REL,
                    ArcCurve {
                        radius_x: 0.0,
                        radius_y: 0.0,
                        angle: 0.0,
                        arc: ArcFlag::Small,
                        sweep: SweepDirection::Clockwise,
                        end: Point::new(8.0, 6.0),
                    },
                ),
            ]),
            Scale::IDENTITY,
        )
        .unwrap();
        assert_eq!(bez.elements()[1], PathEl::LineTo(kurbo::Point::new(8.0, 6.0)));
    }

    #[test]
    fn an_arc_lowers_to_cubics_ending_at_its_endpoint() {
        let (bez, _) = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::ZERO),
                Command::EllipticalArcCurve(
                    REL,
                    ArcCurve {
                        radius_x: 5.0,
                        radius_y: 5.0,
                        angle: 0.0,
                        arc: ArcFlag::Small,
                        sweep: SweepDirection::Clockwise,
                        end: Point::new(10.0, 0.0),
                    },
                ),
            ]),
            Scale::IDENTITY,
        )
        .unwrap();
        assert!(
            matches!(bez.elements().last(), Some(PathEl::CurveTo(..))),
            "arc should lower to cubics",
        );
        let end = last_point(&bez);
        assert!((end.x - 10.0).abs() < 1e-6, "{end:?}");
        assert!(end.y.abs() < 1e-6, "{end:?}");
    }

    #[test]
    fn the_scale_is_applied_to_the_finished_path() {
        let (bez, _) = interpret(
            &path(vec![
                Command::MoveTo(REL, Point::new(1.0, 1.0)),
                Command::LineTo(REL, Point::new(1.0, 0.0)),
            ]),
            Scale::new(2.0, 3.0),
        )
        .unwrap();
        let elements = bez.elements();
        assert_eq!(elements[0], PathEl::MoveTo(kurbo::Point::new(2.0, 3.0)));
        assert_eq!(elements[1], PathEl::LineTo(kurbo::Point::new(4.0, 3.0)));
    }

    #[test]
    fn the_fill_rule_is_resolved_per_path() {
        let mut even_odd = path(vec![Command::MoveTo(REL, Point::ZERO)]);
        even_odd.fill_rule = FillRule::EvenOdd;
        let (_, rule) = interpret(&even_odd, Scale::IDENTITY).unwrap();
        assert_eq!(rule, Fill::EvenOdd);
    }
}
