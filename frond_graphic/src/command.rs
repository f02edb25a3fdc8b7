// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of path drawing commands.
//!
//! Every positional command carries a [`CoordinateSpace`] marker and exactly
//! one parameter record; repeated parameter groups in source path data are
//! broken out into separate commands at parse time.

use crate::Point;

/// Whether a command's coordinates are absolute positions or offsets from
/// the current pen position.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CoordinateSpace {
    /// Coordinates are positions in the viewport.
    Absolute,
    /// Coordinates are offsets from the pen.
    Relative,
}

/// Parameters of a cubic Bézier segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicCurve {
    /// Control point leaving the segment start.
    pub start_control: Point,
    /// Control point entering the segment end.
    pub end_control: Point,
    /// Segment end point.
    pub end: Point,
}

/// Parameters of a smooth cubic Bézier segment, whose start control point is
/// implied by reflecting the previous curve's end control point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SmoothCubicCurve {
    /// Control point entering the segment end.
    pub end_control: Point,
    /// Segment end point.
    pub end: Point,
}

/// Parameters of a quadratic Bézier segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticCurve {
    /// The single control point.
    pub control: Point,
    /// Segment end point.
    pub end: Point,
}

/// Which of the two candidate sweeps satisfying the endpoint constraints an
/// arc should take.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ArcFlag {
    /// The sweep of less than 180 degrees.
    Small,
    /// The sweep of 180 degrees or more.
    Large,
}

/// Angular direction in which an arc is drawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SweepDirection {
    /// Negative-angle direction.
    Anticlockwise,
    /// Positive-angle direction.
    Clockwise,
}

/// Parameters of an elliptical arc segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcCurve {
    /// Semi-major radius along the ellipse x-axis.
    pub radius_x: f32,
    /// Semi-minor radius along the ellipse y-axis.
    pub radius_y: f32,
    /// Rotation of the ellipse x-axis relative to the viewport, in degrees.
    pub angle: f32,
    /// Arc-size selection.
    pub arc: ArcFlag,
    /// Sweep direction selection.
    pub sweep: SweepDirection,
    /// Segment end point.
    pub end: Point,
}

/// A single path drawing command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Begin a new subpath at the target point.
    MoveTo(CoordinateSpace, Point),
    /// Straight segment to the target point.
    LineTo(CoordinateSpace, Point),
    /// Straight segment moving only along the x axis.
    HorizontalLineTo(CoordinateSpace, f32),
    /// Straight segment moving only along the y axis.
    VerticalLineTo(CoordinateSpace, f32),
    /// Cubic Bézier segment with both control points explicit.
    CubicBezierCurve(CoordinateSpace, CubicCurve),
    /// Cubic Bézier segment with an implied start control point.
    SmoothCubicBezierCurve(CoordinateSpace, SmoothCubicCurve),
    /// Quadratic Bézier segment with an explicit control point.
    QuadraticBezierCurve(CoordinateSpace, QuadraticCurve),
    /// Quadratic Bézier segment with an implied control point; only the end
    /// point is given.
    SmoothQuadraticBezierCurve(CoordinateSpace, Point),
    /// Elliptical arc segment.
    EllipticalArcCurve(CoordinateSpace, ArcCurve),
    /// Close the current subpath, returning the pen to its start.
    ClosePath,
}
