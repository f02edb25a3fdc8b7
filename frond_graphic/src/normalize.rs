// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree and command normalization.
//!
//! The renderer requires two invariants the parser does not establish:
//! every group transform is baked into its descendants' coordinates
//! ([`bake_transforms`]), and every path command is expressed relative to
//! the pen ([`to_relative`], [`to_relative_paths`]). Both passes run once,
//! between parsing and traversal; afterwards the tree is read-only.

use kurbo::Affine;

use crate::{ArcCurve, Command, CoordinateSpace, Element, Path, Point, SweepDirection};

/// Rewrite every command of `path` into relative form.
///
/// The pen starts at the origin, so a leading absolute `MoveTo` converts to
/// an identical relative offset. Closing a subpath returns the pen to the
/// subpath start.
pub fn to_relative(path: &mut Path) {
    let mut pen = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    for command in &mut path.data {
        match command {
            Command::MoveTo(space, target) => {
                let absolute = resolve(*space, *target, pen);
                *target = absolute - pen;
                *space = CoordinateSpace::Relative;
                pen = absolute;
                subpath_start = absolute;
            }
            Command::LineTo(space, target)
            | Command::SmoothQuadraticBezierCurve(space, target) => {
                let absolute = resolve(*space, *target, pen);
                *target = absolute - pen;
                *space = CoordinateSpace::Relative;
                pen = absolute;
            }
            Command::HorizontalLineTo(space, x) => {
                if *space == CoordinateSpace::Absolute {
                    *x -= pen.x;
                    *space = CoordinateSpace::Relative;
                }
                pen.x += *x;
            }
            Command::VerticalLineTo(space, y) => {
                if *space == CoordinateSpace::Absolute {
                    *y -= pen.y;
                    *space = CoordinateSpace::Relative;
                }
                pen.y += *y;
            }
            Command::CubicBezierCurve(space, curve) => {
                if *space == CoordinateSpace::Absolute {
                    curve.start_control = curve.start_control - pen;
                    curve.end_control = curve.end_control - pen;
                    curve.end = curve.end - pen;
                    *space = CoordinateSpace::Relative;
                }
                pen += curve.end;
            }
            Command::SmoothCubicBezierCurve(space, curve) => {
                if *space == CoordinateSpace::Absolute {
                    curve.end_control = curve.end_control - pen;
                    curve.end = curve.end - pen;
                    *space = CoordinateSpace::Relative;
                }
                pen += curve.end;
            }
            Command::QuadraticBezierCurve(space, curve) => {
                if *space == CoordinateSpace::Absolute {
                    curve.control = curve.control - pen;
                    curve.end = curve.end - pen;
                    *space = CoordinateSpace::Relative;
                }
                pen += curve.end;
            }
            Command::EllipticalArcCurve(space, arc) => {
                if *space == CoordinateSpace::Absolute {
                    arc.end = arc.end - pen;
                    *space = CoordinateSpace::Relative;
                }
                pen += arc.end;
            }
            Command::ClosePath => pen = subpath_start,
        }
    }
}

/// Rewrite every command of `path` into absolute form.
pub fn to_absolute(path: &mut Path) {
    let mut pen = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    for command in &mut path.data {
        match command {
            Command::MoveTo(space, target) => {
                let absolute = resolve(*space, *target, pen);
                *target = absolute;
                *space = CoordinateSpace::Absolute;
                pen = absolute;
                subpath_start = absolute;
            }
            Command::LineTo(space, target)
            | Command::SmoothQuadraticBezierCurve(space, target) => {
                let absolute = resolve(*space, *target, pen);
                *target = absolute;
                *space = CoordinateSpace::Absolute;
                pen = absolute;
            }
            Command::HorizontalLineTo(space, x) => {
                if *space == CoordinateSpace::Relative {
                    *x += pen.x;
                    *space = CoordinateSpace::Absolute;
                }
                pen.x = *x;
            }
            Command::VerticalLineTo(space, y) => {
                if *space == CoordinateSpace::Relative {
                    *y += pen.y;
                    *space = CoordinateSpace::Absolute;
                }
                pen.y = *y;
            }
            Command::CubicBezierCurve(space, curve) => {
                if *space == CoordinateSpace::Relative {
                    curve.start_control += pen;
                    curve.end_control += pen;
                    curve.end += pen;
                    *space = CoordinateSpace::Absolute;
                }
                pen = curve.end;
            }
            Command::SmoothCubicBezierCurve(space, curve) => {
                if *space == CoordinateSpace::Relative {
                    curve.end_control += pen;
                    curve.end += pen;
                    *space = CoordinateSpace::Absolute;
                }
                pen = curve.end;
            }
            Command::QuadraticBezierCurve(space, curve) => {
                if *space == CoordinateSpace::Relative {
                    curve.control += pen;
                    curve.end += pen;
                    *space = CoordinateSpace::Absolute;
                }
                pen = curve.end;
            }
            Command::EllipticalArcCurve(space, arc) => {
                if *space == CoordinateSpace::Relative {
                    arc.end += pen;
                    *space = CoordinateSpace::Absolute;
                }
                pen = arc.end;
            }
            Command::ClosePath => pen = subpath_start,
        }
    }
}

/// Convert every path in the tree to relative form.
pub fn to_relative_paths(elements: &mut [Element]) {
    for element in elements {
        match element {
            Element::Path(path) => to_relative(path),
            Element::Group(group) => to_relative_paths(&mut group.elements),
            Element::ClipPath(clip) => to_relative_paths(&mut clip.elements),
            Element::Extra(extra) => to_relative_paths(&mut extra.elements),
        }
    }
}

/// Fold group transforms into descendant coordinates.
///
/// `root` is applied on top of everything; pass [`Affine::IDENTITY`] unless
/// the whole tree needs an extra transform (such as a viewport-origin
/// translation). Afterwards every group transform is the identity and no
/// path coordinate depends on an unbaked parent.
pub fn bake_transforms(elements: &mut [Element], root: Affine) {
    for element in elements {
        match element {
            Element::Path(path) => transform_path(path, root),
            Element::Group(group) => {
                let combined = root * group.transform;
                group.transform = Affine::IDENTITY;
                bake_transforms(&mut group.elements, combined);
            }
            Element::ClipPath(clip) => bake_transforms(&mut clip.elements, root),
            Element::Extra(extra) => bake_transforms(&mut extra.elements, root),
        }
    }
}

/// Apply `transform` to every coordinate of `path`, in place.
///
/// The path comes out in absolute form; run [`to_relative`] afterwards if
/// relative form is required.
pub fn transform_path(path: &mut Path, transform: Affine) {
    if transform == Affine::IDENTITY {
        return;
    }

    to_absolute(path);
    // Axis-aligned segments do not survive a rotation or shear; rewrite
    // them as full line segments before mapping coordinates.
    expand_axis_lines(path);

    for command in &mut path.data {
        match command {
            Command::MoveTo(_, target)
            | Command::LineTo(_, target)
            | Command::SmoothQuadraticBezierCurve(_, target) => {
                *target = map_point(transform, *target);
            }
            Command::HorizontalLineTo(..) | Command::VerticalLineTo(..) => {
                unreachable!("axis lines are expanded before mapping")
            }
            Command::CubicBezierCurve(_, curve) => {
                curve.start_control = map_point(transform, curve.start_control);
                curve.end_control = map_point(transform, curve.end_control);
                curve.end = map_point(transform, curve.end);
            }
            Command::SmoothCubicBezierCurve(_, curve) => {
                curve.end_control = map_point(transform, curve.end_control);
                curve.end = map_point(transform, curve.end);
            }
            Command::QuadraticBezierCurve(_, curve) => {
                curve.control = map_point(transform, curve.control);
                curve.end = map_point(transform, curve.end);
            }
            Command::EllipticalArcCurve(_, arc) => {
                arc.end = map_point(transform, arc.end);
                transform_arc(arc, transform);
            }
            Command::ClosePath => {}
        }
    }
}

#[inline]
fn resolve(space: CoordinateSpace, target: Point, pen: Point) -> Point {
    match space {
        CoordinateSpace::Absolute => target,
        CoordinateSpace::Relative => pen + target,
    }
}

/// Replace horizontal/vertical line commands with full line segments.
///
/// Requires the path to be in absolute form, since the replacement needs
/// the coordinate of the untouched axis.
fn expand_axis_lines(path: &mut Path) {
    let mut pen = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    for command in &mut path.data {
        match *command {
            Command::MoveTo(_, target) => {
                pen = target;
                subpath_start = target;
            }
            Command::LineTo(_, target) | Command::SmoothQuadraticBezierCurve(_, target) => {
                pen = target;
            }
            Command::HorizontalLineTo(space, x) => {
                let target = Point::new(x, pen.y);
                *command = Command::LineTo(space, target);
                pen = target;
            }
            Command::VerticalLineTo(space, y) => {
                let target = Point::new(pen.x, y);
                *command = Command::LineTo(space, target);
                pen = target;
            }
            Command::CubicBezierCurve(_, curve) => pen = curve.end,
            Command::SmoothCubicBezierCurve(_, curve) => pen = curve.end,
            Command::QuadraticBezierCurve(_, curve) => pen = curve.end,
            Command::EllipticalArcCurve(_, arc) => pen = arc.end,
            Command::ClosePath => pen = subpath_start,
        }
    }
}

/// Map the non-endpoint arc parameters through `transform`.
///
/// Radii pick up the per-axis scale, the ellipse axis picks up the
/// rotation, and a reflection inverts the sweep direction. A residual shear
/// has no arc-parameter representation; radii and axis angle assume an
/// orthogonal basis.
fn transform_arc(arc: &mut ArcCurve, transform: Affine) {
    let [a, b, c, d, _, _] = transform.as_coeffs();
    let scale_x = a.hypot(b);
    let scale_y = c.hypot(d);

    arc.radius_x = (f64::from(arc.radius_x) * scale_x) as f32;
    arc.radius_y = (f64::from(arc.radius_y) * scale_y) as f32;
    arc.angle += b.atan2(a).to_degrees() as f32;

    if a * d - b * c < 0.0 {
        arc.sweep = match arc.sweep {
            SweepDirection::Clockwise => SweepDirection::Anticlockwise,
            SweepDirection::Anticlockwise => SweepDirection::Clockwise,
        };
    }

    if (a * c + b * d).abs() > 1e-6 * scale_x * scale_y {
        tracing::warn!("skew transform applied to an arc segment; radii are approximate");
    }
}

#[inline]
fn map_point(transform: Affine, point: Point) -> Point {
    let mapped = transform * kurbo::Point::new(f64::from(point.x), f64::from(point.y));
    Point::new(mapped.x as f32, mapped.y as f32)
}
