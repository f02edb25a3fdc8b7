// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element tree: drawable paths and their containers.

use kurbo::Affine;

use crate::{Color, Command};

/// Interior test used when filling a path.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FillRule {
    /// A point is inside if its winding number is non-zero.
    NonZero,
    /// A point is inside if a ray from it crosses the path an odd number of
    /// times.
    EvenOdd,
}

/// Stroke end-cap shape.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineCap {
    /// Flat cap ending exactly at the endpoint.
    Butt,
    /// Semicircular cap centered on the endpoint.
    Round,
    /// Square cap extending half the stroke width past the endpoint.
    Square,
}

/// Stroke join shape.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineJoin {
    /// Sharp corner, subject to the miter limit.
    Miter,
    /// Circular arc corner.
    Round,
    /// Flattened corner.
    Bevel,
    /// Elliptical-arc corner (SVG 2).
    Arcs,
    /// Miter clipped at the miter limit instead of falling back to bevel
    /// (SVG 2).
    MiterClip,
}

/// A drawable path: an ordered command sequence plus its paint attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    /// Identifier carried from markup, for diagnostics.
    pub id: Option<String>,
    /// The command sequence.
    pub data: Vec<Command>,
    /// Fill color.
    pub fill: Color,
    /// Interior test used when filling.
    pub fill_rule: FillRule,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width in viewport units.
    pub stroke_width: f32,
    /// Ratio of miter length to stroke width beyond which a miter join
    /// falls back to bevel.
    pub stroke_miter_limit: f32,
    /// Stroke end-cap shape.
    pub stroke_line_cap: LineCap,
    /// Stroke join shape.
    pub stroke_line_join: LineJoin,
}

/// A container baking an affine transform into its descendants.
#[derive(Clone, Debug)]
pub struct Group {
    /// Transform applied to every descendant coordinate.
    pub transform: Affine,
    /// Child elements, exclusively owned.
    pub elements: Vec<Element>,
}

/// A container whose path children define a clip region for subsequently
/// drawn siblings in the enclosing scope.
#[derive(Clone, Debug)]
pub struct ClipPath {
    /// Child elements; only paths contribute to the clip region.
    pub elements: Vec<Element>,
}

/// A pass-through container for elements the model does not interpret.
///
/// Its children are still traversed and drawn.
#[derive(Clone, Debug)]
pub struct Extra {
    /// The unrecognized element name, as written in markup.
    pub name: String,
    /// Child elements.
    pub elements: Vec<Element>,
}

/// One node of the element tree.
///
/// Containers own their children exclusively; the tree is acyclic by
/// construction and traversed top-down.
#[derive(Clone, Debug)]
pub enum Element {
    /// A drawable leaf.
    Path(Path),
    /// A transform container.
    Group(Group),
    /// A clip-defining container.
    ClipPath(ClipPath),
    /// A pass-through container.
    Extra(Extra),
}
