// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document model for scalable vector artwork.
//!
//! This crate defines the plain-old-data representation shared by the rest
//! of the workspace: geometry value types, the closed set of path drawing
//! commands, the element tree (paths, groups, clip paths, pass-through
//! containers), and the concrete document variants with their raw attribute
//! maps and typed dimension accessors.
//!
//! It also hosts the [`normalize`] passes that rewrite a parsed tree into
//! the form the renderer requires: group transforms baked into descendant
//! coordinates and every path command expressed relative to the pen.
//!
//! Everything here is constructed once by the parser, normalized once, and
//! then consumed read-only; nothing in the model is shared or aliased.

mod color;
mod command;
mod document;
mod element;
mod geometry;
pub mod normalize;

pub use color::Color;
pub use command::{
    ArcCurve, ArcFlag, Command, CoordinateSpace, CubicCurve, QuadraticCurve, SmoothCubicCurve,
    SweepDirection,
};
pub use document::{AttributeError, Document, Svg, VectorDrawable, ViewBox};
pub use element::{ClipPath, Element, Extra, FillRule, Group, LineCap, LineJoin, Path};
pub use geometry::{Point, Scale};
