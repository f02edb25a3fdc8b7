// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path command interpretation and CPU rasterization for vector artwork.
//!
//! This crate turns a normalized document tree into pixels:
//!
//! - [`interpret`] replays a path's relative command sequence against a
//!   pen-tracking [`kurbo::BezPath`] builder, handling curve-reflection
//!   state for smooth variants and arc-flag mapping.
//! - [`paint_style`] maps a path's paint attributes onto the backend's
//!   stroke, color, and fill-rule representation.
//! - [`resolve`] reconciles a document's viewport with its declared display
//!   size and the user's scale factor.
//! - [`render`] orchestrates the whole pipeline over a
//!   [`vello_cpu::RenderContext`] and hands back the finished pixmap.
//!
//! Everything runs synchronously on the calling thread; the render context
//! is owned exclusively for the duration of one render.

mod interpret;
mod pipeline;
mod style;
mod viewport;

pub use interpret::interpret;
pub use pipeline::{RenderOptions, render};
pub use style::{PaintStyle, fill_rule, paint_style};
pub use viewport::{Resolution, resolve};

use frond_graphic::AttributeError;
use thiserror::Error;

/// Failures that end a render with no output.
///
/// Every variant is a deterministic function of the input document, so none
/// of them are retried; they surface to the caller with enough context to
/// form a user-facing diagnostic.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A required dimension or viewport attribute is missing or malformed.
    #[error("{document} document: {source}")]
    Dimension {
        /// Which document variant was being resolved.
        document: &'static str,
        /// The underlying attribute failure.
        #[source]
        source: AttributeError,
    },
    /// A smooth curve command appeared with no preceding curve to reflect.
    ///
    /// Substituting a default control point here would silently mask
    /// malformed input, so the render is aborted instead.
    #[error("path `{path}`: smooth curve with no preceding curve to reflect")]
    DanglingSmoothCurve {
        /// Identifier of the offending path, or `<unnamed>`.
        path: String,
    },
    /// The resolved output surface is empty or larger than the backend
    /// supports.
    #[error("output surface {width}x{height} is not renderable")]
    Surface {
        /// Resolved width in pixels.
        width: i64,
        /// Resolved height in pixels.
        height: i64,
    },
}
