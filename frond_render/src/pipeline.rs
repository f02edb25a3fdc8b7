// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render pipeline.
//!
//! Owns the drawing surface for the duration of one render: resolves the
//! viewport, normalizes the tree in place, then walks it top-down issuing
//! stroke-then-fill draws per path. Later-drawn siblings paint over earlier
//! ones; a clip path restricts subsequently drawn siblings and ends with
//! the scope that declared it.

use frond_graphic::{Color, Document, Element, Path, Scale, normalize};
use kurbo::{Affine, Rect};
use vello_cpu::{Pixmap, RenderContext};

use crate::{RenderError, interpret, style, viewport};

/// Options the embedding layer resolves before rendering.
#[derive(Copy, Clone, Debug)]
pub struct RenderOptions {
    /// User zoom factor applied on top of the document's own scaling.
    pub scale: f32,
    /// Surface background color.
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: Color::TRANSPARENT,
        }
    }
}

/// Render a document to a pixmap.
///
/// The document is normalized in place first (the viewport origin and all
/// group transforms are baked into path coordinates, and every command is
/// rewritten to relative form); afterwards the tree is consumed read-only.
pub fn render(document: &mut Document, options: &RenderOptions) -> Result<Pixmap, RenderError> {
    let resolution = viewport::resolve(document, options.scale)?;
    tracing::debug!(
        width = resolution.width,
        height = resolution.height,
        scale = ?resolution.scale,
        "resolved output surface"
    );

    // Bake the viewport origin alongside the group transforms so the
    // interpreter sees fully local coordinates.
    let root = Affine::translate((
        -f64::from(resolution.origin.x),
        -f64::from(resolution.origin.y),
    ));
    normalize::bake_transforms(document.elements_mut(), root);
    normalize::to_relative_paths(document.elements_mut());

    let mut ctx = RenderContext::new(resolution.width, resolution.height);
    if options.background.alpha > 0 {
        ctx.set_paint(style::color(options.background));
        ctx.fill_rect(&Rect::new(
            0.0,
            0.0,
            f64::from(resolution.width),
            f64::from(resolution.height),
        ));
    }

    paint_elements(&mut ctx, document.elements(), resolution.scale)?;

    let mut pixmap = Pixmap::new(resolution.width, resolution.height);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap)
}

/// Paint a sibling scope in document order.
fn paint_elements(
    ctx: &mut RenderContext,
    elements: &[Element],
    scale: Scale,
) -> Result<(), RenderError> {
    let mut clip_layers = 0usize;

    for element in elements {
        match element {
            Element::Path(path) => paint_path(ctx, path, scale)?,
            Element::Group(group) => paint_elements(ctx, &group.elements, scale)?,
            Element::Extra(extra) => paint_elements(ctx, &extra.elements, scale)?,
            Element::ClipPath(clip) => {
                for path in clip.elements.iter().filter_map(|element| match element {
                    Element::Path(path) => Some(path),
                    _ => None,
                }) {
                    let (geometry, fill_rule) = interpret(path, scale)?;
                    ctx.set_fill_rule(fill_rule);
                    ctx.push_clip_layer(&geometry);
                    clip_layers += 1;
                }
            }
        }
    }

    // Clips end with the scope that declared them.
    for _ in 0..clip_layers {
        ctx.pop_layer();
    }
    Ok(())
}

fn paint_path(ctx: &mut RenderContext, path: &Path, scale: Scale) -> Result<(), RenderError> {
    let (geometry, fill_rule) = interpret(path, scale)?;
    let paint = style::paint_style(path);

    ctx.set_fill_rule(fill_rule);
    // Stroke first, fill on top. A zero-width or fully transparent stroke
    // draws nothing.
    if path.stroke_width > 0.0 && path.stroke.alpha > 0 {
        ctx.set_stroke(paint.stroke);
        ctx.set_paint(paint.stroke_color);
        ctx.stroke_path(&geometry);
    }
    ctx.set_paint(paint.fill_color);
    ctx.fill_path(&geometry);
    Ok(())
}
