// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render vector artwork (SVG & Android Vector Drawable) to the terminal.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::Parser;
use frond_graphic::Color;
use frond_render::RenderOptions;
use tracing_subscriber::EnvFilter;

mod terminal;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the artwork to display.
    file: PathBuf,

    /// Scale factor applied on top of the document's declared size.
    #[arg(short, long, default_value_t = 1.0)]
    scale: f32,

    /// Background color in hexadecimal RGBA, e.g. 0xFF0000FF (red).
    #[arg(long, value_name = "RGBA")]
    background_color: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if !(args.scale > 0.0 && args.scale.is_finite()) {
        bail!("{} is not a positive scale factor", args.scale);
    }

    let background = match &args.background_color {
        Some(raw) => parse_background(raw).with_context(|| {
            format!("unable to parse {raw} as a hexadecimal RGBA color, e.g. 0xFF0000FF (red)")
        })?,
        None => Color::TRANSPARENT,
    };

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("unable to load image {}", args.file.display()))?;
    let mut document = frond_parse::parse_document(&text)
        .with_context(|| format!("unable to parse {}", args.file.display()))?;

    let options = RenderOptions {
        scale: args.scale,
        background,
    };
    let pixmap = frond_render::render(&mut document, &options)?;

    let png = encode_png(pixmap).context("unable to encode image data")?;
    terminal::transmit_png(&mut io::stdout().lock(), &png)?;
    Ok(())
}

/// Parse an `RRGGBBAA` background color, with an optional `0x` or `#`
/// prefix.
fn parse_background(raw: &str) -> anyhow::Result<Color> {
    let hex = raw
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches('#');
    if hex.len() != 8 || !hex.is_ascii() {
        bail!("expected 8 hexadecimal digits");
    }
    let channel = |index: usize| {
        u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).context("invalid hexadecimal digit")
    };
    Ok(Color::rgba(channel(0)?, channel(1)?, channel(2)?, channel(3)?))
}

/// Encode the rendered pixmap as an RGBA8 PNG.
fn encode_png(mut pixmap: vello_cpu::Pixmap) -> anyhow::Result<Vec<u8>> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let mut data = Vec::with_capacity(usize::from(width) * usize::from(height) * 4);
    for pixel in pixmap.take_unpremultiplied() {
        data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
    }

    let mut bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut bytes, u32::from(width), u32::from(height));
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(bytes)
}
