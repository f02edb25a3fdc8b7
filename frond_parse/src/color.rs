// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color attribute parsing.

use frond_graphic::Color;

use crate::ParseError;

/// Parse an SVG paint value: `none`, `transparent`, `#RGB`, `#RRGGBB`,
/// `#RRGGBBAA`, or a basic named color.
pub fn parse_svg_color(raw: &str) -> Result<Color, ParseError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("transparent") {
        return Ok(Color::TRANSPARENT);
    }
    if let Some(hex) = raw.strip_prefix('#') {
        if !hex.is_ascii() {
            return Err(ParseError::Color(raw.to_string()));
        }
        return match hex.len() {
            3 => {
                let (r, g, b) = (nibble(hex, 0)?, nibble(hex, 1)?, nibble(hex, 2)?);
                Ok(Color::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Color::rgb(byte(hex, 0)?, byte(hex, 1)?, byte(hex, 2)?)),
            8 => Ok(Color::rgba(
                byte(hex, 0)?,
                byte(hex, 1)?,
                byte(hex, 2)?,
                byte(hex, 3)?,
            )),
            _ => Err(ParseError::Color(raw.to_string())),
        };
    }
    named(raw).ok_or_else(|| ParseError::Color(raw.to_string()))
}

/// Parse an Android color value: `#RGB`, `#ARGB`, `#RRGGBB`, or `#AARRGGBB`.
pub fn parse_drawable_color(raw: &str) -> Result<Color, ParseError> {
    let raw = raw.trim();
    let Some(hex) = raw.strip_prefix('#') else {
        return Err(ParseError::Color(raw.to_string()));
    };
    if !hex.is_ascii() {
        return Err(ParseError::Color(raw.to_string()));
    }
    match hex.len() {
        3 => {
            let (r, g, b) = (nibble(hex, 0)?, nibble(hex, 1)?, nibble(hex, 2)?);
            Ok(Color::rgb(r * 17, g * 17, b * 17))
        }
        4 => {
            let (a, r, g, b) = (
                nibble(hex, 0)?,
                nibble(hex, 1)?,
                nibble(hex, 2)?,
                nibble(hex, 3)?,
            );
            Ok(Color::rgba(r * 17, g * 17, b * 17, a * 17))
        }
        6 => Ok(Color::rgb(byte(hex, 0)?, byte(hex, 1)?, byte(hex, 2)?)),
        8 => Ok(Color::rgba(
            byte(hex, 1)?,
            byte(hex, 2)?,
            byte(hex, 3)?,
            byte(hex, 0)?,
        )),
        _ => Err(ParseError::Color(raw.to_string())),
    }
}

fn nibble(hex: &str, index: usize) -> Result<u8, ParseError> {
    u8::from_str_radix(&hex[index..index + 1], 16).map_err(|_| ParseError::Color(hex.to_string()))
}

fn byte(hex: &str, index: usize) -> Result<u8, ParseError> {
    u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16)
        .map_err(|_| ParseError::Color(hex.to_string()))
}

/// The CSS basic color keywords, plus the aliases browsers accept for them.
fn named(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::rgb(0, 0, 0),
        "silver" => Color::rgb(192, 192, 192),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "white" => Color::rgb(255, 255, 255),
        "maroon" => Color::rgb(128, 0, 0),
        "red" => Color::rgb(255, 0, 0),
        "purple" => Color::rgb(128, 0, 128),
        "fuchsia" | "magenta" => Color::rgb(255, 0, 255),
        "green" => Color::rgb(0, 128, 0),
        "lime" => Color::rgb(0, 255, 0),
        "olive" => Color::rgb(128, 128, 0),
        "yellow" => Color::rgb(255, 255, 0),
        "navy" => Color::rgb(0, 0, 128),
        "blue" => Color::rgb(0, 0, 255),
        "teal" => Color::rgb(0, 128, 128),
        "aqua" | "cyan" => Color::rgb(0, 255, 255),
        "orange" => Color::rgb(255, 165, 0),
        _ => return None,
    };
    Some(color)
}
