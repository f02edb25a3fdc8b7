// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform attribute parsing.

use std::collections::HashMap;

use kurbo::Affine;

use crate::ParseError;

/// Parse an SVG `transform` attribute: a whitespace/comma separated list of
/// `translate`, `scale`, `rotate`, `skewX`, `skewY`, and `matrix` functions,
/// composed left to right.
pub fn parse_transform_list(raw: &str) -> Result<Affine, ParseError> {
    let mut result = Affine::IDENTITY;
    let mut rest = raw.trim();

    while !rest.is_empty() {
        let open = rest
            .find('(')
            .ok_or_else(|| ParseError::Transform(raw.to_string()))?;
        let close = rest[open..]
            .find(')')
            .map(|i| open + i)
            .ok_or_else(|| ParseError::Transform(raw.to_string()))?;

        let name = rest[..open].trim();
        let args: Vec<f64> = rest[open + 1..close]
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| ParseError::Transform(raw.to_string()))?;

        result *= function(name, &args).ok_or_else(|| ParseError::Transform(raw.to_string()))?;
        rest = rest[close + 1..].trim_start_matches(|c: char| c == ',' || c.is_whitespace());
    }

    Ok(result)
}

fn function(name: &str, args: &[f64]) -> Option<Affine> {
    let transform = match (name, args) {
        ("translate", [tx]) => Affine::translate((*tx, 0.0)),
        ("translate", [tx, ty]) => Affine::translate((*tx, *ty)),
        ("scale", [s]) => Affine::scale(*s),
        ("scale", [sx, sy]) => Affine::scale_non_uniform(*sx, *sy),
        ("rotate", [degrees]) => Affine::rotate(degrees.to_radians()),
        ("rotate", [degrees, cx, cy]) => {
            Affine::translate((*cx, *cy))
                * Affine::rotate(degrees.to_radians())
                * Affine::translate((-cx, -cy))
        }
        ("skewX", [degrees]) => Affine::skew(degrees.to_radians().tan(), 0.0),
        ("skewY", [degrees]) => Affine::skew(0.0, degrees.to_radians().tan()),
        ("matrix", [a, b, c, d, e, f]) => Affine::new([*a, *b, *c, *d, *e, *f]),
        _ => return None,
    };
    Some(transform)
}

/// Build the transform of a Vector Drawable `<group>`: scale, then
/// rotation, both about the pivot, then translation.
pub fn drawable_group_transform(attributes: &HashMap<String, String>) -> Affine {
    let get = |name: &str, default: f64| {
        attributes
            .get(name)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(default)
    };

    let rotation = get("android:rotation", 0.0);
    let pivot_x = get("android:pivotX", 0.0);
    let pivot_y = get("android:pivotY", 0.0);
    let scale_x = get("android:scaleX", 1.0);
    let scale_y = get("android:scaleY", 1.0);
    let translate_x = get("android:translateX", 0.0);
    let translate_y = get("android:translateY", 0.0);

    Affine::translate((pivot_x + translate_x, pivot_y + translate_y))
        * Affine::rotate(rotation.to_radians())
        * Affine::scale_non_uniform(scale_x, scale_y)
        * Affine::translate((-pivot_x, -pivot_y))
}
