// Copyright 2026 the Frond Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path data parsing.
//!
//! SVG and Vector Drawable share one path-data grammar. The parser emits one
//! command per parameter record: repeated records after a single command
//! letter are broken out into separate commands here, and the implicit
//! move-then-line rule (`M 1 2 3 4` is a move followed by a line) is applied
//! at the same time.

use frond_graphic::{
    ArcCurve, ArcFlag, Command, CoordinateSpace, CubicCurve, Point, QuadraticCurve,
    SmoothCubicCurve, SweepDirection,
};

use crate::ParseError;

/// Parse a path-data string into a command sequence.
pub fn parse_path_data(data: &str) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();
    let mut cursor = Cursor::new(data);
    let mut current: Option<char> = None;

    loop {
        cursor.skip_separators();
        let Some(c) = cursor.peek() else {
            break;
        };

        if c.is_ascii_alphabetic() {
            cursor.bump();
            if c == 'Z' || c == 'z' {
                commands.push(Command::ClosePath);
                current = None;
                continue;
            }
            current = Some(c);
            continue;
        }

        let Some(letter) = current else {
            return Err(cursor.malformed());
        };
        let space = if letter.is_ascii_lowercase() {
            CoordinateSpace::Relative
        } else {
            CoordinateSpace::Absolute
        };

        match letter.to_ascii_lowercase() {
            'm' => {
                commands.push(Command::MoveTo(space, cursor.point()?));
                // Records after the first are implicit line commands.
                current = Some(if letter == 'M' { 'L' } else { 'l' });
            }
            'l' => commands.push(Command::LineTo(space, cursor.point()?)),
            'h' => commands.push(Command::HorizontalLineTo(space, cursor.number()?)),
            'v' => commands.push(Command::VerticalLineTo(space, cursor.number()?)),
            'c' => commands.push(Command::CubicBezierCurve(
                space,
                CubicCurve {
                    start_control: cursor.point()?,
                    end_control: cursor.point()?,
                    end: cursor.point()?,
                },
            )),
            's' => commands.push(Command::SmoothCubicBezierCurve(
                space,
                SmoothCubicCurve {
                    end_control: cursor.point()?,
                    end: cursor.point()?,
                },
            )),
            'q' => commands.push(Command::QuadraticBezierCurve(
                space,
                QuadraticCurve {
                    control: cursor.point()?,
                    end: cursor.point()?,
                },
            )),
            't' => commands.push(Command::SmoothQuadraticBezierCurve(space, cursor.point()?)),
            'a' => commands.push(Command::EllipticalArcCurve(
                space,
                ArcCurve {
                    radius_x: cursor.number()?,
                    radius_y: cursor.number()?,
                    angle: cursor.number()?,
                    arc: if cursor.flag()? {
                        ArcFlag::Large
                    } else {
                        ArcFlag::Small
                    },
                    sweep: if cursor.flag()? {
                        SweepDirection::Clockwise
                    } else {
                        SweepDirection::Anticlockwise
                    },
                    end: cursor.point()?,
                },
            )),
            _ => return Err(ParseError::PathData(letter.to_string())),
        }
    }

    Ok(commands)
}

/// Byte cursor over a path-data string.
#[derive(Debug)]
struct Cursor<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a str) -> Self {
        Self { data, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.data[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() && c != ',' {
                break;
            }
            self.bump();
        }
    }

    /// Parse one number. Numbers may run together (`1.5.5` is 1.5 then .5,
    /// `10-5` is 10 then -5), so this stops at the first character that
    /// cannot extend the current literal.
    fn number(&mut self) -> Result<f32, ParseError> {
        self.skip_separators();
        let start = self.pos;
        let mut seen_dot = false;
        let mut seen_exponent = false;

        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => self.bump(),
                '.' if !seen_dot && !seen_exponent => {
                    seen_dot = true;
                    self.bump();
                }
                'e' | 'E' if !seen_exponent => {
                    seen_exponent = true;
                    self.bump();
                    if matches!(self.peek(), Some('+' | '-')) {
                        self.bump();
                    }
                }
                _ => break,
            }
        }

        self.data[start..self.pos]
            .parse()
            .map_err(|_| self.malformed())
    }

    fn point(&mut self) -> Result<Point, ParseError> {
        Ok(Point::new(self.number()?, self.number()?))
    }

    /// Parse a single-character arc flag. Flags need no separator from the
    /// following number (`a1 1 0 01 5 5` is legal).
    fn flag(&mut self) -> Result<bool, ParseError> {
        self.skip_separators();
        match self.peek() {
            Some('0') => {
                self.bump();
                Ok(false)
            }
            Some('1') => {
                self.bump();
                Ok(true)
            }
            _ => Err(self.malformed()),
        }
    }

    fn malformed(&self) -> ParseError {
        let rest = &self.data[self.pos.min(self.data.len())..];
        let snippet: String = rest.chars().take(16).collect();
        ParseError::PathData(if snippet.is_empty() {
            "<end of data>".to_string()
        } else {
            snippet
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_records_break_out_into_commands() {
        let commands = parse_path_data("M1 2 3 4L5 6").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::MoveTo(CoordinateSpace::Absolute, Point::new(1.0, 2.0)),
                Command::LineTo(CoordinateSpace::Absolute, Point::new(3.0, 4.0)),
                Command::LineTo(CoordinateSpace::Absolute, Point::new(5.0, 6.0)),
            ]
        );
    }

    #[test]
    fn lowercase_move_repeats_as_relative_lines() {
        let commands = parse_path_data("m1 2 3 4").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::MoveTo(CoordinateSpace::Relative, Point::new(1.0, 2.0)),
                Command::LineTo(CoordinateSpace::Relative, Point::new(3.0, 4.0)),
            ]
        );
    }

    #[test]
    fn numbers_may_run_together() {
        let commands = parse_path_data("M1.5.5L10-5").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::MoveTo(CoordinateSpace::Absolute, Point::new(1.5, 0.5)),
                Command::LineTo(CoordinateSpace::Absolute, Point::new(10.0, -5.0)),
            ]
        );
    }

    #[test]
    fn arc_flags_need_no_separators() {
        let commands = parse_path_data("M0 0a25 25 -30 01 50 25").unwrap();
        let Command::EllipticalArcCurve(space, arc) = commands[1] else {
            panic!("arc expected");
        };
        assert_eq!(space, CoordinateSpace::Relative);
        assert_eq!((arc.radius_x, arc.radius_y), (25.0, 25.0));
        assert_eq!(arc.angle, -30.0);
        assert_eq!(arc.arc, ArcFlag::Small);
        assert_eq!(arc.sweep, SweepDirection::Clockwise);
        assert_eq!(arc.end, Point::new(50.0, 25.0));
    }

    #[test]
    fn close_path_may_be_followed_by_a_new_subpath() {
        let commands = parse_path_data("M0 0h4v4h-4zM6 0h2").unwrap();
        assert_eq!(commands.len(), 7);
        assert_eq!(commands[4], Command::ClosePath);
        assert_eq!(
            commands[5],
            Command::MoveTo(CoordinateSpace::Absolute, Point::new(6.0, 0.0)),
        );
    }

    #[test]
    fn exponents_parse() {
        let commands = parse_path_data("M1e1 2.5e-1").unwrap();
        assert_eq!(
            commands,
            vec![Command::MoveTo(
                CoordinateSpace::Absolute,
                Point::new(10.0, 0.25),
            )]
        );
    }

    #[test]
    fn leading_parameters_without_a_command_are_rejected() {
        assert!(parse_path_data("10 10 L5 5").is_err());
    }

    #[test]
    fn truncated_record_is_rejected() {
        assert!(parse_path_data("M1 2 C3 4 5").is_err());
    }
}
