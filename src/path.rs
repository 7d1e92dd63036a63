//! Path data (`d` attribute) tokenizing and anchor-point extraction.
//!
//! Only segment endpoints are reported. Control points and arc radii/flags
//! are consumed for arity but never sampled.

use nom::{
    character::complete::{anychar, char, multispace0},
    combinator::{opt, recognize, verify},
    multi::many0,
    number::complete::double,
    sequence::{pair, preceded, terminated, tuple},
    Finish, IResult,
};

use crate::error::{Error, Result};
use crate::geom::{point, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

pub type Parameters = Vec<f64>;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Move(Position, Parameters),
    Line(Position, Parameters),
    HorizontalLine(Position, Parameters),
    VerticalLine(Position, Parameters),
    QuadraticCurve(Position, Parameters),
    SmoothQuadraticCurve(Position, Parameters),
    CubicCurve(Position, Parameters),
    SmoothCubicCurve(Position, Parameters),
    EllipticalArc(Position, Parameters),
    Close,
}

impl Command {
    pub fn new(letter: char, parameters: Parameters) -> Result<Command> {
        let position = if letter.is_ascii_lowercase() {
            Position::Relative
        } else {
            Position::Absolute
        };

        let command = match letter.to_ascii_uppercase() {
            'M' => Command::Move(position, parameters),
            'L' => Command::Line(position, parameters),
            'H' => Command::HorizontalLine(position, parameters),
            'V' => Command::VerticalLine(position, parameters),
            'Q' => Command::QuadraticCurve(position, parameters),
            'T' => Command::SmoothQuadraticCurve(position, parameters),
            'C' => Command::CubicCurve(position, parameters),
            'S' => Command::SmoothCubicCurve(position, parameters),
            'A' => Command::EllipticalArc(position, parameters),
            'Z' if parameters.is_empty() => Command::Close,
            'Z' => {
                return Err(Error::MalformedPath {
                    reason: format!("`{}` takes no numbers, got {}", letter, parameters.len()),
                })
            }
            _ => {
                return Err(Error::MalformedPath {
                    reason: format!("unknown command `{}`", letter),
                })
            }
        };

        if let Some(arity) = command.arity() {
            let count = command.parameters().len();
            if count == 0 || count % arity != 0 {
                return Err(Error::MalformedPath {
                    reason: format!(
                        "`{}` takes groups of {} numbers, got {}",
                        letter, arity, count
                    ),
                });
            }
        }

        Ok(command)
    }

    /// Numbers consumed per repeated segment; `None` for closepath.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Command::Move(..) | Command::Line(..) | Command::SmoothQuadraticCurve(..) => Some(2),
            Command::HorizontalLine(..) | Command::VerticalLine(..) => Some(1),
            Command::QuadraticCurve(..) | Command::SmoothCubicCurve(..) => Some(4),
            Command::CubicCurve(..) => Some(6),
            Command::EllipticalArc(..) => Some(7),
            Command::Close => None,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Command::Move(position, _)
            | Command::Line(position, _)
            | Command::HorizontalLine(position, _)
            | Command::VerticalLine(position, _)
            | Command::QuadraticCurve(position, _)
            | Command::SmoothQuadraticCurve(position, _)
            | Command::CubicCurve(position, _)
            | Command::SmoothCubicCurve(position, _)
            | Command::EllipticalArc(position, _) => Some(*position),
            Command::Close => None,
        }
    }

    pub fn parameters(&self) -> &[f64] {
        match self {
            Command::Move(_, p)
            | Command::Line(_, p)
            | Command::HorizontalLine(_, p)
            | Command::VerticalLine(_, p)
            | Command::QuadraticCurve(_, p)
            | Command::SmoothQuadraticCurve(_, p)
            | Command::CubicCurve(_, p)
            | Command::SmoothCubicCurve(_, p)
            | Command::EllipticalArc(_, p) => p,
            Command::Close => &[],
        }
    }

    /// Endpoints of every segment group, absolute. Relative groups chain off
    /// the previously emitted endpoint, starting from `current`.
    pub fn endpoints(&self, current: Point) -> Vec<Point> {
        let arity = match self.arity() {
            Some(arity) => arity,
            None => return Vec::new(),
        };
        let relative = self.position() == Some(Position::Relative);

        let mut previous = current;
        let mut out = Vec::with_capacity(self.parameters().len() / arity);
        for group in self.parameters().chunks_exact(arity) {
            let next = match (self, relative) {
                (Command::HorizontalLine(..), false) => point(group[0], current.y),
                (Command::HorizontalLine(..), true) => point(previous.x + group[0], current.y),
                (Command::VerticalLine(..), false) => point(current.x, group[0]),
                (Command::VerticalLine(..), true) => point(current.x, previous.y + group[0]),
                (_, false) => point(group[arity - 2], group[arity - 1]),
                (_, true) => point(
                    previous.x + group[arity - 2],
                    previous.y + group[arity - 1],
                ),
            };
            out.push(next);
            previous = next;
        }
        out
    }
}

fn separator(input: &str) -> IResult<&str, &str> {
    recognize(tuple((multispace0, opt(char(',')), multispace0)))(input)
}

// `e`/`E` belong to exponents, never to commands.
fn command_letter(input: &str) -> IResult<&str, char> {
    verify(anychar, |c: &char| {
        c.is_ascii_alphabetic() && *c != 'e' && *c != 'E'
    })(input)
}

fn segment(input: &str) -> IResult<&str, (char, Vec<f64>)> {
    pair(
        preceded(separator, command_letter),
        many0(preceded(separator, double)),
    )(input)
}

fn excerpt(rest: &str) -> String {
    rest.trim().chars().take(16).collect()
}

pub fn parse(data: &str) -> Result<Vec<Command>> {
    let (rest, segments) = terminated(many0(segment), separator)(data)
        .finish()
        .map_err(|err| Error::MalformedPath {
            reason: format!("unreadable input at `{}`", excerpt(err.input)),
        })?;
    if !rest.is_empty() {
        return Err(Error::MalformedPath {
            reason: format!("unexpected input at `{}`", excerpt(rest)),
        });
    }

    segments
        .into_iter()
        .map(|(letter, parameters)| {
            tracing::trace!(command = %letter, numbers = parameters.len(), "path segment");
            Command::new(letter, parameters)
        })
        .collect()
}

/// Absolute anchor points visited by the path, in its own local frame.
/// Closepath contributes nothing and does not move the current point.
pub fn extract_points(data: &str) -> Result<Vec<Point>> {
    let mut current = point(0.0, 0.0);
    let mut points = Vec::new();

    for command in parse(data)? {
        let emitted = command.endpoints(current);
        if let Some(last) = emitted.last() {
            current = *last;
        }
        points.extend(emitted);
    }

    Ok(points)
}
