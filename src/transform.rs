//! Transform chains: `translate(..) rotate(..) ...` folded into one 3×3
//! homogeneous matrix.

use std::fmt;
use std::ops::Mul;

use nalgebra::{Matrix3, Vector3};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{anychar, char, multispace0, multispace1},
    combinator::recognize,
    error::{Error as NomError, ParseError},
    multi::{many_till, separated_list1},
    number::complete::double,
    sequence::{delimited, tuple},
    Finish, IResult, Parser,
};

use crate::error::{Error, Result};
use crate::geom::{point, Point};

/// One operation of a transform chain. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AffineOp {
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    Rotate { angle: f64, center: Option<Point> },
    SkewX { angle: f64 },
    SkewY { angle: f64 },
    Matrix {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    },
}

fn translation(dx: f64, dy: f64) -> Matrix3<f64> {
    Matrix3::new(1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0)
}

impl AffineOp {
    pub fn matrix(&self) -> Transform {
        let m = match *self {
            AffineOp::Translate { dx, dy } => translation(dx, dy),
            AffineOp::Scale { sx, sy } => Matrix3::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0),
            AffineOp::Rotate { angle, center } => {
                // y points down, so the mathematical angle is negated
                let a = -angle.to_radians();
                let rotation =
                    Matrix3::new(a.cos(), a.sin(), 0.0, -a.sin(), a.cos(), 0.0, 0.0, 0.0, 1.0);
                match center {
                    Some(c) => translation(c.x, c.y) * rotation * translation(-c.x, -c.y),
                    None => rotation,
                }
            }
            AffineOp::SkewX { angle } => {
                Matrix3::new(1.0, angle.to_radians().tan(), 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
            }
            AffineOp::SkewY { angle } => {
                Matrix3::new(1.0, 0.0, 0.0, angle.to_radians().tan(), 1.0, 0.0, 0.0, 0.0, 1.0)
            }
            AffineOp::Matrix { a, b, c, d, e, f } => Matrix3::new(a, c, e, b, d, f, 0.0, 0.0, 1.0),
        };

        Transform(m)
    }
}

impl fmt::Display for AffineOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AffineOp::Translate { dx, dy } => write!(f, "translate({} {})", dx, dy),
            AffineOp::Scale { sx, sy } if sx == sy => write!(f, "scale({})", sx),
            AffineOp::Scale { sx, sy } => write!(f, "scale({} {})", sx, sy),
            AffineOp::Rotate {
                angle,
                center: None,
            } => write!(f, "rotate({})", angle),
            AffineOp::Rotate {
                angle,
                center: Some(c),
            } => write!(f, "rotate({} {} {})", angle, c.x, c.y),
            AffineOp::SkewX { angle } => write!(f, "skewX({})", angle),
            AffineOp::SkewY { angle } => write!(f, "skewY({})", angle),
            AffineOp::Matrix {
                a,
                b,
                c,
                d,
                e,
                f: tf,
            } => write!(f, "matrix({} {} {} {} {} {})", a, b, c, d, e, tf),
        }
    }
}

/// A 3×3 homogeneous affine matrix. The bottom row is always `[0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(Matrix3<f64>);

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform(self.0 * rhs.0)
    }
}

impl Transform {
    pub fn identity() -> Transform {
        Transform(Matrix3::identity())
    }

    /// Folds the chain left to right as `acc = acc · op`, so the first
    /// listed operation is the outermost one.
    pub fn from_ops(ops: &[AffineOp]) -> Transform {
        ops.iter()
            .fold(Transform::identity(), |acc, op| acc * op.matrix())
    }

    pub fn parse(chain: &str) -> Result<Transform> {
        Ok(Transform::from_ops(&parse(chain)?))
    }

    /// Identity when the element carries no transform.
    pub fn from_attribute(attribute: Option<&str>) -> Result<Transform> {
        match attribute {
            Some(chain) => Transform::parse(chain),
            None => Ok(Transform::identity()),
        }
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0 == Matrix3::identity()
    }

    /// `None` for singular matrices, e.g. a chain containing `scale(0)`.
    pub fn inverse(&self) -> Option<Transform> {
        let mut inverse = self.0.try_inverse()?;
        inverse[(2, 0)] = 0.0;
        inverse[(2, 1)] = 0.0;
        inverse[(2, 2)] = 1.0;
        Some(Transform(inverse))
    }

    pub fn apply_point(&self, p: Point) -> Point {
        let h = self.0 * Vector3::new(p.x, p.y, 1.0);
        point(h.x, h.y)
    }

    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.apply_point(*p)).collect()
    }
}

fn snd<T, U>(input: (U, T)) -> T {
    input.1
}

fn css_function<'a, F, O, E: ParseError<&'a str>>(
    name: &'a str,
    arg_parser: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: Parser<&'a str, O, E>,
{
    let mut parser = tag::<_, &str, E>(name)
        .and(multispace0)
        .and(delimited(char('('), arg_parser, char(')')))
        .map(snd);

    move |s| parser.parse(s)
}

fn argument_separator(input: &str) -> IResult<&str, &str> {
    alt((recognize(tuple((multispace0, char(','), multispace0))), multispace1))(input)
}

fn arguments(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        multispace0,
        separated_list1(argument_separator, double),
        multispace0,
    )(input)
}

fn call<'a>(
    name: &'static str,
) -> impl Parser<&'a str, (&'static str, Vec<f64>), NomError<&'a str>> {
    css_function::<_, _, NomError<&'a str>>(name, arguments).map(move |args| (name, args))
}

fn operation(input: &str) -> IResult<&str, (&'static str, Vec<f64>)> {
    alt((
        call("translate"),
        call("scale"),
        call("rotate"),
        call("skewX"),
        call("skewY"),
        call("matrix"),
    ))(input)
}

fn parse_operation(fragment: &str) -> Result<AffineOp> {
    let malformed = |reason: String| Error::MalformedTransform {
        fragment: fragment.to_string(),
        reason,
    };

    let (_, (_, (keyword, args))) = many_till(anychar, operation)(fragment)
        .finish()
        .map_err(|_| malformed("no recognized operation".to_string()))?;

    Ok(match (keyword, args.as_slice()) {
        ("translate", &[dx, dy]) => AffineOp::Translate { dx, dy },
        ("scale", &[s]) => AffineOp::Scale { sx: s, sy: s },
        ("scale", &[sx, sy]) => AffineOp::Scale { sx, sy },
        ("rotate", &[angle]) => AffineOp::Rotate {
            angle,
            center: None,
        },
        ("rotate", &[angle, cx, cy]) => AffineOp::Rotate {
            angle,
            center: Some(point(cx, cy)),
        },
        ("skewX", &[angle]) => AffineOp::SkewX { angle },
        ("skewY", &[angle]) => AffineOp::SkewY { angle },
        ("matrix", &[a, b, c, d, e, f]) => AffineOp::Matrix { a, b, c, d, e, f },
        (keyword, args) => {
            return Err(malformed(format!(
                "{} does not take {} argument(s)",
                keyword,
                args.len()
            )))
        }
    })
}

/// Splits a chain on `)` and parses each operation in textual order.
pub fn parse(chain: &str) -> Result<Vec<AffineOp>> {
    chain
        .split(')')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| parse_operation(&format!("{})", fragment)))
        .collect()
}

/// Puts `op` in front of an existing chain without expanding it.
pub fn prepend(existing: Option<&str>, op: &AffineOp) -> String {
    match existing.map(str::trim).filter(|chain| !chain.is_empty()) {
        Some(chain) => format!("{} {}", op, chain),
        None => op.to_string(),
    }
}
