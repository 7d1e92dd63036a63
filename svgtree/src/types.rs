use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, multispace0, multispace1},
    combinator::recognize,
    multi::separated_list1,
    number::complete::double,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Parses `min-x min-y width height`, comma or whitespace separated.
    pub fn parse(raw: &str) -> Option<ViewBox> {
        match number_list(raw).ok()? {
            (rest, values) if rest.trim().is_empty() && values.len() == 4 => Some(ViewBox {
                x: values[0],
                y: values[1],
                width: values[2],
                height: values[3],
            }),
            _ => None,
        }
    }
}

/// A number with an optional unit suffix, e.g. `210mm` or `100`.
#[derive(Debug, Clone, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Option<String>,
}

impl Length {
    pub fn parse(raw: &str) -> Option<Length> {
        let (rest, (value, unit)) = length(raw).ok()?;
        if !rest.is_empty() {
            return None;
        }

        Some(Length {
            value,
            unit: if unit.is_empty() {
                None
            } else {
                Some(unit.to_string())
            },
        })
    }
}

fn separator(input: &str) -> IResult<&str, &str> {
    alt((recognize(tuple((multispace0, char(','), multispace0))), multispace1))(input)
}

fn length(input: &str) -> IResult<&str, (f64, &str)> {
    let suffix = take_while(|c: char| c.is_ascii_alphabetic() || c == '%');
    terminated(pair(preceded(multispace0, double), suffix), multispace0)(input)
}

fn number_list(input: &str) -> IResult<&str, Vec<f64>> {
    preceded(multispace0, separated_list1(separator, double))(input)
}

/// First entry of a coordinate list such as a text element's `x="10 12 14"`.
pub(crate) fn first_number(raw: &str) -> Option<f64> {
    let (_, values) = number_list(raw).ok()?;
    values.first().copied()
}
