//! Token conversions shared by commands and shape constructors.

use scrawl_engine::coords::Point;
use scrawl_engine::paint::Color;

use crate::InterpError;

/// Parses a finite floating-point number.
pub(crate) fn number(token: &str) -> Result<f32, InterpError> {
    match token.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InterpError::Parse(token.to_string())),
    }
}

/// Parses a signed integer.
pub(crate) fn integer(token: &str) -> Result<i32, InterpError> {
    token.parse::<i32>().map_err(|_| InterpError::Parse(token.to_string()))
}

/// Parses `x y x y ...` into points. `tokens` must have even length.
pub(crate) fn points(tokens: &[String]) -> Result<Vec<Point>, InterpError> {
    tokens
        .chunks_exact(2)
        .map(|pair| -> Result<Point, InterpError> { Ok(Point::new(number(&pair[0])?, number(&pair[1])?)) })
        .collect()
}

pub(crate) fn color(token: &str) -> Result<Color, InterpError> {
    token
        .parse::<Color>()
        .map_err(|e| InterpError::InvalidArgument(e.to_string()))
}
