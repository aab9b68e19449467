//! Text form of [`Vector2`].
//!
//! Output is `(x, y)`. Input is two whitespace separated floats, x then y, without
//! parentheses or comma. The two formats are not symmetric: `"(1, 2)"` does not
//! parse back.
//!
//! Each token goes through `f32`'s `FromStr` as a whole. `inf`, `infinity` and
//! `NaN` are accepted. A token with a numeric prefix such as `1.5abc` is rejected
//! whole, it is not read up to the first non-numeric character with the rest
//! left for the next read.

use std::{fmt, num::ParseFloatError, str::FromStr};

use thiserror::Error;
use tracing::debug;

use super::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVector2Error {
    #[error("missing {axis} component")]
    MissingComponent { axis: Axis },
    #[error("invalid {axis} component {token:?}: {source}")]
    InvalidComponent {
        axis: Axis,
        token: String,
        source: ParseFloatError,
    },
    #[error("unexpected trailing input {token:?}")]
    TrailingInput { token: String },
}

fn read_component<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    axis: Axis,
) -> Result<f32, ParseVector2Error> {
    let token = tokens
        .next()
        .ok_or(ParseVector2Error::MissingComponent { axis })?;
    token
        .parse()
        .map_err(|source| ParseVector2Error::InvalidComponent {
            axis,
            token: token.to_owned(),
            source,
        })
}

impl Vector2 {
    /// Reads x then y from the next two tokens, leaving the rest of `tokens` untouched.
    ///
    /// ```
    /// use vector2::Vector2;
    ///
    /// let mut tokens = "1 2 3.5 -4".split_whitespace();
    /// assert_eq!(Vector2::read_tokens(&mut tokens), Ok(Vector2::new(1., 2.)));
    /// assert_eq!(Vector2::read_tokens(&mut tokens), Ok(Vector2::new(3.5, -4.)));
    /// ```
    pub fn read_tokens<'a>(
        tokens: &mut impl Iterator<Item = &'a str>,
    ) -> Result<Self, ParseVector2Error> {
        let x = read_component(tokens, Axis::X)?;
        let y = read_component(tokens, Axis::Y)?;
        Ok(Self::new(x, y))
    }
}

impl FromStr for Vector2 {
    type Err = ParseVector2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let parsed = Self::read_tokens(&mut tokens).and_then(|v| match tokens.next() {
            Some(token) => Err(ParseVector2Error::TrailingInput {
                token: token.to_owned(),
            }),
            None => Ok(v),
        });
        if let Err(e) = &parsed {
            debug!("couldn't parse {:?} as a vector: {}", s, e);
        }
        parsed
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
