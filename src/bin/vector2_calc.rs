//! Line based calculator over [`Vector2`].
//!
//! Each stdin line is `x y` optionally followed by a command:
//! `mag`, `sqrmag`, `norm`, `int`, `swap`, `rot <deg>`, `angle <x> <y>`,
//! `dot <x> <y>`, `dist <x> <y>` or `lerp <x> <y> <t>`.
//!
//! ```text
//! $ echo "1 0 rot 90" | vector2_calc
//! (0, 1)
//! ```

use std::fmt::Display;

use thiserror::Error;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vector2::{ParseVector2Error, Vector2};

#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Vector(#[from] ParseVector2Error),
    #[error("invalid number {0:?}")]
    Number(String),
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

fn scalar<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<f32, CommandError> {
    let token = tokens
        .next()
        .ok_or(CommandError::MissingArgument(command))?;
    token
        .parse()
        .map_err(|_| CommandError::Number(token.to_owned()))
}

fn evaluate(line: &str) -> Result<Box<dyn Display>, CommandError> {
    let mut tokens = line.split_whitespace();
    let mut v = Vector2::read_tokens(&mut tokens)?;

    let Some(command) = tokens.next() else {
        return Ok(Box::new(format!("{} |{}|", v, v.magnitude())));
    };
    let result: Box<dyn Display> = match command {
        "mag" => Box::new(v.magnitude()),
        "sqrmag" => Box::new(v.sqr_magnitude()),
        "norm" => Box::new(v.normalize()),
        "int" => Box::new(v.int()),
        "swap" => {
            v.swap_axis();
            Box::new(v)
        }
        "rot" => Box::new(v.rotate_deg(scalar(&mut tokens, "rot")?)),
        "angle" => Box::new(v.signed_angle_deg(Vector2::read_tokens(&mut tokens)?)),
        "dot" => Box::new(v.dot(Vector2::read_tokens(&mut tokens)?)),
        "dist" => Box::new(v.distance(Vector2::read_tokens(&mut tokens)?)),
        "lerp" => {
            let to = Vector2::read_tokens(&mut tokens)?;
            v.lerp(to, scalar(&mut tokens, "lerp")?);
            Box::new(v)
        }
        other => return Err(CommandError::Unknown(other.to_owned())),
    };
    match tokens.next() {
        Some(token) => Err(CommandError::TrailingInput(token.to_owned())),
        None => Ok(result),
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut lines = BufReader::new(stdin()).lines();
    let mut evaluated = 0usize;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate(&line) {
            Ok(result) => {
                println!("{}", result);
                evaluated += 1;
            }
            Err(e) => warn!("skipping {:?}: {}", line, e),
        }
    }
    info!("evaluated {} lines", evaluated);
    Ok(())
}
