#![deny(clippy::unwrap_used)]
//! A 2D single precision vector value type.
//!
//! ```
//! use vector2::Vector2;
//!
//! let v = Vector2::new(3., 4.);
//! assert_eq!(v.magnitude(), 5.);
//! assert_eq!(Vector2::RIGHT.rotate_deg(90.), Vector2::UP);
//! assert_eq!(v.to_string(), "(3, 4)");
//! assert_eq!("3 4".parse::<Vector2>(), Ok(v));
//! ```
pub mod math;

pub use math::{Axis, ParseVector2Error, Vector2, SNAP_EPSILON};
