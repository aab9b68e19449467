use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::SNAP_EPSILON;

/// A 2D vector with single precision coordinates.
///
/// Equality is exact component comparison, apply your own tolerance if needed.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0., 0.);
    pub const RIGHT: Self = Self::new(1., 0.);
    pub const LEFT: Self = Self::new(-1., 0.);
    pub const UP: Self = Self::new(0., 1.);
    pub const DOWN: Self = Self::new(0., -1.);
    pub const ONE: Self = Self::new(1., 1.);
    pub const POSITIVE_INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY);
    pub const NEGATIVE_INFINITY: Self = Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// both coordinates set to `v`
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Exchanges x and y in place.
    pub fn swap_axis(&mut self) {
        std::mem::swap(&mut self.x, &mut self.y);
    }

    pub fn swapped(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Truncates each coordinate toward zero, like an `as i32` cast.
    ///
    /// NaN becomes 0 and out of range values saturate at the `i32` bounds.
    pub fn int(&self) -> Self {
        Self::new(self.x as i32 as f32, self.y as i32 as f32)
    }

    pub fn distance(&self, other: Self) -> f32 {
        (*self - other).magnitude()
    }

    /// Squares are summed in `f64` so finite inputs don't overflow or underflow.
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude_f64().sqrt() as f32
    }

    pub fn sqr_magnitude(&self) -> f32 {
        self.sqr_magnitude_f64() as f32
    }

    fn sqr_magnitude_f64(&self) -> f64 {
        (self.x as f64).powi(2) + (self.y as f64).powi(2)
    }

    /// Divides by the magnitude without any guard: the zero vector gives NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Angle in radians from `self` to `other`, counterclockwise positive, in (-π, π].
    pub fn signed_angle(&self, other: Self) -> f32 {
        self.cross(other).atan2(self.dot(other))
    }

    pub fn signed_angle_deg(&self, other: Self) -> f32 {
        self.signed_angle(other).to_degrees()
    }

    /// Rotates counterclockwise by `angle` radians.
    ///
    /// Components below [`SNAP_EPSILON`] in absolute value are snapped to 0, so
    /// `Vector2::RIGHT.rotate_deg(90.)` is exactly `Vector2::UP`.
    pub fn rotate(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut rotated = Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos);

        if (rotated.x.abs() as f64) < SNAP_EPSILON {
            rotated.x = 0.;
        }
        if (rotated.y.abs() as f64) < SNAP_EPSILON {
            rotated.y = 0.;
        }

        rotated
    }

    pub fn rotate_deg(&self, angle: f32) -> Self {
        self.rotate(angle.to_radians())
    }

    /// Rotates around `pivot` by `angle` radians.
    pub fn rotate_around(&self, pivot: Self, angle: f32) -> Self {
        pivot + (*self - pivot).rotate(angle)
    }

    pub fn rotate_around_deg(&self, pivot: Self, angle: f32) -> Self {
        self.rotate_around(pivot, angle.to_radians())
    }

    /// Moves `self` a fraction `t` of the way to `to`.
    ///
    /// Closer than [`SNAP_EPSILON`] it lands exactly on `to`. `t` is not clamped,
    /// values outside [0, 1] extrapolate.
    pub fn lerp(&mut self, to: Self, t: f32) {
        if (*self - to).sqr_magnitude_f64().sqrt() < SNAP_EPSILON {
            *self = to;
        } else {
            self.x += (to.x - self.x) * t;
            self.y += (to.y - self.y) * t;
        }
    }

    pub fn lerped(mut self, to: Self, t: f32) -> Self {
        self.lerp(to, t);
        self
    }
}

impl From<f32> for Vector2 {
    fn from(v: f32) -> Self {
        Self::splat(v)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}
