use crate::Scalar;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Point coordinate.
///
/// # Examples
/// ```
/// use crowd_mesh_core::prelude::*;
///
/// let a = Coord::new(0.0, 0.0);
/// let b = Coord::new(3.0, 4.0);
/// assert_eq!(a.distance(b), 5.0);
/// assert_eq!((b - a).sqr_magnitude(), 25.0);
/// assert_eq!(Coord::new(1.0, 0.0).cross(Coord::new(0.0, 1.0)), 1.0);
/// assert_eq!(Coord::new(1.0, 0.0).dot(Coord::new(-1.0, 0.0)), -1.0);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// X value.
    pub x: Scalar,
    /// Y value.
    pub y: Scalar,
}

impl Coord {
    /// Create new point coordinate.
    ///
    /// # Arguments
    /// * `x` - X value.
    /// * `y` - Y value.
    #[inline]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// Return squared length of the vector.
    #[inline]
    pub fn sqr_magnitude(self) -> Scalar {
        self.x * self.x + self.y * self.y
    }

    /// Return length of the vector.
    #[inline]
    pub fn magnitude(self) -> Scalar {
        self.x.hypot(self.y)
    }

    /// Return euclidean distance to other point.
    ///
    /// # Arguments
    /// * `other` - Other point.
    #[inline]
    pub fn distance(self, other: Self) -> Scalar {
        (other - self).magnitude()
    }

    /// Returns dot product.
    ///
    /// # Arguments
    /// * `other` - Other vector.
    #[inline]
    pub fn dot(self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y
    }

    /// Returns z component of the 3D cross product of two planar vectors.
    ///
    /// ```plain
    ///  other
    ///    ^
    ///    |      positive when other is counter-clockwise from self
    ///    *---> self
    /// ```
    /// # Arguments
    /// * `other` - Other vector.
    #[inline]
    pub fn cross(self, other: Self) -> Scalar {
        self.x * other.y - self.y * other.x
    }

    /// Return point rotated around `center` by `degrees` (counter-clockwise in a y-up frame,
    /// clockwise on screen where y points down).
    ///
    /// # Arguments
    /// * `center` - Pivot point.
    /// * `degrees` - Rotation angle in degrees.
    pub fn rotated_around(self, center: Self, degrees: Scalar) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let d = self - center;
        Self {
            x: center.x + d.x * cos - d.y * sin,
            y: center.y + d.x * sin + d.y * cos,
        }
    }

    /// Return point interpolated between `self` and `other`.
    ///
    /// # Arguments
    /// * `other` - Target point.
    /// * `factor` - Interpolation factor, 0 gives `self` and 1 gives `other`.
    #[inline]
    pub fn lerp(self, other: Self, factor: Scalar) -> Self {
        self + (other - self) * factor
    }
}

impl From<(Scalar, Scalar)> for Coord {
    fn from((x, y): (Scalar, Scalar)) -> Self {
        Self { x, y }
    }
}

impl From<[Scalar; 2]> for Coord {
    fn from([x, y]: [Scalar; 2]) -> Self {
        Self { x, y }
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<Scalar> for Coord {
    type Output = Self;

    fn mul(self, other: Scalar) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl Div<Scalar> for Coord {
    type Output = Self;

    fn div(self, other: Scalar) -> Self {
        Self {
            x: self.x / other,
            y: self.y / other,
        }
    }
}

impl Neg for Coord {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_quarter_turn() {
        let p = Coord::new(2.0, 1.0).rotated_around(Coord::new(1.0, 1.0), 90.0);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp() {
        let a = Coord::new(0.0, 10.0);
        let b = Coord::new(10.0, 0.0);
        assert_eq!(a.lerp(b, 0.5), Coord::new(5.0, 5.0));
        assert_eq!(a.lerp(b, 0.0), a);
    }
}
