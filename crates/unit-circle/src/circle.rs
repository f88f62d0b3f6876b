//! Circle group over a prime field
//!
//! The circle curve: x² + y² = 1 mod p
//!
//! Points multiply like unit complex numbers. The group has order p - 1
//! when -1 is a square mod p (p ≡ 1 mod 4) and p + 1 otherwise, and is
//! cyclic in both cases.

use core::fmt;

use crate::field::{FieldElement, PrimeField};

/// A point on the circle x² + y² = 1
///
/// Points do not carry their modulus; they are only meaningful together
/// with the [`CircleGroup`] that produced them. Ordering is lexicographic
/// by `(x, y)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CirclePoint {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl CirclePoint {
    /// Coordinates as plain integers
    #[inline]
    pub const fn coords(self) -> (u32, u32) {
        (self.x.value(), self.y.value())
    }
}

impl fmt::Debug for CirclePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CirclePoint({}, {})", self.x, self.y)
    }
}

impl fmt::Display for CirclePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The group law on circle points mod p
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleGroup {
    field: PrimeField,
}

impl CircleGroup {
    pub const fn new(field: PrimeField) -> Self {
        Self { field }
    }

    #[inline]
    pub const fn field(self) -> PrimeField {
        self.field
    }

    /// The identity element (1 mod p, 0)
    #[inline]
    pub const fn identity(self) -> CirclePoint {
        CirclePoint {
            x: self.field.one(),
            y: self.field.zero(),
        }
    }

    /// Create a point from raw coordinates, verifying it's on the curve
    pub fn point(self, x: u64, y: u64) -> Option<CirclePoint> {
        let point = CirclePoint {
            x: self.field.element(x),
            y: self.field.element(y),
        };
        self.is_on_circle(point).then_some(point)
    }

    /// Check x² + y² = 1
    #[inline]
    pub fn is_on_circle(self, a: CirclePoint) -> bool {
        let f = self.field;
        f.add(f.square(a.x), f.square(a.y)) == f.one()
    }

    /// Complex multiplication on the unit circle
    /// (x1, y1) · (x2, y2) = (x1*x2 - y1*y2, x1*y2 + x2*y1)
    #[inline]
    pub fn multiply(self, a: CirclePoint, b: CirclePoint) -> CirclePoint {
        let f = self.field;
        CirclePoint {
            x: f.sub(f.mul(a.x, b.x), f.mul(a.y, b.y)),
            y: f.add(f.mul(a.x, b.y), f.mul(b.x, a.y)),
        }
    }

    /// Inverse in the circle group: (x, y)⁻¹ = (x, -y)
    #[inline]
    pub fn inverse(self, a: CirclePoint) -> CirclePoint {
        CirclePoint {
            x: a.x,
            y: self.field.neg(a.y),
        }
    }

    /// Square a point: (x, y)² = (2x² - 1, 2xy)
    #[inline]
    pub fn square(self, a: CirclePoint) -> CirclePoint {
        let f = self.field;
        let two = f.element(2);
        CirclePoint {
            x: f.sub(f.mul(two, f.square(a.x)), f.one()),
            y: f.mul(two, f.mul(a.x, a.y)),
        }
    }

    /// `a^k` by square-and-multiply; `a^0` is the identity
    pub fn pow(self, a: CirclePoint, mut k: u64) -> CirclePoint {
        let mut result = self.identity();
        let mut base = a;

        while k > 0 {
            if k & 1 == 1 {
                result = self.multiply(result, base);
            }
            base = self.square(base);
            k >>= 1;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(p: u32) -> CircleGroup {
        CircleGroup::new(PrimeField::new(p).unwrap())
    }

    #[test]
    fn test_identity() {
        let g = group(7);
        let id = g.identity();
        assert!(g.is_on_circle(id));
        assert_eq!(id.coords(), (1, 0));
    }

    #[test]
    fn test_checked_point() {
        let g = group(7);
        assert_eq!(g.point(2, 2).map(CirclePoint::coords), Some((2, 2)));
        // Coordinates are reduced before the curve check
        assert_eq!(g.point(8, 7).map(CirclePoint::coords), Some((1, 0)));
        assert!(g.point(1, 1).is_none());
    }

    #[test]
    fn test_multiply_by_identity() {
        let g = group(7);
        let a = g.point(2, 5).unwrap();
        assert_eq!(g.multiply(a, g.identity()), a);
        assert_eq!(g.multiply(g.identity(), a), a);
    }

    #[test]
    fn test_inverse() {
        let g = group(7);
        let a = g.point(5, 2).unwrap();
        let inv = g.inverse(a);
        assert!(g.is_on_circle(inv));
        assert_eq!(g.multiply(a, inv), g.identity());
    }

    #[test]
    fn test_square_equals_multiply() {
        let g = group(13);
        for (x, y) in [(0, 1), (2, 6), (6, 2), (12, 0)] {
            let a = g.point(x, y).unwrap();
            assert_eq!(g.square(a), g.multiply(a, a), "at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_pow() {
        let g = group(5);
        let a = g.point(0, 1).unwrap();
        assert_eq!(g.pow(a, 0), g.identity());
        assert_eq!(g.pow(a, 1), a);
        assert_eq!(g.pow(a, 2).coords(), (4, 0));
        assert_eq!(g.pow(a, 3).coords(), (0, 4));
        assert_eq!(g.pow(a, 4), g.identity());
    }

    #[test]
    fn test_lexicographic_order() {
        let g = group(7);
        let a = g.point(0, 6).unwrap();
        let b = g.point(1, 0).unwrap();
        let c = g.point(2, 2).unwrap();
        let d = g.point(2, 5).unwrap();
        assert!(a < b && b < c && c < d);
    }
}
