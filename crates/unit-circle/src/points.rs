//! Enumeration of the circle points mod p

use tracing::{debug, trace};

use crate::circle::{CircleGroup, CirclePoint};
use crate::error::CircleError;

/// Size of the circle group mod an odd prime `p`
///
/// p - 1 when -1 is a square (p ≡ 1 mod 4), p + 1 otherwise.
pub const fn expected_cardinality(p: u32) -> u64 {
    if p % 4 == 1 {
        p as u64 - 1
    } else {
        p as u64 + 1
    }
}

/// All solutions of x² + y² = 1 mod p, sorted by `(x, y)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<CirclePoint>,
}

impl PointSet {
    /// Enumerate every point on the circle
    ///
    /// The poles (0, ±1) are always present. For every other x the curve
    /// has the points (x, ±√(1 - x²)) when the root exists. The result is
    /// checked against [`expected_cardinality`]; a mismatch can only come
    /// from broken field arithmetic and is reported as
    /// [`CircleError::FatalInternal`].
    pub fn enumerate(group: CircleGroup) -> Result<Self, CircleError> {
        let f = group.field();
        let p = f.modulus();
        let one = f.one();

        let mut points = Vec::with_capacity(p as usize + 1);
        points.push(CirclePoint { x: f.zero(), y: one });
        points.push(CirclePoint { x: f.zero(), y: f.neg(one) });

        for x in (1..p as u64).map(|v| f.element(v)) {
            let rhs = f.sub(one, f.square(x));
            let Some(y) = f.sqrt(rhs) else {
                continue;
            };
            trace!(%x, %y, "circle point");
            points.push(CirclePoint { x, y });
            if !y.is_zero() {
                points.push(CirclePoint { x, y: f.neg(y) });
            }
        }

        points.sort_unstable();

        let found = points.len() as u64;
        let expected = expected_cardinality(p);
        if found != expected {
            return Err(CircleError::FatalInternal { p, found, expected });
        }

        debug!(p, cardinality = found, "enumerated circle points");
        Ok(Self { points })
    }

    /// Number of points, i.e. the group order
    #[inline]
    pub fn cardinality(&self) -> u64 {
        self.points.len() as u64
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: &CirclePoint) -> bool {
        self.points.binary_search(point).is_ok()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, CirclePoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[CirclePoint] {
        &self.points
    }

    pub fn into_vec(self) -> Vec<CirclePoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a CirclePoint;
    type IntoIter = core::slice::Iter<'a, CirclePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
