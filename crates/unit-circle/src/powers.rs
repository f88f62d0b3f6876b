//! Power sequences g¹, g², …, gⁿ

use core::fmt;

use crate::circle::{CircleGroup, CirclePoint};

/// A point tagged with its 1-based exponent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexedPoint {
    pub index: u64,
    pub point: CirclePoint,
}

impl fmt::Display for IndexedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.point)
    }
}

/// Iterator over the first `n` powers of a point
///
/// Each term is the previous one multiplied by the base, so the sequence
/// wraps around once `n` exceeds the order of the base.
#[derive(Clone, Debug)]
pub struct Powers {
    group: CircleGroup,
    base: CirclePoint,
    current: CirclePoint,
    index: u64,
    remaining: u64,
}

impl Powers {
    pub fn new(group: CircleGroup, base: CirclePoint, n: u64) -> Self {
        Self {
            group,
            base,
            current: base,
            index: 1,
            remaining: n,
        }
    }
}

impl Iterator for Powers {
    type Item = IndexedPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = IndexedPoint {
            index: self.index,
            point: self.current,
        };
        self.current = self.group.multiply(self.current, self.base);
        self.index += 1;
        self.remaining -= 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Powers {}

/// Collect g¹ … gⁿ
pub fn power_sequence(group: CircleGroup, g: CirclePoint, n: u64) -> Vec<IndexedPoint> {
    Powers::new(group, g, n).collect()
}
