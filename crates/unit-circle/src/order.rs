//! Element orders and generator search
//!
//! Orders are found by walking the orbit g, g², g³, … until it returns to
//! the identity. A walk that revisits some other point first never yields
//! an order: such a point is reported as having no well-defined order and
//! is not a generator candidate. In a real group that cannot happen, so
//! seeing it means the inputs were not a group.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::circle::{CircleGroup, CirclePoint};
use crate::points::PointSet;

/// Multiplicative order of `g` by orbit traversal
///
/// Returns `None` when the orbit cycles without passing through the
/// identity.
pub fn order_of(group: CircleGroup, g: CirclePoint) -> Option<u64> {
    let identity = group.identity();
    let mut seen = HashSet::new();
    let mut current = g;
    let mut order = 1u64;

    loop {
        if current == identity {
            return Some(order);
        }
        if !seen.insert(current) {
            trace!(%g, %current, "orbit repeats before reaching the identity");
            return None;
        }
        current = group.multiply(current, g);
        order += 1;
    }
}

/// Every point whose order equals the size of the point set, in
/// lexicographic order
pub fn find_generators(group: CircleGroup, points: &PointSet) -> Vec<CirclePoint> {
    let n = points.cardinality();
    let generators: Vec<_> = points
        .iter()
        .copied()
        .filter(|&g| order_of(group, g) == Some(n))
        .collect();

    debug!(
        p = group.field().modulus(),
        cardinality = n,
        generators = generators.len(),
        "scanned circle points for generators"
    );
    generators
}

/// The generator with the smallest x, then the smallest y
pub fn choose_generator(candidates: &[CirclePoint]) -> Option<CirclePoint> {
    candidates.iter().copied().min()
}

/// All generators of a cyclic group of order `n`, derived from one known
/// generator as g^k with gcd(k, n) = 1, sorted
pub fn generators_from(group: CircleGroup, g: CirclePoint, n: u64) -> Vec<CirclePoint> {
    let mut generators: Vec<_> = (1..=n)
        .filter(|&k| gcd(k, n) == 1)
        .map(|k| group.pow(g, k))
        .collect();
    generators.sort_unstable();
    generators
}

/// Euler's totient, the number of generators of a cyclic group of order `n`
pub fn euler_phi(mut n: u64) -> u64 {
    let mut result = n;
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            while n % d == 0 {
                n /= d;
            }
            result -= result / d;
        }
        d += 1;
    }
    if n > 1 {
        result -= result / n;
    }
    result
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
