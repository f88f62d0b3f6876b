//! One request end to end: validate p, enumerate, pick a generator, take
//! its powers.

use tracing::{debug, instrument};

use crate::circle::{CircleGroup, CirclePoint};
use crate::error::CircleError;
use crate::field::PrimeField;
use crate::order::{choose_generator, find_generators};
use crate::points::PointSet;
use crate::powers::{power_sequence, IndexedPoint};
use crate::primality::PrimalityCheck;

/// Parameters of one computation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Request {
    /// The modulus, expected to be an odd prime
    pub p: u32,
    /// How many powers of the generator to produce
    pub n: u64,
}

impl Request {
    pub const fn new(p: u32, n: u64) -> Self {
        Self { p, n }
    }
}

/// Everything a renderer needs about the circle group mod p
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleReport {
    pub prime: u32,
    pub count: u64,
    pub cardinality: u64,
    pub points: Vec<CirclePoint>,
    /// Every point of full order, sorted
    pub generators: Vec<CirclePoint>,
    /// The smallest entry of `generators`
    pub generator: CirclePoint,
    pub generator_order: u64,
    pub powers: Vec<IndexedPoint>,
}

/// Run the whole computation for one request
///
/// Input problems are reported before any group work: `InvalidPrime`
/// first, then `InvalidCount`. The result is a pure function of the
/// request.
#[instrument(level = "debug", skip_all, fields(p = request.p, n = request.n))]
pub fn compute<C: PrimalityCheck + ?Sized>(
    request: Request,
    primality: &C,
) -> Result<CircleReport, CircleError> {
    let Request { p, n } = request;

    if !primality.is_prime(p) {
        return Err(CircleError::InvalidPrime { p });
    }
    if n == 0 {
        return Err(CircleError::InvalidCount);
    }

    let group = CircleGroup::new(PrimeField::new(p)?);
    let points = PointSet::enumerate(group)?;
    let cardinality = points.cardinality();

    let generators = find_generators(group, &points);
    let generator =
        choose_generator(&generators).ok_or(CircleError::NoGeneratorFound { p, cardinality })?;
    // Generators have full order by definition
    let generator_order = cardinality;

    let powers = power_sequence(group, generator, n);
    debug!(%generator, generator_order, "chose generator");

    Ok(CircleReport {
        prime: p,
        count: n,
        cardinality,
        points: points.into_vec(),
        generators,
        generator,
        generator_order,
        powers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::TrialDivision;

    #[test]
    fn test_p5_report() {
        let report = compute(Request::new(5, 4), &TrialDivision).unwrap();
        assert_eq!(report.cardinality, 4);
        assert_eq!(report.generator.coords(), (0, 1));
        assert_eq!(report.generator_order, 4);
        let powers: Vec<_> = report.powers.iter().map(|t| t.point.coords()).collect();
        assert_eq!(powers, vec![(0, 1), (4, 0), (0, 4), (1, 0)]);
    }

    #[test]
    fn test_rejects_composite() {
        assert_eq!(
            compute(Request::new(4, 3), &TrialDivision),
            Err(CircleError::InvalidPrime { p: 4 })
        );
    }

    #[test]
    fn test_rejects_two() {
        assert_eq!(
            compute(Request::new(2, 3), &TrialDivision),
            Err(CircleError::InvalidPrime { p: 2 })
        );
    }

    #[test]
    fn test_rejects_zero_count() {
        assert_eq!(compute(Request::new(5, 0), &TrialDivision), Err(CircleError::InvalidCount));
    }

    #[test]
    fn test_prime_is_checked_before_count() {
        assert_eq!(
            compute(Request::new(4, 0), &TrialDivision),
            Err(CircleError::InvalidPrime { p: 4 })
        );
    }

    #[test]
    fn test_lying_primality_check_is_fatal() {
        let everything_is_prime = |_: u32| true;
        let err = compute(Request::new(15, 3), &everything_is_prime).unwrap_err();
        assert!(err.is_fatal());
    }
}
