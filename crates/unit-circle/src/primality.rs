//! Primality collaborator

/// Decides whether a modulus is prime before any group work starts
pub trait PrimalityCheck {
    fn is_prime(&self, p: u32) -> bool;
}

impl<F> PrimalityCheck for F
where
    F: Fn(u32) -> bool,
{
    fn is_prime(&self, p: u32) -> bool {
        self(p)
    }
}

/// Deterministic trial division by 2, 3 and 6k ± 1
#[derive(Clone, Copy, Debug, Default)]
pub struct TrialDivision;

impl PrimalityCheck for TrialDivision {
    fn is_prime(&self, p: u32) -> bool {
        if p < 2 {
            return false;
        }
        if p < 4 {
            return true;
        }
        if p % 2 == 0 || p % 3 == 0 {
            return false;
        }
        let p = p as u64;
        let mut d = 5u64;
        while d * d <= p {
            if p % d == 0 || p % (d + 2) == 0 {
                return false;
            }
            d += 6;
        }
        true
    }
}
