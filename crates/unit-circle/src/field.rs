//! Prime field arithmetic for small odd primes
//!
//! Elements are plain canonical residues in `[0, p)`. The modulus is not
//! stored in the element: every operation goes through a [`PrimeField`]
//! value, which is the only place the prime lives.
//!
//! All values fit in 32 bits, so products are formed in `u64` and reduced
//! with a single `%`.

use core::fmt::{self, Display};

use crate::error::CircleError;

/// An element of a prime field, always in canonical form `[0, p)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct FieldElement(u32);

impl FieldElement {
    /// Zero element
    pub const ZERO: Self = Self(0);

    /// Get the inner value
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check if zero
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FieldElement> for u32 {
    #[inline]
    fn from(value: FieldElement) -> Self {
        value.0
    }
}

/// The integers modulo an odd prime `p`
///
/// Construction only checks that `p` is odd and at least 3. Whether `p` is
/// actually prime is decided by a [`PrimalityCheck`](crate::PrimalityCheck)
/// before a field is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u32,
}

impl PrimeField {
    /// Create the field of order `p`
    pub fn new(p: u32) -> Result<Self, CircleError> {
        if p < 3 || p % 2 == 0 {
            return Err(CircleError::InvalidPrime { p });
        }
        Ok(Self { p })
    }

    /// The modulus
    #[inline]
    pub const fn modulus(self) -> u32 {
        self.p
    }

    /// Reduce any non-negative integer into the field
    #[inline]
    pub const fn element(self, value: u64) -> FieldElement {
        FieldElement((value % self.p as u64) as u32)
    }

    /// Reduce a possibly negative integer into the field
    #[inline]
    pub fn element_signed(self, value: i64) -> FieldElement {
        FieldElement(value.rem_euclid(self.p as i64) as u32)
    }

    #[inline]
    pub const fn zero(self) -> FieldElement {
        FieldElement(0)
    }

    /// `1 mod p`
    #[inline]
    pub const fn one(self) -> FieldElement {
        FieldElement(1 % self.p)
    }

    /// Reduction when value is in [0, 2p)
    #[inline]
    const fn partial_reduce(self, value: u64) -> FieldElement {
        let p = self.p as u64;
        let reduced = if value >= p { value - p } else { value };
        FieldElement(reduced as u32)
    }

    #[inline]
    pub const fn add(self, a: FieldElement, b: FieldElement) -> FieldElement {
        self.partial_reduce(a.0 as u64 + b.0 as u64)
    }

    #[inline]
    pub const fn sub(self, a: FieldElement, b: FieldElement) -> FieldElement {
        // Add p to avoid underflow
        self.partial_reduce(a.0 as u64 + self.p as u64 - b.0 as u64)
    }

    #[inline]
    pub const fn mul(self, a: FieldElement, b: FieldElement) -> FieldElement {
        self.element(a.0 as u64 * b.0 as u64)
    }

    #[inline]
    pub const fn neg(self, a: FieldElement) -> FieldElement {
        if a.0 == 0 {
            a
        } else {
            FieldElement(self.p - a.0)
        }
    }

    #[inline]
    pub const fn square(self, a: FieldElement) -> FieldElement {
        self.mul(a, a)
    }

    /// Compute `a^exp` using square-and-multiply
    pub fn pow(self, a: FieldElement, mut exp: u64) -> FieldElement {
        let mut base = a;
        let mut result = self.one();

        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.square(base);
            exp >>= 1;
        }

        result
    }

    /// Euler's criterion: `a^((p-1)/2) == 1`. Zero counts as a square.
    pub fn is_square(self, a: FieldElement) -> bool {
        a.is_zero() || self.pow(a, (self.p as u64 - 1) / 2) == self.one()
    }

    /// Square root by Tonelli–Shanks
    ///
    /// Returns the smaller of the two roots, `Some(0)` for zero, and `None`
    /// when `a` is a non-residue. Works for every odd prime, including
    /// `p ≡ 1 (mod 4)`.
    pub fn sqrt(self, a: FieldElement) -> Option<FieldElement> {
        if a.is_zero() {
            return Some(a);
        }
        if !self.is_square(a) {
            return None;
        }

        // p - 1 = q * 2^s with q odd
        let mut q = self.p as u64 - 1;
        let mut s = 0u32;
        while q & 1 == 0 {
            q >>= 1;
            s += 1;
        }

        if s == 1 {
            // p ≡ 3 (mod 4)
            let r = self.pow(a, (self.p as u64 + 1) / 4);
            return Some(r.min(self.neg(r)));
        }

        let z = (2..self.p as u64)
            .map(|v| self.element(v))
            .find(|&z| !self.is_square(z))?;

        let mut m = s;
        let mut c = self.pow(z, q);
        let mut t = self.pow(a, q);
        let mut r = self.pow(a, (q + 1) / 2);
        let one = self.one();

        while t != one {
            // Least i in (0, m) with t^(2^i) == 1
            let mut i = 0;
            let mut t2i = t;
            while t2i != one {
                t2i = self.square(t2i);
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = self.square(b);
            }

            m = i;
            c = self.square(b);
            t = self.mul(t, c);
            r = self.mul(r, b);
        }

        Some(r.min(self.neg(r)))
    }
}
