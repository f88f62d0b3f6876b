//! Property tests for prime field arithmetic

use proptest::prelude::*;

use unit_circle::field::{FieldElement, PrimeField};

const PRIMES: [u32; 10] = [3, 5, 7, 11, 13, 17, 29, 41, 97, 257];

fn arb_field() -> impl Strategy<Value = PrimeField> {
    prop::sample::select(PRIMES.to_vec()).prop_map(|p| PrimeField::new(p).unwrap())
}

fn arb_field_with(count: usize) -> impl Strategy<Value = (PrimeField, Vec<FieldElement>)> {
    arb_field().prop_flat_map(move |f| {
        let elems = prop::collection::vec((0..f.modulus() as u64).prop_map(move |v| f.element(v)), count);
        (Just(f), elems)
    })
}

// ===== Canonical form =====

proptest! {
    #[test]
    fn results_are_canonical((f, v) in arb_field_with(2)) {
        let p = f.modulus();
        for r in [f.add(v[0], v[1]), f.sub(v[0], v[1]), f.mul(v[0], v[1]), f.neg(v[0])] {
            prop_assert!(r.value() < p);
        }
    }
}

proptest! {
    #[test]
    fn signed_reduction_matches_unsigned(f in arb_field(), v in -10_000i64..10_000) {
        let p = f.modulus() as i64;
        let expected = f.element(v.rem_euclid(p) as u64);
        prop_assert_eq!(f.element_signed(v), expected);
    }
}

// ===== Ring laws =====

proptest! {
    #[test]
    fn addition_commutative((f, v) in arb_field_with(2)) {
        prop_assert_eq!(f.add(v[0], v[1]), f.add(v[1], v[0]));
    }
}

proptest! {
    #[test]
    fn multiplication_associative((f, v) in arb_field_with(3)) {
        prop_assert_eq!(
            f.mul(f.mul(v[0], v[1]), v[2]),
            f.mul(v[0], f.mul(v[1], v[2]))
        );
    }
}

proptest! {
    #[test]
    fn distributive((f, v) in arb_field_with(3)) {
        prop_assert_eq!(
            f.mul(v[0], f.add(v[1], v[2])),
            f.add(f.mul(v[0], v[1]), f.mul(v[0], v[2]))
        );
    }
}

proptest! {
    #[test]
    fn additive_inverse((f, v) in arb_field_with(1)) {
        prop_assert_eq!(f.add(v[0], f.neg(v[0])), f.zero());
    }
}

proptest! {
    #[test]
    fn subtraction_definition((f, v) in arb_field_with(2)) {
        prop_assert_eq!(f.sub(v[0], v[1]), f.add(v[0], f.neg(v[1])));
    }
}

// ===== Square roots =====

proptest! {
    #[test]
    fn sqrt_of_square_is_a_root((f, v) in arb_field_with(1)) {
        let sq = f.square(v[0]);
        let r = f.sqrt(sq).expect("squares have roots");
        prop_assert_eq!(f.square(r), sq);
        prop_assert!(r == v[0] || r == f.neg(v[0]));
    }
}

proptest! {
    #[test]
    fn sqrt_agrees_with_euler((f, v) in arb_field_with(1)) {
        prop_assert_eq!(f.sqrt(v[0]).is_some(), f.is_square(v[0]));
    }
}

proptest! {
    #[test]
    fn sqrt_returns_smaller_root((f, v) in arb_field_with(1)) {
        if let Some(r) = f.sqrt(v[0]) {
            prop_assert!(r <= f.neg(r));
        }
    }
}

#[test]
fn test_fermat_little_theorem() {
    for p in PRIMES {
        let f = PrimeField::new(p).unwrap();
        for v in 1..p as u64 {
            assert_eq!(f.pow(f.element(v), p as u64 - 1), f.one(), "{}^(p-1) mod {}", v, p);
        }
    }
}

#[test]
fn test_minus_one_is_square_iff_one_mod_four() {
    for p in PRIMES {
        let f = PrimeField::new(p).unwrap();
        let minus_one = f.neg(f.one());
        assert_eq!(f.is_square(minus_one), p % 4 == 1, "p = {}", p);
    }
}
