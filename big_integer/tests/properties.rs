//! Property-based tests for the arithmetic laws of `BigInt`.
//!
//! Operands are built from random limb vectors through the public operator
//! set only, so every engine is exercised on multi-limb values of both signs.

use big_integer::BigInt;
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Assembles a value from little-endian limbs, then applies the sign.
fn from_limbs(limbs: &[u32], negative: bool) -> BigInt {
    let magnitude = limbs
        .iter()
        .rev()
        .fold(BigInt::ZERO, |acc, &limb| (acc << 32) | BigInt::from(limb));
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn any_big() -> impl Strategy<Value = BigInt> {
    (prop::collection::vec(any::<u32>(), 0..8), any::<bool>())
        .prop_map(|(limbs, negative)| from_limbs(&limbs, negative))
}

fn non_zero_big() -> impl Strategy<Value = BigInt> {
    any_big().prop_filter("divisor must be non-zero", |b| !b.is_zero())
}

// ============================================================================
// Additive
// ============================================================================

proptest! {
    #[test]
    fn additive_inverse(a in any_big()) {
        prop_assert_eq!(&a + &(-&a), BigInt::ZERO);
        prop_assert_eq!(-(-&a), a);
    }

    #[test]
    fn sub_undoes_add(a in any_big(), b in any_big()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn add_commutes(a in any_big(), b in any_big()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn increment_then_decrement(a in any_big()) {
        let mut b = a.clone();
        b.increment();
        prop_assert_eq!(&b, &(&a + &BigInt::from(1)));
        b.decrement();
        prop_assert_eq!(b, a);
    }
}

// ============================================================================
// Multiplicative / Division
// ============================================================================

proptest! {
    #[test]
    fn mul_then_div(a in any_big(), b in non_zero_big()) {
        prop_assert_eq!(&(&a * &b) / &b, a);
    }

    #[test]
    fn division_remainder_law(a in any_big(), b in non_zero_big()) {
        let q = &a / &b;
        let r = &a % &b;
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        // |r| < |b| and r takes the sign of the dividend
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn mul_distributes(a in any_big(), b in any_big(), c in any_big()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn scalar_mul_matches_full(a in any_big(), k in any::<i32>()) {
        prop_assert_eq!(&a * k, &a * &BigInt::from(k));
    }
}

// ============================================================================
// Bitwise / Shift
// ============================================================================

proptest! {
    #[test]
    fn complement_law(a in any_big()) {
        prop_assert_eq!(!&a, &(-&a) - &BigInt::from(1));
        prop_assert_eq!(&!&a + &a, BigInt::MINUS_ONE);
    }

    #[test]
    fn bitwise_identities(a in any_big(), b in any_big()) {
        prop_assert_eq!(&a & &a, a.clone());
        prop_assert_eq!(&a | &a, a.clone());
        prop_assert_eq!(&a ^ &a, BigInt::ZERO);
        prop_assert_eq!(!(&a & &b), &!&a | &!&b);
        prop_assert_eq!(!(&a | &b), &!&a & &!&b);
    }

    #[test]
    fn shift_round_trip(a in any_big(), k in 0u32..200) {
        prop_assert_eq!(&(&a << k) >> k, a);
    }

    #[test]
    fn shift_is_power_of_two_scaling(a in any_big(), k in 0u32..100) {
        let pow = BigInt::from(1) << k;
        prop_assert_eq!(&a << k, &a * &pow);
        // arithmetic right shift rounds toward negative infinity
        let floor = {
            let q = &a / &pow;
            if a.is_negative() && !(&a % &pow).is_zero() { q - BigInt::from(1) } else { q }
        };
        prop_assert_eq!(&a >> k, floor);
    }
}

// ============================================================================
// Relational
// ============================================================================

proptest! {
    #[test]
    fn trichotomy(a in any_big(), b in any_big()) {
        let holds = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
        prop_assert_eq!(holds, 1);
    }

    #[test]
    fn order_agrees_with_addition(a in any_big(), b in any_big(), c in any_big()) {
        if a < b {
            prop_assert!(&a + &c < &b + &c);
        }
    }

    #[test]
    fn order_agrees_with_difference(a in any_big(), b in any_big()) {
        prop_assert_eq!(a < b, (&a - &b).is_negative());
    }
}

// ============================================================================
// Native agreement
// ============================================================================

proptest! {
    #[test]
    fn matches_i128(a in any::<i64>(), b in any::<i64>(), k in 0u32..64) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!(&x + &y, BigInt::from(a + b));
        prop_assert_eq!(&x - &y, BigInt::from(a - b));
        prop_assert_eq!(&x * &y, BigInt::from(a * b));
        prop_assert_eq!(&x & &y, BigInt::from(a & b));
        prop_assert_eq!(&x | &y, BigInt::from(a | b));
        prop_assert_eq!(&x ^ &y, BigInt::from(a ^ b));
        prop_assert_eq!(&x << k, BigInt::from(a << k));
        prop_assert_eq!(&x >> k, BigInt::from(a >> k));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(&x / &y, BigInt::from(a / b));
            prop_assert_eq!(&x % &y, BigInt::from(a % b));
        }
        prop_assert_eq!(x.to_string(), a.to_string());
    }
}

// ============================================================================
// Textual codec
// ============================================================================

proptest! {
    #[test]
    fn decimal_round_trip(s in "(-?[1-9][0-9]{0,80})|0") {
        let parsed: BigInt = s.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), s);
    }

    #[test]
    fn display_parses_back(a in any_big()) {
        prop_assert_eq!(a.to_string().parse::<BigInt>().unwrap(), a);
    }
}
