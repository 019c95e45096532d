use std::ops::{Not, Shl, ShlAssign, Shr, ShrAssign};

use super::BigInt;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

// 实现位运算
impl BigInt {
    /// Applies `op` limb by limb over the sign-extended operands.
    ///
    /// The sign of the result is `op` applied to the two extension words,
    /// i.e. the same boolean operator on the two sign bits.
    fn bitwise<F>(&self, rhs: &BigInt, op: F) -> BigInt
    where
        F: Fn(u32, u32) -> u32,
    {
        let n = self.limbs.len().max(rhs.limbs.len());
        let limbs = (0..n)
            .map(|i| op(self.extended_limb(i), rhs.extended_limb(i)))
            .collect();
        let sign = op(self.extension(), rhs.extension()) != 0;
        BigInt::from_raw_parts(sign, limbs)
    }

    fn and_impl(&self, rhs: &BigInt) -> BigInt {
        self.bitwise(rhs, |a, b| a & b)
    }

    fn or_impl(&self, rhs: &BigInt) -> BigInt {
        self.bitwise(rhs, |a, b| a | b)
    }

    fn xor_impl(&self, rhs: &BigInt) -> BigInt {
        self.bitwise(rhs, |a, b| a ^ b)
    }

    /// `!x == -x - 1`, computed directly on the limbs.
    fn not_impl(&self) -> BigInt {
        let limbs = self.limbs.iter().map(|limb| !limb).collect();
        BigInt { sign: !self.sign, limbs }
    }
}

forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign => and_impl);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign => or_impl);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign => xor_impl);

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.not_impl()
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.not_impl()
    }
}

// 实现左移
impl BigInt {
    fn shl_impl(&self, n: u32) -> BigInt {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let n_ints = (n / LIMB_BITS) as usize;
        let n_bits = n % LIMB_BITS;

        let mut limbs = Vec::with_capacity(n_ints + self.limbs.len() + 1);
        limbs.resize(n_ints, 0);

        let mut carry: u64 = 0;
        for &limb in self.limbs.iter() {
            let shifted = ((limb as u64) << n_bits) | carry;
            limbs.push(shifted as u32);
            carry = shifted >> LIMB_BITS;
        }
        // The extension word is shifted as well, which materializes it for
        // values such as -1 that have no stored limbs.
        let top = ((self.extension() as u64) << n_bits) | carry;
        limbs.push(top as u32);

        BigInt::from_raw_parts(self.sign, limbs)
    }

    /// `self << n`, rejecting negative amounts and amounts above `u32::MAX`.
    pub fn checked_shl(&self, n: i64) -> Result<BigInt> {
        Ok(self.shl_impl(BigInt::shift_amount(n)?))
    }

    fn shift_amount(n: i64) -> Result<u32> {
        u32::try_from(n).map_err(|_| BigIntError::InvalidShift { amount: n })
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        self.shl_impl(n)
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        self.shl_impl(n)
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, n: u32) {
        *self = self.shl_impl(n);
    }
}

// 实现右移
impl BigInt {
    /// Arithmetic shift: vacated high bits are copied from the sign.
    fn shr_impl(&self, n: u32) -> BigInt {
        // 0 and -1 are fixed points of every right shift
        if n == 0 || self.limbs.is_empty() {
            return self.clone();
        }
        let n_ints = (n / LIMB_BITS) as usize;
        let n_bits = n % LIMB_BITS;

        if n_ints >= self.limbs.len() {
            return if self.sign { BigInt::MINUS_ONE } else { BigInt::ZERO };
        }

        let len = self.limbs.len() - n_ints;
        let limbs = (0..len)
            .map(|i| {
                let low = self.limbs[i + n_ints] as u64;
                let high = self.extended_limb(i + n_ints + 1) as u64;
                (((high << LIMB_BITS) | low) >> n_bits) as u32
            })
            .collect();

        BigInt::from_raw_parts(self.sign, limbs)
    }

    /// `self >> n`, rejecting negative amounts and amounts above `u32::MAX`.
    pub fn checked_shr(&self, n: i64) -> Result<BigInt> {
        Ok(self.shr_impl(BigInt::shift_amount(n)?))
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        self.shr_impl(n)
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> Self::Output {
        self.shr_impl(n)
    }
}

impl ShrAssign<u32> for BigInt {
    fn shr_assign(&mut self, n: u32) {
        *self = self.shr_impl(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i128) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_and_or_xor() {
        assert_eq!(big(0b1100) & big(0b1010), big(0b1000));
        assert_eq!(big(0b1100) | big(0b1010), big(0b1110));
        assert_eq!(big(0b1100) ^ big(0b1010), big(0b0110));

        // mixed signs and lengths against native two's complement
        let values = [0, 1, -1, 5, -6, 1 << 40, -(1 << 40) + 3, i128::MIN, i128::MAX, -(1 << 95)];
        for &a in values.iter() {
            for &b in values.iter() {
                assert_eq!(big(a) & big(b), big(a & b), "{} & {}", a, b);
                assert_eq!(big(a) | big(b), big(a | b), "{} | {}", a, b);
                assert_eq!(big(a) ^ big(b), big(a ^ b), "{} ^ {}", a, b);
            }
        }

        let mut c = big(-1);
        c &= big(0xff);
        c |= &big(0x100);
        c ^= big(1);
        assert_eq!(c, big(0x1fe));
    }

    #[test]
    fn test_not() {
        assert_eq!(!big(0), BigInt::MINUS_ONE);
        assert_eq!(!BigInt::MINUS_ONE, BigInt::ZERO);
        assert_eq!(!big(5), big(-6));
        assert_eq!(!&big(-(1 << 70)), big((1 << 70) - 1));
        assert_eq!(!big(u32::MAX as i128), big(-(1 << 32)));
    }

    #[test]
    fn test_shl() {
        assert_eq!(big(1) << 33, big(2) * (big(1) << 32));
        assert_eq!(big(1) << 33, big(1 << 33));
        assert_eq!(big(3) << 0, big(3));
        assert_eq!(big(0) << 100, BigInt::ZERO);
        assert_eq!(BigInt::MINUS_ONE << 1, big(-2));
        assert_eq!(BigInt::MINUS_ONE << 32, big(-(1 << 32)));
        assert_eq!(BigInt::MINUS_ONE << 70, big(-(1 << 70)));
        assert_eq!(big(-(1 << 31) - 1) << 1, big(-(1 << 32) - 2));
        assert_eq!(big(-(1 << 31)) << 1, big(-(1 << 32)));
        assert_eq!(big(0x8000_0000) << 1, big(1 << 32));
        assert_eq!(&big(-12345) << 77, big(-12345 << 77));

        let mut a = big(5);
        a <<= 64;
        assert_eq!(a, big(5 << 64));
    }

    #[test]
    fn test_shr() {
        assert_eq!(big(1 << 33) >> 33, big(1));
        assert_eq!(big(7) >> 1, big(3));
        assert_eq!(big(-7) >> 1, big(-4));
        assert_eq!(big(-1) >> 100, BigInt::MINUS_ONE);
        assert_eq!(big(-(1 << 64)) >> 64, BigInt::MINUS_ONE);
        assert_eq!(big(-(1 << 64)) >> 65, BigInt::MINUS_ONE);
        assert_eq!(big(-(1 << 64) - 1) >> 64, big(-2));
        assert_eq!(big(1 << 64) >> 65, BigInt::ZERO);
        assert_eq!(big(u64::MAX as i128) >> 32, big(u32::MAX as i128));
        assert_eq!(&big(i128::MIN) >> 127, BigInt::MINUS_ONE);
        assert_eq!(&big(i128::MIN + 12345) >> 40, big((i128::MIN + 12345) >> 40));

        let mut a = big(-(5 << 64));
        a >>= 64;
        assert_eq!(a, big(-5));
    }

    #[test]
    fn test_checked_shift() {
        assert_eq!(big(3).checked_shl(2), Ok(big(12)));
        assert_eq!(big(-12).checked_shr(2), Ok(big(-3)));
        assert_eq!(big(3).checked_shl(-1), Err(BigIntError::InvalidShift { amount: -1 }));
        assert_eq!(
            big(3).checked_shr(u32::MAX as i64 + 1),
            Err(BigIntError::InvalidShift { amount: u32::MAX as i64 + 1 })
        );
    }
}
