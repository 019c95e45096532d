use tracing::trace;

use super::BigInt;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

// 实现除法
impl BigInt {
    /// Truncating division: the quotient is rounded toward zero.
    ///
    /// # Errors
    /// [`BigIntError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt> {
        self.divide_knuth(rhs)
    }

    /// Remainder of the truncating division, `self - (self / rhs) * rhs`.
    /// It is zero or has the sign of `self`.
    ///
    /// # Errors
    /// [`BigIntError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Quotient and remainder of the truncating division.
    ///
    /// # Errors
    /// [`BigIntError::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt)> {
        let q = self.divide_knuth(rhs)?;
        let r = self - &(&q * rhs);
        Ok((q, r))
    }

    fn div_impl(&self, rhs: &BigInt) -> BigInt {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(err) => panic!("{}", err),
        }
    }

    fn rem_impl(&self, rhs: &BigInt) -> BigInt {
        match self.checked_rem(rhs) {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }

    /// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1,
    /// one divisor limb of precision per quotient digit.
    fn divide_knuth(&self, rhs: &BigInt) -> Result<BigInt> {
        let mut u = self.abs();
        let mut v = rhs.abs();
        let v_top = match v.limbs.last() {
            Some(&top) => top,
            None => return Err(BigIntError::DivisionByZero),
        };
        if u.limbs.len() < v.limbs.len() {
            return Ok(BigInt::ZERO);
        }

        // D1 normalize
        // shift the divisor until its top limb has the most significant bit set,
        // so every trial digit overshoots the true digit by at most 2
        let shift_len = v_top.leading_zeros();
        u <<= shift_len;
        v <<= shift_len;

        let n = v.limbs.len();
        let m = u.limbs.len() - n;
        let v_top = v.limbs[n - 1] as u64;
        trace!(shift = shift_len, divisor_limbs = n, quotient_limbs = m + 1, "normalized long division operands");

        let mut q = vec![0u32; m + 1];

        // u < 2 * (v << 32m), so the top quotient digit is 0 or 1
        let top_divisor = v.shift_limbs_left(m);
        if u >= top_divisor {
            u -= &top_divisor;
            q[m] = 1;
        }

        for i in (0..m).rev() {
            // D3 calculate qhat
            let dividend = ((u.extended_limb(n + i) as u64) << LIMB_BITS) | u.extended_limb(n + i - 1) as u64;
            let mut qhat = (dividend / v_top).min(LIMB_MAX as u64);

            if u.is_zero() {
                qhat = 0;
            } else {
                // D4 multiply and subtract, D6 add back while overshooting
                u = BigInt::sub_with_shift(&u, &v.mul_u32(qhat as u32), i);
                let mut corrections = 0;
                while u.sign {
                    qhat -= 1;
                    u += v.shift_limbs_left(i);
                    corrections += 1;
                }
                debug_assert!(corrections <= 2, "trial quotient digit overshot by {}", corrections);
                if corrections > 0 {
                    trace!(position = i, corrections, "corrected trial quotient digit");
                }
            }
            q[i] = qhat as u32;
        }

        let quotient = BigInt::from_raw_parts(false, q);
        if self.sign != rhs.sign {
            Ok(-quotient)
        } else {
            Ok(quotient)
        }
    }

    /// `rem - (value << 32 * shift)` in a single carry-propagating pass.
    ///
    /// Below `shift` the shifted value contributes zero words, then its own
    /// limbs, then its extension word.
    fn sub_with_shift(rem: &BigInt, value: &BigInt, shift: usize) -> BigInt {
        let m = value.limbs.len() + shift;
        let n = rem.limbs.len().max(m) + 1;
        let mut result = Vec::with_capacity(n);
        let mut carry: u64 = 1;

        for i in 0..shift {
            let sum = carry + rem.extended_limb(i) as u64 + LIMB_MAX as u64;
            result.push(sum as u32);
            carry = sum >> LIMB_BITS;
        }

        for i in shift..m {
            let sum = carry + rem.extended_limb(i) as u64 + !value.limbs[i - shift] as u64;
            result.push(sum as u32);
            carry = sum >> LIMB_BITS;
        }

        let borrow_word = !value.extension() as u64;
        for i in m..n {
            let sum = carry + rem.extended_limb(i) as u64 + borrow_word;
            result.push(sum as u32);
            carry = sum >> LIMB_BITS;
        }

        BigInt::from_limbs_signed_by_top(result)
    }

    /// `self << 32 * k` for a non-negative value.
    fn shift_limbs_left(&self, k: usize) -> BigInt {
        if self.is_zero() {
            return BigInt::ZERO;
        }
        let mut limbs = vec![0u32; k + self.limbs.len()];
        limbs[k..].copy_from_slice(&self.limbs);
        BigInt::from_raw_parts(self.sign, limbs)
    }
}

forward_binop!(Div, div, DivAssign, div_assign => div_impl);
forward_binop!(Rem, rem, RemAssign, rem_assign => rem_impl);
