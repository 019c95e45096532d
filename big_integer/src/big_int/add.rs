use std::iter::Sum;
use std::ops::Neg;

use super::BigInt;
use crate::big_num_constants::*;

// 实现加法
impl BigInt {
    /// `self + rhs`, propagating a 64-bit carry over sign-extended limbs.
    ///
    /// One limb more than the longer operand is produced so the top limb of
    /// the result always holds the sign bit of the sum.
    fn add_impl(&self, rhs: &BigInt) -> BigInt {
        let n = self.limbs.len().max(rhs.limbs.len()) + 1;
        let mut result = Vec::with_capacity(n);
        let mut carry: u64 = 0;
        for i in 0..n {
            let sum = carry + self.extended_limb(i) as u64 + rhs.extended_limb(i) as u64;
            result.push(sum as u32);
            carry = sum >> LIMB_BITS;
        }
        BigInt::from_limbs_signed_by_top(result)
    }

    /// `self - rhs` as `self + !rhs + 1`.
    fn sub_impl(&self, rhs: &BigInt) -> BigInt {
        let n = self.limbs.len().max(rhs.limbs.len()) + 1;
        let mut result = Vec::with_capacity(n);
        let mut carry: u64 = 1;
        for i in 0..n {
            let sum = carry + self.extended_limb(i) as u64 + !rhs.extended_limb(i) as u64;
            result.push(sum as u32);
            carry = sum >> LIMB_BITS;
        }
        BigInt::from_limbs_signed_by_top(result)
    }

    /// Reads the sign from the top bit of a fixed-width two's-complement buffer.
    pub(crate) fn from_limbs_signed_by_top(limbs: Vec<u32>) -> BigInt {
        let sign = limbs.last().map_or(false, |top| top >> (LIMB_BITS - 1) == 1);
        BigInt::from_raw_parts(sign, limbs)
    }

    /// Two's-complement negation: complement every limb and add one.
    fn neg_impl(&self) -> BigInt {
        if self.is_zero() {
            return BigInt::ZERO;
        }

        // the extra extension limb absorbs the carry out of -(-2^k)
        let mut limbs = Vec::with_capacity(self.limbs.len() + 1);
        limbs.extend_from_slice(&self.limbs);
        limbs.push(self.extension());

        let mut carry: u64 = 1;
        for limb in limbs.iter_mut() {
            let sum = carry + !*limb as u64;
            *limb = sum as u32;
            carry = sum >> LIMB_BITS;
        }

        BigInt::from_raw_parts(!self.sign, limbs)
    }
}

forward_binop!(Add, add, AddAssign, add_assign => add_impl);
forward_binop!(Sub, sub, SubAssign, sub_assign => sub_impl);

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.neg_impl()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.neg_impl()
    }
}

// 实现自增与自减
impl BigInt {
    /// Prefix increment: adds one in place and returns the receiver.
    pub fn increment(&mut self) -> &mut Self {
        *self = self.add_impl(&BigInt::from(1));
        self
    }

    /// Prefix decrement: subtracts one in place and returns the receiver.
    pub fn decrement(&mut self) -> &mut Self {
        *self = self.sub_impl(&BigInt::from(1));
        self
    }

    /// Postfix increment: adds one in place and returns the previous value.
    pub fn post_increment(&mut self) -> BigInt {
        let prev = self.clone();
        self.increment();
        prev
    }

    /// Postfix decrement: subtracts one in place and returns the previous value.
    pub fn post_decrement(&mut self) -> BigInt {
        let prev = self.clone();
        self.decrement();
        prev
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::ZERO, |acc, x| acc.add_impl(&x))
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::ZERO, |acc, x| acc.add_impl(x))
    }
}
