//! # BigInt
//! Immutable arbitrary-precision integers.  All operations behave as if BigInt were represented in two's-complement notation.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a & b = {}", &a & &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("b >> 10 = {}", &b >> 10);
//! ```

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::BigIntError;

/// Implements a binary operator trait (owned and borrowed operands) plus its
/// `*Assign` counterpart on top of an inherent `fn(&BigInt, &BigInt) -> BigInt`.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident => $inner: ident) => {
        impl std::ops::$imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$inner(self, rhs)
            }
        }

        impl std::ops::$imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$inner(&self, &rhs)
            }
        }

        impl std::ops::$imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$inner(&self, rhs)
            }
        }

        impl std::ops::$imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$inner(self, &rhs)
            }
        }

        impl std::ops::$imp_assign<BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: BigInt) {
                *self = BigInt::$inner(self, &rhs);
            }
        }

        impl std::ops::$imp_assign<&BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: &BigInt) {
                *self = BigInt::$inner(self, rhs);
            }
        }
    };
}

mod add;
mod bit;
mod cmp;
mod div;
mod fmt;
mod mul;

/// Arbitrary-precision signed integer.
///
/// `limbs` holds the two's-complement bit pattern, least-significant limb first.
/// Every index past the end reads as the extension word: `0` for non-negative
/// values and `u32::MAX` for negative ones.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: bool,
    limbs: Vec<u32>,
}

// 表示与规范化
impl BigInt {
    pub const ZERO: BigInt = BigInt { sign: false, limbs: Vec::new() };
    pub const MINUS_ONE: BigInt = BigInt { sign: true, limbs: Vec::new() };

    /// Returns zero.
    pub const fn new() -> Self {
        BigInt::ZERO
    }

    /// Builds a value from raw two's-complement limbs and normalizes it.
    pub(crate) fn from_raw_parts(sign: bool, limbs: Vec<u32>) -> Self {
        let mut val = BigInt { sign, limbs };
        val.normalize();
        val
    }

    /// The word every limb past the stored ones is equal to.
    #[inline(always)]
    pub(crate) fn extension(&self) -> u32 {
        if self.sign { LIMB_MAX } else { 0 }
    }

    /// Reads limb `i`, sign-extending past the stored length.
    #[inline(always)]
    pub(crate) fn extended_limb(&self, i: usize) -> u32 {
        match self.limbs.get(i) {
            Some(&limb) => limb,
            None => self.extension(),
        }
    }

    /// Drops high limbs that only repeat the extension word.
    pub(crate) fn normalize(&mut self) {
        let ext = self.extension();
        while self.limbs.last() == Some(&ext) {
            self.limbs.pop();
        }
    }

    pub fn is_zero(&self) -> bool {
        !self.sign && self.limbs.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.sign
    }

    pub fn is_positive(&self) -> bool {
        !self.sign && !self.limbs.is_empty()
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i32 {
        if self.sign {
            -1
        } else if self.limbs.is_empty() {
            0
        } else {
            1
        }
    }

    /// Number of bits in the minimal two's-complement representation,
    /// excluding the sign bit. Both `0` and `-1` have a bit length of 0.
    pub fn bit_length(&self) -> u64 {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                // for negative values measure the complement, which is non-negative
                let top = if self.sign { !top } else { top };
                let len = self.limbs.len() as u64;
                (len - 1) * LIMB_BITS as u64 + (LIMB_BITS - top.leading_zeros()) as u64
            }
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::ZERO
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        if self.sign {
            -self
        } else {
            self.clone()
        }
    }
}

/// Absolute value of `x`.
pub fn abs(x: &BigInt) -> BigInt {
    x.abs()
}

// 实现构造
macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of_unsigned(val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val as i128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

impl BigInt {
    fn value_of(val: i128) -> BigInt {
        if val >= 0 {
            return BigInt::value_of_unsigned(val as u128);
        }
        if val >= -(MAX_CONSTANT as i128) {
            return NEG_CACHE[val.unsigned_abs() as usize].clone();
        }
        BigInt::from_raw_parts(true, BigInt::split_u128(val as u128))
    }

    fn value_of_unsigned(val: u128) -> BigInt {
        if val <= MAX_CONSTANT as u128 {
            return POS_CACHE[val as usize].clone();
        }
        BigInt::from_raw_parts(false, BigInt::split_u128(val))
    }

    fn split_u128(val: u128) -> Vec<u32> {
        (0..4).map(|i| (val >> (i * LIMB_BITS)) as u32).collect()
    }

    /// The value as an `i128`, if it fits.
    fn to_i128(&self) -> Option<i128> {
        let len = self.limbs.len();
        if len > 4 {
            return None;
        }
        // a full fourth limb must carry the same sign bit as the value
        if len == 4 && (self.limbs[3] >> (LIMB_BITS - 1) == 1) != self.sign {
            return None;
        }
        let bits = (0..4).fold(0u128, |acc, i| {
            acc | (self.extended_limb(i) as u128) << (i as u32 * LIMB_BITS)
        });
        Some(bits as i128)
    }
}

macro_rules! impl_big_int_to_primitive {
    ($($t: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $t {
        type Error = BigIntError;

        fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
            val.to_i128()
                .and_then(|v| <$t>::try_from(v).ok())
                .ok_or(BigIntError::OutOfRange { target: stringify!($t) })
        }
    }

    impl TryFrom<BigInt> for $t {
        type Error = BigIntError;

        fn try_from(val: BigInt) -> Result<Self, Self::Error> {
            <$t>::try_from(&val)
        }
    }
    )*
    };
}
impl_big_int_to_primitive!(i32, u32, i64, u64);
