use std::iter::Product;
use std::ops::{Mul, MulAssign};

use super::BigInt;
use crate::big_num_constants::*;

// 实现乘法
impl BigInt {
    /// Schoolbook multiplication of the magnitudes, sign restored afterwards.
    fn mul_impl(&self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::ZERO;
        }
        let x = self.abs();
        let y = rhs.abs();
        let x_len = x.limbs.len();
        let y_len = y.limbs.len();

        let mut z = vec![0u32; x_len + y_len + 1];
        for (i, &y_limb) in y.limbs.iter().enumerate() {
            let mut carry: u64 = 0;
            let mut j = 0;
            while j < x_len || carry != 0 {
                let product = (x.extended_limb(j) as u64) * (y_limb as u64)
                            + z[i + j] as u64
                            + carry;
                z[i + j] = product as u32;
                carry = product >> LIMB_BITS;
                j += 1;
            }
        }

        let result = BigInt::from_raw_parts(false, z);
        if self.sign != rhs.sign {
            -result
        } else {
            result
        }
    }

    /// Multiplies by a single limb without promoting it to a `BigInt`.
    pub(crate) fn mul_u32(&self, y: u32) -> BigInt {
        if y == 0 || self.is_zero() {
            return BigInt::ZERO;
        }
        let x = self.abs();
        let x_len = x.limbs.len();

        let mut z = Vec::with_capacity(x_len + 1);
        let mut carry: u64 = 0;
        for &limb in x.limbs.iter() {
            let product = (limb as u64) * (y as u64) + carry;
            z.push(product as u32);
            carry = product >> LIMB_BITS;
        }
        z.push(carry as u32);

        let result = BigInt::from_raw_parts(false, z);
        if self.sign {
            -result
        } else {
            result
        }
    }

    pub(crate) fn mul_i32(&self, y: i32) -> BigInt {
        let result = self.mul_u32(y.unsigned_abs());
        if y < 0 {
            -result
        } else {
            result
        }
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign => mul_impl);

macro_rules! impl_scalar_mul {
    ($($t: ty => $inner: ident),*) => {
    $(
    impl Mul<$t> for BigInt {
        type Output = BigInt;

        fn mul(self, rhs: $t) -> BigInt {
            self.$inner(rhs)
        }
    }

    impl Mul<$t> for &BigInt {
        type Output = BigInt;

        fn mul(self, rhs: $t) -> BigInt {
            self.$inner(rhs)
        }
    }

    impl Mul<BigInt> for $t {
        type Output = BigInt;

        fn mul(self, rhs: BigInt) -> BigInt {
            rhs.$inner(self)
        }
    }

    impl Mul<&BigInt> for $t {
        type Output = BigInt;

        fn mul(self, rhs: &BigInt) -> BigInt {
            rhs.$inner(self)
        }
    }

    impl MulAssign<$t> for BigInt {
        fn mul_assign(&mut self, rhs: $t) {
            *self = self.$inner(rhs);
        }
    }
    )*
    };
}
impl_scalar_mul!(u32 => mul_u32, i32 => mul_i32);

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::from(1), |acc, x| acc.mul_impl(&x))
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::from(1), |acc, x| acc.mul_impl(x))
    }
}
