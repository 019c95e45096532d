use std::cmp::{Ord, Ordering, PartialOrd};

use super::BigInt;

// 实现大小比较
impl BigInt {
    /// Compares two values of the same sign limb by limb.
    ///
    /// Normalized values of equal sign order by length first: a longer
    /// non-negative value is larger, a longer negative one is smaller.  At
    /// equal length the unsigned order of the two's-complement limbs is the
    /// value order for both signs.
    fn compare_same_sign(&self, other: &BigInt) -> Ordering {
        let by_len = self.limbs.len().cmp(&other.limbs.len());
        if by_len != Ordering::Equal {
            return if self.sign { by_len.reverse() } else { by_len };
        }

        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.compare_same_sign(other),
        }
    }
}

macro_rules! impl_cmp_with_primitive {
    ($($t: ty),*) => {
    $(
    impl PartialEq<$t> for BigInt {
        fn eq(&self, other: &$t) -> bool {
            *self == BigInt::from(*other)
        }
    }

    impl PartialEq<BigInt> for $t {
        fn eq(&self, other: &BigInt) -> bool {
            BigInt::from(*self) == *other
        }
    }

    impl PartialOrd<$t> for BigInt {
        fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
            Some(self.cmp(&BigInt::from(*other)))
        }
    }

    impl PartialOrd<BigInt> for $t {
        fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
            Some(BigInt::from(*self).cmp(other))
        }
    }
    )*
    };
}
impl_cmp_with_primitive!(i32, u32);
