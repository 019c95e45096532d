use std::fmt::{self, Debug, Display, Write};
use std::str::FromStr;

use tracing::trace;

use super::BigInt;
use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude_to_decimal()?;
        f.pad_integral(!self.sign, "", &digits)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl BigInt {
    /// Decimal digits of `|self|`, split off `10^9` at a time by long division.
    fn magnitude_to_decimal(&self) -> std::result::Result<String, fmt::Error> {
        if self.is_zero() {
            return Ok(String::from("0"));
        }

        let mut tmp = self.abs();
        let mut digit_groups: Vec<u32> = Vec::new();
        while !tmp.is_zero() {
            let (q, r) = tmp.div_rem(&DECIMAL_RADIX_BIG).map_err(|_| fmt::Error)?;
            digit_groups.push(u32::try_from(&r).map_err(|_| fmt::Error)?);
            tmp = q;
        }

        // the leading group is printed as is, every other one padded to a full group
        let mut result = String::with_capacity(digit_groups.len() * DIGITS_PER_LIMB);
        let mut groups = digit_groups.iter().rev();
        if let Some(first) = groups.next() {
            write!(result, "{}", first)?;
        }
        for group in groups {
            write!(result, "{:0width$}", group, width = DIGITS_PER_LIMB)?;
        }
        Ok(result)
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(val: &str) -> Result<Self> {
        BigInt::from_decimal_str(val)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self> {
        BigInt::from_decimal_str(val)
    }
}

impl BigInt {
    /// Parses `-?[0-9]+`.  Leading zeros are allowed and `-0` is zero.
    pub fn from_decimal_str(val: &str) -> Result<BigInt> {
        let malformed = |reason| BigIntError::MalformedInput { input: val.to_string(), reason };

        if val.is_empty() {
            return Err(malformed("zero length BigInt"));
        }
        let (negative, digits) = match val.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, val),
        };
        if digits.is_empty() {
            return Err(malformed("no digits after the sign character"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("illegal character, expected decimal digits"));
        }
        trace!(digits = digits.len(), negative, "parsing decimal literal");

        // the first group takes the odd digits so every later group is full
        let mut first_group_len = digits.len() % DIGITS_PER_LIMB;
        if first_group_len == 0 {
            first_group_len = DIGITS_PER_LIMB;
        }
        let (group, mut rest) = digits.split_at(first_group_len);
        let mut result = BigInt::from(BigInt::group_value(group));

        while !rest.is_empty() {
            let (group, tail) = rest.split_at(DIGITS_PER_LIMB);
            result = result.mul_u32(DECIMAL_RADIX) + BigInt::from(BigInt::group_value(group));
            rest = tail;
        }

        if negative {
            Ok(-result)
        } else {
            Ok(result)
        }
    }

    /// Value of at most `DIGITS_PER_LIMB` ASCII digits.
    fn group_value(group: &str) -> u32 {
        group.bytes().fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
    }
}
