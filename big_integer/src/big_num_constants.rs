/// Width of one limb in bits.
pub const LIMB_BITS: u32 = u32::BITS;

/// Extension word of a negative value.
pub const LIMB_MAX: u32 = u32::MAX;

/// Largest power of ten that fits in one limb.
pub const DECIMAL_RADIX: u32 = 1_000_000_000;

/// Number of decimal digits carried by one `DECIMAL_RADIX` group.
pub const DIGITS_PER_LIMB: usize = 9;

/// `POS_CACHE` and `NEG_CACHE` hold every value with magnitude up to this bound.
pub const MAX_CONSTANT: usize = 16;
