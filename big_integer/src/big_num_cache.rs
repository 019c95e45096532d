use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw_parts(false, vec![  ]),
        BigInt::from_raw_parts(false, vec![1 ]),
        BigInt::from_raw_parts(false, vec![2 ]),
        BigInt::from_raw_parts(false, vec![3 ]),
        BigInt::from_raw_parts(false, vec![4 ]),
        BigInt::from_raw_parts(false, vec![5 ]),
        BigInt::from_raw_parts(false, vec![6 ]),
        BigInt::from_raw_parts(false, vec![7 ]),
        BigInt::from_raw_parts(false, vec![8 ]),
        BigInt::from_raw_parts(false, vec![9 ]),
        BigInt::from_raw_parts(false, vec![10]),
        BigInt::from_raw_parts(false, vec![11]),
        BigInt::from_raw_parts(false, vec![12]),
        BigInt::from_raw_parts(false, vec![13]),
        BigInt::from_raw_parts(false, vec![14]),
        BigInt::from_raw_parts(false, vec![15]),
        BigInt::from_raw_parts(false, vec![16]),
    ];
    // -k is stored as the single limb !(k - 1); -1 normalizes to no limbs at all
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw_parts(false, vec![   ]),
        BigInt::from_raw_parts(true , vec![!0 ]),
        BigInt::from_raw_parts(true , vec![!1 ]),
        BigInt::from_raw_parts(true , vec![!2 ]),
        BigInt::from_raw_parts(true , vec![!3 ]),
        BigInt::from_raw_parts(true , vec![!4 ]),
        BigInt::from_raw_parts(true , vec![!5 ]),
        BigInt::from_raw_parts(true , vec![!6 ]),
        BigInt::from_raw_parts(true , vec![!7 ]),
        BigInt::from_raw_parts(true , vec![!8 ]),
        BigInt::from_raw_parts(true , vec![!9 ]),
        BigInt::from_raw_parts(true , vec![!10]),
        BigInt::from_raw_parts(true , vec![!11]),
        BigInt::from_raw_parts(true , vec![!12]),
        BigInt::from_raw_parts(true , vec![!13]),
        BigInt::from_raw_parts(true , vec![!14]),
        BigInt::from_raw_parts(true , vec![!15]),
    ];
    /// `10^9`, the group radix used by the decimal codec.
    pub static ref DECIMAL_RADIX_BIG: BigInt = BigInt::from_raw_parts(false, vec![DECIMAL_RADIX]);
}
