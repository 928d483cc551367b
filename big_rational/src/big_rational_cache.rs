use lazy_static::*;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::BigRational;

/// Integers in `-MAX_CONSTANT..=MAX_CONSTANT` are served from [`SMALL_CACHE`].
pub const MAX_CONSTANT: i64 = 16;

lazy_static! {
    pub static ref BIG_ZERO: BigInt = BigInt::zero();
    pub static ref BIG_ONE: BigInt = BigInt::one();
    pub static ref ZERO: BigRational = BigRational::reduce(BIG_ZERO.clone(), BIG_ONE.clone());
    pub static ref ONE: BigRational = BigRational::reduce(BIG_ONE.clone(), BIG_ONE.clone());
    // index i holds the integer i - MAX_CONSTANT
    pub static ref SMALL_CACHE: Vec<BigRational> = (-MAX_CONSTANT..=MAX_CONSTANT)
        .map(|n| BigRational::reduce(BigInt::from(n), BIG_ONE.clone()))
        .collect();
}

/// Cached `n/1`, if `n` is small enough to live in the cache.
pub fn small_integer(n: i64) -> Option<BigRational> {
    if (-MAX_CONSTANT..=MAX_CONSTANT).contains(&n) {
        Some(SMALL_CACHE[(n + MAX_CONSTANT) as usize].clone())
    } else {
        None
    }
}
