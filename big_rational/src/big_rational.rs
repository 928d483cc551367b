//! # BigRational
//! Immutable, exact rational numbers. A value is always stored in lowest terms and its
//! denominator is always positive, so the sign lives on the numerator.
//! # Example
//! ```
//! use big_rational::BigRational;
//!
//! let a = BigRational::div_by(1, 2).unwrap();
//! let b: BigRational = "-2/4".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("-b = {}", -&b);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Neg,
};
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use tracing::{debug, trace};

use crate::big_rational_cache::*;
use crate::error::{RationalError, Result};

/// A fraction `numerator / denominator` in lowest terms.
///
/// Equality and hashing work on the normalized pair, so equal values always hash alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigRational {
    numerator: BigInt,
    denominator: BigInt,
}

// 实现构造
impl BigRational {
    /// The normalizing factory every value goes through.
    ///
    /// Fails with [`RationalError::ZeroDenominator`] if `denominator` is zero.
    pub fn create(numerator: BigInt, denominator: BigInt) -> Result<BigRational> {
        if denominator.is_zero() {
            debug!(%numerator, "rejecting rational with zero denominator");
            return Err(RationalError::ZeroDenominator);
        }
        Ok(BigRational::reduce(numerator, denominator))
    }

    /// Reduces to lowest terms and moves the sign onto the numerator.
    /// `denominator` must be non-zero.
    pub(crate) fn reduce(numerator: BigInt, denominator: BigInt) -> BigRational {
        debug_assert!(!denominator.is_zero());
        // gcd(0, d) = |d|, so zero always comes out as 0/1
        let gcd = numerator.magnitude().gcd(denominator.magnitude());
        let sign = numerator.sign() * denominator.sign();
        let reduced = BigRational {
            numerator: BigInt::from_biguint(sign, numerator.magnitude() / &gcd),
            denominator: BigInt::from(denominator.magnitude() / &gcd),
        };
        trace!(
            %numerator, %denominator,
            reduced_numerator = %reduced.numerator,
            reduced_denominator = %reduced.denominator,
            "normalized rational"
        );
        reduced
    }

    /// `numerator / denominator` from machine integers.
    pub fn div_by(numerator: i32, denominator: i32) -> Result<BigRational> {
        BigRational::create(numerator.into(), denominator.into())
    }

    pub fn div_by_i64(numerator: i64, denominator: i64) -> Result<BigRational> {
        BigRational::create(numerator.into(), denominator.into())
    }

    pub fn from_bigints(numerator: BigInt, denominator: BigInt) -> Result<BigRational> {
        BigRational::create(numerator, denominator)
    }

    fn from_integer(n: BigInt) -> BigRational {
        BigRational { numerator: n, denominator: BIG_ONE.clone() }
    }
}

// 杂项访问函数
impl BigRational {
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Always positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        match self.numerator.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    pub fn abs(&self) -> BigRational {
        BigRational::reduce(self.numerator.abs(), self.denominator.clone())
    }

    /// `denominator / numerator`. Zero has no reciprocal.
    pub fn reciprocal(&self) -> Result<BigRational> {
        BigRational::create(self.denominator.clone(), self.numerator.clone())
    }
}

// 实现运算
impl BigRational {
    /// Sum over the common denominator `a.den * b.den`.
    pub fn add(&self, other: &BigRational) -> BigRational {
        let base = &self.denominator * &other.denominator;
        let first = &self.numerator * (&base / &self.denominator);
        let second = &other.numerator * (&base / &other.denominator);
        BigRational::reduce(first + second, base)
    }

    pub fn subtract(&self, other: &BigRational) -> BigRational {
        BigRational::add(self, &other.negate())
    }

    pub fn multiply(&self, other: &BigRational) -> BigRational {
        BigRational::reduce(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// Fails with [`RationalError::ZeroDenominator`] when `other` is zero.
    pub fn divide(&self, other: &BigRational) -> Result<BigRational> {
        Ok(self.multiply(&other.reciprocal()?))
    }

    pub fn negate(&self) -> BigRational {
        BigRational::reduce(-&self.numerator, self.denominator.clone())
    }

    /// Sign of `self - other`.
    pub fn compare(&self, other: &BigRational) -> Ordering {
        match self.subtract(other).numerator.sign() {
            Sign::Minus => Ordering::Less,
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => Ordering::Greater,
        }
    }

    /// `low <= self <= high`.
    pub fn within(&self, low: &BigRational, high: &BigRational) -> bool {
        (low..=high).contains(&self)
    }
}

// 实现打印
impl Display for BigRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// 实现解析
impl BigRational {
    /// Parses `n` or `n/d`. A non-reduced `n/d` is accepted and reduced.
    pub fn parse(text: &str) -> Result<BigRational> {
        let parts: Vec<&str> = text.split('/').collect();
        match parts.as_slice() {
            [n] => Ok(BigRational::from_integer(parse_integer(text, n)?)),
            [n, d] => BigRational::create(parse_integer(text, n)?, parse_integer(text, d)?),
            _ => {
                debug!(text, parts = parts.len(), "rational has too many parts");
                Err(RationalError::format(text))
            }
        }
    }
}

/// An optionally signed run of ASCII digits. `text` is the whole input, for the error.
fn parse_integer(text: &str, part: &str) -> Result<BigInt> {
    let (negative, digits) = match part.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, part.strip_prefix('+').unwrap_or(part)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        debug!(text, part, "not a decimal integer");
        return Err(RationalError::format(text));
    }
    let magnitude = digits.parse::<BigInt>().map_err(|_| RationalError::format(text))?;
    Ok(if negative { -magnitude } else { magnitude })
}

impl FromStr for BigRational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self> {
        BigRational::parse(s)
    }
}

// 实现比较
impl PartialOrd for BigRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigRational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// 实现类型转换
impl From<BigInt> for BigRational {
    fn from(val: BigInt) -> Self {
        BigRational::from_integer(val)
    }
}

macro_rules! impl_integer_to_big_rational {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigRational {
        fn from(val: $i) -> Self {
            match i64::try_from(val).ok().and_then(small_integer) {
                Some(cached) => cached,
                None => BigRational::from_integer(BigInt::from(val)),
            }
        }
    }
    )*
    };
}
impl_integer_to_big_rational!(i8, i16, i32, i64, u8, u16, u32, u64);

impl TryFrom<(i64, i64)> for BigRational {
    type Error = RationalError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self> {
        BigRational::div_by_i64(numerator, denominator)
    }
}

impl TryFrom<(BigInt, BigInt)> for BigRational {
    type Error = RationalError;

    fn try_from((numerator, denominator): (BigInt, BigInt)) -> Result<Self> {
        BigRational::create(numerator, denominator)
    }
}

impl Default for BigRational {
    fn default() -> Self {
        ZERO.clone()
    }
}

impl Zero for BigRational {
    fn zero() -> Self {
        ZERO.clone()
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for BigRational {
    fn one() -> Self {
        ONE.clone()
    }
}

// 实现运算符
macro_rules! impl_binary_op {
    ($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident, $method: ident) => {
    impl $Op for BigRational {
        type Output = BigRational;

        fn $op(self, rhs: Self) -> Self::Output {
            BigRational::$method(&self, &rhs)
        }
    }

    impl $Op<&BigRational> for BigRational {
        type Output = BigRational;

        fn $op(self, rhs: &BigRational) -> Self::Output {
            BigRational::$method(&self, rhs)
        }
    }

    impl $Op for &BigRational {
        type Output = BigRational;

        fn $op(self, rhs: Self) -> Self::Output {
            BigRational::$method(self, rhs)
        }
    }

    impl $OpAssign for BigRational {
        fn $op_assign(&mut self, rhs: Self) {
            *self = BigRational::$method(self, &rhs);
        }
    }

    impl $OpAssign<&BigRational> for BigRational {
        fn $op_assign(&mut self, rhs: &BigRational) {
            *self = BigRational::$method(self, rhs);
        }
    }
    };
}
impl_binary_op!(Add, add, AddAssign, add_assign, add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, subtract);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, multiply);
impl_binary_op!(Div, div, DivAssign, div_assign, divide_or_panic);

impl BigRational {
    /// Backs the `/` operators, which cannot return a `Result`.
    fn divide_or_panic(&self, other: &BigRational) -> BigRational {
        match self.divide(other) {
            Ok(quotient) => quotient,
            Err(err) => panic!("attempt to divide by zero: {}", err),
        }
    }
}

// 实现取反
impl Neg for BigRational {
    type Output = BigRational;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &BigRational {
    type Output = BigRational;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Sum for BigRational {
    fn sum<I: Iterator<Item = BigRational>>(iter: I) -> Self {
        iter.fold(ZERO.clone(), |acc, x| BigRational::add(&acc, &x))
    }
}

impl<'a> Sum<&'a BigRational> for BigRational {
    fn sum<I: Iterator<Item = &'a BigRational>>(iter: I) -> Self {
        iter.fold(ZERO.clone(), |acc, x| BigRational::add(&acc, x))
    }
}

impl Product for BigRational {
    fn product<I: Iterator<Item = BigRational>>(iter: I) -> Self {
        iter.fold(ONE.clone(), |acc, x| acc.multiply(&x))
    }
}

impl<'a> Product<&'a BigRational> for BigRational {
    fn product<I: Iterator<Item = &'a BigRational>>(iter: I) -> Self {
        iter.fold(ONE.clone(), |acc, x| acc.multiply(x))
    }
}
