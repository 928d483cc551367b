//! Big Rational \
//! This crate provides:
//! - [`BigRational`]: Immutable, exact rational numbers. Every value is kept in lowest terms with a positive denominator,
//!   numerator and denominator being arbitrary-precision [`BigInt`]s.
//! - [`RationalError`]: the two ways building a rational can fail (zero denominator, malformed text).
//!
//! # Example
//! ```
//! use big_rational::BigRational;
//!
//! let half = BigRational::div_by(1, 2)?;
//! let third = BigRational::div_by(1, 3)?;
//! assert_eq!((&half + &third).to_string(), "5/6");
//! assert_eq!("117/1098".parse::<BigRational>()?.to_string(), "13/122");
//! assert!(half.within(&third, &BigRational::div_by(2, 3)?));
//! # Ok::<(), big_rational::RationalError>(())
//! ```

mod big_rational;
mod big_rational_cache;
mod error;

pub use crate::big_rational::BigRational;
pub use crate::error::{RationalError, Result};
pub use num_bigint::BigInt;
