use big_rational::{BigInt, BigRational, RationalError};

fn r(n: i32, d: i32) -> BigRational {
    BigRational::div_by(n, d).unwrap()
}

#[test]
fn test_sum() {
    assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
}

#[test]
fn test_difference() {
    assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
}

#[test]
fn test_product() {
    assert_eq!(r(1, 2) * r(1, 3), r(1, 6));
}

#[test]
fn test_quotient() {
    assert_eq!(r(1, 2) / r(1, 3), r(3, 2));
    assert_eq!(r(1, 2).divide(&r(1, 3)), Ok(r(3, 2)));
}

#[test]
fn test_negation() {
    assert_eq!(-r(1, 2), r(-1, 2));
}

#[test]
fn test_to_string() {
    assert_eq!(r(2, 1).to_string(), "2");
    assert_eq!(r(-2, 4).to_string(), "-1/2");
}

#[test]
fn test_parse_reduces() {
    let parsed: BigRational = "117/1098".parse().unwrap();
    assert_eq!(parsed, r(13, 122));
    assert_eq!(parsed.to_string(), "13/122");
}

#[test]
fn test_ordering_and_range() {
    let half = r(1, 2);
    let third = r(1, 3);
    let two_thirds = r(2, 3);
    assert!(half < two_thirds);
    assert!(half.within(&third, &two_thirds));
    assert!((third..=two_thirds).contains(&half));
}

#[test]
fn test_large_magnitudes() {
    assert_eq!(BigRational::div_by_i64(2000000000, 4000000000).unwrap(), r(1, 2));

    let n: BigInt = "912016490186296920119201192141970416029".parse().unwrap();
    let d: BigInt = "1824032980372593840238402384283940832058".parse().unwrap();
    assert_eq!(BigRational::from_bigints(n, d).unwrap(), r(1, 2));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(r(7, 3).divide(&r(0, 1)), Err(RationalError::ZeroDenominator));
    assert_eq!(BigRational::div_by(7, 0), Err(RationalError::ZeroDenominator));
}
