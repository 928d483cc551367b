//! Runs the worked examples and reports whether each one holds.
//! Set `RUST_LOG=big_rational=trace` to watch every normalization.

use std::error::Error;

use big_rational::{BigInt, BigRational};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let half = BigRational::div_by(1, 2)?;
    let third = BigRational::div_by(1, 3)?;
    let two_thirds = BigRational::div_by(2, 3)?;

    let checks = [
        ("1/2 + 1/3 == 5/6", &half + &third == BigRational::div_by(5, 6)?),
        ("1/2 - 1/3 == 1/6", &half - &third == BigRational::div_by(1, 6)?),
        ("1/2 * 1/3 == 1/6", &half * &third == BigRational::div_by(1, 6)?),
        ("(1/2) / (1/3) == 3/2", half.divide(&third)? == BigRational::div_by(3, 2)?),
        ("-(1/2) == -1/2", -&half == BigRational::div_by(-1, 2)?),
        ("2/1 prints as 2", BigRational::div_by(2, 1)?.to_string() == "2"),
        ("-2/4 prints as -1/2", BigRational::div_by(-2, 4)?.to_string() == "-1/2"),
        ("117/1098 parses to 13/122", "117/1098".parse::<BigRational>()?.to_string() == "13/122"),
        ("1/2 < 2/3", half < two_thirds),
        ("1/2 in [1/3, 2/3]", half.within(&third, &two_thirds)),
        ("2000000000/4000000000 == 1/2", BigRational::div_by_i64(2000000000, 4000000000)? == half),
        (
            "40-digit fraction reduces to 1/2",
            BigRational::from_bigints(
                "912016490186296920119201192141970416029".parse::<BigInt>()?,
                "1824032980372593840238402384283940832058".parse::<BigInt>()?,
            )? == half,
        ),
    ];

    for (name, holds) in checks {
        info!(holds, "{}", name);
    }
    Ok(())
}
