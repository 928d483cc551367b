use thiserror::Error;

/// Errors raised while building a [`BigRational`](crate::BigRational).
///
/// Both kinds are input errors: nothing is retried and no partial value is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator was supplied, directly or as the reciprocal of zero in a division.
    #[error("denominator cannot be zero")]
    ZeroDenominator,
    /// The text is not `<integer>` or `<integer>/<integer>`.
    #[error("unable to parse rational from {input:?}")]
    Format { input: String },
}

impl RationalError {
    pub(crate) fn format(input: &str) -> Self {
        RationalError::Format { input: input.to_string() }
    }

    pub fn is_zero_denominator(&self) -> bool {
        matches!(self, RationalError::ZeroDenominator)
    }
}

pub type Result<T> = std::result::Result<T, RationalError>;

#[cfg(test)]
mod tests {
    use super::RationalError;

    #[test]
    fn test_messages() {
        assert_eq!(RationalError::ZeroDenominator.to_string(), "denominator cannot be zero");
        assert_eq!(
            RationalError::format("1/2/3").to_string(),
            "unable to parse rational from \"1/2/3\""
        );
        assert!(RationalError::ZeroDenominator.is_zero_denominator());
        assert!(!RationalError::format("").is_zero_denominator());
    }
}
