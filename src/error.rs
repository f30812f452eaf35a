//! Errors reported when a single media range cannot be parsed

/// Reasons a media range clause is rejected.
///
/// The lenient header parser never surfaces these: it drops the clause and
/// moves on. They are returned by the strict [`MediaRange`](crate::MediaRange)
/// `FromStr` implementation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaRangeError {
	#[error("Media range is empty")]
	Empty,

	#[error("Media range is missing a type: '{0}'")]
	MissingType(String),

	#[error("Invalid quality value: '{0}'")]
	InvalidQuality(String),

	#[error("Quality value must not be negative: '{0}'")]
	NegativeQuality(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(MediaRangeError::Empty, "Media range is empty")]
	#[case(
		MediaRangeError::InvalidQuality("1.0=0.5".to_string()),
		"Invalid quality value: '1.0=0.5'"
	)]
	#[case(
		MediaRangeError::NegativeQuality("-1.05".to_string()),
		"Quality value must not be negative: '-1.05'"
	)]
	fn test_error_display(#[case] error: MediaRangeError, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}
}
