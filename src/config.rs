//! Negotiation settings
//!
//! The defaults reproduce the plain behavior of [`parse`](crate::parse) and
//! [`negotiate`](crate::negotiate). Settings can be built in code or
//! deserialized from a project's configuration.

/// Settings for [`MediaTypeNegotiator`](crate::MediaTypeNegotiator).
///
/// # Examples
///
/// ```
/// use reinhardt_accept::NegotiationConfig;
///
/// let config = NegotiationConfig::default();
/// assert!(!config.reject_zero_quality());
/// assert_eq!(config.max_media_ranges(), None);
/// assert_eq!(config.fallback(), None);
///
/// let strict = NegotiationConfig::default()
///     .with_reject_zero_quality(true)
///     .with_max_media_ranges(64)
///     .with_fallback("application/json");
/// assert!(strict.reject_zero_quality());
/// assert_eq!(strict.max_media_ranges(), Some(64));
/// assert_eq!(strict.fallback(), Some("application/json"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NegotiationConfig {
	reject_zero_quality: bool,
	max_media_ranges: Option<usize>,
	fallback: Option<String>,
}

impl NegotiationConfig {
	/// Whether `q=0` ranges are treated as "not acceptable".
	///
	/// Off by default: a `q=0` range still matches, it just ranks last.
	pub fn reject_zero_quality(&self) -> bool {
		self.reject_zero_quality
	}

	/// Maximum number of media ranges read from one header, if any.
	///
	/// Unlimited by default. The cap applies in header order, before ranking.
	pub fn max_media_ranges(&self) -> Option<usize> {
		self.max_media_ranges
	}

	/// Media type returned when nothing offered is acceptable.
	pub fn fallback(&self) -> Option<&str> {
		self.fallback.as_deref()
	}

	/// Sets whether `q=0` ranges are excluded from matching.
	pub fn with_reject_zero_quality(mut self, reject: bool) -> Self {
		self.reject_zero_quality = reject;
		self
	}

	/// Sets the media range cap.
	pub fn with_max_media_ranges(mut self, max: usize) -> Self {
		self.max_media_ranges = Some(max);
		self
	}

	/// Removes the media range cap.
	pub fn without_max_media_ranges(mut self) -> Self {
		self.max_media_ranges = None;
		self
	}

	/// Sets the fallback media type.
	pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
		self.fallback = Some(fallback.into());
		self
	}
}
