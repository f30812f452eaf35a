//! Media type negotiation based on the Accept header

use crate::accept::AcceptHeader;
use crate::config::NegotiationConfig;

/// Media type negotiator for the Accept header
///
/// Holds a [`NegotiationConfig`] so the same settings apply to every request.
/// Each call parses the header afresh; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct MediaTypeNegotiator {
	config: NegotiationConfig,
}

impl MediaTypeNegotiator {
	/// Creates a negotiator with default settings
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::MediaTypeNegotiator;
	///
	/// let negotiator = MediaTypeNegotiator::new();
	/// assert!(!negotiator.config().reject_zero_quality());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a negotiator with custom settings
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::{MediaTypeNegotiator, NegotiationConfig};
	///
	/// let negotiator = MediaTypeNegotiator::with_config(
	///     NegotiationConfig::default().with_fallback("application/json"),
	/// );
	/// assert_eq!(negotiator.config().fallback(), Some("application/json"));
	/// ```
	pub fn with_config(config: NegotiationConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &NegotiationConfig {
		&self.config
	}

	/// Parses an Accept header with this negotiator's settings.
	pub fn parse(&self, accept: &str) -> AcceptHeader {
		AcceptHeader::parse_with(accept, &self.config)
	}

	/// Negotiates the best of the offered media types
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::MediaTypeNegotiator;
	///
	/// let negotiator = MediaTypeNegotiator::new();
	/// let offered = ["text/plain", "text/html", "application/xml"];
	///
	/// // Header order decides between equally weighted preferences
	/// let result = negotiator.negotiate("application/xml, text/html", &offered);
	/// assert_eq!(result, Some("application/xml"));
	///
	/// // Quality-based selection
	/// let result = negotiator.negotiate("application/xml;q=0.5, text/*", &offered);
	/// assert_eq!(result, Some("text/plain"));
	///
	/// assert_eq!(negotiator.negotiate("image/png", &offered), None);
	/// ```
	pub fn negotiate<'a, S: AsRef<str>>(&self, accept: &str, offered: &'a [S]) -> Option<&'a str> {
		self.parse(accept).negotiate(offered)
	}

	/// Negotiates like [`negotiate`](Self::negotiate), returning the configured
	/// fallback when nothing offered is acceptable
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::{MediaTypeNegotiator, NegotiationConfig};
	///
	/// let negotiator = MediaTypeNegotiator::with_config(
	///     NegotiationConfig::default().with_fallback("application/json"),
	/// );
	/// let result = negotiator.negotiate_or_fallback("image/png", &["text/html"]);
	/// assert_eq!(result, Some("application/json"));
	/// ```
	pub fn negotiate_or_fallback<'a, S: AsRef<str>>(
		&'a self,
		accept: &str,
		offered: &'a [S],
	) -> Option<&'a str> {
		self.negotiate(accept, offered).or_else(|| {
			tracing::debug!(accept, "No acceptable media type offered, using fallback");
			self.config.fallback()
		})
	}

	/// Checks whether a single media type is acceptable for the header.
	pub fn accepts(&self, accept: &str, media_type: &str) -> bool {
		self.parse(accept).accepts(media_type)
	}
}
