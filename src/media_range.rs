//! A single parsed preference from an `Accept` header

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::MediaRangeError;
use crate::matcher::{self, WILDCARD};
use crate::parser;
use crate::ranking::Specificity;

/// One media range from an `Accept` header, e.g. `text/html;level=1;q=0.8`.
///
/// Entries are immutable once built. Extension parameters keep their header
/// order for display, but equality ignores that order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MediaRange {
	/// Top-level type (e.g. `text`), or `*`
	#[cfg_attr(feature = "serde", serde(rename = "type"))]
	pub main_type: String,
	/// Subtype (e.g. `html`, `xhtml+xml`), or `*`
	pub subtype: String,
	/// Quality factor (0.0 to 1.0)
	pub quality: f32,
	/// Parameters other than `q`
	pub extensions: IndexMap<String, String>,
}

impl MediaRange {
	/// Creates a media range with quality 1.0 and no extensions.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::MediaRange;
	///
	/// let html = MediaRange::new("text", "html");
	/// assert_eq!(html.main_type, "text");
	/// assert_eq!(html.subtype, "html");
	/// assert_eq!(html.quality, 1.0);
	/// assert!(html.extensions.is_empty());
	/// ```
	pub fn new(main_type: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			main_type: main_type.into(),
			subtype: subtype.into(),
			quality: 1.0,
			extensions: IndexMap::new(),
		}
	}

	/// The `*/*` range, which is what an absent header stands for.
	pub fn any() -> Self {
		Self::new(WILDCARD, WILDCARD)
	}

	/// Returns a copy with the given quality, clamped to `[0.0, 1.0]`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::MediaRange;
	///
	/// assert_eq!(MediaRange::new("text", "html").with_quality(0.8).quality, 0.8);
	/// assert_eq!(MediaRange::new("text", "html").with_quality(1.5).quality, 1.0);
	/// ```
	pub fn with_quality(mut self, quality: f32) -> Self {
		// `-0` folds to `0`
		self.quality = if quality.is_nan() {
			0.0
		} else {
			quality.clamp(0.0, 1.0).abs()
		};
		self
	}

	/// Returns a copy with an extra extension parameter.
	pub fn with_extension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.extensions.insert(name.into(), value.into());
		self
	}

	/// Parses a candidate media type offered by the server.
	///
	/// Only the `type/subtype` part is read. A missing side becomes `*`, so
	/// `text/` and `text` both mean `text/*`. A blank candidate is kept as an
	/// empty type and subtype and matches nothing but wildcards.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::MediaRange;
	///
	/// let text = MediaRange::from_candidate("text");
	/// assert_eq!(text.essence(), "text/*");
	///
	/// let xml = MediaRange::from_candidate("/xml");
	/// assert_eq!(xml.essence(), "*/xml");
	///
	/// let empty = MediaRange::from_candidate("");
	/// assert_eq!(empty.main_type, "");
	/// assert_eq!(empty.subtype, "");
	/// ```
	pub fn from_candidate(candidate: &str) -> Self {
		let essence = candidate.split(';').next().unwrap_or_default();
		if essence.trim().is_empty() {
			return Self::new("", "");
		}
		let (main_type, subtype) = parser::split_essence(essence);
		Self::new(main_type, subtype)
	}

	/// Returns `type/subtype` without parameters.
	pub fn essence(&self) -> String {
		format!("{}/{}", self.main_type, self.subtype)
	}

	/// Returns the ranking tier of this range.
	pub fn specificity(&self) -> Specificity {
		Specificity::of(&self.main_type, &self.subtype)
	}

	/// Returns true for `*/*`.
	pub fn is_wildcard(&self) -> bool {
		self.specificity() == Specificity::Any
	}

	/// Checks whether this range matches another, treating `*` on either side
	/// as matching anything. Quality and extensions are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::MediaRange;
	///
	/// let html = MediaRange::new("text", "html");
	/// assert!(html.matches(&MediaRange::new("text", "*")));
	/// assert!(MediaRange::new("*", "*").matches(&html));
	/// assert!(!html.matches(&MediaRange::new("text", "plain")));
	/// ```
	pub fn matches(&self, other: &MediaRange) -> bool {
		matcher::matches(
			(self.main_type.as_str(), self.subtype.as_str()),
			(other.main_type.as_str(), other.subtype.as_str()),
		)
	}
}

impl Default for MediaRange {
	fn default() -> Self {
		Self::any()
	}
}

impl fmt::Display for MediaRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.subtype)?;
		for (name, value) in &self.extensions {
			if value.is_empty() {
				write!(f, ";{}", name)?;
			} else {
				write!(f, ";{}={}", name, value)?;
			}
		}
		if self.quality < 1.0 {
			write!(f, ";q={}", self.quality)?;
		}
		Ok(())
	}
}

impl FromStr for MediaRange {
	type Err = MediaRangeError;

	/// Parses one media range clause, reporting why it would be dropped.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::{MediaRange, MediaRangeError};
	///
	/// let range: MediaRange = "text/html; level=1; q=0.5".parse().unwrap();
	/// assert_eq!(range.quality, 0.5);
	/// assert_eq!(range.extensions["level"], "1");
	///
	/// assert!(matches!(
	///     "text/html;q=oops".parse::<MediaRange>(),
	///     Err(MediaRangeError::InvalidQuality(_))
	/// ));
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parser::parse_clause(s)
	}
}
