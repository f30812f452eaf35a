//! Accept header parsing

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::config::NegotiationConfig;
use crate::media_range::MediaRange;
use crate::parser;
use crate::ranking;

/// Represents an Accept header as media ranges ranked from most to least
/// preferred.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AcceptHeader {
	media_ranges: Vec<MediaRange>,
	#[cfg_attr(feature = "serde", serde(skip))]
	reject_zero_quality: bool,
}

impl AcceptHeader {
	/// Parses an Accept header string into an AcceptHeader struct
	///
	/// Malformed clauses are dropped; an empty header accepts everything.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("text/html;q=0.9, application/json");
	/// assert_eq!(accept.len(), 2);
	/// // Sorted by quality
	/// assert_eq!(accept.media_ranges()[0].subtype, "json");
	/// assert_eq!(accept.media_ranges()[1].quality, 0.9);
	///
	/// let any = AcceptHeader::parse("");
	/// assert_eq!(any.len(), 1);
	/// assert!(any.media_ranges()[0].is_wildcard());
	/// ```
	pub fn parse(header: &str) -> Self {
		Self::parse_with(header, &NegotiationConfig::default())
	}

	/// Parses an Accept header using the given settings.
	pub fn parse_with(header: &str, config: &NegotiationConfig) -> Self {
		let mut media_ranges = parser::parse_media_ranges(header, config.max_media_ranges());
		ranking::rank(&mut media_ranges);

		Self {
			media_ranges,
			reject_zero_quality: config.reject_zero_quality(),
		}
	}

	/// Ranked media ranges, most preferred first.
	pub fn media_ranges(&self) -> &[MediaRange] {
		&self.media_ranges
	}

	/// Iterates over the ranked media ranges.
	pub fn iter(&self) -> std::slice::Iter<'_, MediaRange> {
		self.media_ranges.iter()
	}

	pub fn len(&self) -> usize {
		self.media_ranges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.media_ranges.is_empty()
	}

	/// Checks whether a single media type is acceptable at all.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("text/html, application/xml;q=0.9");
	/// assert!(accept.accepts("text/html"));
	/// assert!(accept.accepts("text"));
	/// assert!(accept.accepts("*/xml"));
	/// assert!(!accept.accepts("image/png"));
	/// assert!(!accept.accepts(""));
	/// ```
	pub fn accepts(&self, candidate: &str) -> bool {
		let candidate = MediaRange::from_candidate(candidate);
		self.acceptable().any(|range| range.matches(&candidate))
	}

	/// Picks the best candidate for this header.
	///
	/// Preferences are tried in rank order; for each one the candidates are
	/// scanned in the order given and the first match wins. The winning
	/// candidate is returned exactly as passed in.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("text/html, application/xhtml+xml, */*;q=0.8");
	/// assert_eq!(accept.negotiate(&["image/png", "text/html"]), Some("text/html"));
	/// assert_eq!(accept.negotiate(&["image/png", "image/jpeg"]), Some("image/png"));
	///
	/// let strict = AcceptHeader::parse("application/json");
	/// assert_eq!(strict.negotiate(&["text/html"]), None);
	/// ```
	pub fn negotiate<'a, S: AsRef<str>>(&self, candidates: &'a [S]) -> Option<&'a str> {
		let available = parse_candidates(candidates);
		self.best_match_position(&available)
			.map(|position| candidates[position].as_ref())
	}

	/// Finds the best matching media type from available options
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::{AcceptHeader, MediaRange};
	///
	/// let accept = AcceptHeader::parse("application/json, text/html");
	/// let available = vec![
	///     MediaRange::new("text", "html"),
	///     MediaRange::new("application", "xml"),
	/// ];
	/// let best = accept.find_best_match(&available);
	/// assert_eq!(best.map(|m| m.subtype.as_str()), Some("html"));
	///
	/// let no_match = AcceptHeader::parse("application/json");
	/// assert!(no_match.find_best_match(&available).is_none());
	/// ```
	pub fn find_best_match<'a>(&self, available: &'a [MediaRange]) -> Option<&'a MediaRange> {
		self.best_match_position(available)
			.map(|position| &available[position])
	}

	/// Finds every acceptable candidate, ordered by the preference that first
	/// selects it. Each candidate appears at most once.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("text/*;q=0.5, application/json");
	/// let matches = accept.find_all_matches(&["text/plain", "image/png", "application/json"]);
	/// assert_eq!(matches, ["application/json", "text/plain"]);
	/// ```
	pub fn find_all_matches<'a, S: AsRef<str>>(&self, candidates: &'a [S]) -> Vec<&'a str> {
		let available = parse_candidates(candidates);
		let mut taken = vec![false; available.len()];
		let mut matches = Vec::new();

		for range in self.acceptable() {
			for (position, candidate) in available.iter().enumerate() {
				if !taken[position] && range.matches(candidate) {
					taken[position] = true;
					matches.push(candidates[position].as_ref());
				}
			}
		}

		matches
	}

	/// Returns the quality of the highest-ranked preference matching the
	/// candidate, or `None` when it is not acceptable.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("text/html, */*;q=0.1");
	/// assert_eq!(accept.quality_of("text/html"), Some(1.0));
	/// assert_eq!(accept.quality_of("image/png"), Some(0.1));
	/// ```
	pub fn quality_of(&self, candidate: &str) -> Option<f32> {
		let candidate = MediaRange::from_candidate(candidate);
		self.acceptable()
			.find(|range| range.matches(&candidate))
			.map(|range| range.quality)
	}

	/// Ranges that take part in matching.
	fn acceptable(&self) -> impl Iterator<Item = &MediaRange> {
		let reject_zero_quality = self.reject_zero_quality;
		self.media_ranges
			.iter()
			.filter(move |range| !(reject_zero_quality && range.quality == 0.0))
	}

	fn best_match_position(&self, available: &[MediaRange]) -> Option<usize> {
		for range in self.acceptable() {
			if let Some(position) = available.iter().position(|candidate| range.matches(candidate)) {
				tracing::trace!(
					preference = %range,
					candidate = %available[position],
					"Negotiated media type"
				);
				return Some(position);
			}
		}
		None
	}
}

fn parse_candidates<S: AsRef<str>>(candidates: &[S]) -> Vec<MediaRange> {
	candidates
		.iter()
		.map(|candidate| MediaRange::from_candidate(candidate.as_ref()))
		.collect()
}

impl<'a> IntoIterator for &'a AcceptHeader {
	type Item = &'a MediaRange;
	type IntoIter = std::slice::Iter<'a, MediaRange>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Display for AcceptHeader {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, range) in self.media_ranges.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", range)?;
		}
		Ok(())
	}
}

impl FromStr for AcceptHeader {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_ranks_by_quality_then_specificity() {
		let accept = AcceptHeader::parse("text/*;q=0.9, */*, text/html;q=0.9, application/json");
		let ranked: Vec<String> = accept.iter().map(ToString::to_string).collect();
		assert_eq!(
			ranked,
			["application/json", "*/*", "text/html;q=0.9", "text/*;q=0.9"]
		);
	}

	#[rstest]
	fn test_find_best_match_prefers_header_rank_over_offer_order() {
		let accept = AcceptHeader::parse("application/json;q=0.5, text/html");
		let available = vec![
			MediaRange::new("application", "json"),
			MediaRange::new("text", "html"),
			MediaRange::new("application", "xml"),
		];
		let best = accept.find_best_match(&available);
		assert_eq!(best.map(MediaRange::essence).as_deref(), Some("text/html"));
	}

	#[rstest]
	fn test_negotiate_returns_candidate_verbatim() {
		let accept = AcceptHeader::parse("text/html");
		let candidates = vec!["TEXT/ ".to_string(), "text/html".to_string()];
		assert_eq!(accept.negotiate(&candidates), Some("TEXT/ "));
	}

	#[rstest]
	fn test_negotiate_without_candidates() {
		let accept = AcceptHeader::parse("text/html");
		let candidates: [&str; 0] = [];
		assert_eq!(accept.negotiate(&candidates), None);
	}

	#[rstest]
	fn test_empty_candidate_is_distinguishable_from_no_match() {
		let accept = AcceptHeader::parse("");
		assert_eq!(accept.negotiate(&[""]), Some(""));
		assert_eq!(AcceptHeader::parse("text/html").negotiate(&[""]), None);
	}

	#[rstest]
	fn test_zero_quality_matches_by_default() {
		let accept = AcceptHeader::parse("text/html;q=0");
		assert!(accept.accepts("text/html"));
		assert_eq!(accept.quality_of("text/html"), Some(0.0));
	}

	#[rstest]
	fn test_reject_zero_quality() {
		let config = NegotiationConfig::default().with_reject_zero_quality(true);
		let accept = AcceptHeader::parse_with("text/html;q=0, */*;q=0.1", &config);
		assert_eq!(accept.len(), 2);
		assert!(accept.accepts("text/html"));
		assert_eq!(accept.quality_of("text/html"), Some(0.1));

		let accept = AcceptHeader::parse_with("text/html;q=0", &config);
		assert!(!accept.accepts("text/html"));
		assert_eq!(accept.negotiate(&["text/html"]), None);
	}

	#[rstest]
	fn test_display() {
		let accept = AcceptHeader::parse("text/html;q=0.9, application/json;v=2");
		assert_eq!(accept.to_string(), "application/json;v=2, text/html;q=0.9");
	}

	#[rstest]
	fn test_from_str() {
		let accept: AcceptHeader = "text/plain".parse().unwrap();
		assert!(accept.accepts("text/plain"));
	}

	#[rstest]
	fn test_iterates_in_rank_order() {
		let accept = AcceptHeader::parse("*/*, text/*, text/plain");
		let essences: Vec<String> = accept.iter().map(MediaRange::essence).collect();
		assert_eq!(essences, ["text/plain", "text/*", "*/*"]);
		assert_eq!((&accept).into_iter().count(), 3);
	}

	#[cfg(feature = "serde")]
	#[rstest]
	fn test_serialize_as_list() {
		let accept = AcceptHeader::parse("text/html;q=0.5");
		let json = serde_json::to_value(&accept).unwrap();
		assert_eq!(json[0]["type"], "text");
		assert_eq!(json[0]["quality"], 0.5);
	}
}
