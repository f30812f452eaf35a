//! Tokenizer for `Accept` header values
//!
//! The grammar is read loosely: whitespace (including tabs and line breaks) is
//! insignificant around every delimiter, and clauses that cannot be understood
//! are dropped instead of failing the whole header.

use crate::error::MediaRangeError;
use crate::matcher::WILDCARD;
use crate::media_range::MediaRange;

/// Name of the parameter carrying the quality factor.
const QUALITY_PARAM: &str = "q";

/// Splits a header into media ranges, in header order.
///
/// An empty header yields a single `*/*` range. Clauses with an unusable
/// quality value are dropped. When `limit` is set, clauses past it are ignored.
///
/// # Examples
///
/// ```
/// use reinhardt_accept::parser::parse_media_ranges;
///
/// let ranges = parse_media_ranges("text/html, application/xml;q=0.9, */*;q=oops", None);
/// assert_eq!(ranges.len(), 2);
/// assert_eq!(ranges[1].quality, 0.9);
///
/// let any = parse_media_ranges("  ", None);
/// assert_eq!(any.len(), 1);
/// assert!(any[0].is_wildcard());
/// ```
pub fn parse_media_ranges(header: &str, limit: Option<usize>) -> Vec<MediaRange> {
	let header = header.trim();
	if header.is_empty() {
		return vec![MediaRange::any()];
	}

	let mut ranges = Vec::new();
	let mut seen = 0usize;
	for clause in header.split(',') {
		if clause.trim().is_empty() {
			continue;
		}
		if let Some(limit) = limit
			&& seen >= limit
		{
			tracing::warn!(limit, "Accept header has too many media ranges, ignoring the rest");
			break;
		}
		seen += 1;

		match parse_clause(clause) {
			Ok(range) => ranges.push(range),
			Err(error) => {
				tracing::debug!(clause = clause.trim(), %error, "Dropping media range");
			}
		}
	}
	ranges
}

/// Parses one comma-separated clause: `type/subtype` followed by any number of
/// `;name=value` parameters.
pub(crate) fn parse_clause(clause: &str) -> Result<MediaRange, MediaRangeError> {
	let clause = clause.trim();
	if clause.is_empty() {
		return Err(MediaRangeError::Empty);
	}

	let mut segments = clause.split(';');
	let essence = segments.next().unwrap_or_default().trim();
	if essence.is_empty() {
		return Err(MediaRangeError::MissingType(clause.to_string()));
	}

	let (main_type, subtype) = split_essence(essence);
	let mut range = MediaRange::new(main_type, subtype);

	for segment in segments {
		let segment = segment.trim();
		if segment.is_empty() {
			continue;
		}
		let (name, value) = match segment.split_once('=') {
			Some((name, value)) => (name.trim(), value.trim()),
			None => (segment, ""),
		};
		if name == QUALITY_PARAM {
			range.quality = parse_quality(value)?;
		} else {
			range
				.extensions
				.insert(name.to_string(), value.to_string());
		}
	}

	Ok(range)
}

/// Splits `type/subtype` on the first `/`, trimming both sides. A missing or
/// empty side becomes `*`.
pub(crate) fn split_essence(essence: &str) -> (String, String) {
	let (main_type, subtype) = match essence.split_once('/') {
		Some((main_type, subtype)) => (main_type.trim(), subtype.trim()),
		None => (essence.trim(), ""),
	};
	(or_wildcard(main_type), or_wildcard(subtype))
}

fn or_wildcard(token: &str) -> String {
	if token.is_empty() {
		WILDCARD.to_string()
	} else {
		token.to_string()
	}
}

/// Reads a quality value. Values above 1 are clamped; negative and
/// non-numeric values are rejected.
fn parse_quality(raw: &str) -> Result<f32, MediaRangeError> {
	let quality: f32 = raw
		.parse()
		.map_err(|_| MediaRangeError::InvalidQuality(raw.to_string()))?;

	if quality.is_nan() {
		return Err(MediaRangeError::InvalidQuality(raw.to_string()));
	}
	if quality < 0.0 {
		return Err(MediaRangeError::NegativeQuality(raw.to_string()));
	}
	if quality > 1.0 {
		tracing::debug!(quality = raw, "Clamping quality value to 1");
		return Ok(1.0);
	}
	// `-0` folds to `0`
	Ok(quality.abs())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_clause_with_parameters() {
		let range = parse_clause("text/html; level=1; q=0.4; charset=utf-8").unwrap();
		assert_eq!(range.main_type, "text");
		assert_eq!(range.subtype, "html");
		assert_eq!(range.quality, 0.4);
		let names: Vec<&str> = range.extensions.keys().map(String::as_str).collect();
		assert_eq!(names, ["level", "charset"]);
	}

	#[rstest]
	fn test_parse_clause_tolerates_whitespace_everywhere() {
		let range = parse_clause("\n\t application \n / \t xml \n ; \n q \n = \n 0.9 \n").unwrap();
		assert_eq!(range.main_type, "application");
		assert_eq!(range.subtype, "xml");
		assert_eq!(range.quality, 0.9);
		assert!(range.extensions.is_empty());
	}

	#[rstest]
	fn test_quality_param_is_case_sensitive() {
		let range = parse_clause("text/html;Q=0.5").unwrap();
		assert_eq!(range.quality, 1.0);
		assert_eq!(range.extensions["Q"], "0.5");
	}

	#[rstest]
	fn test_parameter_without_value() {
		let range = parse_clause("text/html;flag;;").unwrap();
		assert_eq!(range.extensions["flag"], "");
		assert_eq!(range.extensions.len(), 1);
	}

	#[rstest]
	#[case("1", 1.0)]
	#[case("0.5", 0.5)]
	#[case("0", 0.0)]
	#[case("-0", 0.0)]
	#[case("1.05", 1.0)]
	#[case("1000", 1.0)]
	#[case("inf", 1.0)]
	fn test_parse_quality_accepts(#[case] raw: &str, #[case] expected: f32) {
		let quality = parse_quality(raw).unwrap();
		assert_eq!(quality, expected);
		assert!(quality.is_sign_positive());
	}

	#[rstest]
	#[case("-1.05", MediaRangeError::NegativeQuality("-1.05".to_string()))]
	#[case("1.0=0.5", MediaRangeError::InvalidQuality("1.0=0.5".to_string()))]
	#[case("INVALID", MediaRangeError::InvalidQuality("INVALID".to_string()))]
	#[case("", MediaRangeError::InvalidQuality(String::new()))]
	#[case("0.5 0.6", MediaRangeError::InvalidQuality("0.5 0.6".to_string()))]
	#[case("NaN", MediaRangeError::InvalidQuality("NaN".to_string()))]
	fn test_parse_quality_rejects(#[case] raw: &str, #[case] expected: MediaRangeError) {
		assert_eq!(parse_quality(raw), Err(expected));
	}

	#[rstest]
	fn test_bad_quality_drops_the_whole_clause() {
		assert!(parse_clause("application/xml;q=1.0=0.5").is_err());
		assert!(parse_clause("text/html;q").is_err());
	}

	#[rstest]
	fn test_missing_type() {
		assert_eq!(
			parse_clause(" ;q=0.5"),
			Err(MediaRangeError::MissingType(";q=0.5".to_string()))
		);
		assert_eq!(parse_clause("  "), Err(MediaRangeError::Empty));
	}

	#[rstest]
	fn test_empty_clauses_are_skipped() {
		let ranges = parse_media_ranges("text/html,, ,application/json", None);
		let essences: Vec<String> = ranges.iter().map(MediaRange::essence).collect();
		assert_eq!(essences, ["text/html", "application/json"]);
	}

	#[rstest]
	fn test_only_separators_yield_nothing() {
		assert!(parse_media_ranges(" , ,", None).is_empty());
	}

	#[rstest]
	fn test_limit_truncates() {
		let ranges = parse_media_ranges("a/a, b/b;q=bad, c/c, d/d", Some(3));
		let essences: Vec<String> = ranges.iter().map(MediaRange::essence).collect();
		assert_eq!(essences, ["a/a", "c/c"]);
	}

	#[rstest]
	#[case("text/html", ("text", "html"))]
	#[case("text", ("text", "*"))]
	#[case("text/", ("text", "*"))]
	#[case("/html", ("*", "html"))]
	#[case("/", ("*", "*"))]
	#[case(" text  /  html ", ("text", "html"))]
	fn test_split_essence(#[case] input: &str, #[case] expected: (&str, &str)) {
		let (main_type, subtype) = split_essence(input);
		assert_eq!((main_type.as_str(), subtype.as_str()), expected);
	}
}
