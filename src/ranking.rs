//! Preference ordering for parsed media ranges
//!
//! Entries are ordered by quality, then by how specific their type and subtype
//! are, then by how many extension parameters they carry. Anything still tied
//! keeps its position in the header.

use std::cmp::Ordering;

use crate::media_range::MediaRange;

/// How specific a media range is, from least to most specific.
///
/// A concrete type with a wildcard subtype (`text/*`) outranks a wildcard type
/// with a concrete subtype (`*/plain`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
	/// `*/*`
	Any,
	/// `*/plain`
	AnyType,
	/// `text/*`
	AnySubtype,
	/// `text/plain`
	Exact,
}

impl Specificity {
	/// Classifies a `(type, subtype)` pair.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_accept::ranking::Specificity;
	///
	/// assert_eq!(Specificity::of("text", "html"), Specificity::Exact);
	/// assert_eq!(Specificity::of("text", "*"), Specificity::AnySubtype);
	/// assert_eq!(Specificity::of("*", "html"), Specificity::AnyType);
	/// assert_eq!(Specificity::of("*", "*"), Specificity::Any);
	/// assert!(Specificity::AnySubtype > Specificity::AnyType);
	/// ```
	pub fn of(main_type: &str, subtype: &str) -> Self {
		let any_type = main_type == crate::matcher::WILDCARD;
		let any_subtype = subtype == crate::matcher::WILDCARD;
		match (any_type, any_subtype) {
			(false, false) => Self::Exact,
			(false, true) => Self::AnySubtype,
			(true, false) => Self::AnyType,
			(true, true) => Self::Any,
		}
	}
}

/// Compares two media ranges by preference.
///
/// `Ordering::Less` means `a` is preferred over `b`, so the result can be fed
/// straight into `sort_by`.
pub fn compare(a: &MediaRange, b: &MediaRange) -> Ordering {
	b.quality
		.total_cmp(&a.quality)
		.then_with(|| b.specificity().cmp(&a.specificity()))
		.then_with(|| b.extensions.len().cmp(&a.extensions.len()))
}

/// Sorts media ranges from most to least preferred.
///
/// The sort is stable: entries that compare equal stay in header order.
///
/// # Examples
///
/// ```
/// use reinhardt_accept::MediaRange;
/// use reinhardt_accept::ranking::rank;
///
/// let mut ranges = vec![
///     MediaRange::new("*", "*"),
///     MediaRange::new("text", "*"),
///     MediaRange::new("text", "html").with_quality(0.5),
///     MediaRange::new("text", "plain"),
/// ];
/// rank(&mut ranges);
///
/// let order: Vec<String> = ranges.iter().map(|r| r.essence()).collect();
/// assert_eq!(order, ["text/plain", "text/*", "*/*", "text/html"]);
/// ```
pub fn rank(ranges: &mut [MediaRange]) {
	ranges.sort_by(compare);
}
