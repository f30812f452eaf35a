//! Symmetric wildcard matching between media types
//!
//! A wildcard on either side satisfies the other side's concrete token, so a
//! candidate such as `text/*` matches a preference of `text/html` and the
//! other way round. Weight and extension parameters play no part here.

/// The wildcard token accepted in type and subtype position.
pub const WILDCARD: &str = "*";

/// Checks whether a single type or subtype component matches.
///
/// # Examples
///
/// ```
/// use reinhardt_accept::matcher::component_matches;
///
/// assert!(component_matches("text", "TEXT"));
/// assert!(component_matches("*", "image"));
/// assert!(component_matches("image", "*"));
/// assert!(!component_matches("text", "image"));
/// ```
pub fn component_matches(preference: &str, candidate: &str) -> bool {
	preference == WILDCARD || candidate == WILDCARD || preference.eq_ignore_ascii_case(candidate)
}

/// Checks whether two `(type, subtype)` pairs match.
///
/// # Examples
///
/// ```
/// use reinhardt_accept::matcher::matches;
///
/// assert!(matches(("text", "html"), ("text", "*")));
/// assert!(matches(("*", "*"), ("application", "json")));
/// assert!(matches(("*", "xml"), ("application", "xml")));
/// assert!(!matches(("text", "html"), ("text", "plain")));
/// ```
pub fn matches(preference: (&str, &str), candidate: (&str, &str)) -> bool {
	component_matches(preference.0, candidate.0) && component_matches(preference.1, candidate.1)
}
