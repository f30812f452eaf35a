//! # Reinhardt Accept
//!
//! `Accept` header parsing and media type negotiation for the Reinhardt
//! framework.
//!
//! ## Overview
//!
//! - **Parsing**: a raw header value becomes an [`AcceptHeader`], a list of
//!   [`MediaRange`]s ranked from most to least preferred. Whitespace around
//!   delimiters is ignored; clauses with a negative or non-numeric `q` are
//!   dropped and `q` values above 1 are clamped.
//! - **Ranking**: quality first, then specificity (`text/plain` > `text/*` >
//!   `*/plain` > `*/*`), then number of extension parameters. Ties keep header
//!   order.
//! - **Matching**: `*` on either side matches anything, so offering `text/*`
//!   satisfies a client asking for `text/html` and the other way round.
//! - **Negotiation**: the first offered type matching the highest-ranked
//!   preference wins and is returned verbatim.
//!
//! Header extraction, charset/encoding/language negotiation and response
//! rendering live elsewhere in the framework.
//!
//! ## Example
//!
//! ```
//! use reinhardt_accept::{negotiate, parse};
//!
//! let accept = parse("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8");
//! assert!(accept.accepts("image/png"));
//!
//! let offered = ["application/json", "text/html"];
//! assert_eq!(negotiate("text/html, application/json;q=0.9", &offered), Some("text/html"));
//! assert_eq!(negotiate("image/*", &offered), None);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize` for parsed headers, `Serialize` and
//!   `Deserialize` for [`NegotiationConfig`]

pub mod accept;
pub mod config;
pub mod error;
pub mod matcher;
pub mod media_range;
pub mod negotiator;
pub mod parser;
pub mod ranking;

pub use accept::AcceptHeader;
pub use config::NegotiationConfig;
pub use error::MediaRangeError;
pub use media_range::MediaRange;
pub use negotiator::MediaTypeNegotiator;
pub use ranking::Specificity;

/// Parses an `Accept` header into ranked media ranges.
///
/// Shorthand for [`AcceptHeader::parse`].
pub fn parse(header: &str) -> AcceptHeader {
	AcceptHeader::parse(header)
}

/// Picks the best offered media type for an `Accept` header.
///
/// Returns `None` when nothing offered is acceptable, including when nothing
/// is offered at all.
///
/// # Examples
///
/// ```
/// use reinhardt_accept::negotiate;
///
/// // An empty header accepts anything, so the first offer wins
/// assert_eq!(
///     negotiate("", &["application/octet-stream", "image/jpeg"]),
///     Some("application/octet-stream")
/// );
///
/// let none: [&str; 0] = [];
/// assert_eq!(negotiate("text/html", &none), None);
/// ```
pub fn negotiate<'a, S: AsRef<str>>(header: &str, candidates: &'a [S]) -> Option<&'a str> {
	AcceptHeader::parse(header).negotiate(candidates)
}
