//! Port range expansion.
//!
//! The switch lists port membership in a compact form:
//!
//! ```text
//! 1-24,lag1-8     every copper port plus all eight LAGs
//! 8,23            two single ports
//! ---             no ports
//! ```
//!
//! Each comma-separated segment is expanded on its own and the results are
//! concatenated in order. A segment that is not a well-formed range, or
//! spans more than [`MAX_RANGE_SPAN`] ports, is kept verbatim as a single
//! token.

/// Placeholder the switch prints for an empty port set.
pub const EMPTY_SET: &str = "---";

/// Widest range that is expanded. No switch has anywhere near this many ports.
pub const MAX_RANGE_SPAN: u32 = 4096;

/// Expand a port list into individual port tokens.
pub fn expand(ports: &str) -> Vec<String> {
    ports
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && *segment != EMPTY_SET)
        .flat_map(expand_segment)
        .collect()
}

fn expand_segment(segment: &str) -> Vec<String> {
    match parse_range(segment) {
        Some((prefix, start, end)) if end.saturating_sub(start) <= MAX_RANGE_SPAN => {
            (start..=end).map(|n| format!("{prefix}{n}")).collect()
        }
        _ => vec![segment.to_string()],
    }
}

/// Split `lag1-8` or `lag1-lag8` into (`lag`, 1, 8).
fn parse_range(segment: &str) -> Option<(&str, u32, u32)> {
    let (low, high) = segment.split_once('-')?;
    let (prefix, start) = split_numeric_suffix(low.trim())?;
    let (high_prefix, end) = split_numeric_suffix(high.trim())?;
    if !high_prefix.is_empty() && high_prefix != prefix {
        return None;
    }
    Some((prefix, start, end))
}

/// Split a token into its non-numeric prefix and decimal suffix.
fn split_numeric_suffix(token: &str) -> Option<(&str, u32)> {
    let prefix = token.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &token[prefix.len()..];
    if digits.is_empty() {
        return None;
    }
    Some((prefix, digits.parse().ok()?))
}
