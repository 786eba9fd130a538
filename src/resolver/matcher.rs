//! Argument matchers
//!
//! Pure functions that classify how well a user-typed argument matches a
//! candidate identifier or display name.

use super::MatchType;
use regex::Regex;

/// Match an argument against a canonical identifier.
///
/// Identifiers are long, so users commonly type a short unambiguous prefix;
/// a prefix match is accepted but ranks below an exact one.
pub fn match_uuid(arg: &str, candidate_id: &str) -> MatchType {
    if arg == candidate_id {
        return MatchType::Exact;
    }
    if !arg.is_empty() && candidate_id.starts_with(arg) {
        return MatchType::Prefix;
    }
    MatchType::None
}

/// Match an argument against a human-entered display name.
///
/// Shell completion escapes whitespace in suggestions, so an argument is
/// compared against both the raw name and its escaped form. Arguments
/// containing `*` or `?` are treated as wildcard patterns over the name.
pub fn match_title(arg: &str, name: &str) -> MatchType {
    if name.is_empty() {
        return MatchType::None;
    }
    let escaped = escape_whitespace(name);
    if arg == name || arg == escaped {
        return MatchType::Exact;
    }
    let folded = arg.to_lowercase();
    if folded == name.to_lowercase() || folded == escaped.to_lowercase() {
        return MatchType::CaseInsensitive;
    }
    if is_wildcard_pattern(arg) {
        if let Some(pattern) = wildcard_regex(arg) {
            if pattern.is_match(name) {
                return MatchType::WildCard;
            }
        }
    }
    MatchType::None
}

/// Whether an argument contains wildcard metacharacters.
pub fn is_wildcard_pattern(arg: &str) -> bool {
    arg.contains('*') || arg.contains('?')
}

/// Escape whitespace the way shell completion word-breaking does.
pub(crate) fn escape_whitespace(name: &str) -> String {
    name.replace(' ', "\\ ")
}

/// Compile a `*`/`?` wildcard argument into an anchored regex.
fn wildcard_regex(arg: &str) -> Option<Regex> {
    let mut pattern = String::with_capacity(arg.len() + 8);
    pattern.push('^');
    for ch in arg.chars() {
        match ch {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0u8; 4]))),
        }
    }
    pattern.push('$');
    Regex::new(&pattern).ok()
}
