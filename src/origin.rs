use once_cell::sync::Lazy;
use regex_automata::meta::Regex;

static ORIGIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://(.*)").expect("origin pattern is a valid regex"));

/// Returns the ASCII lower-cased part of an `Origin` value that follows `http://`
/// or `https://`, or `None` when the value does not use either scheme.
///
/// Everything after the scheme separator is kept, so `http://Example.com:8080`
/// yields `example.com:8080`.
pub fn extract_host(origin: &str) -> Option<String> {
    let mut caps = ORIGIN_PATTERN.create_captures();
    ORIGIN_PATTERN.captures(origin, &mut caps);
    let span = caps.get_group(1)?;
    Some(origin[span.range()].to_ascii_lowercase())
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
