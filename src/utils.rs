use regex::Regex;
use std::sync::LazyLock;

static IFRAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<iframe").unwrap());
static SRC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?R)src="(.*?)""#).unwrap());

/// Get the value of the first `src="..."` attribute in a piece of markup
pub fn get_src(input: &str) -> Option<&str> {
    SRC_RE
        .captures(input)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Reduce raw input (url, iframe markup) to the string the extractors match on
pub fn sanitize_url(input: &str) -> String {
    let mut sanitized = input;

    if IFRAME_RE.is_match(sanitized) {
        sanitized = get_src(sanitized).unwrap_or_default();
    }

    // Surrounding whitespace, linefeeds or a byte order mark
    let sanitized = sanitized.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    // Literal replace, so `http://www.` is hit as well as a bare `/www.` path
    sanitized.replacen("/www.", "/", 1)
}
