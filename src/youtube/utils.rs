use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static TIME_HASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?R)#t=.*$").unwrap());
static PROTOCOL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());
static SHORTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube://|youtu\.be/|y2u\.be/").unwrap());
static PARAM_V_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"v=|vi=").unwrap());
static INLINE_V_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/v/|/vi/|/watch/").unwrap());
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/user/[a-zA-Z0-9]*$").unwrap());
static ATTRIBUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?R)/attribution_link\?.*v%3D([^%&]*)(%26|&|$)").unwrap());

const YOUTUBE_MARKERS: [&str; 4] = ["youtube", "youtu.be", "y2u.be", "i.ytimg."];

/// Check if a sanitized input belongs to YouTube
pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_MARKERS.iter().any(|m| url.contains(m))
}

/// Cut an id candidate at the first `?`, then `/`, then `&`
pub fn strip_parameters(candidate: &str) -> &str {
    let mut id = candidate;
    for delimiter in ['?', '/', '&'] {
        if let Some(pos) = id.find(delimiter) {
            id = &id[..pos];
        }
    }
    id
}

fn found(rule: &'static str, candidate: &str) -> Option<String> {
    let id = strip_parameters(candidate);
    trace!(rule, id, "youtube id extracted");
    Some(id.to_string())
}

/// Text between the first and second occurrence of a marker
fn after_marker<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    url.split(marker).nth(1)
}

const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// `/user/` followed, on the same line, by anything but `videos`
fn is_user_timeline(url: &str) -> bool {
    url.match_indices("/user/").any(|(pos, marker)| {
        let rest = &url[pos + marker.len()..];
        let line = rest.split(LINE_TERMINATORS).next().unwrap_or_default();
        !line.contains("videos")
    })
}

/// Parse video ID from a sanitized YouTube url.
///
/// The checks run in a fixed priority order and the first recognized
/// url shape decides the result, even when it yields no id.
pub fn parse_id(url: &str) -> Option<String> {
    let url = url.replacen("-nocookie", "", 1);
    let url = TIME_HASH_RE.replace(&url, "");
    let url = PROTOCOL_RE.replace(&url, "");
    let url = url.as_ref();

    // youtu.be/ID, y2u.be/ID, youtube://ID
    if let Some(rest) = SHORTCODE_RE.split(url).nth(1) {
        return found("shortcode", rest);
    }

    if let Some(rest) = after_marker(url, "/shorts/") {
        return found("shorts", rest);
    }

    // watch?v=ID, ?vi=ID
    if let Some(rest) = PARAM_V_RE.split(url).nth(1) {
        let value = rest.split('&').next().unwrap_or_default();
        return found("query", value);
    }

    if let Some(rest) = INLINE_V_RE.split(url).nth(1) {
        return found("path", rest);
    }

    // i.ytimg.com/an_webp/ID/mqdefault_6s.webp
    if let Some(rest) = after_marker(url, "/an_webp/") {
        return found("an_webp", rest);
    }

    if let Some(rest) = after_marker(url, "/e/") {
        return found("e", rest);
    }

    if let Some(rest) = after_marker(url, "/embed/") {
        return found("embed", rest);
    }

    // Channel page without a video
    if USERNAME_RE.is_match(url) {
        trace!(url, "youtube user page without video");
        return None;
    }

    // user/NAME#p/u/1/ID
    if is_user_timeline(url) {
        let last = url.rsplit('/').next().unwrap_or_default();
        if last.is_empty() {
            return None;
        }
        return found("user", last);
    }

    if let Some(caps) = ATTRIBUTION_RE.captures(url) {
        let value = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        return found("attribution_link", value);
    }

    if let Some(rest) = after_marker(url, "/live/") {
        return found("live", rest);
    }

    None
}

/// Construct YouTube watch URL from video ID
pub fn build_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Construct YouTube embed URL from video ID
pub fn build_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_parameters() {
        assert_eq!(strip_parameters("ABC12304?feature=youtube_gdata_player"), "ABC12304");
        assert_eq!(strip_parameters("ABC1230/"), "ABC1230");
        assert_eq!(strip_parameters("G-3YxlZIhus&feature=channel"), "G-3YxlZIhus");
        assert_eq!(strip_parameters("abc&x/y?z"), "abc");
        assert_eq!(strip_parameters("?abc"), "");
    }

    #[test]
    fn test_strip_parameters_unchanged() {
        for id in ["ABC12301", "G-3YxlZIhus", "MYDcdp-VNmQ", ""] {
            assert_eq!(strip_parameters(id), id);
            assert_eq!(strip_parameters(strip_parameters(id)), id);
        }
    }

    #[test]
    fn test_is_youtube_url() {
        assert!(is_youtube_url("https://youtube.com/watch?v=1"));
        assert!(is_youtube_url("youtu.be/P1230"));
        assert!(is_youtube_url("http://y2u.be/ABC12304"));
        assert!(is_youtube_url("https://i.ytimg.com/vi/0okagl9U2eo/hqdefault.jpg"));
        assert!(!is_youtube_url("https://YOUTUBE.com/watch?v=1"));
        assert!(!is_youtube_url("https://vimeo.com/1230897"));
        assert!(!is_youtube_url("https://xytimg.com/vi/1"));
    }

    #[test]
    fn test_parse_id_preprocessing() {
        assert_eq!(
            parse_id("youtube-nocookie.com/ytscreeningroom?v=ABC12300").as_deref(),
            Some("ABC12300")
        );
        assert_eq!(
            parse_id("https://youtube.com/watch?v=G-3YxlZIhus#t=0m10s").as_deref(),
            Some("G-3YxlZIhus")
        );
        assert_eq!(parse_id("HTTPS://youtube.com/e/E1230").as_deref(), Some("E1230"));
    }

    #[test]
    fn test_parse_id_priority() {
        // shortcode wins over the query parameter
        assert_eq!(
            parse_id("youtu.be/SHORT1?v=QUERY1").as_deref(),
            Some("SHORT1")
        );
        // query parameter wins over the path segment
        assert_eq!(
            parse_id("youtube.com/embed/EMBED1?v=QUERY2").as_deref(),
            Some("QUERY2")
        );
        // first recognized shape decides, even with nothing after it
        assert_eq!(parse_id("youtube.com/shorts/").as_deref(), Some(""));
    }

    #[test]
    fn test_parse_id_user() {
        assert_eq!(parse_id("youtube.com/user/ThreeDaysGraceVideos"), None);
        assert_eq!(parse_id("youtube.com/user/ThreeDaysGraceVideos/videos"), None);
        assert_eq!(parse_id("youtube.com/user/name/"), None);
        assert_eq!(
            parse_id("youtube.com/user/username#p/u/1/ABC12302?rel=0").as_deref(),
            Some("ABC12302")
        );
    }

    #[test]
    fn test_parse_id_user_line_terminators() {
        // `videos` on a later line does not hide the timeline id
        for url in [
            "youtube.com/user/x\rvideos/ID1",
            "youtube.com/user/x\nvideos/ID1",
            "youtube.com/user/x\u{2028}videos/ID1",
        ] {
            assert_eq!(parse_id(url).as_deref(), Some("ID1"), "url: {url:?}");
        }
        assert_eq!(parse_id("youtube.com/user/x#videos/ID1"), None);
    }

    #[test]
    fn test_parse_id_time_hash_stops_at_line_end() {
        assert_eq!(
            parse_id("youtube.com/user/name#t=1\r/ID2").as_deref(),
            Some("ID2")
        );
    }

    #[test]
    fn test_parse_id_attribution_link() {
        assert_eq!(
            parse_id("youtube.com/attribution_link?a=JdfC0C9V6ZI&u=%2Fwatch%3Fv%3DABC12301")
                .as_deref(),
            Some("ABC12301")
        );
    }

    #[test]
    fn test_parse_id_not_found() {
        assert_eq!(parse_id("youtube.com"), None);
        assert_eq!(parse_id("youtube.com/feed/subscriptions"), None);
    }

    #[test]
    fn test_build_urls() {
        assert_eq!(build_watch_url("abc"), "https://www.youtube.com/watch?v=abc");
        assert_eq!(build_embed_url("abc"), "https://www.youtube.com/embed/abc");
    }
}
