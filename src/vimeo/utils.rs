use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static EVENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://vimeo\.com/event/([0-9]+)$").unwrap());
static PRIMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://vimeo\.com/([0-9]+)").unwrap());
static STRUCTURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?imR)https?://player.vimeo.com/video/[0-9]+$|https?://vimeo.com/channels|groups|album",
    )
    .unwrap()
});
static CLIP_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)clip_id=").unwrap());

/// Check if a sanitized input belongs to Vimeo
pub fn is_vimeo_url(url: &str) -> bool {
    url.contains("vimeo")
}

/// Parse video ID from a sanitized Vimeo url
pub fn parse_id(url: &str) -> Option<String> {
    let mut url = url;

    if let Some((head, _)) = url.split_once('#') {
        url = head;
    }

    // name.swf?clip_id=ID keeps its query string
    if !url.contains("clip_id=")
        && let Some((head, _)) = url.split_once('?')
    {
        url = head;
    }

    if let Some(id) = EVENT_RE.captures(url).and_then(|c| c.get(1)) {
        trace!(id = id.as_str(), "vimeo event id extracted");
        return Some(id.as_str().to_string());
    }

    if let Some(id) = PRIMARY_RE.captures(url).and_then(|c| c.get(1)) {
        trace!(id = id.as_str(), "vimeo id extracted");
        return Some(id.as_str().to_string());
    }

    // player, channels, groups and albums end with the id
    if STRUCTURE_RE.is_match(url) {
        let id = url.rsplit('/').next().unwrap_or_default();
        trace!(id, "vimeo id extracted from path");
        return Some(id.to_string());
    }

    if CLIP_ID_RE.is_match(url) {
        let (_, rest) = url.split_once("clip_id=")?;
        let id = rest.split('&').next().unwrap_or_default();
        trace!(id, "vimeo clip_id extracted");
        return Some(id.to_string());
    }

    None
}

/// Construct Vimeo page URL from video ID
pub fn build_watch_url(video_id: &str) -> String {
    format!("https://vimeo.com/{}", video_id)
}

/// Construct Vimeo player URL from video ID
pub fn build_embed_url(video_id: &str) -> String {
    format!("https://player.vimeo.com/video/{}", video_id)
}
