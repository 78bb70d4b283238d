use crate::core::{Extractor, Service};

pub mod utils;

pub use utils::{build_embed_url, build_watch_url, is_youtube_url, parse_id, strip_parameters};

/// YouTube extractor implementing the Extractor trait
#[derive(Debug, Clone)]
pub struct YoutubeExtractor;

impl Extractor for YoutubeExtractor {
    fn matches(&self, url: &str) -> bool {
        is_youtube_url(url)
    }

    fn extract(&self, url: &str) -> Option<String> {
        parse_id(url)
    }

    fn service(&self) -> Service {
        Service::Youtube
    }
}
