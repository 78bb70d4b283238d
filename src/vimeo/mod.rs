use crate::core::{Extractor, Service};

pub mod utils;

pub use utils::{build_embed_url, build_watch_url, is_vimeo_url, parse_id};

/// Vimeo extractor implementing the Extractor trait
#[derive(Debug, Clone)]
pub struct VimeoExtractor;

impl Extractor for VimeoExtractor {
    fn matches(&self, url: &str) -> bool {
        is_vimeo_url(url)
    }

    fn extract(&self, url: &str) -> Option<String> {
        parse_id(url)
    }

    fn service(&self) -> Service {
        Service::Vimeo
    }
}
