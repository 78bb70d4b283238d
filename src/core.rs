#[cfg(feature = "vimeo")]
use crate::vimeo::VimeoExtractor;
#[cfg(feature = "youtube")]
use crate::youtube::YoutubeExtractor;

use serde::{Deserialize, Serialize};
pub use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Supported video services, in registry order
#[derive(
    EnumIter,
    Display,
    EnumString,
    AsRefStr,
    Debug,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Copy,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Service {
    #[cfg(feature = "youtube")]
    Youtube,
    #[cfg(feature = "vimeo")]
    Vimeo,
}

impl Service {
    pub fn extractor(self) -> &'static dyn Extractor {
        match self {
            #[cfg(feature = "youtube")]
            Service::Youtube => &YoutubeExtractor,
            #[cfg(feature = "vimeo")]
            Service::Vimeo => &VimeoExtractor,
        }
    }

    /// Canonical page url for a video id
    pub fn watch_url(self, id: &str) -> String {
        match self {
            #[cfg(feature = "youtube")]
            Service::Youtube => crate::youtube::build_watch_url(id),
            #[cfg(feature = "vimeo")]
            Service::Vimeo => crate::vimeo::build_watch_url(id),
        }
    }

    /// Player url suitable for an iframe `src`
    pub fn embed_url(self, id: &str) -> String {
        match self {
            #[cfg(feature = "youtube")]
            Service::Youtube => crate::youtube::build_embed_url(id),
            #[cfg(feature = "vimeo")]
            Service::Vimeo => crate::vimeo::build_embed_url(id),
        }
    }
}

/// Result of a lookup.
///
/// `service` is set whenever a registered service recognized the input,
/// `id` only when that service also found an identifier in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

impl VideoMetadata {
    pub fn new(id: Option<String>, service: Service) -> Self {
        Self {
            id,
            service: Some(service),
        }
    }

    /// Neither a service nor an id
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn watch_url(&self) -> Option<String> {
        match (&self.id, self.service) {
            (Some(id), Some(service)) => Some(service.watch_url(id)),
            _ => None,
        }
    }

    pub fn embed_url(&self) -> Option<String> {
        match (&self.id, self.service) {
            (Some(id), Some(service)) => Some(service.embed_url(id)),
            _ => None,
        }
    }
}

/// Detection and id extraction for one video service
pub trait Extractor: Send + Sync {
    /// Check if the sanitized input belongs to this service
    fn matches(&self, url: &str) -> bool;

    /// Extract the video id from a sanitized input this extractor matched
    fn extract(&self, url: &str) -> Option<String>;

    /// Get service identifier
    fn service(&self) -> Service;
}
