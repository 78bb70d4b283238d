pub mod core;
pub mod error;
pub mod utils;
#[cfg(feature = "vimeo")]
pub mod vimeo;
#[cfg(feature = "youtube")]
pub mod youtube;

pub use crate::core::{Extractor, Service, VideoMetadata};
pub use crate::error::{Result, VideoIdError};
pub use utils::{get_src, sanitize_url};
#[cfg(feature = "vimeo")]
pub use vimeo::VimeoExtractor;
#[cfg(feature = "youtube")]
pub use youtube::YoutubeExtractor;

use serde_json::Value;
use tracing::debug;

/// Registered services, checked in order
pub static EXTRACTORS: &[&dyn Extractor] = &[
    #[cfg(feature = "youtube")]
    &YoutubeExtractor,
    #[cfg(feature = "vimeo")]
    &VimeoExtractor,
];

/// First registered extractor whose predicate accepts the sanitized input
pub fn find_extractor(sanitized: &str) -> Option<&'static dyn Extractor> {
    EXTRACTORS.iter().copied().find(|e| e.matches(sanitized))
}

/// Extract the video id and service from a url or embed snippet
pub fn get_video_id(input: &str) -> VideoMetadata {
    let sanitized = sanitize_url(input);
    debug!(input, sanitized = sanitized.as_str(), "sanitized input");

    let Some(extractor) = find_extractor(&sanitized) else {
        debug!("no service matched");
        return VideoMetadata::empty();
    };

    let service = extractor.service();
    let id = extractor.extract(&sanitized);
    debug!(%service, id = id.as_deref(), "service matched");
    VideoMetadata::new(id, service)
}

/// Same as [`get_video_id`] for dynamically typed input.
///
/// Only JSON strings are accepted; any other value is an
/// [`VideoIdError::InvalidInput`].
pub fn get_video_id_value(input: &Value) -> Result<VideoMetadata> {
    match input {
        Value::String(s) => Ok(get_video_id(s)),
        other => Err(VideoIdError::InvalidInput {
            function: "get_video_id",
            received: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
