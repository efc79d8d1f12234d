//! Capability flags derived from a hit's MIME type and codecs

use super::Source;
use crate::mime::{MimeCategory, category_of};
use serde::{Deserialize, Serialize};

/// Image codecs browsers cannot display inline
pub const NON_PLAYABLE_IMAGE_CODECS: &[&str] = &["tiff", "raw", "ppm"];

/// Video containers browsers cannot play inline
pub const NON_PLAYABLE_VIDEO_EXTENSIONS: &[&str] = &["mkv", "avi", "mov"];

/// Video codecs browsers cannot play inline
pub const NON_PLAYABLE_VIDEO_CODECS: &[&str] = &["hevc", "mpeg1video", "mpeg2video", "wmv3"];

/// Derived rendering flags for a hit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitProps {
    /// Document was extracted from inside another document
    pub is_sub_document: bool,
    pub is_image: bool,
    pub is_gif: bool,
    pub is_video: bool,
    /// Video can be streamed to a browser player as-is
    pub is_playable_video: bool,
    /// Image can be shown full size in a browser
    pub is_playable_image: bool,
    pub is_audio: bool,
    pub has_thumbnail: bool,
    /// Thumbnail width, when the thumbnail descriptor carries one
    pub tn_w: Option<u32>,
    /// Thumbnail height, when the thumbnail descriptor carries one
    pub tn_h: Option<u32>,
}

impl HitProps {
    /// Compute the flags for a document source
    #[must_use]
    pub fn from_source(source: &Source) -> Self {
        let mut props = Self {
            is_sub_document: source.parent.is_some(),
            ..Self::default()
        };

        if let Some(thumbnail) = &source.thumbnail {
            props.has_thumbnail = true;
            let (w, h) = parse_thumbnail_size(thumbnail);
            props.tn_w = w;
            props.tn_h = h;
        }

        let videoc = source.videoc.as_deref();

        match category_of(source.mime.as_deref()) {
            Some(MimeCategory::Image) => {
                if videoc == Some("gif") {
                    props.is_gif = true;
                } else {
                    props.is_image = true;
                }
                props.is_playable_image = source.width.is_some()
                    && !props.is_sub_document
                    && !videoc.is_some_and(|codec| NON_PLAYABLE_IMAGE_CODECS.contains(&codec));
            }
            Some(MimeCategory::Video) => {
                props.is_video = videoc.is_some();
                props.is_playable_video = props.is_video
                    && source.mime.as_deref().is_some_and(|mime| mime.starts_with("video/"))
                    && !props.is_sub_document
                    && !NON_PLAYABLE_VIDEO_EXTENSIONS.contains(&source.extension.as_str())
                    && !videoc.is_some_and(|codec| NON_PLAYABLE_VIDEO_CODECS.contains(&codec));
            }
            Some(MimeCategory::Audio) => {
                props.is_audio = source.audioc.is_some() && !props.is_sub_document;
            }
            _ => {}
        }

        props
    }
}

/// Parse a `"W,H"` thumbnail descriptor
fn parse_thumbnail_size(thumbnail: &str) -> (Option<u32>, Option<u32>) {
    let mut parts = thumbnail.split(',');
    let w = parts.next().and_then(|w| w.trim().parse().ok());
    let h = parts.next().and_then(|h| h.trim().parse().ok());

    if w.is_none() || h.is_none() {
        tracing::debug!(thumbnail, "thumbnail descriptor without dimensions");
    }

    (w, h)
}
