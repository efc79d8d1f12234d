//! Display tags and tag listing entries
//!
//! User tags are stored in the index as a single string: the tag name
//! followed by a color, separated by a dot (`"project.alpha.#ff8800"`).
//! This module decodes that convention in two places:
//!
//! - [`create_user_tag`] turns a stored tag into a [`Tag`] with foreground and
//!   background colors for rendering next to a hit
//! - [`create_es_tag`] turns a tag aggregation bucket into an [`EsTag`] for
//!   the tag picker
//!
//! Codec tags (`Video`, `Audio`) are synthesized from a hit's codecs.

mod color;

pub use color::{format_user_tag, is_valid_color, lum};

use crate::hit::{Bucket, Source};
use crate::mime::{MimeCategory, category_of};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Separator between tag name tokens and the color token
pub const TAG_SEPARATOR: char = '.';

/// Foreground used on light backgrounds
pub const DARK_FG: &str = "#000";

/// Foreground used on dark backgrounds
pub const LIGHT_FG: &str = "#fff";

/// Luminance above which a background counts as light
pub const LIGHT_BACKGROUND_LUM: f64 = 50.0;

static COLORED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\.#[0-9a-f]{6}").expect("valid colored tag regex"));

/// Kind of display tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStyle {
    /// Video or image codec
    Video,
    /// Audio codec
    Audio,
    /// Tag added by a user
    User,
}

/// Tag as rendered next to a hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub style: TagStyle,
    pub text: String,
    /// Stored form of a user tag (including the color); empty for codec tags
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub fg: String,
    #[serde(default)]
    pub bg: String,
    pub user_tag: bool,
}

impl Tag {
    fn codec(style: TagStyle, text: String) -> Self {
        Self {
            style,
            text,
            raw_text: String::new(),
            fg: String::new(),
            bg: String::new(),
            user_tag: false,
        }
    }
}

/// Entry of the tag listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsTag {
    /// Tag name without the color suffix
    pub id: String,
    /// Number of documents carrying the tag
    pub count: u64,
    pub color: Option<String>,
    /// A leaf is a complete colored tag; anything else is a bare path segment
    pub is_leaf: bool,
}

/// Build the display tags of a document
///
/// Images and videos get their codec as a `Video` tag, audio files their
/// codec as an `Audio` tag. User tags follow in stored order.
#[must_use]
pub fn hit_tags(source: &Source) -> Vec<Tag> {
    let mut tags = Vec::with_capacity(source.tag.len() + 1);

    match category_of(source.mime.as_deref()) {
        Some(MimeCategory::Image | MimeCategory::Video) => {
            if let Some(videoc) = source.videoc.as_deref().filter(|c| !c.is_empty()) {
                tags.push(Tag::codec(TagStyle::Video, videoc.replacen(' ', "", 1)));
            }
        }
        Some(MimeCategory::Audio) => {
            if let Some(audioc) = source.audioc.as_deref().filter(|c| !c.is_empty()) {
                tags.push(Tag::codec(TagStyle::Audio, audioc.to_string()));
            }
        }
        _ => {}
    }

    tags.extend(source.tag.iter().map(|tag| create_user_tag(tag)));
    tags
}

/// Decode a stored user tag into a display tag
///
/// The last dot-separated token is the background color. The foreground is
/// black on light backgrounds and white otherwise, including when the color
/// cannot be parsed.
#[must_use]
pub fn create_user_tag(tag: &str) -> Tag {
    let (text, bg) = split_color(tag);

    let fg = if lum(bg).is_some_and(|l| l > LIGHT_BACKGROUND_LUM) {
        DARK_FG
    } else {
        LIGHT_FG
    };

    Tag {
        style: TagStyle::User,
        text: text.to_string(),
        raw_text: tag.to_string(),
        fg: fg.to_string(),
        bg: bg.to_string(),
        user_tag: true,
    }
}

/// Decode a tag aggregation key into a tag listing entry
#[must_use]
pub fn create_es_tag(tag: &str, count: u64) -> EsTag {
    if COLORED_TAG.is_match(tag) {
        let (id, color) = split_color(tag);
        return EsTag {
            id: id.to_string(),
            count,
            color: Some(color.to_string()),
            is_leaf: true,
        };
    }

    EsTag {
        id: tag.to_string(),
        count,
        color: None,
        is_leaf: false,
    }
}

/// Build the tag listing from aggregation buckets
///
/// Buckets are sorted by key; when the same tag exists with several colors
/// only the first one is kept.
#[must_use]
pub fn tag_list(mut buckets: Vec<Bucket>) -> Vec<EsTag> {
    buckets.sort_by(|a, b| a.key.cmp(&b.key));

    let mut seen = HashSet::new();
    buckets
        .iter()
        .map(|bucket| create_es_tag(&bucket.key, bucket.doc_count))
        .filter(|tag| seen.insert(tag.id.clone()))
        .collect()
}

/// Split `"name.parts.color"` into `("name.parts", "color")`
///
/// A tag without a separator is all color and no text.
fn split_color(tag: &str) -> (&str, &str) {
    tag.rsplit_once(TAG_SEPARATOR).unwrap_or(("", tag))
}
