//! MIME type categories and the MIME type picker tree

use crate::hit::Bucket;
use serde::{Deserialize, Serialize};

/// Top-level MIME category relevant to rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeCategory {
    Image,
    Video,
    Audio,
    /// Any other top-level type (text, application, ...)
    Other,
}

/// Category of a MIME type: the part before the first `/`
#[must_use]
pub fn category_of(mime: Option<&str>) -> Option<MimeCategory> {
    let category = mime?.split('/').next()?;
    Some(match category {
        "image" => MimeCategory::Image,
        "video" => MimeCategory::Video,
        "audio" => MimeCategory::Audio,
        _ => MimeCategory::Other,
    })
}

/// Selectable MIME type under a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeEntry {
    /// Full MIME type, e.g. `image/png`
    pub id: String,
    /// Label with document count, e.g. `png (12)`
    pub text: String,
}

/// Category node of the MIME type tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeGroup {
    /// Category name, e.g. `image`
    pub text: String,
    pub children: Vec<MimeEntry>,
}

/// Reshape a terms aggregation on `mime` into a two-level tree
///
/// Buckets are sorted by key and grouped by category; categories appear in
/// the order they are first seen.
#[must_use]
pub fn mime_tree(mut buckets: Vec<Bucket>) -> Vec<MimeGroup> {
    buckets.sort_by(|a, b| a.key.cmp(&b.key));

    let mut groups: Vec<MimeGroup> = Vec::new();

    for bucket in buckets {
        let mut parts = bucket.key.split('/');
        let category = parts.next().unwrap_or_default();
        let subtype = parts.next().unwrap_or(&bucket.key);

        let child = MimeEntry {
            id: bucket.key.clone(),
            text: format!("{subtype} ({})", bucket.doc_count),
        };

        match groups.iter_mut().find(|group| group.text == category) {
            Some(group) => group.children.push(child),
            None => groups.push(MimeGroup {
                text: category.to_string(),
                children: vec![child],
            }),
        }
    }

    groups
}
