//! Output formatting for CLI display
//!
//! This module provides utilities for formatting hits, tags, MIME trees and
//! index listings in the terminal.

use crate::hit::Hit;
use crate::index::IndexInfo;
use crate::mime::MimeGroup;
use crate::stats::CsvTable;
use crate::tags::{EsTag, Tag, TagStyle};
use byte_unit::{Byte, UnitType};
use chrono::{Local, TimeZone};
use colored::{ColoredString, Colorize};

/// Human readable size, e.g. `1.5 MiB`
#[must_use]
pub fn format_size(bytes: u64) -> String {
    Byte::from_u64(bytes)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

/// Local date and time of a Unix timestamp
#[must_use]
pub fn format_timestamp(timestamp: i64) -> String {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map_or_else(|| timestamp.to_string(), |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Parse `#rrggbb` (or `#rgb`) into RGB components
#[must_use]
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// Render a display tag as a colored badge
#[must_use]
pub fn tag_badge(tag: &Tag) -> ColoredString {
    let label = format!(" {} ", tag.text);
    match tag.style {
        TagStyle::Video => label.black().on_cyan(),
        TagStyle::Audio => label.black().on_magenta(),
        TagStyle::User => {
            let styled = match parse_hex_color(&tag.fg) {
                Some((r, g, b)) => label.truecolor(r, g, b),
                None => label.normal(),
            };
            match parse_hex_color(&tag.bg) {
                Some((r, g, b)) => styled.on_truecolor(r, g, b),
                None => styled,
            }
        }
    }
}

/// Format a hit for the result list
#[must_use]
pub fn hit_line(hit: &Hit, quiet: bool) -> String {
    let path = hit.full_path();
    if quiet {
        return path;
    }

    let mut line = format!("  {}", path.bold());

    if let Some(size) = hit.source.size {
        line.push_str(&format!("  {}", format_size(size).dimmed()));
    }
    if let Some(mime) = &hit.source.mime {
        line.push_str(&format!("  {}", mime.dimmed()));
    }
    for tag in &hit.tags {
        line.push(' ');
        line.push_str(&tag_badge(tag).to_string());
    }
    line.push_str(&format!("  {}", hit.id.dimmed()));

    line
}

/// Capability flags of a hit as short labels
#[must_use]
pub fn hit_flags(hit: &Hit) -> Vec<&'static str> {
    let props = &hit.props;
    [
        (props.is_sub_document, "sub-document"),
        (props.is_image, "image"),
        (props.is_gif, "gif"),
        (props.is_video, "video"),
        (props.is_playable_video, "playable video"),
        (props.is_playable_image, "playable image"),
        (props.is_audio, "audio"),
        (props.has_thumbnail, "thumbnail"),
    ]
    .into_iter()
    .filter_map(|(set, label)| set.then_some(label))
    .collect()
}

/// Strip highlight markers from a fragment, emphasizing the matches instead
#[must_use]
pub fn highlight_fragment(fragment: &str) -> String {
    let mut out = String::new();
    let mut rest = fragment;

    while let Some(start) = rest.find("<mark>") {
        out.push_str(&rest[..start]);
        let after = &rest[start + "<mark>".len()..];
        let end = after.find("</mark>").unwrap_or(after.len());
        out.push_str(&after[..end].yellow().bold().to_string());
        rest = after.get(end + "</mark>".len()..).unwrap_or("");
    }
    out.push_str(rest);

    out.replace('\n', " ")
}

/// Format a tag listing entry
#[must_use]
pub fn es_tag_line(tag: &EsTag, quiet: bool) -> String {
    if quiet {
        return tag.id.clone();
    }

    let swatch = match tag.color.as_deref().and_then(parse_hex_color) {
        Some((r, g, b)) => "  ".on_truecolor(r, g, b).to_string(),
        None => "  ".to_string(),
    };
    format!("  {swatch} {} ({} document(s))", tag.id, tag.count)
}

/// Format an index descriptor
#[must_use]
pub fn index_line(index: &IndexInfo, quiet: bool) -> String {
    if quiet {
        return index.id.clone();
    }

    format!(
        "  {} {}  version {}  updated {}",
        index.id_prefix.yellow(),
        index.name.bold(),
        index.version,
        format_timestamp(index.timestamp)
    )
}

/// Format the MIME type tree
#[must_use]
pub fn mime_tree_lines(groups: &[MimeGroup], quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for group in groups {
        if quiet {
            lines.extend(group.children.iter().map(|child| child.id.clone()));
            continue;
        }

        lines.push(group.text.bold().to_string());
        for (idx, child) in group.children.iter().enumerate() {
            let branch = if idx + 1 == group.children.len() { "└──" } else { "├──" };
            lines.push(format!("  {branch} {}", child.text));
        }
    }

    lines
}

/// Format a CSV table with aligned columns
#[must_use]
pub fn table_lines(table: &CsvTable) -> Vec<String> {
    let columns = table
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.headers.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0; columns];
    for row in std::iter::once(&table.headers).chain(&table.rows) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render = |row: &[String]| {
        row.iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(table.headers.as_slice()).bold().to_string()];
    lines.extend(table.rows.iter().map(|row| render(row.as_slice())));
    lines
}
