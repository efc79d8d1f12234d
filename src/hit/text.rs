//! Path and name helpers for hit records

use super::Source;

/// Decode the backend's path escaping
///
/// Bytes that could not be stored as UTF-8 are written as `]XX` (two hex
/// digits) and a literal `]` as `]]`. Decoded bytes are reassembled and
/// interpreted as UTF-8, replacing invalid sequences. A `]` followed by
/// anything else is kept as-is.
#[must_use]
pub fn str_unescape(s: &str) -> String {
    if !s.contains(']') {
        return s.to_string();
    }

    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b']' {
            if bytes.get(i + 1) == Some(&b']') {
                out.push(b']');
                i += 2;
                continue;
            }
            if let Some(byte) = bytes.get(i + 1..i + 3).and_then(decode_hex_pair) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn decode_hex_pair(pair: &[u8]) -> Option<u8> {
    let high = (pair[0] as char).to_digit(16)?;
    let low = (pair[1] as char).to_digit(16)?;
    u8::try_from(high * 16 + low).ok()
}

/// File extension with a leading dot, or an empty string
#[must_use]
pub fn ext(source: &Source) -> String {
    if source.extension.is_empty() {
        String::new()
    } else {
        format!(".{}", source.extension)
    }
}

/// Full display path of a document: `path/name.ext`
///
/// Documents at the index root have an empty `path` and no separator.
#[must_use]
pub fn full_path(source: &Source) -> String {
    let separator = if source.path.is_empty() { "" } else { "/" };
    format!("{}{}{}{}", source.path, separator, source.name, ext(source))
}

/// Lowercase hex MD5 of the document's full path
///
/// Used by the backend to locate the document's stored record when tags
/// are mutated.
#[must_use]
pub fn path_md5(source: &Source) -> String {
    format!("{:x}", md5::compute(full_path(source)))
}
