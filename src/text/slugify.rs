// src/text/slugify.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::text::transliterate::transliterate;

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Characters allowed as a slug separator. Anything else would defeat the
/// point of producing a URL-safe string.
pub const SAFE_SEPARATORS: &[char] = &['-', '_', '.', '~'];

pub fn is_safe_separator(separator: char) -> bool {
    SAFE_SEPARATORS.contains(&separator)
}

/// Derives a URL-safe slug from arbitrary text.
///
/// The pipeline: transliterate accented characters to ASCII, lowercase,
/// replace every run of characters outside `[a-z0-9]` with `separator`, then
/// trim leading and trailing separators. Deterministic; may return an empty
/// string when nothing slug-worthy survives.
pub fn slugify(input: &str, separator: char) -> String {
    let ascii = transliterate(input).to_lowercase();
    let replaced = NON_SLUG_RUN.replace_all(&ascii, separator.to_string().as_str());
    replaced.trim_matches(separator).to_owned()
}
