// web_app/tags.rs - Product tag formatting
//
// Brands store their product tags as one comma-delimited string. The list
// form below is only ever used for display; writes send the raw string.

/// Split a comma-delimited tag string into trimmed, non-empty tags.
pub fn format_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
