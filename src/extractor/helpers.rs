//
//  helpers.rs
//  saloon-inspect
//

/// Text after the first occurrence of `needle`, or the whole text if absent.
pub fn after<'a>(text: &'a str, needle: &str) -> &'a str {
    match text.find(needle) {
        Some(idx) => &text[idx + needle.len()..],
        None => text,
    }
}

/// Text after the last occurrence of `needle`, or the whole text if absent.
pub fn after_last<'a>(text: &'a str, needle: &str) -> &'a str {
    match text.rfind(needle) {
        Some(idx) => &text[idx + needle.len()..],
        None => text,
    }
}

/// Text before the first occurrence of `needle`, or the whole text if absent.
pub fn before<'a>(text: &'a str, needle: &str) -> &'a str {
    match text.find(needle) {
        Some(idx) => &text[..idx],
        None => text,
    }
}
