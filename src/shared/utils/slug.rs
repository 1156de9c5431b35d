/// Lowercase a display name into a URL-safe slug: alphanumeric runs are kept,
/// everything else collapses into single hyphens.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}
