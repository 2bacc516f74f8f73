/// Derives a URL-safe slug from a display name.
///
/// Non-alphanumeric characters are folded into single dashes,
/// everything else is lowercased. The result may be empty if the
/// name contains no ASCII alphanumeric characters at all.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_names() {
        assert_eq!("test-city", slugify("Test City"));
        assert_eq!("test-city", slugify("  Test   City!! "));
        assert_eq!("5th-ave-block", slugify("5th Ave. Block"));
        assert_eq!("", slugify("—"));
        assert_eq!("", slugify(""));
    }

    #[test]
    fn slugified_names_parse_as_slugs() {
        use fixmap_entities::slug::Slug;
        assert!(slugify("Test City").parse::<Slug>().is_ok());
        assert!(slugify("A  B  C").parse::<Slug>().is_ok());
    }
}
