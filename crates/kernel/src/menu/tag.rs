//! Tag builder for rendered menus.

/// CSS token added to the tag of an item on the active path.
pub const ACTIVE_CLASS: &str = "active";

/// HTML-escape a string for safe output in text and single-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Opening tag with an optional `active` token ahead of `classes`.
///
/// Empty class lists produce a bare tag rather than `class=''`, and the
/// token list is whitespace-normalised, so output is not byte-identical to
/// the `<tag class='active classes'>` form that always writes the attribute.
pub fn open_tag(tag: &str, classes: Option<&str>, active: bool) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    if active {
        tokens.push(ACTIVE_CLASS);
    }
    if let Some(classes) = classes {
        tokens.extend(classes.split_whitespace());
    }

    if tokens.is_empty() {
        format!("<{tag}>")
    } else {
        format!("<{tag} class='{}'>", html_escape(&tokens.join(" ")))
    }
}

/// Closing tag.
pub fn close_tag(tag: &str) -> String {
    format!("</{tag}>")
}

/// Keep only ASCII alphanumerics of a caller-supplied tag name.
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_tag(tag: &str) -> Option<String> {
    let cleaned: String = tag
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();

    (!cleaned.is_empty()).then_some(cleaned)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn open_tag_without_classes() {
        assert_eq!(open_tag("ul", None, false), "<ul>");
        assert_eq!(open_tag("ul", Some("   "), false), "<ul>");
    }

    #[test]
    fn open_tag_with_classes() {
        assert_eq!(open_tag("li", Some("nav-item"), false), "<li class='nav-item'>");
        assert_eq!(
            open_tag("li", Some(" nav-item   wide "), false),
            "<li class='nav-item wide'>"
        );
    }

    #[test]
    fn open_tag_active_comes_first() {
        assert_eq!(open_tag("li", None, true), "<li class='active'>");
        assert_eq!(
            open_tag("li", Some("nav-item"), true),
            "<li class='active nav-item'>"
        );
    }

    #[test]
    fn open_tag_escapes_classes() {
        assert_eq!(
            open_tag("li", Some("x'><script>"), false),
            "<li class='x&#x27;&gt;&lt;script&gt;'>"
        );
    }

    #[test]
    fn close_tag_formats() {
        assert_eq!(close_tag("nav"), "</nav>");
    }

    #[test]
    fn html_escape_special_chars() {
        assert_eq!(
            html_escape("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
        );
        assert_eq!(html_escape("a & b \"c\""), "a &amp; b &quot;c&quot;");
    }

    #[test]
    fn sanitize_tag_strips_markup() {
        assert_eq!(sanitize_tag("nav").as_deref(), Some("nav"));
        assert_eq!(sanitize_tag("H2").as_deref(), Some("h2"));
        assert_eq!(sanitize_tag("div onclick=x").as_deref(), Some("divonclickx"));
        assert_eq!(sanitize_tag("<>"), None);
        assert_eq!(sanitize_tag(""), None);
    }
}
