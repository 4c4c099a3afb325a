use std::borrow::Cow;

/// Escapes text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// `<ul>` of escaped items with the given class.
pub fn bullet_list(class: &str, items: &[String]) -> String {
    let mut out = format!("<ul class=\"{class}\">");
    for item in items {
        out.push_str("<li>");
        out.push_str(&escape(item));
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_borrows_clean_text() {
        assert!(matches!(escape("x_i in R^n"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_bullet_list() {
        let items = vec!["a < b".to_string(), "c".to_string()];
        assert_eq!(
            bullet_list("pros", &items),
            "<ul class=\"pros\"><li>a &lt; b</li><li>c</li></ul>"
        );
    }
}
