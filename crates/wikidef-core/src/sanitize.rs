use std::sync::LazyLock;

use regex::Regex;

/// Lowercase tags with optional `name="value"` attributes, opening, closing or self-closing.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<\s*/?[a-z]+(?:\s+[a-z]+="[^<>"]+")*\s*/?>"#).expect("tag pattern is valid")
});

const NBSP_ENTITY: &str = "&nbsp;";

/// Strip markup tags from a definition string, then decode `&nbsp;` to a plain space
pub fn sanitize(text: &str) -> String {
    TAG_RE.replace_all(text, "").replace(NBSP_ENTITY, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(sanitize("a small domesticated feline"), "a small domesticated feline");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_tags_removed_before_entity_decoding() {
        assert_eq!(sanitize("<b>bold</b>&nbsp;text"), "bold text");
    }

    #[test]
    fn test_bare_angle_bracket_is_not_a_tag() {
        assert_eq!(sanitize("5 < 10"), "5 < 10");
        assert_eq!(sanitize("10 > 5 and 5 < 10"), "10 > 5 and 5 < 10");
    }

    #[test]
    fn test_attributes_and_self_closing_tags() {
        let input = r#"<span class="use-with-mention">cat</span><br/> and <a href="/wiki/dog" title="dog">dog</a>"#;
        assert_eq!(sanitize(input), "cat and dog");
    }

    #[test]
    fn test_whitespace_inside_tag() {
        assert_eq!(sanitize("< i >x< /i >"), "x");
        assert_eq!(sanitize("a<br />b"), "ab");
    }

    #[test]
    fn test_uppercase_tags_are_kept() {
        assert_eq!(sanitize("<B>bold</B>"), "<B>bold</B>");
    }

    #[test]
    fn test_unquoted_attribute_is_kept() {
        // attribute values must be double-quoted to count as a tag
        assert_eq!(sanitize("<a href=x>y</a>"), "<a href=x>y");
    }

    #[test]
    fn test_every_nbsp_is_replaced() {
        assert_eq!(sanitize("a&nbsp;b&nbsp;&nbsp;c"), "a b  c");
    }

    #[test]
    fn test_entity_split_by_tag_is_joined() {
        assert_eq!(sanitize("&nb<i>sp;"), " ");
    }
}
