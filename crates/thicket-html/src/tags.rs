//! Tag classification tables.
//!
//! Both tables are keyed by lower-case tag names and every lookup compares
//! ASCII case-insensitively, so `<BR>` and `<br>` classify the same way.
//!
//! The entries follow the HTML syntax notes on
//! [void elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
//! and [optional tags](https://html.spec.whatwg.org/multipage/syntax.html#syntax-tag-omission).

/// Elements that never have children and close at their start tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Start tags that implicitly end an open element.
///
/// Each entry is `(open element, start tags that close it)`. The closed
/// element's end tag is omitted and the new element becomes its sibling.
pub const OMISSION_MAP: &[(&str, &[&str])] = &[
    ("head", &["body"]),
    ("li", &["li"]),
    ("dt", &["dt", "dd"]),
    ("dd", &["dt", "dd"]),
    (
        "p",
        &[
            "address",
            "article",
            "aside",
            "blockquote",
            "dir",
            "div",
            "dl",
            "fieldset",
            "footer",
            "form",
            "h1",
            "h2",
            "h3",
            "h4",
            "h5",
            "h6",
            "header",
            "hgroup",
            "hr",
            "menu",
            "nav",
            "ol",
            "p",
            "pre",
            "section",
            "table",
            "ul",
        ],
    ),
    ("rt", &["rt", "rp"]),
    ("rp", &["rt", "rp"]),
    ("optgroup", &["optgroup"]),
    ("option", &["optgroup", "option"]),
    ("thead", &["tbody", "tfoot"]),
    ("tr", &["tr"]),
    ("td", &["td", "th"]),
    ("th", &["td", "th"]),
];

/// True if `tag_name` is a void element.
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag_name))
}

/// True if a start tag named `new_tag` implicitly closes an open `open_tag`.
#[must_use]
pub fn closes_open_element(new_tag: &str, open_tag: &str) -> bool {
    OMISSION_MAP
        .iter()
        .find(|(open, _)| open.eq_ignore_ascii_case(open_tag))
        .is_some_and(|(_, closers)| closers.iter().any(|c| c.eq_ignore_ascii_case(new_tag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_lookup_ignores_case() {
        for tag in VOID_ELEMENTS {
            assert!(is_void_element(tag));
            assert!(is_void_element(&tag.to_ascii_uppercase()));
        }
        assert!(is_void_element("Br"));
        assert!(!is_void_element("div"));
        assert!(!is_void_element(""));
    }

    #[test]
    fn test_list_items_close_each_other() {
        assert!(closes_open_element("li", "li"));
        assert!(closes_open_element("LI", "li"));
        assert!(closes_open_element("li", "LI"));
        assert!(!closes_open_element("ul", "li"));
    }

    #[test]
    fn test_block_tags_close_paragraph() {
        for tag in ["div", "p", "ul", "h3", "table", "section"] {
            assert!(closes_open_element(tag, "p"), "{tag} should close <p>");
        }
        assert!(!closes_open_element("span", "p"));
        assert!(!closes_open_element("a", "p"));
    }

    #[test]
    fn test_pairs_close_each_other() {
        assert!(closes_open_element("dd", "dt"));
        assert!(closes_open_element("dt", "dd"));
        assert!(closes_open_element("rp", "rt"));
        assert!(closes_open_element("th", "td"));
        assert!(closes_open_element("td", "th"));
        assert!(closes_open_element("optgroup", "option"));
        assert!(!closes_open_element("option", "optgroup"));
        assert!(closes_open_element("body", "head"));
        assert!(closes_open_element("tbody", "thead"));
    }

    #[test]
    fn test_unlisted_open_element_is_never_closed() {
        assert!(!closes_open_element("li", "div"));
        assert!(!closes_open_element("div", "span"));
    }
}
