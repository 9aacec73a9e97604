//! Best-effort field extraction from markup regions.
//!
//! A structural path that matches nothing yields an empty string, never an
//! error: third-party markup drifts, and a missing field must not abort
//! the batch.

use scraper::{ElementRef, Selector};

/// Trimmed text of the first descendant matching `selector`, or `""`.
pub fn child_text(el: ElementRef<'_>, selector: &Selector) -> String {
    el.select(selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Attribute value of the first descendant matching `selector`, or `""`.
pub fn child_attr(el: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    el.select(selector)
        .next()
        .and_then(|node| node.value().attr(attr))
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_div(doc: &Html) -> ElementRef<'_> {
        let sel = Selector::parse("div").unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn extracts_trimmed_text() {
        let doc = Html::parse_fragment(r#"<div><span class="a">  hello world </span></div>"#);
        let sel = Selector::parse("span.a").unwrap();
        assert_eq!(child_text(first_div(&doc), &sel), "hello world");
    }

    #[test]
    fn missing_match_yields_empty_string() {
        let doc = Html::parse_fragment("<div><span>x</span></div>");
        let sel = Selector::parse("span.absent").unwrap();
        assert_eq!(child_text(first_div(&doc), &sel), "");
        assert_eq!(child_attr(first_div(&doc), &sel, "href"), "");
    }

    #[test]
    fn extracts_attribute_or_empty_when_absent() {
        let doc = Html::parse_fragment(r#"<div><a href="item?id=1">t</a></div>"#);
        let sel = Selector::parse("a").unwrap();
        assert_eq!(child_attr(first_div(&doc), &sel, "href"), "item?id=1");
        assert_eq!(child_attr(first_div(&doc), &sel, "title"), "");
    }
}
