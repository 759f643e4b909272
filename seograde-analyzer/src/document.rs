use crate::error::{AnalyzeError, Result};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// Read-only query surface over a parsed HTML document.
///
/// scraper recovers from malformed markup (missing closing tags, no doctype)
/// on its own, so the only input that refuses to parse is an empty body.
#[derive(Debug)]
pub struct PageDocument {
    html: Html,
    raw_len: usize,
}

impl PageDocument {
    pub fn parse(html_body: &str) -> Result<Self> {
        if html_body.trim().is_empty() {
            return Err(AnalyzeError::ParseError(
                "document body is empty".to_string(),
            ));
        }

        Ok(Self {
            html: Html::parse_document(html_body),
            raw_len: html_body.len(),
        })
    }

    /// Byte length of the raw HTML this document was parsed from.
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    fn select_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let sel = Selector::parse(selector).ok()?;
        self.html.select(&sel).next()
    }

    /// Trimmed `<title>` text; `None` when the tag is absent, `Some("")` when
    /// it is present but empty. Checks treat the two differently.
    pub fn title(&self) -> Option<String> {
        self.select_first("title")
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    /// Trimmed `content` of `<meta name="...">`, falling back to
    /// `<meta property="...">` as some pages declare descriptions that way.
    pub fn meta_content(&self, name: &str) -> Option<String> {
        let by_name = format!(r#"meta[name="{}"]"#, name);
        let by_property = format!(r#"meta[property="{}"]"#, name);

        self.select_first(&by_name)
            .or_else(|| self.select_first(&by_property))
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
    }

    /// Counts for h1..h6, index 0 = h1.
    pub fn heading_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for (i, count) in counts.iter_mut().enumerate() {
            let sel = Selector::parse(&format!("h{}", i + 1)).unwrap();
            *count = self.html.select(&sel).count();
        }
        counts
    }

    /// Text a visitor would actually read: every text node outside of
    /// script/style/noscript subtrees, space-separated.
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        collect_visible_text(self.html.root_element(), &mut out);
        out
    }

    /// The `alt` attribute of every `<img>`, in document order. `None` means
    /// the attribute is absent entirely.
    pub fn image_alts(&self) -> Vec<Option<String>> {
        let sel = Selector::parse("img").unwrap();
        self.html
            .select(&sel)
            .map(|el| el.value().attr("alt").map(|s| s.to_string()))
            .collect()
    }

    pub fn canonical_href(&self) -> Option<String> {
        self.select_first(r#"link[rel="canonical"]"#)
            .map(|el| el.value().attr("href").unwrap_or("").to_string())
    }

    /// Comma-split, lowercased directives from `<meta name="robots">`.
    pub fn robots_directives(&self) -> Vec<String> {
        self.select_first(r#"meta[name="robots"]"#)
            .and_then(|el| el.value().attr("content"))
            .map(|content| {
                content
                    .split(',')
                    .map(|d| d.trim().to_lowercase())
                    .filter(|d| !d.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `og:*` meta tags keyed by full property name.
    pub fn open_graph_tags(&self) -> BTreeMap<String, String> {
        self.prefixed_meta_tags(r#"meta[property^="og:"]"#, "property")
    }

    /// `twitter:*` meta tags keyed by full name.
    pub fn twitter_tags(&self) -> BTreeMap<String, String> {
        self.prefixed_meta_tags(r#"meta[name^="twitter:"]"#, "name")
    }

    fn prefixed_meta_tags(&self, selector: &str, key_attr: &str) -> BTreeMap<String, String> {
        let sel = Selector::parse(selector).unwrap();
        let mut tags = BTreeMap::new();

        for el in self.html.select(&sel) {
            if let Some(key) = el.value().attr(key_attr) {
                let content = el.value().attr("content").unwrap_or("").trim().to_string();
                tags.entry(key.to_string()).or_insert(content);
            }
        }

        tags
    }

    /// JSON-LD script blocks or microdata `itemscope` attributes.
    pub fn has_structured_data(&self) -> bool {
        self.select_first(r#"script[type="application/ld+json"]"#)
            .is_some()
            || self.select_first("[itemscope]").is_some()
    }
}

fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(trimmed);
            }
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if name != "script" && name != "style" && name != "noscript" {
                collect_visible_text(child_el, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_a_parse_error() {
        let err = PageDocument::parse("   \n  ").unwrap_err();
        assert!(matches!(err, AnalyzeError::ParseError(_)));
    }

    #[test]
    fn test_title_extraction() {
        let doc = PageDocument::parse("<html><head><title> My Page </title></head></html>")
            .unwrap();
        assert_eq!(doc.title(), Some("My Page".to_string()));
    }

    #[test]
    fn test_missing_title_is_none() {
        let doc = PageDocument::parse("<html><body><p>no head</p></body></html>").unwrap();
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn test_meta_content_by_name_and_property() {
        let doc = PageDocument::parse(
            r#"<head><meta property="description" content="via property"></head>"#,
        )
        .unwrap();
        assert_eq!(
            doc.meta_content("description"),
            Some("via property".to_string())
        );

        let doc = PageDocument::parse(
            r#"<head><meta name="description" content="via name"></head>"#,
        )
        .unwrap();
        assert_eq!(doc.meta_content("description"), Some("via name".to_string()));
    }

    #[test]
    fn test_heading_counts() {
        let doc = PageDocument::parse(
            "<body><h1>a</h1><h2>b</h2><h2>c</h2><h6>d</h6></body>",
        )
        .unwrap();
        assert_eq!(doc.heading_counts(), [1, 2, 0, 0, 0, 1]);
    }

    #[test]
    fn test_visible_text_skips_scripts_and_styles() {
        let doc = PageDocument::parse(
            "<body><p>real words</p><script>var hidden = 1;</script>\
             <style>.x{color:red}</style><p>more words</p></body>",
        )
        .unwrap();
        let text = doc.visible_text();
        assert!(text.contains("real words"));
        assert!(text.contains("more words"));
        assert!(!text.contains("hidden"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_image_alts() {
        let doc = PageDocument::parse(
            r#"<body><img src="a.png" alt="a"><img src="b.png" alt=""><img src="c.png"></body>"#,
        )
        .unwrap();
        assert_eq!(
            doc.image_alts(),
            vec![Some("a".to_string()), Some("".to_string()), None]
        );
    }

    #[test]
    fn test_robots_directives_split_and_lowercased() {
        let doc = PageDocument::parse(
            r#"<head><meta name="robots" content="NOINDEX, nofollow "></head>"#,
        )
        .unwrap();
        assert_eq!(doc.robots_directives(), vec!["noindex", "nofollow"]);
    }

    #[test]
    fn test_open_graph_and_twitter_tags() {
        let doc = PageDocument::parse(
            r#"<head>
                <meta property="og:title" content="OG Title">
                <meta property="og:image" content="https://example.com/x.png">
                <meta name="twitter:card" content="summary">
            </head>"#,
        )
        .unwrap();

        let og = doc.open_graph_tags();
        assert_eq!(og.get("og:title").map(String::as_str), Some("OG Title"));
        assert_eq!(og.len(), 2);

        let twitter = doc.twitter_tags();
        assert_eq!(
            twitter.get("twitter:card").map(String::as_str),
            Some("summary")
        );
    }

    #[test]
    fn test_structured_data_detection() {
        let with_ld = PageDocument::parse(
            r#"<head><script type="application/ld+json">{"@type":"Thing"}</script></head>"#,
        )
        .unwrap();
        assert!(with_ld.has_structured_data());

        let with_microdata =
            PageDocument::parse(r#"<body><div itemscope itemtype="x"></div></body>"#).unwrap();
        assert!(with_microdata.has_structured_data());

        let without = PageDocument::parse("<body><p>plain</p></body>").unwrap();
        assert!(!without.has_structured_data());
    }

    #[test]
    fn test_malformed_html_still_parses() {
        let doc =
            PageDocument::parse("<html><title>Ok</title><body><p>text<p>more").unwrap();
        assert_eq!(doc.title(), Some("Ok".to_string()));
        assert!(doc.visible_text().contains("more"));
    }
}
