use scraper::{Html, Selector};

/// Tag/attribute query capability over one document's markup.
///
/// Parsing is best-effort: malformed markup yields whatever tree the
/// lenient HTML parser recovers, and a selector that cannot be built
/// matches nothing instead of failing the caller.
pub struct MarkupView {
    document: Html,
}

impl MarkupView {
    pub fn parse(raw: &str) -> Self {
        Self {
            document: Html::parse_document(raw),
        }
    }

    /// Number of `tag` elements whose text contains `needle`,
    /// case-insensitively.
    pub fn count_containing(&self, tag: &str, needle: &str) -> usize {
        let Ok(selector) = Selector::parse(tag) else {
            return 0;
        };
        let needle = needle.to_lowercase();
        self.document
            .select(&selector)
            .filter(|element| {
                element
                    .text()
                    .collect::<String>()
                    .to_lowercase()
                    .contains(&needle)
            })
            .count()
    }

    /// Number of `tag` elements whose `attr` value contains `needle`,
    /// case-insensitively.
    pub fn count_attr_containing(&self, tag: &str, attr: &str, needle: &str) -> usize {
        let Ok(selector) = Selector::parse(tag) else {
            return 0;
        };
        let needle = needle.to_lowercase();
        self.document
            .select(&selector)
            .filter_map(|element| element.value().attr(attr))
            .filter(|value| value.to_lowercase().contains(&needle))
            .count()
    }

    /// All values of `attr` on `tag` elements that carry it, in document
    /// order.
    pub fn attr_values(&self, tag: &str, attr: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(tag) else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .filter_map(|element| element.value().attr(attr))
            .map(|value| value.to_string())
            .collect()
    }

    /// First value of `attr` on a `tag` element that carries it.
    pub fn first_attr(&self, tag: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(&format!("{}[{}]", tag, attr)).ok()?;
        self.document
            .select(&selector)
            .find_map(|element| element.value().attr(attr))
            .map(|value| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<html>
        <head>
            <title>Beaches of Noronha</title>
            <meta name="description" content="noronha travel guide">
        </head>
        <body>
            <h1>Noronha</h1>
            <p>Plan your trip to noronha today.</p>
            <p>Nothing relevant here.</p>
            <a href="guide.html">NORONHA guide</a>
            <a href="">empty</a>
            <time datetime="2024-03-01">March 2024</time>
        </body>
    </html>"#;

    #[test]
    fn test_count_containing_is_case_insensitive() {
        let view = MarkupView::parse(SAMPLE);
        assert_eq!(view.count_containing("title", "noronha"), 1);
        assert_eq!(view.count_containing("p", "noronha"), 1);
        // Only the first anchor's text mentions the term; the second
        // anchor says "empty".
        assert_eq!(view.count_containing("a", "noronha"), 1);
    }

    #[test]
    fn test_count_attr_containing() {
        let view = MarkupView::parse(SAMPLE);
        assert_eq!(view.count_attr_containing("meta", "content", "noronha"), 1);
        assert_eq!(view.count_attr_containing("meta", "content", "azores"), 0);
    }

    #[test]
    fn test_attr_values_preserve_document_order() {
        let view = MarkupView::parse(SAMPLE);
        let hrefs = view.attr_values("a", "href");
        assert_eq!(hrefs, vec!["guide.html".to_string(), String::new()]);
    }

    #[test]
    fn test_first_attr() {
        let view = MarkupView::parse(SAMPLE);
        assert_eq!(
            view.first_attr("time", "datetime"),
            Some("2024-03-01".to_string())
        );
        assert_eq!(view.first_attr("video", "src"), None);
    }

    #[test]
    fn test_malformed_markup_does_not_fail() {
        let view = MarkupView::parse("<html><p>unclosed <a href='x.html'>link");
        assert_eq!(view.attr_values("a", "href"), vec!["x.html".to_string()]);
    }
}
