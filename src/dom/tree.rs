use crate::dom::locator;
use crate::dom::selector::{FieldPath, Selector};
use crate::error::{Result, ScrapeError};
use headless_chrome::Tab;
use scraper::{ElementRef, Html};
use std::path::Path;
use std::sync::Arc;

/// A read-only snapshot of a rendered page.
///
/// The rendered markup is kept next to the parsed document so a snapshot can
/// be written back out unchanged.
#[derive(Debug)]
pub struct DomTree {
    source: String,
    document: Html,
}

impl DomTree {
    /// Parse a full HTML document
    pub fn parse(html: impl Into<String>) -> Self {
        let source = html.into();
        let document = Html::parse_document(&source);
        Self { source, document }
    }

    /// Capture the rendered document of a browser tab
    pub fn from_tab(tab: &Arc<Tab>) -> Result<Self> {
        let result = tab
            .evaluate("document.documentElement.outerHTML", false)
            .map_err(|e| ScrapeError::EvaluationFailed(format!("Failed to read document markup: {}", e)))?;

        let value = result
            .value
            .ok_or_else(|| ScrapeError::DomParseFailed("No value returned for document markup".to_string()))?;

        let html: String = serde_json::from_value(value)
            .map_err(|e| ScrapeError::DomParseFailed(format!("Document markup is not a string: {}", e)))?;

        let tree = Self::parse(html);
        log::debug!("Captured DOM snapshot with {} elements", tree.count_elements());
        Ok(tree)
    }

    /// Load an HTML snapshot from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::parse(std::fs::read_to_string(path.as_ref())?))
    }

    /// Write the snapshot's markup to disk
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), &self.source)?;
        Ok(())
    }

    /// The markup this snapshot was parsed from
    pub fn html(&self) -> &str {
        &self.source
    }

    /// The `<html>` element
    pub fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }

    /// First node matching `path`, see [`locator::locate`]
    pub fn locate(&self, path: &FieldPath) -> Option<ElementRef<'_>> {
        locator::locate(self.root(), path)
    }

    /// All nodes matching `selector` in document order
    pub fn locate_all(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        locator::locate_all(self.root(), selector)
    }

    /// Count total elements in the tree, `<html>` included
    pub fn count_elements(&self) -> usize {
        self.root()
            .descendants()
            .filter(|node| node.value().is_element())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::locator::text_of;

    const PAGE: &str = r#"<html><head></head><body>
        <header><a href="/ada/followers">120 Followers</a></header>
        <main><article>first</article><script>track()</script><article>second</article></main>
    </body></html>"#;

    #[test]
    fn test_count_elements() {
        let tree = DomTree::parse(PAGE);

        // html, head, body, header, a, main, article, script, article
        assert_eq!(tree.count_elements(), 9);
    }

    #[test]
    fn test_parse_fragment_gets_document_shell() {
        let tree = DomTree::parse("<article>only</article>");

        assert_eq!(tree.root().value().name(), "html");
        assert_eq!(tree.locate_all(&Selector::parse("body > article").unwrap()).len(), 1);
    }

    #[test]
    fn test_locate_all_in_order() {
        let tree = DomTree::parse(PAGE);
        let articles: Vec<_> = tree
            .locate_all(&Selector::parse("article").unwrap())
            .into_iter()
            .map(text_of)
            .collect();

        assert_eq!(articles, vec!["first", "second"]);
    }

    #[test]
    fn test_save_and_load() {
        let tree = DomTree::parse(PAGE);
        let path = std::env::temp_dir().join(format!("profile-scrape-tree-{}.html", std::process::id()));

        tree.save(&path).unwrap();
        let loaded = DomTree::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.html(), tree.html());
        assert_eq!(loaded.count_elements(), tree.count_elements());
    }

    #[test]
    fn test_load_missing_file() {
        let err = DomTree::load("/nonexistent/profile-scrape/snapshot.html").unwrap_err();
        assert!(matches!(err, ScrapeError::Io(_)));
    }

    #[test]
    fn test_locate_through_tree() {
        let tree = DomTree::parse(PAGE);
        let path = FieldPath::text(r#"a[href$="/followers"]"#).unwrap();

        assert_eq!(tree.locate(&path).map(text_of).as_deref(), Some("120 Followers"));
    }
}
