//! Field lookup over a parsed document.
//!
//! All "is this field present" decisions go through [`locate`] and [`read`];
//! a non-match is `None`, never an error.

use crate::dom::selector::{Extract, FieldPath, Selector};
use scraper::ElementRef;

/// Find the first descendant of `scope` matching `path`, in document order.
///
/// `scope` itself is never a candidate, the same scoping as
/// `Element.querySelector`.
pub fn locate<'a>(scope: ElementRef<'a>, path: &FieldPath) -> Option<ElementRef<'a>> {
    let found = scope.select(path.selector.compiled()).next();
    if found.is_none() {
        log::debug!("No node matches {}", path);
    }
    found
}

/// Find every descendant of `scope` matching `selector`, in document order
pub fn locate_all<'a>(scope: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    scope.select(selector.compiled()).collect()
}

/// Locate `path` under `scope` and apply its extraction rule.
///
/// Text fields of a located node are always `Some`, possibly empty. Attribute
/// fields are `None` when the node lacks the attribute.
pub fn read(scope: ElementRef<'_>, path: &FieldPath) -> Option<String> {
    let node = locate(scope, path)?;
    match &path.extract {
        Extract::Text => Some(text_of(node)),
        Extract::Attribute(name) => {
            let value = node.value().attr(name).map(str::to_string);
            if value.is_none() {
                log::debug!("Node for {} has no attribute '{}'", path, name);
            }
            value
        }
    }
}

/// Text content of `node` with surrounding whitespace removed
pub fn text_of(node: ElementRef<'_>) -> String {
    node.text().collect::<String>().trim().to_string()
}
