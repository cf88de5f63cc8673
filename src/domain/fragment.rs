use scraper::{Html, Selector};

/// Post body container on the mobile Facebook markup. The class attribute
/// must read exactly `_5rgt _5nk5`; reordered or extra classes don't match.
/// Their class names rotate without notice.
pub const FRAGMENT_SELECTOR: &str = r#"div[class="_5rgt _5nk5"]"#;

/// Outer HTML of the first element matching [`FRAGMENT_SELECTOR`].
pub fn extract_fragment(html_content: &str) -> Option<String> {
    let selector = Selector::parse(FRAGMENT_SELECTOR).ok()?;
    let html_document = Html::parse_document(html_content);

    html_document
        .select(&selector)
        .next()
        .map(|element| element.html())
}
