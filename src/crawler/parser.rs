//! Structural HTML queries shared by the index and detail extractors
//!
//! The scraper only needs a handful of lookups: by tag, by attribute,
//! positional child selection and text content. Selectors are compiled once.

use lazy_static::lazy_static;
use scraper::{ElementRef, Selector};

macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

lazy_static! {
    // Listing page
    pub(crate) static ref CHART_COLUMN: Selector =
        parse_selector!(r#"div[data-testid="chart-layout-main-column"]"#);
    pub(crate) static ref CHART_LIST: Selector = parse_selector!("ul, ol");
    pub(crate) static ref LIST_ITEM: Selector = parse_selector!("li");
    pub(crate) static ref ITEM_LINK: Selector = parse_selector!("a[href]");

    // Detail page
    pub(crate) static ref PAGE_SECTION: Selector = parse_selector!("section.ipc-page-section");
    pub(crate) static ref HEADING: Selector = parse_selector!("h1");
    pub(crate) static ref INLINE_SPAN: Selector = parse_selector!("span");
    pub(crate) static ref RELEASE_INFO_LINK: Selector =
        parse_selector!(r#"a[href*="releaseinfo"]"#);
    pub(crate) static ref AGGREGATE_RATING: Selector =
        parse_selector!(r#"div[data-testid="hero-rating-bar__aggregate-rating__score"]"#);
    pub(crate) static ref SHORT_PLOT: Selector =
        parse_selector!(r#"span[data-testid="plot-xs_to_m"]"#);
}

/// First descendant of `scope` matching `selector`
pub fn find_first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// The `n`th (zero-based) direct child element of `parent` with the given tag
///
/// Only immediate children are considered; nested elements are not searched.
pub fn nth_child_element<'a>(parent: ElementRef<'a>, tag: &str, n: usize) -> Option<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name().eq_ignore_ascii_case(tag))
        .nth(n)
}

/// Concatenated text of an element and all of its descendants, untouched
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text content with surrounding whitespace removed
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    text_content(element).trim().to_string()
}
