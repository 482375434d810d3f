// src/analyzer/extract.rs
// =============================================================================
// This module pulls on-page SEO signals out of an HTML document.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup still produces a usable tree
//
// What we extract:
// - Title: text of the first <title>, or "" if there isn't one
// - Meta description: content="" of <meta name="description">, or ""
// - H1 tags: text of every <h1>, in document order
// - Word count: whitespace-separated tokens in ALL text of the document
//
// Nothing in here can fail. Missing elements simply come back empty.
// =============================================================================

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::report::{Section, ON_PAGE_SECTION};

// Constant selectors, parsed once. They are known to be valid.
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());

/// On-page signals of a single document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnPageMetrics {
    pub title: String,
    pub meta_description: String,
    pub h1_tags: Vec<String>,
    pub word_count: usize,
}

impl OnPageMetrics {
    // Lengths are in characters, not bytes: "Café" is 4 long
    pub fn title_length(&self) -> usize {
        self.title.chars().count()
    }

    pub fn meta_description_length(&self) -> usize {
        self.meta_description.chars().count()
    }

    pub fn h1_count(&self) -> usize {
        self.h1_tags.len()
    }

    pub fn to_section(&self) -> Section {
        Section::new(ON_PAGE_SECTION)
            .with("Title", self.title.clone())
            .with("Title Length", self.title_length())
            .with("Meta Description", self.meta_description.clone())
            .with("Meta Desc Length", self.meta_description_length())
            .with("H1 Tags", self.h1_tags.clone())
            .with("H1 Count", self.h1_count())
            .with("Word Count", self.word_count)
    }
}

// Extracts every on-page metric from raw HTML
//
// Example:
//   html = "<html><head><title>A</title></head><body>one two three</body></html>"
//   title = "A", word_count = 3
pub fn extract(html: &str) -> OnPageMetrics {
    let document = Html::parse_document(html);

    OnPageMetrics {
        title: extract_title(&document),
        meta_description: extract_meta_description(&document),
        h1_tags: extract_h1_tags(&document),
        word_count: count_words(&document),
    }
}

fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
}

fn extract_meta_description(document: &Html) -> String {
    document
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

fn extract_h1_tags(document: &Html) -> Vec<String> {
    document
        .select(&H1)
        .map(|el| el.text().collect::<String>())
        .collect()
}

// Counts words the naive way: glue every text node together (no separator)
// and split on whitespace. Script and style contents are counted too, and
// "<p>one</p><p>two</p>" is a single word. Both are known imprecisions.
fn count_words(document: &Html) -> usize {
    let text: String = document.root_element().text().collect();
    text.split_whitespace().count()
}
