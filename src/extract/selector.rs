// src/extract/selector.rs

use scraper::ElementRef;
use std::{fmt, sync::Arc};

use super::header_names;
use crate::error::StructureError;

/// The results table is the 5th `<table>` on the standings page.
pub const DEFAULT_TABLE_INDEX: usize = 4;

/// Given every table in document order, pick the one to extract.
pub trait SelectTable {
    fn select<'a>(&self, tables: &[ElementRef<'a>]) -> Result<ElementRef<'a>, StructureError>;
}

/// Predicate over a table's header names.
#[derive(Clone)]
pub struct HeaderMatcher {
    label: String,
    pred: Arc<dyn Fn(&[String]) -> bool + Send + Sync>,
}

impl HeaderMatcher {
    pub fn new<F>(label: impl Into<String>, pred: F) -> Self
    where
        F: Fn(&[String]) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            pred: Arc::new(pred),
        }
    }

    /// Matches a header row that has every one of `names` somewhere in it.
    pub fn contains_all<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let wanted: Vec<String> = names.into_iter().map(Into::into).collect();
        let label = format!("header containing {:?}", wanted);
        Self::new(label, move |header| {
            wanted.iter().all(|w| header.iter().any(|h| h == w))
        })
    }

    pub fn matches(&self, header: &[String]) -> bool {
        (self.pred)(header)
    }
}

impl fmt::Debug for HeaderMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HeaderMatcher").field(&self.label).finish()
    }
}

#[derive(Debug, Clone)]
pub enum TableSelector {
    /// Zero-based position among all tables, nested ones included.
    ByIndex(usize),
    /// Direct `<caption>` child whose trimmed text equals this.
    ByCaption(String),
    ByHeaderMatch(HeaderMatcher),
}

impl Default for TableSelector {
    fn default() -> Self {
        TableSelector::ByIndex(DEFAULT_TABLE_INDEX)
    }
}

impl fmt::Display for TableSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSelector::ByIndex(n) => write!(f, "table #{n}"),
            TableSelector::ByCaption(text) => write!(f, "caption {text:?}"),
            TableSelector::ByHeaderMatch(m) => f.write_str(&m.label),
        }
    }
}

impl SelectTable for TableSelector {
    fn select<'a>(&self, tables: &[ElementRef<'a>]) -> Result<ElementRef<'a>, StructureError> {
        let found = match self {
            TableSelector::ByIndex(index) => {
                return tables
                    .get(*index)
                    .copied()
                    .ok_or(StructureError::TooFewTables {
                        found: tables.len(),
                        index: *index,
                    });
            }
            TableSelector::ByCaption(text) => tables
                .iter()
                .copied()
                .find(|t| caption_of(*t).as_deref() == Some(text.trim())),
            TableSelector::ByHeaderMatch(matcher) => tables
                .iter()
                .copied()
                .find(|t| header_names(*t).is_some_and(|h| matcher.matches(&h))),
        };

        found.ok_or_else(|| StructureError::NoMatchingTable {
            selector: self.to_string(),
        })
    }
}

fn caption_of(table: ElementRef<'_>) -> Option<String> {
    table
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "caption")
        .map(|c| c.text().collect::<String>().trim().to_string())
}
