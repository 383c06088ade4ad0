// src/extract/mod.rs

pub mod dataset;
pub mod selector;

pub use dataset::Dataset;
pub use selector::{HeaderMatcher, SelectTable, TableSelector, DEFAULT_TABLE_INDEX};

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Result, StructureError};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("table selector"));
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("tr selector"));
static TH: Lazy<Selector> = Lazy::new(|| Selector::parse("th").expect("th selector"));
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("td selector"));

/// Turns a page's markup into a [`Dataset`] taken from one of its tables.
#[derive(Debug, Clone, Default)]
pub struct TableExtractor<S = TableSelector> {
    selector: S,
}

impl<S: SelectTable> TableExtractor<S> {
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    /// Header from the first `<tr>`'s `<th>` cells, data from every later
    /// `<tr>`'s `<td>` cells. Row widths are left unchecked.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = markup.len()))]
    pub fn extract(&self, markup: &str) -> Result<Dataset> {
        let doc = Html::parse_document(markup);
        let tables: Vec<ElementRef<'_>> = doc.select(&TABLE).collect();
        let target = self.selector.select(&tables)?;
        debug!(tables = tables.len(), "selected target table");

        let mut rows = target.select(&TR);
        let header_row = rows.next().ok_or(StructureError::EmptyTable)?;
        let columns = cell_texts(header_row, &TH);
        if columns.is_empty() {
            return Err(StructureError::MissingHeader.into());
        }

        let rows: Vec<Vec<String>> = rows.map(|tr| cell_texts(tr, &TD)).collect();
        debug!(columns = columns.len(), rows = rows.len(), "extracted dataset");
        Ok(Dataset::new(columns, rows))
    }
}

/// Extract using the default positional selector (the 5th table).
pub fn extract(markup: &str) -> Result<Dataset> {
    TableExtractor::<TableSelector>::default().extract(markup)
}

/// Trimmed `<th>` texts of the table's first row, if it has one.
pub(crate) fn header_names(table: ElementRef<'_>) -> Option<Vec<String>> {
    table.select(&TR).next().map(|tr| cell_texts(tr, &TH))
}

fn cell_texts(row: ElementRef<'_>, cell: &Selector) -> Vec<String> {
    row.select(cell)
        .map(|c| c.text().collect::<String>().trim().to_string())
        .collect()
}
