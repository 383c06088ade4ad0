// src/lib.rs

pub mod config;
pub mod encoding;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod frame;
pub mod output;

pub use error::{ExtractionError, Result, ShapeError, StructureError};
pub use extract::{extract, Dataset, HeaderMatcher, SelectTable, TableExtractor, TableSelector};

use reqwest::Client;
use std::collections::BTreeMap;
use url::Url;

/// Fetch the standings page and take the results table (the 5th on the page).
pub async fn extract_eredivisie_results(
    client: &Client,
    url: &Url,
    form: &BTreeMap<String, String>,
) -> Result<Dataset> {
    extract_with(client, url, form, TableSelector::default()).await
}

/// Like [`extract_eredivisie_results`] with an explicit table selector.
pub async fn extract_with<S: SelectTable>(
    client: &Client,
    url: &Url,
    form: &BTreeMap<String, String>,
    selector: S,
) -> Result<Dataset> {
    let markup = fetch::fetch_markup(client, url, form).await?;
    TableExtractor::new(selector).extract(&markup)
}
