// src/fetch.rs

use reqwest::{header::CONTENT_TYPE, Client};
use std::collections::BTreeMap;
use tracing::{debug, instrument};
use url::Url;

use crate::{encoding, error::Result};

/// POST `form` to `url` as `application/x-www-form-urlencoded` and return the body.
///
/// The body is decoded per the `Content-Type` charset, else the page's
/// `<meta>` charset, else UTF-8.
///
/// Transport failures and non-2xx statuses both come back as
/// [`ExtractionError::Network`](crate::error::ExtractionError::Network); nothing is retried.
#[instrument(level = "info", skip_all, fields(url = %url))]
pub async fn fetch_markup(
    client: &Client,
    url: &Url,
    form: &BTreeMap<String, String>,
) -> Result<String> {
    debug!(fields = form.len(), "posting form");
    let resp = client
        .post(url.clone())
        .form(form)
        .send()
        .await?
        .error_for_status()?;

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = resp.bytes().await?;

    let enc = encoding::detect_encoding(content_type.as_deref(), &bytes);
    debug!(bytes = bytes.len(), encoding = enc.name(), "received page");
    let (text, _, _) = enc.decode(&bytes);
    Ok(text.into_owned())
}
