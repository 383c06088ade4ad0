use anyhow::{Context, Result};
use eredivisie_scraper::{
    config::{resolve_config_path, ScrapeConfig},
    extract_with,
    frame::{coerce_columns, to_record_batch},
    output::{write_json, write_output},
};
use reqwest::Client;
use std::{env, io};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,eredivisie_scraper=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // ─── 2) load config ──────────────────────────────────────────────
    let config_path = resolve_config_path(env::args().nth(1));
    let cfg = ScrapeConfig::load(&config_path)?;
    info!(config = %config_path.display(), url = %cfg.url, "startup");

    // ─── 3) fetch & extract ──────────────────────────────────────────
    let client = Client::new();
    let selector = cfg.selector.to_selector();
    let dataset = extract_with(&client, &cfg.url, &cfg.form, selector.clone())
        .await
        .with_context(|| format!("extracting {} from {}", selector, cfg.url))?;
    info!(
        columns = dataset.num_columns(),
        rows = dataset.num_rows(),
        "extracted table"
    );

    // ─── 4) bind rows to columns, then coerce declared types ─────────
    let batch = to_record_batch(&dataset).context("binding rows to header columns")?;
    let batch = coerce_columns(&batch, &cfg.columns).context("coercing declared columns")?;

    // ─── 5) write ────────────────────────────────────────────────────
    match &cfg.output {
        Some(out) => write_output(out.format(), &batch, &out.path)
            .with_context(|| format!("writing {}", out.path.display()))?,
        None => write_json(&batch, io::stdout().lock()).context("writing to stdout")?,
    }

    info!("all done");
    Ok(())
}
