// src/source.rs
//! Monarch list retrieval.
//!
//! One fetch of the JSON dataset per run; each record is passed through the
//! reign parser before it is yielded. Transport and parse failures are
//! converted into failure outcomes at this boundary — detail goes to the
//! log, the envelope carries a generic message.

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use std::time::Duration;

use crate::types::{FetchOutcome, Monarch};
use crate::years;

/// Message carried by every transport/parse failure outcome.
pub const PARSE_ERROR_MESSAGE: &str = "There was a parsing error";

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("fetch_requests_total", "Dataset fetch attempts.");
        describe_counter!("fetch_errors_total", "Transport or parse failures.");
        describe_counter!(
            "fetch_records_total",
            "Monarch records parsed from the dataset."
        );
        describe_histogram!("fetch_parse_ms", "Dataset parse time in milliseconds.");
    });
}

#[async_trait]
pub trait MonarchSource: Send + Sync {
    async fn fetch(&self) -> FetchOutcome<Vec<Monarch>>;
    fn name(&self) -> &'static str;
}

/// HTTP-backed source with a configured request timeout.
pub struct HttpMonarchSource {
    url: String,
    client: reqwest::Client,
}

impl HttpMonarchSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building http client")?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    async fn fetch_body(&self) -> Result<String> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("monarch dataset get()")?;
        resp.error_for_status()
            .context("monarch dataset status")?
            .text()
            .await
            .context("monarch dataset .text()")
    }
}

#[async_trait]
impl MonarchSource for HttpMonarchSource {
    async fn fetch(&self) -> FetchOutcome<Vec<Monarch>> {
        ensure_metrics_described();
        counter!("fetch_requests_total").increment(1);
        tracing::info!(url = %self.url, "fetching monarch dataset");

        let body = match self.fetch_body().await {
            Ok(b) => b,
            Err(e) => {
                tracing::error!(error = ?e, "monarch dataset fetch failed");
                counter!("fetch_errors_total").increment(1);
                return FetchOutcome::failure(PARSE_ERROR_MESSAGE);
            }
        };

        match parse_monarchs(&body, years::current_year()) {
            Ok(monarchs) => FetchOutcome::success(monarchs, "fetched from remote"),
            Err(e) => {
                tracing::error!(error = ?e, "monarch dataset parse failed");
                counter!("fetch_errors_total").increment(1);
                FetchOutcome::failure(PARSE_ERROR_MESSAGE)
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Parse a response body as a JSON array of monarch records, deriving reign
/// years for each.
///
/// A non-array top level is a failure here. The data provider has only ever
/// served arrays; anything else means the endpoint moved or broke, and an
/// empty-success would mask that.
pub fn parse_monarchs(body: &str, current_year: i32) -> Result<Vec<Monarch>> {
    ensure_metrics_described();
    let t0 = std::time::Instant::now();

    let value: serde_json::Value = serde_json::from_str(body).context("parsing monarch json")?;
    if !value.is_array() {
        tracing::warn!("top-level json value is not an array");
        anyhow::bail!("top-level json value is not an array");
    }

    let mut monarchs: Vec<Monarch> =
        serde_json::from_value(value).context("deserializing monarch records")?;
    for m in &mut monarchs {
        let (start, end) = years::parse_reign_at(&m.years_raw, current_year);
        m.start_year = start;
        m.end_year = end;
    }

    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("fetch_parse_ms").record(ms);
    counter!("fetch_records_total").increment(monarchs.len() as u64);
    Ok(monarchs)
}
