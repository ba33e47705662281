use std::time::Instant;

use reqwest::Client;
use url::Url;

use super::prelude::*;
use super::report;
use crate::config::model::RequestCount;

/// Issue a single GET and classify the outcome.
///
/// The elapsed time runs from just before the request is sent until the
/// whole response body has been read. A body that cannot be read completely
/// counts as a transport error.
pub async fn probe_once(client: &Client, url: &Url) -> Attempt {
    let start = Instant::now();
    let resp = match client.get(url.clone()).send().await {
        Ok(resp) => resp,
        Err(e) => return Attempt::Error(e),
    };

    let status = resp.status().as_u16();
    let body_len = match resp.bytes().await {
        Ok(body) => body.len(),
        Err(e) => return Attempt::Error(e),
    };
    let elapsed = start.elapsed();

    tracing::debug!(%url, status, body_len, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "response received");
    Attempt::from_status(status, elapsed)
}

/// The single diagnostic line written for a transport error.
pub fn error_line(host: &str, err: &reqwest::Error) -> String {
    format!("error requesting {host}: {}", report(err))
}

/// Run `count` sequential attempts against one host and collect the stats.
///
/// `host` is the name as the user gave it and is what diagnostics show.
/// Every attempt runs regardless of earlier outcomes; nothing is retried.
pub async fn probe_host(client: &Client, host: &str, url: &Url, count: RequestCount) -> HostStats {
    tracing::info!(host, count = count.get(), "probing host");

    let mut stats = HostStats::default();
    for _ in 0..count.get() {
        let attempt = probe_once(client, url).await;
        if let Attempt::Error(e) = &attempt {
            tracing::warn!("{}", error_line(host, e));
        }
        stats.record(&attempt);
    }

    tracing::debug!(host, attempts = stats.attempts(), errors = stats.error_count, "host done");
    stats
}
