// The per-request pipeline: normalize, fetch, parse, check, score,
// recommend. Every failure becomes an error-tagged report; nothing here
// panics or propagates an error past the request boundary.

use crate::recommend::{recommend, DEFAULT_MAX_RECOMMENDATIONS};
use crate::report::{AnalysisMode, AnalysisReport, PageInfo};
use crate::score::{compute_score, Grade};
use seograde_analyzer::checks::run_checks;
use seograde_analyzer::document::PageDocument;
use seograde_analyzer::error::AnalyzeError;
use seograde_analyzer::fetcher::{FetchResult, Fetcher, DEFAULT_TIMEOUT_SECS};
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub timeout: Duration,
    pub max_recommendations: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}

/// Normalize user input into a fully qualified http(s) URL. Bare domains get
/// an `https://` prefix; anything else unparseable is rejected before any
/// network traffic happens.
pub fn normalize_url(input: &str) -> Result<String, AnalyzeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnalyzeError::InvalidUrl("empty URL".to_string()));
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        return Err(AnalyzeError::InvalidUrl(format!(
            "unsupported scheme in '{}'",
            trimmed
        )));
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| AnalyzeError::InvalidUrl(format!("'{}': {}", trimmed, e)))?;

    if parsed.host_str().is_none() {
        return Err(AnalyzeError::InvalidUrl(format!(
            "'{}' has no host",
            trimmed
        )));
    }

    Ok(parsed.to_string())
}

fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(String::from))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Pure second half of the pipeline: everything after the network. Given the
/// same fetch result, the output is identical, which is what makes re-running
/// an analysis on unchanged input idempotent.
pub fn analyze_fetched(
    fetch: &FetchResult,
    mode: AnalysisMode,
    options: &AnalysisOptions,
) -> AnalysisReport {
    let url = fetch.final_url.clone();
    let domain = domain_of(&url);

    let document = match PageDocument::parse(&fetch.html_body) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Parse failed for {}: {}", url, e);
            return AnalysisReport::failure(url, domain, mode, e.to_string());
        }
    };

    let findings = run_checks(&document, fetch);
    let overall_score = compute_score(&findings);
    let grade = Grade::from_score(overall_score);
    let recommendations = recommend(&findings, options.max_recommendations);

    AnalysisReport {
        url,
        domain,
        mode,
        page: Some(PageInfo {
            status_code: fetch.status_code,
            final_url: fetch.final_url.clone(),
            elapsed_time_ms: fetch.elapsed_time_ms,
            page_size_kb: (fetch.byte_size as f64 / 1024.0 * 100.0).round() / 100.0,
        }),
        findings,
        overall_score,
        grade,
        recommendations,
        error: None,
    }
}

/// Run one analysis request end to end. The single network call is the only
/// suspension point; its timeout bounds the whole request.
pub async fn run_analysis(
    url: &str,
    options: &AnalysisOptions,
    mode: AnalysisMode,
) -> AnalysisReport {
    let normalized = match normalize_url(url) {
        Ok(u) => u,
        Err(e) => {
            warn!("Rejected URL '{}': {}", url, e);
            return AnalysisReport::failure(
                url.to_string(),
                "unknown".to_string(),
                mode,
                e.to_string(),
            );
        }
    };
    let domain = domain_of(&normalized);

    info!("Analyzing {} ({} mode)", normalized, mode.as_str());

    let fetcher = Fetcher::with_timeout(options.timeout);
    let fetch = match fetcher.fetch(&normalized).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Fetch failed for {}: {}", normalized, e);
            return AnalysisReport::failure(normalized, domain, mode, e.to_string());
        }
    };

    analyze_fetched(&fetch, mode, options)
}
