// Report model and rendering.

use crate::score::Grade;
use seograde_analyzer::finding::{Category, CategoryFinding, CategoryMetrics};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const DIVIDER: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Full,
    Quick,
    MetaOnly,
}

impl AnalysisMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" => Some(AnalysisMode::Full),
            "quick" => Some(AnalysisMode::Quick),
            "meta" | "meta_only" | "meta-only" => Some(AnalysisMode::MetaOnly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Full => "full",
            AnalysisMode::Quick => "quick",
            AnalysisMode::MetaOnly => "meta_only",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Fetch metadata carried into the report; the body itself is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub status_code: u16,
    pub final_url: String,
    pub elapsed_time_ms: u64,
    pub page_size_kb: f64,
}

/// The aggregate result of one analysis request. Contains no wall-clock
/// fields, so identical inputs produce identical reports; timestamps are
/// added by the JSON envelope at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub domain: String,
    pub mode: AnalysisMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
    pub findings: Vec<CategoryFinding>,
    pub overall_score: u8,
    pub grade: Grade,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisReport {
    /// Error-tagged report for a request that never produced findings.
    pub fn failure(url: String, domain: String, mode: AnalysisMode, error: String) -> Self {
        Self {
            url,
            domain,
            mode,
            page: None,
            findings: Vec::new(),
            overall_score: 0,
            grade: Grade::Poor,
            recommendations: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn finding(&self, category: Category) -> Option<&CategoryFinding> {
        self.findings.iter().find(|f| f.category == category)
    }

    fn status_marker(&self, category: Category) -> &'static str {
        self.finding(category)
            .map(|f| f.status.marker())
            .unwrap_or("?")
    }
}

pub fn render_report(report: &AnalysisReport, format: &ReportFormat) -> String {
    match format {
        ReportFormat::Text => generate_text_report(report),
        ReportFormat::Json => generate_json_report(report)
            .unwrap_or_else(|e| format!("{{\"error\": \"report serialization failed: {}\"}}", e)),
    }
}

pub fn generate_text_report(report: &AnalysisReport) -> String {
    if report.is_error() {
        return generate_error_report(report);
    }

    match report.mode {
        AnalysisMode::Full => generate_full_report(report),
        AnalysisMode::Quick => generate_quick_report(report),
        AnalysisMode::MetaOnly => generate_meta_report(report),
    }
}

pub fn generate_json_report(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Seograde",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json",
            },
            "analysis": report,
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn generate_error_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(DIVIDER);
    out.push('\n');
    out.push_str("ANALYSIS FAILED\n");
    out.push_str(DIVIDER);
    out.push_str("\n\n");
    out.push_str(&format!("URL:    {}\n", report.url));
    out.push_str(&format!(
        "Error:  {}\n",
        report.error.as_deref().unwrap_or("unknown")
    ));

    out
}

fn generate_full_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(DIVIDER);
    out.push('\n');
    out.push_str("                          SEOGRADE ANALYSIS REPORT\n");
    out.push_str(DIVIDER);
    out.push_str("\n\n");

    out.push_str(&format!("URL:          {}\n", report.url));
    out.push_str(&format!("Domain:       {}\n", report.domain));
    if let Some(ref page) = report.page {
        out.push_str(&format!("Status:       {}\n", page.status_code));
        out.push_str(&format!("Load Time:    {} ms\n", page.elapsed_time_ms));
        out.push_str(&format!("Page Size:    {} KB\n", page.page_size_kb));
    }
    out.push('\n');
    out.push_str(&format!(
        "OVERALL SCORE: {}/100 ({})\n\n",
        report.overall_score,
        report.grade.as_str()
    ));

    out.push_str(DIVIDER);
    out.push('\n');
    out.push_str("CATEGORY CHECKS\n");
    out.push_str(DIVIDER);
    out.push_str("\n\n");

    for finding in &report.findings {
        out.push_str(&format!(
            "[{}] {}\n",
            finding.status.as_str().to_uppercase(),
            finding.category.display_name()
        ));
        out.push_str(&metrics_summary(&finding.metrics));
        for issue in &finding.issues {
            out.push_str(&format!("  - {}\n", issue));
        }
        out.push('\n');
    }

    if !report.recommendations.is_empty() {
        out.push_str(DIVIDER);
        out.push('\n');
        out.push_str("RECOMMENDATIONS\n");
        out.push_str(DIVIDER);
        out.push_str("\n\n");

        for (idx, recommendation) in report.recommendations.iter().enumerate() {
            out.push_str(&format!("{:>2}. {}\n", idx + 1, recommendation));
        }
        out.push('\n');
    }

    out
}

fn generate_quick_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} - SEO health: {} ({}/100)\n\n",
        report.domain,
        report.grade.as_str(),
        report.overall_score
    ));

    let https_marker = match report.finding(Category::Technical) {
        Some(CategoryFinding {
            metrics: CategoryMetrics::Technical { https, .. },
            ..
        }) => {
            if *https {
                "✓"
            } else {
                "✗"
            }
        }
        _ => "?",
    };

    out.push_str("Checks:\n");
    out.push_str(&format!(
        "[{}] Title  [{}] Meta description  [{}] H1 structure\n",
        report.status_marker(Category::Title),
        report.status_marker(Category::MetaDescription),
        report.status_marker(Category::Headers),
    ));
    out.push_str(&format!(
        "[{}] Content  [{}] Image alt text  [{}] HTTPS\n\n",
        report.status_marker(Category::Content),
        report.status_marker(Category::Images),
        https_marker,
    ));

    let issue_count: usize = report.findings.iter().map(|f| f.issues.len()).sum();
    out.push_str(&format!(
        "{} issues found, {} recommendations\n",
        issue_count,
        report.recommendations.len()
    ));

    out
}

fn generate_meta_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(DIVIDER);
    out.push('\n');
    out.push_str(&format!("META TAGS & SOCIAL MEDIA - {}\n", report.domain));
    out.push_str(DIVIDER);
    out.push_str("\n\n");

    if let Some(finding) = report.finding(Category::Title) {
        out.push_str("TITLE\n");
        if let CategoryMetrics::Title { text, length } = &finding.metrics {
            out.push_str(&format!(
                "  Content: \"{}\"\n",
                text.as_deref().unwrap_or("MISSING")
            ));
            out.push_str(&format!("  Length:  {} characters (optimal: 30-60)\n", length));
        }
        push_issue_lines(&mut out, &finding.issues);
        out.push('\n');
    }

    if let Some(finding) = report.finding(Category::MetaDescription) {
        out.push_str("META DESCRIPTION\n");
        if let CategoryMetrics::MetaDescription { text, length } = &finding.metrics {
            out.push_str(&format!(
                "  Content: \"{}\"\n",
                text.as_deref().unwrap_or("MISSING")
            ));
            out.push_str(&format!(
                "  Length:  {} characters (optimal: 120-160)\n",
                length
            ));
        }
        push_issue_lines(&mut out, &finding.issues);
        out.push('\n');
    }

    if let Some(finding) = report.finding(Category::Social) {
        if let CategoryMetrics::Social {
            og_present,
            og_missing,
            twitter_present,
            twitter_missing,
            canonical,
            robots_directives,
        } = &finding.metrics
        {
            out.push_str("ROBOTS\n");
            if robots_directives.is_empty() {
                out.push_str("  Not set (defaults to index,follow)\n");
            } else {
                out.push_str(&format!("  Directives: {}\n", robots_directives.join(", ")));
            }
            out.push('\n');

            out.push_str("CANONICAL\n");
            match canonical.as_deref() {
                Some(href) if !href.is_empty() => {
                    out.push_str(&format!("  {}\n", href));
                }
                Some(_) => out.push_str("  Present but empty\n"),
                None => out.push_str("  Missing\n"),
            }
            out.push('\n');

            out.push_str(&format!(
                "OPEN GRAPH ({}/{})\n",
                og_present.len(),
                og_present.len() + og_missing.len()
            ));
            for tag in og_present {
                out.push_str(&format!("  [✓] {}\n", tag));
            }
            for tag in og_missing {
                out.push_str(&format!("  [✗] {}\n", tag));
            }
            out.push('\n');

            out.push_str(&format!(
                "TWITTER CARDS ({}/{})\n",
                twitter_present.len(),
                twitter_present.len() + twitter_missing.len()
            ));
            for tag in twitter_present {
                out.push_str(&format!("  [✓] {}\n", tag));
            }
            for tag in twitter_missing {
                out.push_str(&format!("  [✗] {}\n", tag));
            }
            out.push('\n');

            push_issue_lines(&mut out, &finding.issues);
        }
    }

    out
}

fn push_issue_lines(out: &mut String, issues: &[String]) {
    for issue in issues {
        out.push_str(&format!("  ! {}\n", issue));
    }
}

fn metrics_summary(metrics: &CategoryMetrics) -> String {
    match metrics {
        CategoryMetrics::Title { text, length } => match text {
            Some(t) if !t.is_empty() => {
                format!("  \"{}\" ({} characters)\n", truncate(t, 70), length)
            }
            _ => String::new(),
        },
        CategoryMetrics::MetaDescription { text, length } => match text {
            Some(t) => format!("  \"{}\" ({} characters)\n", truncate(t, 70), length),
            None => String::new(),
        },
        CategoryMetrics::Headers { counts } => {
            format!(
                "  H1: {}  H2: {}  H3: {}  H4: {}  H5: {}  H6: {}\n",
                counts[0], counts[1], counts[2], counts[3], counts[4], counts[5]
            )
        }
        CategoryMetrics::Content {
            word_count,
            text_ratio_pct,
            ..
        } => {
            format!(
                "  {} words, {:.1}% text-to-HTML ratio\n",
                word_count, text_ratio_pct
            )
        }
        CategoryMetrics::Images {
            total,
            with_alt,
            alt_pct,
            ..
        } => {
            format!(
                "  {} images, {} with alt text ({:.1}%)\n",
                total, with_alt, alt_pct
            )
        }
        CategoryMetrics::Technical {
            https,
            elapsed_time_ms,
            page_size_kb,
            has_structured_data,
        } => {
            format!(
                "  HTTPS: {}  Load: {} ms  Size: {} KB  Structured data: {}\n",
                yes_no(*https),
                elapsed_time_ms,
                page_size_kb,
                yes_no(*has_structured_data)
            )
        }
        CategoryMetrics::Social {
            og_present,
            og_missing,
            twitter_present,
            twitter_missing,
            ..
        } => {
            format!(
                "  Open Graph: {}/{}  Twitter Cards: {}/{}\n",
                og_present.len(),
                og_present.len() + og_missing.len(),
                twitter_present.len(),
                twitter_present.len() + twitter_missing.len()
            )
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
