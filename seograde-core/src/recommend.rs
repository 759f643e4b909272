// Turns accumulated check issues into a short, prioritized list of
// actionable recommendations.

use seograde_analyzer::finding::{Category, CategoryFinding, CategoryMetrics};
use std::collections::HashSet;

pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;

/// Fixed walk order: technical problems first, social tags last.
pub fn category_priority(category: Category) -> usize {
    match category {
        Category::Technical => 0,
        Category::Title => 1,
        Category::MetaDescription => 2,
        Category::Headers => 3,
        Category::Content => 4,
        Category::Images => 5,
        Category::Social => 6,
    }
}

/// One recommendation per issue, walked in category priority order,
/// deduplicated (first occurrence wins) and truncated to `max`.
pub fn recommend(findings: &[CategoryFinding], max: usize) -> Vec<String> {
    let mut ordered: Vec<&CategoryFinding> = findings.iter().collect();
    ordered.sort_by_key(|f| category_priority(f.category));

    let mut seen = HashSet::new();
    let mut recommendations = Vec::new();

    for finding in ordered {
        for issue in &finding.issues {
            let advice = advice_for(finding, issue);
            if seen.insert(advice.clone()) {
                recommendations.push(advice);
            }
            if recommendations.len() == max {
                return recommendations;
            }
        }
    }

    recommendations
}

/// Maps a known issue to actionable wording; anything unrecognized passes
/// through verbatim so nothing found by a check is silently dropped.
fn advice_for(finding: &CategoryFinding, issue: &str) -> String {
    match finding.category {
        Category::Title => {
            if issue.contains("Missing") || issue.contains("empty") {
                "Add a title tag to the page".to_string()
            } else if issue.contains("too short") {
                "Expand the title tag (aim for 30-60 characters)".to_string()
            } else if issue.contains("truncated") {
                "Shorten the title tag to stay within 60 characters".to_string()
            } else {
                issue.to_string()
            }
        }
        Category::MetaDescription => {
            if issue.contains("Missing") {
                "Add a meta description tag".to_string()
            } else if issue.contains("too short") {
                "Expand the meta description (aim for 120-160 characters)".to_string()
            } else if issue.contains("truncated") {
                "Shorten the meta description to stay within 160 characters".to_string()
            } else {
                issue.to_string()
            }
        }
        Category::Headers => {
            if issue.contains("Missing H1") {
                "Add an H1 tag to the page".to_string()
            } else if issue.contains("Multiple H1") {
                "Use only one H1 tag per page".to_string()
            } else if issue.contains("No header tags") {
                "Add header tags to structure the content".to_string()
            } else {
                issue.to_string()
            }
        }
        Category::Content => {
            if issue.contains("thin") {
                "Increase content length (aim for 300+ words)".to_string()
            } else if issue.contains("text-to-HTML") {
                "Reduce markup overhead to raise the text-to-HTML ratio".to_string()
            } else {
                issue.to_string()
            }
        }
        Category::Images => {
            if issue.contains("missing alt text") {
                if let CategoryMetrics::Images { missing_alt, .. } = &finding.metrics {
                    format!("Add alt text to {} images", missing_alt)
                } else {
                    "Add alt text to images".to_string()
                }
            } else {
                issue.to_string()
            }
        }
        Category::Technical => {
            if issue.contains("HTTPS") {
                "Implement SSL and serve the page over HTTPS".to_string()
            } else if issue.contains("load time") {
                "Improve page load speed".to_string()
            } else if issue.contains("large") {
                "Reduce page weight to speed up loading".to_string()
            } else if issue.contains("structured data") {
                "Add structured data (JSON-LD) markup".to_string()
            } else {
                issue.to_string()
            }
        }
        Category::Social => {
            if issue.contains("noindex") {
                "Remove the noindex robots directive so search engines can index the page"
                    .to_string()
            } else if issue.contains("nofollow") {
                "Review the nofollow robots directive".to_string()
            } else if issue.contains("Open Graph") {
                "Add Open Graph tags for better social media sharing".to_string()
            } else if issue.contains("canonical") || issue.contains("Canonical") {
                "Add a canonical URL pointing at the page's absolute address".to_string()
            } else {
                issue.to_string()
            }
        }
    }
}
