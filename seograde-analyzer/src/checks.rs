// Independent SEO checks over a parsed page. Each check is a pure function
// producing one CategoryFinding; a missing element is a checked condition,
// never an error.

use crate::document::PageDocument;
use crate::fetcher::FetchResult;
use crate::finding::{CategoryFinding, CategoryMetrics, CheckStatus};
use url::Url;

pub const TITLE_MIN_CHARS: usize = 30;
pub const TITLE_MAX_CHARS: usize = 60;
pub const META_DESCRIPTION_MIN_CHARS: usize = 120;
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;
pub const MIN_WORD_COUNT: usize = 300;
pub const MIN_TEXT_RATIO_PCT: f64 = 10.0;
pub const SLOW_LOAD_MS: u64 = 2000;
pub const LARGE_PAGE_BYTES: usize = 45 * 1024;

const ESSENTIAL_OG_TAGS: [&str; 3] = ["og:title", "og:description", "og:image"];
const ESSENTIAL_TWITTER_TAGS: [&str; 3] = ["twitter:card", "twitter:title", "twitter:description"];

pub fn check_title(doc: &PageDocument) -> CategoryFinding {
    let title = doc.title();

    let (status, issues) = match title.as_deref() {
        None => (
            CheckStatus::Fail,
            vec!["Missing title tag".to_string()],
        ),
        Some("") => (
            CheckStatus::Fail,
            vec!["Title tag is empty".to_string()],
        ),
        Some(text) => {
            let length = text.chars().count();
            if length < TITLE_MIN_CHARS {
                (
                    CheckStatus::Warn,
                    vec![format!(
                        "Title is too short ({} characters, aim for {}-{})",
                        length, TITLE_MIN_CHARS, TITLE_MAX_CHARS
                    )],
                )
            } else if length > TITLE_MAX_CHARS {
                (
                    CheckStatus::Warn,
                    vec![format!(
                        "Title may be truncated in search results ({} characters, aim for {}-{})",
                        length, TITLE_MIN_CHARS, TITLE_MAX_CHARS
                    )],
                )
            } else {
                (CheckStatus::Pass, vec![])
            }
        }
    };

    let length = title.as_deref().map(|t| t.chars().count()).unwrap_or(0);
    CategoryFinding::new(
        status,
        CategoryMetrics::Title {
            text: title,
            length,
        },
        issues,
    )
}

pub fn check_meta_description(doc: &PageDocument) -> CategoryFinding {
    let description = doc.meta_content("description").filter(|d| !d.is_empty());

    let (status, issues) = match description.as_deref() {
        None => (
            CheckStatus::Fail,
            vec!["Missing meta description".to_string()],
        ),
        Some(text) => {
            let length = text.chars().count();
            if length < META_DESCRIPTION_MIN_CHARS {
                (
                    CheckStatus::Warn,
                    vec![format!(
                        "Meta description is too short ({} characters, aim for {}-{})",
                        length, META_DESCRIPTION_MIN_CHARS, META_DESCRIPTION_MAX_CHARS
                    )],
                )
            } else if length > META_DESCRIPTION_MAX_CHARS {
                (
                    CheckStatus::Warn,
                    vec![format!(
                        "Meta description may be truncated ({} characters, aim for {}-{})",
                        length, META_DESCRIPTION_MIN_CHARS, META_DESCRIPTION_MAX_CHARS
                    )],
                )
            } else {
                (CheckStatus::Pass, vec![])
            }
        }
    };

    let length = description
        .as_deref()
        .map(|d| d.chars().count())
        .unwrap_or(0);
    CategoryFinding::new(
        status,
        CategoryMetrics::MetaDescription {
            text: description,
            length,
        },
        issues,
    )
}

pub fn check_headers(doc: &PageDocument) -> CategoryFinding {
    let counts = doc.heading_counts();
    let h1_count = counts[0];
    let mut issues = Vec::new();

    let status = if h1_count == 1 {
        CheckStatus::Pass
    } else if h1_count == 0 {
        issues.push("Missing H1 tag".to_string());
        CheckStatus::Warn
    } else {
        issues.push(format!(
            "Multiple H1 tags found ({}), should have only one",
            h1_count
        ));
        CheckStatus::Fail
    };

    if counts.iter().all(|&c| c == 0) {
        issues.push("No header tags found".to_string());
    }

    CategoryFinding::new(status, CategoryMetrics::Headers { counts }, issues)
}

pub fn check_content(doc: &PageDocument) -> CategoryFinding {
    let text = doc.visible_text();
    let word_count = text.split_whitespace().count();
    let character_count = text.chars().count();

    let html_size = doc.raw_len();
    let text_ratio_pct = if html_size > 0 {
        round1(text.len() as f64 / html_size as f64 * 100.0)
    } else {
        0.0
    };

    let mut issues = Vec::new();
    if text_ratio_pct < MIN_TEXT_RATIO_PCT {
        issues.push(format!(
            "Low text-to-HTML ratio ({:.1}%)",
            text_ratio_pct
        ));
    }
    if word_count < MIN_WORD_COUNT {
        issues.push(format!(
            "Content is thin ({} words, aim for {}+)",
            word_count, MIN_WORD_COUNT
        ));
    }

    let status = if issues.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Warn
    };

    CategoryFinding::new(
        status,
        CategoryMetrics::Content {
            word_count,
            character_count,
            text_ratio_pct,
        },
        issues,
    )
}

pub fn check_images(doc: &PageDocument) -> CategoryFinding {
    let alts = doc.image_alts();
    let total = alts.len();
    let with_alt = alts
        .iter()
        .filter(|alt| alt.as_deref().is_some_and(|a| !a.trim().is_empty()))
        .count();
    let missing_alt = total - with_alt;

    let alt_pct = if total == 0 {
        100.0
    } else {
        round1(with_alt as f64 / total as f64 * 100.0)
    };

    let (status, issues) = if missing_alt > 0 {
        (
            CheckStatus::Warn,
            vec![format!("{} images missing alt text", missing_alt)],
        )
    } else {
        (CheckStatus::Pass, vec![])
    };

    CategoryFinding::new(
        status,
        CategoryMetrics::Images {
            total,
            with_alt,
            missing_alt,
            alt_pct,
        },
        issues,
    )
}

pub fn check_technical(doc: &PageDocument, fetch: &FetchResult) -> CategoryFinding {
    let https = Url::parse(&fetch.final_url)
        .map(|u| u.scheme() == "https")
        .unwrap_or(false);
    let has_structured_data = doc.has_structured_data();
    let page_size_kb = round2(fetch.byte_size as f64 / 1024.0);

    let mut issues = Vec::new();
    if !https {
        issues.push("Page is not served over HTTPS".to_string());
    }
    if fetch.elapsed_time_ms > SLOW_LOAD_MS {
        issues.push(format!(
            "Page load time could be improved ({}ms)",
            fetch.elapsed_time_ms
        ));
    }
    if fetch.byte_size > LARGE_PAGE_BYTES {
        issues.push(format!("Page HTML is large ({} KB)", page_size_kb));
    }
    if !has_structured_data {
        issues.push("No structured data markup detected".to_string());
    }

    // Only transport and speed degrade the status; page weight and missing
    // structured data stay informational.
    let status = if !https {
        CheckStatus::Fail
    } else if fetch.elapsed_time_ms > SLOW_LOAD_MS {
        CheckStatus::Warn
    } else {
        CheckStatus::Pass
    };

    CategoryFinding::new(
        status,
        CategoryMetrics::Technical {
            https,
            elapsed_time_ms: fetch.elapsed_time_ms,
            page_size_kb,
            has_structured_data,
        },
        issues,
    )
}

pub fn check_social(doc: &PageDocument) -> CategoryFinding {
    let og_tags = doc.open_graph_tags();
    let twitter_tags = doc.twitter_tags();

    let mut og_present = Vec::new();
    let mut og_missing = Vec::new();
    for tag in ESSENTIAL_OG_TAGS {
        if og_tags.get(tag).is_some_and(|v| !v.is_empty()) {
            og_present.push(tag.to_string());
        } else {
            og_missing.push(tag.to_string());
        }
    }

    let mut twitter_present = Vec::new();
    let mut twitter_missing = Vec::new();
    for tag in ESSENTIAL_TWITTER_TAGS {
        if twitter_tags.get(tag).is_some_and(|v| !v.is_empty()) {
            twitter_present.push(tag.to_string());
        } else {
            twitter_missing.push(tag.to_string());
        }
    }

    let canonical = doc.canonical_href();
    let robots_directives = doc.robots_directives();

    let mut issues = Vec::new();
    let noindex = robots_directives.iter().any(|d| d == "noindex");

    if noindex {
        issues.push(
            "Page is set to noindex and will not appear in search results".to_string(),
        );
    }
    if robots_directives.iter().any(|d| d == "nofollow") {
        issues.push("Page is set to nofollow, links will not be followed".to_string());
    }
    if !og_missing.is_empty() {
        issues.push(format!(
            "Missing Open Graph tags: {}",
            og_missing.join(", ")
        ));
    }
    match canonical.as_deref() {
        None => issues.push("Missing canonical URL".to_string()),
        Some("") => issues.push("Canonical tag exists but has no href".to_string()),
        Some(href) if !href.starts_with("http://") && !href.starts_with("https://") => {
            issues.push("Canonical URL should be absolute".to_string());
        }
        Some(_) => {}
    }

    // A deindexing directive trumps everything else on this page; an
    // incomplete Open Graph set is only a warning. Twitter tags and the
    // canonical link are reported without degrading the status.
    let status = if noindex {
        CheckStatus::Fail
    } else if !og_missing.is_empty() {
        CheckStatus::Warn
    } else {
        CheckStatus::Pass
    };

    CategoryFinding::new(
        status,
        CategoryMetrics::Social {
            og_present,
            og_missing,
            twitter_present,
            twitter_missing,
            canonical,
            robots_directives,
        },
        issues,
    )
}

/// Run every check, in the fixed category order. Checks share no state, so
/// the order only affects report layout.
pub fn run_checks(doc: &PageDocument, fetch: &FetchResult) -> Vec<CategoryFinding> {
    vec![
        check_title(doc),
        check_meta_description(doc),
        check_headers(doc),
        check_content(doc),
        check_images(doc),
        check_technical(doc, fetch),
        check_social(doc),
    ]
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
