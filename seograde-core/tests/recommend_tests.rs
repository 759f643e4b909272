// Tests for recommendation generation

use seograde_analyzer::finding::{Category, CategoryFinding, CategoryMetrics, CheckStatus};
use seograde_core::recommend::{category_priority, recommend, DEFAULT_MAX_RECOMMENDATIONS};

fn title_finding(issues: Vec<&str>) -> CategoryFinding {
    CategoryFinding::new(
        CheckStatus::Fail,
        CategoryMetrics::Title {
            text: None,
            length: 0,
        },
        issues.into_iter().map(String::from).collect(),
    )
}

fn technical_finding(issues: Vec<&str>) -> CategoryFinding {
    CategoryFinding::new(
        CheckStatus::Fail,
        CategoryMetrics::Technical {
            https: false,
            elapsed_time_ms: 2500,
            page_size_kb: 60.0,
            has_structured_data: false,
        },
        issues.into_iter().map(String::from).collect(),
    )
}

fn social_finding(issues: Vec<&str>) -> CategoryFinding {
    CategoryFinding::new(
        CheckStatus::Warn,
        CategoryMetrics::Social {
            og_present: vec![],
            og_missing: vec!["og:title".to_string()],
            twitter_present: vec![],
            twitter_missing: vec![],
            canonical: None,
            robots_directives: vec![],
        },
        issues.into_iter().map(String::from).collect(),
    )
}

fn images_finding(missing_alt: usize) -> CategoryFinding {
    CategoryFinding::new(
        CheckStatus::Warn,
        CategoryMetrics::Images {
            total: 10,
            with_alt: 10 - missing_alt,
            missing_alt,
            alt_pct: 0.0,
        },
        vec![format!("{} images missing alt text", missing_alt)],
    )
}

// ============================================================================
// Priority Order Tests
// ============================================================================

#[test]
fn test_priority_order_technical_first_social_last() {
    assert!(category_priority(Category::Technical) < category_priority(Category::Title));
    assert!(category_priority(Category::Title) < category_priority(Category::MetaDescription));
    assert!(category_priority(Category::Content) < category_priority(Category::Images));
    assert!(category_priority(Category::Images) < category_priority(Category::Social));
}

#[test]
fn test_technical_advice_comes_before_social() {
    // Findings deliberately supplied in reverse priority order.
    let findings = vec![
        social_finding(vec!["Missing Open Graph tags: og:title"]),
        technical_finding(vec!["Page is not served over HTTPS"]),
    ];

    let recommendations = recommend(&findings, DEFAULT_MAX_RECOMMENDATIONS);
    assert_eq!(
        recommendations[0],
        "Implement SSL and serve the page over HTTPS"
    );
    assert_eq!(
        recommendations[1],
        "Add Open Graph tags for better social media sharing"
    );
}

// ============================================================================
// Deduplication and Cap Tests
// ============================================================================

#[test]
fn test_recommendations_are_deduplicated() {
    // Both title issues map to the same advice string.
    let findings = vec![title_finding(vec!["Missing title tag", "Title tag is empty"])];
    let recommendations = recommend(&findings, DEFAULT_MAX_RECOMMENDATIONS);

    assert_eq!(recommendations, vec!["Add a title tag to the page"]);
}

#[test]
fn test_no_two_identical_strings() {
    let findings = vec![
        technical_finding(vec![
            "Page is not served over HTTPS",
            "Page load time could be improved (2500ms)",
            "No structured data markup detected",
        ]),
        title_finding(vec!["Missing title tag"]),
        social_finding(vec!["Missing Open Graph tags: og:title"]),
    ];

    let recommendations = recommend(&findings, 10);
    let mut sorted = recommendations.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), recommendations.len());
}

#[test]
fn test_cap_truncates_output() {
    let findings = vec![
        technical_finding(vec![
            "Page is not served over HTTPS",
            "Page load time could be improved (2500ms)",
            "Page HTML is large (60 KB)",
            "No structured data markup detected",
        ]),
        title_finding(vec!["Missing title tag"]),
        social_finding(vec!["Missing Open Graph tags: og:title"]),
    ];

    let recommendations = recommend(&findings, 3);
    assert_eq!(recommendations.len(), 3);
    // Technical issues fill the cap before lower-priority categories.
    assert!(recommendations
        .iter()
        .all(|r| !r.contains("Open Graph")));
}

#[test]
fn test_zero_issues_means_zero_recommendations() {
    let findings = vec![CategoryFinding::new(
        CheckStatus::Pass,
        CategoryMetrics::Title {
            text: Some("fine".to_string()),
            length: 4,
        },
        vec![],
    )];
    assert!(recommend(&findings, DEFAULT_MAX_RECOMMENDATIONS).is_empty());
}

// ============================================================================
// Advice Wording Tests
// ============================================================================

#[test]
fn test_image_advice_carries_the_count() {
    let findings = vec![images_finding(7)];
    let recommendations = recommend(&findings, DEFAULT_MAX_RECOMMENDATIONS);
    assert_eq!(recommendations, vec!["Add alt text to 7 images"]);
}

#[test]
fn test_unknown_issue_passes_through() {
    let findings = vec![title_finding(vec!["Some novel issue text"])];
    let recommendations = recommend(&findings, DEFAULT_MAX_RECOMMENDATIONS);
    assert_eq!(recommendations, vec!["Some novel issue text"]);
}

#[test]
fn test_noindex_maps_to_high_priority_advice() {
    let findings = vec![social_finding(vec![
        "Page is set to noindex and will not appear in search results",
    ])];
    let recommendations = recommend(&findings, DEFAULT_MAX_RECOMMENDATIONS);
    assert_eq!(
        recommendations,
        vec!["Remove the noindex robots directive so search engines can index the page"]
    );
}
