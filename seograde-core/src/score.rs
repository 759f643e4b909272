// Weighted aggregation of category findings into a 0-100 score.

use seograde_analyzer::finding::{Category, CategoryFinding, CheckStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    NeedsWork,
    Poor,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Grade::Excellent,
            80..=89 => Grade::Good,
            70..=79 => Grade::Fair,
            60..=69 => Grade::NeedsWork,
            _ => Grade::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Excellent => "EXCELLENT",
            Grade::Good => "GOOD",
            Grade::Fair => "FAIR",
            Grade::NeedsWork => "NEEDS WORK",
            Grade::Poor => "POOR",
        }
    }
}

/// Maximum points each category contributes. The table sums to 100 and is
/// weighted so title, meta description, headers, and content dominate the
/// social tags.
pub fn category_weight(category: Category) -> f64 {
    match category {
        Category::Title => 20.0,
        Category::MetaDescription => 15.0,
        Category::Headers => 15.0,
        Category::Content => 20.0,
        Category::Images => 10.0,
        Category::Technical => 15.0,
        Category::Social => 5.0,
    }
}

/// The same status-to-fraction mapping applies to every category.
pub fn status_fraction(status: CheckStatus) -> f64 {
    match status {
        CheckStatus::Pass => 1.0,
        CheckStatus::Warn => 0.5,
        CheckStatus::Fail => 0.0,
    }
}

/// Deterministic weighted sum over the findings, rounded and clamped to
/// [0, 100].
pub fn compute_score(findings: &[CategoryFinding]) -> u8 {
    let total: f64 = findings
        .iter()
        .map(|f| category_weight(f.category) * status_fraction(f.status))
        .sum();

    total.round().clamp(0.0, 100.0) as u8
}
