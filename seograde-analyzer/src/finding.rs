use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Title,
    MetaDescription,
    Headers,
    Content,
    Images,
    Technical,
    Social,
}

impl Category {
    /// Every category, in the order checks run and reports list them.
    pub const ALL: [Category; 7] = [
        Category::Title,
        Category::MetaDescription,
        Category::Headers,
        Category::Content,
        Category::Images,
        Category::Technical,
        Category::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Title => "title",
            Category::MetaDescription => "meta_description",
            Category::Headers => "headers",
            Category::Content => "content",
            Category::Images => "images",
            Category::Technical => "technical",
            Category::Social => "social",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Title => "Title",
            Category::MetaDescription => "Meta Description",
            Category::Headers => "Header Structure",
            Category::Content => "Content",
            Category::Images => "Images",
            Category::Technical => "Technical",
            Category::Social => "Social Media",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warn => "warn",
            CheckStatus::Fail => "fail",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✓",
            CheckStatus::Warn => "⚠",
            CheckStatus::Fail => "✗",
        }
    }
}

/// Per-category measurements, one struct variant per category so every field
/// has a name and a type instead of living in an untyped map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CategoryMetrics {
    Title {
        text: Option<String>,
        length: usize,
    },
    MetaDescription {
        text: Option<String>,
        length: usize,
    },
    Headers {
        /// h1..h6 counts, index 0 = h1.
        counts: [usize; 6],
    },
    Content {
        word_count: usize,
        character_count: usize,
        text_ratio_pct: f64,
    },
    Images {
        total: usize,
        with_alt: usize,
        missing_alt: usize,
        alt_pct: f64,
    },
    Technical {
        https: bool,
        elapsed_time_ms: u64,
        page_size_kb: f64,
        has_structured_data: bool,
    },
    Social {
        og_present: Vec<String>,
        og_missing: Vec<String>,
        twitter_present: Vec<String>,
        twitter_missing: Vec<String>,
        canonical: Option<String>,
        robots_directives: Vec<String>,
    },
}

impl CategoryMetrics {
    pub fn category(&self) -> Category {
        match self {
            CategoryMetrics::Title { .. } => Category::Title,
            CategoryMetrics::MetaDescription { .. } => Category::MetaDescription,
            CategoryMetrics::Headers { .. } => Category::Headers,
            CategoryMetrics::Content { .. } => Category::Content,
            CategoryMetrics::Images { .. } => Category::Images,
            CategoryMetrics::Technical { .. } => Category::Technical,
            CategoryMetrics::Social { .. } => Category::Social,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFinding {
    pub category: Category,
    pub status: CheckStatus,
    pub metrics: CategoryMetrics,
    pub issues: Vec<String>,
}

impl CategoryFinding {
    /// The category is derived from the metrics variant, so a finding can
    /// never carry metrics that belong to a different category.
    pub fn new(status: CheckStatus, metrics: CategoryMetrics, issues: Vec<String>) -> Self {
        Self {
            category: metrics.category(),
            status,
            metrics,
            issues,
        }
    }
}
