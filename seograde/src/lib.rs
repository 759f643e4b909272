// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{handle_analysis, write_report};

// Re-export the pipeline pieces the handlers are built on
pub use seograde_core::analysis::{normalize_url, AnalysisOptions};
pub use seograde_core::report::{
    generate_json_report, generate_text_report, AnalysisMode, AnalysisReport, ReportFormat,
};

pub fn print_banner() {
    println!(
        r#"
                                         _
 ___  ___  ___   __ _ _ __ __ _  ___| | ___
/ __|/ _ \/ _ \ / _` | '__/ _` |/ _` |/ _ \
\__ \  __/ (_) | (_| | | | (_| | (_| |  __/
|___/\___|\___/ \__, |_|  \__,_|\__,_|\___|
                |___/
"#
    );
    println!(
        "seograde v{} - heuristic SEO analysis\n",
        env!("CARGO_PKG_VERSION")
    );
}
