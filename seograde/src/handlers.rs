use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use seograde_core::analysis::AnalysisOptions;
use seograde_core::registry::{builtin_registry, AnalysisRequest};
use seograde_core::report::{generate_json_report, generate_text_report, ReportFormat};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber;

/// Shared handler for the three analysis subcommands. `operation` is the
/// registry name the subcommand maps to.
pub async fn handle_analysis(operation: &str, sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let url = sub_matches.get_one::<String>("url").unwrap();
    let timeout = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let format = sub_matches
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Text);
    let output = sub_matches.get_one::<PathBuf>("output");
    let max_recommendations = *sub_matches
        .get_one::<usize>("max-recommendations")
        .unwrap_or(&5);

    let registry = builtin_registry();
    let request = AnalysisRequest {
        url: url.clone(),
        options: AnalysisOptions {
            timeout: Duration::from_secs(timeout),
            max_recommendations,
        },
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Checking {}...", url));

    let future = match registry.dispatch(operation, request) {
        Some(future) => future,
        None => {
            spinner.finish_and_clear();
            eprintln!("{} Unknown operation: {}", "✗".red().bold(), operation);
            std::process::exit(1);
        }
    };

    let report = future.await;
    spinner.finish_and_clear();

    if let Some(ref error) = report.error {
        eprintln!(
            "{} Analysis failed for {}: {}",
            "✗".red().bold(),
            report.url,
            error
        );
    }

    let rendered = match format {
        ReportFormat::Text => generate_text_report(&report),
        ReportFormat::Json => match generate_json_report(&report) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("{} Failed to serialize report: {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        },
    };

    match output {
        Some(path) => match write_report(&rendered, path) {
            Ok(resolved) => {
                println!(
                    "{} Report saved to {}",
                    "✓".green().bold(),
                    resolved.display().to_string().bright_white()
                );
            }
            Err(e) => {
                eprintln!("{} {:#}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        },
        None => print!("{}", rendered),
    }

    if report.is_error() {
        std::process::exit(1);
    }
}

/// Write a rendered report to disk, expanding a leading tilde first.
pub fn write_report(content: &str, path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let resolved = PathBuf::from(expanded);

    seograde_core::report::save_report(content, &resolved)
        .with_context(|| format!("Failed to write report to {}", resolved.display()))?;

    Ok(resolved)
}
