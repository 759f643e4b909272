use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("seograde")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("seograde")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(with_analysis_args(
            command!("analyze").about("Run the comprehensive SEO analysis for a webpage"),
        ))
        .subcommand(with_analysis_args(
            command!("quick").about("Quick SEO health check for a webpage"),
        ))
        .subcommand(with_analysis_args(
            command!("meta").about("Focused analysis of meta tags and social media optimization"),
        ))
}

/// All three analysis subcommands take the same arguments; only the
/// registered operation behind them differs.
fn with_analysis_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        arg!(-u --"url" <URL>)
            .required(true)
            .help("The webpage URL to analyze (bare domains are prefixed with https://)"),
    )
    .arg(
        arg!(--"timeout" <SECONDS>)
            .required(false)
            .help("Request timeout in seconds")
            .value_parser(clap::value_parser!(u64))
            .default_value("10"),
    )
    .arg(
        arg!(-f --"format" <FORMAT>)
            .required(false)
            .help("Report format: text, json")
            .value_parser(["text", "json"])
            .default_value("text"),
    )
    .arg(
        arg!(-o --"output" <PATH>)
            .required(false)
            .help("Save report to file (default: display to screen)")
            .value_parser(clap::value_parser!(std::path::PathBuf)),
    )
    .arg(
        arg!(--"max-recommendations" <COUNT>)
            .required(false)
            .help("Maximum number of recommendations to emit")
            .value_parser(clap::value_parser!(usize))
            .default_value("5"),
    )
}
