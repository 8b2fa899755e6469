use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("sift")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sift")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("search")
                .about(
                    "Crawl the document graph reachable from a seed and rank every visited \
                page against a search term.",
                )
                .arg(
                    arg!(-s --"seed" <SEED>)
                        .required(false)
                        .help("The seed document: a local path or an absolute URL")
                        .conflicts_with("seeds-file"),
                )
                .arg(
                    arg!(-S --"seeds-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of seed identifiers")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .conflicts_with("seed"),
                )
                .arg(
                    arg!(-t --"term" <TERM>)
                        .required(true)
                        .help("The search term to score documents against"),
                )
                .arg(
                    arg!(--"max-pages" <NUM>)
                        .required(false)
                        .help("Stop after scoring this many documents (default: unbounded)")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
}
