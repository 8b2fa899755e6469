use clap::ArgMatches;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

// Helper functions for the search handler

/// Load seed identifiers from either a file or a single seed argument
pub fn load_seeds_from_source(
    seed: Option<&String>,
    seeds_file: Option<&PathBuf>,
) -> Result<Vec<String>, String> {
    if let Some(seeds_file_path) = seeds_file {
        load_seeds_from_file(seeds_file_path)
    } else if let Some(seed) = seed {
        Ok(vec![seed.clone()])
    } else {
        Err("Either --seed or --seeds-file must be provided".to_string())
    }
}

/// Load and parse seed identifiers from a file
pub fn load_seeds_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read seeds file {}: {}", path.display(), e))?;

    let seeds: Vec<String> = content
        .lines()
        .filter_map(|line| parse_seed_line(line.trim()))
        .collect();

    if seeds.is_empty() {
        return Err(format!("No valid seeds found in {}", path.display()));
    }

    Ok(seeds)
}

/// Parse a single line as a seed identifier. Blank lines and comments are
/// skipped; everything else is taken verbatim since a seed may be a local
/// path as well as a URL.
pub fn parse_seed_line(line: &str) -> Option<String> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.to_string())
}

// Re-export search types and functions from sift-core
pub use sift_core::report::{
    ReportFormat, generate_json_report, generate_text_report, save_report,
};
pub use sift_core::search::{
    SearchOptions, SearchProgressCallback, execute_search, extract_identifier_path,
};

pub async fn handle_search(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let seed = sub_matches.get_one::<String>("seed");
    let seeds_file = sub_matches.get_one::<PathBuf>("seeds-file");
    let term = sub_matches.get_one::<String>("term").expect("--term is required");
    let max_pages = sub_matches.get_one::<usize>("max-pages").copied();
    let output = sub_matches.get_one::<PathBuf>("output");
    let format = sub_matches
        .get_one::<String>("format")
        .and_then(|s| ReportFormat::from_str(s))
        .unwrap_or(ReportFormat::Text);

    // Load seeds from source
    let seeds = match load_seeds_from_source(seed, seeds_file) {
        Ok(seeds) => seeds,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    // Print search configuration
    println!(
        "\n🔍 Searching for '{}' from {} seed(s)",
        term.bright_white().bold(),
        seeds.len()
    );
    match max_pages {
        Some(limit) => println!("Page budget: {}\n", limit),
        None => println!("Page budget: unbounded\n"),
    }

    let options = SearchOptions {
        seeds,
        term: term.clone(),
        max_pages,
        show_progress_bars: true, // Enable progress bars in CLI mode
    };

    // Execute search with progress callback
    let progress_callback: SearchProgressCallback = Arc::new(|msg: String| {
        println!("{}", msg);
    });

    let results = execute_search(options, Some(progress_callback)).await;

    println!("\n{} Search complete!\n", "✓".green().bold());

    // Generate and deliver report
    let report = match format {
        ReportFormat::Text => generate_text_report(&results, term),
        ReportFormat::Json => match generate_json_report(&results, term) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("{} Failed to serialize report: {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        },
    };

    match output {
        Some(path) => {
            if let Err(e) = save_report(&report, path) {
                eprintln!(
                    "{} Failed to save report to {}: {}",
                    "✗".red().bold(),
                    path.display(),
                    e
                );
                std::process::exit(1);
            }
            println!("{} Report saved to {}", "✓".green().bold(), path.display());
        }
        None => print!("{}", report),
    }
}
