use sift::handlers::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_parse_seed_line_url() {
    let result = parse_seed_line("https://example.com/index.html");
    assert_eq!(result, Some("https://example.com/index.html".to_string()));
}

#[test]
fn test_parse_seed_line_local_path() {
    let result = parse_seed_line("/var/www/site/index.html");
    assert_eq!(result, Some("/var/www/site/index.html".to_string()));
}

#[test]
fn test_parse_seed_line_skips_blank_and_comments() {
    assert_eq!(parse_seed_line(""), None);
    assert_eq!(parse_seed_line("# a comment"), None);
}

#[test]
fn test_extract_identifier_path() {
    assert_eq!(
        extract_identifier_path("https://example.com/docs/guide.html"),
        "/docs/guide.html"
    );
    assert_eq!(extract_identifier_path("https://example.com/"), "/");
    assert_eq!(extract_identifier_path("https://example.com"), "/");
}

#[test]
fn test_load_seeds_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "https://example.com/index.html")?;
    writeln!(temp_file, "/var/www/site/index.html")?;
    writeln!(temp_file)?; // Empty line
    writeln!(temp_file, "# skipped")?;
    writeln!(temp_file, "site/other.html")?;

    let path = PathBuf::from(temp_file.path());
    let seeds = load_seeds_from_file(&path)?;

    assert_eq!(seeds.len(), 3);
    assert_eq!(seeds[0], "https://example.com/index.html");
    assert_eq!(seeds[1], "/var/www/site/index.html");
    assert_eq!(seeds[2], "site/other.html");

    Ok(())
}

#[test]
fn test_load_seeds_from_file_empty() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "   ").unwrap();

    let path = PathBuf::from(temp_file.path());
    let result = load_seeds_from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("No valid seeds"));
}

#[test]
fn test_load_seeds_from_source_single_seed() {
    let seed = "https://example.com/index.html".to_string();
    let result = load_seeds_from_source(Some(&seed), None).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0], "https://example.com/index.html");
}

#[test]
fn test_load_seeds_from_source_no_input() {
    let result = load_seeds_from_source(None, None);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .contains("Either --seed or --seeds-file must be provided")
    );
}

#[test]
fn test_generate_text_report() {
    use sift_engine::{PageScore, ScoredDocument};

    let results = vec![
        ScoredDocument::new(
            "https://example.com/guide.html".to_string(),
            PageScore {
                term_score: 15,
                tag_score: 42,
                link_score: 20,
                self_reference_penalty: 0,
                freshness_score: 25,
            },
        ),
        ScoredDocument::new(
            "https://example.com/misc.html".to_string(),
            PageScore::default(),
        ),
    ];

    let report = generate_text_report(&results, "noronha");

    assert!(report.contains("Documents ranked: 2"));
    assert!(report.contains("Documents mentioning the term: 1"));
    assert!(report.contains("https://example.com/guide.html"));
    assert!(report.contains("freshness 25"));
}
