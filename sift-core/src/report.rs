// Report generation from ranked search results

use crate::search::extract_identifier_path;
use serde::{Deserialize, Serialize};
use sift_engine::ScoredDocument;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

pub fn generate_text_report(results: &[ScoredDocument], term: &str) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Search term: {}\n", term));
    report.push_str(&format!("  Documents ranked: {}\n", results.len()));

    let matching = results.iter().filter(|r| r.score.term_score > 0).count();
    report.push_str(&format!("  Documents mentioning the term: {}\n", matching));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    for (idx, result) in results.iter().enumerate() {
        let score = &result.score;

        // Color the deciding factor: green when the term was found,
        // dimmed otherwise.
        let term_str = if score.term_score > 0 {
            format!("\x1b[32m{}\x1b[0m", score.term_score) // Green
        } else {
            format!("\x1b[90m{}\x1b[0m", score.term_score) // Gray
        };
        let penalty_str = if score.self_reference_penalty < 0 {
            format!("\x1b[31m{}\x1b[0m", score.self_reference_penalty) // Red
        } else {
            format!("{}", score.self_reference_penalty)
        };

        report.push_str(&format!("  {:>3}. {}\n", idx + 1, result.identifier));
        report.push_str(&format!(
            "       term {}  freshness {}  links {}  tags {}  self {}\n",
            term_str, score.freshness_score, score.link_score, score.tag_score, penalty_str
        ));
    }
    report.push('\n');

    report
}

pub fn generate_json_report(
    results: &[ScoredDocument],
    term: &str,
) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Sift",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "query": {
                "term": term
            },
            "summary": {
                "total_documents": results.len(),
                "matching_documents": results.iter().filter(|r| r.score.term_score > 0).count(),
                "top_result": results.first().map(|r| extract_identifier_path(&r.identifier))
            },
            "results": results
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
