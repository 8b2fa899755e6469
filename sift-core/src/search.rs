use indicatif::{ProgressBar, ProgressStyle};
use sift_engine::rank::rank;
use sift_engine::{Crawler, DocumentSource, ScoredDocument};
use std::collections::HashSet;
use std::sync::Arc;
use url::Url;

/// Options for configuring a search operation
pub struct SearchOptions {
    pub seeds: Vec<String>,
    pub term: String,
    pub max_pages: Option<usize>,
    pub show_progress_bars: bool,
}

/// Callback for reporting search progress
pub type SearchProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Extract the path component from an identifier; local paths come back
/// unchanged.
pub fn extract_identifier_path(identifier: &str) -> String {
    Url::parse(identifier)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| identifier.to_string())
}

/// Crawl every seed, merge the scored documents and rank them.
/// Returns the ranked results; a seed that cannot be read still yields a
/// zero-scored entry rather than failing the search.
pub async fn execute_search(
    options: SearchOptions,
    progress_callback: Option<SearchProgressCallback>,
) -> Vec<ScoredDocument> {
    let SearchOptions {
        seeds,
        term,
        max_pages,
        show_progress_bars,
    } = options;

    // Single spinner for overall progress (only if enabled)
    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        Some(Arc::new(pb))
    } else {
        None
    };

    // Per-document callback wired into the engine (only if progress bars
    // are enabled)
    let internal_progress_callback: sift_engine::crawler::ProgressCallback =
        if let Some(ref pb) = progress_bar {
            let pb_clone = pb.clone();
            Arc::new(move |visited: usize, identifier: String| {
                pb_clone.set_message(format!(
                    "Scoring {} ({} documents visited)",
                    extract_identifier_path(&identifier),
                    visited
                ));
                pb_clone.tick();
            })
        } else {
            Arc::new(|_visited: usize, _identifier: String| {})
        };

    let mut all_results: Vec<ScoredDocument> = Vec::new();
    let mut seen = HashSet::new();

    for (idx, seed) in seeds.iter().enumerate() {
        if let Some(ref callback) = progress_callback
            && seeds.len() > 1
        {
            callback(format!(
                "Crawling seed {}/{}: {}",
                idx + 1,
                seeds.len(),
                seed
            ));
        }

        let mut crawler = Crawler::new(DocumentSource::for_seed(seed))
            .with_progress_callback(internal_progress_callback.clone());
        if let Some(limit) = max_pages {
            crawler = crawler.with_max_pages(limit);
        }

        // Seeds may reach overlapping graphs; keep the first score for
        // each identifier.
        for result in crawler.crawl(seed, &term).await {
            if seen.insert(result.identifier.clone()) {
                all_results.push(result);
            }
        }
    }

    rank(&mut all_results);

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!(
            "Crawl complete! {} documents ranked",
            all_results.len()
        ));
    }

    all_results
}
