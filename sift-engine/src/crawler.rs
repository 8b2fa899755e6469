use crate::extract::extract_links;
use crate::score::ScoredDocument;
use crate::scorer::score_document;
use crate::store::DocumentStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Drives a depth-first, pre-order walk of the link graph rooted at a
/// seed identifier, visiting each distinct identifier exactly once.
pub struct Crawler<S> {
    store: S,
    max_pages: Option<usize>,
    progress_callback: Option<ProgressCallback>,
}

/// Traversal state owned by a single `crawl` call. The visited set grows
/// monotonically and is the dedup key for the whole session.
struct CrawlSession {
    visited: HashSet<String>,
    results: Vec<ScoredDocument>,
}

impl<S: DocumentStore> Crawler<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_pages: None,
            progress_callback: None,
        }
    }

    /// Safety bound on the number of scored documents. Unset means the
    /// crawl is limited only by the reachable graph.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Walk the link graph from `seed`, scoring every reachable document
    /// against `term`. Never fails: unreadable documents score as if the
    /// term were absent and contribute no further links. Results come
    /// back in visit order; ranking is the caller's concern.
    pub async fn crawl(&self, seed: &str, term: &str) -> Vec<ScoredDocument> {
        info!("Starting crawl of {} for term '{}'", seed, term);

        let mut session = CrawlSession {
            visited: HashSet::new(),
            results: Vec::new(),
        };
        // Explicit work stack instead of recursion; links are pushed in
        // reverse so they are taken in extraction order.
        let mut stack = vec![seed.to_string()];

        while let Some(identifier) = stack.pop() {
            if !session.visited.insert(identifier.clone()) {
                continue;
            }
            if let Some(limit) = self.max_pages
                && session.results.len() >= limit
            {
                warn!("Page budget of {} reached, stopping crawl", limit);
                break;
            }
            if let Some(ref callback) = self.progress_callback {
                callback(session.results.len(), identifier.clone());
            }

            match self.store.read(&identifier).await {
                Ok(raw) => {
                    let score = score_document(&identifier, &raw, term);
                    session
                        .results
                        .push(ScoredDocument::new(identifier.clone(), score));

                    for link in extract_links(&identifier, &raw).into_iter().rev() {
                        if !session.visited.contains(&link) {
                            stack.push(link);
                        }
                    }
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", identifier, e);
                    session.results.push(ScoredDocument::unreadable(identifier));
                }
            }
        }

        info!("Crawl complete. Visited {} documents", session.results.len());
        session.results
    }
}
