use serde::{Deserialize, Serialize};

/// The five relevance factors computed for one visited document.
///
/// The factors stay separate rather than being blended into a scalar; the
/// ranking comparator needs ordered access to individual factors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageScore {
    pub term_score: i64,
    pub tag_score: i64,
    pub link_score: i64,
    /// Always zero or negative.
    pub self_reference_penalty: i64,
    /// Clamped to [0, 30].
    pub freshness_score: i64,
}

/// One visited document paired with its score. Created once per distinct
/// identifier and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub identifier: String,
    pub score: PageScore,
}

impl ScoredDocument {
    pub fn new(identifier: String, score: PageScore) -> Self {
        Self { identifier, score }
    }

    /// A document that could not be read scores as if the term were
    /// absent everywhere.
    pub fn unreadable(identifier: String) -> Self {
        Self {
            identifier,
            score: PageScore::default(),
        }
    }
}
