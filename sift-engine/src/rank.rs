use crate::score::ScoredDocument;
use std::cmp::Ordering;

/// Total order over scored documents, descending preference: term score
/// first, then freshness, then outbound links. Tag score and the
/// self-reference penalty are informational outputs and take no part in
/// the ordering.
pub fn compare(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.score
        .term_score
        .cmp(&a.score.term_score)
        .then(b.score.freshness_score.cmp(&a.score.freshness_score))
        .then(b.score.link_score.cmp(&a.score.link_score))
}

/// Sort documents by descending relevance. The sort is stable, so
/// documents equal on all three keys keep their input order.
pub fn rank(results: &mut [ScoredDocument]) {
    results.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::PageScore;

    fn doc(identifier: &str, term: i64, fresh: i64, link: i64) -> ScoredDocument {
        ScoredDocument::new(
            identifier.to_string(),
            PageScore {
                term_score: term,
                tag_score: 0,
                link_score: link,
                self_reference_penalty: 0,
                freshness_score: fresh,
            },
        )
    }

    #[test]
    fn test_term_score_dominates() {
        let mut results = vec![doc("low", 5, 30, 100), doc("high", 10, 0, 0)];
        rank(&mut results);
        assert_eq!(results[0].identifier, "high");
    }

    #[test]
    fn test_freshness_breaks_term_ties() {
        let mut results = vec![doc("a", 10, 5, 0), doc("b", 10, 20, 100)];
        rank(&mut results);
        assert_eq!(results[0].identifier, "b");
    }

    #[test]
    fn test_link_score_breaks_remaining_ties() {
        let mut results = vec![doc("few", 10, 5, 20), doc("many", 10, 5, 80)];
        rank(&mut results);
        assert_eq!(results[0].identifier, "many");
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut results = vec![doc("first", 10, 5, 20), doc("second", 10, 5, 20)];
        rank(&mut results);
        assert_eq!(results[0].identifier, "first");
        assert_eq!(results[1].identifier, "second");
    }

    #[test]
    fn test_tag_score_and_penalty_do_not_affect_order() {
        let mut a = doc("a", 10, 0, 0);
        a.score.tag_score = 1000;
        a.score.self_reference_penalty = -200;
        let mut results = vec![doc("b", 20, 0, 0), a];
        rank(&mut results);
        assert_eq!(results[0].identifier, "b");
    }
}
