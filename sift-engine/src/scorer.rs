use crate::markup::MarkupView;
use crate::score::PageScore;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Suffix identifying a reference the crawler can visit.
pub const DOCUMENT_SUFFIX: &str = ".html";

const TERM_FREQUENCY_WEIGHT: i64 = 5;
const TITLE_WEIGHT: i64 = 20;
const META_WEIGHT: i64 = 20;
const H1_WEIGHT: i64 = 15;
const H2_WEIGHT: i64 = 10;
const PARAGRAPH_WEIGHT: i64 = 5;
const ANCHOR_WEIGHT: i64 = 2;
const OUTBOUND_LINK_WEIGHT: i64 = 20;
const SELF_REFERENCE_WEIGHT: i64 = -20;
const FRESHNESS_MAX: i64 = 30;
const FRESHNESS_DECAY_PER_YEAR: i64 = 5;

/// Compute all five relevance factors for one document. The factors are
/// independent; each degrades to its neutral value on missing signals
/// rather than failing the others.
pub fn score_document(identifier: &str, raw: &str, term: &str) -> PageScore {
    let view = MarkupView::parse(raw);

    PageScore {
        term_score: term_frequency_score(raw, term),
        tag_score: tag_relevance_score(raw, &view, term),
        link_score: outbound_link_score(&view),
        self_reference_penalty: self_reference_penalty(&view, identifier),
        freshness_score: freshness_score(&view, Utc::now().year()),
    }
}

/// Case-insensitive occurrences of `term` in document prose, excluding
/// occurrences inside quoted attribute values, weighted by 5.
pub fn term_frequency_score(raw: &str, term: &str) -> i64 {
    if term.is_empty() {
        return 0;
    }
    let haystack = raw.to_lowercase();
    let needle = term.to_lowercase();
    let excluded = attribute_value_ranges(&haystack);

    let count = haystack
        .match_indices(&needle)
        .filter(|(at, _)| !excluded.iter().any(|&(start, end)| *at >= start && *at < end))
        .count();

    count as i64 * TERM_FREQUENCY_WEIGHT
}

/// Weighted structural matches plus the raw occurrence count of the term
/// anywhere in the text. The raw count includes attribute contexts and so
/// overlaps with the term-frequency factor; that duplication is part of
/// the scoring model.
pub fn tag_relevance_score(raw: &str, view: &MarkupView, term: &str) -> i64 {
    let mut relevance = 0;
    relevance += view.count_containing("title", term) as i64 * TITLE_WEIGHT;
    relevance += view.count_attr_containing("meta", "content", term) as i64 * META_WEIGHT;
    relevance += view.count_containing("h1", term) as i64 * H1_WEIGHT;
    relevance += view.count_containing("h2", term) as i64 * H2_WEIGHT;
    relevance += view.count_containing("p", term) as i64 * PARAGRAPH_WEIGHT;
    relevance += view.count_containing("a", term) as i64 * ANCHOR_WEIGHT;

    let frequency = raw_occurrences(raw, term) as i64;
    frequency + relevance
}

/// Crawlable outbound references, weighted by 20.
pub fn outbound_link_score(view: &MarkupView) -> i64 {
    crawlable_references(view).count() as i64 * OUTBOUND_LINK_WEIGHT
}

/// Crawlable references whose final path segment equals the document's
/// own, weighted by -20. Zero or negative.
pub fn self_reference_penalty(view: &MarkupView, identifier: &str) -> i64 {
    let own_segment = final_segment(identifier);
    crawlable_references(view)
        .filter(|href| final_segment(href) == own_segment)
        .count() as i64
        * SELF_REFERENCE_WEIGHT
}

/// Recency from the first `time[datetime]` element, decaying 5 points per
/// year from 30 and clamped to [0, 30]. A missing or unparseable
/// timestamp is neutral, not an error.
pub fn freshness_score(view: &MarkupView, current_year: i32) -> i64 {
    let Some(datetime) = view.first_attr("time", "datetime") else {
        return 0;
    };
    let Some(publication_year) = publication_year(&datetime) else {
        return 0;
    };

    let age = (current_year - publication_year) as i64;
    (FRESHNESS_MAX - FRESHNESS_DECAY_PER_YEAR * age).clamp(0, FRESHNESS_MAX)
}

fn crawlable_references(view: &MarkupView) -> impl Iterator<Item = String> {
    view.attr_values("a", "href")
        .into_iter()
        .filter(|href| href.ends_with(DOCUMENT_SUFFIX))
}

pub(crate) fn final_segment(identifier: &str) -> &str {
    identifier.rsplit('/').next().unwrap_or(identifier)
}

fn raw_occurrences(raw: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    raw.to_lowercase().matches(&term.to_lowercase()).count()
}

/// Byte ranges of quoted attribute values inside tags. Computed over the
/// same lowercased text the match offsets come from, so offsets line up.
fn attribute_value_ranges(text: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut in_tag = false;
    let mut quote: Option<u8> = None;
    let mut start = 0;

    for (at, byte) in text.bytes().enumerate() {
        match quote {
            Some(q) => {
                if byte == q {
                    ranges.push((start, at));
                    quote = None;
                }
            }
            None => match byte {
                b'<' if !in_tag => in_tag = true,
                b'>' if in_tag => in_tag = false,
                b'"' | b'\'' if in_tag => {
                    quote = Some(byte);
                    start = at + 1;
                }
                _ => {}
            },
        }
    }

    ranges
}

fn publication_year(datetime: &str) -> Option<i32> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(datetime) {
        return Some(parsed.year());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(datetime, "%Y-%m-%d") {
        return Some(parsed.year());
    }
    let leading: String = datetime.chars().take_while(|c| c.is_ascii_digit()).collect();
    if leading.len() == 4 {
        return leading.parse().ok();
    }
    None
}
