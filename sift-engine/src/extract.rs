use crate::markup::MarkupView;
use tracing::debug;
use url::Url;

/// Extract every outbound reference from a document as an absolute,
/// comparable identifier. Encounter order is preserved and duplicates are
/// kept; the traversal dedups at visit time, not here. Extraction never
/// errors: unreadable markup simply yields nothing.
pub fn extract_links(identifier: &str, raw: &str) -> Vec<String> {
    let view = MarkupView::parse(raw);
    let links: Vec<String> = view
        .attr_values("a", "href")
        .into_iter()
        .filter(|href| !href.is_empty())
        .map(|href| resolve_reference(identifier, &href))
        .collect();
    debug!("Extracted {} links from {}", links.len(), identifier);
    links
}

/// Turn one reference into an absolute identifier. References that
/// already carry a network scheme are kept verbatim; relative references
/// resolve against the base location of the current document (its
/// identifier with the final path segment removed).
pub fn resolve_reference(identifier: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }

    if identifier.starts_with("http://") || identifier.starts_with("https://") {
        if let Ok(base) = Url::parse(identifier)
            && let Ok(resolved) = base.join(reference)
        {
            return resolved.to_string();
        }
        // A base URL that cannot be joined leaves the reference as-is;
        // the fetch will fail and degrade per the error policy.
        return reference.to_string();
    }

    let base = base_location(identifier);
    if base.is_empty() {
        normalize_path(reference)
    } else {
        normalize_path(&format!("{}/{}", base, reference))
    }
}

fn base_location(identifier: &str) -> &str {
    match identifier.rfind('/') {
        Some(at) => &identifier[..at],
        None => "",
    }
}

/// Collapse `.` and `..` segments the way URL resolution would.
fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}
