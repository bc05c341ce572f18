//! Grounding-source deduplication.

use std::collections::HashSet;

use crate::domain::{GroundingSource, RawCitation};

/// Collapse raw citations to one grounding source per unique locator.
///
/// Records missing a non-empty uri or title are dropped. The first
/// occurrence of a locator wins: its title is kept and output order is the
/// order of first occurrence, not sorted. Citations are supplementary, so
/// absent or malformed data yields fewer sources rather than an error.
pub fn dedup_sources(citations: &[RawCitation]) -> Vec<GroundingSource> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut sources = Vec::new();

    for citation in citations {
        let (Some(uri), Some(title)) = (citation.uri(), citation.title()) else {
            continue;
        };
        if uri.is_empty() || title.is_empty() {
            continue;
        }
        if seen.insert(uri) {
            sources.push(GroundingSource::new(uri, title));
        }
    }

    sources
}
