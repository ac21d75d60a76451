//! Closest-URL search for the active page.
//!
//! Every page whose URL is contained in the current URL is a candidate.
//! The candidate with the smallest edit distance to the current URL wins;
//! on ties the first one in pre-order wins.

use crate::page::Page;

/// A page that matched the current URL, addressed by its index path from
/// the top level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub distance: usize,
    pub path: Vec<usize>,
}

/// Collect candidates in pre-order.
pub(crate) fn collect_candidates(pages: &[Page], current_url: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut path = Vec::new();
    collect_into(pages, current_url, &mut path, &mut candidates);
    candidates
}

fn collect_into(
    pages: &[Page],
    current_url: &str,
    path: &mut Vec<usize>,
    candidates: &mut Vec<Candidate>,
) {
    for (index, page) in pages.iter().enumerate() {
        path.push(index);
        if page.matches_url(current_url) {
            candidates.push(Candidate {
                distance: levenshtein(current_url, page.url()),
                path: path.clone(),
            });
        }
        collect_into(page.pages(), current_url, path, candidates);
        path.pop();
    }
}

/// The candidate with minimum distance, first one on ties.
pub(crate) fn closest(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.iter().min_by_key(|candidate| candidate.distance)
}

/// Follow an index path down the tree.
pub(crate) fn page_at_mut<'a>(pages: &'a mut [Page], path: &[usize]) -> Option<&'a mut Page> {
    let (first, rest) = path.split_first()?;
    let page = pages.get_mut(*first)?;
    if rest.is_empty() {
        Some(page)
    } else {
        page_at_mut(page.pages_mut(), rest)
    }
}

/// Levenshtein edit distance with unit costs, over Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    // Single-row dynamic programming.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != *cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[b.len()]
}
