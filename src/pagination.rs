//! Pagination Utilities
//!
//! Which page buttons to render for a page navigation bar.

/// One slot in the page navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    /// Skipped run of pages
    Gap,
}

/// Show every page up to this count, otherwise collapse with gaps
const FULL_LIST_MAX: usize = 7;

/// Page links for `total` pages around `current` (1-based)
///
/// Always includes the first and last page and the neighbours of the
/// current page; skipped runs become a single `Gap`.
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    if total <= FULL_LIST_MAX {
        return (1..=total).map(PageLink::Page).collect();
    }
    let current = current.clamp(1, total);
    let mut pages = vec![1, total];
    for page in current.saturating_sub(1)..=current + 1 {
        if page >= 1 && page <= total {
            pages.push(page);
        }
    }
    pages.sort_unstable();
    pages.dedup();

    let mut links = Vec::with_capacity(pages.len() * 2);
    let mut previous = 0;
    for page in pages {
        if previous != 0 && page > previous + 1 {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(page));
        previous = page;
    }
    links
}
