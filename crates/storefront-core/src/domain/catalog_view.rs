//! Catalog View Pipeline
//!
//! Derives the displayed page from a full product list: filter by search
//! text, stable sort by the selected key, then slice a page window.
//! Every function here is total; out-of-range pages come back empty.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Sort key for the product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending price
    #[default]
    Price,
    /// Ascending title, case-insensitive collation
    Title,
    /// Ascending id
    Id,
    /// Keep filtered order
    Unsorted,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Title => "title",
            SortKey::Id => "id",
            SortKey::Unsorted => "",
        }
    }

    /// Unknown keys sort nothing
    pub fn from_str(s: &str) -> Self {
        match s {
            "price" => SortKey::Price,
            "title" => SortKey::Title,
            "id" => SortKey::Id,
            _ => SortKey::Unsorted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Price => "Price",
            SortKey::Title => "Name",
            SortKey::Id => "ID",
            SortKey::Unsorted => "None",
        }
    }
}

/// Which text fields the search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    TitleOrDescription,
    TitleOnly,
}

/// Calling page; fixes page size, offered sort keys and search scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageContext {
    /// Featured products preview
    Home,
    /// Full product list
    Catalog,
    /// Admin product table
    Admin,
}

impl PageContext {
    pub fn page_size(&self) -> usize {
        match self {
            PageContext::Home => 4,
            PageContext::Catalog => 24,
            PageContext::Admin => 10,
        }
    }

    pub fn sort_options(&self) -> &'static [SortKey] {
        match self {
            PageContext::Home => &[SortKey::Price],
            PageContext::Catalog => &[SortKey::Price, SortKey::Title],
            PageContext::Admin => &[SortKey::Price, SortKey::Title, SortKey::Id],
        }
    }

    pub fn search_scope(&self) -> SearchScope {
        match self {
            PageContext::Admin => SearchScope::TitleOnly,
            PageContext::Home | PageContext::Catalog => SearchScope::TitleOrDescription,
        }
    }

    pub fn offers(&self, key: SortKey) -> bool {
        self.sort_options().contains(&key)
    }
}

/// Search, sort and page selection for one page instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewState {
    pub search: String,
    pub sort: SortKey,
    /// 1-based
    pub page: usize,
}

impl Default for CatalogViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortKey::Price,
            page: 1,
        }
    }
}

impl CatalogViewState {
    /// New search text; starts over at page 1
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// New sort key; starts over at page 1
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }
}

/// One page of the derived product list
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    /// The requested page, unclamped
    pub page: usize,
    pub total_pages: usize,
    /// Products left after filtering
    pub total_matches: usize,
}

/// Products whose searched fields contain `search`, case-insensitively
///
/// Empty search keeps every product in its original order.
pub fn filter_products<'a>(products: &'a [Product], search: &str, scope: SearchScope) -> Vec<&'a Product> {
    if search.is_empty() {
        return products.iter().collect();
    }
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || (scope == SearchScope::TitleOrDescription
                    && p.description.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort in place by `key`
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Price => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::Title => products.sort_by(|a, b| collate(&a.title, &b.title)),
        SortKey::Id => products.sort_by_key(|p| p.id),
        SortKey::Unsorted => {}
    }
}

// Case-folded comparison first so "apple" sorts beside "Apple"
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Slice page `page` (1-based) out of `items`
///
/// Returns the page and the total page count. Page 0, pages past the end
/// and a zero page size all give an empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> (Vec<T>, usize) {
    if page_size == 0 {
        return (Vec::new(), 0);
    }
    let total_pages = items.len().div_ceil(page_size);
    if page == 0 || page > total_pages {
        return (Vec::new(), total_pages);
    }
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    (items[start..end].to_vec(), total_pages)
}

/// Run the full pipeline for a page context
///
/// A sort key the context does not offer leaves the filtered order alone.
pub fn view_page(products: &[Product], state: &CatalogViewState, context: PageContext) -> CatalogPage {
    let mut matches = filter_products(products, &state.search, context.search_scope());
    if context.offers(state.sort) {
        sort_products(&mut matches, state.sort);
    }
    let (window, total_pages) = paginate(&matches, state.page, context.page_size());
    CatalogPage {
        items: window.into_iter().cloned().collect(),
        page: state.page,
        total_pages,
        total_matches: matches.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, title: &str, description: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: description.to_string(),
            price,
            category: "misc".to_string(),
            image: String::new(),
            rating: None,
            stock: 5,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(3, "Red Hat", "A wool hat", 12.0),
            product(1, "Blue Shirt", "Cotton top", 25.5),
            product(2, "apple watch", "Smart SHIRT companion", 199.0),
            product(4, "Bag", "Leather", 12.0),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_search_keeps_list_and_order() {
        let products = sample();
        let filtered = filter_products(&products, "", SearchScope::TitleOrDescription);
        assert_eq!(ids(&filtered), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_search_shirt_scenario() {
        let products = vec![
            product(1, "Blue Shirt", "", 10.0),
            product(2, "Red Hat", "", 10.0),
        ];
        let filtered = filter_products(&products, "shirt", SearchScope::TitleOrDescription);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Blue Shirt");
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let products = sample();
        let filtered = filter_products(&products, "ShIrT", SearchScope::TitleOrDescription);
        assert_eq!(ids(&filtered), vec![1, 2]);

        let title_only = filter_products(&products, "shirt", SearchScope::TitleOnly);
        assert_eq!(ids(&title_only), vec![1]);
    }

    #[test]
    fn test_price_sort_is_ascending_and_stable() {
        let products = sample();
        let mut list = filter_products(&products, "", SearchScope::TitleOrDescription);
        sort_products(&mut list, SortKey::Price);

        for pair in list.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
        // ids 3 and 4 share a price and keep their input order
        assert_eq!(ids(&list), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let products = sample();
        let mut list = filter_products(&products, "", SearchScope::TitleOrDescription);
        sort_products(&mut list, SortKey::Title);
        let titles: Vec<_> = list.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["apple watch", "Bag", "Blue Shirt", "Red Hat"]);
    }

    #[test]
    fn test_id_sort_and_unsorted() {
        let products = sample();
        let mut list = filter_products(&products, "", SearchScope::TitleOrDescription);
        sort_products(&mut list, SortKey::Unsorted);
        assert_eq!(ids(&list), vec![3, 1, 2, 4]);
        sort_products(&mut list, SortKey::Id);
        assert_eq!(ids(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!(SortKey::from_str("title"), SortKey::Title);
        assert_eq!(SortKey::from_str("rating"), SortKey::Unsorted);
        assert_eq!(SortKey::from_str(SortKey::Id.as_str()), SortKey::Id);
    }

    #[test]
    fn test_paginate_counts_and_out_of_range() {
        let items: Vec<u32> = (1..=25).collect();
        let (page, total) = paginate(&items, 1, 10);
        assert_eq!(total, 3);
        assert_eq!(page, (1..=10).collect::<Vec<_>>());

        let (last, _) = paginate(&items, 3, 10);
        assert_eq!(last, vec![21, 22, 23, 24, 25]);

        let (past_end, total) = paginate(&items, total + 5, 10);
        assert!(past_end.is_empty());
        assert_eq!(total, 3);

        let (zero, _) = paginate(&items, 0, 10);
        assert!(zero.is_empty());
    }

    #[test]
    fn test_paginate_empty_and_zero_size() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(paginate(&empty, 1, 6), (Vec::new(), 0));
        assert_eq!(paginate(&[1, 2, 3], 1, 0), (Vec::new(), 0));
    }

    #[test]
    fn test_view_page_pipeline() {
        let products: Vec<Product> = (1..=30)
            .map(|id| product(id, &format!("Item {}", id), "", (31 - id) as f64))
            .collect();
        let state = CatalogViewState {
            page: 2,
            ..CatalogViewState::default()
        };
        let page = view_page(&products, &state, PageContext::Catalog);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_matches, 30);
        // cheapest first; page 2 of 24 holds the 6 most expensive
        let page_ids: Vec<u32> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(page_ids, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_view_page_ignores_sort_key_not_offered() {
        let products = sample();
        let state = CatalogViewState {
            sort: SortKey::Id,
            ..CatalogViewState::default()
        };
        let page = view_page(&products, &state, PageContext::Catalog);
        let page_ids: Vec<u32> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(page_ids, vec![3, 1, 2, 4]);

        let admin = view_page(&products, &state, PageContext::Admin);
        let admin_ids: Vec<u32> = admin.items.iter().map(|p| p.id).collect();
        assert_eq!(admin_ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_page_context_defaults() {
        assert_eq!(PageContext::Home.page_size(), 4);
        assert_eq!(PageContext::Catalog.page_size(), 24);
        assert_eq!(PageContext::Admin.page_size(), 10);
        assert!(PageContext::Admin.offers(SortKey::Id));
        assert!(!PageContext::Home.offers(SortKey::Title));
    }

    #[test]
    fn test_search_from_later_page_returns_to_first() {
        let products: Vec<Product> = (1..=15)
            .map(|id| product(id, &format!("Item {}", id), "", id as f64))
            .collect();
        let mut state = CatalogViewState {
            page: 2,
            ..CatalogViewState::default()
        };
        assert_eq!(view_page(&products, &state, PageContext::Admin).items.len(), 5);

        state.set_search("item 7");
        let page = view_page(&products, &state, PageContext::Admin);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 1);

        state.page = 3;
        state.set_sort(SortKey::Title);
        assert_eq!(state.page, 1);
        assert_eq!(state.sort, SortKey::Title);
    }

    #[test]
    fn test_out_of_range_view_page_is_empty() {
        let products = sample();
        let state = CatalogViewState {
            page: 6,
            ..CatalogViewState::default()
        };
        let page = view_page(&products, &state, PageContext::Home);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 6);
    }
}
