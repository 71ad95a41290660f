//! # Catalog Query Pipeline
//!
//! Turns the full record list plus a [`CatalogState`] into the one page a view
//! should render. The pipeline is a pure function: same inputs, same page.
//!
//! ## Stages
//!
//! Order matters. Filters run before sorting, pagination runs last.
//!
//! 1. **Genre**: [`GenreFilter::All`] keeps everything, otherwise a
//!    case-insensitive equality match. Records without a genre are dropped.
//! 2. **Price**: inclusive on both bounds. An inverted range matches nothing.
//! 3. **Sort**: one of the five [`SortKey`] orderings, always stable.
//! 4. **Paginate**: `total_pages = ceil(matches / page_size)`. The requested
//!    page is sliced out and clipped; a page past the end is simply empty.
//!    Clamping the page number is the caller's job.
//!
//! ## State
//!
//! [`CatalogState`] belongs to whoever drives the listing. Changing the genre,
//! price range or sort key sends it back to page 1. The page size is fixed at
//! construction.
//!
//! The whole catalog is expected to fit in memory; filtering happens client
//! side over a list fetched in one request.

use crate::model::{normalize_genre, Record};
use serde::Serialize;
use std::collections::BTreeMap;

pub mod filter;
pub mod sort;

pub use filter::{GenreFilter, PriceRange, KNOWN_GENRES};
pub use sort::{locale_cmp, sort_records, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Records strictly cheaper than this are listed on the sale page.
pub const DEFAULT_SALE_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogState {
    genre: GenreFilter,
    price: PriceRange,
    sort: SortKey,
    page: usize,
    page_size: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            genre: GenreFilter::All,
            price: PriceRange::default(),
            sort: SortKey::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn genre(&self) -> &GenreFilter {
        &self.genre
    }

    pub fn price(&self) -> PriceRange {
        self.price
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_genre(&mut self, genre: GenreFilter) {
        self.genre = genre;
        self.page = 1;
    }

    pub fn set_price_range(&mut self, price: PriceRange) {
        self.price = price;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    /// Pages are 1-based; zero is bumped to 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn with_genre(mut self, genre: GenreFilter) -> Self {
        self.set_genre(genre);
        self
    }

    pub fn with_price_range(mut self, price: PriceRange) -> Self {
        self.set_price_range(price);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.set_sort(sort);
        self
    }

    pub fn at_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }
}

/// One rendered page of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub items: Vec<Record>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl CatalogPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Runs filter → sort → paginate over `records`.
pub fn query(records: &[Record], state: &CatalogState) -> CatalogPage {
    let mut matched: Vec<Record> = records
        .iter()
        .filter(|record| state.genre.matches(record))
        .filter(|record| state.price.contains(record.price))
        .cloned()
        .collect();

    sort_records(&mut matched, state.sort);

    let total_matches = matched.len();
    let total_pages = total_matches.div_ceil(state.page_size);
    let offset = (state.page - 1).saturating_mul(state.page_size);
    let items = matched
        .into_iter()
        .skip(offset)
        .take(state.page_size)
        .collect();

    CatalogPage {
        items,
        page: state.page,
        page_size: state.page_size,
        total_pages,
        total_matches,
    }
}

/// Records strictly below `threshold`, in catalog order.
pub fn sale_records(records: &[Record], threshold: f64) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.price < threshold)
        .cloned()
        .collect()
}

/// Number of records per genre, keyed by lowercased genre name.
/// Records without a genre are not counted.
pub fn genre_counts(records: &[Record]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for genre in records.iter().filter_map(|r| r.genre.as_deref()) {
        *counts.entry(normalize_genre(genre)).or_insert(0) += 1;
    }
    counts
}
