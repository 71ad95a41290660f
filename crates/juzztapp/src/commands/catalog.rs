use crate::catalog::{self, CatalogState, KNOWN_GENRES};
use crate::commands::{CmdMessage, CmdResult, GenreCount};
use crate::model::Record;

pub fn browse(records: &[Record], state: &CatalogState) -> CmdResult {
    let page = catalog::query(records, state);
    let mut result = CmdResult::default();

    if state.price().is_inverted() {
        result.add_message(CmdMessage::warning(format!(
            "Minimum price ${:.2} is above maximum ${:.2}",
            state.price().min,
            state.price().max
        )));
    } else if page.total_matches == 0 {
        result.add_message(CmdMessage::info("No records match the current filters"));
    } else if page.items.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the last page ({})",
            page.page, page.total_pages
        )));
    }

    result.with_page(page, state.clone())
}

pub fn sale(records: &[Record], threshold: f64) -> CmdResult {
    let on_sale = catalog::sale_records(records, threshold);
    let mut result = CmdResult::default();
    if on_sale.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No records under ${:.2} right now",
            threshold
        )));
    }
    result.with_listed_records(on_sale)
}

/// Storefront genres first, in their usual order, then any other genre the
/// catalog carries, alphabetically.
pub fn genres(records: &[Record]) -> CmdResult {
    let mut counts = catalog::genre_counts(records);
    let mut listed: Vec<GenreCount> = KNOWN_GENRES
        .iter()
        .map(|name| GenreCount {
            name: name.to_string(),
            count: counts.remove(*name).unwrap_or(0),
        })
        .collect();
    listed.extend(
        counts
            .into_iter()
            .map(|(name, count)| GenreCount { name, count }),
    );
    CmdResult::default().with_genres(listed)
}

pub fn detail(record: Record) -> CmdResult {
    CmdResult::default().with_record(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GenreFilter, PriceRange};
    use crate::commands::MessageLevel;

    fn catalog() -> Vec<Record> {
        vec![
            Record::new(1, "Kind of Blue", 30.0).with_genre("modal jazz"),
            Record::new(2, "Moanin'", 15.0).with_genre("hard bop"),
            Record::new(3, "Bitches Brew", 19.5).with_genre("jazz fusion"),
            Record::new(4, "Ellington at Newport", 12.0).with_genre("big band"),
        ]
    }

    #[test]
    fn browse_returns_page() {
        let state = CatalogState::default().with_genre(GenreFilter::Only("hard bop".into()));
        let result = browse(&catalog(), &state);
        let page = result.page.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 2);
        assert_eq!(result.criteria, Some(state));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn browse_explains_empty_results() {
        let none = CatalogState::default().with_genre(GenreFilter::Only("free jazz".into()));
        let result = browse(&catalog(), &none);
        assert_eq!(result.messages[0].level, MessageLevel::Info);

        let inverted = CatalogState::default().with_price_range(PriceRange::new(40.0, 10.0));
        let result = browse(&catalog(), &inverted);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("above maximum"));

        let past_end = CatalogState::default().at_page(2);
        let result = browse(&catalog(), &past_end);
        assert_eq!(result.messages[0].content, "Page 2 is past the last page (1)");
    }

    #[test]
    fn sale_lists_cheap_records_in_catalog_order() {
        let result = sale(&catalog(), 20.0);
        let ids: Vec<_> = result.listed_records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);

        let result = sale(&catalog(), 5.0);
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn genres_lists_known_then_extra() {
        let result = genres(&catalog());
        assert_eq!(result.genres.len(), KNOWN_GENRES.len() + 1);
        assert_eq!(result.genres[0].name, "jazz");
        assert_eq!(result.genres[0].count, 0);

        let hard_bop = result.genres.iter().find(|g| g.name == "hard bop").unwrap();
        assert_eq!(hard_bop.count, 1);

        let last = result.genres.last().unwrap();
        assert_eq!(last.name, "big band");
        assert_eq!(last.count, 1);
    }
}
