//! The search pipeline: filter scan over the catalog, then the sort stage.
//!
//! A pure function of its inputs. The filter pass preserves catalog order,
//! the sort is stable, and nothing here holds state, so identical inputs
//! always produce an identical, freshly allocated result list.

use crate::catalog::PropertyCatalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::FilterState;
use crate::sort::{self, SortKey};

pub fn run<C: PropertyCatalog>(
    catalog: &C,
    filters: &FilterState,
    sort_by: SortKey,
) -> Result<CmdResult> {
    let matched: Vec<_> = catalog
        .records()
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect();

    let listed = sort::sorted(matched, sort_by);
    Ok(CmdResult::default().with_listed_properties(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::model::PropertyId;

    fn ids(result: &CmdResult) -> Vec<PropertyId> {
        result.listed_properties.iter().map(|r| r.id).collect()
    }

    #[test]
    fn unconstrained_search_lists_the_whole_catalog_in_order() {
        let catalog = StaticCatalog::seed();
        let result = run(&catalog, &FilterState::new(), SortKey::Relevance).unwrap();
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn mumbai_filter_yields_exactly_the_mumbai_record() {
        let catalog = StaticCatalog::seed();
        let filters = FilterState::new().with_location("Mumbai");
        let result = run(&catalog, &filters, SortKey::Relevance).unwrap();
        assert_eq!(ids(&result), vec![1]);
        assert_eq!(result.listed_properties[0].location, "Mumbai");
    }

    #[test]
    fn price_band_sorted_ascending() {
        let catalog = StaticCatalog::seed();
        let filters = FilterState::new().with_price_range(Some(10_000_000.0), Some(20_000_000.0));
        let result = run(&catalog, &filters, SortKey::PriceLow).unwrap();

        // 12M (Pune), 15M (Hyderabad), 18M (Bangalore).
        assert_eq!(ids(&result), vec![4, 5, 3]);
        assert!(result
            .listed_properties
            .windows(2)
            .all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn filter_pass_preserves_catalog_order_under_relevance() {
        let catalog = StaticCatalog::seed();
        let filters = FilterState::new().with_property_type(Some("apartment".parse().unwrap()));
        let result = run(&catalog, &filters, SortKey::Relevance).unwrap();
        assert_eq!(ids(&result), vec![1, 3, 4, 5, 7, 8]);
    }

    #[test]
    fn identical_inputs_yield_identical_fresh_results() {
        let catalog = StaticCatalog::seed();
        let filters = FilterState::new().with_min_bedrooms(Some(3));

        let a = run(&catalog, &filters, SortKey::Newest).unwrap();
        let b = run(&catalog, &filters, SortKey::Newest).unwrap();
        assert_eq!(ids(&a), ids(&b));

        // Inputs are untouched.
        assert_eq!(catalog.records().len(), 8);
        assert_eq!(filters.min_bedrooms, Some(3));
    }

    #[test]
    fn no_match_is_an_empty_list_not_an_error() {
        let catalog = StaticCatalog::seed();
        let filters = FilterState::new().with_location("Shimla");
        let result = run(&catalog, &filters, SortKey::PriceLow).unwrap();
        assert!(result.listed_properties.is_empty());
        assert!(result.messages.is_empty());
    }
}
