use crate::tests::{complete, store_of, today};
use crate::{SortKey, ViewParameters, age_on, project};

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

fn roster_with_ages(ages: &[u8]) -> Vec<crate::RawUserRecord> {
    ages.iter()
        .enumerate()
        .map(|(i, age)| {
            // 1 January of the birth year keeps the derived age exact
            let year = today().year() - i32::from(*age);
            complete(i as i64 + 1, &format!("user{}", i), &format!("{}-01-01", year), "x")
        })
        .collect()
}

// =========================================================================
// Property-Based Tests - Projection
// =========================================================================

proptest! {
    #[test]
    fn given_any_ages_when_sorted_by_age_then_non_decreasing_and_stable(
        ages in prop::collection::vec(0u8..100, 0..40)
    ) {
        let store = store_of(roster_with_ages(&ages));
        let mut view = ViewParameters::new(100).unwrap();
        view.set_sort_key(SortKey::Age);

        let page = project(store.records(), &view);

        prop_assert_eq!(page.rows.len(), ages.len());
        for pair in page.rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.age <= b.age);
            if a.age == b.age {
                prop_assert!(a.id < b.id);
            }
        }
    }

    #[test]
    fn given_any_paging_when_projected_then_page_in_range_and_non_empty(
        total in 0usize..60,
        page_size in 1usize..15,
        page_index in 0usize..30,
    ) {
        let ages = vec![30u8; total];
        let store = store_of(roster_with_ages(&ages));
        let mut view = ViewParameters::new(page_size).unwrap();
        view.set_page_index(page_index);

        let page = project(store.records(), &view);

        prop_assert_eq!(page.page_count, total.div_ceil(page_size).max(1));
        prop_assert!(page.page_index < page.page_count);
        prop_assert!(page.rows.len() <= page_size);
        prop_assert_eq!(page.rows.is_empty(), total == 0);
    }

    #[test]
    fn given_any_filter_when_projected_twice_then_identical(
        ages in prop::collection::vec(0u8..100, 0..20),
        filter in "[a-z0-9]{0,3}",
    ) {
        let store = store_of(roster_with_ages(&ages));
        let mut view = ViewParameters::new(3).unwrap();
        view.set_filter_text(filter);
        view.set_sort_key(SortKey::Newest);

        prop_assert_eq!(project(store.records(), &view), project(store.records(), &view));
    }

    #[test]
    fn given_any_birth_date_when_age_on_then_matches_year_counting(
        offset in 0u64..40_000,
        span in 0u64..40_000,
    ) {
        let dob = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Days::new(offset);
        let on = dob + Days::new(span);

        // Count whole years by stepping anniversaries
        let mut years = 0;
        while dob.with_year(dob.year() + years + 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(dob.year() + years + 1, 3, 1).unwrap())
            <= on
        {
            years += 1;
        }

        prop_assert_eq!(age_on(dob, on), years);
    }
}
