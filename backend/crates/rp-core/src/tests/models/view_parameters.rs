use crate::{ColumnId, ColumnSort, DEFAULT_PAGE_SIZE, SortDirection, SortKey, ViewParameters};

use googletest::assert_that;
use googletest::prelude::{anything, err};

#[test]
fn given_defaults_when_created_then_first_page_unsorted() {
    let params = ViewParameters::default();

    assert_eq!(params.filter_text, "");
    assert_eq!(params.sort_key, SortKey::None);
    assert!(params.sort_state.is_empty());
    assert_eq!(params.page_index, 0);
    assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn given_zero_page_size_when_created_then_error() {
    assert_that!(ViewParameters::new(0), err(anything()));
}

#[test]
fn given_same_column_when_toggled_repeatedly_then_asc_desc_unsorted() {
    // Given
    let mut params = ViewParameters::default();

    // When / Then
    params.toggle_column_sort(ColumnId::Age);
    assert_eq!(
        params.column_sort(),
        Some(&ColumnSort::new(ColumnId::Age, SortDirection::Ascending))
    );

    params.toggle_column_sort(ColumnId::Age);
    assert_eq!(
        params.column_sort(),
        Some(&ColumnSort::new(ColumnId::Age, SortDirection::Descending))
    );

    params.toggle_column_sort(ColumnId::Age);
    assert_eq!(params.column_sort(), None);
}

#[test]
fn given_column_sort_when_other_column_clicked_then_replaced_ascending() {
    let mut params = ViewParameters::default();
    params.toggle_column_sort(ColumnId::Age);
    params.toggle_column_sort(ColumnId::Age);

    params.toggle_column_sort(ColumnId::City);

    assert_eq!(
        params.sort_state,
        vec![ColumnSort::new(ColumnId::City, SortDirection::Ascending)]
    );
}

#[test]
fn given_column_sort_when_sort_key_chosen_then_column_sort_cleared() {
    let mut params = ViewParameters::default();
    params.toggle_column_sort(ColumnId::Email);

    params.set_sort_key(SortKey::Newest);

    assert_eq!(params.sort_key, SortKey::Newest);
    assert!(params.sort_state.is_empty());
}

#[test]
fn given_sort_key_when_column_clicked_then_sort_key_reset() {
    let mut params = ViewParameters::default();
    params.set_sort_key(SortKey::Age);

    params.toggle_column_sort(ColumnId::Username);

    assert_eq!(params.sort_key, SortKey::None);
    assert_eq!(params.sort_state.len(), 1);
}

#[test]
fn given_later_page_when_page_size_changes_then_top_row_kept_visible() {
    // Given: page 3 of size 10 starts at row 30
    let mut params = ViewParameters::default();
    params.set_page_index(3);

    // When
    params.set_page_size(25).unwrap();

    // Then: row 30 lives on page 1 of size 25
    assert_eq!(params.page_index, 1);
    assert_eq!(params.page_size, 25);
}

#[test]
fn given_zero_when_page_size_set_then_error_and_unchanged() {
    let mut params = ViewParameters::default();

    assert!(params.set_page_size(0).is_err());
    assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn given_huge_page_index_when_page_size_changes_then_no_overflow() {
    // Given: an unclamped index far past any data
    let mut params = ViewParameters::default();
    params.set_page_index(usize::MAX / 2);

    // When
    params.set_page_size(5).unwrap();

    // Then: the top row saturates instead of wrapping
    assert_eq!(params.page_index, usize::MAX / 5);
    assert_eq!(params.page_size, 5);
}
