use crate::{ColumnId, SortKey};

use std::str::FromStr;

#[test]
fn test_sort_key_from_str() {
    assert_eq!(SortKey::from_str("").unwrap(), SortKey::None);
    assert_eq!(SortKey::from_str("age").unwrap(), SortKey::Age);
    assert_eq!(SortKey::from_str("Gender").unwrap(), SortKey::Gender);
    assert_eq!(SortKey::from_str("a-z").unwrap(), SortKey::Alphabetical);
    assert_eq!(SortKey::from_str("alphabetical").unwrap(), SortKey::Alphabetical);
    assert_eq!(SortKey::from_str("newest").unwrap(), SortKey::Newest);
    assert!(SortKey::from_str("oldest").is_err());
}

#[test]
fn test_sort_key_round_trips_through_as_str() {
    for key in [
        SortKey::None,
        SortKey::Age,
        SortKey::Gender,
        SortKey::Alphabetical,
        SortKey::Newest,
    ] {
        assert_eq!(SortKey::from_str(key.as_str()).unwrap(), key);
    }
}

#[test]
fn test_column_id_from_str() {
    assert_eq!(ColumnId::from_str("name").unwrap(), ColumnId::Username);
    assert_eq!(ColumnId::from_str("DOB").unwrap(), ColumnId::Dob);
    assert!(ColumnId::from_str("password").is_err());
}
