use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - View
// =========================================================================

#[test]
#[serial]
fn given_page_size_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _size = EnvGuard::set("RP_VIEW_PAGE_SIZE", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_page_size_above_max_page_size_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _size = EnvGuard::set("RP_VIEW_PAGE_SIZE", "60");
    let _max = EnvGuard::set("RP_VIEW_MAX_PAGE_SIZE", "50");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_page_size_at_max_page_size_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _size = EnvGuard::set("RP_VIEW_PAGE_SIZE", "50");
    let _max = EnvGuard::set("RP_VIEW_MAX_PAGE_SIZE", "50");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_max_page_size_over_limit_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _max = EnvGuard::set("RP_VIEW_MAX_PAGE_SIZE", "10001");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
