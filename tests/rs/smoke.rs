//! Integration smoke tests for `course_finder`

use course_finder::core::models::Catalog;
use course_finder::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn sample_catalog_loads() {
    let catalog = Catalog::sample();
    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.price_bounds(), (2000, 6000));
}
