use super::*;
use crate::display::ListingEntry;
use crate::models::SortKey;

fn product(name: &str, price: &str, category: &str, stocked: bool) -> Product {
    Product {
        name: name.to_string(),
        price: price.to_string(),
        category: category.to_string(),
        stocked,
    }
}

/// The reference five-product catalog used across the test suites.
fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        product("apple", "$2", "Fruits", true),
        product("banana", "$1.50", "Fruits", true),
        product("carrot", "$0.75", "Vegetables", true),
        product("lettuce", "$3", "Vegetables", false),
        product("basil", "$4.50", "Herbs", true),
    ])
    .expect("Failed to build sample catalog")
}

fn listing(view: CatalogView) -> Listing {
    match view {
        CatalogView::Listing(listing) => listing,
        CatalogView::Empty { message } => panic!("Expected a listing, got empty: {message}"),
    }
}

#[test]
fn test_new_derives_max_product_price() {
    let catalog = sample_catalog();
    assert_eq!(catalog.max_product_price(), 4.5);
    assert_eq!(catalog.len(), 5);
}

#[test]
fn test_new_rejects_malformed_price() {
    let result = Catalog::new(vec![product("mystery", "$??", "Other", true)]);
    assert!(matches!(
        result,
        Err(CatalogError::InvalidPrice { .. })
    ));
}

#[test]
fn test_new_rejects_duplicate_names() {
    let result = Catalog::new(vec![
        product("apple", "$2", "Fruits", true),
        product("Apple", "$3", "Fruits", false),
    ]);
    match result {
        Err(CatalogError::InvalidInput { field, reason }) => {
            assert_eq!(field, "name");
            assert!(reason.contains("Apple"));
        }
        Err(other) => panic!("Expected InvalidInput, got {other:?}"),
        Ok(_) => panic!("Expected InvalidInput, got a catalog"),
    }
}

#[test]
fn test_empty_catalog_is_valid() {
    let catalog = Catalog::new(vec![]).expect("Empty catalog should build");
    assert!(catalog.is_empty());
    assert_eq!(catalog.max_product_price(), 0.0);

    let view = catalog
        .query(&catalog.default_state())
        .expect("Query should succeed");
    assert!(view.is_empty());
    assert_eq!(format!("{view}"), "No products found\n");
}

#[test]
fn test_identity_filter_keeps_every_product() {
    let catalog = sample_catalog();
    let view = catalog
        .query(&catalog.default_state())
        .expect("Query should succeed");
    assert_eq!(view.product_count(), catalog.len());
}

#[test]
fn test_query_groups_stocked_products_by_category() {
    let catalog = sample_catalog();
    let mut state = catalog.default_state();
    state.set_in_stock_only(true);

    let listing = listing(catalog.query(&state).expect("Query should succeed"));

    let entries: Vec<String> = listing
        .iter()
        .map(|entry| match entry {
            ListingEntry::CategoryHeader(category) => format!("[{category}]"),
            ListingEntry::Product(product) => product.name.clone(),
        })
        .collect();

    // lettuce excluded by the stock filter; categories ascend, names
    // ascend within each category.
    assert_eq!(
        entries,
        vec![
            "[Fruits]", "apple", "banana", "[Herbs]", "basil", "[Vegetables]", "carrot",
        ]
    );
}

#[test]
fn test_query_combines_text_and_price_filters() {
    let catalog = sample_catalog();
    let mut state = catalog.default_state();
    state.set_filter_text("a");
    state.set_max_price(2.0);

    let listing = listing(catalog.query(&state).expect("Query should succeed"));
    let names: Vec<&str> = listing
        .iter()
        .filter_map(|entry| match entry {
            ListingEntry::Product(product) => Some(product.name.as_str()),
            ListingEntry::CategoryHeader(_) => None,
        })
        .collect();

    assert_eq!(names, vec!["apple", "banana", "carrot"]);
}

#[test]
fn test_query_empty_result_carries_message() {
    let catalog = sample_catalog();
    let mut state = catalog.default_state();
    state.set_filter_text("dragon");
    state.set_in_stock_only(true);
    state.set_max_price(2.0);

    let view = catalog.query(&state).expect("Query should succeed");
    match view {
        CatalogView::Empty { message } => {
            assert_eq!(
                message,
                "No products matching \"dragon\", in stock and under $2"
            );
        }
        CatalogView::Listing(_) => panic!("Expected an empty view"),
    }
}

#[test]
fn test_query_message_uses_unfiltered_catalog_maximum() {
    let catalog = sample_catalog();
    let mut state = catalog.default_state();
    state.set_filter_text("dragon");

    // The ceiling equals the catalog maximum, so it is not mentioned.
    let view = catalog.query(&state).expect("Query should succeed");
    assert_eq!(format!("{view}"), "No products matching \"dragon\"\n");
}

#[test]
fn test_find_is_case_insensitive() {
    let catalog = sample_catalog();
    assert_eq!(catalog.find("Basil").map(|p| p.name.as_str()), Some("basil"));
    assert!(catalog.find("dragonfruit").is_none());
}

#[test]
fn test_has_active_filters_neutral_state() {
    let catalog = sample_catalog();
    assert!(!catalog.has_active_filters(&catalog.default_state()));
}

#[test]
fn test_has_active_filters_each_deviation() {
    let catalog = sample_catalog();

    let mut state = catalog.default_state();
    state.set_filter_text("a");
    assert!(catalog.has_active_filters(&state));

    let mut state = catalog.default_state();
    state.set_in_stock_only(true);
    assert!(catalog.has_active_filters(&state));

    let mut state = catalog.default_state();
    state.set_sort_by(SortKey::Name);
    assert!(catalog.has_active_filters(&state));

    let mut state = catalog.default_state();
    state.set_max_price(2.0);
    assert!(catalog.has_active_filters(&state));
}

#[test]
fn test_has_active_filters_ignores_ceiling_above_maximum() {
    let catalog = sample_catalog();
    let mut state = catalog.default_state();
    state.set_max_price(100.0);
    assert!(!catalog.has_active_filters(&state));
}

#[test]
fn test_clear_deactivates_filters() {
    let catalog = sample_catalog();
    let mut state = catalog.default_state();
    state.set_filter_text("dragon");
    state.set_sort_by(SortKey::PriceHigh);
    assert!(catalog.has_active_filters(&state));

    state.clear(catalog.max_product_price());
    assert!(!catalog.has_active_filters(&state));
}

#[test]
fn test_query_does_not_mutate_catalog() {
    let catalog = sample_catalog();
    let before: Vec<Product> = catalog.products().to_vec();

    let mut state = catalog.default_state();
    state.set_sort_by(SortKey::PriceHigh);
    let _ = catalog.query(&state).expect("Query should succeed");

    assert_eq!(catalog.products(), before.as_slice());
}
