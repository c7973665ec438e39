use shelf_core::Product;

/// Build one product record for test catalogs.
pub fn product(name: &str, price: &str, category: &str, stocked: bool) -> Product {
    Product {
        name: name.to_string(),
        price: price.to_string(),
        category: category.to_string(),
        stocked,
    }
}

/// The reference five-product catalog.
pub fn sample_products() -> Vec<Product> {
    vec![
        product("apple", "$2", "Fruits", true),
        product("banana", "$1.50", "Fruits", true),
        product("carrot", "$0.75", "Vegetables", true),
        product("lettuce", "$3", "Vegetables", false),
        product("basil", "$4.50", "Herbs", true),
    ]
}
