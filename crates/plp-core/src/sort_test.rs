use super::*;

fn product(id: i64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        image: format!("https://img.example.com/{id}.jpg"),
    }
}

/// The two-product scenario: `B` at 20 with id 1, `A` at 10 with id 2.
fn scenario() -> Vec<Product> {
    vec![product(1, "B", 20.0), product(2, "A", 10.0)]
}

fn catalog() -> Vec<Product> {
    vec![
        product(3, "Mens Cotton Jacket", 55.99),
        product(1, "Fjallraven Backpack", 109.95),
        product(7, "White Gold Plated Princess", 9.99),
        product(2, "Mens Casual Premium Slim Fit T-Shirts", 22.3),
        product(5, "John Hardy Women's Chain Bracelet", 695.0),
        product(4, "Mens Casual Slim Fit", 15.99),
        product(6, "Solid Gold Petite Micropave", 168.0),
        product(8, "Pierced Owl Rose Gold Plated", 10.99),
    ]
}

fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|p| p.id).collect()
}

fn sorted_ids(products: &[Product]) -> Vec<i64> {
    let mut ids = ids(products);
    ids.sort_unstable();
    ids
}

#[test]
fn every_option_preserves_the_multiset_of_products() {
    let input = catalog();
    for option in SortOption::ALL {
        let sorted = apply_sort(&input, option);
        assert_eq!(sorted.len(), input.len(), "{option} changed the length");
        assert_eq!(sorted_ids(&sorted), sorted_ids(&input), "{option} lost a product");
        for p in &input {
            assert!(sorted.contains(p), "{option} dropped product {}", p.id);
        }
    }
}

#[test]
fn recommended_keeps_input_order() {
    let input = catalog();
    assert_eq!(apply_sort(&input, SortOption::Recommended), input);
}

#[test]
fn newest_is_non_increasing_by_id() {
    let sorted = apply_sort(&catalog(), SortOption::Newest);
    assert!(sorted.windows(2).all(|w| w[0].id >= w[1].id));
}

#[test]
fn price_low_is_non_decreasing() {
    let sorted = apply_sort(&catalog(), SortOption::PriceLow);
    assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
}

#[test]
fn price_high_is_non_increasing() {
    let sorted = apply_sort(&catalog(), SortOption::PriceHigh);
    assert!(sorted.windows(2).all(|w| w[0].price >= w[1].price));
}

#[test]
fn popular_is_non_decreasing_by_title() {
    let sorted = apply_sort(&catalog(), SortOption::Popular);
    assert!(sorted
        .windows(2)
        .all(|w| compare_titles(&w[0].title, &w[1].title) != Ordering::Greater));
    // Same-case titles also come out in plain lexicographic order.
    assert!(sorted.windows(2).all(|w| w[0].title <= w[1].title));
}

#[test]
fn scenario_price_low() {
    assert_eq!(ids(&apply_sort(&scenario(), SortOption::PriceLow)), vec![2, 1]);
}

#[test]
fn scenario_newest() {
    assert_eq!(ids(&apply_sort(&scenario(), SortOption::Newest)), vec![2, 1]);
}

#[test]
fn scenario_popular() {
    assert_eq!(ids(&apply_sort(&scenario(), SortOption::Popular)), vec![2, 1]);
}

#[test]
fn scenario_price_high() {
    assert_eq!(ids(&apply_sort(&scenario(), SortOption::PriceHigh)), vec![1, 2]);
}

#[test]
fn source_slice_is_not_reordered() {
    let input = catalog();
    let before = input.clone();
    let _ = apply_sort(&input, SortOption::PriceLow);
    assert_eq!(input, before);
}

#[test]
fn equal_prices_keep_input_order() {
    let input = vec![
        product(10, "first", 5.0),
        product(11, "second", 5.0),
        product(12, "cheap", 1.0),
        product(13, "third", 5.0),
    ];
    assert_eq!(ids(&apply_sort(&input, SortOption::PriceLow)), vec![12, 10, 11, 13]);
    assert_eq!(ids(&apply_sort(&input, SortOption::PriceHigh)), vec![10, 11, 13, 12]);
}

#[test]
fn empty_input_sorts_to_empty() {
    for option in SortOption::ALL {
        assert!(apply_sort(&[], option).is_empty());
    }
}

#[test]
fn compare_titles_ignores_case_first() {
    assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
    assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
}

#[test]
fn compare_titles_puts_lowercase_before_uppercase() {
    assert_eq!(compare_titles("mug", "Mug"), Ordering::Less);
    assert_eq!(compare_titles("Mug", "mug"), Ordering::Greater);
    assert_eq!(compare_titles("mug", "mug"), Ordering::Equal);
}

#[test]
fn compare_titles_sorts_accented_letters_with_their_base_letter() {
    assert_eq!(compare_titles("Éclair", "Zebra"), Ordering::Less);
    assert_eq!(compare_titles("apple", "Éclair"), Ordering::Less);
    assert_eq!(compare_titles("eclair", "Éclair"), Ordering::Less);
}

#[test]
fn popular_orders_accented_and_mixed_case_titles() {
    let input = vec![
        product(1, "Zebra", 1.0),
        product(2, "Éclair", 1.0),
        product(3, "apple", 1.0),
        product(4, "Mug", 1.0),
        product(5, "mug", 1.0),
    ];
    let titles: Vec<String> = apply_sort(&input, SortOption::Popular)
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["apple", "Éclair", "mug", "Mug", "Zebra"]);
}

#[test]
fn parse_lenient_recognizes_every_wire_value() {
    for option in SortOption::ALL {
        assert_eq!(SortOption::parse_lenient(Some(option.as_str())), option);
    }
}

#[test]
fn parse_lenient_falls_back_to_recommended() {
    assert_eq!(SortOption::parse_lenient(None), SortOption::Recommended);
    assert_eq!(SortOption::parse_lenient(Some("cheapest")), SortOption::Recommended);
    assert_eq!(SortOption::parse_lenient(Some("PRICELOW")), SortOption::Recommended);
}

#[test]
fn unknown_option_behaves_like_recommended() {
    let input = catalog();
    let option = SortOption::parse_lenient(Some("bestselling"));
    assert_eq!(
        apply_sort(&input, option),
        apply_sort(&input, SortOption::Recommended)
    );
}

#[test]
fn from_str_rejects_unknown_value() {
    let err = "bestselling".parse::<SortOption>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownSortOption(ref v) if v == "bestselling"));
}

#[test]
fn labels_match_selector_text() {
    let labels: Vec<&str> = SortOption::ALL.iter().map(|o| o.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Recommended",
            "Newest First",
            "Popular",
            "Price: High to Low",
            "Price: Low to High"
        ]
    );
}

#[test]
fn serde_uses_camel_case_wire_values() {
    let json = serde_json::to_string(&SortOption::PriceHigh).expect("serialize");
    assert_eq!(json, "\"priceHigh\"");
    let parsed: SortOption = serde_json::from_str("\"priceLow\"").expect("deserialize");
    assert_eq!(parsed, SortOption::PriceLow);
}
