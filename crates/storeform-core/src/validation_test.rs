use super::*;
use crate::fixtures::valid_form;
use crate::pricing::PriceEntry;
use crate::variants::{CombinationKey, VariantCombination};

fn paths(errors: &ValidationErrors) -> Vec<&str> {
    errors.iter().map(|e| e.path.as_str()).collect()
}

#[test]
fn valid_form_passes() {
    assert_eq!(validate(&valid_form()), Ok(()));
}

#[test]
fn blank_form_reports_required_fields_in_form_order() {
    let errors = validate(&ProductForm::default()).unwrap_err();
    assert_eq!(
        paths(&errors),
        vec![
            "title",
            "category",
            "subCategory",
            "description",
            "mrp",
            "sellingPrice",
            "warranty",
            "materialAndCare",
            "images",
        ]
    );
    assert_eq!(errors.first().map(|e| e.path.as_str()), Some("title"));
    assert_eq!(errors.get("mrp"), Some("MRP is required"));
    assert_eq!(errors.get("images"), Some("At least one image is required"));
}

#[test]
fn title_longer_than_limit_fails() {
    let mut form = valid_form();
    form.title = "x".repeat(150);
    assert!(validate(&form).is_ok());

    form.title = "x".repeat(151);
    let errors = validate(&form).unwrap_err();
    assert_eq!(
        errors.get("title"),
        Some("Title must be less than 150 characters")
    );
}

#[test]
fn title_length_counts_characters_not_bytes() {
    let mut form = valid_form();
    form.title = "é".repeat(150);
    assert!(validate(&form).is_ok());
}

#[test]
fn mrp_below_one_fails() {
    let mut form = valid_form();
    form.price = PriceEntry::from_offer(0.5, 0.0);
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.get("mrp"), Some("MRP is required"));
}

#[test]
fn nan_prices_fail() {
    let mut form = valid_form();
    form.price.reference_price = f64::NAN;
    form.price.discount_percent = f64::NAN;
    let errors = validate(&form).unwrap_err();
    assert!(errors.get("mrp").is_some());
    assert!(errors.get("offerPercentage").is_some());
}

#[test]
fn offer_outside_percent_range_fails() {
    for offer in [-1.0, 100.5] {
        let mut form = valid_form();
        form.price.discount_percent = offer;
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get("offerPercentage"),
            Some("Offer percentage must be between 0 and 100"),
            "offer {offer}"
        );
    }
}

#[test]
fn empty_brand_fails_but_missing_brand_passes() {
    let mut form = valid_form();
    form.brand = None;
    assert!(validate(&form).is_ok());

    form.brand = Some(String::new());
    let errors = validate(&form).unwrap_err();
    assert_eq!(paths(&errors), vec!["brand"]);
}

#[test]
fn negative_stock_and_weight_fail() {
    let mut form = valid_form();
    form.stock_quantity = -1;
    form.weight = -0.5;
    let errors = validate(&form).unwrap_err();
    assert_eq!(paths(&errors), vec!["weight", "stockQuantity"]);
    assert_eq!(
        errors.get("stockQuantity"),
        Some("Stock must be a non-negative integer")
    );
}

#[test]
fn variant_rows_are_checked_with_indexed_paths() {
    let mut form = valid_form();
    form.variants_data = vec![
        VariantCombination {
            name: "8".to_string(),
            key: CombinationKey::default(),
            price: PriceEntry::from_offer(1000.0, 20.0),
            inventory: 10,
            weight: 0.7,
        },
        VariantCombination {
            name: "9".to_string(),
            key: CombinationKey::default(),
            price: PriceEntry {
                reference_price: 100.0,
                discount_percent: -50.0,
                derived_price: 150.0,
            },
            inventory: 10,
            weight: -1.0,
        },
    ];
    let errors = validate(&form).unwrap_err();
    assert_eq!(
        paths(&errors),
        vec!["variantsData.1.offerPercentage", "variantsData.1.weight"]
    );
}

#[test]
fn error_display_names_first_field() {
    let errors = validate(&ProductForm::default()).unwrap_err();
    assert_eq!(
        errors.to_string(),
        "9 field(s) failed validation, first: title"
    );
}

#[test]
fn errors_serialize_as_list() {
    let mut form = valid_form();
    form.images.clear();
    let errors = validate(&form).unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "path": "images", "message": "At least one image is required" }])
    );
}
