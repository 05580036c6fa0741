use super::*;
use crate::fixtures::valid_form;
use crate::variants::OptionName;

fn form_with_sizes(values: &[&str]) -> ProductForm {
    let mut form = valid_form();
    form.update_variants(|editor| Ok(editor.start())).unwrap();
    let id = form.variant_editor.options()[0].id;
    form.update_variants(|editor| editor.rename_option(id, Some(OptionName::SizeUs)))
        .unwrap();
    for value in values {
        form.update_variants(|editor| editor.toggle_value(id, value))
            .unwrap();
    }
    form.confirm_variants();
    form
}

// -----------------------------------------------------------------------
// defaults
// -----------------------------------------------------------------------

#[test]
fn new_form_has_page_defaults() {
    let form = ProductForm::default();
    assert_eq!(form.price, PriceEntry::default());
    assert_eq!(form.weight, 0.0);
    assert_eq!(form.weight_unit, "Kg");
    assert_eq!(form.stock_quantity, 100);
    assert_eq!(form.seller_name, "Sagar Sports Club");
    assert!(form.tags.is_empty());
    assert!(form.images.is_empty());
    assert!(form.variants_data.is_empty());
    assert_eq!(form.variant_editor, VariantEditor::NoVariants);
}

#[test]
fn reset_restores_defaults_but_keeps_settings() {
    let settings = FormSettings {
        max_images: 2,
        seller_name: "Court Side Traders".to_string(),
        clamp_offer: false,
    };
    let mut form = ProductForm::new(settings.clone());
    form.title = "Racket".to_string();
    form.add_tag("carbon");
    form.reset();

    assert!(form.title.is_empty());
    assert!(form.tags.is_empty());
    assert_eq!(form.settings, settings);
    assert_eq!(form.seller_name, "Court Side Traders");
}

// -----------------------------------------------------------------------
// base price
// -----------------------------------------------------------------------

#[test]
fn base_price_scenario() {
    let mut form = ProductForm::default();
    form.focus(ActiveField::Base(PriceField::ReferencePrice));
    form.set_base_price(PriceField::ReferencePrice, 1000.0);
    form.blur();
    form.set_base_price(PriceField::DiscountPercent, 20.0);
    assert_eq!(form.price.derived_price, 800.0);

    form.focus(ActiveField::Base(PriceField::DerivedPrice));
    form.set_base_price(PriceField::DerivedPrice, 750.0);
    assert_eq!(form.price.discount_percent, 25.0);

    form.blur();
    form.set_base_price(PriceField::DiscountPercent, 10.0);
    assert_eq!(form.price.derived_price, 900.0);
}

#[test]
fn offer_change_while_selling_price_focused_keeps_selling_price() {
    let mut form = ProductForm::default();
    form.set_base_price(PriceField::ReferencePrice, 1000.0);
    form.focus(ActiveField::Base(PriceField::DerivedPrice));
    form.set_base_price(PriceField::DerivedPrice, 750.0);
    form.set_base_price(PriceField::DiscountPercent, 10.0);

    assert_eq!(form.price.discount_percent, 10.0);
    assert_eq!(form.price.derived_price, 750.0);
}

#[test]
fn reverse_offer_is_clamped_by_default() {
    let mut form = ProductForm::default();
    form.set_base_price(PriceField::ReferencePrice, 100.0);
    form.set_base_price(PriceField::DerivedPrice, 150.0);
    assert_eq!(form.price.discount_percent, 0.0);
    assert_eq!(form.price.derived_price, 100.0);
}

#[test]
fn selling_price_above_mrp_leaves_consistent_entry_after_blur() {
    let mut form = valid_form();
    form.focus(ActiveField::Base(PriceField::DerivedPrice));
    form.set_base_price(PriceField::DerivedPrice, 1200.0);
    form.blur();

    assert_eq!(form.price, PriceEntry::from_offer(1000.0, 0.0));
    assert_eq!(pricing::recompute(form.price, None), form.price);

    let before = form.price;
    form.sync_prices();
    assert_eq!(form.price, before);
}

#[test]
fn variant_selling_price_above_mrp_is_clamped_consistently() {
    let mut form = form_with_sizes(&["8"]);
    form.set_variant_price(0, PriceField::DerivedPrice, 1500.0)
        .unwrap();
    let row = form.variants_data[0].price;
    assert_eq!(row, PriceEntry::from_offer(1000.0, 0.0));
    assert_eq!(pricing::recompute(row, None), row);
}

#[test]
fn reverse_offer_unclamped_when_disabled() {
    let mut form = ProductForm::new(FormSettings {
        clamp_offer: false,
        ..FormSettings::default()
    });
    form.set_base_price(PriceField::ReferencePrice, 100.0);
    form.set_base_price(PriceField::DerivedPrice, 150.0);
    assert_eq!(form.price.discount_percent, -50.0);
}

#[test]
fn sync_prices_fixes_stale_selling_price() {
    let mut form = ProductForm::default();
    form.price = PriceEntry {
        reference_price: 2000.0,
        discount_percent: 50.0,
        derived_price: 1.0,
    };
    form.sync_prices();
    assert_eq!(form.price.derived_price, 1000.0);
}

#[test]
fn sync_prices_fixes_stale_variant_rows() {
    let mut form = form_with_sizes(&["8", "9"]);
    form.variants_data[0].price = PriceEntry {
        reference_price: 1000.0,
        discount_percent: 50.0,
        derived_price: 999.0,
    };
    let untouched = form.variants_data[1].price;
    form.sync_prices();

    assert_eq!(form.variants_data[0].price.derived_price, 500.0);
    assert_eq!(form.variants_data[0].price.discount_percent, 50.0);
    assert_eq!(form.variants_data[1].price, untouched);
}

// -----------------------------------------------------------------------
// variants
// -----------------------------------------------------------------------

#[test]
fn confirm_variants_seeds_rows_from_base_price_and_weight() {
    let form = form_with_sizes(&["8", "9"]);
    assert_eq!(form.variants_data.len(), 2);
    for row in &form.variants_data {
        assert_eq!(row.price, form.price);
        assert_eq!(row.weight, 0.7);
        assert_eq!(row.inventory, 100);
    }
}

#[test]
fn variant_prices_are_independent() {
    let mut form = form_with_sizes(&["8", "9"]);
    form.focus(ActiveField::Variant {
        index: 1,
        field: PriceField::DerivedPrice,
    });
    form.set_variant_price(1, PriceField::DerivedPrice, 600.0)
        .unwrap();

    assert_eq!(form.variants_data[1].price.discount_percent, 40.0);
    assert_eq!(form.variants_data[0].price.derived_price, 800.0);
    assert_eq!(form.price.derived_price, 800.0);
}

#[test]
fn focus_on_other_row_does_not_block_forward_derivation() {
    let mut form = form_with_sizes(&["8", "9"]);
    form.focus(ActiveField::Variant {
        index: 0,
        field: PriceField::DerivedPrice,
    });
    form.set_variant_price(1, PriceField::DiscountPercent, 50.0)
        .unwrap();
    assert_eq!(form.variants_data[1].price.derived_price, 500.0);
}

#[test]
fn variant_edits_survive_reconfirm() {
    let mut form = form_with_sizes(&["8", "9"]);
    form.set_variant_inventory(0, 42).unwrap();
    form.set_variant_weight(0, 0.9).unwrap();

    form.update_variants(|editor| Ok(editor.start())).unwrap();
    let id = form.variant_editor.options()[0].id;
    form.update_variants(|editor| editor.toggle_value(id, "10"))
        .unwrap();
    form.confirm_variants();

    let names: Vec<&str> = form.variants_data.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["8", "9", "10"]);
    assert_eq!(form.variants_data[0].inventory, 42);
    assert_eq!(form.variants_data[0].weight, 0.9);
    assert_eq!(form.variants_data[2].inventory, 100);
}

#[test]
fn confirm_clears_variant_focus() {
    let mut form = form_with_sizes(&["8"]);
    form.focus(ActiveField::Variant {
        index: 0,
        field: PriceField::ReferencePrice,
    });
    form.update_variants(|editor| Ok(editor.start())).unwrap();
    form.confirm_variants();
    assert!(form.active_field.is_none());
}

#[test]
fn unknown_variant_index_is_rejected() {
    let mut form = form_with_sizes(&["8"]);
    assert_eq!(
        form.set_variant_price(3, PriceField::ReferencePrice, 10.0),
        Err(FormError::UnknownVariant(3))
    );
    assert_eq!(
        form.set_variant_inventory(1, 5),
        Err(FormError::UnknownVariant(1))
    );
}

#[test]
fn failed_editor_transition_keeps_editor() {
    let mut form = form_with_sizes(&["8"]);
    let before = form.variant_editor.clone();
    let id = before.options()[0].id;
    let result = form.update_variants(|editor| editor.toggle_value(id, "9"));
    assert_eq!(result, Err(FormError::NotEditing));
    assert_eq!(form.variant_editor, before);
}

// -----------------------------------------------------------------------
// organization and logistics
// -----------------------------------------------------------------------

#[test]
fn changing_category_drops_foreign_sub_category() {
    let mut form = ProductForm::default();
    form.set_category("football").unwrap();
    form.set_sub_category("Shoes").unwrap();

    form.set_category("badminton").unwrap();
    assert_eq!(form.sub_category, "Shoes");

    form.set_category("cricket").unwrap();
    assert!(form.sub_category.is_empty());
    assert_eq!(form.sub_categories(), ["Bats", "Balls", "Protective Gear"]);
}

#[test]
fn unknown_category_is_rejected() {
    let mut form = ProductForm::default();
    assert_eq!(
        form.set_category("tennis"),
        Err(FormError::UnknownCategory("tennis".to_string()))
    );
    assert!(form.category.is_empty());
}

#[test]
fn sub_category_requires_matching_category() {
    let mut form = ProductForm::default();
    assert_eq!(
        form.set_sub_category("Bats"),
        Err(FormError::CategoryNotSelected)
    );

    form.set_category("football").unwrap();
    assert!(matches!(
        form.set_sub_category("Bats"),
        Err(FormError::SubCategoryMismatch { .. })
    ));
}

#[test]
fn clearing_category_clears_sub_category() {
    let mut form = ProductForm::default();
    form.set_category("cricket").unwrap();
    form.set_sub_category("Balls").unwrap();
    form.set_category("").unwrap();
    assert!(form.category.is_empty());
    assert!(form.sub_category.is_empty());
    assert!(form.sub_categories().is_empty());
}

#[test]
fn tags_are_trimmed_and_deduplicated() {
    let mut form = ProductForm::default();
    assert!(form.add_tag("  studs "));
    assert!(!form.add_tag("studs"));
    assert!(!form.add_tag("   "));
    assert!(form.add_tag("firm ground"));
    assert_eq!(form.tags, vec!["studs", "firm ground"]);

    assert_eq!(form.remove_tag(0), Some("studs".to_string()));
    assert_eq!(form.remove_tag(5), None);
    assert_eq!(form.tags, vec!["firm ground"]);
}

#[test]
fn material_other_switches_to_free_text() {
    let mut form = ProductForm::default();
    form.choose_material("Insole : Rubber");
    assert_eq!(form.material_and_care, "Insole : Rubber");
    assert!(!form.custom_material);

    form.choose_material("Other");
    assert!(form.custom_material);
    assert!(form.material_and_care.is_empty());

    form.set_custom_material("100% cotton, machine wash cold");
    assert_eq!(form.material_and_care, "100% cotton, machine wash cold");

    form.reset_material();
    assert!(!form.custom_material);
    assert!(form.material_and_care.is_empty());
}

#[test]
fn images_stop_at_configured_maximum() {
    let mut form = ProductForm::new(FormSettings {
        max_images: 3,
        ..FormSettings::default()
    });
    assert_eq!(form.add_images(["a.jpg", "b.jpg"]), 2);
    assert_eq!(form.add_images(["c.jpg", "d.jpg", "e.jpg"]), 1);
    assert_eq!(form.images, vec!["a.jpg", "b.jpg", "c.jpg"]);
    assert_eq!(form.add_images(["f.jpg"]), 0);

    assert_eq!(form.remove_image(1), Some("b.jpg".to_string()));
    assert_eq!(form.add_images(["g.jpg"]), 1);
    assert_eq!(form.images, vec!["a.jpg", "c.jpg", "g.jpg"]);
}

#[test]
fn draft_deserializes_with_defaults() {
    let json = r#"{
        "title": "Willow Bat",
        "category": "cricket",
        "mrp": 2500,
        "offerPercentage": 12
    }"#;
    let form: ProductForm = serde_json::from_str(json).unwrap();
    assert_eq!(form.title, "Willow Bat");
    assert_eq!(form.price.reference_price, 2500.0);
    assert_eq!(form.price.discount_percent, 12.0);
    assert_eq!(form.price.derived_price, 0.0);
    assert_eq!(form.weight_unit, "Kg");
    assert_eq!(form.stock_quantity, 100);
    assert_eq!(form.seller_name, "Sagar Sports Club");
}
