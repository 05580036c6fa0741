//! Read-only commands: price and variant previews, catalog listing.

use std::path::Path;

use anyhow::Context;
use storeform_core::catalog::{
    BASE_OFFER_PRESETS, CATEGORIES, MATERIAL_OPTIONS, VARIANT_OFFER_PRESETS, WARRANTY_OPTIONS,
    WEIGHT_UNITS,
};
use storeform_core::{
    ActiveField, AppConfig, FormSettings, OptionName, PriceField, ProductForm, VariantCombination,
    VariantEditor, VariantOption,
};

/// Parses `NAME=V1,V2` into a named option with those values selected.
pub(crate) fn parse_option_spec(spec: &str) -> anyhow::Result<VariantOption> {
    let (name, values) = spec
        .split_once('=')
        .with_context(|| format!("option \"{spec}\" must look like NAME=V1,V2"))?;
    let name: OptionName = name.parse()?;
    let values = values.split(',').map(str::trim).filter(|v| !v.is_empty());
    Ok(VariantOption::named(name, values)?)
}

pub(crate) fn run_price(
    config: &AppConfig,
    mrp: f64,
    offer: f64,
    selling: Option<f64>,
) -> anyhow::Result<()> {
    let mut form = ProductForm::new(FormSettings::from(config));
    form.set_base_price(PriceField::ReferencePrice, mrp);
    form.set_base_price(PriceField::DiscountPercent, offer);
    if let Some(selling) = selling {
        form.focus(ActiveField::Base(PriceField::DerivedPrice));
        form.set_base_price(PriceField::DerivedPrice, selling);
        form.blur();
    }

    println!("{}", serde_json::to_string_pretty(&form.price)?);
    Ok(())
}

pub(crate) fn run_variants(
    config: &AppConfig,
    specs: &[String],
    mrp: f64,
    offer: f64,
    weight: f64,
    existing: Option<&Path>,
) -> anyhow::Result<()> {
    let options = specs
        .iter()
        .map(|spec| parse_option_spec(spec))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut form = ProductForm::new(FormSettings::from(config));
    form.set_base_price(PriceField::ReferencePrice, mrp);
    form.set_base_price(PriceField::DiscountPercent, offer);
    form.weight = weight;
    if let Some(path) = existing {
        form.variants_data = read_rows(path)?;
    }

    form.variant_editor = VariantEditor::Editing {
        options,
        confirmed: None,
    };
    form.confirm_variants();

    tracing::info!(rows = form.variants_data.len(), "variant rows built");
    println!("{}", serde_json::to_string_pretty(&form.variants_data)?);
    Ok(())
}

fn read_rows(path: &Path) -> anyhow::Result<Vec<VariantCombination>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read variant rows from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON list of variant rows", path.display()))
}

pub(crate) fn run_catalog() {
    println!("Categories:");
    for category in CATEGORIES {
        println!(
            "  {:<10} {:<10} {}",
            category.id,
            category.name,
            category.sub_categories.join(", ")
        );
    }
    println!("Warranty:      {}", WARRANTY_OPTIONS.join(", "));
    println!("Weight units:  {}", WEIGHT_UNITS.join(", "));
    println!("Material:      {}", MATERIAL_OPTIONS.join(", "));
    println!("Offers (base): {}", percent_list(BASE_OFFER_PRESETS));
    println!("Offers (rows): {}", percent_list(VARIANT_OFFER_PRESETS));
    println!("Variant options:");
    for name in OptionName::ALL {
        println!("  {:<10} {}", name.label(), name.vocabulary().join(", "));
    }
}

fn percent_list(presets: &[u8]) -> String {
    presets
        .iter()
        .map(|p| format!("{p}%"))
        .collect::<Vec<_>>()
        .join(", ")
}
