//! Commands that touch the saved product list.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use storeform_core::{AppConfig, FormSettings, ProductForm};
use storeform_store::{submit_product, JsonFileStore, MemoryStore, ProductStore, SubmitError};

/// Reads a product draft, picking YAML or JSON by file extension.
pub(crate) fn read_draft(path: &Path) -> anyhow::Result<ProductForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read draft {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("{} is not a valid YAML product draft", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("{} is not a valid JSON product draft", path.display()))
    }
}

/// Applies editing-time rules that a draft file may have skipped: the
/// configured settings, the image cap and a consistent selling price.
pub(crate) fn prepare_draft(mut form: ProductForm, settings: FormSettings) -> ProductForm {
    form.settings = settings;

    let images = std::mem::take(&mut form.images);
    let offered = images.len();
    let kept = form.add_images(images);
    if kept < offered {
        tracing::warn!(
            offered,
            kept,
            max = form.settings.max_images,
            "draft has more images than allowed; extra images dropped"
        );
    }

    form.sync_prices();
    form
}

pub(crate) fn run_submit(config: &AppConfig, path: &Path, dry_run: bool) -> anyhow::Result<()> {
    let form = prepare_draft(read_draft(path)?, FormSettings::from(config));

    let result = if dry_run {
        submit_product(&MemoryStore::new(), &form, Utc::now())
    } else {
        submit_product(&JsonFileStore::from_app_config(config), &form, Utc::now())
    };

    match result {
        Ok(record) => {
            if dry_run {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!(
                    "Product saved successfully! id={} ({})",
                    record.id,
                    config.store_path.display()
                );
            }
            Ok(())
        }
        Err(SubmitError::Validation(errors)) => {
            eprintln!("Please fill all required fields correctly:");
            for error in errors.iter() {
                eprintln!("  {}: {}", error.path, error.message);
            }
            anyhow::bail!("{} field(s) failed validation", errors.len())
        }
        Err(err @ SubmitError::Store(_)) => Err(err).context("Failed to save product."),
    }
}

pub(crate) fn run_list(config: &AppConfig) -> anyhow::Result<()> {
    let store = JsonFileStore::from_app_config(config);
    let products = store
        .read()
        .with_context(|| format!("failed to load products from {}", store.path().display()))?;

    if products.is_empty() {
        println!("No products saved yet.");
        return Ok(());
    }

    println!(
        "{:<14} {:<20} {:<32} {:>10} {:>8} {:>9}",
        "ID", "CREATED", "TITLE", "PRICE", "VARIANTS", "INVENTORY"
    );
    for product in &products {
        println!(
            "{:<14} {:<20} {:<32} {:>10.2} {:>8} {:>9}",
            product.id,
            format_created(product.id),
            truncate(&product.title, 32),
            product.price.derived_price,
            product.variant_count(),
            product.total_inventory()
        );
    }
    Ok(())
}

/// Record ids are creation timestamps in milliseconds.
pub(crate) fn format_created(id: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(id).map_or_else(
        || "\u{2014}".to_string(),
        |at| at.format("%Y-%m-%d %H:%M").to_string(),
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('\u{2026}');
        out
    }
}
