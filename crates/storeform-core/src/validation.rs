//! Field-level checks run before a draft may be saved.
//!
//! Errors are reported in form order, so the first entry is the field the
//! page should focus.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::TITLE_MAX_CHARS;
use crate::form::ProductForm;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted field path, e.g. `"title"` or `"variantsData.2.offerPercentage"`.
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation, first: {}", .errors.len(), first_path(.errors))]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn first_path(errors: &[FieldError]) -> &str {
    errors.first().map_or("none", |e| e.path.as_str())
}

impl ValidationErrors {
    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            path: path.into(),
            message: message.into(),
        });
    }

    /// The field to focus.
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Message for `path`, if that field failed.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks every field of `form`.
///
/// # Errors
///
/// Returns all failing fields, in form order.
pub fn validate(form: &ProductForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if form.title.is_empty() {
        errors.push("title", "Title is required");
    } else if form.title.chars().count() > TITLE_MAX_CHARS {
        errors.push("title", "Title must be less than 150 characters");
    }
    require(&mut errors, "category", &form.category, "Category is required");
    require(
        &mut errors,
        "subCategory",
        &form.sub_category,
        "Sub-category is required",
    );
    require(
        &mut errors,
        "description",
        &form.description,
        "Description is required",
    );

    if !at_least(form.price.reference_price, 1.0) {
        errors.push("mrp", "MRP is required");
    }
    if !within_percent(form.price.discount_percent) {
        errors.push(
            "offerPercentage",
            "Offer percentage must be between 0 and 100",
        );
    }
    if !at_least(form.price.derived_price, 1.0) {
        errors.push("sellingPrice", "Selling price is required");
    }

    if let Some(brand) = &form.brand {
        require(&mut errors, "brand", brand, "Brand is required");
    }
    require(&mut errors, "warranty", &form.warranty, "Warranty is required");
    require(
        &mut errors,
        "sellerName",
        &form.seller_name,
        "Seller name is required",
    );
    require(
        &mut errors,
        "materialAndCare",
        &form.material_and_care,
        "Material and care info is required",
    );

    if !at_least(form.weight, 0.0) {
        errors.push("weight", "Weight must be positive");
    }
    require(
        &mut errors,
        "weightUnit",
        &form.weight_unit,
        "Weight unit is required",
    );
    if form.stock_quantity < 0 {
        errors.push("stockQuantity", "Stock must be a non-negative integer");
    }
    if form.images.is_empty() {
        errors.push("images", "At least one image is required");
    }

    for (i, row) in form.variants_data.iter().enumerate() {
        let path = |field: &str| format!("variantsData.{i}.{field}");
        if !at_least(row.price.reference_price, 0.0) {
            errors.push(path("mrp"), "MRP must not be negative");
        }
        if !within_percent(row.price.discount_percent) {
            errors.push(
                path("offerPercentage"),
                "Offer percentage must be between 0 and 100",
            );
        }
        if !at_least(row.price.derived_price, 0.0) {
            errors.push(path("sellingPrice"), "Selling price must not be negative");
        }
        if !at_least(row.weight, 0.0) {
            errors.push(path("weight"), "Weight must be positive");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn require(errors: &mut ValidationErrors, path: &str, value: &str, message: &str) {
    if value.is_empty() {
        errors.push(path, message);
    }
}

/// `false` for NaN as well as for values below `min`.
fn at_least(value: f64, min: f64) -> bool {
    value >= min
}

fn within_percent(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
