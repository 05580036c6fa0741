use serde::{Deserialize, Serialize};

use crate::form::ProductForm;
use crate::pricing::PriceEntry;
use crate::validation::{validate, ValidationErrors};
use crate::variants::VariantCombination;

/// A saved product, as appended to the persisted product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Creation time in milliseconds since the Unix epoch.
    pub id: i64,
    pub title: String,
    pub category: String,
    pub sub_category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub warranty: String,
    pub seller_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub material_and_care: String,
    pub weight: f64,
    pub weight_unit: String,
    pub stock_quantity: i64,
    pub images: Vec<String>,
    #[serde(flatten)]
    pub price: PriceEntry,
    #[serde(default)]
    pub variants_data: Vec<VariantCombination>,
}

impl ProductRecord {
    /// Validates `form` and snapshots it under `id`.
    ///
    /// # Errors
    ///
    /// Returns every failing field when the form does not validate.
    pub fn from_form(form: &ProductForm, id: i64) -> Result<Self, ValidationErrors> {
        validate(form)?;
        Ok(Self {
            id,
            title: form.title.clone(),
            category: form.category.clone(),
            sub_category: form.sub_category.clone(),
            description: form.description.clone(),
            brand: form.brand.clone(),
            warranty: form.warranty.clone(),
            seller_name: form.seller_name.clone(),
            tags: form.tags.clone(),
            material_and_care: form.material_and_care.clone(),
            weight: form.weight,
            weight_unit: form.weight_unit.clone(),
            stock_quantity: form.stock_quantity,
            images: form.images.clone(),
            price: form.price,
            variants_data: form.variants_data.clone(),
        })
    }

    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants_data.len()
    }

    /// Total stock across variant rows, or the product's own stock when it
    /// has no variants.
    #[must_use]
    pub fn total_inventory(&self) -> i64 {
        if self.variants_data.is_empty() {
            self.stock_quantity
        } else {
            self.variants_data
                .iter()
                .map(|v| i64::from(v.inventory))
                .sum()
        }
    }
}
