//! The product draft being filled in on the add-product page.

use serde::{Deserialize, Serialize};

use crate::app_config::FormSettings;
use crate::catalog::{self, MATERIAL_OTHER};
use crate::editor::VariantEditor;
use crate::error::FormError;
use crate::pricing::{self, PriceEntry, PriceField};
use crate::variants::{MergeDefaults, VariantCombination};

/// The price input that currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveField {
    Base(PriceField),
    Variant { index: usize, field: PriceField },
}

/// A product draft.
///
/// Field names serialize in camelCase so drafts can be read from the same
/// JSON/YAML shape that saved records use. Everything has a default, so a
/// draft file may omit any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductForm {
    pub title: String,
    /// Category id from [`catalog::CATEGORIES`].
    pub category: String,
    pub sub_category: String,
    pub description: String,
    /// `None` means the brand was never entered; an empty string fails validation.
    pub brand: Option<String>,
    pub warranty: String,
    pub seller_name: String,
    pub tags: Vec<String>,
    pub material_and_care: String,
    /// Set while the free-text material field replaces the preset list.
    #[serde(skip)]
    pub custom_material: bool,
    pub weight: f64,
    pub weight_unit: String,
    /// Signed so that negative input survives until validation reports it.
    pub stock_quantity: i64,
    pub images: Vec<String>,
    #[serde(flatten)]
    pub price: PriceEntry,
    pub variants_data: Vec<VariantCombination>,
    #[serde(skip)]
    pub variant_editor: VariantEditor,
    #[serde(skip)]
    pub active_field: Option<ActiveField>,
    #[serde(skip)]
    pub settings: FormSettings,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new(FormSettings::default())
    }
}

impl ProductForm {
    /// A blank draft with the page's initial values.
    #[must_use]
    pub fn new(settings: FormSettings) -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            sub_category: String::new(),
            description: String::new(),
            brand: None,
            warranty: String::new(),
            seller_name: settings.seller_name.clone(),
            tags: Vec::new(),
            material_and_care: String::new(),
            custom_material: false,
            weight: 0.0,
            weight_unit: catalog::DEFAULT_WEIGHT_UNIT.to_string(),
            stock_quantity: catalog::DEFAULT_STOCK_QUANTITY,
            images: Vec::new(),
            price: PriceEntry::default(),
            variants_data: Vec::new(),
            variant_editor: VariantEditor::NoVariants,
            active_field: None,
            settings,
        }
    }

    /// Discards every edit, keeping only the settings.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings.clone());
    }

    pub fn focus(&mut self, field: ActiveField) {
        self.active_field = Some(field);
    }

    pub fn blur(&mut self) {
        self.active_field = None;
    }

    /// Writes a base price input and re-derives the dependent field.
    pub fn set_base_price(&mut self, field: PriceField, value: f64) {
        let active = match self.active_field {
            Some(ActiveField::Base(active)) => Some(active),
            _ => None,
        };
        self.price = self.settle(field, pricing::apply_edit(self.price, field, value, active));
    }

    /// Writes a price input of variant row `index` and re-derives that row only.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownVariant`] if there is no row at `index`.
    pub fn set_variant_price(
        &mut self,
        index: usize,
        field: PriceField,
        value: f64,
    ) -> Result<(), FormError> {
        let active = match self.active_field {
            Some(ActiveField::Variant { index: i, field: active }) if i == index => Some(active),
            _ => None,
        };
        let current = self.variant(index)?.price;
        let next = self.settle(field, pricing::apply_edit(current, field, value, active));
        self.variant_mut(index)?.price = next;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`FormError::UnknownVariant`] if there is no row at `index`.
    pub fn set_variant_inventory(&mut self, index: usize, inventory: u32) -> Result<(), FormError> {
        self.variant_mut(index)?.inventory = inventory;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`FormError::UnknownVariant`] if there is no row at `index`.
    pub fn set_variant_weight(&mut self, index: usize, weight: f64) -> Result<(), FormError> {
        self.variant_mut(index)?.weight = weight;
        Ok(())
    }

    /// Selects a category by id; an empty id clears it.
    ///
    /// The sub-category is kept only if the new category also offers it.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownCategory`] for an id not in the catalog.
    pub fn set_category(&mut self, id: &str) -> Result<(), FormError> {
        if id.is_empty() {
            self.category.clear();
            self.sub_category.clear();
            return Ok(());
        }

        let category =
            catalog::find_category(id).ok_or_else(|| FormError::UnknownCategory(id.to_string()))?;
        if !category.sub_categories.contains(&self.sub_category.as_str()) {
            self.sub_category.clear();
        }
        self.category = category.id.to_string();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`FormError::CategoryNotSelected`] before a category is chosen,
    /// or [`FormError::SubCategoryMismatch`] if the category lacks `name`.
    pub fn set_sub_category(&mut self, name: &str) -> Result<(), FormError> {
        if self.category.is_empty() {
            return Err(FormError::CategoryNotSelected);
        }
        if !self.sub_categories().contains(&name) {
            return Err(FormError::SubCategoryMismatch {
                category: self.category.clone(),
                sub_category: name.to_string(),
            });
        }
        self.sub_category = name.to_string();
        Ok(())
    }

    /// Sub-categories of the selected category; empty when none is selected.
    #[must_use]
    pub fn sub_categories(&self) -> &'static [&'static str] {
        catalog::find_category(&self.category)
            .map(|c| c.sub_categories)
            .unwrap_or(&[])
    }

    /// Adds a trimmed tag. Blank and already-present tags are ignored.
    ///
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    /// Picks a material preset. [`MATERIAL_OTHER`] switches to free text and
    /// clears the current value.
    pub fn choose_material(&mut self, choice: &str) {
        if choice == MATERIAL_OTHER {
            self.custom_material = true;
            self.material_and_care.clear();
        } else {
            self.material_and_care = choice.to_string();
        }
    }

    pub fn set_custom_material(&mut self, text: &str) {
        self.custom_material = true;
        self.material_and_care = text.to_string();
    }

    /// Leaves free-text mode and clears the value.
    pub fn reset_material(&mut self) {
        self.custom_material = false;
        self.material_and_care.clear();
    }

    /// Appends image URLs up to the configured maximum; the rest are dropped.
    ///
    /// Returns how many were added.
    pub fn add_images<I, S>(&mut self, urls: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let room = self.settings.max_images.saturating_sub(self.images.len());
        let before = self.images.len();
        self.images.extend(urls.into_iter().take(room).map(Into::into));
        self.images.len() - before
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Applies a variant editor transition, replacing the editor state.
    ///
    /// # Errors
    ///
    /// Propagates the transition's error; the editor is left unchanged.
    pub fn update_variants<F>(&mut self, transition: F) -> Result<(), FormError>
    where
        F: FnOnce(&VariantEditor) -> Result<VariantEditor, FormError>,
    {
        self.variant_editor = transition(&self.variant_editor)?;
        Ok(())
    }

    /// Confirms the variant editor and replaces the rows with the rebuilt set.
    ///
    /// New rows are seeded from the current base price and weight.
    pub fn confirm_variants(&mut self) {
        let (editor, rows) = self
            .variant_editor
            .confirm(&self.variants_data, &self.merge_defaults());
        self.variant_editor = editor;
        self.variants_data = rows;
        if matches!(self.active_field, Some(ActiveField::Variant { .. })) {
            self.active_field = None;
        }
    }

    #[must_use]
    pub fn merge_defaults(&self) -> MergeDefaults {
        MergeDefaults {
            price: self.price,
            weight: self.weight,
        }
    }

    /// Brings every selling price, base and variant rows alike, in line with
    /// its MRP and offer.
    ///
    /// Used after loading a draft whose derived prices may be stale.
    pub fn sync_prices(&mut self) {
        self.price = pricing::recompute(self.price, None);
        for row in &mut self.variants_data {
            row.price = pricing::recompute(row.price, None);
        }
    }

    fn settle(&self, edited: PriceField, entry: PriceEntry) -> PriceEntry {
        if edited == PriceField::DerivedPrice && self.settings.clamp_offer {
            pricing::clamp_discount(entry)
        } else {
            entry
        }
    }

    fn variant(&self, index: usize) -> Result<&VariantCombination, FormError> {
        self.variants_data
            .get(index)
            .ok_or(FormError::UnknownVariant(index))
    }

    fn variant_mut(&mut self, index: usize) -> Result<&mut VariantCombination, FormError> {
        self.variants_data
            .get_mut(index)
            .ok_or(FormError::UnknownVariant(index))
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
