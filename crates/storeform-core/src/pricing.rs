//! The price triangle: MRP, offer percentage and selling price.
//!
//! Each [`PriceEntry`] is an independent instance. The base price of a
//! product is one, and every variant row carries its own. Which of the two
//! dependent fields gets written is decided by the field the user is editing.

use serde::{Deserialize, Serialize};

/// One of the three editable price inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceField {
    /// MRP, the list price the offer is taken off.
    ReferencePrice,
    /// Offer percentage.
    DiscountPercent,
    /// Selling price.
    DerivedPrice,
}

impl std::fmt::Display for PriceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceField::ReferencePrice => write!(f, "mrp"),
            PriceField::DiscountPercent => write!(f, "offerPercentage"),
            PriceField::DerivedPrice => write!(f, "sellingPrice"),
        }
    }
}

/// MRP, offer and selling price for either the base product or a variant row.
///
/// Serialized with the storefront's field names (`mrp`, `offerPercentage`,
/// `sellingPrice`) so the entry can be flattened into product records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceEntry {
    #[serde(rename = "mrp", default)]
    pub reference_price: f64,
    #[serde(rename = "offerPercentage", default)]
    pub discount_percent: f64,
    #[serde(rename = "sellingPrice", default)]
    pub derived_price: f64,
}

impl PriceEntry {
    /// Builds an entry from MRP and offer with the selling price already derived.
    #[must_use]
    pub fn from_offer(reference_price: f64, discount_percent: f64) -> Self {
        Self {
            reference_price,
            discount_percent,
            derived_price: derive_price(reference_price, discount_percent),
        }
    }

    #[must_use]
    pub fn get(&self, field: PriceField) -> f64 {
        match field {
            PriceField::ReferencePrice => self.reference_price,
            PriceField::DiscountPercent => self.discount_percent,
            PriceField::DerivedPrice => self.derived_price,
        }
    }

    fn with(self, field: PriceField, value: f64) -> Self {
        match field {
            PriceField::ReferencePrice => Self {
                reference_price: value,
                ..self
            },
            PriceField::DiscountPercent => Self {
                discount_percent: value,
                ..self
            },
            PriceField::DerivedPrice => Self {
                derived_price: value,
                ..self
            },
        }
    }
}

/// Rounds half-way values up, toward positive infinity.
///
/// `-2.5` rounds to `-2`, unlike [`f64::round`], which rounds away from zero.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Selling price for the given MRP and offer percentage.
#[must_use]
pub fn derive_price(reference_price: f64, discount_percent: f64) -> f64 {
    round_half_up(reference_price - reference_price * discount_percent / 100.0)
}

/// Offer percentage implied by the given MRP and selling price.
///
/// Returns `None` when either input is zero (or NaN), in which case the
/// current offer must be left alone.
#[must_use]
pub fn derive_discount(reference_price: f64, derived_price: f64) -> Option<f64> {
    if !is_set(reference_price) || !is_set(derived_price) {
        return None;
    }
    Some(round_half_up(
        (reference_price - derived_price) / reference_price * 100.0,
    ))
}

fn is_set(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Restores the triangle after `edited` changed.
///
/// Editing the selling price re-derives the offer; anything else (including
/// no edit at all) re-derives the selling price. Only one dependent field is
/// ever written, and an unchanged result returns the entry as-is, so a second
/// call with the same input is a no-op.
#[must_use]
pub fn recompute(entry: PriceEntry, edited: Option<PriceField>) -> PriceEntry {
    match edited {
        Some(PriceField::DerivedPrice) => {
            derive_discount(entry.reference_price, entry.derived_price).map_or(
                entry,
                |discount_percent| PriceEntry {
                    discount_percent,
                    ..entry
                },
            )
        }
        Some(PriceField::ReferencePrice | PriceField::DiscountPercent) | None => {
            let derived_price = derive_price(entry.reference_price, entry.discount_percent);
            if same_value(derived_price, entry.derived_price) {
                entry
            } else {
                PriceEntry {
                    derived_price,
                    ..entry
                }
            }
        }
    }
}

/// Writes a user-entered `value` into `field`, then derives the dependent field.
///
/// `active` is the field that currently holds focus for this entry. While the
/// selling price is focused, edits to MRP or offer do not overwrite it; only
/// typing into the selling price itself drives the offer.
#[must_use]
pub fn apply_edit(
    entry: PriceEntry,
    field: PriceField,
    value: f64,
    active: Option<PriceField>,
) -> PriceEntry {
    let written = entry.with(field, value);
    match (field, active) {
        (PriceField::DerivedPrice, _) => recompute(written, Some(PriceField::DerivedPrice)),
        (_, Some(PriceField::DerivedPrice)) => written,
        (edited, _) => recompute(written, Some(edited)),
    }
}

/// Bounds the offer percentage to `[0, 100]`.
///
/// Reverse derivation yields a negative offer when the selling price exceeds
/// the MRP. When the offer has to move, the selling price is derived again
/// from the bounded offer so the entry stays consistent.
#[must_use]
pub fn clamp_discount(entry: PriceEntry) -> PriceEntry {
    let discount = entry.discount_percent;
    if discount.is_nan() || (0.0..=100.0).contains(&discount) {
        return entry;
    }
    PriceEntry::from_offer(entry.reference_price, discount.clamp(0.0, 100.0))
}

#[allow(clippy::float_cmp)]
fn same_value(a: f64, b: f64) -> bool {
    a == b
}

#[cfg(test)]
#[path = "pricing_test.rs"]
mod tests;
