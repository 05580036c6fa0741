//! Variant options and the combination matrix built from them.
//!
//! Options are picked from a closed set of names, each with its own value
//! vocabulary. Confirming an option set expands it into one row per value
//! combination and carries over rows the user already priced.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FormError;
use crate::pricing::PriceEntry;

/// Separator placed between option values in a combination's display name.
pub const COMBINATION_SEPARATOR: &str = " / ";

/// Inventory given to combinations that did not exist before.
pub const DEFAULT_VARIANT_INVENTORY: u32 = 100;

const COLOR_VALUES: &[&str] = &["Red", "White", "Blue", "Black"];
const SIZE_VALUES: &[&str] = &["3", "4", "5", "6", "7", "8", "9", "10"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionName {
    #[serde(rename = "Size UK")]
    SizeUk,
    #[serde(rename = "Size US")]
    SizeUs,
    Color,
}

impl OptionName {
    pub const ALL: [OptionName; 3] = [OptionName::SizeUk, OptionName::SizeUs, OptionName::Color];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OptionName::SizeUk => "Size UK",
            OptionName::SizeUs => "Size US",
            OptionName::Color => "Color",
        }
    }

    /// Values that may be selected for this option, in display order.
    #[must_use]
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            OptionName::Color => COLOR_VALUES,
            OptionName::SizeUk | OptionName::SizeUs => SIZE_VALUES,
        }
    }

    #[must_use]
    pub fn offers(self, value: &str) -> bool {
        self.vocabulary().contains(&value)
    }
}

impl std::fmt::Display for OptionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OptionName {
    type Err = FormError;

    /// Accepts the display labels case-insensitively, so `"Size Uk"` and
    /// `"size us"` both resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OptionName::ALL
            .into_iter()
            .find(|name| name.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FormError::UnknownOptionName(s.to_string()))
    }
}

/// One option row in the variant editor: a name and the values ticked for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub id: Uuid,
    pub name: Option<OptionName>,
    /// Selected values in the order they were ticked. Never holds duplicates.
    pub values: Vec<String>,
}

impl VariantOption {
    /// A fresh option row with no name and nothing selected.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            values: Vec::new(),
        }
    }

    /// Builds a named option with `values` selected in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ValueNotInVocabulary`] if a value is not offered
    /// for `name`.
    pub fn named<I, S>(name: OptionName, values: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut option = Self {
            name: Some(name),
            ..Self::blank()
        };
        for value in values {
            let value = value.as_ref();
            if !option.is_selected(value) {
                option.toggle_value(value)?;
            }
        }
        Ok(option)
    }

    /// Changes the option's name. Selected values always reset, since they
    /// belong to the previous name's vocabulary.
    pub fn set_name(&mut self, name: Option<OptionName>) {
        self.name = name;
        self.values.clear();
    }

    /// Selects `value` if it is not selected, deselects it otherwise.
    ///
    /// Returns whether the value is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::OptionUnnamed`] if the option has no name, or
    /// [`FormError::ValueNotInVocabulary`] if the name does not offer `value`.
    pub fn toggle_value(&mut self, value: &str) -> Result<bool, FormError> {
        let name = self.name.ok_or(FormError::OptionUnnamed(self.id))?;
        if !name.offers(value) {
            return Err(FormError::ValueNotInVocabulary {
                option: name,
                value: value.to_string(),
            });
        }

        if let Some(pos) = self.values.iter().position(|v| v == value) {
            self.values.remove(pos);
            Ok(false)
        } else {
            self.values.push(value.to_string());
            Ok(true)
        }
    }

    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// `true` when the option contributes to the combination matrix.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && !self.values.is_empty()
    }
}

/// The ordered `(option, value)` pairs that identify one combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinationKey(Vec<(OptionName, String)>);

impl CombinationKey {
    #[must_use]
    pub fn new(pairs: Vec<(OptionName, String)>) -> Self {
        Self(pairs)
    }

    #[must_use]
    pub fn pairs(&self) -> &[(OptionName, String)] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values joined with [`COMBINATION_SEPARATOR`], e.g. `"8 / Red"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0
            .iter()
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>()
            .join(COMBINATION_SEPARATOR)
    }
}

/// A priced, stocked row for one value combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantCombination {
    /// Display name, e.g. `"8 / Red"`.
    pub name: String,
    /// Empty for rows loaded from records that predate keys; those are
    /// matched by `name` instead.
    #[serde(default)]
    pub key: CombinationKey,
    #[serde(flatten)]
    pub price: PriceEntry,
    pub inventory: u32,
    pub weight: f64,
}

impl VariantCombination {
    /// Whether this row stands for the combination identified by `key`.
    #[must_use]
    pub fn matches(&self, key: &CombinationKey) -> bool {
        if self.key.is_empty() {
            self.name == key.display_name()
        } else {
            self.key == *key
        }
    }
}

/// Values copied into combinations that have no existing row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MergeDefaults {
    pub price: PriceEntry,
    pub weight: f64,
}

/// Expands complete options into their Cartesian product.
///
/// Options without a name or without values are skipped. The first option
/// varies slowest: every partial combination built so far is extended by each
/// value of the next option in turn.
#[must_use]
pub fn build_combination_keys(options: &[VariantOption]) -> Vec<CombinationKey> {
    let complete: Vec<(OptionName, &[String])> = options
        .iter()
        .filter_map(|option| match option.name {
            Some(name) if !option.values.is_empty() => Some((name, option.values.as_slice())),
            _ => None,
        })
        .collect();

    if complete.is_empty() {
        return Vec::new();
    }

    let mut partials: Vec<Vec<(OptionName, String)>> = vec![Vec::new()];
    for (name, values) in complete {
        let mut next = Vec::with_capacity(partials.len() * values.len());
        for partial in &partials {
            for value in values {
                let mut extended = partial.clone();
                extended.push((name, value.clone()));
                next.push(extended);
            }
        }
        partials = next;
    }

    partials.into_iter().map(CombinationKey).collect()
}

/// Display names of [`build_combination_keys`], in the same order.
#[must_use]
pub fn build_combinations(options: &[VariantOption]) -> Vec<String> {
    build_combination_keys(options)
        .iter()
        .map(CombinationKey::display_name)
        .collect()
}

/// Produces the new row set for `keys`.
///
/// A key that already has a row in `existing` keeps that row untouched, so
/// prices and stock typed in earlier survive option changes. New keys get a
/// row seeded from `defaults` with [`DEFAULT_VARIANT_INVENTORY`]. Rows whose
/// key is gone are dropped.
#[must_use]
pub fn merge_combinations(
    keys: &[CombinationKey],
    existing: &[VariantCombination],
    defaults: &MergeDefaults,
) -> Vec<VariantCombination> {
    let mut reused = 0usize;
    let rows: Vec<VariantCombination> = keys
        .iter()
        .map(|key| {
            if let Some(row) = existing.iter().find(|row| row.matches(key)) {
                reused += 1;
                row.clone()
            } else {
                VariantCombination {
                    name: key.display_name(),
                    key: key.clone(),
                    price: defaults.price,
                    inventory: DEFAULT_VARIANT_INVENTORY,
                    weight: defaults.weight,
                }
            }
        })
        .collect();

    tracing::debug!(
        combinations = rows.len(),
        reused,
        dropped = existing.len().saturating_sub(reused),
        "variant rows rebuilt"
    );
    rows
}

#[cfg(test)]
#[path = "variants_test.rs"]
mod tests;
