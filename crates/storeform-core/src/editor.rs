//! State machine behind the variants section of the product form.
//!
//! ```text
//! NoVariants --start--> Editing --confirm--> Saved
//!                          ^                   |
//!                          +--edit/add_option--+
//! ```
//!
//! Every transition borrows the current state and returns the next one; the
//! caller replaces its copy wholesale. A rejected transition returns an error
//! and the caller keeps the state it had.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FormError;
use crate::variants::{
    build_combination_keys, merge_combinations, MergeDefaults, OptionName, VariantCombination,
    VariantOption,
};

/// How saved combination rows are shown. Has no effect on the rows themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowView {
    /// Read-only summary with formatted prices.
    #[default]
    Table,
    /// Every row rendered as editable inputs.
    BulkEdit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VariantEditor {
    #[default]
    NoVariants,
    Editing {
        options: Vec<VariantOption>,
        /// Options as last confirmed, restored on cancel. `None` when editing
        /// started from [`VariantEditor::NoVariants`].
        confirmed: Option<Vec<VariantOption>>,
    },
    Saved {
        options: Vec<VariantOption>,
        view: RowView,
    },
}

impl VariantEditor {
    /// Opens the option editor.
    ///
    /// From `NoVariants` the editor starts with one blank option; from `Saved`
    /// it reopens the confirmed options. Already editing is a no-op.
    #[must_use]
    pub fn start(&self) -> Self {
        match self {
            VariantEditor::NoVariants => VariantEditor::Editing {
                options: vec![VariantOption::blank()],
                confirmed: None,
            },
            VariantEditor::Saved { options, .. } => VariantEditor::Editing {
                options: options.clone(),
                confirmed: Some(options.clone()),
            },
            VariantEditor::Editing { .. } => self.clone(),
        }
    }

    /// Appends a blank option, opening the editor first if needed.
    #[must_use]
    pub fn add_option(&self) -> Self {
        match self.start() {
            VariantEditor::Editing {
                mut options,
                confirmed,
            } => {
                // Starting from nothing already produced the first blank row.
                if !matches!(self, VariantEditor::NoVariants) {
                    options.push(VariantOption::blank());
                }
                VariantEditor::Editing { options, confirmed }
            }
            other => other,
        }
    }

    /// Removes the option with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotEditing`] outside the editor,
    /// [`FormError::LastOption`] when only one option is left, or
    /// [`FormError::UnknownOption`] for an unknown `id`.
    pub fn remove_option(&self, id: Uuid) -> Result<Self, FormError> {
        let (options, confirmed) = self.editing()?;
        if options.len() <= 1 {
            return Err(FormError::LastOption);
        }
        let pos = position(options, id)?;

        let mut options = options.to_vec();
        options.remove(pos);
        Ok(VariantEditor::Editing {
            options,
            confirmed: confirmed.cloned(),
        })
    }

    /// Sets or clears the name of option `id`, resetting its values.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotEditing`] outside the editor or
    /// [`FormError::UnknownOption`] for an unknown `id`.
    pub fn rename_option(&self, id: Uuid, name: Option<OptionName>) -> Result<Self, FormError> {
        self.update_option(id, |option| {
            option.set_name(name);
            Ok(())
        })
    }

    /// Toggles `value` on option `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotEditing`] outside the editor,
    /// [`FormError::UnknownOption`] for an unknown `id`, or whatever
    /// [`VariantOption::toggle_value`] rejects.
    pub fn toggle_value(&self, id: Uuid, value: &str) -> Result<Self, FormError> {
        self.update_option(id, |option| option.toggle_value(value).map(|_| ()))
    }

    /// Leaves the editor without touching any rows.
    #[must_use]
    pub fn cancel(&self) -> Self {
        match self {
            VariantEditor::Editing {
                confirmed: Some(options),
                ..
            } => VariantEditor::Saved {
                options: options.clone(),
                view: RowView::Table,
            },
            VariantEditor::Editing {
                confirmed: None, ..
            } => VariantEditor::NoVariants,
            other => other.clone(),
        }
    }

    /// Confirms the edited options and returns the rebuilt combination rows.
    ///
    /// Outside the editor nothing changes and `existing` comes back as-is.
    #[must_use]
    pub fn confirm(
        &self,
        existing: &[VariantCombination],
        defaults: &MergeDefaults,
    ) -> (Self, Vec<VariantCombination>) {
        let VariantEditor::Editing { options, .. } = self else {
            return (self.clone(), existing.to_vec());
        };

        let keys = build_combination_keys(options);
        let rows = merge_combinations(&keys, existing, defaults);
        (
            VariantEditor::Saved {
                options: options.clone(),
                view: RowView::Table,
            },
            rows,
        )
    }

    /// Flips between the table and bulk-edit views of saved rows.
    #[must_use]
    pub fn toggle_view(&self) -> Self {
        match self {
            VariantEditor::Saved { options, view } => VariantEditor::Saved {
                options: options.clone(),
                view: match view {
                    RowView::Table => RowView::BulkEdit,
                    RowView::BulkEdit => RowView::Table,
                },
            },
            other => other.clone(),
        }
    }

    /// Options currently shown, whether being edited or confirmed.
    #[must_use]
    pub fn options(&self) -> &[VariantOption] {
        match self {
            VariantEditor::NoVariants => &[],
            VariantEditor::Editing { options, .. } | VariantEditor::Saved { options, .. } => {
                options
            }
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, VariantEditor::Editing { .. })
    }

    /// Row view while saved; `None` in other states.
    #[must_use]
    pub fn view(&self) -> Option<RowView> {
        match self {
            VariantEditor::Saved { view, .. } => Some(*view),
            _ => None,
        }
    }

    fn editing(&self) -> Result<(&[VariantOption], Option<&Vec<VariantOption>>), FormError> {
        match self {
            VariantEditor::Editing { options, confirmed } => {
                Ok((options.as_slice(), confirmed.as_ref()))
            }
            _ => Err(FormError::NotEditing),
        }
    }

    fn update_option<F>(&self, id: Uuid, edit: F) -> Result<Self, FormError>
    where
        F: FnOnce(&mut VariantOption) -> Result<(), FormError>,
    {
        let (options, confirmed) = self.editing()?;
        let pos = position(options, id)?;

        let mut options = options.to_vec();
        edit(&mut options[pos])?;
        Ok(VariantEditor::Editing {
            options,
            confirmed: confirmed.cloned(),
        })
    }
}

fn position(options: &[VariantOption], id: Uuid) -> Result<usize, FormError> {
    options
        .iter()
        .position(|option| option.id == id)
        .ok_or(FormError::UnknownOption(id))
}
