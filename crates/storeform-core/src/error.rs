use thiserror::Error;
use uuid::Uuid;

use crate::variants::OptionName;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Rejected edits to a [`crate::ProductForm`] or its variant editor.
///
/// None of these leave the form half-updated: the edit is refused and the
/// previous state stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown option name \"{0}\"; expected one of: Size UK, Size US, Color")]
    UnknownOptionName(String),

    #[error("value \"{value}\" is not offered for option {option}")]
    ValueNotInVocabulary { option: OptionName, value: String },

    #[error("option {0} has no name yet; pick a name before selecting values")]
    OptionUnnamed(Uuid),

    #[error("no variant option with id {0}")]
    UnknownOption(Uuid),

    #[error("the last remaining variant option cannot be removed")]
    LastOption,

    #[error("variant options can only be changed while editing")]
    NotEditing,

    #[error("no variant row at index {0}")]
    UnknownVariant(usize),

    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),

    #[error("select a category before choosing a sub-category")]
    CategoryNotSelected,

    #[error("sub-category \"{sub_category}\" does not belong to category \"{category}\"")]
    SubCategoryMismatch {
        category: String,
        sub_category: String,
    },
}
