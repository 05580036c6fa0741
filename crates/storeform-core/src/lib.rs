//! Core of the add-product form: price derivation, variant matrix, the
//! product draft and its validation.

mod app_config;
pub mod catalog;
mod config;
pub mod editor;
mod error;
pub mod form;
pub mod pricing;
mod record;
pub mod validation;
pub mod variants;

pub use app_config::{AppConfig, Environment, FormSettings};
pub use config::{load_app_config, load_app_config_from_env};
pub use editor::{RowView, VariantEditor};
pub use error::{ConfigError, FormError};
pub use form::{ActiveField, ProductForm};
pub use pricing::{PriceEntry, PriceField};
pub use record::ProductRecord;
pub use validation::{validate, FieldError, ValidationErrors};
pub use variants::{
    build_combination_keys, build_combinations, merge_combinations, CombinationKey,
    MergeDefaults, OptionName, VariantCombination, VariantOption,
};
