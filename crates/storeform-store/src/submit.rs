use chrono::{DateTime, Utc};
use storeform_core::{ProductForm, ProductRecord};

use crate::{ProductStore, SubmitError};

/// Validates `form` and appends it to the store's product list.
///
/// The record id is `now` in milliseconds. Nothing is written when validation
/// fails, and a failed write leaves both the form and the stored list as they
/// were, so the caller can retry.
///
/// # Errors
///
/// Returns [`SubmitError::Validation`] listing every failing field, or
/// [`SubmitError::Store`] when the list cannot be read or written.
pub fn submit_product<S>(
    store: &S,
    form: &ProductForm,
    now: DateTime<Utc>,
) -> Result<ProductRecord, SubmitError>
where
    S: ProductStore + ?Sized,
{
    let record = match ProductRecord::from_form(form, now.timestamp_millis()) {
        Ok(record) => record,
        Err(errors) => {
            tracing::warn!(
                failed_fields = errors.len(),
                first = errors.first().map_or("", |e| e.path.as_str()),
                "product draft failed validation"
            );
            return Err(errors.into());
        }
    };

    let mut products = store.read()?;
    products.push(record.clone());
    if let Err(e) = store.write(&products) {
        tracing::error!(error = %e, title = %record.title, "failed to save product");
        return Err(e.into());
    }

    tracing::info!(
        id = record.id,
        title = %record.title,
        variants = record.variant_count(),
        total = products.len(),
        "product saved"
    );
    Ok(record)
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
