//! Persistence boundary for saved products.
//!
//! A store holds one list of [`ProductRecord`]s and only supports reading and
//! writing that list whole. Submitting a draft appends to it.

mod error;
mod file;
mod memory;
mod submit;

use storeform_core::ProductRecord;

pub use error::{StoreError, SubmitError};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use submit::submit_product;

/// Storage for the saved product list.
pub trait ProductStore {
    /// Returns the saved list; an empty list when nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be read or holds
    /// data that is not a product list.
    fn read(&self) -> Result<Vec<ProductRecord>, StoreError>;

    /// Replaces the saved list with `products`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the list cannot be encoded or written.
    fn write(&self, products: &[ProductRecord]) -> Result<(), StoreError>;
}
