use std::cell::RefCell;

use storeform_core::ProductRecord;

use crate::{ProductStore, StoreError};

/// Keeps the product list in memory. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RefCell<Vec<ProductRecord>>,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_products(products: Vec<ProductRecord>) -> Self {
        Self {
            products: RefCell::new(products),
            fail_writes: false,
        }
    }

    /// A store whose every write fails with [`StoreError::Unavailable`].
    #[must_use]
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.borrow().is_empty()
    }
}

impl ProductStore for MemoryStore {
    fn read(&self) -> Result<Vec<ProductRecord>, StoreError> {
        Ok(self.products.borrow().clone())
    }

    fn write(&self, products: &[ProductRecord]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("writes are disabled".to_string()));
        }
        *self.products.borrow_mut() = products.to_vec();
        Ok(())
    }
}
