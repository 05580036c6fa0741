use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use storeform_core::ProductRecord;

use crate::{ProductStore, StoreError};

/// Stores the product list in a JSON file as `{ "<key>": [ ...records ] }`.
///
/// Other keys in the file are left as they are on write. A missing file or
/// missing key reads as an empty list.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn from_app_config(config: &storeform_core::AppConfig) -> Self {
        Self::new(config.store_path.clone(), config.store_key.clone())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn load_document(&self) -> Result<Map<String, Value>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        let value: Value = serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::UnexpectedShape {
                path: self.path.clone(),
            }),
        }
    }
}

impl ProductStore for JsonFileStore {
    fn read(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let mut document = self.load_document()?;
        let Some(list) = document.remove(&self.key) else {
            return Ok(Vec::new());
        };
        serde_json::from_value(list).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, products: &[ProductRecord]) -> Result<(), StoreError> {
        let mut document = self.load_document()?;
        document.insert(self.key.clone(), serde_json::to_value(products)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let encoded = serde_json::to_string_pretty(&Value::Object(document))?;
        std::fs::write(&self.path, encoded).map_err(|e| self.io_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            key = %self.key,
            products = products.len(),
            "product list written"
        );
        Ok(())
    }
}
