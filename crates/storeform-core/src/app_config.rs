use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// JSON file holding the saved product list.
    pub store_path: PathBuf,
    /// Key the product list is stored under inside the store file.
    pub store_key: String,
    pub max_images: usize,
    pub seller_name: String,
    /// Clamp offers derived from a selling price into `[0, 100]`.
    pub clamp_offer: bool,
}

/// The subset of [`AppConfig`] a [`crate::ProductForm`] needs while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub max_images: usize,
    pub seller_name: String,
    pub clamp_offer: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            max_images: crate::catalog::DEFAULT_MAX_IMAGES,
            seller_name: crate::catalog::DEFAULT_SELLER_NAME.to_string(),
            clamp_offer: true,
        }
    }
}

impl From<&AppConfig> for FormSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_images: config.max_images,
            seller_name: config.seller_name.clone(),
            clamp_offer: config.clamp_offer,
        }
    }
}
