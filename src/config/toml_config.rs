use crate::core::storefront::ShopperAction;
use crate::domain::model::{Category, Order, Product};
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_price, validate_range,
    validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Largest quantity a single scripted `add` may request.
pub const MAX_ADD_QUANTITY: u32 = 999;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub store: StoreConfig,
    pub backend: Option<BackendConfig>,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub script: Vec<ShopperAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    #[default]
    Inline,
    Remote,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: CatalogSource,
}

impl StorefrontConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StorefrontError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| StorefrontError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references (e.g. `${STOREFRONT_ANON_KEY}`); unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Checks the configuration for consistency.
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("store.name", &self.store.name)?;

        if let Some(backend) = &self.backend {
            validate_url("backend.url", &backend.url)?;
            validate_non_empty_string("backend.anon_key", &backend.anon_key)?;
        }

        if self.catalog.source == CatalogSource::Remote {
            validate_required_field("backend", &self.backend)?;
        }

        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for product in &self.products {
            validate_non_empty_string("products.title", &product.title)?;
            validate_non_empty_string("products.slug", &product.slug)?;
            validate_price("products.price", product.price)?;
            validate_positive_number("products.max_quantity", product.max_quantity, 1)?;

            if !ids.insert(product.id) {
                return Err(StorefrontError::ConfigValidationError {
                    field: "products.id".to_string(),
                    message: format!("duplicate product id {}", product.id),
                });
            }
            if !slugs.insert(product.slug.as_str()) {
                return Err(StorefrontError::ConfigValidationError {
                    field: "products.slug".to_string(),
                    message: format!("duplicate product slug '{}'", product.slug),
                });
            }
        }

        let mut category_slugs = HashSet::new();
        for category in &self.categories {
            validate_non_empty_string("categories.name", &category.name)?;
            validate_non_empty_string("categories.slug", &category.slug)?;
            if !category_slugs.insert(category.slug.as_str()) {
                return Err(StorefrontError::ConfigValidationError {
                    field: "categories.slug".to_string(),
                    message: format!("duplicate category slug '{}'", category.slug),
                });
            }
        }

        for order in &self.orders {
            validate_non_empty_string("orders.slug", &order.slug)?;
        }

        for action in &self.script {
            match action {
                ShopperAction::Add { slug, quantity } => {
                    validate_non_empty_string("script.slug", slug)?;
                    if let Some(quantity) = quantity {
                        validate_range("script.quantity", *quantity, 1, MAX_ADD_QUANTITY)?;
                    }
                }
                ShopperAction::Increase { slug }
                | ShopperAction::Decrease { slug }
                | ShopperAction::Remove { slug } => {
                    validate_non_empty_string("script.slug", slug)?;
                }
                ShopperAction::Checkout => {}
            }
        }

        Ok(())
    }

    pub fn uses_remote_catalog(&self) -> bool {
        self.catalog.source == CatalogSource::Remote
    }
}

impl Validate for StorefrontConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
