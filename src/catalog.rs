use std::collections::HashMap;

use serde::Deserialize;

use crate::error::UiError;

const EMBEDDED_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub key: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    message_template: String,
    products: Vec<Product>,
}

/// Products offered through the purchase modal, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    message_template: String,
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, UiError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, UiError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        if file.products.is_empty() {
            return Err(UiError::EmptyCatalog);
        }
        let mut index = HashMap::new();
        for (position, product) in file.products.iter().enumerate() {
            index.insert(product.key.clone(), position);
            for alias in &product.aliases {
                index.entry(alias.clone()).or_insert(position);
            }
        }
        Ok(Self {
            message_template: file.message_template,
            products: file.products,
            index,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product for a `data-app` key or one of its aliases.
    pub fn lookup(&self, key: &str) -> Option<&Product> {
        self.index.get(key).map(|position| &self.products[*position])
    }

    pub fn purchase_message(&self, product: &Product) -> String {
        self.message_template
            .replace("{title}", &product.title)
            .replace("{price}", &product.price)
    }

    /// Telegram link that opens a chat with `handle` pre-filled with the
    /// purchase message.
    pub fn deep_link(&self, handle: &str, product: &Product) -> String {
        format!(
            "https://t.me/{}?text={}",
            handle,
            urlencoding::encode(&self.purchase_message(product))
        )
    }
}
