use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("Browser window is not available")]
    MissingWindow,
    #[error("Element not found: {0}")]
    MissingElement(String),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
    #[error("Catalog has no products")]
    EmptyCatalog,
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
