//! Mounting and drawing errors

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum BackdropError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("canvas #{0} not found")]
    CanvasNotFound(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2D canvas context is not supported")]
    ContextUnavailable,

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for BackdropError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
