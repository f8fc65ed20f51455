use thiserror::Error;
use wasm_bindgen::JsValue;

// Failures while setting up the background. None of these can happen once
// the animation is running.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("no global window")]
    NoWindow,
    #[error("canvas has no 2d rendering context")]
    NoContext,
    #[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl FieldError {
    pub fn from_js(value: JsValue) -> FieldError {
        FieldError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
