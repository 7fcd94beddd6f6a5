use wasm_bindgen::JsValue;

use crate::theme::Phase;

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("required element not found: {0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("preference storage unavailable: {0}")]
    Storage(String),
    #[error("cannot {step} while {phase:?}")]
    InvalidTransition { phase: Phase, step: &'static str },
    #[error("invalid value {value:?} for data-fx-{key}")]
    Config { key: String, value: String },
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        FxError::Js(msg)
    }
}

impl From<FxError> for JsValue {
    fn from(err: FxError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
