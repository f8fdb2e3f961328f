//! Error handling for WASM bindings.
//!
//! Options and browser failures surfaced to JavaScript as `Error`s with a `code`.

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid options object
    Config,
    /// Browser API failure
    Host,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Host => "HOST_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Not a `wasm_bindgen` struct: it converts into a real JavaScript `Error`
/// carrying a `code` property instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GeneratocError {
    code: ErrorCode,
    message: String,
}

impl GeneratocError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Host, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_wasm_bindgen::Error> for GeneratocError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(format!("Invalid options: {}", err))
    }
}

impl From<GeneratocError> for JsValue {
    fn from(err: GeneratocError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();
        js_error.into()
    }
}

/// Best-effort text of a thrown JavaScript value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}
