//! Tool input normalization.
//!
//! Tool callers hand over JSON text, a structured JSON value, or an already
//! validated request. All three collapse into one typed request at the
//! boundary so handlers never see the raw shapes.

use serde_json::Value;

use super::ValidationError;

/// Conversion from a structured JSON value into a validated request.
pub trait FromToolValue: Sized {
    fn from_tool_value(value: Value) -> Result<Self, ValidationError>;
}

/// The shapes a tool accepts its input in.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInput<T> {
    /// JSON text that still needs parsing.
    Text(String),
    /// An already-parsed JSON value.
    Structured(Value),
    /// A request that was validated upstream.
    Typed(T),
}

impl<T: FromToolValue> ToolInput<T> {
    /// Resolves the input into its typed request.
    ///
    /// Text is parsed as JSON first; anything that is not valid JSON is a
    /// [`ValidationError::Unparseable`].
    pub fn resolve(self) -> Result<T, ValidationError> {
        match self {
            ToolInput::Typed(request) => Ok(request),
            ToolInput::Structured(value) => T::from_tool_value(value),
            ToolInput::Text(text) => {
                let value: Value = serde_json::from_str(&text)
                    .map_err(|e| ValidationError::unparseable(e.to_string()))?;
                T::from_tool_value(value)
            }
        }
    }
}

impl<T> From<Value> for ToolInput<T> {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => ToolInput::Text(text),
            other => ToolInput::Structured(other),
        }
    }
}

impl<T> From<&str> for ToolInput<T> {
    fn from(text: &str) -> Self {
        ToolInput::Text(text.to_string())
    }
}
