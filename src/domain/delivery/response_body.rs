//! Remote response bodies as reported back to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A response body: parsed JSON when possible, the raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parses `text` as JSON, falling back to the text itself.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text.to_string()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_json_bodies() {
        let body = ResponseBody::parse(r#"{"status":"SUCCESS","beatId":12}"#);
        assert_eq!(body.as_json(), Some(&json!({"status": "SUCCESS", "beatId": 12})));
    }

    #[test]
    fn keeps_non_json_as_text() {
        let body = ResponseBody::parse("<html>Bad Gateway</html>");
        assert_eq!(body, ResponseBody::Text("<html>Bad Gateway</html>".into()));
    }

    #[test]
    fn empty_body_is_text() {
        assert_eq!(ResponseBody::parse(""), ResponseBody::Text(String::new()));
    }

    #[test]
    fn serializes_without_wrapper() {
        let body = ResponseBody::Text("deleted".into());
        assert_eq!(serde_json::to_value(&body).unwrap(), json!("deleted"));
    }
}
