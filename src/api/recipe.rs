//! Inbound recipe API types

use serde::{Deserialize, Serialize};

/// Client request body. Only `cuisine` is read; other fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub cuisine: Option<serde_json::Value>,
}

impl RecipeRequest {
    /// Parse a raw body. Anything that is not a JSON object yields an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The cuisine, if it is a non-empty string
    pub fn cuisine(&self) -> Option<&str> {
        match self.cuisine.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Error body returned to clients
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuisine_present() {
        let req = RecipeRequest::from_body(br#"{"cuisine":"Thai","extra":1}"#);
        assert_eq!(req.cuisine(), Some("Thai"));
    }

    #[test]
    fn test_cuisine_not_truthy() {
        let bodies: [&[u8]; 8] = [
            br#"{}"#,
            br#"{"cuisine":""}"#,
            br#"{"cuisine":null}"#,
            br#"{"cuisine":42}"#,
            br#"{"cuisine":["Thai"]}"#,
            br#"not json"#,
            br#"[]"#,
            b"",
        ];
        for body in bodies {
            let req = RecipeRequest::from_body(body);
            assert_eq!(req.cuisine(), None, "body: {}", String::from_utf8_lossy(body));
        }
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_string(&ErrorBody::new("Method Not Allowed")).unwrap();
        assert_eq!(body, r#"{"error":"Method Not Allowed"}"#);
    }
}
