//! Gemini generateContent request types

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    #[serde(rename = "systemInstruction")]
    pub system_instruction: Content,
    pub config: GenerationConfig,
}

/// A list of parts. Used for both user contents and the system instruction.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    /// Single text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Part {
    pub text: String,
}

/// Tool declaration. Serializes as `{"google_search": {}}`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: GoogleSearch {},
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct GoogleSearch {}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names() {
        let request = GenerateContentRequest {
            contents: vec![Content::text("hello")],
            tools: vec![Tool::google_search()],
            system_instruction: Content::text("be brief"),
            config: GenerationConfig { temperature: 0.5 },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{"parts": [{"text": "hello"}]}],
                "tools": [{"google_search": {}}],
                "systemInstruction": {"parts": [{"text": "be brief"}]},
                "config": {"temperature": 0.5}
            })
        );
    }
}
