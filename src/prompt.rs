//! Fixed prompt templates for recipe generation

use crate::api::{Content, GenerateContentRequest, GenerationConfig, Tool};

pub const SYSTEM_PROMPT: &str = "You are a friendly and highly creative world-class chef. \
You specialize in generating clear, concise, and delicious recipes. \
Always format your output using markdown headings and bullet points for readability. \
Do not include any introductory or concluding chatter, only the recipe.";

pub const TEMPERATURE: f64 = 0.8;

/// User query for a cuisine. The value is inserted as-is.
pub fn user_query(cuisine: &str) -> String {
    format!(
        "Give me a detailed recipe idea for **{}** that serves two people. \
         Include the title, an ingredient list, and easy instructions.",
        cuisine
    )
}

/// Build the full upstream payload for a cuisine
pub fn build_payload(cuisine: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(user_query(cuisine))],
        tools: vec![Tool::google_search()],
        system_instruction: Content::text(SYSTEM_PROMPT),
        config: GenerationConfig {
            temperature: TEMPERATURE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_query_template() {
        assert_eq!(
            user_query("Thai"),
            "Give me a detailed recipe idea for **Thai** that serves two people. \
             Include the title, an ingredient list, and easy instructions."
        );
    }

    #[test]
    fn test_special_characters_kept_literal() {
        let payload = build_payload("Tex-Mex & BBQ");
        assert!(payload.contents[0].parts[0].text.contains("**Tex-Mex & BBQ**"));

        let payload = build_payload(r#"Crème "brûlée" <fusion> {x}"#);
        assert!(payload.contents[0].parts[0]
            .text
            .contains(r#"**Crème "brûlée" <fusion> {x}**"#));
    }

    #[test]
    fn test_payload_shape() {
        let value = serde_json::to_value(build_payload("Thai")).unwrap();
        assert_eq!(value["tools"], serde_json::json!([{"google_search": {}}]));
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], SYSTEM_PROMPT);
        assert_eq!(value["config"]["temperature"], 0.8);
        assert_eq!(value["contents"].as_array().map(|a| a.len()), Some(1));
    }

    #[test]
    fn test_system_prompt_text() {
        assert!(SYSTEM_PROMPT.starts_with("You are a friendly and highly creative world-class chef."));
        assert!(SYSTEM_PROMPT.contains("markdown headings and bullet points"));
        assert!(SYSTEM_PROMPT.ends_with("only the recipe."));
        assert!(!SYSTEM_PROMPT.contains("  "));
    }
}
