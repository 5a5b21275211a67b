use serde::{Deserialize, Serialize};

// Models the gateway will forward to. Anything else is rejected up front.
pub const ALLOWED_MODELS: &[&str] = &[
    "gpt-4",
    "gpt-4-turbo",
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4.1",
    "gpt-4.1-mini",
    "gpt-4.1-nano",
    "gpt-4.5-preview",
    // Reasoning
    "o1-preview",
    "o1-mini",
    "o1",
    "o3-mini",
    "o3",
    "o3-pro",
    "o4-mini",
    "gpt-5",
    "gpt-5-mini",
    "gpt-5-nano",
];

// Inbound request format for /invoke_model
#[derive(Deserialize, Clone)]
pub struct InvokeModelRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f64, // must be within [0, 2]
    pub web_search: bool,
}

// Tool descriptor passed through to the completion API
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ToolDescriptor {
    #[serde(rename = "type")]
    pub tool_type: String,
}

pub fn web_search_tool() -> ToolDescriptor {
    ToolDescriptor {
        tool_type: "web_search_preview".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_search_tool_serializes_with_type_field() {
        let tool = web_search_tool();
        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            serde_json::json!({"type": "web_search_preview"})
        );
    }

    #[test]
    fn allow_list_has_expected_entries() {
        assert_eq!(ALLOWED_MODELS.len(), 18);
        assert!(ALLOWED_MODELS.contains(&"gpt-4o"));
        assert!(ALLOWED_MODELS.contains(&"o3-pro"));
        assert!(!ALLOWED_MODELS.contains(&"not-a-real-model"));
    }
}
