// ── Input and filter domain types ──

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Input {
    pub name: String,
    pub uuid: String,
    /// Versioned kind identifier, e.g. `text_gdiplus_v3`.
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSettings {
    pub kind: String,
    pub settings: Value,
}

impl InputSettings {
    /// Text sources are the `text_*` kinds (GDI+ on Windows, FreeType elsewhere).
    pub fn is_text(&self) -> bool {
        self.kind.starts_with("text_")
    }

    /// Current `text` setting, or an empty string when unset.
    pub fn text(&self) -> &str {
        self.settings
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Filter {
    pub name: String,
    pub kind: String,
    pub enabled: bool,
    /// Only the settings that differ from the kind's defaults.
    pub settings: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_kinds_are_detected_by_prefix() {
        let settings = InputSettings {
            kind: "text_ft2_source_v2".into(),
            settings: json!({ "text": "hello" }),
        };
        assert!(settings.is_text());
        assert_eq!(settings.text(), "hello");
    }

    #[test]
    fn missing_text_reads_as_empty() {
        let settings = InputSettings {
            kind: "color_source_v3".into(),
            settings: json!({}),
        };
        assert!(!settings.is_text());
        assert_eq!(settings.text(), "");
    }
}
