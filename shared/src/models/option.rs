//! Dish option Model

use crate::DisplayLanguage;
use serde::{Deserialize, Serialize};

/// Sentinel value meaning "not selected"
///
/// Excluded from pricing, from display and from the cart line fingerprint.
pub const NOT_SELECTED: &str = "no";

/// One choice inside an option group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    /// Stable key (e.g. "yes", "mild")
    pub value: String,
    #[serde(default)]
    pub label_zh: String,
    #[serde(default)]
    pub label_en: String,
}

impl OptionValue {
    /// Label in the given language, falling back to the stable key
    pub fn label(&self, lang: DisplayLanguage) -> &str {
        let label = lang.pick(&self.label_zh, &self.label_en);
        if label.is_empty() { &self.value } else { label }
    }

    pub fn is_not_selected(&self) -> bool {
        self.value == NOT_SELECTED
    }
}

/// A named set of mutually exclusive customization choices for one dish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    #[serde(default)]
    pub id: Option<i64>,
    /// Stable key (e.g. "spicy_level")
    pub option_type: String,
    #[serde(default)]
    pub option_name_zh: String,
    #[serde(default)]
    pub option_name_en: String,
    /// Declared values, in display order
    #[serde(default)]
    pub option_values: Vec<OptionValue>,
    #[serde(default)]
    pub is_required: bool,
}

impl OptionGroup {
    /// Group title in the given language, falling back to the stable key
    pub fn name(&self, lang: DisplayLanguage) -> &str {
        let name = lang.pick(&self.option_name_zh, &self.option_name_en);
        if name.is_empty() { &self.option_type } else { name }
    }

    /// Look up a declared value
    pub fn value(&self, value: &str) -> Option<&OptionValue> {
        self.option_values.iter().find(|v| v.value == value)
    }

    pub fn declares(&self, value: &str) -> bool {
        self.value(value).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spicy() -> OptionGroup {
        serde_json::from_str(
            r#"{
                "id": 3, "option_type": "spicy_level",
                "option_name_zh": "辣度", "option_name_en": "Spicy Level",
                "option_values": [
                    {"value": "no", "label_zh": "不辣", "label_en": "No Spicy"},
                    {"value": "mild", "label_zh": "微辣", "label_en": "Mild"}
                ],
                "is_required": false
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_group_labels_follow_language() {
        let group = spicy();
        assert_eq!(group.name(DisplayLanguage::Zh), "辣度");
        assert_eq!(group.name(DisplayLanguage::En), "Spicy Level");
        assert_eq!(group.value("mild").unwrap().label(DisplayLanguage::Zh), "微辣");
    }

    #[test]
    fn test_declares() {
        let group = spicy();
        assert!(group.declares("no"));
        assert!(!group.declares("extra_hot"));
        assert!(group.value("no").unwrap().is_not_selected());
    }

    #[test]
    fn test_missing_label_falls_back_to_key() {
        let value = OptionValue {
            value: "yes".into(),
            label_zh: String::new(),
            label_en: "Yes".into(),
        };
        assert_eq!(value.label(DisplayLanguage::Zh), "yes");
        assert_eq!(value.label(DisplayLanguage::En), "Yes");
    }
}
