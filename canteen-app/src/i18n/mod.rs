//! Localization table
//!
//! One typed table keyed by `(Domain, canonical key)` holding a zh/en pair.
//! A missing translation resolves to the canonical key itself, so lookups
//! never fail and never depend on anything but their arguments.

mod builtin;

use shared::DisplayLanguage;
use std::collections::HashMap;

/// Translation domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Dish names, keyed by canonical (English) name
    Dish,
    /// Stall / category names
    Category,
    /// Canteen names
    Canteen,
    /// Option group titles, keyed by `option_type`
    OptionName,
    /// Option value labels, keyed by `option_type:value`
    OptionValue,
    /// Interface strings
    Ui,
}

/// A zh/en text pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub zh: String,
    pub en: String,
}

impl Translation {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            zh: zh.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: DisplayLanguage) -> &str {
        lang.pick(&self.zh, &self.en)
    }
}

/// Key for an option value label
///
/// Values are scoped by their group so `spicy_level:hot` and
/// `temperature:hot` never collide.
pub fn option_value_key(option_type: &str, value: &str) -> String {
    format!("{option_type}:{value}")
}

#[derive(Debug, Clone, Default)]
pub struct LocalizationTable {
    entries: HashMap<Domain, HashMap<String, Translation>>,
}

impl LocalizationTable {
    /// Empty table: every lookup falls back to its key
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with the canteen catalog and interface strings
    pub fn builtin() -> Self {
        let mut table = Self::new();
        builtin::seed(&mut table);
        table
    }

    pub fn insert(&mut self, domain: Domain, key: impl Into<String>, translation: Translation) {
        self.entries
            .entry(domain)
            .or_default()
            .insert(key.into(), translation);
    }

    pub fn get(&self, domain: Domain, key: &str) -> Option<&Translation> {
        self.entries.get(&domain).and_then(|m| m.get(key))
    }

    /// Resolve `key` in `domain`, falling back to the key when untranslated
    /// (or when the translation for `lang` is empty).
    pub fn resolve<'a>(&'a self, domain: Domain, key: &'a str, lang: DisplayLanguage) -> &'a str {
        match self.get(domain, key).map(|t| t.get(lang)) {
            Some(text) if !text.is_empty() => text,
            _ => key,
        }
    }

    /// Interface string
    pub fn ui<'a>(&'a self, key: &'a str, lang: DisplayLanguage) -> &'a str {
        self.resolve(Domain::Ui, key, lang)
    }

    pub fn dish<'a>(&'a self, name: &'a str, lang: DisplayLanguage) -> &'a str {
        self.resolve(Domain::Dish, name, lang)
    }

    pub fn category<'a>(&'a self, name: &'a str, lang: DisplayLanguage) -> &'a str {
        self.resolve(Domain::Category, name, lang)
    }

    pub fn canteen<'a>(&'a self, name: &'a str, lang: DisplayLanguage) -> &'a str {
        self.resolve(Domain::Canteen, name, lang)
    }

    pub fn option_name<'a>(&'a self, option_type: &'a str, lang: DisplayLanguage) -> &'a str {
        self.resolve(Domain::OptionName, option_type, lang)
    }

    /// Option value label; untranslated values fall back to the bare value
    pub fn option_value<'a>(
        &'a self,
        option_type: &str,
        value: &'a str,
        lang: DisplayLanguage,
    ) -> &'a str {
        let key = option_value_key(option_type, value);
        match self.get(Domain::OptionValue, &key).map(|t| t.get(lang)) {
            Some(text) if !text.is_empty() => text,
            _ => value,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let table = LocalizationTable::new();
        assert_eq!(table.dish("Mystery Stew", DisplayLanguage::Zh), "Mystery Stew");
        assert_eq!(table.ui("nav_menu", DisplayLanguage::En), "nav_menu");
        assert_eq!(table.option_value("add_egg", "yes", DisplayLanguage::Zh), "yes");
    }

    #[test]
    fn test_empty_translation_falls_back_to_key() {
        let mut table = LocalizationTable::new();
        table.insert(Domain::Canteen, "East Canteen", Translation::new("", "East Canteen"));
        assert_eq!(table.canteen("East Canteen", DisplayLanguage::Zh), "East Canteen");
    }

    #[test]
    fn test_builtin_catalog_names() {
        let table = LocalizationTable::builtin();
        assert_eq!(table.dish("Egg Fried Rice", DisplayLanguage::Zh), "蛋炒饭");
        assert_eq!(table.dish("Egg Fried Rice", DisplayLanguage::En), "Egg Fried Rice");
        assert_eq!(table.category("Noodle Stall 1", DisplayLanguage::Zh), "面条档口1");
        assert_eq!(table.canteen("North Canteen", DisplayLanguage::Zh), "北区食堂");
    }

    #[test]
    fn test_hot_is_scoped_per_group() {
        let table = LocalizationTable::builtin();
        assert_eq!(table.option_value("spicy_level", "hot", DisplayLanguage::Zh), "重辣");
        assert_eq!(table.option_value("temperature", "hot", DisplayLanguage::Zh), "热的");
        assert_eq!(table.option_value("temperature", "hot", DisplayLanguage::En), "Hot");
    }

    #[test]
    fn test_option_names() {
        let table = LocalizationTable::builtin();
        assert_eq!(table.option_name("sugar_level", DisplayLanguage::Zh), "糖度");
        assert_eq!(table.option_name("sugar_level", DisplayLanguage::En), "Sugar Level");
        assert_eq!(table.option_name("extra_sauce", DisplayLanguage::En), "extra_sauce");
    }

    #[test]
    fn test_ui_strings_exist_in_both_languages() {
        let table = LocalizationTable::builtin();
        for key in ["cart_empty", "total", "general_stall", "user", "no_response", "calories"] {
            let zh = table.ui(key, DisplayLanguage::Zh);
            let en = table.ui(key, DisplayLanguage::En);
            assert_ne!(zh, key, "missing zh for {key}");
            assert_ne!(en, key, "missing en for {key}");
        }
        assert_eq!(table.ui("lang_btn", DisplayLanguage::Zh), "English");
        assert_eq!(table.ui("lang_btn", DisplayLanguage::En), "中文");
    }

    #[test]
    fn test_insert_overrides_builtin() {
        let mut table = LocalizationTable::builtin();
        let before = table.len();
        table.insert(Domain::Dish, "Egg Fried Rice", Translation::new("扬州炒饭", "Egg Fried Rice"));
        assert_eq!(table.len(), before);
        assert_eq!(table.dish("Egg Fried Rice", DisplayLanguage::Zh), "扬州炒饭");
    }
}
