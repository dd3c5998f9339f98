//! Alfred script filter output
//!
//! See <https://www.alfredapp.com/help/workflows/inputs/script-filter/json/>.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub type Variables = Map<String, Value>;

/// Alternative action shown while a modifier key is held
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mod {
    pub valid: bool,
    pub arg: String,
    pub subtitle: String,
}

impl Mod {
    pub fn new(arg: impl Into<String>, subtitle: impl Into<String>, valid: bool) -> Self {
        Self {
            valid,
            arg: arg.into(),
            subtitle: subtitle.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub autocomplete: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mods: BTreeMap<String, Mod>,
}

impl Item {
    /// A file item whose autocomplete selects it for management (`|subtitle|`)
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        arg: impl Into<String>,
    ) -> Self {
        let subtitle = subtitle.into();
        Self {
            title: title.into(),
            autocomplete: format!("|{}|", subtitle),
            subtitle,
            arg: arg.into(),
            item_type: "file".to_string(),
            valid: true,
            variables: None,
            mods: BTreeMap::new(),
        }
    }

    pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = autocomplete.into();
        self
    }

    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    pub fn variable(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.variables
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn add_mod(&mut self, key_combination: &str, action: Mod) {
        self.mods.insert(key_combination.to_string(), action);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
    pub items: Vec<Item>,
}

impl Output {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            variables: None,
            items,
        }
    }

    pub fn with_variable(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.variables
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_with_mods() {
        let item1 = Item::new("Item 1", "item 1 subtitle", "item 1 arg");
        let mut item2 = Item::new("Item 2", "item 2 subtitle", "item 2 arg");
        item2.add_mod("cmd+alt", Mod::new("mod arg", "mod subtitle", false));

        let value: Value = serde_json::from_str(&Output::new(vec![item1, item2]).to_json().unwrap())
            .unwrap();

        assert_eq!(
            value,
            json!({"items": [
                {"title": "Item 1",
                 "subtitle": "item 1 subtitle",
                 "arg": "item 1 arg",
                 "type": "file",
                 "autocomplete": "|item 1 subtitle|",
                 "valid": true},
                {"title": "Item 2",
                 "subtitle": "item 2 subtitle",
                 "arg": "item 2 arg",
                 "type": "file",
                 "autocomplete": "|item 2 subtitle|",
                 "valid": true,
                 "mods": {"cmd+alt": {"valid": false,
                                      "arg": "mod arg",
                                      "subtitle": "mod subtitle"}}},
            ]})
        );
    }

    #[test]
    fn test_field_order() {
        let json = Output::new(vec![Item::new("t", "s", "a")])
            .with_variable("app_keyword", "goland")
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            r#"{"variables":{"app_keyword":"goland"},"items":[{"title":"t","subtitle":"s","arg":"a","type":"file","autocomplete":"|s|","valid":true}]}"#
        );
    }

    #[test]
    fn test_item_variables_and_builders() {
        let item = Item::new("Remove", "keeps files", "/p")
            .variable("remove_from_list", true)
            .autocomplete("")
            .valid(false);
        assert_eq!(item.autocomplete, "");
        assert!(!item.valid);
        assert_eq!(
            item.variables.unwrap().get("remove_from_list"),
            Some(&Value::Bool(true))
        );
    }
}
