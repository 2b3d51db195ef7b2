//! Menu options and option groups.
//!
//! The same option renders differently depending on where it ends up: dialog menus
//! use `label`, interactive message menus use `text`, Block Kit wraps the label in a
//! plain-text object.

use crate::errors::FormationError;
use crate::object::{JsonMap, non_null_keys};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const LABEL_MAX_LENGTH: usize = 75;
pub const VALUE_MAX_LENGTH: usize = 75;
pub const GROUP_OPTIONS_MAX_LENGTH: usize = 100;

/// Surface an option is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    Dialog,
    InteractiveMessage,
    BlockKit,
}

/// A single selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn to_json(&self, option_type: OptionType) -> Result<JsonMap, FormationError> {
        check_label(&self.label)?;
        if self.value.chars().count() > VALUE_MAX_LENGTH {
            tracing::debug!(value = %self.value, "option value too long");
            return Err(FormationError::ValueTooLong {
                max: VALUE_MAX_LENGTH,
            });
        }

        match option_type {
            OptionType::Dialog => non_null_keys(self, &["label", "value"]),
            OptionType::InteractiveMessage => {
                let mut json = JsonMap::new();
                json.insert("text".to_string(), Value::String(self.label.clone()));
                json.extend(non_null_keys(self, &["value", "description"])?);
                Ok(json)
            }
            OptionType::BlockKit => {
                let mut json = JsonMap::new();
                json.insert("text".to_string(), plain_text(&self.label));
                json.insert("value".to_string(), Value::String(self.value.clone()));
                Ok(json)
            }
        }
    }
}

/// Labelled group of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
}

impl OptionGroup {
    pub fn new(label: impl Into<String>, options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            label: label.into(),
            options: options.into_iter().collect(),
        }
    }

    pub fn to_json(&self, option_type: OptionType) -> Result<JsonMap, FormationError> {
        check_label(&self.label)?;
        if self.options.len() > GROUP_OPTIONS_MAX_LENGTH {
            tracing::debug!(count = self.options.len(), label = %self.label, "option group too large");
            return Err(FormationError::TooManyGroupOptions {
                max: GROUP_OPTIONS_MAX_LENGTH,
            });
        }

        let options = self
            .options
            .iter()
            .map(|option| option.to_json(option_type).map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;

        let (label_key, label) = match option_type {
            OptionType::Dialog => ("label", Value::String(self.label.clone())),
            OptionType::InteractiveMessage => ("text", Value::String(self.label.clone())),
            OptionType::BlockKit => ("label", plain_text(&self.label)),
        };

        let mut json = JsonMap::new();
        json.insert(label_key.to_string(), label);
        json.insert("options".to_string(), Value::Array(options));
        Ok(json)
    }
}

/// Anything a menu can list: a plain option or a group of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEntry {
    Option(SelectOption),
    Group(OptionGroup),
}

impl DropdownEntry {
    pub fn to_json(&self, option_type: OptionType) -> Result<JsonMap, FormationError> {
        match self {
            DropdownEntry::Option(option) => option.to_json(option_type),
            DropdownEntry::Group(group) => group.to_json(option_type),
        }
    }
}

impl From<SelectOption> for DropdownEntry {
    fn from(value: SelectOption) -> Self {
        DropdownEntry::Option(value)
    }
}

impl From<OptionGroup> for DropdownEntry {
    fn from(value: OptionGroup) -> Self {
        DropdownEntry::Group(value)
    }
}

fn check_label(label: &str) -> Result<(), FormationError> {
    if label.chars().count() > LABEL_MAX_LENGTH {
        tracing::debug!(label, "option label too long");
        return Err(FormationError::LabelTooLong {
            max: LABEL_MAX_LENGTH,
        });
    }
    Ok(())
}

fn plain_text(text: &str) -> Value {
    json!({ "type": "plain_text", "text": text, "emoji": true })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> SelectOption {
        SelectOption::new("Red", "red").with_description("warm")
    }

    #[test]
    fn option_shape_depends_on_context() {
        assert_eq!(
            Value::Object(red().to_json(OptionType::Dialog).expect("dialog")),
            json!({ "label": "Red", "value": "red" })
        );
        assert_eq!(
            Value::Object(red().to_json(OptionType::InteractiveMessage).expect("message")),
            json!({ "text": "Red", "value": "red", "description": "warm" })
        );
        assert_eq!(
            Value::Object(red().to_json(OptionType::BlockKit).expect("block kit")),
            json!({
                "text": { "type": "plain_text", "text": "Red", "emoji": true },
                "value": "red"
            })
        );
    }

    #[test]
    fn interactive_message_omits_missing_description() {
        let json = SelectOption::new("Blue", "blue")
            .to_json(OptionType::InteractiveMessage)
            .expect("json");
        assert!(!json.contains_key("description"));
    }

    #[test]
    fn long_label_and_value_are_rejected() {
        let long = "x".repeat(LABEL_MAX_LENGTH + 1);
        assert_eq!(
            SelectOption::new(long.clone(), "v").to_json(OptionType::Dialog),
            Err(FormationError::LabelTooLong { max: 75 })
        );
        assert_eq!(
            SelectOption::new("l", long).to_json(OptionType::Dialog),
            Err(FormationError::ValueTooLong { max: 75 })
        );
        let exact = "y".repeat(LABEL_MAX_LENGTH);
        assert!(SelectOption::new(exact.clone(), exact).to_json(OptionType::Dialog).is_ok());
    }

    #[test]
    fn group_renders_nested_options_in_same_context() {
        let group = OptionGroup::new("Colors", [red()]);
        assert_eq!(
            Value::Object(group.to_json(OptionType::Dialog).expect("dialog")),
            json!({ "label": "Colors", "options": [{ "label": "Red", "value": "red" }] })
        );
        assert_eq!(
            Value::Object(group.to_json(OptionType::InteractiveMessage).expect("message")),
            json!({
                "text": "Colors",
                "options": [{ "text": "Red", "value": "red", "description": "warm" }]
            })
        );
        let block_kit = group.to_json(OptionType::BlockKit).expect("block kit");
        assert_eq!(
            block_kit.get("label"),
            Some(&json!({ "type": "plain_text", "text": "Colors", "emoji": true }))
        );
    }

    #[test]
    fn oversized_group_is_rejected() {
        let options = (0..=GROUP_OPTIONS_MAX_LENGTH).map(|i| SelectOption::new(format!("o{i}"), format!("{i}")));
        let group = OptionGroup::new("Too many", options);
        assert_eq!(
            group.to_json(OptionType::Dialog),
            Err(FormationError::TooManyGroupOptions { max: 100 })
        );
    }
}
