//! Select menus for message attachments.
//!
//! Every menu shares one rendering path; the variant only decides the
//! `data_source`, the key options are written under, and a few extra fields.

use crate::config::{FormationConfig, StaticOptionsMode};
use crate::errors::FormationError;
use crate::kinds::{ActionType, DynamicSource};
use crate::object::{JsonMap, JsonObject, non_null_keys};
use crate::option::{DropdownEntry, OptionGroup, OptionType, SelectOption};
use serde::Serialize;
use serde_json::Value;

pub const MAX_OPTIONS: usize = 100;
pub const STATIC_DATA_SOURCE: &str = "static";
pub const EXTERNAL_DATA_SOURCE: &str = "external";

const DROPDOWN_ATTRIBUTES: &[&str] = &["name", "text", "value", "type"];

/// Where a menu gets its options from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownKind {
    /// Fixed list of options.
    Options,
    /// Fixed list of option groups.
    OptionGroups,
    /// Platform-populated list; the token is validated when rendered.
    Dynamic { source: String },
    /// Options loaded from the app's options endpoint as the user types.
    External { min_query_length: Option<u32> },
}

impl DropdownKind {
    pub fn property_key(&self) -> &'static str {
        match self {
            DropdownKind::OptionGroups => "options_group",
            DropdownKind::Options | DropdownKind::Dynamic { .. } | DropdownKind::External { .. } => {
                "options"
            }
        }
    }

    pub fn data_source(&self) -> &str {
        match self {
            DropdownKind::Options | DropdownKind::OptionGroups => STATIC_DATA_SOURCE,
            DropdownKind::Dynamic { source } => source,
            DropdownKind::External { .. } => EXTERNAL_DATA_SOURCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown {
    pub name: String,
    pub text: String,
    pub value: Option<String>,
    #[serde(rename = "type")]
    action_type: ActionType,
    #[serde(skip)]
    kind: DropdownKind,
    #[serde(skip)]
    options: Vec<DropdownEntry>,
    #[serde(skip)]
    selected_option: Option<SelectOption>,
    #[serde(skip)]
    static_options: StaticOptionsMode,
}

impl Dropdown {
    fn with_kind(name: impl Into<String>, text: impl Into<String>, kind: DropdownKind) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            value: None,
            action_type: ActionType::Select,
            kind,
            options: Vec::new(),
            selected_option: None,
            static_options: StaticOptionsMode::default(),
        }
    }

    /// Menu over a fixed list of options.
    pub fn options(
        name: impl Into<String>,
        text: impl Into<String>,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> Self {
        Self::with_kind(name, text, DropdownKind::Options).with_options(options)
    }

    /// Menu over a fixed list of option groups, written under `options_group`.
    pub fn option_groups(
        name: impl Into<String>,
        text: impl Into<String>,
        groups: impl IntoIterator<Item = OptionGroup>,
    ) -> Self {
        Self::with_kind(name, text, DropdownKind::OptionGroups).with_options(groups)
    }

    /// Menu populated by the platform, e.g. `"users"` or `"channels"`.
    pub fn dynamic(
        name: impl Into<String>,
        text: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            text,
            DropdownKind::Dynamic {
                source: source.into(),
            },
        )
    }

    /// Menu backed by the app's external options endpoint.
    pub fn external(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            text,
            DropdownKind::External {
                min_query_length: None,
            },
        )
    }

    /// Replaces the option list.
    pub fn with_options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<DropdownEntry>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_selected_option(mut self, option: SelectOption) -> Self {
        self.selected_option = Some(option);
        self
    }

    /// Only meaningful for external menus; ignored by the other kinds.
    pub fn with_min_query_length(mut self, length: u32) -> Self {
        if let DropdownKind::External { min_query_length } = &mut self.kind {
            *min_query_length = Some(length);
        }
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_config(mut self, config: &FormationConfig) -> Self {
        self.static_options = config.static_options;
        self
    }

    pub fn kind(&self) -> &DropdownKind {
        &self.kind
    }

    pub fn options_list(&self) -> &[DropdownEntry] {
        &self.options
    }

    pub fn data_source(&self) -> &str {
        self.kind.data_source()
    }

    pub fn property_key(&self) -> &'static str {
        self.kind.property_key()
    }

    fn is_static(&self) -> bool {
        self.data_source() == STATIC_DATA_SOURCE
    }

    fn emits_options(&self) -> bool {
        !self.is_static() || self.static_options == StaticOptionsMode::Emit
    }

    fn render_options(&self) -> Result<Value, FormationError> {
        let count = self.options.len();
        if !(1..=MAX_OPTIONS).contains(&count) {
            tracing::debug!(
                count,
                data_source = self.data_source(),
                name = %self.name,
                "invalid number of menu options"
            );
            return Err(FormationError::InvalidOptionCount { count });
        }
        let options = self
            .options
            .iter()
            .map(|option| option.to_json(OptionType::Dialog).map(Value::Object))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::Array(options))
    }

    /// One-element list, the shape Slack expects for preselected menu entries.
    fn render_selected_option(&self) -> Result<Option<Value>, FormationError> {
        self.selected_option
            .as_ref()
            .map(|option| {
                option
                    .to_json(OptionType::InteractiveMessage)
                    .map(|json| Value::Array(vec![Value::Object(json)]))
            })
            .transpose()
    }
}

impl JsonObject for Dropdown {
    fn to_json(&self) -> Result<JsonMap, FormationError> {
        if let DropdownKind::Dynamic { source } = &self.kind {
            if !DynamicSource::contains(source) {
                tracing::debug!(source = %source, "rejecting unknown dynamic menu source");
                return Err(FormationError::invalid_source(
                    source.as_str(),
                    DynamicSource::pretty_print(),
                ));
            }
        }

        let mut json = non_null_keys(self, DROPDOWN_ATTRIBUTES)?;
        if self.emits_options() {
            json.insert(self.property_key().to_string(), self.render_options()?);
        }
        json.insert(
            "data_source".to_string(),
            Value::String(self.data_source().to_string()),
        );

        match &self.kind {
            DropdownKind::External { min_query_length } => {
                if let Some(length) = min_query_length {
                    json.insert("min_query_length".to_string(), Value::from(*length));
                }
                if let Some(selected) = self.render_selected_option()? {
                    json.insert("selected_option".to_string(), selected);
                }
            }
            DropdownKind::Options | DropdownKind::OptionGroups => {
                if self.static_options == StaticOptionsMode::Emit {
                    if let Some(selected) = self.render_selected_option()? {
                        json.insert("selected_options".to_string(), selected);
                    }
                }
            }
            DropdownKind::Dynamic { .. } => {}
        }

        tracing::trace!(data_source = self.data_source(), "rendered menu");
        Ok(json)
    }
}
