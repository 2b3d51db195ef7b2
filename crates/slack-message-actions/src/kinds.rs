use serde::{Deserialize, Serialize};

/// Display type discriminator written under `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Button,
    Select,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Button => "button",
            ActionType::Select => "select",
        }
    }
}

/// Styles Slack accepts for attachment buttons. Unset means the default look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 2] = [ButtonStyle::Primary, ButtonStyle::Danger];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "primary",
            ButtonStyle::Danger => "danger",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == value)
    }

    pub fn contains(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    /// Allowed values formatted for error messages, e.g. `"primary", "danger"`.
    pub fn pretty_print() -> String {
        pretty_print(Self::ALL.iter().map(|style| style.as_str()))
    }
}

impl From<ButtonStyle> for String {
    fn from(value: ButtonStyle) -> Self {
        value.as_str().to_string()
    }
}

/// Platform-populated option lists for dynamic menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicSource {
    Channels,
    Conversations,
    Users,
}

impl DynamicSource {
    pub const ALL: [DynamicSource; 3] = [
        DynamicSource::Channels,
        DynamicSource::Conversations,
        DynamicSource::Users,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DynamicSource::Channels => "channels",
            DynamicSource::Conversations => "conversations",
            DynamicSource::Users => "users",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.as_str() == value)
    }

    pub fn contains(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    pub fn pretty_print() -> String {
        pretty_print(Self::ALL.iter().map(|source| source.as_str()))
    }
}

impl From<DynamicSource> for String {
    fn from(value: DynamicSource) -> Self {
        value.as_str().to_string()
    }
}

fn pretty_print<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
