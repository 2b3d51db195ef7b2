//! Attachment buttons and the confirmation dialog they can carry.

use crate::errors::FormationError;
use crate::kinds::{ActionType, ButtonStyle};
use crate::object::{JsonMap, JsonObject, non_null_keys};
use serde::Serialize;
use serde_json::Value;

const ACTION_ATTRIBUTES: &[&str] = &["name", "text", "type", "url"];
const BUTTON_ATTRIBUTES: &[&str] = &["value", "style"];
const CONFIRMATION_ATTRIBUTES: &[&str] = &["title", "text", "ok_text", "dismiss_text"];

pub const DEFAULT_OK_TEXT: &str = "Okay";
pub const DEFAULT_DISMISS_TEXT: &str = "Cancel";

/// Base interactive element shared by buttons.
///
/// Either `name` or `url` has to be present by the time the action is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub name: Option<String>,
    pub text: String,
    #[serde(rename = "type")]
    action_type: ActionType,
    pub url: Option<String>,
}

impl Action {
    pub fn new(action_type: ActionType, text: impl Into<String>) -> Self {
        Self {
            name: None,
            text: text.into(),
            action_type,
            url: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn action_type(&self) -> ActionType {
        self.action_type
    }
}

impl JsonObject for Action {
    fn to_json(&self) -> Result<JsonMap, FormationError> {
        if self.name.is_none() && self.url.is_none() {
            tracing::debug!(text = %self.text, "action has neither name nor url");
            return Err(FormationError::MissingName);
        }
        non_null_keys(self, ACTION_ATTRIBUTES)
    }
}

/// Asks the user to confirm a button click before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionConfirmation {
    pub title: Option<String>,
    pub text: String,
    pub ok_text: String,
    pub dismiss_text: String,
}

impl ActionConfirmation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
            ok_text: DEFAULT_OK_TEXT.to_string(),
            dismiss_text: DEFAULT_DISMISS_TEXT.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_ok_text(mut self, ok_text: impl Into<String>) -> Self {
        self.ok_text = ok_text.into();
        self
    }

    pub fn with_dismiss_text(mut self, dismiss_text: impl Into<String>) -> Self {
        self.dismiss_text = dismiss_text.into();
        self
    }
}

impl JsonObject for ActionConfirmation {
    fn to_json(&self) -> Result<JsonMap, FormationError> {
        non_null_keys(self, CONFIRMATION_ATTRIBUTES)
    }
}

/// Button that posts `value` back to the app when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    #[serde(flatten)]
    pub action: Action,
    pub value: String,
    pub confirm: Option<ActionConfirmation>,
    /// Kept as given; checked against [`ButtonStyle`] when rendered.
    pub style: Option<String>,
}

impl Button {
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            action: Action::new(ActionType::Button, text).with_name(name),
            value: value.into(),
            confirm: None,
            style: None,
        }
    }

    pub fn with_confirm(mut self, confirm: ActionConfirmation) -> Self {
        self.confirm = Some(confirm);
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

impl JsonObject for Button {
    fn to_json(&self) -> Result<JsonMap, FormationError> {
        if let Some(style) = self.style.as_deref() {
            if !ButtonStyle::contains(style) {
                tracing::debug!(style, "rejecting unknown button style");
                return Err(FormationError::invalid_style(
                    style,
                    ButtonStyle::pretty_print(),
                ));
            }
        }

        let mut json = self.action.to_json()?;
        json.extend(non_null_keys(self, BUTTON_ATTRIBUTES)?);
        if let Some(confirm) = &self.confirm {
            json.insert("confirm".to_string(), Value::Object(confirm.to_json()?));
        }
        tracing::trace!(keys = json.len(), "rendered button");
        Ok(json)
    }
}

/// Button whose only behavior is opening `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkButton(Action);

impl LinkButton {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self(Action::new(ActionType::Button, text).with_url(url))
    }

    pub fn action(&self) -> &Action {
        &self.0
    }
}

impl JsonObject for LinkButton {
    fn to_json(&self) -> Result<JsonMap, FormationError> {
        self.0.to_json()
    }
}
