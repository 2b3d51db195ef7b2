//! Interactive elements for Slack message attachments.
//! Buttons, confirmation dialogs and select menus are built from typed arguments and
//! checked when rendered, producing JSON objects ready to embed in an attachment.

pub mod action;
pub mod config;
pub mod dropdown;
pub mod errors;
pub mod kinds;
pub mod object;
pub mod option;

pub use action::{Action, ActionConfirmation, Button, LinkButton};
pub use config::{FormationConfig, StaticOptionsMode};
pub use dropdown::{Dropdown, DropdownKind, MAX_OPTIONS};
pub use errors::FormationError;
pub use kinds::{ActionType, ButtonStyle, DynamicSource};
pub use object::{JsonMap, JsonObject, non_null_keys};
pub use option::{DropdownEntry, OptionGroup, OptionType, SelectOption};
