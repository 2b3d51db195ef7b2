use insta::assert_json_snapshot;
use slack_message_actions::{
    ActionConfirmation, Button, ButtonStyle, FormationError, JsonObject, LinkButton,
};
use serde_json::{Value, json};

#[test]
fn minimal_button_has_exact_shape() {
    let json = Button::new("a", "b", "c").to_json().expect("button json");
    assert_eq!(
        Value::Object(json.clone()),
        json!({ "name": "a", "text": "b", "type": "button", "value": "c" })
    );
    assert_json_snapshot!(json, @r###"
    {
      "name": "a",
      "text": "b",
      "type": "button",
      "value": "c"
    }
    "###);
}

#[test]
fn button_never_emits_null_keys() {
    let buttons = [
        Button::new("approve", "Approve", "yes"),
        Button::new("approve", "Approve", "yes").with_style(ButtonStyle::Primary),
        Button::new("approve", "Approve", "yes").with_confirm(ActionConfirmation::new("Sure?")),
    ];
    for button in buttons {
        let json = button.to_json().expect("button json");
        assert!(json.values().all(|value| !value.is_null()), "{json:?}");
        assert!(!json.contains_key("url"));
    }
}

#[test]
fn button_with_invalid_style_lists_valid_styles() {
    let err = Button::new("a", "b", "c")
        .with_style("invalid")
        .to_json()
        .unwrap_err();
    assert_eq!(
        err,
        FormationError::InvalidStyle {
            value: "invalid".into(),
            allowed: r#""primary", "danger""#.into(),
        }
    );
    assert_eq!(
        err.to_string(),
        r#"style attribute must be one of the following values: "primary", "danger""#
    );
}

#[test]
fn button_style_is_checked_before_name() {
    let mut button = Button::new("a", "b", "c").with_style("neon");
    button.action.name = None;
    assert!(matches!(
        button.to_json(),
        Err(FormationError::InvalidStyle { .. })
    ));
}

#[test]
fn button_without_name_or_url_fails() {
    let mut button = Button::new("a", "b", "c");
    button.action.name = None;
    assert_eq!(button.to_json(), Err(FormationError::MissingName));

    button.action.url = Some("https://example.com/deploy".into());
    assert!(button.to_json().is_ok());
}

#[test]
fn confirmed_danger_button() {
    let json = Button::new("delete", "Delete", "repo-42")
        .with_style("danger")
        .with_confirm(ActionConfirmation::new("This cannot be undone").with_title("Delete repo?"))
        .to_json()
        .expect("button json");
    assert_eq!(
        Value::Object(json),
        json!({
            "name": "delete",
            "text": "Delete",
            "type": "button",
            "value": "repo-42",
            "style": "danger",
            "confirm": {
                "title": "Delete repo?",
                "text": "This cannot be undone",
                "ok_text": "Okay",
                "dismiss_text": "Cancel"
            }
        })
    );
}

#[test]
fn confirmation_with_only_text_uses_defaults() {
    let json = ActionConfirmation::new("x").to_json().expect("confirm json");
    assert_eq!(json.get("ok_text"), Some(&json!("Okay")));
    assert_eq!(json.get("dismiss_text"), Some(&json!("Cancel")));
    assert!(!json.contains_key("title"));
}

#[test]
fn link_button_renders_url() {
    let json = LinkButton::new("Open docs", "https://api.slack.com")
        .to_json()
        .expect("link json");
    assert_eq!(
        Value::Object(json),
        json!({ "text": "Open docs", "type": "button", "url": "https://api.slack.com" })
    );
}

#[test]
fn rendering_is_repeatable() {
    let button = Button::new("a", "b", "c").with_style("primary");
    assert_eq!(button.to_json(), button.to_json());
}
