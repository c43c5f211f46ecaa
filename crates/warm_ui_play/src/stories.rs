//! Button stories and their argument controls.

use serde_json::{json, Value};
use warm_ui::BUTTON_COMPONENT;

/// Editor control kind for one story argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgControl {
    /// Pick one of a fixed option list; the empty string means "unset".
    Select(&'static [&'static str]),
    /// Boolean toggle.
    Boolean,
    /// Integer input.
    Number,
    /// Free text input.
    Text,
}

/// Argument name paired with its editor control.
pub type ArgType = (&'static str, ArgControl);

/// Editable button arguments, keyed the way the registry factory reads them.
pub const BUTTON_ARG_TYPES: &[ArgType] = &[
    (
        "type",
        ArgControl::Select(&["primary", "success", "warning", "danger", "info", ""]),
    ),
    ("size", ArgControl::Select(&["large", "default", "small", ""])),
    ("plain", ArgControl::Boolean),
    ("round", ArgControl::Boolean),
    ("circle", ArgControl::Boolean),
    ("disabled", ArgControl::Boolean),
    ("loading", ArgControl::Boolean),
    ("useThrottle", ArgControl::Boolean),
    ("throttleDuration", ArgControl::Number),
    ("autofocus", ArgControl::Boolean),
    ("tag", ArgControl::Select(&["button", "a", "div"])),
    (
        "nativeType",
        ArgControl::Select(&["button", "submit", "reset", ""]),
    ),
    ("icon", ArgControl::Text),
    ("loadingIcon", ArgControl::Text),
    ("content", ArgControl::Text),
];

/// One rendered example.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    /// Heading shown above the example.
    pub title: &'static str,
    /// Registry name of the rendered component.
    pub component: &'static str,
    /// Arguments handed to the component factory.
    pub args: Value,
}

fn button_story(title: &'static str, args: Value) -> Story {
    Story {
        title,
        component: BUTTON_COMPONENT,
        args,
    }
}

/// Button stories in display order.
pub fn button_stories() -> Vec<Story> {
    vec![
        button_story("Default", json!({ "type": "primary", "content": "Button" })),
        button_story(
            "Large round",
            json!({ "type": "success", "size": "large", "round": true, "content": "Confirm" }),
        ),
        button_story(
            "Plain small",
            json!({ "type": "warning", "size": "small", "plain": true, "content": "Review" }),
        ),
        button_story(
            "Circle icon",
            json!({ "type": "info", "circle": true, "icon": "magnifying-glass" }),
        ),
        button_story(
            "Disabled",
            json!({ "type": "danger", "disabled": true, "content": "Delete" }),
        ),
        button_story(
            "Loading",
            json!({ "type": "primary", "loading": true, "content": "Saving" }),
        ),
        button_story(
            "Throttled 1s",
            json!({ "throttleDuration": 1000, "content": "Click fast" }),
        ),
        button_story(
            "Unthrottled",
            json!({ "useThrottle": false, "content": "Every click" }),
        ),
        button_story("Submit", json!({ "nativeType": "submit", "content": "Send" })),
        button_story("As link", json!({ "tag": "a", "content": "Open" })),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use warm_ui_core::{resolve_classes, ButtonArgs, ElementKind};

    use super::*;

    #[test]
    fn every_story_validates_at_the_config_boundary() {
        for story in button_stories() {
            let args = ButtonArgs::from_value(story.args.clone()).expect(story.title);
            assert!(args.to_config().is_ok(), "{} config", story.title);
        }
    }

    #[test]
    fn story_titles_are_unique() {
        let stories = button_stories();
        let titles: BTreeSet<_> = stories.iter().map(|story| story.title).collect();
        assert_eq!(titles.len(), stories.len());
    }

    #[test]
    fn every_select_option_is_accepted() {
        for (name, control) in BUTTON_ARG_TYPES {
            let ArgControl::Select(options) = control else {
                continue;
            };
            for option in *options {
                let mut payload = serde_json::Map::new();
                payload.insert(name.to_string(), Value::from(*option));
                let config = ButtonArgs::from_value(Value::Object(payload))
                    .and_then(|args| args.to_config())
                    .unwrap_or_else(|err| panic!("{name}={option}: {err}"));
                assert!(resolve_classes(&config).contains("warm-button"));
            }
        }
    }

    #[test]
    fn link_story_renders_as_anchor() {
        let story = button_stories()
            .into_iter()
            .find(|story| story.title == "As link")
            .expect("link story");
        let config = ButtonArgs::from_value(story.args)
            .and_then(|args| args.to_config())
            .expect("config");
        assert_eq!(config.tag, ElementKind::Link);
    }
}
