//! Story registry for the button.

use serde::{Deserialize, Serialize};
use ui::DEFAULT_LOADING_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Editor rendered for an argument in the controls panel.
pub enum Control {
    /// Checkbox.
    Boolean,
    /// Single-line text input.
    Text,
    /// Not editable from the workbench.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Control declaration for one story argument.
pub struct ArgType {
    /// Argument name as used in URLs and JSON payloads.
    pub name: &'static str,
    /// Editor for the argument.
    pub control: Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Component-level story metadata.
pub struct StoryMeta {
    /// Sidebar title; also the prefix of every story id.
    pub title: &'static str,
    /// Arguments the controls panel knows about.
    pub arg_types: &'static [ArgType],
}

impl StoryMeta {
    /// Control declared for `name`.
    pub fn control(&self, name: &str) -> Option<Control> {
        self.arg_types
            .iter()
            .find(|arg_type| arg_type.name == name)
            .map(|arg_type| arg_type.control)
    }
}

/// Metadata of the button stories.
pub const BUTTON_META: StoryMeta = StoryMeta {
    title: "Button",
    arg_types: &[
        ArgType {
            name: "children",
            control: Control::Text,
        },
        ArgType {
            name: "isDisabled",
            control: Control::Boolean,
        },
        ArgType {
            name: "isLoading",
            control: Control::Boolean,
        },
        ArgType {
            name: "isPressed",
            control: Control::Boolean,
        },
        ArgType {
            name: "loadingLabel",
            control: Control::Text,
        },
        ArgType {
            name: "iconStart",
            control: Control::Disabled,
        },
        ArgType {
            name: "iconEnd",
            control: Control::Disabled,
        },
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Arguments rendered into a button by a story.
pub struct ButtonArgs {
    /// Button label.
    pub children: String,
    /// Announce as disabled to assistive technology.
    pub is_disabled: bool,
    /// Show the busy overlay.
    pub is_loading: bool,
    /// Render as pressed.
    pub is_pressed: bool,
    /// Busy announcement.
    pub loading_label: String,
    /// Glyph rendered before the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_start: Option<String>,
    /// Glyph rendered after the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_end: Option<String>,
}

impl Default for ButtonArgs {
    fn default() -> Self {
        Self {
            children: "Click me!".to_string(),
            is_disabled: false,
            is_loading: false,
            is_pressed: false,
            loading_label: DEFAULT_LOADING_LABEL.to_string(),
            icon_start: None,
            icon_end: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One registered sample configuration.
pub struct Story {
    /// Stable id, `<title>--<name>` in kebab case.
    pub id: String,
    /// Display name.
    pub name: &'static str,
    /// Default arguments.
    pub args: ButtonArgs,
}

impl Story {
    fn new(name: &'static str, args: ButtonArgs) -> Self {
        Self {
            id: story_id(BUTTON_META.title, name),
            name,
            args,
        }
    }
}

fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Story id for a title and story name, e.g. `button--custom-busy-label`.
pub fn story_id(title: &str, name: &str) -> String {
    format!("{}--{}", sanitize(title), sanitize(name))
}

/// All button stories in sidebar order.
pub fn button_stories() -> Vec<Story> {
    let base = ButtonArgs::default();
    vec![
        Story::new("Button", base.clone()),
        Story::new(
            "Disabled",
            ButtonArgs {
                is_disabled: true,
                ..base.clone()
            },
        ),
        Story::new(
            "Loading",
            ButtonArgs {
                is_loading: true,
                ..base.clone()
            },
        ),
        Story::new(
            "Pressed",
            ButtonArgs {
                is_pressed: true,
                ..base.clone()
            },
        ),
        Story::new(
            "Custom Busy Label",
            ButtonArgs {
                is_loading: true,
                loading_label: "Saving changes".to_string(),
                ..base.clone()
            },
        ),
        Story::new(
            "With Icons",
            ButtonArgs {
                children: "Download".to_string(),
                icon_start: Some("\u{2193}".to_string()),
                icon_end: Some("\u{2192}".to_string()),
                ..base
            },
        ),
    ]
}

/// Looks a story up by id.
pub fn find_story(id: &str) -> Option<Story> {
    button_stories().into_iter().find(|story| story.id == id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_story_matches_reference_configuration() {
        let story = find_story("button--button").expect("default story");
        assert_eq!(story.args.children, "Click me!");
        assert!(!story.args.is_disabled);
        assert!(!story.args.is_loading);
        assert!(!story.args.is_pressed);
        assert_eq!(story.args.loading_label, "Busy");
    }

    #[test]
    fn story_ids_are_kebab_case_and_unique() {
        let ids: Vec<String> = button_stories().into_iter().map(|story| story.id).collect();
        assert_eq!(
            ids,
            vec![
                "button--button",
                "button--disabled",
                "button--loading",
                "button--pressed",
                "button--custom-busy-label",
                "button--with-icons",
            ]
        );
        assert_eq!(story_id(" My Widget ", "A  / B"), "my-widget--a-b");
    }

    #[test]
    fn icons_have_no_control() {
        assert_eq!(BUTTON_META.control("iconStart"), Some(Control::Disabled));
        assert_eq!(BUTTON_META.control("isLoading"), Some(Control::Boolean));
        assert_eq!(BUTTON_META.control("onClick"), None);
    }

    #[test]
    fn args_use_camel_case_names_on_the_wire() {
        let json = serde_json::to_value(ButtonArgs::default()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "children": "Click me!",
                "isDisabled": false,
                "isLoading": false,
                "isPressed": false,
                "loadingLabel": "Busy",
            })
        );
    }
}
