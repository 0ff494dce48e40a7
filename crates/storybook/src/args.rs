//! Argument overrides from the `args` URL query and JSON payloads.
//!
//! The URL form is a `;`-separated list of `name:value` pairs, for example
//! `isLoading:true;loadingLabel:Saving+now`. Booleans may be written as
//! `!true` / `!false`. Text values are URL-decoded, with `+` read as a space.

use thiserror::Error;

use crate::stories::{ButtonArgs, Control, BUTTON_META};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an argument override is rejected.
pub enum ArgsError {
    /// The name is not declared in the story metadata.
    #[error("unknown arg `{0}`")]
    UnknownArg(String),
    /// The argument has no control and cannot be overridden.
    #[error("arg `{0}` is not controllable")]
    NotControllable(String),
    /// A boolean argument got something other than `true`/`false`.
    #[error("arg `{name}` expects a boolean, got `{value}`")]
    InvalidBoolean {
        /// Argument name.
        name: String,
        /// Raw value.
        value: String,
    },
    /// The value does not match the argument's control.
    #[error("arg `{0}` got a value of the wrong kind")]
    WrongKind(String),
    /// A pair is missing its `:` separator.
    #[error("arg pair `{0}` is missing a `:` separator")]
    MissingSeparator(String),
    /// A text value is not valid percent-encoded UTF-8.
    #[error("arg `{name}` is not valid URL encoding: {reason}")]
    InvalidEncoding {
        /// Argument name.
        name: String,
        /// Decoder message.
        reason: String,
    },
    /// A JSON payload could not be decoded.
    #[error("invalid args payload: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed value for a single argument.
pub enum ArgValue {
    /// Value of a boolean control.
    Bool(bool),
    /// Value of a text control.
    Text(String),
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ArgsError> {
    match raw.strip_prefix('!').unwrap_or(raw) {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ArgsError::InvalidBoolean {
            name: name.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn decode_text(name: &str, raw: &str) -> Result<String, ArgsError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|err| ArgsError::InvalidEncoding {
            name: name.to_string(),
            reason: err.to_string(),
        })
}

fn encode_text(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

impl ButtonArgs {
    /// Restores arguments from a JSON payload. Missing fields keep defaults.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ArgsError> {
        serde_json::from_value(value).map_err(|err| ArgsError::Json(err.to_string()))
    }

    /// Current value of a controllable argument.
    pub fn arg(&self, name: &str) -> Option<ArgValue> {
        let value = match name {
            "children" => ArgValue::Text(self.children.clone()),
            "isDisabled" => ArgValue::Bool(self.is_disabled),
            "isLoading" => ArgValue::Bool(self.is_loading),
            "isPressed" => ArgValue::Bool(self.is_pressed),
            "loadingLabel" => ArgValue::Text(self.loading_label.clone()),
            _ => return None,
        };
        Some(value)
    }

    /// Sets one argument through its declared control.
    ///
    /// # Errors
    ///
    /// Fails when `name` is unknown, has no control, or `value` does not
    /// match the control.
    pub fn set_arg(&mut self, name: &str, value: ArgValue) -> Result<(), ArgsError> {
        match BUTTON_META.control(name) {
            None => return Err(ArgsError::UnknownArg(name.to_string())),
            Some(Control::Disabled) => return Err(ArgsError::NotControllable(name.to_string())),
            Some(_) => {}
        }
        match (name, value) {
            ("children", ArgValue::Text(text)) => self.children = text,
            ("loadingLabel", ArgValue::Text(text)) => self.loading_label = text,
            ("isDisabled", ArgValue::Bool(flag)) => self.is_disabled = flag,
            ("isLoading", ArgValue::Bool(flag)) => self.is_loading = flag,
            ("isPressed", ArgValue::Bool(flag)) => self.is_pressed = flag,
            _ => return Err(ArgsError::WrongKind(name.to_string())),
        }
        Ok(())
    }

    /// Applies a URL `args` string. Nothing is changed when any pair fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArgsError`] encountered.
    pub fn apply_url_args(&mut self, query: &str) -> Result<(), ArgsError> {
        let mut next = self.clone();
        for pair in query.split(';').filter(|pair| !pair.is_empty()) {
            let (name, raw) = pair
                .split_once(':')
                .ok_or_else(|| ArgsError::MissingSeparator(pair.to_string()))?;
            let value = match BUTTON_META.control(name) {
                Some(Control::Boolean) => ArgValue::Bool(parse_bool(name, raw)?),
                Some(Control::Text) => ArgValue::Text(decode_text(name, raw)?),
                Some(Control::Disabled) => {
                    return Err(ArgsError::NotControllable(name.to_string()))
                }
                None => return Err(ArgsError::UnknownArg(name.to_string())),
            };
            next.set_arg(name, value)?;
        }
        *self = next;
        Ok(())
    }

    /// URL `args` string for every controllable argument that differs from `defaults`.
    pub fn url_args(&self, defaults: &ButtonArgs) -> String {
        BUTTON_META
            .arg_types
            .iter()
            .filter_map(|arg_type| {
                let current = self.arg(arg_type.name)?;
                if defaults.arg(arg_type.name).as_ref() == Some(&current) {
                    return None;
                }
                let raw = match current {
                    ArgValue::Bool(flag) => format!("!{flag}"),
                    ArgValue::Text(text) => encode_text(&text),
                };
                Some(format!("{}:{raw}", arg_type.name))
            })
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn url_args_override_story_defaults() {
        let mut args = ButtonArgs::default();
        args.apply_url_args("isLoading:!true;loadingLabel:Saving+now%21")
            .expect("apply args");

        assert!(args.is_loading);
        assert_eq!(args.loading_label, "Saving now!");
        assert_eq!(args.children, "Click me!");
    }

    #[test]
    fn failing_pair_leaves_args_untouched() {
        let mut args = ButtonArgs::default();
        let err = args
            .apply_url_args("isPressed:true;isLoading:maybe")
            .expect_err("invalid boolean");

        assert_eq!(
            err,
            ArgsError::InvalidBoolean {
                name: "isLoading".to_string(),
                value: "maybe".to_string(),
            }
        );
        assert_eq!(args, ButtonArgs::default());
    }

    #[test]
    fn rejects_unknown_uncontrolled_and_malformed_pairs() {
        let mut args = ButtonArgs::default();
        assert_eq!(
            args.apply_url_args("onClick:x"),
            Err(ArgsError::UnknownArg("onClick".to_string()))
        );
        assert_eq!(
            args.apply_url_args("iconStart:*"),
            Err(ArgsError::NotControllable("iconStart".to_string()))
        );
        assert_eq!(
            args.apply_url_args("isLoading"),
            Err(ArgsError::MissingSeparator("isLoading".to_string()))
        );
        assert!(matches!(
            args.apply_url_args("children:%FF"),
            Err(ArgsError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn set_arg_checks_value_kind() {
        let mut args = ButtonArgs::default();
        assert_eq!(
            args.set_arg("isPressed", ArgValue::Text("yes".to_string())),
            Err(ArgsError::WrongKind("isPressed".to_string()))
        );
        args.set_arg("isPressed", ArgValue::Bool(true))
            .expect("set pressed");
        assert_eq!(args.arg("isPressed"), Some(ArgValue::Bool(true)));
    }

    #[test]
    fn url_args_only_lists_changed_values() {
        let defaults = ButtonArgs::default();
        let mut args = defaults.clone();
        assert_eq!(args.url_args(&defaults), "");

        args.is_disabled = true;
        args.loading_label = "Hold on".to_string();
        let query = args.url_args(&defaults);
        assert_eq!(query, "isDisabled:!true;loadingLabel:Hold+on");

        let mut restored = defaults.clone();
        restored.apply_url_args(&query).expect("apply generated args");
        assert_eq!(restored, args);
    }

    #[test]
    fn json_payload_fills_missing_fields_with_defaults() {
        let args = ButtonArgs::from_json(serde_json::json!({ "isPressed": true }))
            .expect("decode args");
        assert!(args.is_pressed);
        assert_eq!(args.loading_label, "Busy");

        assert!(matches!(
            ButtonArgs::from_json(serde_json::json!({ "isPressed": "yes" })),
            Err(ArgsError::Json(_))
        ));
    }
}
