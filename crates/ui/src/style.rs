//! Inline style layers for the button and an explicit ordered merge.

use crate::model::{ContentEmphasis, DecorationInsets};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered list of CSS declarations.
///
/// Setting a property that already exists replaces its value in place, so the
/// first declaration keeps its position and the last value wins.
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    /// Empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing any earlier value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let property = property.into();
        let value = value.into();
        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| *existing == property)
        {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Value currently set for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(existing, _)| existing == property)
            .map(|(_, value)| value.as_str())
    }

    /// Declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// True when no declaration is set.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Applies every declaration of `layer` on top of `self`.
    pub fn extend(&mut self, layer: &Style) -> &mut Self {
        for (property, value) in layer.iter() {
            self.set(property, value);
        }
        self
    }

    /// Merges layers left to right; later layers win.
    pub fn merge<'a>(layers: impl IntoIterator<Item = &'a Style>) -> Style {
        let mut merged = Style::new();
        for layer in layers {
            merged.extend(layer);
        }
        merged
    }

    /// Parses an inline `style` attribute. Fragments without a colon are skipped.
    pub fn from_css(css: &str) -> Style {
        let mut style = Style::new();
        for fragment in css.split(';') {
            let Some((property, value)) = fragment.split_once(':') else {
                continue;
            };
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                continue;
            }
            style.set(property, value);
        }
        style
    }

    /// Renders the declarations as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&str> for Style {
    fn from(css: &str) -> Self {
        Style::from_css(css)
    }
}

impl From<String> for Style {
    fn from(css: String) -> Self {
        Style::from_css(&css)
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

/// Base layer of the `<button>` element.
pub fn button_base() -> Style {
    Style::from_iter([
        ("align-items", "center"),
        ("display", "inline-flex"),
        ("justify-content", "center"),
        ("padding-block", "0.5rem"),
        ("padding-inline", "1rem"),
        ("position", "relative"),
    ])
}

/// Base layer of the content region.
pub fn content_base() -> Style {
    Style::from_iter([
        ("display", "inline-flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("gap", "0.5rem"),
        ("white-space", "nowrap"),
    ])
}

/// Overlay layer, stretched over the button bounds.
pub fn overlay_base() -> Style {
    Style::from_iter([
        ("align-items", "center"),
        ("display", "inline-flex"),
        ("inset", "0"),
        ("justify-content", "center"),
        ("pointer-events", "none"),
        ("position", "absolute"),
    ])
}

/// `<button>` style with caller overrides applied last.
pub fn button_style(overrides: &Style) -> Style {
    Style::merge([&button_base(), overrides])
}

/// Content region style for the given decorations and emphasis.
pub fn content_style(insets: DecorationInsets, emphasis: ContentEmphasis) -> Style {
    let insets = Style::from_iter(insets.declarations());
    let emphasis = emphasis
        .opacity()
        .map(|opacity| Style::new().with("opacity", opacity))
        .unwrap_or_default();
    Style::merge([&content_base(), &insets, &emphasis])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn later_layers_override_in_place() {
        let base = Style::new().with("display", "flex").with("color", "red");
        let overrides = Style::new().with("color", "blue").with("margin", "0");

        let merged = Style::merge([&base, &overrides]);

        assert_eq!(merged.to_css(), "display: flex; color: blue; margin: 0;");
    }

    #[test]
    fn caller_style_wins_over_button_base() {
        let merged = button_style(&Style::from_css("padding-inline: 2rem; color: teal"));

        assert_eq!(merged.get("padding-inline"), Some("2rem"));
        assert_eq!(merged.get("position"), Some("relative"));
        assert_eq!(merged.iter().last(), Some(("color", "teal")));
    }

    #[test]
    fn from_css_skips_malformed_fragments() {
        let style = Style::from_css(" color : red ;; bogus; :x; width:");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("color"), Some("red"));
    }

    #[test]
    fn empty_style_renders_nothing() {
        assert_eq!(Style::new().to_css(), "");
        assert!(button_style(&Style::new()) == button_base());
    }

    #[test]
    fn content_style_without_decorations_has_no_inset() {
        let style = content_style(DecorationInsets::default(), ContentEmphasis::Visible);
        assert_eq!(style, content_base());
    }

    #[test]
    fn content_style_applies_leading_inset_only() {
        let style = content_style(DecorationInsets::new(true, false), ContentEmphasis::Visible);
        assert_eq!(style.get("margin-inline-start"), Some("-0.5rem"));
        assert_eq!(style.get("margin-inline-end"), None);
    }

    #[test]
    fn loading_hides_content_even_when_disabled() {
        let style = content_style(
            DecorationInsets::default(),
            ContentEmphasis::resolve(true, true),
        );
        assert_eq!(style.get("opacity"), Some("0"));
    }

    #[test]
    fn overlay_matches_button_bounds() {
        let overlay = overlay_base();
        assert_eq!(overlay.get("position"), Some("absolute"));
        assert_eq!(overlay.get("inset"), Some("0"));
        assert_eq!(overlay.get("pointer-events"), Some("none"));
    }
}
