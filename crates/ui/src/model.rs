//! Pure state model behind the [`Button`](crate::Button) component.
//!
//! Every attribute and style decision the rendered button makes is resolved
//! here from plain inputs, so the behavior can be exercised without a DOM.

/// Text announced to assistive technology while a button is loading, unless
/// the caller supplies its own label.
pub const DEFAULT_LOADING_LABEL: &str = "Busy";

/// Inline inset applied to the content region next to a decoration.
pub(crate) const DECORATION_INSET: &str = "-0.5rem";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native `type` of the rendered `<button>`.
pub enum ButtonType {
    /// Generic button with no form behavior.
    Button,
    /// Submits the owning form.
    Submit,
    /// Resets the owning form.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    /// Attribute value for the native `type` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// `aria-disabled` value: present only when disabled.
///
/// The native `disabled` attribute is never set, so a disabled button keeps
/// receiving focus and activation.
pub fn aria_disabled(disabled: bool) -> Option<&'static str> {
    disabled.then_some("true")
}

/// `aria-pressed` value, always explicit.
pub fn aria_pressed(pressed: bool) -> &'static str {
    bool_token(pressed)
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual emphasis of the content region.
pub enum ContentEmphasis {
    /// Fully visible content.
    Visible,
    /// Half-opacity content for disabled buttons.
    Dimmed,
    /// Invisible content while the loading overlay is shown.
    Hidden,
}

impl ContentEmphasis {
    /// Resolves emphasis from button state. Loading wins over disabled.
    pub fn resolve(loading: bool, disabled: bool) -> Self {
        if loading {
            Self::Hidden
        } else if disabled {
            Self::Dimmed
        } else {
            Self::Visible
        }
    }

    /// CSS opacity for the content region, if any.
    pub fn opacity(self) -> Option<&'static str> {
        match self {
            Self::Visible => None,
            Self::Dimmed => Some("0.5"),
            Self::Hidden => Some("0"),
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Dimmed => "dimmed",
            Self::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Sides of the content region pulled in to sit flush with a decoration.
pub struct DecorationInsets {
    /// A leading decoration is present.
    pub leading: bool,
    /// A trailing decoration is present.
    pub trailing: bool,
}

impl DecorationInsets {
    /// Insets for the given decoration presence.
    pub fn new(has_leading: bool, has_trailing: bool) -> Self {
        Self {
            leading: has_leading,
            trailing: has_trailing,
        }
    }

    /// `(property, value)` declarations compensating the content gap.
    pub fn declarations(self) -> Vec<(&'static str, &'static str)> {
        let mut declarations = Vec::new();
        if self.leading {
            declarations.push(("margin-inline-start", DECORATION_INSET));
        }
        if self.trailing {
            declarations.push(("margin-inline-end", DECORATION_INSET));
        }
        declarations
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A position inside the content region.
pub enum ContentSlot {
    /// Decoration before the content.
    Leading,
    /// Primary content.
    Content,
    /// Decoration after the content.
    Trailing,
}

/// Slots to render, in order. Absent decorations are skipped.
pub fn content_slots(has_leading: bool, has_trailing: bool) -> Vec<ContentSlot> {
    let mut slots = Vec::with_capacity(3);
    if has_leading {
        slots.push(ContentSlot::Leading);
    }
    slots.push(ContentSlot::Content);
    if has_trailing {
        slots.push(ContentSlot::Trailing);
    }
    slots
}

/// Text shown in the live overlay region. Empty unless loading.
pub fn overlay_text(loading: bool, label: &str) -> Option<&str> {
    loading.then_some(label)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of a single activation.
pub enum Activation {
    /// The button was loading; the handler was not called.
    Swallowed,
    /// The handler, if any, received the event.
    Dispatched,
}

/// Runs one activation: focus first, then the handler unless loading.
///
/// The returned [`Activation`] tells the caller whether the event was
/// swallowed. Panics raised by `handler` propagate to the caller.
pub fn activate<E>(
    loading: bool,
    focus: impl FnOnce(),
    handler: Option<impl FnOnce(E)>,
    event: E,
) -> Activation {
    focus();
    if loading {
        return Activation::Swallowed;
    }
    if let Some(handler) = handler {
        handler(event);
    }
    Activation::Dispatched
}
