//! Accessible button primitive shared by every consumer of the UI package.
//!
//! The crate owns the [`Button`] Leptos component together with the pure
//! model it renders from: state-to-attribute mapping, layered inline styles,
//! and the observer list that exposes the button's focus target. Consumers
//! compose the component; the model is public so previews and tests can
//! reason about a configuration without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
pub mod model;
pub mod refs;
pub mod style;

pub use button::Button;
pub use model::{
    Activation, ButtonType, ContentEmphasis, ContentSlot, DecorationInsets, DEFAULT_LOADING_LABEL,
};
pub use refs::{ForwardedRef, MergedRef};
pub use style::Style;

/// Convenience imports for crates rendering the button.
pub mod prelude {
    pub use crate::{Button, ButtonType, ForwardedRef, Style};
}
