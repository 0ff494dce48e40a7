//! Component workbench for the `ui` package.
//!
//! Stories describe sample button configurations; each one can be opened on
//! its own canvas and tweaked through controls or the `args` URL query.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;
pub mod args;
pub mod stories;

pub use app::StorybookApp;
pub use args::{ArgValue, ArgsError};
pub use stories::{
    button_stories, find_story, story_id, ArgType, ButtonArgs, Control, Story, StoryMeta,
    BUTTON_META,
};

/// Mounts the workbench into `<body>`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <StorybookApp /> })
}
