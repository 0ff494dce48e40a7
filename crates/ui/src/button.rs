//! The `Button` component.

use leptos::ev::MouseEvent;
use leptos::html;
use leptos::*;

use crate::model::{
    activate, aria_disabled, aria_pressed, bool_token, content_slots, overlay_text, Activation,
    ButtonType, ContentEmphasis, ContentSlot, DecorationInsets, DEFAULT_LOADING_LABEL,
};
use crate::refs::{ForwardedRef, MergedRef};
use crate::style::{button_style, content_style, overlay_base, Style};

fn merge_class(base: &'static str, class: Option<&str>) -> String {
    match class {
        Some(class) if !class.trim().is_empty() => format!("{base} {}", class.trim()),
        _ => base.to_string(),
    }
}

fn state_token(loading: bool, pressed: bool) -> &'static str {
    if loading {
        "loading"
    } else if pressed {
        "pressed"
    } else {
        "idle"
    }
}

fn focus_button(node_ref: NodeRef<html::Button>) {
    let Some(button) = node_ref.get_untracked() else {
        return;
    };
    if let Err(err) = button.focus() {
        logging::debug_warn!("button focus failed: {err:?}");
    }
}

#[component]
/// Single-focus-target button with optional decorations and busy/pressed states.
///
/// `disabled` is announced to assistive technology through `aria-disabled`
/// only; the button stays focusable and clickable. While `loading`, clicks
/// still move focus to the button but never reach `on_click`, and
/// `loading_label` is announced through an assertive live region layered over
/// the hidden content.
pub fn Button(
    /// Element rendered before the children.
    #[prop(optional_no_strip, into)]
    icon_start: Option<ViewFn>,
    /// Element rendered after the children.
    #[prop(optional_no_strip, into)]
    icon_end: Option<ViewFn>,
    /// Announce the button as disabled to screen readers only.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Show the loading overlay and ignore activations.
    #[prop(optional, into)]
    loading: MaybeSignal<bool>,
    /// Reflected as `aria-pressed`.
    #[prop(optional, into)]
    pressed: MaybeSignal<bool>,
    /// Text read out to assistive technology while loading.
    #[prop(into, default = MaybeSignal::Static(DEFAULT_LOADING_LABEL.to_string()))]
    loading_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    /// Inline style declarations applied over the base layout.
    #[prop(optional, into)]
    style: Option<Style>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] aria_haspopup: Option<String>,
    /// Loaded with the rendered `<button>` element.
    #[prop(optional)]
    node_ref: NodeRef<html::Button>,
    /// Further observers of the rendered `<button>` element.
    #[prop(optional)]
    refs: Vec<ForwardedRef<web_sys::HtmlButtonElement>>,
    children: Children,
) -> impl IntoView {
    let internal_ref = create_node_ref::<html::Button>();
    let observers = MergedRef::new(refs);

    internal_ref.on_load({
        let observers = observers.clone();
        move |button| {
            node_ref.load(&button);
            let element: web_sys::HtmlButtonElement = (*button).clone();
            observers.assign(Some(element));
        }
    });
    on_cleanup(move || observers.assign(None));

    let insets = DecorationInsets::new(icon_start.is_some(), icon_end.is_some());
    let mut children = Some(children);
    let content = content_slots(insets.leading, insets.trailing)
        .into_iter()
        .filter_map(|slot| match slot {
            ContentSlot::Leading => icon_start.as_ref().map(ViewFn::run),
            ContentSlot::Content => children.take().map(|children| children().into_view()),
            ContentSlot::Trailing => icon_end.as_ref().map(ViewFn::run),
        })
        .collect_view();

    let on_activate = move |ev: MouseEvent| {
        let handler = on_click
            .as_ref()
            .map(|on_click| move |ev: MouseEvent| on_click.call(ev));
        let outcome = activate(
            loading.get_untracked(),
            || focus_button(internal_ref),
            handler,
            ev,
        );
        if outcome == Activation::Swallowed {
            logging::debug_warn!("button activation ignored while loading");
        }
    };

    view! {
        <button
            type=button_type.token()
            class=merge_class("ui-button", class.as_deref())
            style=button_style(&style.unwrap_or_default()).to_css()
            id=id
            aria-controls=aria_controls
            aria-expanded=move || aria_expanded.as_ref().map(|expanded| bool_token(expanded.get()))
            aria-haspopup=aria_haspopup
            aria-disabled=move || aria_disabled(disabled.get())
            aria-pressed=move || aria_pressed(pressed.get())
            node_ref=internal_ref
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-type=button_type.token()
            data-ui-state=move || state_token(loading.get(), pressed.get())
            data-ui-loading=move || bool_token(loading.get())
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=on_activate
        >
            <span
                data-ui-slot="content"
                data-ui-emphasis=move || {
                    ContentEmphasis::resolve(loading.get(), disabled.get()).token()
                }
                style=move || {
                    content_style(insets, ContentEmphasis::resolve(loading.get(), disabled.get()))
                        .to_css()
                }
            >
                {content}
            </span>
            <span
                data-ui-slot="loading-overlay"
                aria-live="assertive"
                style=overlay_base().to_css()
            >
                {move || {
                    let label = loading_label.get();
                    overlay_text(loading.get(), &label)
                        .map(|text| view! { <span>{text.to_owned()}</span> })
                }}
            </span>
        </button>
    }
}
