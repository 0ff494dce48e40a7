use leptos::html;
use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::*;
use ui::prelude::*;

use crate::args::ArgValue;
use crate::stories::{button_stories, find_story, ButtonArgs, Control, BUTTON_META};

#[component]
/// Workbench root: story index plus one route per story.
pub fn StorybookApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="UI Storybook" />
        <Meta name="description" content="Interactive previews of the shared button component." />

        <Router>
            <main class="storybook-root">
                <Routes>
                    <Route path="" view=StoryIndex />
                    <Route path="/story/:id" view=StoryRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn StoryIndex() -> impl IntoView {
    view! {
        <section class="storybook-index">
            <h1>{BUTTON_META.title}</h1>
            <ul class="storybook-stories">
                {button_stories()
                    .into_iter()
                    .map(|story| {
                        let href = format!("/story/{}", story.id);
                        view! {
                            <li data-story-id=story.id.clone()>
                                <A href=href>{story.name}</A>
                                <StoryCanvas name=story.name args=story.args />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn StoryRoute() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    move || {
        let id = params
            .with(|map| map.get("id").cloned())
            .unwrap_or_default();
        let Some(story) = find_story(&id) else {
            return view! {
                <section class="storybook-missing">
                    <p>{format!("No story with id `{id}`")}</p>
                    <A href="/">"Back to all stories"</A>
                </section>
            }
            .into_view();
        };

        let mut args = story.args.clone();
        if let Some(raw) = query.with(|map| map.get("args").cloned()) {
            if let Err(err) = args.apply_url_args(&raw) {
                logging::warn!("story `{id}` args ignored: {err}");
            }
        }

        view! { <StoryPage name=story.name defaults=story.args args /> }.into_view()
    }
}

#[component]
fn StoryPage(name: &'static str, defaults: ButtonArgs, args: ButtonArgs) -> impl IntoView {
    let args = create_rw_signal(args);
    let target = create_node_ref::<html::Button>();
    let permalink = move || {
        let query = args.with(|current| current.url_args(&defaults));
        if query.is_empty() {
            String::new()
        } else {
            format!("?args={query}")
        }
    };

    view! {
        <section class="storybook-story">
            <h1>{format!("{} / {name}", BUTTON_META.title)}</h1>
            <StoryCanvas name args node_ref=target />
            <Controls args />
            <p class="storybook-permalink">{permalink}</p>
            <Button
                class="storybook-focus-target"
                on_click=Callback::new(move |_| {
                    if let Some(button) = target.get_untracked() {
                        if let Err(err) = button.focus() {
                            logging::warn!("focusing `{name}` failed: {err:?}");
                        }
                    }
                })
            >
                "Focus story button"
            </Button>
            <A href="/">"All stories"</A>
        </section>
    }
}

#[component]
fn StoryCanvas(
    name: &'static str,
    #[prop(into)] args: MaybeSignal<ButtonArgs>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
) -> impl IntoView {
    let clicks = create_rw_signal(0_u32);
    let glyph = |glyph: String| {
        ViewFn::from(move || view! { <span aria-hidden="true">{glyph.clone()}</span> })
    };
    let initial = args.get_untracked();
    let observer = ForwardedRef::callback(move |button: Option<web_sys::HtmlButtonElement>| {
        let status = if button.is_some() { "attached" } else { "detached" };
        logging::log!("{name}: focus target {status}");
    });
    let flag = |read: fn(&ButtonArgs) -> bool| {
        let args = args.clone();
        Signal::derive(move || args.with(read))
    };
    let disabled = flag(|args| args.is_disabled);
    let loading = flag(|args| args.is_loading);
    let pressed = flag(|args| args.is_pressed);
    let loading_label = {
        let args = args.clone();
        Signal::derive(move || args.with(|args| args.loading_label.clone()))
    };

    view! {
        <div class="storybook-canvas" data-story=name>
            <Button
                icon_start=initial.icon_start.map(glyph)
                icon_end=initial.icon_end.map(glyph)
                disabled
                loading
                pressed
                loading_label
                on_click=Callback::new(move |_| {
                    logging::log!("{name}: click");
                    clicks.update(|count| *count += 1);
                })
                refs=vec![observer]
                node_ref
            >
                {move || args.with(|args| args.children.clone())}
            </Button>
            <output class="storybook-actions">
                {move || format!("clicks: {}", clicks.get())}
            </output>
        </div>
    }
}

#[component]
fn Controls(args: RwSignal<ButtonArgs>) -> impl IntoView {
    BUTTON_META
        .arg_types
        .iter()
        .filter(|arg_type| arg_type.control != Control::Disabled)
        .map(|arg_type| {
            let name = arg_type.name;
            let set = move |value: ArgValue| {
                args.update(|current| {
                    if let Err(err) = current.set_arg(name, value) {
                        logging::warn!("control `{name}` rejected: {err}");
                    }
                });
            };
            let editor = match arg_type.control {
                Control::Boolean => view! {
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            args.with(|current| current.arg(name) == Some(ArgValue::Bool(true)))
                        }
                        on:change=move |ev| set(ArgValue::Bool(event_target_checked(&ev)))
                    />
                }
                .into_view(),
                _ => view! {
                    <input
                        type="text"
                        prop:value=move || match args.with(|current| current.arg(name)) {
                            Some(ArgValue::Text(text)) => text,
                            _ => String::new(),
                        }
                        on:input=move |ev| set(ArgValue::Text(event_target_value(&ev)))
                    />
                }
                .into_view(),
            };
            view! {
                <label class="storybook-control" data-arg=name>
                    <span>{name}</span>
                    {editor}
                </label>
            }
        })
        .collect_view()
}
