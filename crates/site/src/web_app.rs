use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use serde_json::Value;
use ui_showcase::{ShowcaseLaunch, UiShowcaseApp};

/// Route that opens the story `id` directly.
pub fn story_path(id: &str) -> String {
    format!("/stories/{id}")
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Component Showcase" />
        <Meta name="description" content="Stories for the shared text field and data table primitives." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=ShowcaseEntry />
                    <Route path="/stories/:id" view=StoryRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ShowcaseEntry() -> impl IntoView {
    view! { <ShowcaseHost story=Signal::derive(|| None) /> }
}

#[component]
fn StoryRoute() -> impl IntoView {
    let params = use_params_map();
    let story = Signal::derive(move || params.with(|map| map.get("id").cloned()));

    view! { <ShowcaseHost story /> }
}

#[component]
fn ShowcaseHost(story: Signal<Option<String>>) -> impl IntoView {
    let navigate = use_navigate();
    let on_state_change = Callback::new(move |state: Value| {
        match state.get("story").and_then(Value::as_str) {
            Some(id) => navigate(&story_path(id), NavigateOptions::default()),
            None => logging::warn!("showcase state without a story: {state}"),
        }
    });

    move || {
        let launch = story
            .get()
            .map(ShowcaseLaunch::for_story)
            .unwrap_or_default();
        view! { <UiShowcaseApp launch_params=launch.to_value() on_state_change /> }
    }
}
