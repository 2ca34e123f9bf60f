//! Visual documentation app for the shared text field and data table primitives.
//!
//! Every documented component state is a [`StoryEntry`](stories::StoryEntry) in the catalog
//! returned by [`stories::stories`]. The app lists the catalog, renders the active story on a
//! centered canvas through `system_ui` primitives, and reports what the component emitted in
//! the status bar.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod stories;

use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use system_ui::prelude::*;

use crate::fixtures::{user_columns, User};
use crate::stories::{
    find_story, resolve_launch, stories, InputStoryArgs, StoryArgs, StoryEntry, TableStoryArgs,
};

pub use stories::ShowcaseLaunch;

/// Story opened when neither launch params nor restored state name one.
pub const DEFAULT_STORY_ID: &str = "components-inputfield--default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ShowcaseState {
    story: String,
}

fn initial_story_id(launch_params: &Value, restored_state: Option<Value>) -> String {
    match resolve_launch(launch_params) {
        Ok(Some(story)) => return story.id,
        Ok(None) => {}
        Err(err) => logging::warn!("ui showcase launch ignored: {err}"),
    }

    restored_state
        .and_then(|restored| serde_json::from_value::<ShowcaseState>(restored).ok())
        .filter(|restored| find_story(&restored.story).is_ok())
        .map_or_else(|| DEFAULT_STORY_ID.to_string(), |restored| restored.story)
}

fn variant_label(variant: FieldVariant) -> &'static str {
    match variant {
        FieldVariant::Outlined => "Outlined",
        FieldVariant::Filled => "Filled",
        FieldVariant::Ghost => "Ghost",
    }
}

fn size_label(size: ControlSize) -> &'static str {
    match size {
        ControlSize::Sm => "Small",
        ControlSize::Md => "Medium",
        ControlSize::Lg => "Large",
    }
}

fn selection_summary(rows: &[User]) -> String {
    if rows.is_empty() {
        return "Selected: none".to_string();
    }
    let names = rows.iter().map(|user| user.name).collect::<Vec<_>>();
    format!("Selected: {}", names.join(", "))
}

#[component]
/// Story browser with a centered canvas.
pub fn UiShowcaseApp(
    /// `{"story": "<id>"}` selecting the first story to open. Unknown or malformed values fall
    /// back to the restored or default story.
    #[prop(optional)]
    launch_params: Value,
    /// Previously persisted showcase state.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the serialized showcase state whenever the active story changes.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    let initial = ShowcaseState {
        story: initial_story_id(&launch_params, restored_state),
    };
    let last_saved = create_rw_signal(serde_json::to_string(&initial).ok());
    let state = create_rw_signal(initial);

    // Per-story canvas overrides and component output.
    let variant_override = create_rw_signal::<Option<FieldVariant>>(None);
    let size_override = create_rw_signal::<Option<ControlSize>>(None);
    let last_value = create_rw_signal::<Option<String>>(None);
    let selected_rows = create_rw_signal(Vec::<User>::new());

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("ui showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_state_change) = on_state_change.as_ref() {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_state_change.call(value),
                Err(err) => logging::warn!("ui showcase state export failed: {err}"),
            }
        }
    });

    let active_story = create_memo(move |_| {
        let id = state.with(|state| state.story.clone());
        match find_story(&id) {
            Ok(story) => Some(story),
            Err(err) => {
                logging::warn!("ui showcase: {err}");
                None
            }
        }
    });

    let open_story = move |id: String| {
        variant_override.set(None);
        size_override.set(None);
        last_value.set(None);
        selected_rows.set(Vec::new());
        state.update(|state| state.story = id);
    };

    let story_list = stories()
        .into_iter()
        .map(|story| {
            let id = story.id.clone();
            let is_active = Signal::derive({
                let id = id.clone();
                move || state.with(|state| state.story == id)
            });
            view! {
                <Button
                    variant=ButtonVariant::Quiet
                    ui_slot="story-link"
                    selected=is_active
                    title=story.id.clone()
                    on_click=Callback::new(move |_| open_story(id.clone()))
                >
                    {format!("{} / {}", story.group.trim_start_matches("Components/"), story.name)}
                </Button>
            }
        })
        .collect_view();

    let canvas = move || {
        let Some(story) = active_story.get() else {
            return view! { <EmptyState>"Story not found"</EmptyState> }.into_view();
        };
        match story.args {
            StoryArgs::Input(args) => {
                let variant = variant_override.get().unwrap_or(args.variant);
                let size = size_override.get().unwrap_or(args.size);
                view! {
                    <InputStoryCanvas
                        args
                        variant
                        size
                        on_change=Callback::new(move |next| last_value.set(Some(next)))
                    />
                }
                .into_view()
            }
            StoryArgs::Table(args) => view! {
                <TableStoryCanvas
                    args
                    on_row_select=Callback::new(move |rows| selected_rows.set(rows))
                />
            }
            .into_view(),
        }
    };

    let is_input_story = move || {
        active_story.with(|story| matches!(story, Some(StoryEntry { args: StoryArgs::Input(_), .. })))
    };

    let variant_controls = move || {
        [FieldVariant::Outlined, FieldVariant::Filled, FieldVariant::Ghost]
            .into_iter()
            .map(|variant| {
                view! {
                    <Button
                        size=ControlSize::Sm
                        selected=Signal::derive(move || {
                            variant_override.get() == Some(variant)
                        })
                        on_click=Callback::new(move |_| variant_override.set(Some(variant)))
                    >
                        {variant_label(variant)}
                    </Button>
                }
            })
            .collect_view()
    };
    let size_controls = move || {
        [ControlSize::Sm, ControlSize::Md, ControlSize::Lg]
            .into_iter()
            .map(|size| {
                view! {
                    <Button
                        size=ControlSize::Sm
                        selected=Signal::derive(move || size_override.get() == Some(size))
                        on_click=Callback::new(move |_| size_override.set(Some(size)))
                    >
                        {size_label(size)}
                    </Button>
                }
            })
            .collect_view()
    };

    let story_title = move || {
        active_story
            .get()
            .map(|story| format!("{} / {}", story.group, story.name))
            .unwrap_or_default()
    };

    view! {
        <AppShell>
            <SplitLayout>
                <Pane variant=SurfaceVariant::Muted aria_label="Stories">
                    <PaneHeader title="Stories" meta="Components" />
                    <ListSurface role="navigation" aria_label="Story list">
                        <Stack gap=Spacing::Sm>{story_list}</Stack>
                    </ListSurface>
                </Pane>
                <Pane aria_label="Canvas">
                    <PaneHeader title=Signal::derive(story_title)>
                        <Badge>{move || state.with(|state| state.story.clone())}</Badge>
                    </PaneHeader>
                    <Show when=is_input_story fallback=|| ()>
                        <Cluster gap=Spacing::Sm ui_slot="controls">
                            <Text role=TextRole::Label>"Variant"</Text>
                            {variant_controls()}
                            <Text role=TextRole::Label>"Size"</Text>
                            {size_controls()}
                        </Cluster>
                    </Show>
                    <Stack align=Alignment::Center padding=Spacing::Lg ui_slot="canvas">
                        {canvas}
                    </Stack>
                </Pane>
            </SplitLayout>

            <StatusBar>
                <StatusBarItem>{move || format!("Story: {}", story_title())}</StatusBarItem>
                <StatusBarItem>
                    {move || {
                        if is_input_story() {
                            match last_value.get() {
                                Some(value) => format!("Value: \"{value}\""),
                                None => "Value: unchanged".to_string(),
                            }
                        } else {
                            selected_rows.with(|rows| selection_summary(rows))
                        }
                    }}
                </StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[component]
fn InputStoryCanvas(
    args: InputStoryArgs,
    variant: FieldVariant,
    size: ControlSize,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <TextField
            label=args.label
            placeholder=args.placeholder
            helper_text=args.helper_text.unwrap_or_default()
            error_message=args.error_message.unwrap_or_default()
            invalid=args.invalid
            variant
            size
            input_type=args.input_type
            loading=args.loading
            clearable=args.clearable
            default_value=args.default_value.unwrap_or_default()
            on_change
        />
    }
}

#[component]
fn TableStoryCanvas(args: TableStoryArgs, on_row_select: Callback<Vec<User>>) -> impl IntoView {
    view! {
        <DataTable
            rows=args.rows
            columns=user_columns()
            loading=args.loading
            selectable=args.selectable
            on_row_select
            aria_label="Users"
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::fixtures::mock_users;

    #[test]
    fn default_story_is_in_the_catalog() {
        assert!(find_story(DEFAULT_STORY_ID).is_ok());
        assert_eq!(initial_story_id(&Value::Null, None), DEFAULT_STORY_ID);
    }

    #[test]
    fn launch_params_win_over_restored_state() {
        let launch = ShowcaseLaunch::for_story("components-datatable--empty").to_value();
        let restored = json!({ "story": "components-inputfield--ghost" });

        assert_eq!(
            initial_story_id(&launch, Some(restored.clone())),
            "components-datatable--empty"
        );
        assert_eq!(
            initial_story_id(&Value::Null, Some(restored)),
            "components-inputfield--ghost"
        );
    }

    #[test]
    fn bad_launch_params_fall_back() {
        let restored = json!({ "story": "components-datatable--sortable" });

        assert_eq!(
            initial_story_id(&json!({ "story": "components-missing--story" }), None),
            DEFAULT_STORY_ID
        );
        assert_eq!(
            initial_story_id(&json!(42), Some(restored)),
            "components-datatable--sortable"
        );
        assert_eq!(
            initial_story_id(&Value::Null, Some(json!({ "story": "gone" }))),
            DEFAULT_STORY_ID
        );
    }

    #[test]
    fn selection_summary_lists_names_in_order() {
        let users = mock_users();
        assert_eq!(selection_summary(&[]), "Selected: none");
        assert_eq!(
            selection_summary(&[users[3].clone(), users[0].clone()]),
            "Selected: David, Alice"
        );
    }
}
