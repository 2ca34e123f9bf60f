//! Story catalog: one entry per documented component state.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use system_ui::{ControlSize, FieldVariant, InputKind};
use thiserror::Error;

use crate::fixtures::{mock_users, User};

/// Story group for the text field entries.
pub const INPUT_FIELD_GROUP: &str = "Components/InputField";
/// Story group for the data table entries.
pub const DATA_TABLE_GROUP: &str = "Components/DataTable";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Props rendered by a text field story.
pub struct InputStoryArgs {
    /// Field label.
    pub label: &'static str,
    /// Placeholder text.
    pub placeholder: &'static str,
    /// Visual variant.
    pub variant: FieldVariant,
    /// Size token.
    pub size: ControlSize,
    /// Native input kind.
    pub input_type: InputKind,
    /// Helper text below the field.
    pub helper_text: Option<&'static str>,
    /// Error text shown while invalid.
    pub error_message: Option<&'static str>,
    /// Invalid flag.
    pub invalid: bool,
    /// Loading indicator.
    pub loading: bool,
    /// Clear button while a value is present.
    pub clearable: bool,
    /// Initial uncontrolled value.
    pub default_value: Option<&'static str>,
}

impl Default for InputStoryArgs {
    fn default() -> Self {
        Self {
            label: "Username",
            placeholder: "Enter text...",
            variant: FieldVariant::Outlined,
            size: ControlSize::Md,
            input_type: InputKind::Text,
            helper_text: None,
            error_message: None,
            invalid: false,
            loading: false,
            clearable: false,
            default_value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Props rendered by a data table story.
pub struct TableStoryArgs {
    /// Table rows.
    pub rows: Vec<User>,
    /// Loading flag.
    pub loading: bool,
    /// Row selection checkboxes.
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Component and props rendered by a story.
pub enum StoryArgs {
    /// Text field story.
    Input(InputStoryArgs),
    /// Data table story.
    Table(TableStoryArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single catalog entry.
pub struct StoryEntry {
    /// Stable id, for example `components-inputfield--with-helper`.
    pub id: String,
    /// Group title, for example `Components/InputField`.
    pub group: &'static str,
    /// Story name within the group.
    pub name: &'static str,
    /// Component props.
    pub args: StoryArgs,
}

impl StoryEntry {
    fn new(group: &'static str, name: &'static str, args: StoryArgs) -> Self {
        Self {
            id: story_id(group, name),
            group,
            name,
            args,
        }
    }
}

#[derive(Debug, Error)]
/// Failures resolving which story to open.
pub enum StoryLookupError {
    /// No story has the requested id.
    #[error("unknown story `{0}`")]
    UnknownStory(String),
    /// Launch parameters did not match [`ShowcaseLaunch`].
    #[error("invalid showcase launch params: {0}")]
    InvalidLaunchParams(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Launch parameters accepted by [`UiShowcaseApp`](crate::UiShowcaseApp).
pub struct ShowcaseLaunch {
    /// Story id to open first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
}

impl ShowcaseLaunch {
    /// Launch parameters that open `story_id`.
    pub fn for_story(story_id: impl Into<String>) -> Self {
        Self {
            story: Some(story_id.into()),
        }
    }

    /// Serializes into the JSON payload passed as `launch_params`.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Builds a story id from a group title and story name.
///
/// The group is lowercased with separators turned into `-`; the name is kebab-cased, so
/// `("Components/InputField", "WithHelper")` becomes `components-inputfield--with-helper`.
pub fn story_id(group: &str, name: &str) -> String {
    let group = group
        .chars()
        .map(|ch| match ch {
            '/' | ' ' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect::<String>();
    let mut name_slug = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() && index > 0 {
            name_slug.push('-');
        }
        name_slug.push(ch.to_ascii_lowercase());
    }
    format!("{group}--{name_slug}")
}

/// Every story in display order: text field stories first, then data table stories.
pub fn stories() -> Vec<StoryEntry> {
    let input = |name, args| StoryEntry::new(INPUT_FIELD_GROUP, name, StoryArgs::Input(args));
    let table = |name, args| StoryEntry::new(DATA_TABLE_GROUP, name, StoryArgs::Table(args));

    vec![
        input("Default", InputStoryArgs::default()),
        input(
            "Filled",
            InputStoryArgs {
                variant: FieldVariant::Filled,
                label: "Email",
                placeholder: "you@example.com",
                ..InputStoryArgs::default()
            },
        ),
        input(
            "Ghost",
            InputStoryArgs {
                variant: FieldVariant::Ghost,
                label: "Ghost Input",
                ..InputStoryArgs::default()
            },
        ),
        input(
            "Password",
            InputStoryArgs {
                input_type: InputKind::Password,
                label: "Password",
                placeholder: "Enter password",
                ..InputStoryArgs::default()
            },
        ),
        input(
            "Invalid",
            InputStoryArgs {
                label: "Email",
                placeholder: "bad-email",
                invalid: true,
                error_message: Some("This email is not valid"),
                ..InputStoryArgs::default()
            },
        ),
        input(
            "WithHelper",
            InputStoryArgs {
                label: "Email",
                placeholder: "you@example.com",
                helper_text: Some("We'll never share your email."),
                ..InputStoryArgs::default()
            },
        ),
        input(
            "Loading",
            InputStoryArgs {
                label: "Loading",
                loading: true,
                ..InputStoryArgs::default()
            },
        ),
        input(
            "Clearable",
            InputStoryArgs {
                label: "Search",
                clearable: true,
                default_value: Some("Pre-filled"),
                ..InputStoryArgs::default()
            },
        ),
        table(
            "Default",
            TableStoryArgs {
                rows: mock_users(),
                ..TableStoryArgs::default()
            },
        ),
        table(
            "Sortable",
            TableStoryArgs {
                rows: mock_users(),
                ..TableStoryArgs::default()
            },
        ),
        table(
            "Selectable",
            TableStoryArgs {
                rows: mock_users(),
                selectable: true,
                ..TableStoryArgs::default()
            },
        ),
        table(
            "Loading",
            TableStoryArgs {
                loading: true,
                ..TableStoryArgs::default()
            },
        ),
        table("Empty", TableStoryArgs::default()),
    ]
}

/// Looks up a story by id.
///
/// # Errors
///
/// Returns [`StoryLookupError::UnknownStory`] when no story has `id`.
pub fn find_story(id: &str) -> Result<StoryEntry, StoryLookupError> {
    stories()
        .into_iter()
        .find(|story| story.id == id)
        .ok_or_else(|| StoryLookupError::UnknownStory(id.to_string()))
}

/// Resolves the story to open from launch parameters.
///
/// `null` or a payload without `story` opens the first story.
///
/// # Errors
///
/// Returns [`StoryLookupError::InvalidLaunchParams`] for payloads that are not a
/// [`ShowcaseLaunch`] and [`StoryLookupError::UnknownStory`] for unknown ids.
pub fn resolve_launch(launch_params: &Value) -> Result<Option<StoryEntry>, StoryLookupError> {
    if launch_params.is_null() {
        return Ok(None);
    }
    let launch = ShowcaseLaunch::deserialize(launch_params)?;
    launch.story.as_deref().map(find_story).transpose()
}
