//! Leptos primitives rendering the `data-ui-*` contract.
//!
//! Visual options are closed token enums; each renders as a lowercase `data-ui-*` attribute
//! value so the stylesheet never depends on component internals.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;

pub use controls::{Button, CheckboxField, IconButton, TextField};
pub use data_display::{
    Badge, DataTable, EmptyState, ListSurface, Pane, PaneHeader, StatusBarItem, Text,
};
pub use layout::{AppShell, Cluster, SplitLayout, Stack, StatusBar};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Pane surface treatment.
pub enum SurfaceVariant {
    /// Base surface.
    #[default]
    Standard,
    /// Recessed surface for navigation and side panes.
    Muted,
}

impl SurfaceVariant {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Button emphasis.
pub enum ButtonVariant {
    /// Bordered action button.
    #[default]
    Standard,
    /// Borderless button for toolbars, lists, and field affordances.
    Quiet,
}

impl ButtonVariant {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Text field visual variants.
pub enum FieldVariant {
    /// Bordered field on the base surface.
    #[default]
    Outlined,
    /// Tinted field without a visible border.
    Filled,
    /// Transparent field with an underline only.
    Ghost,
}

impl FieldVariant {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Filled => "filled",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Height and type scale shared by buttons and text fields.
pub enum ControlSize {
    /// Dense control.
    Sm,
    /// Default control.
    #[default]
    Md,
    /// Large control.
    Lg,
}

impl ControlSize {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Typographic role of inline text.
pub enum TextRole {
    /// Running text.
    #[default]
    Body,
    /// Control and group labels.
    Label,
}

impl TextRole {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Text color tone.
pub enum TextTone {
    /// Default foreground.
    #[default]
    Primary,
    /// De-emphasized foreground, used for helper text.
    Secondary,
    /// Validation errors.
    Danger,
}

impl TextTone {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Spacing scale used for layout gaps and padding.
pub enum Spacing {
    /// No space.
    None,
    /// Tight space.
    Sm,
    /// Default space.
    #[default]
    Md,
    /// Loose space.
    Lg,
}

impl Spacing {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Cross-axis alignment of layout children.
pub enum Alignment {
    /// Children fill the cross axis.
    #[default]
    Stretch,
    /// Children hug the start edge.
    Start,
    /// Children are centered.
    Center,
}

impl Alignment {
    pub(crate) const fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class.filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

pub(crate) const fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_to_the_base_class() {
        assert_eq!(merge_layout_class("ui-text-field", None), "ui-text-field");
        assert_eq!(merge_layout_class("ui-text-field", Some("")), "ui-text-field");
        assert_eq!(
            merge_layout_class("ui-text-field", Some("login-email")),
            "ui-text-field login-email"
        );
    }

    #[test]
    fn field_tokens_default_to_outlined_medium() {
        assert_eq!(FieldVariant::default().token(), "outlined");
        assert_eq!(ControlSize::default().token(), "md");
        assert_eq!(FieldVariant::Ghost.token(), "ghost");
    }
}
