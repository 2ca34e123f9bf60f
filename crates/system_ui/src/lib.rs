//! Shared UI primitive library with a managed text field and a sortable, selectable data table.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the stylesheet. Component logic lives in the headless
//! [`table`] and [`text_field`] models so it can be exercised without a DOM; the primitives
//! only own a signal of that state and render it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
pub mod table;
pub mod text_field;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Alignment, AppShell, Badge, Button, ButtonVariant, CheckboxField, Cluster, ControlSize,
    DataTable, EmptyState, FieldVariant, IconButton, ListSurface, Pane, PaneHeader, Spacing,
    SplitLayout, Stack, StatusBar, StatusBarItem, SurfaceVariant, Text, TextField, TextRole,
    TextTone,
};
pub use table::{CellValue, Column, SortDirection, SortDirective, TableRow};
pub use text_field::InputKind;

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Alignment, AppShell, Badge, Button, ButtonVariant, CellValue, CheckboxField, Cluster,
        Column, ControlSize, DataTable, EmptyState, FieldVariant, Icon, IconButton, IconName,
        IconSize, InputKind, ListSurface, Pane, PaneHeader, SortDirection, Spacing, SplitLayout,
        Stack, StatusBar, StatusBarItem, SurfaceVariant, TableRow, Text, TextField, TextRole,
        TextTone,
    };
}
