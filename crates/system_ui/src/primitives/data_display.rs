use super::*;
use crate::table::{sort_rows, Column, SortDirection, TableRow, TableState, TableView};

#[component]
/// Inline run of text with a role and tone.
pub fn Text(
    #[prop(optional)] role: TextRole,
    #[prop(optional)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-text"
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-role=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Small pill for ids and counts.
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="ui-badge" data-ui-primitive="true" data-ui-kind="badge">
            {children()}
        </span>
    }
}

#[component]
/// Placeholder shown when a collection has nothing to render. Announced as a status.
pub fn EmptyState(children: Children) -> impl IntoView {
    view! {
        <div class="ui-empty-state" data-ui-primitive="true" data-ui-kind="empty-state" role="status">
            {children()}
        </div>
    }
}

#[component]
/// Labeled region of an application surface.
pub fn Pane(
    #[prop(optional)] variant: SurfaceVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] aria_label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-pane", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane"
            data-ui-variant=variant.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Pane title row. Children render as trailing actions.
pub fn PaneHeader(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] meta: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="ui-pane-header" data-ui-primitive="true" data-ui-kind="pane-header">
            <h2 data-ui-slot="title">{move || title.get()}</h2>
            {meta.map(|meta| view! { <p data-ui-slot="meta">{meta}</p> })}
            {children.map(|children| view! { <div data-ui-slot="actions">{children()}</div> })}
        </header>
    }
}

#[component]
/// One segment of a [`StatusBar`](super::StatusBar).
pub fn StatusBarItem(children: Children) -> impl IntoView {
    view! {
        <span class="ui-statusbar-item" data-ui-primitive="true" data-ui-kind="statusbar-item">
            {children()}
        </span>
    }
}

#[component]
/// Scrollable container for a list of entries.
pub fn ListSurface(
    #[prop(into)] role: String,
    #[prop(into)] aria_label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-list-surface"
            data-ui-primitive="true"
            data-ui-kind="list-surface"
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

fn table_view_token(view: TableView) -> &'static str {
    match view {
        TableView::Loading => "loading",
        TableView::Empty => "empty",
        TableView::Rows => "rows",
    }
}

fn sort_icon(direction: SortDirection) -> IconName {
    match direction {
        SortDirection::Ascending => IconName::ChevronUp,
        SortDirection::Descending => IconName::ChevronDown,
    }
}

#[component]
/// Sortable, selectable table over typed rows.
///
/// Clicking a sortable header sorts by that column, flipping direction on repeated clicks.
/// With `selectable`, each row gets a checkbox; after every toggle `on_row_select` receives the
/// selected rows in display order. Selection is tracked by display position and survives
/// re-sorting and data changes.
pub fn DataTable<R>(
    #[prop(into)] rows: MaybeSignal<Vec<R>>,
    columns: Vec<Column<R::Field>>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] selectable: bool,
    #[prop(optional)] on_row_select: Option<Callback<Vec<R>>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView
where
    R: TableRow,
{
    let rows = Signal::derive(move || rows.get());
    let columns = store_value(columns);
    let state = create_rw_signal(TableState::<R::Field>::default());

    let directive = create_memo(move |_| state.with(|state| state.sort().copied()));
    let sorted = Signal::derive(move || rows.with(|rows| sort_rows(rows, directive.get().as_ref())));
    let table_view = Signal::derive(move || TableView::resolve(loading.get(), rows.with(Vec::len)));

    let toggle_row = move |position: usize| {
        let sorted_rows = sorted.get_untracked();
        let selection = state
            .try_update(|state| state.toggle_row_and_select(position, &sorted_rows))
            .unwrap_or_default();
        if let Some(on_row_select) = on_row_select.as_ref() {
            on_row_select.call(selection);
        }
    };

    let header_cells = move || {
        columns.with_value(|columns| {
            columns
                .iter()
                .cloned()
                .map(|column| {
                    let key = column.key;
                    let title = column.title.clone();
                    let sortable = column.sortable;
                    let field = column.field;
                    let direction =
                        Signal::derive(move || state.with(|state| state.direction_for(field)));
                    view! {
                        <th
                            scope="col"
                            data-ui-slot="header-cell"
                            data-ui-column=key
                            data-ui-sortable=bool_token(sortable)
                            aria-sort=move || {
                                sortable.then(|| direction.get().map_or("none", SortDirection::aria_token))
                            }
                            on:click=move |_| state.update(|state| state.sort_by(&column))
                        >
                            {title}
                            {move || {
                                direction
                                    .get()
                                    .filter(|_| sortable)
                                    .map(|direction| view! { <Icon icon=sort_icon(direction) size=IconSize::Xs /> })
                            }}
                        </th>
                    }
                })
                .collect_view()
        })
    };

    let body_rows = move || {
        sorted
            .get()
            .into_iter()
            .enumerate()
            .map(|(position, row)| {
                let selected =
                    Signal::derive(move || state.with(|state| state.is_selected(position)));
                let cells = columns.with_value(|columns| {
                    columns
                        .iter()
                        .map(|column| {
                            view! {
                                <td data-ui-slot="cell" data-ui-column=column.key>
                                    {row.cell(column.field).to_string()}
                                </td>
                            }
                        })
                        .collect_view()
                });
                view! {
                    <tr
                        data-ui-slot="row"
                        data-ui-position=position
                        data-ui-selected=move || bool_token(selected.get())
                    >
                        {selectable.then(|| view! {
                            <td data-ui-slot="selection">
                                <CheckboxField
                                    aria_label=format!("Select row {}", position + 1)
                                    checked=selected
                                    on_change=Callback::new(move |_| toggle_row(position))
                                />
                            </td>
                        })}
                        {cells}
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            data-ui-state=move || table_view_token(table_view.get())
        >
            {move || match table_view.get() {
                TableView::Loading => view! {
                    <div data-ui-slot="loading" role="status" aria-busy="true">"Loading..."</div>
                }
                .into_view(),
                TableView::Empty => view! { <EmptyState>"No data available"</EmptyState> }.into_view(),
                TableView::Rows => view! {
                    <table aria-label=aria_label.clone() data-ui-selectable=bool_token(selectable)>
                        <thead>
                            <tr data-ui-slot="header-row">
                                {selectable.then(|| view! { <th scope="col" data-ui-slot="selection"></th> })}
                                {header_cells}
                            </tr>
                        </thead>
                        <tbody>{body_rows}</tbody>
                    </table>
                }
                .into_view(),
            }}
        </div>
    }
}
