use super::*;

#[component]
/// Root container of an application surface.
pub fn AppShell(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-app-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="app-shell"
        >
            {children()}
        </div>
    }
}

#[derive(Clone, Copy)]
struct Flow {
    class: &'static str,
    kind: &'static str,
    gap: Spacing,
    align: Alignment,
    padding: Spacing,
}

fn flow_container(
    flow: Flow,
    layout_class: Option<&'static str>,
    ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class(flow.class, layout_class)
            data-ui-primitive="true"
            data-ui-kind=flow.kind
            data-ui-slot=ui_slot
            data-ui-gap=flow.gap.token()
            data-ui-align=flow.align.token()
            data-ui-padding=flow.padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Children laid out top to bottom.
pub fn Stack(
    #[prop(default = Spacing::Md)] gap: Spacing,
    #[prop(default = Alignment::Stretch)] align: Alignment,
    #[prop(default = Spacing::None)] padding: Spacing,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let flow = Flow {
        class: "ui-stack",
        kind: "stack",
        gap,
        align,
        padding,
    };
    flow_container(flow, layout_class, ui_slot, children)
}

#[component]
/// Children laid out in a wrapping row.
pub fn Cluster(
    #[prop(default = Spacing::Md)] gap: Spacing,
    #[prop(default = Alignment::Center)] align: Alignment,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let flow = Flow {
        class: "ui-cluster",
        kind: "cluster",
        gap,
        align,
        padding: Spacing::None,
    };
    flow_container(flow, layout_class, ui_slot, children)
}

#[component]
/// Side-by-side panes; the first pane keeps its intrinsic width.
pub fn SplitLayout(
    #[prop(default = Spacing::Md)] gap: Spacing,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-split-layout", layout_class)
            data-ui-primitive="true"
            data-ui-kind="split-layout"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Live region along the bottom edge of an [`AppShell`].
pub fn StatusBar(
    #[prop(default = Spacing::Sm)] gap: Spacing,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
            data-ui-gap=gap.token()
            role="status"
            aria-live="polite"
        >
            {children()}
        </footer>
    }
}
