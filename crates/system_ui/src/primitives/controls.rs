use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::text_field::{
    described_by, error_id, helper_id, Description, FieldAffordances, FieldEffect, FieldLayout,
    InputKind, TextFieldState,
};

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(1);

fn next_field_id() -> String {
    format!(
        "ui-text-field-{}",
        NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed)
    )
}

#[component]
/// Text button. `selected` marks the current choice in a group of buttons.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || selected.get().to_string()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || if selected.get() { "selected" } else { "idle" }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Compact icon-only action button used for field affordances.
pub fn IconButton(
    #[prop(into)] icon: MaybeSignal<IconName>,
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    #[prop(default = ControlSize::Sm)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Renders `aria-pressed` for toggle buttons when set.
    #[prop(optional, into)]
    pressed: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || pressed.as_ref().map(|pressed| pressed.get().to_string())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || view! { <Icon icon=icon.get() size=IconSize::Sm /> }}
        </button>
    }
}

#[component]
/// Shared checkbox input for binary choices and row selection.
pub fn CheckboxField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-checkbox", layout_class)
            type="checkbox"
            aria-label=move || aria_label.get()
            prop:checked=move || checked.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-selected=move || bool_token(checked.get())
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
        />
    }
}

#[component]
/// Labeled text input with clear, password reveal, icon, and loading affordances.
///
/// Passing `value` makes the field controlled for its whole lifetime: the caller owns the
/// displayed text and must feed back every value delivered to `on_change`. Without `value`
/// the field keeps its own buffer, seeded from `default_value`. Empty `helper_text` and
/// `error_message` are treated as absent.
pub fn TextField(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(default = FieldVariant::Outlined)] variant: FieldVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = InputKind::Text)] input_type: InputKind,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] clearable: bool,
    /// Offers the reveal toggle when `input_type` is [`InputKind::Password`].
    #[prop(default = true)]
    password_toggle: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    /// Caller-owned value. Supplying it selects controlled mode.
    #[prop(optional, into)]
    value: Option<MaybeSignal<String>>,
    /// Initial buffer contents for uncontrolled mode.
    #[prop(optional, into)]
    default_value: Option<String>,
    #[prop(optional)] name: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(next_field_id);
    // Empty copy renders nothing.
    let helper_text = helper_text.filter(|text| !text.is_empty());
    let error_message = error_message.filter(|message| !message.is_empty());
    let controlled_value = value.map(|value| Signal::derive(move || value.get()));
    let state = create_rw_signal(TextFieldState::new(
        controlled_value.is_some(),
        default_value,
    ));

    let display_value = Signal::derive(move || {
        let controlled = controlled_value.map(|value| value.get());
        state.with(|state| state.display_value(controlled.as_deref()).to_string())
    });
    let affordances = move || FieldAffordances {
        kind: input_type,
        clearable,
        password_toggle,
        disabled: disabled.get(),
        loading: loading.get(),
        leading_icon: leading_icon.is_some(),
        trailing_icon: trailing_icon.is_some(),
    };
    let layout = Signal::derive(move || FieldLayout::derive(&affordances(), &display_value.get()));

    let has_error_message = error_message.is_some();
    let has_helper_text = helper_text.is_some();
    let description =
        Signal::derive(move || Description::resolve(invalid.get(), has_error_message, has_helper_text));

    let run_effects = move |effects: Vec<FieldEffect>| {
        for effect in effects {
            match effect {
                FieldEffect::NotifyChange(next) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(next);
                    }
                }
                FieldEffect::FocusInput => {
                    if let Some(input) = node_ref.get_untracked() {
                        if let Err(err) = input.focus() {
                            logging::warn!("text field focus failed: {err:?}");
                        }
                    }
                }
                FieldEffect::SyncDisplay => {
                    let (Some(input), Some(value)) = (node_ref.get_untracked(), controlled_value)
                    else {
                        continue;
                    };
                    let expected = value.get_untracked();
                    if input.value() != expected {
                        input.set_value(&expected);
                    }
                }
            }
        }
    };

    let handle_input = move |ev: web_sys::Event| {
        let next = event_target_value(&ev);
        let effects = state
            .try_update(|state| state.propose(next))
            .unwrap_or_default();
        run_effects(effects);
    };

    let handle_clear = move |_: MouseEvent| {
        let current = affordances();
        let controlled = controlled_value.map(|value| value.get_untracked());
        let effects = state
            .try_update(|state| state.clear(&current, controlled.as_deref()))
            .unwrap_or_default();
        run_effects(effects);
    };

    let revealed = Signal::derive(move || state.with(TextFieldState::revealed));
    let offers_reveal = FieldAffordances {
        kind: input_type,
        password_toggle,
        ..FieldAffordances::default()
    }
    .shows_reveal_toggle();

    let label_for = input_id.clone();
    let aria_id = input_id.clone();
    let helper_element_id = helper_id(&input_id);
    let error_element_id = error_id(&input_id);

    view! {
        <div
            class=merge_layout_class("ui-text-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-invalid=move || bool_token(invalid.get())
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-loading=move || bool_token(loading.get())
        >
            {label.map(|label| view! {
                <label for=label_for data-ui-slot="label">{label}</label>
            })}
            <div data-ui-slot="control">
                {leading_icon.map(|icon| view! {
                    <span data-ui-slot="leading-icon"><Icon icon size=IconSize::Sm /></span>
                })}
                <input
                    class="ui-field"
                    id=input_id
                    node_ref=node_ref
                    type=move || state.with(|state| state.effective_type(input_type))
                    name=name
                    placeholder=placeholder
                    autocomplete=autocomplete
                    prop:value=move || display_value.get()
                    disabled=move || disabled.get()
                    aria-invalid=move || invalid.get().then_some("true")
                    aria-describedby=move || {
                        described_by(&aria_id, invalid.get(), has_error_message, has_helper_text)
                    }
                    data-ui-slot="input"
                    data-ui-leading-inset=move || bool_token(layout.get().leading_inset)
                    data-ui-trailing-inset=move || bool_token(layout.get().trailing_inset)
                    on:input=handle_input
                />
                <span data-ui-slot="adornments">
                    {trailing_icon.map(|icon| view! {
                        <span data-ui-slot="trailing-icon"><Icon icon size=IconSize::Sm /></span>
                    })}
                    <Show when=move || loading.get() fallback=|| ()>
                        <span data-ui-slot="spinner" aria-hidden="true"></span>
                    </Show>
                </span>
                <span data-ui-slot="actions">
                    <Show
                        when=move || affordances().shows_clear(&display_value.get())
                        fallback=|| ()
                    >
                        <IconButton
                            icon=IconName::Dismiss
                            aria_label="Clear input"
                            ui_slot="clear"
                            on_click=Callback::new(handle_clear)
                        />
                    </Show>
                    {offers_reveal.then(|| view! {
                        <IconButton
                            icon=Signal::derive(move || {
                                if revealed.get() { IconName::EyeOff } else { IconName::Eye }
                            })
                            aria_label=Signal::derive(move || {
                                if revealed.get() { "Hide password" } else { "Show password" }
                                    .to_string()
                            })
                            pressed=revealed
                            ui_slot="reveal"
                            on_click=Callback::new(move |_| state.update(TextFieldState::toggle_reveal))
                        />
                    })}
                </span>
            </div>
            {move || match description.get() {
                Some(Description::Error) => error_message.clone().map(|message| {
                    view! {
                        <p id=error_element_id.clone() data-ui-slot="error" data-ui-tone=TextTone::Danger.token()>
                            {message}
                        </p>
                    }
                }),
                Some(Description::Helper) => helper_text.clone().map(|text| {
                    view! {
                        <p id=helper_element_id.clone() data-ui-slot="helper" data-ui-tone=TextTone::Secondary.token()>
                            {text}
                        </p>
                    }
                }),
                None => None,
            }}
        </div>
    }
}
