//! Headless value ownership and affordance model behind the [`TextField`](crate::TextField)
//! primitive.
//!
//! Transitions return [`FieldEffect`] intents instead of calling back into the caller, so the
//! component decides when notifications and focus changes run and tests can observe them in
//! order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Who owns the displayed value.
pub enum ValueMode {
    /// The caller supplies the value and feeds back every change.
    Controlled,
    /// The field keeps its own buffer.
    Uncontrolled,
}

impl ValueMode {
    /// Resolves the mode from whether the caller supplied a value at construction.
    pub const fn resolve(has_value: bool) -> Self {
        if has_value {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Native input kinds supported by the field.
pub enum InputKind {
    /// Free text.
    #[default]
    Text,
    /// Email address.
    Email,
    /// Search query.
    Search,
    /// Masked value with an optional reveal toggle.
    Password,
}

impl InputKind {
    /// Value for the native `type` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Search => "search",
            Self::Password => "password",
        }
    }

    /// Whether characters are obscured unless revealed.
    pub const fn is_masked(self) -> bool {
        matches!(self, Self::Password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents produced by [`TextFieldState`] transitions.
pub enum FieldEffect {
    /// Invoke the caller's change handler with the proposed value.
    NotifyChange(String),
    /// Return keyboard focus to the native input.
    FocusInput,
    /// Rewrite the native input with the caller's value if it has diverged.
    SyncDisplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Per-render affordance flags that drive clear availability and layout.
pub struct FieldAffordances {
    /// Native input kind.
    pub kind: InputKind,
    /// Show a clear button while a value is present.
    pub clearable: bool,
    /// Offer the reveal toggle for masked kinds.
    pub password_toggle: bool,
    /// Field is disabled.
    pub disabled: bool,
    /// Loading indicator is shown.
    pub loading: bool,
    /// Leading icon slot is filled.
    pub leading_icon: bool,
    /// Trailing icon slot is filled.
    pub trailing_icon: bool,
}

impl FieldAffordances {
    /// Whether the clear button is shown for `current_value`.
    pub fn shows_clear(&self, current_value: &str) -> bool {
        self.clearable && !current_value.is_empty() && !self.disabled
    }

    /// Whether the reveal toggle is offered.
    pub fn shows_reveal_toggle(&self) -> bool {
        self.password_toggle && self.kind.is_masked()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Inner inset flags derived from the visible adornments.
pub struct FieldLayout {
    /// Leave room for the leading icon.
    pub leading_inset: bool,
    /// Leave room for trailing icons, spinner, or action buttons.
    pub trailing_inset: bool,
}

impl FieldLayout {
    /// Derives insets from the current affordances and displayed value.
    pub fn derive(affordances: &FieldAffordances, current_value: &str) -> Self {
        Self {
            leading_inset: affordances.leading_icon,
            trailing_inset: affordances.trailing_icon
                || affordances.loading
                || affordances.shows_clear(current_value)
                || affordances.shows_reveal_toggle(),
        }
    }
}

/// DOM id of the helper text element for the input `input_id`.
pub fn helper_id(input_id: &str) -> String {
    format!("{input_id}-help")
}

/// DOM id of the error text element for the input `input_id`.
pub fn error_id(input_id: &str) -> String {
    format!("{input_id}-error")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Supporting text linked to the input through `aria-describedby`.
pub enum Description {
    /// Helper text.
    Helper,
    /// Error text.
    Error,
}

impl Description {
    /// Picks the supporting text to show and link.
    ///
    /// Error text wins while the field is invalid and has an error message. Otherwise helper
    /// text is used when present.
    pub fn resolve(invalid: bool, has_error_message: bool, has_helper_text: bool) -> Option<Self> {
        if invalid && has_error_message {
            Some(Self::Error)
        } else if has_helper_text {
            Some(Self::Helper)
        } else {
            None
        }
    }

    /// DOM id of the described element for the input `input_id`.
    pub fn element_id(self, input_id: &str) -> String {
        match self {
            Self::Helper => helper_id(input_id),
            Self::Error => error_id(input_id),
        }
    }
}

/// Value for `aria-describedby`, if any supporting text applies.
pub fn described_by(
    input_id: &str,
    invalid: bool,
    has_error_message: bool,
    has_helper_text: bool,
) -> Option<String> {
    Description::resolve(invalid, has_error_message, has_helper_text)
        .map(|description| description.element_id(input_id))
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Value ownership and reveal state for one mounted text field.
pub struct TextFieldState {
    mode: ValueMode,
    buffer: String,
    revealed: bool,
}

impl TextFieldState {
    /// Creates state for a field, fixing the [`ValueMode`] for its lifetime.
    ///
    /// The buffer is seeded from `default_value` and is only read for display in
    /// [`ValueMode::Uncontrolled`].
    pub fn new(controlled: bool, default_value: Option<String>) -> Self {
        Self {
            mode: ValueMode::resolve(controlled),
            buffer: default_value.unwrap_or_default(),
            revealed: false,
        }
    }

    /// Value ownership mode.
    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    /// Internal buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether a masked value is currently shown in plain text.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Text to display. Controlled fields ignore the buffer entirely.
    pub fn display_value<'a>(&'a self, controlled_value: Option<&'a str>) -> &'a str {
        match self.mode {
            ValueMode::Controlled => controlled_value.unwrap_or_default(),
            ValueMode::Uncontrolled => &self.buffer,
        }
    }

    /// Effective native `type` attribute for `kind`.
    pub fn effective_type(&self, kind: InputKind) -> &'static str {
        if kind.is_masked() && self.revealed {
            InputKind::Text.token()
        } else {
            kind.token()
        }
    }

    /// Handles a keystroke proposing `next`.
    ///
    /// Uncontrolled fields write the buffer before the notification is emitted. Controlled
    /// fields follow the notification with [`FieldEffect::SyncDisplay`], so a keystroke the
    /// caller does not accept is reverted to the caller's value.
    pub fn propose(&mut self, next: String) -> Vec<FieldEffect> {
        match self.mode {
            ValueMode::Controlled => {
                vec![FieldEffect::NotifyChange(next), FieldEffect::SyncDisplay]
            }
            ValueMode::Uncontrolled => {
                self.buffer.clone_from(&next);
                vec![FieldEffect::NotifyChange(next)]
            }
        }
    }

    /// Handles the clear button.
    ///
    /// Does nothing unless the clear button is showing for the current display value.
    /// Controlled fields ask the caller for an empty value; uncontrolled fields empty their
    /// buffer without notifying.
    pub fn clear(
        &mut self,
        affordances: &FieldAffordances,
        controlled_value: Option<&str>,
    ) -> Vec<FieldEffect> {
        if !affordances.shows_clear(self.display_value(controlled_value)) {
            return Vec::new();
        }
        match self.mode {
            ValueMode::Controlled => {
                vec![FieldEffect::NotifyChange(String::new()), FieldEffect::FocusInput]
            }
            ValueMode::Uncontrolled => {
                self.buffer.clear();
                vec![FieldEffect::FocusInput]
            }
        }
    }

    /// Flips the reveal flag.
    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn clearable() -> FieldAffordances {
        FieldAffordances {
            clearable: true,
            ..FieldAffordances::default()
        }
    }

    #[test]
    fn uncontrolled_clear_empties_buffer_without_notifying() {
        let mut state = TextFieldState::new(false, Some("hello".to_string()));

        let effects = state.clear(&clearable(), None);

        assert_eq!(state.buffer(), "");
        assert_eq!(state.display_value(None), "");
        assert_eq!(effects, vec![FieldEffect::FocusInput]);
    }

    #[test]
    fn controlled_clear_asks_caller_and_keeps_display() {
        let mut state = TextFieldState::new(true, None);

        let effects = state.clear(&clearable(), Some("hello"));

        assert_eq!(
            effects,
            vec![
                FieldEffect::NotifyChange(String::new()),
                FieldEffect::FocusInput
            ]
        );
        assert_eq!(state.display_value(Some("hello")), "hello");
    }

    #[test]
    fn clear_is_inert_when_disabled_not_clearable_or_empty() {
        let mut state = TextFieldState::new(false, Some("hello".to_string()));
        let disabled = FieldAffordances {
            disabled: true,
            ..clearable()
        };

        assert_eq!(state.clear(&disabled, None), Vec::new());
        assert_eq!(state.clear(&FieldAffordances::default(), None), Vec::new());
        assert_eq!(state.buffer(), "hello");

        let mut empty = TextFieldState::new(true, None);
        assert_eq!(empty.clear(&clearable(), Some("")), Vec::new());
    }

    #[test]
    fn uncontrolled_change_updates_buffer_before_notifying() {
        let mut state = TextFieldState::new(false, None);

        let effects = state.propose("abc".to_string());

        assert_eq!(state.buffer(), "abc");
        assert_eq!(effects, vec![FieldEffect::NotifyChange("abc".to_string())]);
    }

    #[test]
    fn controlled_change_leaves_buffer_untouched() {
        let mut state = TextFieldState::new(true, Some("seed".to_string()));

        let effects = state.propose("abc".to_string());

        assert_eq!(state.buffer(), "seed");
        assert_eq!(state.display_value(Some("caller")), "caller");
        assert_eq!(
            effects,
            vec![
                FieldEffect::NotifyChange("abc".to_string()),
                FieldEffect::SyncDisplay
            ]
        );
    }

    #[test]
    fn rejected_controlled_keystroke_resyncs_to_caller_value() {
        let mut state = TextFieldState::new(true, None);

        // Caller keeps "abc" and ignores the proposed "abcx".
        let effects = state.propose("abcx".to_string());

        assert_eq!(effects.last(), Some(&FieldEffect::SyncDisplay));
        assert_eq!(state.display_value(Some("abc")), "abc");
        assert_eq!(state.buffer(), "");
    }

    #[test]
    fn mode_is_fixed_at_construction() {
        let controlled = TextFieldState::new(true, None);
        let uncontrolled = TextFieldState::new(false, Some("x".to_string()));

        assert_eq!(controlled.mode(), ValueMode::Controlled);
        assert_eq!(controlled.display_value(None), "");
        assert_eq!(uncontrolled.mode(), ValueMode::Uncontrolled);
        assert_eq!(uncontrolled.display_value(Some("ignored")), "x");
    }

    #[test]
    fn reveal_toggle_flips_between_masked_and_plain() {
        let mut state = TextFieldState::new(false, None);
        assert!(!state.revealed());
        assert_eq!(state.effective_type(InputKind::Password), "password");

        state.toggle_reveal();
        assert!(state.revealed());
        assert_eq!(state.effective_type(InputKind::Password), "text");

        state.toggle_reveal();
        assert!(!state.revealed());
        assert_eq!(state.effective_type(InputKind::Password), "password");
        assert_eq!(state.effective_type(InputKind::Email), "email");
    }

    #[test]
    fn reveal_toggle_is_offered_only_for_masked_kinds() {
        let password = FieldAffordances {
            kind: InputKind::Password,
            password_toggle: true,
            ..FieldAffordances::default()
        };
        let text = FieldAffordances {
            password_toggle: true,
            ..FieldAffordances::default()
        };
        let opted_out = FieldAffordances {
            password_toggle: false,
            ..password
        };

        assert!(password.shows_reveal_toggle());
        assert!(!text.shows_reveal_toggle());
        assert!(!opted_out.shows_reveal_toggle());
    }

    #[test]
    fn layout_insets_follow_visible_adornments() {
        let plain = FieldAffordances::default();
        assert_eq!(FieldLayout::derive(&plain, "value"), FieldLayout::default());

        let leading = FieldAffordances {
            leading_icon: true,
            ..plain
        };
        assert_eq!(
            FieldLayout::derive(&leading, ""),
            FieldLayout {
                leading_inset: true,
                trailing_inset: false,
            }
        );

        for trailing in [
            FieldAffordances {
                trailing_icon: true,
                ..plain
            },
            FieldAffordances {
                loading: true,
                ..plain
            },
            FieldAffordances {
                kind: InputKind::Password,
                password_toggle: true,
                ..plain
            },
        ] {
            assert!(FieldLayout::derive(&trailing, "").trailing_inset);
        }

        assert!(FieldLayout::derive(&clearable(), "value").trailing_inset);
        assert!(!FieldLayout::derive(&clearable(), "").trailing_inset);
    }

    #[test]
    fn error_text_wins_only_when_invalid_with_message() {
        assert_eq!(
            described_by("email", true, true, true),
            Some("email-error".to_string())
        );
        assert_eq!(
            described_by("email", false, true, true),
            Some("email-help".to_string())
        );
        assert_eq!(
            described_by("email", true, false, true),
            Some("email-help".to_string())
        );
        assert_eq!(described_by("email", true, false, false), None);
        assert_eq!(described_by("email", false, false, false), None);
    }
}
