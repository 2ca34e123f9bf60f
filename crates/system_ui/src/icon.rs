//! Centralized icon catalog for the shared primitives.
//!
//! Primitives and apps reference icons by semantic [`IconName`] and render them through
//! [`Icon`], so no component embeds raw SVG markup. Glyphs follow the Fluent UI System
//! Icons regular 24px set.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by primitives and apps.
pub enum IconName {
    /// Dismiss/clear glyph.
    Dismiss,
    /// Visible/reveal glyph.
    Eye,
    /// Hidden/mask glyph.
    EyeOff,
    /// Ascending sort indicator.
    ChevronUp,
    /// Descending sort indicator.
    ChevronDown,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Dismiss => "dismiss",
            Self::Eye => "eye",
            Self::EyeOff => "eye-off",
            Self::ChevronUp => "chevron-up",
            Self::ChevronDown => "chevron-down",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Eye => {
                r#"<path d="M12 9.01a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3ZM12 5.5c4.61 0 8.59 3.15 9.7 7.56a.75.75 0 1 1-1.46.37 8.5 8.5 0 0 0-16.48 0 .75.75 0 0 1-1.46-.36A10 10 0 0 1 12 5.5Z"/>"#
            }
            Self::EyeOff => {
                r#"<path d="M2.22 2.22a.75.75 0 0 0-.07.98l.07.08 4.03 4.03a10 10 0 0 0-3.95 5.75.75.75 0 0 0 1.46.36 8.5 8.5 0 0 1 3.53-4.98l1.81 1.8a4 4 0 0 0 5.6 5.62l5.92 5.92a.75.75 0 0 0 1.13-.98l-.07-.08L3.28 2.22a.75.75 0 0 0-1.06 0Zm7.98 9.05 3.54 3.53a2.5 2.5 0 0 1-3.54-3.53ZM12 5.5c-1 0-1.97.15-2.88.43l1.24 1.24a8.5 8.5 0 0 1 9.88 6.27.75.75 0 0 0 1.46-.36A10 10 0 0 0 12 5.5Zm.2 3.51 3.8 3.8a4 4 0 0 0-3.8-3.8Z"/>"#
            }
            Self::ChevronUp => {
                r#"<path d="M4.22 15.53c.3.3.77.3 1.06 0L12 8.81l6.72 6.72a.75.75 0 1 0 1.06-1.06l-7.25-7.25a.75.75 0 0 0-1.06 0l-7.25 7.25c-.3.3-.3.77 0 1.06Z"/>"#
            }
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (field adornments, sort indicators).
    #[default]
    Sm,
    /// 20px medium icon.
    Md,
    /// 24px large icon.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the shared catalog. Icons are decorative and hidden from assistive tech.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
