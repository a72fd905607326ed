//! SVG glyphs for the page.
//!
//! Stroke icons on a 24x24 grid (Lucide style). [`IconKind`] is the closed
//! set of glyphs; [`icon_path`] maps each one to its path data.

use leptos::prelude::*;

use crate::types::IconKind;

/// Path data (`d` attribute) for `kind`.
pub const fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Code => "M16 18l6-6-6-6M8 6l-6 6 6 6",
        IconKind::Smartphone => {
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM12 18h.01"
        }
        IconKind::Zap => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
        IconKind::Globe => {
            "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0zM12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20M2 12h20"
        }
        IconKind::ArrowRight => "M5 12h14M12 5l7 7-7 7",
        IconKind::Menu => "M4 6h16M4 12h16M4 18h16",
        IconKind::Close => "M18 6L6 18M6 6l12 12",
    }
}

/// Renders an inline stroke icon.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Zap size="28" /> }
/// ```
#[component]
pub fn Icon(
    /// Which glyph to draw
    kind: IconKind,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=kind.name()
            aria-hidden="true"
        >
            <path d=icon_path(kind)></path>
        </svg>
    }
}
