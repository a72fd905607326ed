//! Building blocks shared by the content sections.

use leptos::html::Div;
use leptos::prelude::*;

use crate::config::RevealConfig;
use crate::hooks::use_reveal;
use crate::motion::{Entrance, Transition};

/// A block that plays `entrance` once, the first time it scrolls into view.
#[component]
pub fn Reveal(
    entrance: Entrance,
    reveal: RevealConfig,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(node, reveal.threshold);
    let timing = Transition::new(reveal.duration_secs, 0.0);

    view! {
        <div
            node_ref=node
            class=class
            style=move || entrance.pose(revealed.get()).css(&timing)
        >
            {children()}
        </div>
    }
}

/// Centered heading with a muted subtitle.
#[component]
pub fn SectionHeader(
    title: &'static str,
    subtitle: &'static str,
    reveal: RevealConfig,
) -> impl IntoView {
    view! {
        <Reveal entrance=Entrance::RISE reveal=reveal class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </Reveal>
    }
}
