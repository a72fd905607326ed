use leptos::html::Div;
use leptos::prelude::*;

use super::SectionHeader;
use crate::config::RevealConfig;
use crate::content::PROJECTS;
use crate::hooks::use_reveal;
use crate::motion::{Entrance, Hover, PointerState, Transition, block_style};
use crate::types::Project;

const CARD_ENTRANCE: Entrance = Entrance::ZoomIn { from: 0.9 };

/// Project showcase: gradient cards that zoom in and grow on hover.
#[component]
pub fn Projects(reveal: RevealConfig) -> impl IntoView {
    let grid = NodeRef::<Div>::new();
    let revealed = use_reveal(grid, reveal.threshold);

    view! {
        <section id="projects" class="section">
            <div class="container">
                <SectionHeader
                    title="Featured Projects"
                    subtitle="Success stories from our portfolio"
                    reveal=reveal
                />
                <div node_ref=grid class="projects-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <ProjectCard
                                    project=*project
                                    revealed=revealed
                                    timing=Transition::staggered(&reveal, i)
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, revealed: ReadSignal<bool>, timing: Transition) -> impl IntoView {
    let (pointer, set_pointer) = signal(PointerState::Untouched);
    let style = move || {
        block_style(
            CARD_ENTRANCE,
            revealed.get(),
            Some((Hover::CARD_GROW, pointer.get())),
            timing,
        )
    };
    let accent = format!("background: {}", project.accent.css());

    view! {
        <div
            class="project-card"
            class:hovered=move || pointer.get() == PointerState::Over
            style=style
            on:pointerenter=move |_| set_pointer.set(PointerState::Over)
            on:pointerleave=move |_| set_pointer.set(PointerState::Out)
        >
            <div class="project-accent" style=accent></div>
            <div class="project-shade"></div>
            <div class="project-body">
                <h3 class="project-name">{project.name}</h3>
                <p class="project-tech">{project.tech}</p>
            </div>
        </div>
    }
}
