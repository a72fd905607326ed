use leptos::html::Div;
use leptos::prelude::*;

use super::{Icon, SectionHeader};
use crate::config::RevealConfig;
use crate::content::SERVICES;
use crate::hooks::use_reveal;
use crate::motion::{Entrance, Hover, PointerState, Transition, block_style};
use crate::types::Service;

/// Services grid. Cards rise in with a stagger once the grid is visible and
/// lift while hovered.
#[component]
pub fn Services(reveal: RevealConfig) -> impl IntoView {
    let grid = NodeRef::<Div>::new();
    let revealed = use_reveal(grid, reveal.threshold);

    view! {
        <section id="services" class="section section-tinted">
            <div class="container">
                <SectionHeader
                    title="Our Services"
                    subtitle="Comprehensive solutions for your digital needs"
                    reveal=reveal
                />
                <div node_ref=grid class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            view! {
                                <ServiceCard
                                    service=*service
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
fn ServiceCard(service: Service, revealed: ReadSignal<bool>, timing: Transition) -> impl IntoView {
    let (pointer, set_pointer) = signal(PointerState::Untouched);
    let style = move || {
        block_style(
            Entrance::RISE,
            revealed.get(),
            Some((Hover::CARD_LIFT, pointer.get())),
            timing,
        )
    };

    view! {
        <div
            class="card service-card"
            style=style
            on:pointerenter=move |_| set_pointer.set(PointerState::Over)
            on:pointerleave=move |_| set_pointer.set(PointerState::Out)
        >
            <div class="service-icon">
                <Icon kind=service.icon size="28" />
            </div>
            <h3 class="card-title">{service.title}</h3>
            <p class="card-text">{service.description}</p>
        </div>
    }
}
