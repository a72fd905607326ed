use leptos::html::Div;
use leptos::prelude::*;

use crate::config::RevealConfig;
use crate::content::STATS;
use crate::hooks::use_reveal;
use crate::motion::{Entrance, Transition, block_style};

const STAT_ENTRANCE: Entrance = Entrance::ZoomIn { from: 0.5 };

/// Band of headline figures.
#[component]
pub fn Stats(reveal: RevealConfig) -> impl IntoView {
    let grid = NodeRef::<Div>::new();
    let revealed = use_reveal(grid, reveal.threshold);

    view! {
        <section class="section section-tinted">
            <div class="container">
                <div node_ref=grid class="stats-grid">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            let timing = Transition::staggered(&reveal, i);
                            view! {
                                <div
                                    class="stat"
                                    style=move || block_style(STAT_ENTRANCE, revealed.get(), None, timing)
                                >
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
