use leptos::prelude::*;

use super::{Icon, PageState};
use crate::config::RevealConfig;
use crate::content::{BRAND, NAV_ITEMS};
use crate::hooks::use_mounted;
use crate::motion::{Entrance, Transition, stagger_delay};
use crate::types::IconKind;

#[component]
pub fn Nav(state: PageState, reveal: RevealConfig) -> impl IntoView {
    let mounted = use_mounted();
    let duration = reveal.duration_secs;

    let brand_style = move || {
        Entrance::SlideIn { dx: -20.0 }
            .pose(mounted.get())
            .css(&Transition::new(duration, 0.0))
    };
    // The button follows the four links.
    let cta_style = move || {
        Entrance::ZoomIn { from: 0.8 }
            .pose(mounted.get())
            .css(&Transition::new(duration, stagger_delay(NAV_ITEMS.len(), reveal.stagger_secs)))
    };

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <div class="nav-brand gradient-text" style=brand_style>
                    {BRAND}
                </div>

                <div class="nav-links">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let timing = Transition::new(duration, stagger_delay(i, reveal.stagger_secs));
                            view! {
                                <a
                                    href=item.href()
                                    class="nav-link"
                                    style=move || Entrance::DROP.pose(mounted.get()).css(&timing)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button type="button" class="btn btn-primary nav-cta" style=cta_style>
                        "Get Started"
                    </button>
                </div>

                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || state.mobile_menu_open.get().to_string()
                    on:click=move |_| state.toggle_mobile_menu()
                >
                    {move || {
                        if state.mobile_menu_open.get() {
                            view! { <Icon kind=IconKind::Close /> }.into_any()
                        } else {
                            view! { <Icon kind=IconKind::Menu /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </nav>
    }
}

/// Full-screen link list for narrow viewports. Choosing a link closes it;
/// the browser then scrolls to the anchor.
#[component]
pub fn MobileMenu(state: PageState) -> impl IntoView {
    view! {
        <Show when=move || state.mobile_menu_open.get()>
            <div class="mobile-menu" role="dialog" aria-label="Site navigation">
                <div class="mobile-menu-links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href()
                                    class="mobile-menu-link"
                                    on:click=move |_| state.close_mobile_menu()
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </Show>
    }
}
