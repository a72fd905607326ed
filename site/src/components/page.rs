//! Page shell: local UI state and the fixed section order.

use leptos::prelude::*;

use super::{CallToAction, Footer, Hero, MobileMenu, Nav, Projects, Services, Stats};
use crate::config::SiteConfig;

/// UI state scoped to one mounted page.
#[derive(Clone, Copy, Debug)]
pub struct PageState {
    /// Whether the mobile navigation overlay is shown
    pub mobile_menu_open: RwSignal<bool>,
}

impl PageState {
    /// Menu closed.
    pub fn new() -> Self {
        Self {
            mobile_menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }

    pub fn close_mobile_menu(&self) {
        self.mobile_menu_open.set(false);
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole landing page.
///
/// Renders nav, mobile overlay (when open), hero, services, projects, stats,
/// call to action and footer, in that order.
#[component]
pub fn LandingPage(
    /// Presentation parameters; defaults reproduce the designed page
    #[prop(optional)]
    config: SiteConfig,
) -> impl IntoView {
    let state = PageState::new();
    let reveal = config.reveal;

    view! {
        <div class="page">
            <Nav state=state reveal=reveal />
            <MobileMenu state=state />
            <main>
                <Hero fade=config.hero_fade scene=config.scene.clone() />
                <Services reveal=reveal />
                <Projects reveal=reveal />
                <Stats reveal=reveal />
                <CallToAction reveal=reveal />
            </main>
            <Footer />
        </div>
    }
}
