//! Hero: full-viewport intro over the animated shape.
//!
//! The content block fades and shrinks as the document scrolls
//! ([`HeroFade`]); its three children rise in on mount with 0.2 s steps.

use leptos::prelude::*;

use super::{HeroShape, Icon};
use crate::config::{FadeConfig, SceneConfig};
use crate::content::{HERO_SUBTITLE, HERO_TITLE};
use crate::hooks::{use_mounted, use_scroll_progress};
use crate::motion::{Entrance, HeroFade, Transition};
use crate::types::IconKind;

const INTRO_DURATION_SECS: f64 = 0.8;
const INTRO_STEP_SECS: f64 = 0.2;

#[component]
pub fn Hero(fade: FadeConfig, scene: SceneConfig) -> impl IntoView {
    let progress = use_scroll_progress();
    let mounted = use_mounted();

    let intro_style = move |step: u8| {
        let timing = Transition::new(INTRO_DURATION_SECS, f64::from(step) * INTRO_STEP_SECS);
        move || Entrance::RISE.pose(mounted.get()).css(&timing)
    };

    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <HeroShape scene=scene />
            </div>

            <div class="hero-content" style=move || HeroFade::at(progress.get(), &fade).css()>
                <h1 class="hero-title gradient-text" style=intro_style(0)>
                    {HERO_TITLE}
                </h1>
                <p class="hero-subtitle" style=intro_style(1)>
                    {HERO_SUBTITLE}
                </p>
                <div class="hero-actions" style=intro_style(2)>
                    <button type="button" class="btn btn-primary btn-lg">
                        "Start Your Project"
                        <Icon kind=IconKind::ArrowRight size="20" />
                    </button>
                    <button type="button" class="btn btn-outline btn-lg">
                        "View Our Work"
                    </button>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-indicator-dot"></div>
            </div>
        </section>
    }
}
