use leptos::prelude::*;

use super::Reveal;
use crate::config::RevealConfig;
use crate::motion::Entrance;

/// Closing call to action; target of the `#contact` anchor.
#[component]
pub fn CallToAction(reveal: RevealConfig) -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <Reveal entrance=Entrance::RISE reveal=reveal class="container cta-card">
                <h2 class="section-title">"Ready to Start Your Project?"</h2>
                <p class="cta-text">"Let's create something amazing together"</p>
                <button type="button" class="btn btn-light btn-lg">
                    "Get in Touch"
                </button>
            </Reveal>
        </section>
    }
}
