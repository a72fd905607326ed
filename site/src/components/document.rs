//! Root document component: the complete prerendered HTML page.

use leptos::prelude::*;

use super::LandingPage;
use crate::APP_ELEMENT_ID;
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::content::{BRAND, HERO_SUBTITLE, HERO_TITLE};
use crate::hooks::provide_settled_motion;
use crate::styles::{SITE_CSS, STYLE_ELEMENT_ID};

/// The complete HTML document.
///
/// `config_json` and `bootstrap` are embedded verbatim and must already be
/// safe inside a `<script>` element (see [`crate::render_document`]). Without
/// a bootstrap module nothing animates the page, so every block is rendered
/// in its final pose.
#[component]
pub fn SiteDocument(
    config: SiteConfig,
    config_json: String,
    /// Inline module that starts the client bundle; `None` for a static page
    bootstrap: Option<String>,
) -> impl IntoView {
    if bootstrap.is_none() {
        provide_settled_motion();
    }
    let title = format!("{BRAND} | {HERO_TITLE}");

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=HERO_SUBTITLE />
                <title>{title}</title>
                <style id=STYLE_ELEMENT_ID inner_html=SITE_CSS></style>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=config_json></script>
            </head>
            <body>
                <div id=APP_ELEMENT_ID>
                    <LandingPage config=config />
                </div>
                {bootstrap.map(|source| view! { <script type="module" inner_html=source></script> })}
            </body>
        </html>
    }
}
