//! # devagency-site
//!
//! The DevAgency landing page as a Leptos component library.
//!
//! One crate, two render targets:
//!
//! - **CSR** (`--no-default-features --features csr`): the page mounts in the
//!   browser, where effects wire up scroll and resize listeners, visibility
//!   observers and the WebGL hero shape. The `landing` bundle uses this.
//! - **SSR** (default `ssr` feature): [`render_document`] prerenders the full
//!   HTML page for static hosting and for tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use devagency_site::{render_document, SiteConfig};
//!
//! let html = render_document(&SiteConfig::default(), Some("/landing.js")).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Build Digital Excellence"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`], [`content`] - page data: services, projects, stats, links
//! - [`config`] - tunable presentation parameters ([`SiteConfig`])
//! - [`motion`] - scroll fade, entrance poses, stagger and hover math
//! - [`scene`] - sphere mesh, camera, per-frame transforms, WebGL renderer
//! - [`observe`], [`hooks`] - browser subscriptions bound to component lifetime
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`client`] - startup helpers for the browser bundle

pub mod client;
pub mod components;
pub mod config;
pub mod content;
pub mod hooks;
pub mod motion;
pub mod observe;
pub mod scene;
pub mod styles;
pub mod types;

pub use config::{ConfigError, SiteConfig};

/// Element the client bundle mounts into, replacing the prerendered page.
pub const APP_ELEMENT_ID: &str = "app";

#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete page as a static HTML document.
///
/// The validated `config` is embedded as JSON for the client bundle.
///
/// `script` is the URL of the bundle's JS module as emitted by
/// `wasm-bindgen --target web` (what Trunk builds). The document imports it
/// and calls its `init` export, which instantiates the wasm and runs `main`.
/// Without `script` the page is static and every block renders in its final
/// pose.
///
/// # Errors
///
/// [`ConfigError`] if `config` fails validation or cannot be serialized.
#[cfg(feature = "ssr")]
pub fn render_document(config: &SiteConfig, script: Option<&str>) -> Result<String, ConfigError> {
    use components::SiteDocument;

    config.validate()?;
    let config_json = script_safe(&config.to_json_string()?);
    let config = config.clone();
    let bootstrap = script.map(bootstrap_module).transpose()?;

    let html = Owner::new().with(move || {
        view! { <SiteDocument config=config config_json=config_json bootstrap=bootstrap /> }
            .to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    Ok(format!("<!DOCTYPE html>\n{html}"))
}

/// Inline module source that starts the bundle at `url`.
#[cfg(feature = "ssr")]
fn bootstrap_module(url: &str) -> Result<String, ConfigError> {
    let url = serde_json::to_string(url)?;
    Ok(script_safe(&format!("import init from {url};\nawait init();\n")))
}

/// Keep embedded JSON from closing its `<script>` element early.
#[cfg(feature = "ssr")]
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::{Hero, LandingPage, MobileMenu, PageState, Projects, Services, Stats};
    use crate::config::{FadeConfig, RevealConfig, SceneConfig};
    use crate::content::{PROJECTS, SERVICES, STATS, dangling_anchors};
    use pretty_assertions::assert_eq;

    fn render(view: impl FnOnce() -> String) -> String {
        Owner::new().with(view)
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| {
                html.find(needle)
                    .unwrap_or_else(|| panic!("`{needle}` not rendered"))
            })
            .collect()
    }

    fn assert_in_order(html: &str, needles: &[&str]) {
        let found = positions(html, needles);
        let mut sorted = found.clone();
        sorted.sort_unstable();
        assert_eq!(found, sorted, "out of order: {needles:?}");
    }

    #[test]
    fn renders_document_shell() {
        let html = render_document(&SiteConfig::default(), None).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains(r#"id="site-css""#));
        assert!(html.contains(r#"id="site-config""#));
        assert!(html.contains(r#"id="app""#));
        assert!(!html.contains(r#"type="module""#));
    }

    #[test]
    fn document_starts_client_bundle_when_given() {
        let html = render_document(&SiteConfig::default(), Some("/landing.js")).unwrap();
        assert!(html.contains(r#"<script type="module">import init from "/landing.js";"#));
        assert!(html.contains("await init();"));
    }

    #[test]
    fn bootstrap_quotes_the_bundle_url() {
        assert_eq!(
            bootstrap_module(r#"/a"b</script>.js"#).unwrap(),
            "import init from \"/a\\\"b<\\/script>.js\";\nawait init();\n"
        );
    }

    fn hero_title_style(html: &str) -> &str {
        let tag = r#"class="hero-title gradient-text" style=""#;
        let start = html.find(tag).expect("hero title rendered") + tag.len();
        let end = start + html[start..].find('"').expect("style closed");
        &html[start..end]
    }

    #[test]
    fn static_document_shows_every_block() {
        let html = render_document(&SiteConfig::default(), None).unwrap();

        assert!(
            hero_title_style(&html).starts_with("opacity: 1; transform: translate(0px, 0px) scale(1)")
        );
        assert_eq!(html.matches(r#"style="opacity: 0;"#).count(), 0);
        assert!(html.contains("opacity: 1; transform: scale(1)"));
    }

    #[test]
    fn client_document_leaves_entrances_to_the_bundle() {
        let html = render_document(&SiteConfig::default(), Some("/landing.js")).unwrap();

        assert!(
            hero_title_style(&html).starts_with("opacity: 0; transform: translate(0px, 30px)")
        );
        assert!(html.matches(r#"style="opacity: 0;"#).count() > 0);
    }

    #[test]
    fn document_rejects_invalid_config() {
        let mut config = SiteConfig::default();
        config.reveal.threshold = 2.0;
        let err = render_document(&config, None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn embedded_json_cannot_close_script() {
        assert_eq!(script_safe(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }

    #[test]
    fn sections_render_in_page_order() {
        let html = render(|| view! { <LandingPage /> }.to_html());
        assert_in_order(
            &html,
            &[
                r#"class="nav""#,
                r#"class="hero""#,
                r#"id="services""#,
                r#"id="projects""#,
                r#"class="stats-grid""#,
                r#"id="contact""#,
                r#"class="footer""#,
            ],
        );
    }

    #[test]
    fn about_anchor_is_linked_but_has_no_section() {
        let html = render(|| view! { <LandingPage /> }.to_html());
        assert!(html.contains(r##"href="#about""##));
        for anchor in dangling_anchors() {
            assert!(!html.contains(&format!(r#"id="{anchor}""#)));
        }
        assert_eq!(html.matches(r#"id="contact""#).count(), 1);
    }

    #[test]
    fn renders_four_service_cards_in_order() {
        let html = render(|| view! { <Services reveal=RevealConfig::default() /> }.to_html());

        assert_eq!(html.matches(r#"class="card service-card""#).count(), 4);
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_in_order(&html, &titles);
        for service in SERVICES {
            assert!(html.contains(service.description));
            assert!(html.contains(&format!(r#"data-icon="{}""#, service.icon.name())));
        }
    }

    #[test]
    fn renders_four_projects_with_tech() {
        let html = render(|| view! { <Projects reveal=RevealConfig::default() /> }.to_html());

        assert_eq!(html.matches(r#"class="project-name""#).count(), 4);
        for project in PROJECTS {
            assert!(html.contains(project.name));
            assert!(html.contains(project.tech));
            assert!(html.contains(&project.accent.css()));
        }
    }

    #[test]
    fn stat_values_render_next_to_labels() {
        let html = render(|| view! { <Stats reveal=RevealConfig::default() /> }.to_html());

        for stat in STATS {
            assert_in_order(&html, &[stat.value, stat.label]);
        }
    }

    #[test]
    fn blocks_start_hidden_before_reveal() {
        let html = render(|| view! { <Stats reveal=RevealConfig::default() /> }.to_html());
        assert_eq!(html.matches("opacity: 0; transform: translate(0px, 0px) scale(0.5)").count(), 4);
    }

    #[test]
    fn hero_starts_opaque_at_full_size() {
        let html = render(|| {
            view! { <Hero fade=FadeConfig::default() scene=SceneConfig::default() /> }.to_html()
        });
        assert!(html.contains("opacity: 1; transform: scale(1)"));
        assert!(html.contains("Build Digital Excellence"));
        assert!(html.contains("Start Your Project"));
        assert!(html.contains("View Our Work"));
        assert!(html.contains(r#"class="hero-canvas""#));
    }

    #[test]
    fn menu_is_closed_on_load() {
        let html = render(|| view! { <LandingPage /> }.to_html());
        assert!(!html.contains(r#"class="mobile-menu""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"data-icon="menu""#));
    }

    #[test]
    fn open_menu_shows_four_links() {
        let html = render(|| {
            let state = PageState::new();
            state.toggle_mobile_menu();
            view! { <MobileMenu state=state /> }.to_html()
        });

        assert_eq!(html.matches(r#"class="mobile-menu-link""#).count(), 4);
        assert!(html.contains(r##"href="#contact""##));
    }

    #[test]
    fn menu_state_toggles_and_closes() {
        render(|| {
            let state = PageState::new();
            assert!(!state.mobile_menu_open.get_untracked());
            state.toggle_mobile_menu();
            assert!(state.mobile_menu_open.get_untracked());
            state.close_mobile_menu();
            assert!(!state.mobile_menu_open.get_untracked());
            state.toggle_mobile_menu();
            state.toggle_mobile_menu();
            assert!(!state.mobile_menu_open.get_untracked());
            String::new()
        });
    }
}
