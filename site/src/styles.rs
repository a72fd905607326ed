//! CSS for the landing page.
//!
//! One stylesheet, inlined into the prerendered document and injected by the
//! client bundle when it is missing (see [`crate::client::install_styles`]).
//!
//! # Customization
//!
//! ```rust
//! use devagency_site::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```
//!
//! Motion is not styled here: entrance, hover and scroll-fade poses are
//! computed in [`crate::motion`] and applied as inline styles.

/// Element id of the injected `<style>` block.
pub const STYLE_ELEMENT_ID: &str = "site-css";

/// Complete CSS for the page: dark theme, indigo/purple accents.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #000000;
    --text: #ffffff;
    --text-muted: #9ca3af;
    --text-soft: #d1d5db;
    --border: rgba(255, 255, 255, 0.1);
    --surface: rgba(255, 255, 255, 0.05);
    --surface-hover: rgba(255, 255, 255, 0.1);
    --indigo-400: #818cf8;
    --indigo-500: #6366f1;
    --indigo-600: #4f46e5;
    --indigo-700: #4338ca;
    --purple-500: #a855f7;
    --purple-600: #9333ea;
    --pink-500: #ec4899;
    --radius-lg: 1rem;
    --radius-xl: 1.5rem;
    --font: "Inter", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }

h1, h2, h3, p { margin: 0; }

.page { overflow-x: hidden; }

.container {
    width: 100%;
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.gradient-text {
    background: linear-gradient(to right, var(--indigo-500), var(--purple-500));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border: none;
    border-radius: 9999px;
    padding: 0.5rem 1.5rem;
    font: inherit;
    font-weight: 600;
    color: inherit;
    cursor: pointer;
    transition: background-color 0.2s, transform 0.2s;
}
.btn-lg { padding: 1rem 2rem; font-size: 1.125rem; }
.btn-lg:hover { transform: scale(1.05); }
.btn-primary { background: var(--indigo-600); }
.btn-primary:hover { background: var(--indigo-700); }
.btn-outline { background: transparent; border: 2px solid var(--indigo-600); }
.btn-outline:hover { background: rgba(79, 70, 229, 0.1); }
.btn-light { background: #ffffff; color: var(--indigo-600); }
.btn-light:hover { background: #f3f4f6; }

/* Navigation */

.nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border);
}
.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 1rem;
    padding-bottom: 1rem;
}
.nav-brand { font-size: 1.5rem; font-weight: 700; }
.nav-links { display: none; align-items: center; gap: 2rem; }
.nav-link { transition: color 0.2s; }
.nav-link:hover { color: var(--indigo-400); }
.nav-toggle {
    display: inline-flex;
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
    padding: 0;
}

/* Mobile menu */

.mobile-menu {
    position: fixed;
    inset: 0;
    z-index: 40;
    background: var(--bg);
    padding-top: 5rem;
    animation: menu-slide-in 0.3s ease-out;
}
.mobile-menu-links {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2rem;
    font-size: 1.5rem;
}
.mobile-menu-link:hover { color: var(--indigo-400); }

@keyframes menu-slide-in {
    from { opacity: 0; transform: translateX(100%); }
    to { opacity: 1; transform: translateX(0); }
}

/* Hero */

.hero {
    position: relative;
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}
.hero-backdrop { position: absolute; inset: 0; z-index: 0; }
.hero-canvas { display: block; width: 100%; height: 100%; touch-action: none; cursor: grab; }
.hero-canvas:active { cursor: grabbing; }
.hero-content {
    position: relative;
    z-index: 10;
    text-align: center;
    padding: 0 1.5rem;
    pointer-events: none;
}
.hero-content > * { pointer-events: auto; }
.hero-title {
    font-size: 3rem;
    font-weight: 700;
    line-height: 1.1;
    margin-bottom: 1.5rem;
    background: linear-gradient(to right, var(--indigo-500), var(--purple-500), var(--pink-500));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.hero-subtitle {
    font-size: 1.25rem;
    color: var(--text-soft);
    max-width: 42rem;
    margin: 0 auto 2rem;
}
.hero-actions {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    justify-content: center;
}
.scroll-indicator {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    width: 1.5rem;
    height: 2.5rem;
    margin-left: -0.75rem;
    border: 2px solid rgba(255, 255, 255, 0.3);
    border-radius: 9999px;
    display: flex;
    justify-content: center;
    animation: bounce 1s infinite;
}
.scroll-indicator-dot {
    width: 0.25rem;
    height: 0.75rem;
    margin-top: 0.5rem;
    background: rgba(255, 255, 255, 0.5);
    border-radius: 9999px;
}

@keyframes bounce {
    0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
    50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

/* Sections */

.section { padding: 5rem 1.5rem; }
.section-tinted { background: linear-gradient(to bottom, #000000, rgba(30, 27, 75, 0.2)); }
.section-header { text-align: center; margin-bottom: 4rem; }
.section-title { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
.section-subtitle { color: var(--text-muted); font-size: 1.125rem; }

.card {
    background: var(--surface);
    backdrop-filter: blur(4px);
    border: 1px solid var(--border);
    border-radius: var(--radius-lg);
    padding: 1.5rem;
}
.card:hover { background: var(--surface-hover); }
.card-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
.card-text { color: var(--text-muted); }

.services-grid { display: grid; gap: 2rem; grid-template-columns: 1fr; }
.service-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 3.5rem;
    height: 3.5rem;
    margin-bottom: 1rem;
    border-radius: 0.75rem;
    background: rgba(79, 70, 229, 0.2);
    color: var(--indigo-400);
}

.projects-grid { display: grid; gap: 2rem; grid-template-columns: 1fr; }
.project-card {
    position: relative;
    height: 16rem;
    border-radius: var(--radius-lg);
    overflow: hidden;
    cursor: pointer;
}
.project-accent { position: absolute; inset: 0; opacity: 0.8; transition: opacity 0.3s; }
.project-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.4); transition: background-color 0.3s; }
.project-card.hovered .project-accent { opacity: 1; }
.project-card.hovered .project-shade { background: rgba(0, 0, 0, 0.2); }
.project-body {
    position: absolute;
    inset: 0;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
}
.project-name { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
.project-tech { color: #e5e7eb; }

.stats-grid { display: grid; gap: 2rem; grid-template-columns: 1fr; text-align: center; }
.stat-value { font-size: 2.25rem; font-weight: 700; color: var(--indigo-400); margin-bottom: 0.5rem; }
.stat-label { color: var(--text-muted); }

.cta-card {
    text-align: center;
    background: linear-gradient(to right, var(--indigo-600), var(--purple-600));
    border-radius: var(--radius-xl);
    padding: 3rem;
}
.cta-text { font-size: 1.25rem; margin-bottom: 2rem; color: #e0e7ff; }

/* Footer */

.footer { padding: 3rem 1.5rem; border-top: 1px solid var(--border); }
.footer-row {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}
.footer-brand { font-size: 1.5rem; font-weight: 700; }
.footer-links { display: flex; gap: 1.5rem; color: var(--text-muted); }
.footer-link { transition: color 0.2s; }
.footer-link:hover { color: var(--text); }
.footer-copyright { text-align: center; color: #6b7280; margin-top: 2rem; }

/* Responsive */

@media (min-width: 640px) {
    .hero-actions { flex-direction: row; }
}

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-toggle, .mobile-menu { display: none; }
    .hero-title { font-size: 4.5rem; }
    .hero-subtitle { font-size: 1.5rem; }
    .section-title { font-size: 3rem; }
    .services-grid, .projects-grid { grid-template-columns: repeat(2, 1fr); }
    .stats-grid { grid-template-columns: repeat(4, 1fr); }
    .stat-value { font-size: 3rem; }
    .cta-card { padding: 4rem; }
    .footer-row { flex-direction: row; }
}

@media (min-width: 1024px) {
    .services-grid { grid-template-columns: repeat(4, 1fr); }
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    .scroll-indicator, .mobile-menu { animation: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_styles_every_section() {
        for class in [
            ".nav", ".mobile-menu", ".hero", ".services-grid", ".projects-grid",
            ".stats-grid", ".cta-card", ".footer",
        ] {
            assert!(SITE_CSS.contains(class), "missing {class}");
        }
    }

    #[test]
    fn css_cannot_close_its_style_element() {
        assert!(!SITE_CSS.contains("</"));
    }
}
