//! Leptos components for the landing page.
//!
//! Every component renders both in the browser (CSR) and on the server
//! (SSR, used for static export and tests). Browser-only work (observers,
//! listeners, WebGL) happens inside effects, which never run during SSR.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (ssr only)
//! └── LandingPage
//!     ├── Nav
//!     ├── MobileMenu (while open)
//!     ├── Hero
//!     │   └── HeroShape
//!     ├── Services
//!     │   ├── SectionHeader
//!     │   └── ServiceCard x4
//!     ├── Projects
//!     │   ├── SectionHeader
//!     │   └── ProjectCard x4
//!     ├── Stats
//!     ├── CallToAction
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use devagency_site::components::LandingPage;
//! use devagency_site::SiteConfig;
//!
//! mount_to_body(|| view! { <LandingPage config=SiteConfig::default() /> });
//! ```

mod cta;
#[cfg(feature = "ssr")]
mod document;
mod footer;
mod hero;
mod hero_shape;
mod icons;
mod nav;
mod page;
mod projects;
mod section;
mod services;
mod stats;

pub use cta::CallToAction;
#[cfg(feature = "ssr")]
pub use document::SiteDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use hero_shape::HeroShape;
pub use icons::{Icon, icon_path};
pub use nav::{MobileMenu, Nav};
pub use page::{LandingPage, PageState};
pub use projects::Projects;
pub use section::{Reveal, SectionHeader};
pub use services::Services;
pub use stats::Stats;
