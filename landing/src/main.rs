// DevAgency landing page, browser entry point.
// Build with `trunk build` from this directory.

mod logging;

use devagency_site::APP_ELEMENT_ID;
use devagency_site::client::{embedded_config, install_styles};
use devagency_site::components::LandingPage;
use leptos::prelude::*;
use tracing::{Level, info, warn};
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    });

    if let Err(err) = install_styles() {
        warn!(?err, "page stylesheet not installed");
    }
    let config = embedded_config();

    match take_app_root() {
        Some(root) => {
            leptos::mount::mount_to(root, move || view! { <LandingPage config=config /> }).forget();
            info!("mounted over prerendered page");
        }
        None => {
            leptos::mount::mount_to_body(move || view! { <LandingPage config=config /> });
            info!("mounted");
        }
    }
}

/// The prerendered `#app` container, emptied so the client render replaces
/// the static markup instead of duplicating it.
fn take_app_root() -> Option<web_sys::HtmlElement> {
    let root = web_sys::window()?
        .document()?
        .get_element_by_id(APP_ELEMENT_ID)?;
    root.set_inner_html("");
    root.dyn_into::<web_sys::HtmlElement>().ok()
}
