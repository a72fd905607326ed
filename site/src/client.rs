//! Browser startup helpers for the client bundle.

use tracing::{debug, warn};
use wasm_bindgen::JsValue;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::styles::{SITE_CSS, STYLE_ELEMENT_ID};

/// Config embedded by the static export, or defaults when the page was not
/// prerendered or the block is unreadable.
pub fn embedded_config() -> SiteConfig {
    let Some(json) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
    else {
        debug!("no embedded config, using defaults");
        return SiteConfig::default();
    };

    match SiteConfig::from_json_str(&json) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "embedded config rejected, using defaults");
            SiteConfig::default()
        }
    }
}

/// Add the page stylesheet to `<head>` unless the document already has it.
pub fn install_styles() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(SITE_CSS));
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&style)?;
    debug!("stylesheet installed");
    Ok(())
}
