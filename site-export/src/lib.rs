//! Static export of the DevAgency landing page.
//!
//! Loads an optional TOML config, prerenders the page with
//! [`devagency_site::render_document`] and writes `index.html`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use devagency_site::{SiteConfig, render_document};
use tracing::{debug, info};

/// Name of the page written into the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Load and validate a config file; defaults when `path` is `None`.
///
/// Missing keys fall back to their defaults, so a file only needs the
/// values it changes:
///
/// ```toml
/// [scene]
/// rotation_rate_y = 0.6
/// color = "#7c3aed"
/// ```
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let Some(path) = path else {
        debug!("no config file, using defaults");
        return Ok(SiteConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: SiteConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Render the page into `out_dir`, creating it if needed. Returns the path
/// of the written file.
pub fn export(config: &SiteConfig, out_dir: &Path, script: Option<&str>) -> Result<PathBuf> {
    let html = render_document(config, script).context("failed to render page")?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let target = out_dir.join(INDEX_FILE);
    fs::write(&target, &html).with_context(|| format!("failed to write {}", target.display()))?;

    info!(path = %target.display(), bytes = html.len(), "page exported");
    Ok(target)
}
