use std::fs;

use devagency_export::{INDEX_FILE, export, load_config};
use devagency_site::SiteConfig;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_path_means_defaults() {
    let config = load_config(None).expect("defaults");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_toml_overrides_only_given_keys() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("site.toml");
    fs::write(
        &path,
        r##"
[scene]
rotation_rate_y = 0.6
color = "#7c3aed"

[reveal]
stagger_secs = 0.05
"##,
    )
    .expect("write config");

    let config = load_config(Some(&path)).expect("load config");
    assert_eq!(config.scene.rotation_rate_y, 0.6);
    assert_eq!(config.scene.color, "#7c3aed");
    assert_eq!(config.scene.rotation_rate_x, 0.2);
    assert_eq!(config.reveal.stagger_secs, 0.05);
    assert_eq!(config.hero_fade, SiteConfig::default().hero_fade);
}

#[test]
fn unreadable_config_names_the_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("absent.toml");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn malformed_toml_is_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("site.toml");
    fs::write(&path, "[scene\nradius = ").expect("write config");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config"));
}

#[test]
fn invalid_values_are_rejected() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("site.toml");
    fs::write(&path, "[hero_fade]\nstart = 0.5\nend = 0.1\n").expect("write config");

    let err = load_config(Some(&path)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("invalid config"));
    assert!(message.contains("hero_fade"));
}

#[test]
fn export_writes_index_into_new_directory() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("public").join("site");

    let written = export(&SiteConfig::default(), &out, Some("/landing.js")).expect("export");
    assert_eq!(written, out.join(INDEX_FILE));

    let html = fs::read_to_string(&written).expect("read page");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Build Digital Excellence"));
    assert!(html.contains("Our Services"));
    assert!(html.contains("Featured Projects"));
    assert!(html.contains("Ready to Start Your Project?"));
    assert!(html.contains(r#"import init from "/landing.js";"#));
    assert!(html.contains("await init();"));
}

#[test]
fn static_export_shows_hero_and_cards() {
    let temp = TempDir::new().expect("temp dir");

    let written = export(&SiteConfig::default(), temp.path(), None).expect("export");
    let html = fs::read_to_string(written).expect("read page");

    let title = html
        .find(r#"class="hero-title gradient-text" style="opacity: 1;"#)
        .expect("hero title fully opaque");
    assert!(html[title..].contains("Build Digital Excellence"));
    assert_eq!(html.matches(r#"style="opacity: 0;"#).count(), 0);
    assert_eq!(html.matches(r#"class="card service-card""#).count(), 4);
    assert_eq!(html.matches(r#"class="stat-value""#).count(), 4);
}

#[test]
fn export_embeds_effective_config() {
    let temp = TempDir::new().expect("temp dir");
    let mut config = SiteConfig::default();
    config.scene.rotation_rate_x = 0.45;

    let written = export(&config, temp.path(), None).expect("export");
    let html = fs::read_to_string(written).expect("read page");
    assert!(html.contains(r#""rotation_rate_x":0.45"#));
    assert!(!html.contains(r#"type="module""#));
}

#[test]
fn export_overwrites_previous_page() {
    let temp = TempDir::new().expect("temp dir");
    let target = temp.path().join(INDEX_FILE);
    fs::write(&target, "stale").expect("seed file");

    export(&SiteConfig::default(), temp.path(), None).expect("export");
    let html = fs::read_to_string(&target).expect("read page");
    assert!(html.starts_with("<!DOCTYPE html>"));
}
