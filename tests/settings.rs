use std::fs;

use glsteps::application::Settings;
use glsteps::math::Vector2;

#[test]
fn load_partial_file() {
    let path = std::env::temp_dir().join("glsteps-settings-partial.json");
    fs::write(
        &path,
        r#"{ "window": { "title": "SSAO", "size": { "x": 1280, "y": 720 } }, "engine": { "max_fps": 30 } }"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.window.title, "SSAO");
    assert_eq!(settings.window.size, Vector2::new(1280, 720));
    assert_eq!(settings.window.gl_version, (3, 3));
    assert!(settings.window.vsync);
    assert_eq!(settings.engine.max_fps, 30);
    assert!(settings.engine.exit_on_escape);

    fs::remove_file(&path).unwrap();
}

#[test]
fn file_keeps_demo_defaults() {
    let path = std::env::temp_dir().join("glsteps-settings-vsync.json");
    fs::write(&path, r#"{ "window": { "vsync": false } }"#).unwrap();

    let mut base = Settings::default();
    base.window.size = Vector2::new(800, 800);

    let settings = base.with_file(&path).unwrap();
    assert_eq!(settings.window.size, Vector2::new(800, 800));
    assert!(!settings.window.vsync);

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_error() {
    let path = std::env::temp_dir().join("glsteps-settings-does-not-exist.json");
    let err = Settings::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read settings"));
}

#[test]
fn empty_object_is_default() {
    let settings = Settings::default().with_json("{}").unwrap();
    assert_eq!(settings, Settings::default());
}
