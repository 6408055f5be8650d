//! Functions for loading demo settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{self, Value};

use crate::errors::*;
use crate::window::WindowParams;

/// The environment variable pointing at a JSON settings file that overrides
/// the built-in settings of a demo.
pub const SETTINGS_ENV: &str = "GLSTEPS_SETTINGS";

/// A structure containing configuration data for demos, which are used to
/// specify hardware setup stuff to create the window and the render loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineParams,
    pub window: WindowParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Maximum frames per second, zero means unlimited.
    pub max_fps: u32,
    /// Closes the window once `Escape` has been pressed.
    pub exit_on_escape: bool,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            max_fps: 0,
            exit_on_escape: true,
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file. Fields absent in the file keep their
    /// default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Settings::default().with_file(path)
    }

    /// Overrides fields of `self` with the ones present in the JSON file.
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|_| format!("Failed to read settings from {}", path.display()))?;
        self.with_json(&text)
    }

    /// Overrides fields of `self` with the ones present in `text`.
    pub fn with_json(self, text: &str) -> Result<Self> {
        let patch: Value = serde_json::from_str(text)?;
        let mut base = serde_json::to_value(&self)?;
        merge(&mut base, patch);
        Ok(serde_json::from_value(base)?)
    }

    /// Applies the file named by `GLSTEPS_SETTINGS` if the variable is set.
    pub fn with_env_overrides(self) -> Result<Self> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => {
                info!("[Settings] Applies overrides from {:?}.", path);
                self.with_file(path)
            }
            None => Ok(self),
        }
    }
}

fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (k, v) in patch {
                merge(base.entry(k).or_insert(Value::Null), v);
            }
        }
        (base, patch) => *base = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    #[test]
    fn partial_json_keeps_own_defaults() {
        let mut settings = Settings::default();
        settings.window.title = "Transformations".to_owned();
        settings.window.size = Vector2::new(800, 800);

        let settings = settings
            .with_json(r#"{ "window": { "vsync": false }, "engine": { "max_fps": 60 } }"#)
            .unwrap();

        assert_eq!(settings.window.title, "Transformations");
        assert_eq!(settings.window.size, Vector2::new(800, 800));
        assert!(!settings.window.vsync);
        assert_eq!(settings.engine.max_fps, 60);
        assert!(settings.engine.exit_on_escape);
    }

    #[test]
    fn malformed_json() {
        assert!(Settings::default().with_json("{ window: ").is_err());
        assert!(Settings::default()
            .with_json(r#"{ "engine": { "max_fps": "fast" } }"#)
            .is_err());
    }

    #[test]
    fn missing_file() {
        assert!(Settings::load("/definitely/not/here/settings.json").is_err());
    }
}
