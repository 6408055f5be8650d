//! Helpers shared by the demo binaries: logger setup, asset paths, keyboard
//! controls and the common `main` wrapper.

#[macro_use]
extern crate log;

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use glsteps::prelude::*;

/// Overrides the directory that holds the models and textures of the demos.
pub const RESOURCES_ENV: &str = "GLSTEPS_RESOURCES";

pub mod controls;

pub mod prelude {
    pub use super::controls::*;
    pub use super::{launch, resource, settings};
    pub use glsteps::prelude::*;
}

/// Initializes `env_logger`. `RUST_LOG` selects the verbosity, which defaults
/// to `info`.
pub fn init_logger() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// The directory the demo assets are loaded from.
pub fn resource_root() -> PathBuf {
    match env::var_os(RESOURCES_ENV) {
        Some(v) => PathBuf::from(v),
        None => Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("resources"),
    }
}

/// Resolves `path` against the resource directory.
pub fn resource<P: AsRef<Path>>(path: P) -> PathBuf {
    resource_root().join(path)
}

/// The default settings with a window of `width` x `height` logical pixels.
pub fn settings(width: u32, height: u32) -> Settings {
    let mut settings = Settings::default();
    settings.window.size = math::Vector2::new(width, height);
    settings
}

/// Runs a demo to completion. Any error is logged with its causes and
/// terminates the process with status 1.
pub fn launch<A, F>(settings: Settings, builder: F)
where
    A: Application,
    F: FnOnce(&mut FrameContext) -> Result<A>,
{
    init_logger();

    let result = settings
        .with_env_overrides()
        .and_then(|settings| application::run(&settings, builder));

    if let Err(err) = result {
        error!("{}", err);
        for cause in err.iter_causes() {
            error!("    caused by: {}", cause);
        }

        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_joins_root() {
        let path = resource("backpack/backpack.obj");
        assert!(path.starts_with(resource_root()));
        assert!(path.ends_with("backpack/backpack.obj"));
    }

    #[test]
    fn settings_size() {
        let settings = settings(800, 800);
        assert_eq!(settings.window.size, math::Vector2::new(800, 800));
        assert_eq!(settings.window.title, "LearnOpenGL");
    }
}
