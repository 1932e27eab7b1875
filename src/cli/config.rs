use std::path::{Path, PathBuf};

use transform_d::Config;
use transform_d::error::Error;

/// Config files read on every run, lowest precedence first.
fn user_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("transform-d").join("config.toml"));
    }
    paths.push(PathBuf::from("transform-d.toml"));
    paths
}

/// Layers the user config files and then `explicit` over the built-in
/// defaults.
///
/// A broken user config file is reported and skipped. A broken explicit
/// file is an error.
pub fn load(explicit: Option<&str>) -> Result<Config, Error> {
    let mut config = Config::default();

    for path in user_config_paths() {
        if !path.exists() {
            continue;
        }
        match Config::load_from_file(&path) {
            Ok(layer) => {
                log::debug!("loaded config from {}", path.display());
                config.merge(layer);
            }
            Err(e) => log::warn!("ignoring {}", e),
        }
    }

    if let Some(path) = explicit {
        let expanded = shellexpand::tilde(path);
        config.merge(Config::load_from_file(Path::new(expanded.as_ref()))?);
        log::debug!("loaded config from {}", expanded);
    }

    Ok(config)
}
