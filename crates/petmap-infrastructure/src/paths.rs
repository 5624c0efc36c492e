//! Well-known file locations.

use petmap_core::{PetMapError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "petmap";
const CONFIG_FILE: &str = "config.toml";

/// Returns the directory holding PetMap configuration: ~/.config/petmap
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| PetMapError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join(APP_DIR))
}

/// Returns the path to the configuration file: ~/.config/petmap/config.toml
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_layout() {
        if let Ok(path) = config_file() {
            assert!(path.ends_with(".config/petmap/config.toml"));
        }
    }
}
