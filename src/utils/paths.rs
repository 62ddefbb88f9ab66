use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".rent_wizard";
const LISTINGS_DIR: &str = "listings";

/// Returns the application data directory, defaulting to `~/.rent_wizard`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("RENT_WIZARD_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding submitted listings.
pub fn listings_dir() -> PathBuf {
    app_data_dir().join(LISTINGS_DIR)
}
