use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
pub const DATA_DIR_NAME: &str = ".food-tracker";
/// Archive file name stored inside the application data directory.
pub const ARCHIVE_FILE_NAME: &str = "meals.sqlite";

/// Resolve the absolute path to the meal archive inside the user's home.
pub fn archive_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(ARCHIVE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_lives_in_data_dir() {
        // Sandboxed CI runners may not expose a home directory.
        if let Ok(path) = archive_path() {
            assert!(path.ends_with(format!("{DATA_DIR_NAME}/{ARCHIVE_FILE_NAME}")));
        }
    }
}
