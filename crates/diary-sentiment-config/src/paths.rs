use anyhow::Result;
use std::path::{Path, PathBuf};

/// Overrides the platform config directory when set
pub const BASE_PATH_ENV: &str = "REELFEEL_BASE_PATH";

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    /// `$REELFEEL_BASE_PATH` when set, else the platform config directory
    /// (e.g., ~/.config/reelfeel on Linux)
    pub fn new() -> Result<Self> {
        Self::resolve(std::env::var_os(BASE_PATH_ENV).map(PathBuf::from))
    }

    fn resolve(base_override: Option<PathBuf>) -> Result<Self> {
        let config_dir = match base_override {
            Some(base) => base,
            None => dirs::config_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory; set {}", BASE_PATH_ENV))?
                .join("reelfeel"),
        };

        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::resolve(Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(paths.config_dir(), dir.path());
        assert_eq!(paths.config_file(), dir.path().join("config.toml"));
    }

    #[test]
    fn test_platform_config_dir_without_override() {
        let Some(platform) = dirs::config_dir() else {
            return;
        };
        let paths = PathManager::resolve(None).unwrap();

        assert_eq!(paths.config_file(), platform.join("reelfeel").join("config.toml"));
    }
}
