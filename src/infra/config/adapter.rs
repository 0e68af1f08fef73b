use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Reads `config.toml` (or an explicit `--config` path) on demand.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        load(self.path.as_deref()).context("prepdesk configuration could not be loaded")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_path_falls_back_to_defaults() {
        let adapter = FileConfigAdapter::new(Some(Path::new("./no-such-prepdesk.toml")));

        let config = adapter.load().expect("defaults should load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn parse_failure_keeps_typed_source() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[logging\n").expect("fixture should be written");

        let error = FileConfigAdapter::new(Some(&path))
            .load()
            .expect_err("broken config must fail");

        assert!(error
            .downcast_ref::<crate::infra::error::AppError>()
            .is_some());
    }
}
