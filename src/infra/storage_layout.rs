use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "prepdesk";
const TOKEN_FILE_NAME: &str = "auth_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub config_dir: PathBuf,
    pub session_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let config_base = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|home| home.join(".config")))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve config base directory (XDG_CONFIG_HOME/HOME)".into(),
            })?;

        Ok(Self::under(config_base))
    }

    pub fn under(config_base: PathBuf) -> Self {
        let config_dir = config_base.join(APP_DIR_NAME);
        let session_dir = config_dir.join("session");

        Self {
            config_dir,
            session_dir,
        }
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.config_dir, &self.session_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }

    pub fn token_file(&self) -> PathBuf {
        self.session_dir.join(TOKEN_FILE_NAME)
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_file_lives_under_session_dir() {
        let layout = StorageLayout::under(PathBuf::from("/tmp/base"));

        assert!(layout.session_dir.starts_with(&layout.config_dir));
        assert!(layout.token_file().starts_with(&layout.session_dir));
        assert!(layout.token_file().ends_with("auth_token"));
        assert!(layout.config_dir.ends_with("prepdesk"));
    }
}
