use std::{
    fs,
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::infra::{contracts::TokenStore, error::AppError, storage_layout::StorageLayout};

/// Stores the session token as a single file under the session directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    layout: StorageLayout,
}

impl FileTokenStore {
    pub fn new(layout: StorageLayout) -> Self {
        Self { layout }
    }

    pub fn path(&self) -> PathBuf {
        self.layout.token_file()
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        let path = self.path();

        match fs::read_to_string(&path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AppError::TokenRead { path, source }),
        }
    }

    fn save(&mut self, token: &str) -> Result<(), AppError> {
        self.layout.ensure_dirs()?;
        let path = self.path();

        write_atomically(&path, token.as_bytes())
            .map_err(|source| AppError::TokenWrite { path, source })
    }

    fn clear(&mut self) -> Result<bool, AppError> {
        let path = self.path();

        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(AppError::TokenRemove { path, source }),
        }
    }
}

/// Writes through a temp file and a rename. On unix the file is created
/// with mode 0600.
fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(&tmp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp_path, path)
}
