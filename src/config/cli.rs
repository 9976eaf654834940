use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage. Relative paths resolve against `base_path`.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        fs::read(&full_path).map_err(|source| ConvertError::InputAccessError {
            path: full_path.display().to_string(),
            source,
        })
    }
}
