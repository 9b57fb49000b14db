use super::backend::StorageBackend;
use crate::error::{DexError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend. Relative paths resolve against `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(DexError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        log::debug!("reading {}", full.display());
        fs::read_to_string(&full).map_err(DexError::Io)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let full = self.resolve(path);
        let dir = full.parent().map(Path::to_path_buf).unwrap_or_default();
        self.ensure_dir(&dir)?;

        // Write next to the target, then rename over it
        let tmp = dir.join(format!(".critterdex-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp, contents) {
            let _ = fs::remove_file(&tmp);
            return Err(DexError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp, &full) {
            let _ = fs::remove_file(&tmp);
            return Err(DexError::Io(e));
        }
        log::debug!("wrote {} bytes to {}", contents.len(), full.display());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }
}
