use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::dao::{
    local_store::LocalStore,
    storage::{StorageError, StorageResult, check_quota},
};

const FILE_EXTENSION: &str = "json";

/// Local store keeping one JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileStore {
    /// Open (and create if needed) the directory backing the store.
    pub fn open(dir: PathBuf, quota: Option<usize>) -> StorageResult<Self> {
        fs::create_dir_all(&dir).map_err(|source| {
            StorageError::unavailable(format!("creating `{}`", dir.display()), source)
        })?;
        Ok(Self { dir, quota })
    }

    /// Directory holding the stored files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.{FILE_EXTENSION}"))
    }

    /// Bytes used by every stored key except `exclude`.
    fn other_bytes(&self, exclude: &Path) -> StorageResult<usize> {
        let entries = fs::read_dir(&self.dir).map_err(|source| {
            StorageError::unavailable(format!("listing `{}`", self.dir.display()), source)
        })?;

        let mut total = 0usize;
        for entry in entries.flatten() {
            let path = entry.path();
            if path == exclude || path.extension().is_none_or(|ext| ext != FILE_EXTENSION) {
                continue;
            }
            if let Ok(metadata) = entry.metadata() {
                total += metadata.len() as usize;
            }
        }
        Ok(total)
    }
}

impl LocalStore for FileStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::unavailable(
                format!("reading `{}`", path.display()),
                err,
            )),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        if self.quota.is_some() {
            check_quota(key, self.other_bytes(&path)?, value.len(), self.quota)?;
        }

        // Readers only ever see a complete value.
        let tmp = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        fs::write(&tmp, value).map_err(|source| {
            StorageError::unavailable(format!("writing `{}`", tmp.display()), source)
        })?;
        fs::rename(&tmp, &path).map_err(|source| {
            StorageError::unavailable(format!("replacing `{}`", path.display()), source)
        })
    }

    fn health_check(&self) -> StorageResult<()> {
        let metadata = fs::metadata(&self.dir).map_err(|source| {
            StorageError::unavailable(format!("inspecting `{}`", self.dir.display()), source)
        })?;
        if metadata.permissions().readonly() {
            return Err(StorageError::unavailable(
                format!("`{}` is read-only", self.dir.display()),
                std::io::Error::from(ErrorKind::PermissionDenied),
            ));
        }
        Ok(())
    }
}
