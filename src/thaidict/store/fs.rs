use super::backend::StorageBackend;
use super::DictionaryStore;
use crate::error::{DictError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub type FileDictionary = DictionaryStore<FsBackend>;

impl FileDictionary {
    /// Open (or create) the dictionary document at `path`.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        DictionaryStore::open(FsBackend::new(path.as_ref().to_path_buf()))
    }
}

/// Stores the document as a single JSON file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn ensure_parent(&self) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(DictError::Io)?;
        }
        Ok(parent)
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dictionary.json".to_string())
    }
}

impl StorageBackend for FsBackend {
    fn read_document(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DictError::Io(e)),
        }
    }

    fn write_document(&self, contents: &str) -> Result<()> {
        let dir = self.ensure_parent()?;

        // Atomic write: the rename replaces the old document in one step
        let tmp_path = dir.join(format!(".{}-{}.tmp", self.file_name(), Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DictError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DictError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
