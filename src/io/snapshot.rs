use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

/// Error type for snapshot I/O
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("could not create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize {key} snapshot: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Default data directory, respecting XDG_DATA_HOME
pub fn data_dir() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local/share"));
    base.join("slate")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Write a file atomically: write to a temp file in the same directory,
/// then rename over the target.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Durable key-value snapshot storage. Each collection is one JSON file
/// in the data directory, named after its key (`projects.json`,
/// `tasks.json`), rewritten in full on every mutation.
#[derive(Debug, Clone)]
pub struct Snapshots {
    dir: PathBuf,
}

impl Snapshots {
    /// Open snapshot storage at the given directory, creating it if needed.
    pub fn open(dir: &Path) -> Result<Self, SnapshotError> {
        fs::create_dir_all(dir).map_err(|e| SnapshotError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(Snapshots {
            dir: dir.to_path_buf(),
        })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read a collection snapshot.
    /// A missing file is an empty collection. A corrupt file is backed up
    /// as `<key>.json.bak` and treated as empty, so a damaged snapshot
    /// never blocks startup.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let path = self.path(key);
        if !path.exists() {
            return Vec::new();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<T>>(&content) {
                Ok(records) => records,
                Err(e) => {
                    let bak = path.with_extension("json.bak");
                    let _ = fs::copy(&path, &bak);
                    eprintln!(
                        "warning: could not parse {} (backed up as {}): {}",
                        path.display(),
                        bak.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        }
    }

    /// Write a full collection snapshot atomically.
    pub fn write<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), SnapshotError> {
        let content =
            serde_json::to_string_pretty(records).map_err(|e| SnapshotError::Serialize {
                key: key.to_string(),
                source: e,
            })?;
        let path = self.path(key);
        atomic_write(&path, content.as_bytes()).map_err(|e| SnapshotError::Write {
            path,
            source: e,
        })
    }
}
