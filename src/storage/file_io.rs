//! JSON snapshot I/O
//!
//! Table snapshots are read whole and written through a temporary file that
//! is renamed into place, so a reader never sees a half-written table.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::EventtoError;

/// Read a JSON file, returning the default value if the file does not exist
pub fn read_json<T, P>(path: P) -> Result<T, EventtoError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| EventtoError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| EventtoError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON atomically (temp file, sync, rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), EventtoError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            EventtoError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| EventtoError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| {
            EventtoError::Storage(format!("Failed to serialize {}: {}", path.display(), e))
        })?;

    writer
        .flush()
        .map_err(|e| EventtoError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| EventtoError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        EventtoError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Whether a file exists and holds well-formed JSON
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    File::open(path.as_ref())
        .map(|file| serde_json::from_reader::<_, serde_json::Value>(BufReader::new(file)).is_ok())
        .unwrap_or(false)
}
