use super::types::{MemoryStore, STORE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default data file path (~/.config/job-match/data.json)
pub fn get_data_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("data.json"))
}

/// Load jobs and profiles from a JSON data file
///
/// If the file doesn't exist, returns a new empty store.
/// If the file has an unsupported version or holds a record with an inverted
/// range, returns an error.
pub fn load_store(path: &Path) -> Result<MemoryStore> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "data file missing, starting empty");
        return Ok(MemoryStore::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open data file at {}", path.display()))?;

    let store: MemoryStore = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse data file at {}", path.display()))?;

    if store.version != STORE_VERSION {
        anyhow::bail!("Unsupported data file version: {}", store.version);
    }

    store
        .validate()
        .with_context(|| format!("Invalid record in {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        jobs = store.jobs.len(),
        profiles = store.profiles.len(),
        "loaded data file"
    );

    Ok(store)
}

/// Save the store to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_store(path: &Path, store: &MemoryStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, store).context("Failed to serialize data file")?;

    file.commit().context("Failed to save data file")?;

    Ok(())
}
