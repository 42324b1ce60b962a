use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use super::schema::Config;

const HEADER: &str = "\
# job-match configuration
#
# data_file: path to the JSON file with jobs and profiles
# default_limit: number of matches shown by `job-match rank`
# scoring: relevance floor, flag threshold and narrative cutoffs, all in [0, 1]
";

/// Write the default configuration to `path`.
///
/// Refuses to overwrite an existing file. Returns the YAML that was written.
pub fn write_default_config(path: &Path) -> Result<String> {
    if path.exists() {
        anyhow::bail!("Config file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    let yaml = serde_saphyr::to_string(&Config::default())
        .context("Failed to serialize default config")?;
    let content = format!("{}\n{}", HEADER, yaml);

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(content.as_bytes())
        .context("Failed to write config file")?;
    file.commit().context("Failed to save config file")?;

    Ok(content)
}
