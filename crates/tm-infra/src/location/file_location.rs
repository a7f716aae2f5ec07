use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use tm_core::ports::LocationPort;

/// Persists the query string to a single file so the viewer can be
/// re-entered with the same selection.
pub struct FileLocationStore {
    path: PathBuf,
}

impl FileLocationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocationPort for FileLocationStore {
    fn read(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        let query = content.trim();
        (!query.is_empty()).then(|| query.to_string())
    }

    fn replace(&self, query: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create location dir: {}", parent.display())
                })?;
            }
        }
        fs::write(&self.path, query)
            .with_context(|| format!("Failed to write location file: {}", self.path.display()))?;
        debug!(query, path = %self.path.display(), "Persisted location");
        Ok(())
    }
}
