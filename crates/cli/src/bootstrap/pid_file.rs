use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The process id written to disk for the lifetime of the server. The file
/// is removed when this value is dropped, on every exit path.
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    pub fn create(path: Option<&str>) -> anyhow::Result<Option<Self>> {
        let Some(path) = path else {
            return Ok(None);
        };

        let pid = std::process::id();
        std::fs::write(path, format!("{}\n", pid))
            .with_context(|| format!("Failed to write pid file {}", path))?;
        info!(path = %path, pid, "Pid file written");

        Ok(Some(Self {
            path: Path::new(path).to_path_buf(),
        }))
    }

    pub fn remove(self) {
        drop(self);
    }
}

impl Drop for PidFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "Failed to remove pid file");
        }
    }
}
