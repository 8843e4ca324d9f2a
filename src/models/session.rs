use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
}

/// Auth token kept between invocations in a small JSON file.
#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
    token: Option<String>,
}

impl Session {
    /// Loads the session stored at `path`. A missing file is a logged-out
    /// session, not an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No stored session");
            return Ok(Self { path, token: None });
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Could not read session file {}", path.display()))?;
        let stored: StoredSession = serde_json::from_str(&raw)
            .with_context(|| format!("Could not parse session file {}", path.display()))?;

        Ok(Self {
            path,
            token: stored.token.filter(|t| !t.is_empty()),
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn store(&mut self, token: String) -> Result<()> {
        self.token = Some(token);
        self.persist()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.token = None;

        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Could not remove session file {}", self.path.display())
            })?;
        }

        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let stored = StoredSession {
            token: self.token.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)?;

        write_private(&self.path, &json)
            .with_context(|| format!("Could not write session file {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "Session stored");

        Ok(())
    }
}

/// Writes `contents` readable by the owner only, tightening an existing file.
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(contents.as_bytes())
}
