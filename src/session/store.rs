use anyhow::{Context, Result, bail};
use dirs::home_dir;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use super::{SessionContext, User};

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn default_path() -> Result<PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".hackbuddy/session.json");
        Ok(path)
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::at(Self::default_path()?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<SessionContext> {
        if !self.path.exists() {
            return Ok(SessionContext::anonymous());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed reading session at {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(SessionContext::anonymous());
        }

        let user: User = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing session at {}", self.path.display()))?;
        Ok(SessionContext::signed_in(user))
    }

    pub fn sign_in(&self, user: &User) -> Result<()> {
        let email = user.email.trim();
        if email.is_empty() || !email.contains('@') {
            bail!("'{}' is not a valid email address", user.email);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create session directory {}", parent.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(user).context("Failed to serialize session to JSON")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write session to {}", self.path.display()))?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Removes the stored session. Returns whether a user was signed in.
    pub fn sign_out(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove session at {}", self.path.display()))?;
        Ok(true)
    }
}
