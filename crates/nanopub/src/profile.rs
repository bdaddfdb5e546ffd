//! Identity profile — who is introducing a key, and where the key lives.
//!
//! A profile binds a researcher's ORCID identifier and display name to
//! the two filesystem paths holding their RSA key pair. It is stored as
//! YAML, by convention at `~/.nanopub/profile.yml`:
//!
//! ```yaml
//! orcid_id: https://orcid.org/0000-0000-0000-0001
//! name: Jane Doe
//! private_key: /home/jane/.nanopub/id_rsa
//! public_key: /home/jane/.nanopub/id_rsa.pub
//! introduction_nanopub_uri: null
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NanopubError, Result};

/// Directory under the user's home holding the profile and key files.
const NANOPUB_DIR: &str = ".nanopub";
const PROFILE_FILE: &str = "profile.yml";
const PRIVATE_KEY_FILE: &str = "id_rsa";
const PUBLIC_KEY_FILE: &str = "id_rsa.pub";

/// A researcher's identity profile.
///
/// Loaded once before document construction and treated as read-only for
/// the duration of a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Dereferenceable identifier URI, e.g. `https://orcid.org/0000-...`.
    #[serde(default)]
    pub orcid_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Destination of the unencrypted private key PEM.
    #[serde(default)]
    pub private_key: PathBuf,
    /// Destination of the public key PEM.
    #[serde(default)]
    pub public_key: PathBuf,
    /// URI of a previously published introduction, if any.
    #[serde(default)]
    pub introduction_nanopub_uri: Option<String>,
}

impl Profile {
    /// Create a profile with the conventional key locations inside `dir`.
    pub fn new(orcid_id: impl Into<String>, name: impl Into<String>, dir: &Path) -> Self {
        Self {
            orcid_id: orcid_id.into(),
            name: name.into(),
            private_key: dir.join(PRIVATE_KEY_FILE),
            public_key: dir.join(PUBLIC_KEY_FILE),
            introduction_nanopub_uri: None,
        }
    }

    /// The conventional profile directory, `~/.nanopub`.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(NANOPUB_DIR))
    }

    /// The conventional profile file path, `~/.nanopub/profile.yml`.
    pub fn default_path() -> Option<PathBuf> {
        Self::default_dir().map(|dir| dir.join(PROFILE_FILE))
    }

    /// Load and validate a profile from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `NanopubError::Io` if the file cannot be read,
    /// `NanopubError::ProfileFile` if it is not valid YAML, or
    /// `NanopubError::ProfileIncomplete` if a required field is missing.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let profile: Profile =
            serde_yaml::from_str(&contents).map_err(|e| NanopubError::ProfileFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Write the profile to a YAML file, creating parent directories.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| NanopubError::ProfileFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Check that every required field is present and non-blank.
    ///
    /// Called before key generation so an unusable profile never costs an
    /// RSA key-pair generation or a file write.
    pub fn validate(&self) -> Result<()> {
        if self.orcid_id.trim().is_empty() {
            return Err(NanopubError::ProfileIncomplete("orcid_id"));
        }
        if self.name.trim().is_empty() {
            return Err(NanopubError::ProfileIncomplete("name"));
        }
        if self.private_key.as_os_str().is_empty() {
            return Err(NanopubError::ProfileIncomplete("private_key"));
        }
        if self.public_key.as_os_str().is_empty() {
            return Err(NanopubError::ProfileIncomplete("public_key"));
        }
        Ok(())
    }
}
