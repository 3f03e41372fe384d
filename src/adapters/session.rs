use crate::domain::model::AuthSession;
use crate::domain::ports::CredentialProvider;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// On-disk JSON session. Written on login, removed on logout; authenticated
/// calls read the bearer token from it.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Option<AuthSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    pub fn save(&self, session: &AuthSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl CredentialProvider for SessionStore {
    // A missing or unreadable session file reads as signed-out.
    fn access_token(&self) -> Option<String> {
        self.load().ok().flatten().map(|s| s.access_token)
    }

    fn profile_name(&self) -> Option<String> {
        self.load().ok().flatten().map(|s| s.name)
    }
}

/// Fixed credentials for tests and token-by-flag usage.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    pub token: Option<String>,
    pub name: Option<String>,
}

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }

    fn profile_name(&self) -> Option<String> {
        self.name.clone()
    }
}
