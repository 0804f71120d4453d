//! Authentication gate: session state, login/logout, persistence.
//!
//! The session is stored as a single JSON blob (`token` + `userType`) so that
//! the "token and role both present or both absent" invariant survives the
//! round-trip through disk.

use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::paths::session_path;

/// Role resolved at login time; drives the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Authentication state. Token and role travel together by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        role: Role,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { role, .. } => Some(*role),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token, .. } => Some(token),
        }
    }
}

/// Persisted session blob, keyed the way the app stores it.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    #[serde(rename = "userType")]
    user_type: Role,
}

/// Credential-verification capability.
///
/// Resolves a username/password pair to a role, or `None` on mismatch. The
/// gate's session management does not care where the answer comes from, so a
/// real verifier can replace [`FixedCredentials`] without touching it.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Option<Role>;
}

/// The fixed allow-list: two users, one shared password.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCredentials;

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Role> {
        match (username, password) {
            ("admin", "123") => Some(Role::Admin),
            ("user", "123") => Some(Role::User),
            _ => None,
        }
    }
}

/// Owns the process's session and gates entry into the rest of the system.
pub struct AuthGate {
    session: Session,
    path: PathBuf,
    verifier: Box<dyn CredentialVerifier>,
}

impl AuthGate {
    /// Restores the session from `$TSK_HOME/session.json`.
    ///
    /// A missing or unreadable blob leaves the session anonymous. Idempotent:
    /// restoring twice yields the same state.
    pub fn restore() -> Self {
        Self::restore_from(session_path(), Box::new(FixedCredentials))
    }

    /// Restores from an explicit path with an explicit verifier.
    pub fn restore_from(path: impl Into<PathBuf>, verifier: Box<dyn CredentialVerifier>) -> Self {
        let path = path.into();
        let session = match read_stored(&path) {
            Some(stored) => Session::Authenticated {
                token: stored.token,
                role: stored.user_type,
            },
            None => Session::Anonymous,
        };
        Self {
            session,
            path,
            verifier,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    /// Checks credentials and, on success, opens and persists a session.
    ///
    /// On mismatch returns [`Error::InvalidCredentials`] and leaves the
    /// current session untouched. No retry limit, no lockout.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Role> {
        let Some(role) = self.verifier.verify(username, password) else {
            return Err(Error::InvalidCredentials);
        };

        let token = generate_token();
        write_stored(
            &self.path,
            &StoredSession {
                token: token.clone(),
                user_type: role,
            },
        )?;
        self.session = Session::Authenticated { token, role };
        tracing::debug!(role = %role, "login succeeded");
        Ok(role)
    }

    /// Clears the session and removes the persisted blob. Always succeeds
    /// when there is nothing to remove.
    pub fn logout(&mut self) -> Result<()> {
        self.session = Session::Anonymous;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Generates an opaque session token.
fn generate_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn read_stored(path: &Path) -> Option<StoredSession> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(stored) => Some(stored),
        Err(e) => {
            // An unparseable blob means no session, not a fatal error.
            tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt session blob");
            None
        }
    }
}

fn write_stored(path: &Path, stored: &StoredSession) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let json = serde_json::to_string_pretty(stored)?;
    let temp_path = path.with_extension("json.tmp");
    let mut temp = File::create(&temp_path)?;
    temp.write_all(json.as_bytes())?;
    temp.sync_all()?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
