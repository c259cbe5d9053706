//! Local identity and the admin gate.
//!
//! There are no accounts. Every install gets one anonymous local user id,
//! and moderator capability is a single persisted flag behind a shared
//! password check. This mirrors a single-user local app, not a real
//! authentication system.

use chrono::Utc;
use serde::Serialize;

use crate::error::{AccessError, Result};
use crate::events::Event;
use crate::storage::Database;

/// Capability level of the local user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Moderator,
}

impl Role {
    pub fn from_flag(is_admin: bool) -> Role {
        if is_admin {
            Role::Moderator
        } else {
            Role::Member
        }
    }

    /// Whether this role may delete other users' posts.
    pub fn can_moderate(self) -> bool {
        self == Role::Moderator
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Moderator => "moderator",
        }
    }
}

/// The anonymous local user.
#[derive(Debug, Clone, Serialize)]
pub struct LocalUser {
    pub id: String,
}

impl LocalUser {
    /// Load the stored user id, generating one on first use.
    pub fn load_or_create(db: &Database) -> Result<Self> {
        Ok(Self { id: db.user_id()? })
    }

    /// Display name derived from the id tail, e.g. "User 3f2a".
    pub fn short_name(&self) -> String {
        let tail: String = self
            .id
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("User {tail}")
    }
}

/// Password check guarding the moderator flag.
pub struct AdminGate {
    password: String,
}

impl AdminGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Compare the attempt against the configured password and set the
    /// moderator flag on success.
    ///
    /// # Errors
    /// Returns [`AccessError::WrongPassword`] on mismatch; the flag is
    /// left untouched in that case.
    pub fn sign_in(&self, db: &Database, attempt: &str) -> Result<Event> {
        if attempt != self.password {
            return Err(AccessError::WrongPassword.into());
        }
        db.set_admin(true)?;
        Ok(Event::AdminSignedIn { at: Utc::now() })
    }

    /// Clear the moderator flag. Signing out while already signed out is
    /// a no-op.
    pub fn sign_out(&self, db: &Database) -> Result<Event> {
        db.set_admin(false)?;
        Ok(Event::AdminSignedOut { at: Utc::now() })
    }

    /// Current role as derived from the persisted flag.
    pub fn role(&self, db: &Database) -> Result<Role> {
        Ok(Role::from_flag(db.is_admin()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_password_is_rejected_and_flag_untouched() {
        let db = Database::open_memory().unwrap();
        let gate = AdminGate::new("admin123");
        assert!(gate.sign_in(&db, "letmein").is_err());
        assert_eq!(gate.role(&db).unwrap(), Role::Member);
    }

    #[test]
    fn correct_password_grants_moderator() {
        let db = Database::open_memory().unwrap();
        let gate = AdminGate::new("admin123");
        gate.sign_in(&db, "admin123").unwrap();
        let role = gate.role(&db).unwrap();
        assert_eq!(role, Role::Moderator);
        assert!(role.can_moderate());
    }

    #[test]
    fn sign_out_reverts_to_member() {
        let db = Database::open_memory().unwrap();
        let gate = AdminGate::new("admin123");
        gate.sign_in(&db, "admin123").unwrap();
        gate.sign_out(&db).unwrap();
        assert_eq!(gate.role(&db).unwrap(), Role::Member);
    }

    #[test]
    fn short_name_uses_id_tail() {
        let user = LocalUser {
            id: "user_0123456789abcdef".to_string(),
        };
        assert_eq!(user.short_name(), "User cdef");
    }
}
