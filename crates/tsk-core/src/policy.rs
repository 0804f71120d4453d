//! Role/operation access policy.
//!
//! A pure decision table. The store consults it inside every mutation entry
//! point, so a caller that skips its own check still cannot bypass it.

use std::fmt;

use crate::auth::Role;

/// Operations subject to the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    SetStatus,
    Delete,
    List,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::SetStatus => "set-status",
            Operation::Delete => "delete",
            Operation::List => "list",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Decides whether a caller with `role` may perform `operation`.
///
/// Fails closed: unauthenticated callers (`None`) are denied everything.
/// Only admins may create; every other operation is open to any
/// authenticated role.
pub fn can_perform(role: Option<Role>, operation: Operation) -> bool {
    let Some(role) = role else {
        return false;
    };
    match operation {
        Operation::Create => role == Role::Admin,
        Operation::Update | Operation::SetStatus | Operation::Delete | Operation::List => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_OPERATIONS: &[Operation] = &[
        Operation::Create,
        Operation::Update,
        Operation::SetStatus,
        Operation::Delete,
        Operation::List,
    ];

    #[test]
    fn test_unauthenticated_is_denied_everything() {
        for op in ALL_OPERATIONS {
            assert!(!can_perform(None, *op), "anonymous must not {op}");
        }
    }

    #[test]
    fn test_admin_is_permitted_everything() {
        for op in ALL_OPERATIONS {
            assert!(can_perform(Some(Role::Admin), *op), "admin must {op}");
        }
    }

    #[test]
    fn test_user_is_denied_only_create() {
        assert!(!can_perform(Some(Role::User), Operation::Create));
        for op in [
            Operation::Update,
            Operation::SetStatus,
            Operation::Delete,
            Operation::List,
        ] {
            assert!(can_perform(Some(Role::User), op), "user must {op}");
        }
    }
}
