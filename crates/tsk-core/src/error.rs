//! Error taxonomy for the task store and auth gate.
//!
//! Every operation returns one of these synchronously; none of them leave the
//! store or the session in an unusable state.

use crate::auth::Role;
use crate::policy::Operation;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A create or edit would leave the task without a title.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Login credentials did not match the allow-list.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A mutation referenced a task id that is not in the collection.
    #[error("task '{id}' not found")]
    TaskNotFound { id: String },

    /// The access policy denied the operation for the caller's role.
    #[error("operation '{}' is not permitted for {}", .operation, .role.map_or("anonymous", Role::as_str))]
    PolicyDenied {
        operation: Operation,
        role: Option<Role>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_denied_names_the_caller() {
        let anonymous = Error::PolicyDenied {
            operation: Operation::Create,
            role: None,
        };
        assert_eq!(
            anonymous.to_string(),
            "operation 'create' is not permitted for anonymous"
        );

        let user = Error::PolicyDenied {
            operation: Operation::Create,
            role: Some(Role::User),
        };
        assert_eq!(
            user.to_string(),
            "operation 'create' is not permitted for user"
        );
    }

    #[test]
    fn test_task_not_found_includes_id() {
        let err = Error::TaskNotFound {
            id: "abc-123".to_string(),
        };
        assert_eq!(err.to_string(), "task 'abc-123' not found");
    }
}
