use tracing::warn;

use super::{Actor, AuthError};

/// A permission object for one resource type.
///
/// Implementors expose one `bool` method per protected action (`create`,
/// `update`, `destroy`). Those methods are pure and return `false` for an
/// absent actor instead of failing; turning `false` into a rejection is the
/// caller's job via [`enforce`].
pub trait Policy<'a> {
    type Record;

    fn new(actor: Option<Actor<'a>>, record: Option<&'a Self::Record>) -> Self;
}

/// Converts a policy decision into a boundary result.
pub fn enforce(allowed: bool, action: &str, actor: Option<&Actor<'_>>) -> Result<(), AuthError> {
    if allowed {
        return Ok(());
    }

    warn!(
        user_id = ?actor.map(|a| a.user.id),
        school_id = ?actor.map(|a| a.school.id),
        action = %action,
        "Authorization denied by policy"
    );
    Err(AuthError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enforce_allows() {
        assert_eq!(enforce(true, "create_level", None), Ok(()));
    }

    #[test]
    fn test_enforce_rejects_with_unauthorized() {
        assert_eq!(
            enforce(false, "create_level", None),
            Err(AuthError::Unauthorized)
        );
    }
}
