//! Well-known role names and the permission check used by the console.

pub const ROLE_ADMIN: &str = "admin";

/// Whether `user_roles` contains at least one of `required`.
///
/// A user without roles has no permissions, even for an empty requirement.
pub fn has_any_role(user_roles: &[String], required: &[&str]) -> bool {
    required
        .iter()
        .any(|role| user_roles.iter().any(|r| r == role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_role_grants_permission() {
        let roles = vec!["viewer".to_string(), ROLE_ADMIN.to_string()];
        assert!(has_any_role(&roles, &[ROLE_ADMIN]));
        assert!(has_any_role(&roles, &["editor", "viewer"]));
    }

    #[test]
    fn no_roles_no_permission() {
        assert!(!has_any_role(&[], &[ROLE_ADMIN]));
        assert!(!has_any_role(&["viewer".to_string()], &[]));
    }
}
