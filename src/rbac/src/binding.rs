//! Binding table: user identities to roles

use crate::policy::Policy;
use crate::role::Role;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Many-to-many association from user identity to roles.
///
/// Bindings are append-only: a user's role list only grows, and binding the
/// same role twice is permitted — evaluation is idempotent, the duplicate
/// only costs redundant work. Mutations take the write lock; decision
/// queries share the read lock.
#[derive(Debug, Default)]
pub struct BindingTable {
    bindings: RwLock<HashMap<String, Vec<Arc<Role>>>>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `user` to `role`, creating the user's role list on first bind.
    pub fn bind(&self, user: impl Into<String>, role: &Arc<Role>) {
        let mut bindings = self.bindings.write();
        bindings
            .entry(user.into())
            .or_default()
            .push(Arc::clone(role));
    }

    /// Roles bound to `user`, in binding order.
    pub fn roles_for_user(&self, user: &str) -> Vec<Arc<Role>> {
        self.bindings.read().get(user).cloned().unwrap_or_default()
    }

    /// Every policy of every role bound to `user`, concatenated in binding
    /// order. Audit surface.
    pub fn policies_for_user(&self, user: &str) -> Vec<Arc<Policy>> {
        let bindings = self.bindings.read();
        let Some(roles) = bindings.get(user) else {
            return Vec::new();
        };

        roles.iter().flat_map(|role| role.policies()).collect()
    }

    /// Union over the user's bound roles of the policies covering
    /// `resource_type`, using the same glob semantics as
    /// [`Role::policies_for_resource`].
    pub fn policies_for_user_and_resource(
        &self,
        user: &str,
        resource_type: &str,
    ) -> Vec<Arc<Policy>> {
        let bindings = self.bindings.read();
        let Some(roles) = bindings.get(user) else {
            return Vec::new();
        };

        roles
            .iter()
            .flat_map(|role| role.policies_for_resource(resource_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer_role() -> Arc<Role> {
        let mut policy = Policy::new();
        policy.add_resource_types(["vms"]);
        policy.add_verbs(["list"]).unwrap();
        Role::with_policies("Viewer", [policy]).unwrap()
    }

    #[test]
    fn unbound_user_has_nothing() {
        let table = BindingTable::new();
        assert!(table.roles_for_user("nobody@foo.com").is_empty());
        assert!(table.policies_for_user("nobody@foo.com").is_empty());
        assert!(table
            .policies_for_user_and_resource("nobody@foo.com", "vms")
            .is_empty());
    }

    #[test]
    fn bind_appends_without_deduplication() {
        let table = BindingTable::new();
        let role = viewer_role();

        table.bind("viewer@foo.com", &role);
        table.bind("viewer@foo.com", &role);

        let roles = table.roles_for_user("viewer@foo.com");
        assert_eq!(roles.len(), 2);
        assert!(Arc::ptr_eq(&roles[0], &roles[1]));
    }

    #[test]
    fn policies_concatenate_in_binding_order() {
        let table = BindingTable::new();

        let viewer = viewer_role();
        let mut admin_policy = Policy::new();
        admin_policy.add_resource_types(["*"]);
        admin_policy.add_verbs(["*"]).unwrap();
        let admin = Role::with_policies("Admin", [admin_policy]).unwrap();

        table.bind("ops@foo.com", &viewer);
        table.bind("ops@foo.com", &admin);

        let policies = table.policies_for_user("ops@foo.com");
        assert_eq!(policies.len(), 2);
        assert_eq!(policies[0].resource_types(), &["vms".to_string()]);
        assert_eq!(policies[1].resource_types(), &["*".to_string()]);
    }

    #[test]
    fn resource_lookup_uses_glob_matching_per_role() {
        let table = BindingTable::new();

        let mut policy = Policy::new();
        policy.add_resource_types(["vms/*"]);
        policy.add_verbs(["get"]).unwrap();
        let role = Role::with_policies("VncViewer", [policy]).unwrap();

        table.bind("viewer@foo.com", &role);

        // full glob semantics at the binding layer, not exact-or-`*` only
        assert_eq!(
            table
                .policies_for_user_and_resource("viewer@foo.com", "vms/vnc")
                .len(),
            1
        );
        assert!(table
            .policies_for_user_and_resource("viewer@foo.com", "networks")
            .is_empty());
    }
}
