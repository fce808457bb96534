//! RBAC decision engine: the context object owning roles and bindings

use crate::binding::BindingTable;
use crate::error::Result;
use crate::policy::Policy;
use crate::role::Role;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// An authorization domain: a role registry plus a binding table.
///
/// Each engine is independent, so one process can host several authorization
/// domains (and tests get isolation for free). All state is in-memory;
/// loading role definitions from configuration or a database is a collaborator
/// concern layered on the mutation surface.
///
/// Mutations (register a role, bind a user) take write locks; decision
/// queries take read locks and run in parallel with each other. No query
/// ever returns an error — an unknown user, resource, or verb is a deny.
#[derive(Debug, Default)]
pub struct RbacEngine {
    roles: RwLock<HashMap<String, Arc<Role>>>,
    bindings: BindingTable,
}

impl RbacEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a role, attach `policies`, and register it under its name,
    /// replacing any previous role registered under that name.
    ///
    /// Validation is partial-commit: on error the role is still registered
    /// with every well-formed contribution (fetch it back via
    /// [`RbacEngine::role`]), and the error reports the rejected patterns.
    pub fn new_role<I>(&self, name: impl Into<String>, policies: I) -> Result<Arc<Role>>
    where
        I: IntoIterator<Item = Policy>,
    {
        let role = Role::new(name);
        let outcome = role.add_policies(policies);
        self.register_role(Arc::clone(&role));
        outcome.map(|_| role)
    }

    /// Register `role` under its name, replacing any previous registration.
    pub fn register_role(&self, role: Arc<Role>) {
        self.roles.write().insert(role.name().to_string(), role);
    }

    /// Look up a registered role by name.
    pub fn role(&self, name: &str) -> Option<Arc<Role>> {
        self.roles.read().get(name).cloned()
    }

    /// Bind `user` to `role`. Appends; duplicate bindings are permitted and
    /// do not change decisions.
    pub fn bind_user(&self, user: impl Into<String>, role: &Arc<Role>) {
        self.bindings.bind(user, role);
    }

    /// Roles bound to `user`, in binding order.
    pub fn roles_for_user(&self, user: &str) -> Vec<Arc<Role>> {
        self.bindings.roles_for_user(user)
    }

    /// Every policy of every role bound to `user`. Audit surface.
    pub fn policies_for_user(&self, user: &str) -> Vec<Arc<Policy>> {
        self.bindings.policies_for_user(user)
    }

    /// Policies reachable from the user's roles that cover `resource_type`.
    pub fn policies_for_user_and_resource(
        &self,
        user: &str,
        resource_type: &str,
    ) -> Vec<Arc<Policy>> {
        self.bindings
            .policies_for_user_and_resource(user, resource_type)
    }

    /// The decision primitive: is `user` allowed to apply `verb` to
    /// `resource_type`, optionally restricted to any of the given instance
    /// `names`?
    ///
    /// Walks the policies reachable from the user's bound roles for the
    /// resource type; the first policy whose verb set allows `verb` and —
    /// when `names` is non-empty — whose name patterns allow at least one of
    /// them, grants access. No match means deny.
    pub fn allowed_for_user(
        &self,
        user: &str,
        resource_type: &str,
        verb: &str,
        names: &[&str],
    ) -> bool {
        for policy in self.policies_for_user_and_resource(user, resource_type) {
            if !policy.verb_allowed(verb) {
                continue;
            }
            if names.is_empty() || names.iter().any(|n| policy.resource_name_allowed(n)) {
                debug!(user, resource = resource_type, verb, "access granted");
                return true;
            }
        }

        debug!(user, resource = resource_type, verb, "access denied");
        false
    }
}
