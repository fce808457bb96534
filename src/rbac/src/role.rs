//! Role definition: a named bundle of policies with a resource-type index

use crate::error::{RbacError, Result};
use crate::pattern;
use crate::policy::Policy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// A named, reusable bundle of [`Policy`] grants.
///
/// A role is identified by reference: two roles constructed separately are
/// distinct entities even with identical content. Policies accumulate over
/// time through [`Role::add_policies`]; the attached set only grows.
///
/// Alongside the policy list the role keeps an index from each declared
/// resource-type pattern to the policies declaring it, built incrementally
/// as policies attach, so a decision query only walks the index keys instead
/// of every policy's pattern set.
#[derive(Debug)]
pub struct Role {
    name: String,
    inner: RwLock<RoleInner>,
}

#[derive(Debug, Default)]
struct RoleInner {
    /// Attached policies, in attachment order.
    policies: Vec<Arc<Policy>>,
    /// resource-type pattern -> policies declaring it.
    index: HashMap<String, Vec<Arc<Policy>>>,
    /// Deduplicated aggregate of every attached policy's resource-name
    /// patterns. Introspection only, never consulted by decisions.
    resource_names: Vec<String>,
}

impl Role {
    /// Create an empty role.
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            inner: RwLock::new(RoleInner::default()),
        })
    }

    /// Create a role and attach `policies`.
    ///
    /// Unlike [`Role::add_policies`] this is all-or-nothing: any validation
    /// error discards the role, which suits load-time construction where a
    /// misconfigured role must not come into service.
    pub fn with_policies<I>(name: impl Into<String>, policies: I) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = Policy>,
    {
        let role = Role::new(name);
        role.add_policies(policies)?;
        Ok(role)
    }

    /// Role name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach policies to this role.
    ///
    /// Every policy joins the policy list. Each of its resource-type patterns
    /// is validated as glob syntax and, when well-formed, gains an index
    /// entry pointing back at the policy; malformed patterns are skipped and
    /// collected into the error while the rest of the batch still commits.
    /// Re-adding a policy appends it again — duplicates are allowed and do
    /// not change decisions.
    pub fn add_policies<I>(&self, policies: I) -> Result<()>
    where
        I: IntoIterator<Item = Policy>,
    {
        let mut invalid = Vec::new();
        let mut inner = self.inner.write();

        for policy in policies {
            let policy = Arc::new(policy);

            for type_pattern in policy.resource_types() {
                if !pattern::is_valid(type_pattern) {
                    warn!(
                        role = %self.name,
                        pattern = %type_pattern,
                        "skipping malformed resource-type pattern"
                    );
                    invalid.push(type_pattern.clone());
                    continue;
                }
                inner
                    .index
                    .entry(type_pattern.clone())
                    .or_default()
                    .push(Arc::clone(&policy));
            }

            for name_pattern in policy.resource_names() {
                if !inner.resource_names.iter().any(|n| n == name_pattern) {
                    inner.resource_names.push(name_pattern.clone());
                }
            }

            inner.policies.push(policy);
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(RbacError::InvalidPattern(invalid.join(", ")))
        }
    }

    /// Every policy whose resource-type patterns cover `resource_type`.
    ///
    /// Each index key that is the match-all `*` or glob-matches
    /// `resource_type` contributes its entry. A policy indexed under several
    /// matching keys appears once per key; the redundancy is harmless to the
    /// boolean decision.
    pub fn policies_for_resource(&self, resource_type: &str) -> Vec<Arc<Policy>> {
        let inner = self.inner.read();
        let mut out = Vec::new();

        for (type_pattern, policies) in &inner.index {
            if pattern::is_match_all(type_pattern)
                || pattern::matches(type_pattern, resource_type)
            {
                out.extend(policies.iter().cloned());
            }
        }

        out
    }

    /// True if any policy of this role grants `verb` on `resource_type`,
    /// restricted to the given instance `names` when non-empty.
    pub fn allowed(&self, resource_type: &str, verb: &str, names: &[&str]) -> bool {
        for policy in self.policies_for_resource(resource_type) {
            if !policy.verb_allowed(verb) {
                continue;
            }
            if names.is_empty() || names.iter().any(|n| policy.resource_name_allowed(n)) {
                return true;
            }
        }

        false
    }

    /// Attached policies, in attachment order.
    pub fn policies(&self) -> Vec<Arc<Policy>> {
        self.inner.read().policies.clone()
    }

    /// Deduplicated resource-name patterns across all attached policies.
    /// Audit surface; decisions never consult it.
    pub fn resource_names(&self) -> Vec<String> {
        self.inner.read().resource_names.clone()
    }
}
