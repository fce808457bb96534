//! Role manifest loading
//!
//! The configuration collaborator: deserializes a role definition and feeds
//! it through the mutation surface. Any validation failure is fatal to the
//! whole load — a partially-valid role never comes into service.

use crate::engine::RbacEngine;
use crate::error::{RbacError, Result};
use crate::policy::Policy;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Manifest kind accepted by the role loader.
pub const ROLE_KIND: &str = "Role";

/// A serialized role definition.
///
/// ```json
/// {
///   "version": "v0",
///   "kind": "Role",
///   "metadata": { "name": "Viewer" },
///   "spec": {
///     "policies": [
///       { "resources": ["vms"], "resourceNames": ["foo_*"], "verbs": ["list"] }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleManifest {
    pub version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: RoleSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSpec {
    pub policies: Vec<PolicySpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySpec {
    pub resources: Vec<String>,
    #[serde(default)]
    pub resource_names: Vec<String>,
    #[serde(default)]
    pub verbs: Vec<String>,
}

impl RoleManifest {
    /// Parse a manifest from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the role this manifest describes, without registering it
    /// anywhere. Every validation error is fatal here.
    pub fn build(&self) -> Result<Arc<Role>> {
        if self.kind != ROLE_KIND {
            return Err(RbacError::UnexpectedKind {
                expected: ROLE_KIND,
                found: self.kind.clone(),
            });
        }

        let mut policies = Vec::with_capacity(self.spec.policies.len());
        for spec in &self.spec.policies {
            let mut policy = Policy::new();
            policy.add_resource_types(spec.resources.iter().cloned());
            policy.add_resource_names(spec.resource_names.iter().cloned())?;
            policy.add_verbs(&spec.verbs)?;
            policies.push(policy);
        }

        Role::with_policies(self.metadata.name.clone(), policies)
    }
}

impl RbacEngine {
    /// Load a role manifest from JSON and register the role it describes.
    ///
    /// Fatal-at-load-time semantics: a malformed pattern or unknown verb
    /// anywhere in the manifest fails the load and leaves the registry
    /// untouched.
    pub fn load_role_manifest(&self, json: &str) -> Result<Arc<Role>> {
        let manifest = RoleManifest::from_json(json)?;
        let role = manifest.build()?;

        self.register_role(Arc::clone(&role));
        info!(
            role = %role.name(),
            policies = role.policies().len(),
            "loaded role manifest"
        );

        Ok(role)
    }
}
