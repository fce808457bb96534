//! # StratoVM RBAC
//!
//! In-process role-based access control decision engine: who may apply which
//! verb to which resource. Policies grant verbs on glob-matched resource
//! types and names, roles bundle policies under a name, and a binding table
//! maps user identities to roles. The model is a pure allow-list — there are
//! no deny policies and no role hierarchy, and anything not granted is
//! denied.
//!
//! ## Example
//!
//! ```rust
//! use stratovm_rbac::{Policy, RbacEngine};
//!
//! fn main() -> stratovm_rbac::Result<()> {
//!     let engine = RbacEngine::new();
//!
//!     let mut policy = Policy::new();
//!     policy.add_resource_types(["vms", "vms/*"]);
//!     policy.add_resource_names(["prod_*"])?;
//!     policy.add_verbs(["list", "get"])?;
//!
//!     let viewer = engine.new_role("Viewer", [policy])?;
//!     engine.bind_user("viewer@example.com", &viewer);
//!
//!     assert!(engine.allowed_for_user("viewer@example.com", "vms/vnc", "get", &["prod_web"]));
//!     assert!(!engine.allowed_for_user("viewer@example.com", "vms/vnc", "update", &[]));
//!
//!     Ok(())
//! }
//! ```
//!
//! Decision queries never fail: unknown users, resources, and verbs are
//! plain denies. Only the mutation surface (adding patterns and verbs,
//! attaching policies, loading manifests) reports validation errors, and it
//! does so with partial-commit semantics — well-formed entries in a batch
//! are kept while every rejected one is named in the error.

pub mod binding;
pub mod engine;
pub mod error;
pub mod loader;
pub mod pattern;
pub mod policy;
pub mod role;
pub mod verb;

// Re-export commonly used types
pub use binding::BindingTable;
pub use engine::RbacEngine;
pub use error::{RbacError, Result};
pub use loader::RoleManifest;
pub use policy::Policy;
pub use role::Role;
pub use verb::{Verb, VerbPattern};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
