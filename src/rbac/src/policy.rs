//! Policy definition: a single grant of verbs on matching resources

use crate::error::{RbacError, Result};
use crate::pattern;
use crate::verb::VerbPattern;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single grant: resource-type patterns, resource-name patterns, and verbs.
///
/// All three collections have set semantics — membership is duplicate-free,
/// insertion order is kept for introspection. A policy is built up mutably,
/// then attached to a [`Role`](crate::Role), which moves it behind an `Arc`
/// and freezes it.
///
/// Validation is partial-commit: a batch add keeps its well-formed entries
/// and reports every rejected one in the returned error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    resource_types: Vec<String>,
    resource_names: Vec<String>,
    verbs: Vec<VerbPattern>,
}

impl Policy {
    /// Create an empty policy. A policy with no verbs grants nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add resource-type patterns.
    ///
    /// Syntax validation for these happens when the policy is attached to a
    /// role, where each pattern becomes an index key.
    pub fn add_resource_types<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            let pattern = pattern.into();
            if !self.resource_types.contains(&pattern) {
                self.resource_types.push(pattern);
            }
        }
    }

    /// Add resource-name patterns, validating glob syntax.
    ///
    /// Malformed patterns are excluded and collected into the error;
    /// well-formed patterns from the same call are committed.
    pub fn add_resource_names<I, S>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut invalid = Vec::new();

        for pattern in patterns {
            let pattern = pattern.into();
            if !pattern::is_valid(&pattern) {
                warn!(pattern = %pattern, "rejecting malformed resource-name pattern");
                invalid.push(pattern);
                continue;
            }
            if !self.resource_names.contains(&pattern) {
                self.resource_names.push(pattern);
            }
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(RbacError::InvalidPattern(invalid.join(", ")))
        }
    }

    /// Add verbs, validating against the known vocabulary (or `*`).
    ///
    /// Unknown verbs are excluded and collected into the error; each accepted
    /// verb joins the set exactly once no matter how often it is re-added.
    pub fn add_verbs<I, S>(&mut self, verbs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unknown = Vec::new();

        for verb in verbs {
            let verb = verb.as_ref();
            match VerbPattern::parse(verb) {
                Some(parsed) => {
                    if !self.verbs.contains(&parsed) {
                        self.verbs.push(parsed);
                    }
                }
                None => {
                    warn!(verb, "rejecting unknown verb");
                    unknown.push(verb.to_string());
                }
            }
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(RbacError::UnknownVerb(unknown.join(", ")))
        }
    }

    /// True if the policy's verb set contains `verb` or the wildcard `*`.
    pub fn verb_allowed(&self, verb: &str) -> bool {
        self.verbs.iter().any(|v| v.allows(verb))
    }

    /// True if any resource-name pattern is the literal `*` or glob-matches
    /// `name`.
    pub fn resource_name_allowed(&self, name: &str) -> bool {
        self.resource_names
            .iter()
            .any(|p| pattern::is_match_all(p) || pattern::matches(p, name))
    }

    /// Resource-type patterns declared by this policy, in insertion order.
    pub fn resource_types(&self) -> &[String] {
        &self.resource_types
    }

    /// Resource-name patterns declared by this policy, in insertion order.
    pub fn resource_names(&self) -> &[String] {
        &self.resource_names
    }

    /// Verb entries of this policy, in insertion order.
    pub fn verbs(&self) -> &[VerbPattern] {
        &self.verbs
    }
}
