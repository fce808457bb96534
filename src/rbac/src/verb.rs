//! The closed verb vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// An action keyword from the closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    List,
    Get,
    Create,
    Update,
    Patch,
}

impl Verb {
    /// Parse a verb, returning `None` for anything outside the vocabulary.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "list" => Some(Verb::List),
            "get" => Some(Verb::Get),
            "create" => Some(Verb::Create),
            "update" => Some(Verb::Update),
            "patch" => Some(Verb::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::List => "list",
            Verb::Get => "get",
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Patch => "patch",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verb entry in a policy: either a literal verb or the wildcard `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VerbPattern {
    /// The wildcard `*`, allowing every verb.
    Any,
    Verb(Verb),
}

impl VerbPattern {
    /// Parse a verb pattern, returning `None` for an unknown verb.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "*" {
            Some(VerbPattern::Any)
        } else {
            Verb::parse(s).map(VerbPattern::Verb)
        }
    }

    /// True if this entry allows `verb`. A word outside the vocabulary is
    /// never allowed by a literal entry, only by the wildcard.
    pub fn allows(&self, verb: &str) -> bool {
        match self {
            VerbPattern::Any => true,
            VerbPattern::Verb(v) => v.as_str() == verb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerbPattern::Any => "*",
            VerbPattern::Verb(v) => v.as_str(),
        }
    }
}

impl fmt::Display for VerbPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for VerbPattern {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        VerbPattern::parse(&s).ok_or_else(|| format!("unknown verb: {s}"))
    }
}

impl From<VerbPattern> for String {
    fn from(v: VerbPattern) -> Self {
        v.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_verbs_parse() {
        for word in ["list", "get", "create", "update", "patch"] {
            let verb = Verb::parse(word).unwrap();
            assert_eq!(verb.as_str(), word);
        }
    }

    #[test]
    fn unknown_verbs_do_not_parse() {
        assert!(Verb::parse("delete").is_none());
        assert!(Verb::parse("*").is_none());
        assert!(Verb::parse("").is_none());
        assert!(Verb::parse("GET").is_none());
    }

    #[test]
    fn wildcard_allows_everything() {
        let any = VerbPattern::parse("*").unwrap();
        assert_eq!(any, VerbPattern::Any);
        assert!(any.allows("get"));
        assert!(any.allows("update"));
        // even words outside the vocabulary: the wildcard is unconditional
        assert!(any.allows("delete"));
    }

    #[test]
    fn literal_allows_only_itself() {
        let get = VerbPattern::parse("get").unwrap();
        assert!(get.allows("get"));
        assert!(!get.allows("list"));
        assert!(!get.allows("*"));
    }
}
