//! Little Snitch rule records and rule group documents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cidr::CidrEntry;
use crate::config::{DOCUMENT_DESCRIPTION, DOCUMENT_NAME};

/// Action applied when a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Block the connection
    #[default]
    Deny,
}

impl Action {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Deny => "deny",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Takes precedence over regular rules
    #[default]
    High,
}

impl Priority {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single firewall rule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub action: Action,
    pub priority: Priority,
    #[serde(rename = "remote-addresses")]
    pub remote_addresses: String,
}

impl Rule {
    /// Create a high priority deny rule for a remote address range.
    pub fn deny(remote_addresses: impl Into<String>) -> Self {
        Self {
            action: Action::Deny,
            priority: Priority::High,
            remote_addresses: remote_addresses.into(),
        }
    }
}

impl From<&CidrEntry> for Rule {
    fn from(entry: &CidrEntry) -> Self {
        Rule::deny(entry.to_string())
    }
}

impl From<CidrEntry> for Rule {
    fn from(entry: CidrEntry) -> Self {
        Rule::from(&entry)
    }
}

/// Rule group document as written to an `.lsrules` file.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDocument<R = Vec<Rule>> {
    pub description: String,
    pub name: String,
    pub rules: R,
}

impl<'a> RuleDocument<&'a [Rule]> {
    /// Wrap a batch of rules without copying it.
    pub fn borrowed(rules: &'a [Rule]) -> Self {
        Self {
            description: DOCUMENT_DESCRIPTION.to_string(),
            name: DOCUMENT_NAME.to_string(),
            rules,
        }
    }
}

impl RuleDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
