//! Permission store
//!
//! | Operator | Passes when              |
//! | And      | every code is granted    |
//! | Or       | at least one is granted  |
//!
//! An empty code list always passes.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::PermissionError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionOperator {
    #[default]
    And,
    Or,
}

impl PermissionOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionOperator::And => "and",
            PermissionOperator::Or => "or",
        }
    }
}

impl std::fmt::Display for PermissionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PermissionOperator {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "and" => Ok(PermissionOperator::And),
            "or" => Ok(PermissionOperator::Or),
            _ => Err(PermissionError::InvalidOperator(s.to_string())),
        }
    }
}

/// One code or a list of codes to check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionCodes {
    One(String),
    Many(Vec<String>),
}

impl PermissionCodes {
    pub fn as_slice(&self) -> &[String] {
        match self {
            PermissionCodes::One(code) => std::slice::from_ref(code),
            PermissionCodes::Many(codes) => codes,
        }
    }
}

impl From<&str> for PermissionCodes {
    fn from(code: &str) -> Self {
        PermissionCodes::One(code.to_string())
    }
}

impl From<String> for PermissionCodes {
    fn from(code: String) -> Self {
        PermissionCodes::One(code)
    }
}

impl From<Vec<String>> for PermissionCodes {
    fn from(codes: Vec<String>) -> Self {
        PermissionCodes::Many(codes)
    }
}

impl From<Vec<&str>> for PermissionCodes {
    fn from(codes: Vec<&str>) -> Self {
        PermissionCodes::Many(codes.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PermissionCodes {
    fn from(codes: [&str; N]) -> Self {
        PermissionCodes::Many(codes.iter().map(|c| c.to_string()).collect())
    }
}

/// Granted permission codes. Clones share the same set.
#[derive(Debug, Clone, Default)]
pub struct Permission {
    codes: Arc<RwLock<HashSet<String>>>,
}

impl Permission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let permission = Self::new();
        permission.set(codes);
        permission
    }

    /// Replace all granted codes
    pub fn set<I, S>(&self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes: HashSet<String> = codes.into_iter().map(Into::into).collect();
        tracing::debug!(count = codes.len(), "Granted permission codes replaced");
        *self.codes.write() = codes;
    }

    pub fn add(&self, code: impl Into<String>) {
        self.codes.write().insert(code.into());
    }

    pub fn remove(&self, code: &str) {
        self.codes.write().remove(code);
    }

    pub fn clear(&self) {
        self.codes.write().clear();
    }

    pub fn has(&self, code: &str) -> bool {
        self.codes.read().contains(code)
    }

    /// Granted codes, sorted
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.codes.read().iter().cloned().collect();
        codes.sort();
        codes
    }

    /// Check `value` against the granted codes
    pub fn check(&self, value: impl Into<PermissionCodes>, operator: PermissionOperator) -> bool {
        let value = value.into();
        let granted = self.codes.read();
        let codes = value.as_slice();

        if codes.is_empty() {
            return true;
        }

        match operator {
            PermissionOperator::And => codes.iter().all(|c| granted.contains(c)),
            PermissionOperator::Or => codes.iter().any(|c| granted.contains(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_operators() {
        let permission = Permission::with_codes(["list:add", "list:edit"]);

        assert!(permission.check("list:add", PermissionOperator::And));
        assert!(!permission.check("list:delete", PermissionOperator::Or));
        assert!(permission.check(["list:add", "list:edit"], PermissionOperator::And));
        assert!(!permission.check(["list:add", "list:delete"], PermissionOperator::And));
        assert!(permission.check(["list:add", "list:delete"], PermissionOperator::Or));
        assert!(permission.check(Vec::<String>::new(), PermissionOperator::Or));
    }

    #[test]
    fn test_mutations_are_shared_between_clones() {
        let permission = Permission::new();
        let handle = permission.clone();

        handle.add("list:delete");
        assert!(permission.has("list:delete"));

        permission.set(vec!["b".to_string(), "a".to_string()]);
        assert_eq!(handle.codes(), vec!["a", "b"]);

        handle.remove("a");
        assert!(!permission.has("a"));

        permission.clear();
        assert!(handle.codes().is_empty());
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!("or".parse::<PermissionOperator>(), Ok(PermissionOperator::Or));
        assert_eq!("AND".parse::<PermissionOperator>(), Ok(PermissionOperator::And));
        assert_eq!(
            "xor".parse::<PermissionOperator>(),
            Err(PermissionError::InvalidOperator("xor".to_string()))
        );
        assert_eq!(PermissionOperator::default(), PermissionOperator::And);
    }

    #[test]
    fn test_codes_deserialize_from_string_or_list() {
        let one: PermissionCodes = serde_json::from_str("\"list:add\"").unwrap();
        assert_eq!(one, PermissionCodes::from("list:add"));

        let many: PermissionCodes = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(many.as_slice(), ["a".to_string(), "b".to_string()]);
    }
}
