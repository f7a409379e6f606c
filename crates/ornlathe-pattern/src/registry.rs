//! Explicit registry of the built-in patterns.

use std::collections::BTreeMap;

use crate::{Pattern, PatternError};

/// Name-keyed collection of the built-in patterns.
///
/// Built once at startup and passed by reference to consumers; the
/// document layer resolves persisted pattern names through it. There is
/// no process-wide mutable registry.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: BTreeMap<&'static str, Pattern>,
}

impl PatternRegistry {
    /// Registry holding every built-in pattern.
    pub fn builtin() -> Self {
        let patterns = Pattern::ALL.iter().map(|p| (p.name(), *p)).collect();
        Self { patterns }
    }

    /// Look up a pattern by its registry name.
    pub fn get(&self, name: &str) -> Result<Pattern, PatternError> {
        self.patterns
            .get(name)
            .copied()
            .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))
    }

    /// Names of all registered patterns, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.keys().copied()
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_has_all_patterns() {
        let registry = PatternRegistry::builtin();
        assert_eq!(registry.len(), Pattern::ALL.len());
        for pattern in Pattern::ALL {
            assert_eq!(registry.get(pattern.name()).unwrap(), pattern);
        }
    }

    #[test]
    fn test_unknown_pattern_is_an_error() {
        let registry = PatternRegistry::builtin();
        let err = registry.get("NOPE").unwrap_err();
        assert!(err.to_string().contains("NOPE"));
    }

    #[test]
    fn test_names_sorted() {
        let registry = PatternRegistry::builtin();
        let names: Vec<_> = registry.names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
