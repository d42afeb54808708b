//! Translation catalog: a language's complete nested key→string mapping.
//!
//! Catalogs are deserialized from hierarchical JSON objects whose interior
//! nodes are objects and whose leaves are strings (optionally containing
//! `{name}` placeholders). They are loaded once at startup and never mutated,
//! so shared read access across request contexts needs no coordination.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A node in a translation catalog tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CatalogNode {
    /// A translated string, optionally containing `{name}` placeholders
    Leaf(String),

    /// A nested group of keys
    Branch(BTreeMap<String, CatalogNode>),
}

impl CatalogNode {
    /// View this node as a branch, if it is one.
    pub fn as_branch(&self) -> Option<&BTreeMap<String, CatalogNode>> {
        match self {
            CatalogNode::Branch(children) => Some(children),
            CatalogNode::Leaf(_) => None,
        }
    }

    /// View this node as a leaf string, if it is one.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            CatalogNode::Leaf(value) => Some(value),
            CatalogNode::Branch(_) => None,
        }
    }
}

/// Walk a dotted key path through a nested mapping.
///
/// Splits `key` on `.` and descends segment by segment, using `branch` to
/// view an intermediate value as a nested mapping. Returns the value the
/// final segment lands on, or `None` if any segment is missing or an
/// intermediate value is not a mapping. Generic over the value type so the
/// same navigation works for any nested-mapping structure.
pub fn walk<'a, V, F>(root: &'a BTreeMap<String, V>, key: &str, branch: F) -> Option<&'a V>
where
    F: Fn(&'a V) -> Option<&'a BTreeMap<String, V>>,
{
    let mut segments = key.split('.');
    let mut current = root.get(segments.next()?)?;

    for segment in segments {
        current = branch(current)?.get(segment)?;
    }

    Some(current)
}

/// A language's complete translation catalog.
///
/// Immutable after deserialization; keys are addressed by dotted paths such
/// as `"credit.calculator.title"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    root: BTreeMap<String, CatalogNode>,
}

impl Catalog {
    /// Resolve a dotted key to its leaf string.
    ///
    /// Returns `None` if any segment is missing, if the path traverses a
    /// leaf, or if the final node is a branch rather than a string.
    pub fn get(&self, key: &str) -> Option<&str> {
        walk(&self.root, key, CatalogNode::as_branch)?.as_leaf()
    }

    /// Check whether a dotted key resolves to a leaf string.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Enumerate every dotted leaf key in the catalog, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.root, None, &mut keys);
        keys
    }
}

/// Recursively collect dotted leaf keys under a branch.
fn collect_keys(branch: &BTreeMap<String, CatalogNode>, prefix: Option<&str>, out: &mut Vec<String>) {
    for (segment, node) in branch {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, segment),
            None => segment.clone(),
        };
        match node {
            CatalogNode::Leaf(_) => out.push(path),
            CatalogNode::Branch(children) => collect_keys(children, Some(&path), out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        serde_json::from_str(
            r#"{
                "credit": {
                    "calculator": { "title": "Кредитный калькулятор" },
                    "status": { "approved": "Одобрен", "pending": "На рассмотрении" }
                },
                "validation": { "min_value": "Минимальное значение: {min}" },
                "greeting": "Здравствуйте"
            }"#,
        )
        .expect("Sample catalog should parse")
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_nested_leaf() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.get("credit.calculator.title"),
            Some("Кредитный калькулятор")
        );
    }

    #[test]
    fn test_get_top_level_leaf() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("greeting"), Some("Здравствуйте"));
    }

    #[test]
    fn test_get_missing_segment() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("credit.calculator.subtitle"), None);
    }

    #[test]
    fn test_get_missing_root() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("loans.title"), None);
    }

    #[test]
    fn test_get_branch_is_not_a_leaf() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("credit.status"), None);
    }

    #[test]
    fn test_get_path_through_leaf() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("greeting.more"), None);
    }

    #[test]
    fn test_get_empty_key() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get(""), None);
    }

    #[test]
    fn test_contains() {
        let catalog = sample_catalog();
        assert!(catalog.contains("credit.status.approved"));
        assert!(!catalog.contains("credit.status"));
        assert!(!catalog.contains("nonexistent.key"));
    }

    // ==================== Key Enumeration Tests ====================

    #[test]
    fn test_keys_lists_all_leaves() {
        let catalog = sample_catalog();
        let keys = catalog.keys();

        assert_eq!(
            keys,
            vec![
                "credit.calculator.title",
                "credit.status.approved",
                "credit.status.pending",
                "greeting",
                "validation.min_value",
            ]
        );
    }

    // ==================== Generic Walk Tests ====================

    #[test]
    fn test_walk_is_generic_over_value_type() {
        // The navigation works for any nested-mapping value type
        enum Node {
            Int(i64),
            Map(BTreeMap<String, Node>),
        }
        fn branch(node: &Node) -> Option<&BTreeMap<String, Node>> {
            match node {
                Node::Map(children) => Some(children),
                Node::Int(_) => None,
            }
        }

        let mut inner = BTreeMap::new();
        inner.insert("b".to_string(), Node::Int(42));
        let mut root = BTreeMap::new();
        root.insert("a".to_string(), Node::Map(inner));

        assert!(matches!(walk(&root, "a.b", branch), Some(Node::Int(42))));
        assert!(walk(&root, "a.b.c", branch).is_none());
        assert!(walk(&root, "a.missing", branch).is_none());
    }

    #[test]
    fn test_deserialize_rejects_non_string_leaf() {
        let result: Result<Catalog, _> = serde_json::from_str(r#"{"count": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_empty_object() {
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.keys().is_empty());
    }
}
