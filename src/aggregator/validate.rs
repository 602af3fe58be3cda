//! Check a flattened node list against the tree invariants.

use super::hierarchy::FlatNode;
use crate::utils::error::TreeError;
use std::collections::HashMap;

/// Validate a node list
///
/// **Public** - used by the validate command and tests
///
/// Checks, in emission order:
/// - exactly one root (empty parent)
/// - unique ids
/// - every parent id refers to a node emitted earlier
/// - every node with children has a value equal to their sum
/// - a root without children has value 0
///
/// # Errors
/// The first violation found, as a `TreeError`
pub fn validate_tree(nodes: &[FlatNode]) -> Result<(), TreeError> {
    if nodes.is_empty() {
        return Err(TreeError::MissingRoot);
    }

    let mut seen: HashMap<&str, u64> = HashMap::with_capacity(nodes.len());
    let mut child_sums: HashMap<&str, u64> = HashMap::new();
    let mut root: Option<&str> = None;

    for node in nodes {
        if node.parent.is_empty() {
            if root.is_some() {
                return Err(TreeError::MultipleRoots(node.id.clone()));
            }
            root = Some(node.id.as_str());
        } else if !seen.contains_key(node.parent.as_str()) {
            return Err(TreeError::DanglingParent {
                child: node.id.clone(),
                parent: node.parent.clone(),
            });
        } else {
            let sum = child_sums.entry(node.parent.as_str()).or_insert(0);
            *sum = sum
                .checked_add(node.value)
                .ok_or_else(|| TreeError::ValueOverflow {
                    id: node.parent.clone(),
                })?;
        }

        if seen.insert(node.id.as_str(), node.value).is_some() {
            return Err(TreeError::DuplicateId(node.id.clone()));
        }
    }

    let root = root.ok_or(TreeError::MissingRoot)?;

    // Report mismatches in emission order
    for node in nodes {
        let children = match child_sums.get(node.id.as_str()) {
            Some(&sum) => Some(sum),
            // An empty tree still has a root, counting nothing
            None if node.id == root => Some(0),
            None => None,
        };

        if let Some(children) = children {
            if children != node.value {
                return Err(TreeError::ValueMismatch {
                    id: node.id.clone(),
                    value: node.value,
                    children,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, parent: &str, value: u64) -> FlatNode {
        FlatNode {
            id: id.to_string(),
            label: id.to_string(),
            parent: parent.to_string(),
            value,
        }
    }

    #[test]
    fn test_valid_tree() {
        let nodes = vec![node("root", "", 3), node("a", "root", 2), node("b", "root", 1)];
        assert!(validate_tree(&nodes).is_ok());
    }

    #[test]
    fn test_lone_root_with_zero_is_valid() {
        assert!(validate_tree(&[node("root", "", 0)]).is_ok());
    }

    #[test]
    fn test_lone_root_with_nonzero_value() {
        assert_eq!(
            validate_tree(&[node("root", "", 7)]),
            Err(TreeError::ValueMismatch {
                id: "root".to_string(),
                value: 7,
                children: 0,
            })
        );
    }

    #[test]
    fn test_child_sum_overflow() {
        let nodes = vec![
            node("root", "", 5),
            node("a", "root", u64::MAX),
            node("b", "root", 2),
        ];
        assert_eq!(
            validate_tree(&nodes),
            Err(TreeError::ValueOverflow {
                id: "root".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(validate_tree(&[]), Err(TreeError::MissingRoot));
    }

    #[test]
    fn test_duplicate_id() {
        let nodes = vec![node("root", "", 2), node("a", "root", 1), node("a", "root", 1)];
        assert_eq!(
            validate_tree(&nodes),
            Err(TreeError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn test_parent_must_come_first() {
        let nodes = vec![node("root", "", 1), node("leaf", "a", 1), node("a", "root", 1)];
        assert!(matches!(
            validate_tree(&nodes),
            Err(TreeError::DanglingParent { .. })
        ));
    }

    #[test]
    fn test_value_mismatch() {
        let nodes = vec![node("root", "", 5), node("a", "root", 2)];
        assert_eq!(
            validate_tree(&nodes),
            Err(TreeError::ValueMismatch {
                id: "root".to_string(),
                value: 5,
                children: 2,
            })
        );
    }

    #[test]
    fn test_two_roots() {
        let nodes = vec![node("root", "", 0), node("other", "", 0)];
        assert_eq!(
            validate_tree(&nodes),
            Err(TreeError::MultipleRoots("other".to_string()))
        );
    }
}
