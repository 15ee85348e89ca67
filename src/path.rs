//! # Path extraction
//! Backtracks through parent indices from the node that reached the goal.
use crate::common::Point;
use crate::tree::Tree;
use crate::utils;

/// Collects the points from `leaf` back towards the root and returns them in start-to-goal
/// order.
///
/// The walk stops at the root, or earlier at the first ancestor of `leaf` that lies within
/// `step_size` of `goal`. `leaf` itself is always within that distance when the goal has just
/// been reached, so it is not tested.
pub fn extract_path(tree: &Tree, leaf: usize, goal: &Point, step_size: f64) -> Vec<Point> {
    let Some(leaf_node) = tree.get(leaf) else {
        return Vec::new();
    };
    let mut path = vec![leaf_node.point];
    let mut current = leaf_node.parent;
    while let Some(index) = current {
        let node = &tree[index];
        path.push(node.point);
        if utils::distance(&node.point, goal) <= step_size {
            break;
        }
        current = node.parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn test_extract_path_reaches_root() {
        let mut tree = Tree::with_root(Vector2::new(0.0, 0.0));
        tree.insert(Vector2::new(20.0, 0.0), Some(0)).unwrap();
        tree.insert(Vector2::new(0.0, 20.0), Some(0)).unwrap();
        tree.insert(Vector2::new(40.0, 0.0), Some(1)).unwrap();
        tree.insert(Vector2::new(60.0, 0.0), Some(3)).unwrap();

        let goal = Vector2::new(70.0, 0.0);
        let path = extract_path(&tree, 4, &goal, 20.0);
        assert_eq!(
            path,
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(20.0, 0.0),
                Vector2::new(40.0, 0.0),
                Vector2::new(60.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_extract_path_from_root_child() {
        let mut tree = Tree::with_root(Vector2::new(0.0, 0.0));
        tree.insert(Vector2::new(5.0, 0.0), Some(0)).unwrap();
        let path = extract_path(&tree, 1, &Vector2::new(10.0, 0.0), 20.0);
        assert_eq!(path, vec![Vector2::new(0.0, 0.0), Vector2::new(5.0, 0.0)]);
    }

    #[test]
    fn test_extract_path_stops_at_goal_adjacent_ancestor() {
        // The chain detours through a point exactly one step from the goal.
        let mut tree = Tree::with_root(Vector2::new(0.0, 0.0));
        tree.insert(Vector2::new(80.0, 0.0), Some(0)).unwrap();
        tree.insert(Vector2::new(100.0, 10.0), Some(1)).unwrap();
        let goal = Vector2::new(100.0, 0.0);
        let path = extract_path(&tree, 2, &goal, 20.0);
        assert_eq!(path, vec![Vector2::new(80.0, 0.0), Vector2::new(100.0, 10.0)]);
    }

    #[test]
    fn test_extract_path_from_root_or_missing_leaf() {
        let tree = Tree::with_root(Vector2::new(1.0, 1.0));
        assert_eq!(
            extract_path(&tree, 0, &Vector2::new(2.0, 2.0), 5.0),
            vec![Vector2::new(1.0, 1.0)]
        );
        assert!(extract_path(&tree, 3, &Vector2::new(2.0, 2.0), 5.0).is_empty());
    }
}
