//! # Tree
//! Append-only arena of [`RRTNode`]s. Nodes refer to their parent by index, the root sits at
//! index 0 and every other node's parent has a smaller index than the node itself.
use crate::common::{Point, RRTNode};
use crate::rrt_error::{RRTError, Result};
use crate::utils;
use serde::{Deserialize, Serialize};
use std::ops::Index;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RRTNode>", into = "Vec<RRTNode>")]
pub struct Tree {
    nodes: Vec<RRTNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_root(root: Point) -> Self {
        Self {
            nodes: vec![RRTNode::new(root, None)],
        }
    }

    /// Appends a node and returns its index. `parent` must be `None` for the first node and an
    /// existing index for every other node.
    pub fn insert(&mut self, point: Point, parent: Option<usize>) -> Result<usize> {
        let len = self.nodes.len();
        match parent {
            None if len > 0 => return Err(RRTError::RootExists),
            Some(parent) if parent >= len => return Err(RRTError::InvalidParent { parent, len }),
            _ => {}
        }
        self.nodes.push(RRTNode::new(point, parent));
        Ok(len)
    }

    /// Brute-force nearest neighbor. On exact ties the earliest inserted node wins.
    pub fn nearest(&self, point: &Point) -> Option<usize> {
        let mut min_distance = f64::INFINITY;
        let mut nearest = None;
        for (i, node) in self.nodes.iter().enumerate() {
            let d = utils::distance(&node.point, point);
            if d < min_distance {
                min_distance = d;
                nearest = Some(i);
            }
        }
        nearest
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&RRTNode> {
        self.nodes.first()
    }

    pub fn get(&self, index: usize) -> Option<&RRTNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[RRTNode] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RRTNode> {
        self.nodes.iter()
    }

    /// (child, parent) point pairs for every non-root node, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.nodes.iter().filter_map(move |node| {
            node.parent
                .map(|parent| (node.point, self.nodes[parent].point))
        })
    }
}

/// Rebuilds the tree node by node, so a loaded snapshot obeys the same parent rules as
/// [`Tree::insert`].
impl TryFrom<Vec<RRTNode>> for Tree {
    type Error = RRTError;

    fn try_from(nodes: Vec<RRTNode>) -> Result<Self> {
        let mut tree = Tree::new();
        for node in nodes {
            tree.insert(node.point, node.parent)?;
        }
        Ok(tree)
    }
}

impl From<Tree> for Vec<RRTNode> {
    fn from(tree: Tree) -> Self {
        tree.nodes
    }
}

impl Index<usize> for Tree {
    type Output = RRTNode;

    fn index(&self, index: usize) -> &Self::Output {
        &self.nodes[index]
    }
}
