// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node arena: structure, path addressing, and traversal.

use alloc::vec::Vec;

use crate::types::{Children, NodeId, TreeNode, TreePath};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    parent: Option<NodeId>,
    node: TreeNode,
}

/// An ordered forest of [`TreeNode`]s stored in a generational arena.
///
/// Parents own their children through [`Children::Loaded`]; the parent link
/// kept per slot is for lookup only.
///
/// ## Example
///
/// ```rust
/// use trellis_tree::{Forest, TreeNode};
///
/// let mut forest = Forest::new();
/// let a = forest.insert(None, TreeNode::new("A").with_expanded(true));
/// let b = forest.insert(Some(a), TreeNode::new("B"));
///
/// assert_eq!(forest.path_of(b).unwrap().as_slice(), &[0, 0]);
/// assert_eq!(forest.node_at(&[0, 0]), Some(b));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Forest {
    /// slots
    nodes: Vec<Option<Slot>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    roots: Vec<NodeId>,
}

/// A visible row: a node whose ancestors are all expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleRow {
    /// The node shown on this row.
    pub node: NodeId,
    /// Path of the node.
    pub path: TreePath,
    /// Position among the visible rows.
    pub tree_index: usize,
}

impl Forest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node as the last child of `parent` (or as the last root if `None`).
    ///
    /// Inserting under a leaf or a lazily-loaded parent turns its children into
    /// a loaded sequence.
    pub fn insert(&mut self, parent: Option<NodeId>, node: TreeNode) -> NodeId {
        let slot = |generation| Slot {
            generation,
            parent: None,
            node,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(slot(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(slot(generation)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId indices are 32-bit."
        )]
        let id = NodeId::new(idx as u32, generation);
        match parent.filter(|p| self.is_alive(*p)) {
            Some(p) => {
                self.slot_mut(id).parent = Some(p);
                let parent_node = &mut self.slot_mut(p).node;
                match &mut parent_node.children {
                    Children::Loaded(ids) => ids.push(id),
                    other => *other = Children::Loaded(alloc::vec![id]),
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Remove a node and its subtree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        match self.slot(id).parent {
            Some(parent) => {
                if let Children::Loaded(ids) = &mut self.slot_mut(parent).node.children {
                    ids.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
        self.free_subtree(id);
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = self.slot(id).node.children.loaded().to_vec();
        for child in children {
            self.free_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns `true` if the forest holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Root nodes in order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Node data for a live id.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.slot_opt(id).map(|s| &s.node)
    }

    /// Mutable node data for a live id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.slot_opt_mut(id).map(|s| &mut s.node)
    }

    /// Parent of a live node, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot_opt(id).and_then(|s| s.parent)
    }

    /// Loaded children of a live node, or an empty slice.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.slot_opt(id)
            .map(|s| s.node.children.loaded())
            .unwrap_or(&[])
    }

    /// Path of a live node, computed by walking up the parent links.
    pub fn path_of(&self, id: NodeId) -> Option<TreePath> {
        let mut path = TreePath::new();
        let mut current = id;
        loop {
            let slot = self.slot_opt(current)?;
            let siblings = match slot.parent {
                Some(p) => self.children_of(p),
                None => &self.roots,
            };
            path.push(siblings.iter().position(|s| *s == current)?);
            match slot.parent {
                Some(p) => current = p,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }

    /// Resolve a path to a node.
    pub fn node_at(&self, path: &[usize]) -> Option<NodeId> {
        let (&first, rest) = path.split_first()?;
        let mut current = *self.roots.get(first)?;
        for &i in rest {
            current = *self.children_of(current).get(i)?;
        }
        Some(current)
    }

    /// Depth of a live node (roots have depth 1).
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = Some(id);
        while let Some(c) = current {
            self.slot_opt(c)?;
            depth += 1;
            current = self.parent_of(c);
        }
        Some(depth)
    }

    /// Returns `true` if `younger` is somewhere below `older`.
    ///
    /// Lazily-loaded children are not searched.
    pub fn is_descendant(&self, older: NodeId, younger: NodeId) -> bool {
        self.children_of(older)
            .iter()
            .any(|&child| child == younger || self.is_descendant(child, younger))
    }

    /// Flip the expanded flag of a node and return the new value.
    pub fn toggle_expanded(&mut self, id: NodeId) -> Option<bool> {
        let node = self.get_mut(id)?;
        node.expanded = !node.expanded;
        Some(node.expanded)
    }

    /// Set the expanded flag on every live node.
    pub fn set_expanded_all(&mut self, expanded: bool) {
        for slot in self.nodes.iter_mut().flatten() {
            slot.node.expanded = expanded;
        }
    }

    /// Every live node reachable from the roots, parents before children.
    pub fn depth_first(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children_of(id).iter().rev().copied());
        }
        out
    }

    /// Rows the host list shows: every node whose ancestors are all expanded,
    /// in tree-index order.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut stack: Vec<(NodeId, TreePath)> = self
            .roots
            .iter()
            .enumerate()
            .rev()
            .map(|(i, &id)| (id, TreePath::from_slice(&[i])))
            .collect();
        while let Some((id, path)) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            if node.expanded {
                for (i, &child) in node.children.loaded().iter().enumerate().rev() {
                    let mut child_path = path.clone();
                    child_path.push(i);
                    stack.push((child, child_path));
                }
            }
            let tree_index = rows.len();
            rows.push(VisibleRow {
                node: id,
                path,
                tree_index,
            });
        }
        rows
    }

    fn slot(&self, id: NodeId) -> &Slot {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut Slot {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn slot_opt(&self, id: NodeId) -> Option<&Slot> {
        let s = self.nodes.get(id.idx())?.as_ref()?;
        (s.generation == id.1).then_some(s)
    }

    fn slot_opt_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        let s = self.nodes.get_mut(id.idx())?.as_mut()?;
        (s.generation == id.1).then_some(s)
    }
}
