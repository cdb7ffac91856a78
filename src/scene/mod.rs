//! Authoritative scene graph: node storage, hierarchy edits, and world
//! transforms.
//!
//! Nodes live in a flat map keyed by [`NodeId`]. Hierarchy is expressed
//! through parent/child links; nodes listed in [`Scene::roots`] are the
//! ones actually drawn. A node can exist detached (spawned but not
//! added) while it is being assembled.

pub mod mesh_gen;
mod node;
pub mod raycast;

use glam::{Mat4, Vec3};
pub use node::{
    LineStyle, MeshData, MeshMaterial, Node, NodeId, NodeKind, TextureHandle,
    Transform,
};
pub use raycast::{Plane, Ray, RayHit};
use rustc_hash::FxHashMap;

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The node graph the editor manipulates and the renderer draws.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: FxHashMap<NodeId, Node>,
    /// Top-level nodes in insertion order.
    roots: Vec<NodeId>,
    next_id: u32,
    /// Clear colour (linear RGB).
    pub background: [f32; 3],
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene with a black background.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            roots: Vec::new(),
            next_id: 0,
            background: [0.0; 3],
            generation: 0,
            rendered_generation: 0,
        }
    }

    // -- Mutation helpers --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Record that the renderer has consumed the current state.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Storage --

    /// Store a node without attaching it anywhere.
    pub fn spawn(&mut self, mut node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        node.parent = None;
        node.children.clear();
        let _ = self.nodes.insert(id, node);
        self.invalidate();
        id
    }

    /// Spawn a node and add it at the top level.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = self.spawn(node);
        self.roots.push(id);
        id
    }

    /// Add an existing detached node at the top level.
    ///
    /// Returns `false` if the node is unknown or already attached.
    pub fn add_root(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.get(&id) else {
            return false;
        };
        if node.parent.is_some() || self.roots.contains(&id) {
            return false;
        }
        self.roots.push(id);
        self.invalidate();
        true
    }

    /// Take a top-level node out of the drawn set without destroying it.
    pub fn remove_root(&mut self, id: NodeId) -> bool {
        let before = self.roots.len();
        self.roots.retain(|root| *root != id);
        let removed = self.roots.len() != before;
        if removed {
            self.invalidate();
        }
        removed
    }

    /// Top-level nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Whether `id` resolves to a stored node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Whether `id` is reachable from a top-level node.
    #[must_use]
    pub fn is_in_scene(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            match self.nodes.get(&current) {
                None => return false,
                Some(node) => match node.parent {
                    Some(parent) => current = parent,
                    None => return self.roots.contains(&current),
                },
            }
        }
    }

    /// Look up a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutable node lookup. Marks the scene dirty.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.nodes.contains_key(&id) {
            self.invalidate();
        }
        self.nodes.get_mut(&id)
    }

    /// Number of stored nodes, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -- Hierarchy --

    /// Append `child` as the last child of `parent`.
    ///
    /// Returns `false` if either node is unknown, the child is already
    /// attached somewhere, or the link would create a cycle.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child
            || !self.nodes.contains_key(&parent)
            || self.roots.contains(&child)
            || self.is_ancestor(child, parent)
        {
            return false;
        }
        match self.nodes.get_mut(&child) {
            Some(node) if node.parent.is_none() => node.parent = Some(parent),
            _ => return false,
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
        self.invalidate();
        true
    }

    /// Unlink `child` from `parent`, leaving the child stored but detached.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(node) = self.nodes.get_mut(&parent) else {
            return false;
        };
        let Some(index) = node.children.iter().position(|c| *c == child)
        else {
            return false;
        };
        let _ = node.children.remove(index);
        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = None;
        }
        self.invalidate();
        true
    }

    /// Children of `id` in attachment order; empty for unknown nodes.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Most recently attached child of `id`.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Number of direct children of `id`.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// `id` followed by all of its descendants, depth first.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                out.push(current);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn is_ancestor(&self, ancestor: NodeId, of: NodeId) -> bool {
        let mut current = self.nodes.get(&of).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    /// Unlink a node from its parent (or the top level) and destroy it
    /// together with its whole subtree. Returns the number of nodes removed.
    pub fn despawn(&mut self, id: NodeId) -> usize {
        let Some(parent) = self.nodes.get(&id).map(|n| n.parent) else {
            return 0;
        };
        match parent {
            Some(parent) => {
                let _ = self.remove_child(parent, id);
            }
            None => {
                let _ = self.remove_root(id);
            }
        }
        let subtree = self.descendants(id);
        for node_id in &subtree {
            let _ = self.nodes.remove(node_id);
        }
        self.invalidate();
        subtree.len()
    }

    // -- Transforms --

    /// Local position of a node.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Vec3> {
        self.nodes.get(&id).map(|n| n.transform.position)
    }

    /// Overwrite the local position of a node. Returns `false` if unknown.
    pub fn set_position(&mut self, id: NodeId, position: Vec3) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.transform.position = position;
                self.invalidate();
                true
            }
            None => false,
        }
    }

    /// Local-to-world matrix composed through all ancestors.
    #[must_use]
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.nodes.get(&node_id) else {
                break;
            };
            matrix = node.transform.matrix() * matrix;
            current = node.parent;
        }
        matrix
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
