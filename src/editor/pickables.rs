use crate::scene::NodeId;

/// Meshes the pointer may pick, in registration order.
///
/// Loaders append every mesh of a new model; replacing a model removes its
/// meshes again. A node appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pickables {
    nodes: Vec<NodeId>,
}

impl Pickables {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node`. Returns `false` if it was already registered.
    pub fn register(&mut self, node: NodeId) -> bool {
        if self.nodes.contains(&node) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Remove every node in `nodes`. Returns how many were registered.
    pub fn unregister(&mut self, nodes: &[NodeId]) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|node| !nodes.contains(node));
        before - self.nodes.len()
    }

    /// Registered nodes in registration order.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Whether `node` is registered.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
