use std::fmt;

use glam::{Mat4, Quat, Vec3};

/// Stable handle to a node stored in a [`Scene`](super::Scene).
///
/// Handles are never reused within one scene, so a stale handle simply
/// stops resolving once its node is despawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw numeric value of the handle.
    #[must_use]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Local transform of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Orientation.
    pub rotation: Quat,
    /// Non-uniform scale.
    pub scale: Vec3,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Identity rotation and scale at `position`.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Local-to-parent matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.position,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Opaque reference to a texture owned by the rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Surface appearance of a mesh node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshMaterial {
    /// Flat unlit colour (linear RGB).
    Color([f32; 3]),
    /// Unlit textured surface.
    Texture(TextureHandle),
}

/// Indexed triangle geometry in the node's local space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Triangle list indices into `positions`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Iterate the triangles, skipping any that reference missing vertices.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|tri| {
            Some([
                *self.positions.get(tri[0] as usize)?,
                *self.positions.get(tri[1] as usize)?,
                *self.positions.get(tri[2] as usize)?,
            ])
        })
    }

    /// Number of complete triangles in the index list.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Stroke parameters for line nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Line colour (linear RGB).
    pub color: [f32; 3],
    /// Requested stroke width in pixels.
    pub width: f32,
    /// Whether the line is occluded by scene geometry.
    pub depth_test: bool,
    /// Whether the line writes depth.
    pub depth_write: bool,
}

/// What a node is. Traversals match on this instead of inspecting types.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Pickable triangle geometry.
    Mesh {
        /// Local-space geometry.
        mesh: MeshData,
        /// Surface appearance.
        material: MeshMaterial,
    },
    /// Pure grouping node with no geometry of its own.
    Group,
    /// A single line segment in local space.
    Line {
        /// Segment start.
        start: Vec3,
        /// Segment end.
        end: Vec3,
        /// Stroke parameters.
        style: LineStyle,
    },
}

impl NodeKind {
    /// Whether this node carries triangle geometry.
    #[must_use]
    pub fn is_mesh(&self) -> bool {
        matches!(self, Self::Mesh { .. })
    }

    /// Short label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mesh { .. } => "mesh",
            Self::Group => "group",
            Self::Line { .. } => "line",
        }
    }
}

/// A scene-graph node. Hierarchy links are maintained by the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Human-readable name (not required to be unique).
    pub name: String,
    /// Node capability tag and payload.
    pub kind: NodeKind,
    /// Transform relative to the parent.
    pub transform: Transform,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// Create an unparented node at the origin.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transform: Transform::IDENTITY,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create an empty group node.
    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Group)
    }

    /// Replace the local transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Parent node, if attached under one.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in attachment order (last attached is last).
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
