//! Axis gizmo overlay for the selected object.
//!
//! The gizmo is a group of three unlit, non-depth-tested line segments
//! along the object's local X, Y and Z axes, parented under the object as
//! its last child. Which group belongs to which object is tracked in a
//! side table rather than inferred from child order.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::options::GizmoOptions;
use crate::scene::{LineStyle, Node, NodeId, NodeKind, Scene};

/// Local axes the gizmo draws, with their line names.
const AXES: [(Vec3, &str); 3] =
    [(Vec3::X, "axis_x"), (Vec3::Y, "axis_y"), (Vec3::Z, "axis_z")];

/// Tracks the gizmo overlay attached to each object.
#[derive(Debug, Clone, Default)]
pub struct GizmoManager {
    /// Object → its gizmo group.
    overlays: FxHashMap<NodeId, NodeId>,
}

impl GizmoManager {
    /// Create a manager with no gizmos attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gizmo group attached to `object`, if any.
    #[must_use]
    pub fn gizmo_of(&self, object: NodeId) -> Option<NodeId> {
        self.overlays.get(&object).copied()
    }

    /// Number of attached gizmos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Whether no gizmo is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Build a gizmo group and add it as the last child of `object`.
    ///
    /// `object` must not already carry a gizmo. Returns the group, or `None`
    /// if `object` is not in the scene.
    pub fn attach(
        &mut self,
        scene: &mut Scene,
        object: NodeId,
        options: &GizmoOptions,
    ) -> Option<NodeId> {
        debug_assert!(
            !self.overlays.contains_key(&object),
            "{object} already has a gizmo"
        );
        if let Some(existing) = self.gizmo_of(object) {
            return Some(existing);
        }
        if !scene.contains(object) {
            return None;
        }

        let style = LineStyle {
            color: options.color,
            width: options.line_width,
            depth_test: false,
            depth_write: false,
        };
        let group = scene.spawn(Node::group("axis_gizmo"));
        for (axis, name) in AXES {
            let line = scene.spawn(Node::new(
                name,
                NodeKind::Line {
                    start: Vec3::ZERO,
                    end: axis * options.axis_length,
                    style,
                },
            ));
            let _ = scene.add_child(group, line);
        }
        let _ = scene.add_child(object, group);
        let _ = self.overlays.insert(object, group);
        Some(group)
    }

    /// Remove and destroy the gizmo of `object`. Returns the removed group.
    ///
    /// Nothing else may have been appended under `object` since
    /// [`attach`](Self::attach); debug builds assert the gizmo is still the
    /// last child.
    pub fn detach(&mut self, scene: &mut Scene, object: NodeId) -> Option<NodeId> {
        debug_assert!(
            self.overlays.contains_key(&object),
            "{object} has no gizmo to detach"
        );
        let group = self.overlays.remove(&object)?;
        debug_assert_eq!(
            scene.last_child(object),
            Some(group),
            "gizmo of {object} is no longer its last child"
        );
        let _ = scene.despawn(group);
        Some(group)
    }

    /// Drop the record for `object` without touching the scene, for when the
    /// object and its subtree were destroyed wholesale.
    pub fn forget(&mut self, object: NodeId) -> Option<NodeId> {
        self.overlays.remove(&object)
    }

    /// Copy `object`'s position onto its gizmo group.
    ///
    /// The group is parented under the object, so this offsets it by the
    /// object's position a second time; the overlay is drawn where the
    /// editor has always drawn it. Returns whether a gizmo was updated.
    pub fn sync_frame(&self, scene: &mut Scene, object: NodeId) -> bool {
        let (Some(group), Some(position)) =
            (self.gizmo_of(object), scene.position(object))
        else {
            return false;
        };
        scene.set_position(group, position)
    }
}
