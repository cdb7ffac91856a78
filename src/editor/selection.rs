use super::Editor;
use crate::scene::NodeId;

/// What is selected and whether it is following the pointer.
///
/// `dragging` implies `selected.is_some()`; the two are only ever set and
/// cleared together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<NodeId>,
    dragging: bool,
}

impl SelectionState {
    /// Currently selected node.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The node being dragged, if a drag is in progress.
    #[must_use]
    pub fn dragged(&self) -> Option<NodeId> {
        self.selected.filter(|_| self.dragging)
    }

    fn invariant_holds(&self) -> bool {
        !self.dragging || self.selected.is_some()
    }

    pub(super) fn begin_drag(&mut self, node: NodeId) {
        self.selected = Some(node);
        self.dragging = true;
    }

    /// Clear the selection and drag, returning what was selected.
    pub(super) fn release(&mut self) -> Option<NodeId> {
        debug_assert!(self.invariant_holds(), "dragging without a selection");
        self.dragging = false;
        self.selected.take()
    }
}

/// Result of a pointer click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click ended an active drag and cleared the selection.
    Released(Option<NodeId>),
    /// A pickable mesh was hit and is now selected and dragging.
    Selected(NodeId),
    /// Nothing was hit; selection is unchanged.
    Missed,
}

impl Editor {
    /// Handle a pointer click at screen position `(x, y)`.
    ///
    /// While dragging, any click releases: the gizmo comes off, the
    /// selection clears, and no pick happens. Otherwise the nearest
    /// pickable mesh under the pointer is selected, starts dragging, and
    /// gets a gizmo. A click on empty space does nothing.
    pub fn pointer_click(&mut self, x: f32, y: f32) -> ClickOutcome {
        if self.selection.is_dragging() {
            let released = self.selection.release();
            if let Some(node) = released {
                let _ = self.gizmos.detach(&mut self.scene, node);
                log::debug!("released {node}");
            }
            return ClickOutcome::Released(released);
        }

        let ray = self.pointer_ray(x, y);
        let hits = self.scene.intersect(&ray, self.pickables.as_slice(), true);
        let Some(nearest) = hits.first() else {
            return ClickOutcome::Missed;
        };
        let node = nearest.node;
        self.selection.begin_drag(node);
        let _ = self.gizmos.attach(&mut self.scene, node, &self.options.gizmo);
        log::debug!(
            "selected {node} at distance {:.3} ({} hits)",
            nearest.distance,
            hits.len()
        );
        ClickOutcome::Selected(node)
    }
}
