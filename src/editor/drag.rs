use glam::Vec3;

use super::Editor;

impl Editor {
    /// Handle pointer motion to screen position `(x, y)`.
    ///
    /// While dragging, the pointer ray is intersected with the current
    /// mode's drag plane and the dragged object's position is set to the
    /// intersection point outright (absolute, not relative to where the
    /// drag started). Returns the new position, or `None` when nothing is
    /// dragged or the ray runs parallel to the plane.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<Vec3> {
        let node = self.selection.dragged()?;
        let ray = self.pointer_ray(x, y);
        let plane = self.view_mode.drag_plane();
        let point = ray.intersect_plane(&plane)?;
        self.scene.set_position(node, point).then_some(point)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::editor::test_support::{cube_asset, editor_800x600};
    use crate::editor::{ClickOutcome, EditorCommand, ModelKind};
    use crate::scene::{Plane, Ray};

    /// Load a cube at the origin and start dragging it.
    fn dragging_editor() -> (crate::Editor, crate::scene::NodeId) {
        let mut editor = editor_800x600();
        let root = editor.load_model(ModelKind::Obstacle, cube_asset("box"));
        let mesh = editor.scene().children(root)[0];
        assert_eq!(
            editor.pointer_click(400.0, 300.0),
            ClickOutcome::Selected(mesh)
        );
        (editor, mesh)
    }

    fn expected_hit(editor: &crate::Editor, x: f32, y: f32, plane: Plane) -> Vec3 {
        let ray: Ray = editor.pointer_ray(x, y);
        ray.intersect_plane(&plane).unwrap()
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut editor = editor_800x600();
        let root = editor.load_model(ModelKind::Obstacle, cube_asset("box"));
        let mesh = editor.scene().children(root)[0];
        assert_eq!(editor.pointer_move(100.0, 100.0), None);
        assert_eq!(editor.scene().position(mesh), Some(Vec3::ZERO));
    }

    #[test]
    fn each_move_snaps_to_its_own_plane_hit() {
        let (mut editor, mesh) = dragging_editor();
        let plane = Plane::new(Vec3::Z, 0.0);
        for (x, y) in [(500.0, 300.0), (520.0, 250.0), (300.0, 410.0)] {
            let expected = expected_hit(&editor, x, y, plane);
            assert_eq!(editor.pointer_move(x, y), Some(expected));
            let position = editor.scene().position(mesh).unwrap();
            assert!((position - expected).length() < 1e-5);
            assert!(position.z.abs() < 1e-5);
        }
    }

    #[test]
    fn repeating_a_sample_does_not_accumulate() {
        let (mut editor, mesh) = dragging_editor();
        let first = editor.pointer_move(600.0, 200.0);
        let second = editor.pointer_move(600.0, 200.0);
        assert_eq!(first, second);
        assert_eq!(editor.scene().position(mesh), second);
    }

    #[test]
    fn top_view_drags_across_the_ground() {
        let (mut editor, mesh) = dragging_editor();
        editor.execute(EditorCommand::ToggleTopView);
        let expected = expected_hit(&editor, 450.0, 350.0, Plane::new(Vec3::Y, 0.0));
        assert!(editor.pointer_move(450.0, 350.0).is_some());
        let position = editor.scene().position(mesh).unwrap();
        assert!((position - expected).length() < 1e-5);
        assert!(position.y.abs() < 1e-5);
    }

    #[test]
    fn ray_parallel_to_drag_plane_leaves_position() {
        let (mut editor, mesh) = dragging_editor();
        let _ = editor.pointer_move(500.0, 300.0);
        let before = editor.scene().position(mesh);

        // Look along -X from above the plane: the centre ray never meets z = 0.
        let camera = editor.camera_mut();
        camera.position = Vec3::new(10.0, 0.0, 5.0);
        camera.look_at(Vec3::new(0.0, 0.0, 5.0));

        assert_eq!(editor.pointer_move(400.0, 300.0), None);
        assert_eq!(editor.scene().position(mesh), before);
    }
}
