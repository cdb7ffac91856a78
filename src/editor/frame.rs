//! Per-frame update: gizmo sync, tween step, render.

use glam::Vec3;

use super::Editor;
use crate::camera::Camera;
use crate::error::EditorError;
use crate::scene::Scene;

/// Draws the scene. Implemented by whatever rendering backend hosts the
/// editor.
pub trait SceneRenderer {
    /// Draw `scene` as seen from `camera`.
    ///
    /// # Errors
    ///
    /// Backend-specific failures, reported as [`EditorError::Render`].
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), EditorError>;
}

/// What one call to [`Editor::frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// The selection's gizmo was moved to follow it.
    pub gizmo_synced: bool,
    /// Where the tween put its model this frame, if it moved.
    pub tween_position: Option<Vec3>,
    /// The tween reached its target this frame.
    pub tween_finished: bool,
    /// The scene had changed since the previous frame.
    pub scene_changed: bool,
}

impl Editor {
    /// Run one frame: sync the dragged object's gizmo, advance the tween,
    /// then hand the scene to `renderer`.
    ///
    /// # Errors
    ///
    /// Whatever `renderer` returns. State updates made before the render
    /// call are kept.
    pub fn frame<R: SceneRenderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<FrameReport, EditorError> {
        let gizmo_synced = self
            .selection
            .dragged()
            .is_some_and(|node| self.gizmos.sync_frame(&mut self.scene, node));

        let was_moving = self.tween.is_moving();
        let tween_position = self.tick_tween();
        let tween_finished = was_moving && !self.tween.is_moving();

        let scene_changed = self.scene.is_dirty();
        renderer.render(&self.scene, &self.camera)?;
        self.scene.mark_rendered();
        self.frame_timing.end_frame();

        Ok(FrameReport {
            gizmo_synced,
            tween_position,
            tween_finished,
            scene_changed,
        })
    }

    /// Advance the move tween by one step without rendering. Returns the
    /// driven model's new position when it moved.
    pub fn tick_tween(&mut self) -> Option<Vec3> {
        self.tween.tick(&mut self.scene, &self.models)
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_timing.frame_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::test_support::{cube_asset, editor_800x600};
    use crate::editor::ModelKind;
    use crate::scene::NodeId;

    /// Records what it was asked to draw.
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(usize, Vec3)>,
        fail: bool,
    }

    impl SceneRenderer for RecordingRenderer {
        fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), EditorError> {
            if self.fail {
                return Err(EditorError::Render("device lost".to_owned()));
            }
            self.frames.push((scene.len(), camera.position));
            Ok(())
        }
    }

    fn gizmo_position(editor: &Editor, mesh: NodeId) -> Option<Vec3> {
        let gizmo = editor.gizmos().gizmo_of(mesh)?;
        editor.scene().position(gizmo)
    }

    #[test]
    fn frame_renders_and_counts() {
        let mut editor = editor_800x600();
        let mut renderer = RecordingRenderer::default();
        let report = editor.frame(&mut renderer).unwrap();
        assert_eq!(renderer.frames, vec![(0, Vec3::new(0.0, 0.0, 10.0))]);
        assert_eq!(report, FrameReport::default());
        assert_eq!(editor.frame_count(), 1);
    }

    #[test]
    fn scene_change_is_reported_once() {
        let mut editor = editor_800x600();
        let mut renderer = RecordingRenderer::default();
        let _ = editor.load_model(ModelKind::Car, cube_asset("car"));
        assert!(editor.frame(&mut renderer).unwrap().scene_changed);
        assert!(!editor.frame(&mut renderer).unwrap().scene_changed);
    }

    #[test]
    fn gizmo_follows_the_dragged_object() {
        let mut editor = editor_800x600();
        let mut renderer = RecordingRenderer::default();
        let root = editor.load_model(ModelKind::Car, cube_asset("car"));
        let mesh = editor.scene().children(root)[0];
        let _ = editor.pointer_click(400.0, 300.0);
        let moved = editor.pointer_move(550.0, 260.0).unwrap();

        let report = editor.frame(&mut renderer).unwrap();
        assert!(report.gizmo_synced);
        assert_eq!(gizmo_position(&editor, mesh), Some(moved));
    }

    #[test]
    fn no_selection_means_no_sync() {
        let mut editor = editor_800x600();
        let mut renderer = RecordingRenderer::default();
        let _ = editor.load_model(ModelKind::Car, cube_asset("car"));
        assert!(!editor.frame(&mut renderer).unwrap().gizmo_synced);
    }

    #[test]
    fn frames_drive_the_tween_to_completion() {
        let mut editor = editor_800x600();
        let mut renderer = RecordingRenderer::default();
        let root = editor.load_model(ModelKind::Obstacle, cube_asset("obstacle"));
        editor.command_move(-4.0);

        let mut finished = 0;
        for _ in 0..1000 {
            let report = editor.frame(&mut renderer).unwrap();
            if report.tween_finished {
                finished += 1;
            }
            if !editor.tween().is_moving() {
                break;
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(editor.scene().position(root), Some(Vec3::new(-4.0, 0.0, 0.0)));
    }

    #[test]
    fn render_failure_is_returned_and_state_kept() {
        let mut editor = editor_800x600();
        let mut renderer = RecordingRenderer {
            fail: true,
            ..RecordingRenderer::default()
        };
        let root = editor.load_model(ModelKind::Obstacle, cube_asset("obstacle"));
        editor.command_move(2.0);

        assert!(matches!(
            editor.frame(&mut renderer),
            Err(EditorError::Render(_))
        ));
        assert!(editor.scene().position(root).unwrap().x > 0.0);
        assert!(editor.scene().is_dirty());
        assert_eq!(editor.frame_count(), 0);
    }

    #[test]
    fn dyn_renderers_are_accepted() {
        let mut editor = editor_800x600();
        let mut renderer = RecordingRenderer::default();
        let dyn_renderer: &mut dyn SceneRenderer = &mut renderer;
        assert!(editor.frame(dyn_renderer).is_ok());
    }
}
