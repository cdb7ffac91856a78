//! The editor: all interactive state and the operations that mutate it.
//!
//! [`Editor`] is the single owner of the scene, camera, selection, gizmo
//! records, tween, and model slots. Everything runs on the caller's thread;
//! pointer and key handlers mutate state immediately and
//! [`Editor::frame`] advances time-based state once per display refresh.

mod command;
mod drag;
mod frame;
mod gizmo;
mod models;
mod pickables;
mod selection;
mod tween;

pub use command::EditorCommand;
pub use frame::{FrameReport, SceneRenderer};
pub use gizmo::GizmoManager;
pub use models::{ModelAsset, ModelKind, ModelSlots};
pub use pickables::Pickables;
pub use selection::{ClickOutcome, SelectionState};
pub use tween::TweenAnimator;

use glam::Vec2;

use crate::camera::{screen_to_ndc, Camera, CameraModeController, ViewMode};
use crate::options::Options;
use crate::scene::{Ray, Scene};
use crate::util::frame_timing::FrameTiming;
use crate::util::text::parse_coord;

/// Frame-rate cap applied by [`Editor::frame_due`].
const TARGET_FPS: u32 = 120;

/// Interactive scene editor.
///
/// # Construction
///
/// [`Editor::new`] takes the runtime [`Options`] and the viewport size in
/// physical pixels. The camera starts at the configured position looking
/// down -Z, and that pose is what leaving top view returns to.
///
/// # Input
///
/// Pointer and key input arrive as [`EditorCommand`]s through
/// [`execute`](Self::execute), or through the direct methods
/// ([`pointer_click`](Self::pointer_click),
/// [`pointer_move`](Self::pointer_move),
/// [`toggle_top_view`](Self::toggle_top_view),
/// [`command_move`](Self::command_move)).
///
/// # Frame loop
///
/// Call [`frame`](Self::frame) once per refresh with the renderer.
#[derive(Debug)]
pub struct Editor {
    scene: Scene,
    camera: Camera,
    view_mode: CameraModeController,
    selection: SelectionState,
    gizmos: GizmoManager,
    tween: TweenAnimator,
    models: ModelSlots,
    pickables: Pickables,
    /// Viewport size in physical pixels.
    viewport: Vec2,
    inspector_visible: bool,
    options: Options,
    frame_timing: FrameTiming,
}

// =============================================================================
// Core
// =============================================================================

impl Editor {
    /// Editor with an empty scene and a `width` x `height` viewport.
    #[must_use]
    pub fn new(options: Options, width: u32, height: u32) -> Self {
        let mut scene = Scene::new();
        scene.background = options.models.background;

        let mut camera = Camera::new(&options.camera, 1.0);
        camera.resize(width, height);
        let view_mode =
            CameraModeController::new(&camera, options.camera.top_view_height);

        log::debug!(
            "editor {width}x{height}, camera at {}",
            camera.position
        );

        Self {
            scene,
            camera,
            view_mode,
            selection: SelectionState::default(),
            gizmos: GizmoManager::new(),
            tween: TweenAnimator::new(&options.tween),
            models: ModelSlots::default(),
            pickables: Pickables::new(),
            viewport: Vec2::new(width as f32, height as f32),
            inspector_visible: false,
            options,
            frame_timing: FrameTiming::new(TARGET_FPS),
        }
    }

    /// Execute a command.
    pub fn execute(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::PointerClick { x, y } => {
                let _ = self.pointer_click(x, y);
            }
            EditorCommand::PointerMove { x, y } => {
                let _ = self.pointer_move(x, y);
            }
            EditorCommand::ToggleTopView => {
                let _ = self.toggle_top_view();
            }
            EditorCommand::MoveModel { target_x } => {
                self.command_move(target_x);
            }
            EditorCommand::SetModelPosition { kind, position } => {
                let _ = self.set_model_position(kind, position);
            }
            EditorCommand::ToggleInspector => {
                self.inspector_visible = !self.inspector_visible;
            }
            EditorCommand::Resize { width, height } => {
                self.resize(width, height);
            }
        }
    }

    /// Flip between perspective and top view. Returns the new mode.
    pub fn toggle_top_view(&mut self) -> ViewMode {
        self.view_mode.toggle_top_view(&mut self.camera)
    }

    /// Start tweening the driven model toward `(target_x, 0, 0)`,
    /// replacing any target already in flight.
    pub fn command_move(&mut self, target_x: f32) {
        self.tween.command_move(target_x);
    }

    /// [`command_move`](Self::command_move) from a raw text field; anything
    /// unparseable reads as `0`.
    pub fn command_move_text(&mut self, target_x: &str) {
        self.command_move(parse_coord(target_x));
    }

    /// Adopt a new viewport size for pointer mapping and projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Vec2::new(width as f32, height as f32);
        self.camera.resize(width, height);
    }

    /// World-space ray under the pixel `(x, y)`.
    #[must_use]
    pub fn pointer_ray(&self, x: f32, y: f32) -> Ray {
        self.camera
            .ray_from_ndc(screen_to_ndc(x, y, self.viewport))
    }
}

// ── Accessors ──

impl Editor {
    /// The scene graph.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene graph, for glue that builds extra nodes.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Selection and drag state.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Gizmo records.
    #[must_use]
    pub fn gizmos(&self) -> &GizmoManager {
        &self.gizmos
    }

    /// Current camera mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode.mode()
    }

    /// Whether the top view is active.
    #[must_use]
    pub fn is_top_view(&self) -> bool {
        self.view_mode.is_top_view()
    }

    /// Move tween state.
    #[must_use]
    pub fn tween(&self) -> &TweenAnimator {
        &self.tween
    }

    /// Model slot table.
    #[must_use]
    pub fn models(&self) -> &ModelSlots {
        &self.models
    }

    /// Pickable mesh registry.
    #[must_use]
    pub fn pickables(&self) -> &Pickables {
        &self.pickables
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Whether the inspector panel should be shown.
    #[must_use]
    pub fn inspector_visible(&self) -> bool {
        self.inspector_visible
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Whether enough time has passed since the last frame to draw again.
    #[must_use]
    pub fn frame_due(&self) -> bool {
        self.frame_timing.should_render()
    }
}
