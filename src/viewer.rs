//! Standalone editing window backed by winit.
//!
//! The viewer owns the event loop and an [`Editor`]; drawing is delegated
//! to a [`SceneRenderer`] built once the window exists.
//!
//! ```no_run
//! # use stagehand::{Viewer, EditorError, SceneRenderer};
//! # use stagehand::scene::Scene;
//! # use stagehand::camera::Camera;
//! # struct Null;
//! # impl SceneRenderer for Null {
//! #     fn render(&mut self, _: &Scene, _: &Camera) -> Result<(), EditorError> { Ok(()) }
//! # }
//! Viewer::builder()
//!     .with_renderer(|_window| {
//!         let renderer: Box<dyn SceneRenderer> = Box::new(Null);
//!         Ok(renderer)
//!     })
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    editor::{ModelAsset, ModelKind},
    error::EditorError,
    options::Options,
    Editor, InputEvent, InputProcessor, PointerButton, SceneRenderer,
};

/// Builds the renderer once the window is available.
type RendererFactory = Box<
    dyn FnOnce(Arc<Window>) -> Result<Box<dyn SceneRenderer>, EditorError>,
>;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    renderer: Option<RendererFactory>,
    options: Option<Options>,
    title: String,
    models: Vec<(ModelKind, ModelAsset, Vec3)>,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Stagehand", default
    /// options, empty scene, no renderer).
    fn new() -> Self {
        Self {
            renderer: None,
            options: None,
            title: "Stagehand".into(),
            models: Vec::new(),
        }
    }

    /// Set how the renderer is created for the window.
    #[must_use]
    pub fn with_renderer<F>(mut self, factory: F) -> Self
    where
        F: FnOnce(Arc<Window>) -> Result<Box<dyn SceneRenderer>, EditorError>
            + 'static,
    {
        self.renderer = Some(Box::new(factory));
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Load `asset` into `kind`'s slot at `position` on startup.
    #[must_use]
    pub fn with_model(
        mut self,
        kind: ModelKind,
        asset: ModelAsset,
        position: Vec3,
    ) -> Self {
        self.models.push((kind, asset, position));
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            renderer: self.renderer,
            options: self.options.unwrap_or_default(),
            title: self.title,
            models: self.models,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window for editing a scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    renderer: Option<RendererFactory>,
    options: Options,
    title: String,
    models: Vec<(ModelKind, ModelAsset, Vec3)>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// [`EditorError::Viewer`] if no renderer was configured or the event
    /// loop fails.
    pub fn run(self) -> Result<(), EditorError> {
        let Some(renderer) = self.renderer else {
            return Err(EditorError::Viewer("no renderer configured".into()));
        };
        let event_loop =
            EventLoop::new().map_err(|e| EditorError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            editor: None,
            renderer: None,
            renderer_factory: Some(renderer),
            input: InputProcessor::with_key_bindings(
                self.options.keybindings.clone(),
            ),
            options: Some(self.options),
            title: self.title,
            models: self.models,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| EditorError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    editor: Option<Editor>,
    renderer: Option<Box<dyn SceneRenderer>>,
    renderer_factory: Option<RendererFactory>,
    input: InputProcessor,
    options: Option<Options>,
    title: String,
    models: Vec<(ModelKind, ModelAsset, Vec3)>,
}

/// Window inner size, clamped away from zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    /// Feed a raw event through the input processor into the editor.
    fn dispatch(&mut self, event: InputEvent) {
        if let (Some(command), Some(editor)) =
            (self.input.handle_event(event), &mut self.editor)
        {
            editor.execute(command);
        }
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let Some(factory) = self.renderer_factory.take() else {
            event_loop.exit();
            return;
        };
        let renderer = match factory(window.clone()) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let mut editor =
            Editor::new(self.options.take().unwrap_or_default(), vp_w, vp_h);
        for (kind, asset, position) in self.models.drain(..) {
            let _ = editor.set_model_position(kind, position);
            let root = editor.load_model(kind, asset);
            log::info!("{kind} model ready as {root}");
        }

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.editor = Some(editor);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: window, editor, and renderer must be initialised.
        if self.window.is_none()
            || self.editor.is_none()
            || self.renderer.is_none()
        {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(editor) = &mut self.editor {
                    editor.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(editor), Some(renderer)) =
                    (&mut self.editor, &mut self.renderer)
                {
                    if editor.frame_due() {
                        if let Err(e) = editor.frame(renderer.as_mut()) {
                            log::error!("frame failed: {e}");
                        }
                    }
                }
                self.request_redraw();
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.dispatch(InputEvent::Button {
                    button: PointerButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                self.dispatch(InputEvent::PointerMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };

                let key_str = format!("{code:?}");
                if let (Some(command), Some(editor)) =
                    (self.input.handle_key_press(&key_str), &mut self.editor)
                {
                    log::debug!("{key_str} -> {command:?}");
                    editor.execute(command);
                }
            }

            _ => (),
        }
    }
}
