//! Demo binary: opens the editor window on a small scene.
//!
//! Usage: `stagehand [options.toml]`

use std::path::Path;

use glam::Vec3;
use stagehand::{
    camera::Camera,
    editor::{ModelAsset, ModelKind},
    scene::{mesh_gen, Scene},
    EditorError, Options, SceneRenderer, Viewer,
};

/// Stand-in renderer that logs what it would draw whenever the scene
/// changes.
struct LogRenderer {
    frames: u64,
    logged_first: bool,
}

impl SceneRenderer for LogRenderer {
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), EditorError> {
        self.frames += 1;
        if scene.is_dirty() || !self.logged_first {
            log::info!(
                "frame {}: {} nodes, {} roots, camera at {:.2}",
                self.frames,
                scene.len(),
                scene.roots().len(),
                camera.position
            );
            self.logged_first = true;
        }
        Ok(())
    }
}

/// A loader-shaped tree: a group root with one mesh child.
fn demo_model(name: &str, size: Vec3) -> ModelAsset {
    ModelAsset::group(name)
        .with_child(ModelAsset::mesh(format!("{name}_mesh"), mesh_gen::cuboid(size)))
}

fn load_options(arg: Option<String>) -> Result<Options, EditorError> {
    match arg {
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(&path))
        }
        None => Ok(Options::default()),
    }
}

fn main() {
    env_logger::init();

    let options = match load_options(std::env::args().nth(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let result = Viewer::builder()
        .with_options(options)
        .with_model(
            ModelKind::Car,
            demo_model("car", Vec3::new(2.0, 1.0, 1.0)),
            Vec3::new(-3.0, 0.0, 0.0),
        )
        .with_model(
            ModelKind::Obstacle,
            demo_model("obstacle", Vec3::ONE),
            Vec3::ZERO,
        )
        .with_model(
            ModelKind::Environment,
            ModelAsset::group("environment").with_child(ModelAsset::mesh(
                "ground",
                mesh_gen::ground_plane(12.0, 12.0),
            )),
            Vec3::new(0.0, -1.0, 0.0),
        )
        .with_renderer(|_window| {
            let renderer: Box<dyn SceneRenderer> = Box::new(LogRenderer {
                frames: 0,
                logged_first: false,
            });
            Ok(renderer)
        })
        .build()
        .run();

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
