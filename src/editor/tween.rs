//! Exponential-approach tween of one model toward a commanded position.

use glam::Vec3;

use super::models::{ModelKind, ModelSlots};
use crate::options::TweenOptions;
use crate::scene::Scene;

/// Moves the model in one slot toward a target, a fixed fraction of the
/// remaining distance per tick.
///
/// Once the remaining distance reaches `epsilon` the model snaps
/// exactly onto the target and the tween stops, so it always terminates.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenAnimator {
    target: Vec3,
    moving: bool,
    factor: f32,
    epsilon: f32,
    slot: ModelKind,
}

impl TweenAnimator {
    /// Idle animator configured from `options`.
    #[must_use]
    pub fn new(options: &TweenOptions) -> Self {
        Self {
            target: Vec3::ZERO,
            moving: false,
            factor: options.factor.clamp(f32::EPSILON, 1.0),
            epsilon: options.epsilon.max(0.0),
            slot: options.model,
        }
    }

    /// Aim at `(target_x, 0, 0)` and start moving, overwriting any target
    /// in flight. A non-finite target is ignored.
    pub fn command_move(&mut self, target_x: f32) {
        if !target_x.is_finite() {
            log::warn!("ignoring non-finite move target {target_x}");
            return;
        }
        self.target = Vec3::new(target_x, 0.0, 0.0);
        self.moving = true;
        log::debug!("tween {} toward {}", self.slot, self.target);
    }

    /// Current target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Whether a move is in progress.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// The slot whose model is driven.
    #[must_use]
    pub fn slot(&self) -> ModelKind {
        self.slot
    }

    /// Advance one frame. Returns the model's new position when it moved.
    ///
    /// With the driven slot empty nothing happens and the move stays
    /// pending until a model is loaded.
    pub fn tick(&mut self, scene: &mut Scene, models: &ModelSlots) -> Option<Vec3> {
        if !self.moving {
            return None;
        }
        let node = models.get(self.slot)?;
        let position = scene.position(node)?;

        let next = position + (self.target - position) * self.factor;
        let next = if next.distance(self.target) <= self.epsilon {
            self.moving = false;
            self.target
        } else {
            next
        };
        let _ = scene.set_position(node, next);
        if !self.moving {
            log::debug!("tween {} arrived at {}", self.slot, self.target);
        }
        Some(next)
    }
}
