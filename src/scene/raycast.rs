//! Ray casting against scene geometry.
//!
//! Provides the ray, plane, and triangle tests the editor uses for picking
//! and for projecting the pointer onto the drag plane.

use glam::Vec3;

use super::{MeshData, NodeId, NodeKind, Scene};

/// Below this the ray is treated as parallel to a plane or triangle.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Half-line from `origin` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction (unit length when built through [`Ray::new`]).
    pub direction: Vec3,
}

/// Plane in Hessian form: points `p` with `normal · p + constant == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed offset along the normal (negated distance from origin).
    pub constant: f32,
}

/// One mesh hit, as returned by [`Scene::intersect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The mesh node that was hit.
    pub node: NodeId,
    /// World-space distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

impl Plane {
    /// Build a plane from a normal and constant.
    #[must_use]
    pub const fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }

    /// Signed distance of `point` from the plane.
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}

impl Ray {
    /// Build a ray, normalizing the direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Where the ray crosses `plane`.
    ///
    /// `None` when the ray runs parallel to the plane or the plane lies
    /// behind the origin.
    #[must_use]
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }
        let t = -plane.distance_to_point(self.origin) / denom;
        (t >= 0.0).then(|| self.at(t))
    }

    /// Möller–Trumbore test against triangle `a b c` (both faces).
    /// Returns the ray parameter of the hit.
    #[must_use]
    pub fn intersect_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
        let edge1 = b - a;
        let edge2 = c - a;
        let p = self.direction.cross(edge2);
        let det = edge1.dot(p);
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(edge1);
        let v = self.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = edge2.dot(q) * inv_det;
        (t > PARALLEL_EPSILON).then_some(t)
    }
}

impl Scene {
    /// Cast `ray` against `targets`, descending into children when
    /// `recursive` is set. Only mesh nodes produce hits; groups and lines
    /// are traversed but never hit.
    ///
    /// Hits are sorted nearest first.
    #[must_use]
    pub fn intersect(
        &self,
        ray: &Ray,
        targets: &[NodeId],
        recursive: bool,
    ) -> Vec<RayHit> {
        let mut hits = Vec::new();
        for &target in targets {
            self.intersect_node(ray, target, recursive, &mut hits);
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn intersect_node(
        &self,
        ray: &Ray,
        id: NodeId,
        recursive: bool,
        hits: &mut Vec<RayHit>,
    ) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.kind {
            NodeKind::Mesh { mesh, .. } => {
                if let Some(hit) = self.intersect_mesh(ray, id, mesh) {
                    hits.push(hit);
                }
            }
            NodeKind::Group | NodeKind::Line { .. } => {}
        }
        if recursive {
            for &child in node.children() {
                self.intersect_node(ray, child, true, hits);
            }
        }
    }

    /// Nearest hit on one mesh. The ray is moved into mesh-local space for
    /// the triangle tests and the hit is mapped back to world space.
    fn intersect_mesh(
        &self,
        ray: &Ray,
        id: NodeId,
        mesh: &MeshData,
    ) -> Option<RayHit> {
        let world = self.world_matrix(id);
        let inverse = world.inverse();
        let local = Ray {
            origin: inverse.transform_point3(ray.origin),
            direction: inverse.transform_vector3(ray.direction),
        };
        mesh.triangles()
            .filter_map(|[a, b, c]| local.intersect_triangle(a, b, c))
            .map(|t| {
                let point = world.transform_point3(local.at(t));
                (point, point.distance(ray.origin))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(point, distance)| RayHit {
                node: id,
                distance,
                point,
            })
    }
}
