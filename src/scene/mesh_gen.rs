//! Procedural meshes for placeholder models and tests.

use glam::Vec3;

use super::MeshData;

/// Axis-aligned box centred on the origin.
#[must_use]
pub fn cuboid(size: Vec3) -> MeshData {
    let h = size * 0.5;
    let positions = vec![
        Vec3::new(-h.x, -h.y, -h.z),
        Vec3::new(h.x, -h.y, -h.z),
        Vec3::new(h.x, h.y, -h.z),
        Vec3::new(-h.x, h.y, -h.z),
        Vec3::new(-h.x, -h.y, h.z),
        Vec3::new(h.x, -h.y, h.z),
        Vec3::new(h.x, h.y, h.z),
        Vec3::new(-h.x, h.y, h.z),
    ];
    #[rustfmt::skip]
    let indices = vec![
        4, 5, 6, 4, 6, 7, // +z
        1, 0, 3, 1, 3, 2, // -z
        5, 1, 2, 5, 2, 6, // +x
        0, 4, 7, 0, 7, 3, // -x
        7, 6, 2, 7, 2, 3, // +y
        0, 1, 5, 0, 5, 4, // -y
    ];
    MeshData { positions, indices }
}

/// Flat quad in the XZ plane facing +Y, centred on the origin.
#[must_use]
pub fn ground_plane(width: f32, depth: f32) -> MeshData {
    let (hw, hd) = (width * 0.5, depth * 0.5);
    MeshData {
        positions: vec![
            Vec3::new(-hw, 0.0, -hd),
            Vec3::new(hw, 0.0, -hd),
            Vec3::new(hw, 0.0, hd),
            Vec3::new(-hw, 0.0, hd),
        ],
        indices: vec![0, 2, 1, 0, 3, 2],
    }
}
