//! Named model slots and loading of loader-built node trees.
//!
//! Each [`ModelKind`] slot holds at most one model. Loading into an
//! occupied slot tears the old model down completely (scene nodes, pickable
//! registrations, and any selection or gizmo pointing into it) before the
//! new one goes in.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Editor;
use crate::error::EditorError;
use crate::scene::{
    MeshData, MeshMaterial, Node, NodeId, NodeKind, TextureHandle, Transform,
};
use crate::util::text::parse_coord;

// ---------------------------------------------------------------------------
// ModelKind
// ---------------------------------------------------------------------------

/// The model slots the editor knows about.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// The vehicle.
    Car,
    /// The obstacle; driven by the move command by default.
    Obstacle,
    /// Surrounding scenery.
    Environment,
}

impl ModelKind {
    /// Every slot, in display order.
    pub const ALL: [Self; 3] = [Self::Car, Self::Obstacle, Self::Environment];

    /// Lowercase slot name used in options files and UI.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Obstacle => "obstacle",
            Self::Environment => "environment",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EditorError::UnknownModel(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// ModelAsset
// ---------------------------------------------------------------------------

/// A node tree as produced by a model loader, not yet in any scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelAsset {
    /// Node name.
    pub name: String,
    /// Node payload.
    pub kind: NodeKind,
    /// Transform relative to the parent.
    pub transform: Transform,
    /// Child subtrees in order.
    pub children: Vec<ModelAsset>,
}

impl ModelAsset {
    /// A mesh node. The material is replaced with the default colour when
    /// the model is loaded.
    #[must_use]
    pub fn mesh(name: impl Into<String>, mesh: MeshData) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Mesh {
                mesh,
                material: MeshMaterial::Color([1.0; 3]),
            },
            transform: Transform::IDENTITY,
            children: Vec::new(),
        }
    }

    /// An empty grouping node.
    #[must_use]
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Group,
            transform: Transform::IDENTITY,
            children: Vec::new(),
        }
    }

    /// Append a child subtree.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the local transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Number of mesh nodes in the tree.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        usize::from(self.kind.is_mesh())
            + self.children.iter().map(Self::mesh_count).sum::<usize>()
    }
}

// ---------------------------------------------------------------------------
// ModelSlots
// ---------------------------------------------------------------------------

/// Which model occupies each slot, plus each slot's position fields.
///
/// Position fields persist independently of the model: they are applied
/// to every model loaded into the slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelSlots {
    loaded: FxHashMap<ModelKind, NodeId>,
    fields: FxHashMap<ModelKind, Vec3>,
}

impl ModelSlots {
    /// Root node of the model in `kind`'s slot.
    #[must_use]
    pub fn get(&self, kind: ModelKind) -> Option<NodeId> {
        self.loaded.get(&kind).copied()
    }

    /// Whether `kind`'s slot holds a model.
    #[must_use]
    pub fn is_loaded(&self, kind: ModelKind) -> bool {
        self.loaded.contains_key(&kind)
    }

    /// Stored position fields of `kind`'s slot (origin until set).
    #[must_use]
    pub fn position_fields(&self, kind: ModelKind) -> Vec3 {
        self.fields.get(&kind).copied().unwrap_or(Vec3::ZERO)
    }

    /// Slot holding the model rooted at `root`.
    #[must_use]
    pub fn kind_of(&self, root: NodeId) -> Option<ModelKind> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| self.get(*kind) == Some(root))
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    /// Whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Editor operations
// ---------------------------------------------------------------------------

impl Editor {
    /// Put `asset` into `kind`'s slot and return its root node.
    ///
    /// Every mesh gets the default colour and becomes pickable. A model
    /// already in the slot is removed first. The slot's position fields are
    /// applied to the new root.
    pub fn load_model(&mut self, kind: ModelKind, asset: ModelAsset) -> NodeId {
        let mut meshes = Vec::new();
        let root = self.instantiate(asset, &mut meshes);

        if let Some(old) = self.unload_model(kind) {
            log::debug!("replaced {old} in the {kind} slot");
        }

        for mesh in &meshes {
            let _ = self.pickables.register(*mesh);
        }
        let _ = self.scene.add_root(root);
        let _ = self
            .scene
            .set_position(root, self.models.position_fields(kind));
        let _ = self.models.loaded.insert(kind, root);

        log::debug!(
            "loaded {root} into the {kind} slot ({} meshes)",
            meshes.len()
        );
        root
    }

    /// Empty `kind`'s slot, destroying its model. Returns the old root.
    ///
    /// A selection inside the model is dropped along with its gizmo record.
    pub fn unload_model(&mut self, kind: ModelKind) -> Option<NodeId> {
        let root = self.models.loaded.remove(&kind)?;
        let subtree = self.scene.descendants(root);

        if let Some(selected) = self.selection.selected() {
            if subtree.contains(&selected) {
                let _ = self.selection.release();
                let _ = self.gizmos.forget(selected);
            }
        }
        let _ = self.pickables.unregister(&subtree);
        let _ = self.scene.despawn(root);
        Some(root)
    }

    /// Store `kind`'s position fields and apply them to its model, if one
    /// is loaded. Returns whether a model moved. Non-finite positions are
    /// ignored.
    pub fn set_model_position(&mut self, kind: ModelKind, position: Vec3) -> bool {
        if !position.is_finite() {
            log::warn!("ignoring non-finite {kind} position {position}");
            return false;
        }
        let _ =self.models.fields.insert(kind, position);
        self.models
            .get(kind)
            .is_some_and(|root| self.scene.set_position(root, position))
    }

    /// [`set_model_position`](Self::set_model_position) from raw text
    /// fields; anything unparseable reads as `0`.
    pub fn set_model_position_text(&mut self, kind: ModelKind, fields: [&str; 3]) -> bool {
        let [x, y, z] = fields.map(parse_coord);
        self.set_model_position(kind, Vec3::new(x, y, z))
    }

    /// Switch every mesh of `kind`'s model to `texture`. Returns the number
    /// of meshes changed.
    ///
    /// # Errors
    ///
    /// [`EditorError::EmptySlot`] when no model is loaded in the slot.
    pub fn apply_texture(
        &mut self,
        kind: ModelKind,
        texture: TextureHandle,
    ) -> Result<usize, EditorError> {
        let Some(root) = self.models.get(kind) else {
            log::warn!("add a {kind} model before applying a texture");
            return Err(EditorError::EmptySlot(kind));
        };

        let mut changed = 0;
        for id in self.scene.descendants(root) {
            if let Some(NodeKind::Mesh { material, .. }) =
                self.scene.node_mut(id).map(|node| &mut node.kind)
            {
                *material = MeshMaterial::Texture(texture);
                changed += 1;
            }
        }
        log::debug!("textured {changed} meshes of the {kind} model");
        Ok(changed)
    }

    /// Spawn `asset` detached, collecting its mesh nodes.
    fn instantiate(&mut self, asset: ModelAsset, meshes: &mut Vec<NodeId>) -> NodeId {
        let ModelAsset {
            name,
            mut kind,
            transform,
            children,
        } = asset;
        if let NodeKind::Mesh { material, .. } = &mut kind {
            *material = MeshMaterial::Color(self.options.models.mesh_color);
        }
        let is_mesh = kind.is_mesh();
        let id = self
            .scene
            .spawn(Node::new(name, kind).with_transform(transform));
        if is_mesh {
            meshes.push(id);
        }
        for child in children {
            let child = self.instantiate(child, meshes);
            let _ = self.scene.add_child(id, child);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::test_support::{cube_asset, editor_800x600};
    use crate::editor::ClickOutcome;
    use crate::scene::mesh_gen;

    #[test]
    fn kind_names_round_trip() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.name().parse::<ModelKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(" Car ".parse::<ModelKind>().unwrap(), ModelKind::Car);
        assert!(matches!(
            "truck".parse::<ModelKind>(),
            Err(EditorError::UnknownModel(name)) if name == "truck"
        ));
    }

    #[test]
    fn load_registers_meshes_with_default_colour() {
        let mut editor = editor_800x600();
        let asset = ModelAsset::group("rig")
            .with_child(ModelAsset::mesh("body", mesh_gen::cuboid(Vec3::ONE)))
            .with_child(
                ModelAsset::group("wheels").with_child(ModelAsset::mesh(
                    "wheel",
                    mesh_gen::cuboid(Vec3::splat(0.3)),
                )),
            );
        assert_eq!(asset.mesh_count(), 2);

        let root = editor.load_model(ModelKind::Car, asset);
        assert_eq!(editor.models().get(ModelKind::Car), Some(root));
        assert_eq!(editor.scene().roots(), &[root]);
        assert_eq!(editor.pickables().len(), 2);

        let colour = editor.options().models.mesh_color;
        for id in editor.pickables().as_slice() {
            match &editor.scene().node(*id).unwrap().kind {
                NodeKind::Mesh { material, .. } => {
                    assert_eq!(*material, MeshMaterial::Color(colour));
                }
                other => panic!("registered a {}", other.label()),
            }
        }
    }

    #[test]
    fn reload_replaces_the_old_model() {
        let mut editor = editor_800x600();
        let first = editor.load_model(ModelKind::Obstacle, cube_asset("first"));
        let first_mesh = editor.scene().children(first)[0];
        let nodes = editor.scene().len();

        let second = editor.load_model(ModelKind::Obstacle, cube_asset("second"));
        assert_ne!(first, second);
        assert!(!editor.scene().contains(first));
        assert!(!editor.scene().contains(first_mesh));
        assert!(!editor.pickables().contains(first_mesh));
        assert_eq!(editor.scene().roots(), &[second]);
        assert_eq!(editor.scene().len(), nodes);
        assert_eq!(editor.models().len(), 1);
    }

    #[test]
    fn reload_drops_a_selection_inside_the_old_model() {
        let mut editor = editor_800x600();
        let _ = editor.load_model(ModelKind::Obstacle, cube_asset("first"));
        assert!(matches!(
            editor.pointer_click(400.0, 300.0),
            ClickOutcome::Selected(_)
        ));

        let _ = editor.load_model(ModelKind::Obstacle, cube_asset("second"));
        assert_eq!(editor.selection().selected(), None);
        assert!(!editor.selection().is_dragging());
        assert!(editor.gizmos().is_empty());
        assert_eq!(editor.pointer_move(500.0, 300.0), None);
    }

    #[test]
    fn position_fields_survive_reload() {
        let mut editor = editor_800x600();
        let offset = Vec3::new(1.0, -2.0, 0.5);
        assert!(!editor.set_model_position(ModelKind::Environment, offset));

        let root = editor.load_model(ModelKind::Environment, cube_asset("env"));
        assert_eq!(editor.scene().position(root), Some(offset));

        let root = editor.load_model(ModelKind::Environment, cube_asset("env2"));
        assert_eq!(editor.scene().position(root), Some(offset));
    }

    #[test]
    fn text_fields_parse_leniently() {
        let mut editor = editor_800x600();
        let root = editor.load_model(ModelKind::Car, cube_asset("car"));
        assert!(editor.set_model_position_text(ModelKind::Car, ["2.5", "abc", "-1x"]));
        assert_eq!(editor.scene().position(root), Some(Vec3::new(2.5, 0.0, -1.0)));
    }

    #[test]
    fn infinite_text_fields_leave_the_model_alone() {
        let mut editor = editor_800x600();
        let root = editor.load_model(ModelKind::Car, cube_asset("car"));
        assert!(editor.set_model_position_text(ModelKind::Car, ["inf", "infinity", "1"]));
        assert_eq!(editor.scene().position(root), Some(Vec3::new(0.0, 0.0, 1.0)));

        assert!(!editor.set_model_position_text(ModelKind::Car, ["Infinity", "0", "0"]));
        assert!(!editor.set_model_position_text(ModelKind::Car, ["1e40", "0", "0"]));
        assert_eq!(editor.scene().position(root), Some(Vec3::new(0.0, 0.0, 1.0)));
        assert_eq!(editor.models().position_fields(ModelKind::Car), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn texture_needs_a_model() {
        let mut editor = editor_800x600();
        assert!(matches!(
            editor.apply_texture(ModelKind::Car, TextureHandle(7)),
            Err(EditorError::EmptySlot(ModelKind::Car))
        ));

        let root = editor.load_model(ModelKind::Car, cube_asset("car"));
        assert_eq!(editor.apply_texture(ModelKind::Car, TextureHandle(7)).unwrap(), 1);
        let mesh = editor.scene().children(root)[0];
        assert!(matches!(
            editor.scene().node(mesh).unwrap().kind,
            NodeKind::Mesh {
                material: MeshMaterial::Texture(TextureHandle(7)),
                ..
            }
        ));
    }

    #[test]
    fn unload_empties_the_slot() {
        let mut editor = editor_800x600();
        let root = editor.load_model(ModelKind::Car, cube_asset("car"));
        assert_eq!(editor.unload_model(ModelKind::Car), Some(root));
        assert!(editor.scene().is_empty());
        assert!(editor.pickables().is_empty());
        assert_eq!(editor.models().kind_of(root), None);
        assert_eq!(editor.unload_model(ModelKind::Car), None);
    }
}
