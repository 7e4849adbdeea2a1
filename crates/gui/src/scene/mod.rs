//! Cake scene graph: one base mesh with attachable sub-assemblies, plus lights.

mod camera;
mod node;

pub use camera::PerspectiveCamera;
pub use node::{Material, Node, NodeKind, Primitive, Transform};

use glam::{Mat4, Vec3};

/// Uniform ambient light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Directional light shining from `position` toward the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the scene toward the light
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

/// One mesh ready for submission: world matrix + geometry + material
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub world: Mat4,
    pub primitive: Primitive,
    pub material: Material,
}

/// The scene owned by a render context
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    base: Option<Node>,
    /// Showcase cake; drawn instead of the base while present
    preview: Option<Node>,
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    /// Incremented on every structural change (base swapped, subtree patched)
    version: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            base: None,
            preview: None,
            ambient: AmbientLight {
                color: [1.0, 1.0, 1.0],
                intensity: 1.0,
            },
            directional: DirectionalLight {
                color: [1.0, 1.0, 1.0],
                intensity: 0.8,
                position: Vec3::new(3.0, 4.0, 5.0),
            },
            version: 0,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn base(&self) -> Option<&Node> {
        self.base.as_ref()
    }

    /// Mutable access for per-frame updates (rotation, color). Does not bump the version.
    pub fn base_mut(&mut self) -> Option<&mut Node> {
        self.base.as_mut()
    }

    /// Swap the whole base mesh, returning the previous one
    pub fn set_base(&mut self, base: Option<Node>) -> Option<Node> {
        self.version += 1;
        std::mem::replace(&mut self.base, base)
    }

    /// Replace (or add) a named child of the base. No-op without a base.
    pub fn attach_to_base(&mut self, child: Node) -> bool {
        let Some(base) = self.base.as_mut() else {
            return false;
        };
        base.replace_child(child);
        self.version += 1;
        true
    }

    /// Remove a named child of the base
    pub fn detach_from_base(&mut self, name: &str) -> Option<Node> {
        let removed = self.base.as_mut()?.remove_child(name)?;
        self.version += 1;
        Some(removed)
    }

    pub fn preview(&self) -> Option<&Node> {
        self.preview.as_ref()
    }

    /// Per-frame animation access. Does not bump the version.
    pub fn preview_mut(&mut self) -> Option<&mut Node> {
        self.preview.as_mut()
    }

    pub fn set_preview(&mut self, preview: Option<Node>) -> Option<Node> {
        self.version += 1;
        std::mem::replace(&mut self.preview, preview)
    }

    /// The root actually drawn: the preview when open, otherwise the base
    fn visible_root(&self) -> Option<&Node> {
        self.preview.as_ref().or(self.base.as_ref())
    }

    pub fn mesh_count(&self) -> usize {
        self.visible_root().map(Node::mesh_count).unwrap_or(0)
    }

    /// Flatten the tree into draw items with world matrices
    pub fn draw_items(&self) -> Vec<DrawItem> {
        let mut items = Vec::with_capacity(self.mesh_count());
        if let Some(root) = self.visible_root() {
            root.visit(Mat4::IDENTITY, &mut |node, world| {
                if let NodeKind::Mesh {
                    primitive,
                    material,
                } = &node.kind
                {
                    items.push(DrawItem {
                        world,
                        primitive: *primitive,
                        material: *material,
                    });
                }
            });
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc() -> Node {
        Node::mesh(
            "disc",
            Primitive::Cylinder {
                radius_top: 1.0,
                radius_bottom: 1.0,
                height: 0.1,
                segments: 16,
            },
            Material::new([1.0; 3], 0.9),
        )
    }

    #[test]
    fn test_empty_scene_has_lights_and_no_items() {
        let scene = Scene::new();
        assert!(scene.base().is_none());
        assert!(scene.draw_items().is_empty());
        assert_eq!(scene.directional.position, Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(scene.ambient.intensity, 1.0);
    }

    #[test]
    fn test_attach_without_base_is_noop() {
        let mut scene = Scene::new();
        assert!(!scene.attach_to_base(Node::group("filling")));
        assert_eq!(scene.version(), 0);
    }

    #[test]
    fn test_structural_changes_bump_version() {
        let mut scene = Scene::new();
        scene.set_base(Some(disc()));
        let v1 = scene.version();
        assert!(scene.attach_to_base(Node::group("filling")));
        assert!(scene.version() > v1);
        let v2 = scene.version();
        assert!(scene.detach_from_base("filling").is_some());
        assert!(scene.version() > v2);
        assert!(scene.detach_from_base("filling").is_none());
    }

    #[test]
    fn test_draw_items_skip_groups() {
        let mut scene = Scene::new();
        let mut base = disc();
        let mut group = Node::group("filling");
        group.add_child(disc());
        base.add_child(group);
        scene.set_base(Some(base));
        assert_eq!(scene.draw_items().len(), 2);
    }

    #[test]
    fn test_preview_hides_base_until_closed() {
        let mut scene = Scene::new();
        scene.set_base(Some(disc()));
        let mut preview = Node::group("preview");
        preview.add_child(disc());
        preview.add_child(disc());
        scene.set_preview(Some(preview));
        assert_eq!(scene.mesh_count(), 2);
        assert_eq!(scene.draw_items().len(), 2);

        assert!(scene.set_preview(None).is_some());
        assert_eq!(scene.mesh_count(), 1);
        assert!(scene.base().is_some());
    }
}
