use glam::{EulerRot, Mat4, Quat, Vec3};

/// Local transform of a scene node. Rotation is Euler XYZ in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local matrix: translate * rotate * scale
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

/// Geometric primitive, sized in the node's local units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// Truncated cone along Y; equal radii give a plain cylinder
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

/// Standard PBR-ish material parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub fn new(color: [f32; 3], roughness: f32) -> Self {
        Self {
            color,
            roughness,
            metalness: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Group,
    Mesh {
        primitive: Primitive,
        material: Material,
    },
}

/// A node in the cake scene graph. Children inherit the parent transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub transform: Transform,
    pub children: Vec<Node>,
}

impl Node {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Group,
            transform: Transform::default(),
            children: Vec::new(),
        }
    }

    pub fn mesh(name: impl Into<String>, primitive: Primitive, material: Material) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Mesh {
                primitive,
                material,
            },
            transform: Transform::default(),
            children: Vec::new(),
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Replace the child with the same name, or append it. Returns the old child.
    pub fn replace_child(&mut self, child: Node) -> Option<Node> {
        match self.children.iter_mut().find(|c| c.name == child.name) {
            Some(slot) => Some(std::mem::replace(slot, child)),
            None => {
                self.children.push(child);
                None
            }
        }
    }

    pub fn remove_child(&mut self, name: &str) -> Option<Node> {
        let idx = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(idx))
    }

    pub fn primitive(&self) -> Option<&Primitive> {
        match &self.kind {
            NodeKind::Mesh { primitive, .. } => Some(primitive),
            NodeKind::Group => None,
        }
    }

    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            NodeKind::Group => None,
        }
    }

    pub fn material_mut(&mut self) -> Option<&mut Material> {
        match &mut self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            NodeKind::Group => None,
        }
    }

    /// Number of mesh nodes in this subtree (including self)
    pub fn mesh_count(&self) -> usize {
        let own = usize::from(matches!(self.kind, NodeKind::Mesh { .. }));
        own + self.children.iter().map(Node::mesh_count).sum::<usize>()
    }

    /// Depth-first visit with accumulated world matrices
    pub fn visit<F: FnMut(&Node, Mat4)>(&self, parent: Mat4, f: &mut F) {
        let world = parent * self.transform.matrix();
        f(self, world);
        for child in &self.children {
            child.visit(world, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(name: &str) -> Node {
        Node::mesh(
            name,
            Primitive::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            Material::new([1.0; 3], 0.5),
        )
    }

    #[test]
    fn test_replace_child_swaps_only_named_subtree() {
        let mut root = unit_box("root");
        root.add_child(Node::group("filling"));
        root.add_child(Node::group("toppings"));

        let mut fresh = Node::group("filling");
        fresh.add_child(unit_box("disc"));
        let old = root.replace_child(fresh);

        assert!(old.is_some());
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.child("filling").unwrap().children.len(), 1);
        assert!(root.child("toppings").is_some());
    }

    #[test]
    fn test_replace_child_appends_when_missing() {
        let mut root = Node::group("root");
        assert!(root.replace_child(Node::group("toppings")).is_none());
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_mesh_count_recursive() {
        let mut root = unit_box("root");
        let mut group = Node::group("g");
        group.add_child(unit_box("a"));
        group.add_child(unit_box("b"));
        root.add_child(group);
        assert_eq!(root.mesh_count(), 3);
    }

    #[test]
    fn test_children_inherit_parent_scale() {
        let mut root = Node::group("root").scaled(Vec3::splat(2.0));
        root.add_child(unit_box("child").at(Vec3::new(1.0, 0.0, 0.0)));

        let mut positions = Vec::new();
        root.visit(Mat4::IDENTITY, &mut |node, world| {
            if node.name == "child" {
                positions.push(world.transform_point3(Vec3::ZERO));
            }
        });
        assert_eq!(positions, vec![Vec3::new(2.0, 0.0, 0.0)]);
    }
}
