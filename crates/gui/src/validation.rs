//! Mesh validation utilities.
//!
//! `MeshValidator` checks tessellated cake geometry: stride, in-range
//! indices, unit normals, bounding-box size and vertex color.

use crate::viewport::mesh::{MeshData, STRIDE};

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Vertex buffer length is a multiple of the 9-float stride.
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % STRIDE == 0
    }

    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// All vertex normals have unit length (within epsilon).
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        self.mesh.vertices.chunks_exact(STRIDE).all(|v| {
            let len = (v[3] * v[3] + v[4] * v[4] + v[5] * v[5]).sqrt();
            (len - 1.0).abs() <= epsilon
        })
    }

    /// Bounding-box size (width, height, depth), zero for an empty mesh.
    pub fn dimensions(&self) -> [f32; 3] {
        match self.mesh.bounds() {
            Some((min, max)) => (max - min).to_array(),
            None => [0.0; 3],
        }
    }

    pub fn assert_dimensions_approx(&self, expected: [f32; 3], tolerance: f32) -> bool {
        let dims = self.dimensions();
        dims.iter()
            .zip(expected.iter())
            .all(|(d, e)| (d - e).abs() < tolerance)
    }

    /// Every vertex carries `color` (within 0.01 per channel).
    pub fn has_uniform_color(&self, color: [f32; 3]) -> bool {
        self.vertex_count() > 0
            && self
                .mesh
                .vertices
                .chunks_exact(STRIDE)
                .all(|v| (0..3).all(|c| (v[6 + c] - color[c]).abs() < 0.01))
    }

    /// Run all checks. An empty list means the mesh is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_stride_valid() {
            errors.push(format!(
                "Vertex buffer length {} is not a multiple of {STRIDE}",
                self.mesh.vertices.len()
            ));
        }

        if !self.is_index_stride_valid() {
            errors.push(format!(
                "Index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }

        if !self.are_indices_in_range() {
            let max_idx = self.vertex_count() as u32;
            let out_of_range: Vec<_> = self
                .mesh
                .indices
                .iter()
                .filter(|&&i| i >= max_idx)
                .take(5)
                .collect();
            errors.push(format!(
                "Indices out of range (vertex_count={}): {:?}",
                max_idx, out_of_range
            ));
        }

        if self.vertex_count() > 0 && !self.are_normals_normalized(0.01) {
            errors.push("Some normals are not unit-length (epsilon=0.01)".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Primitive;
    use crate::viewport::mesh::tessellate;

    fn all_primitives() -> Vec<Primitive> {
        vec![
            Primitive::Box {
                width: 2.2,
                height: 0.5,
                depth: 2.2,
            },
            Primitive::Cylinder {
                radius_top: 1.1,
                radius_bottom: 1.1,
                height: 0.5,
                segments: 48,
            },
            Primitive::Cylinder {
                radius_top: 0.05,
                radius_bottom: 0.03,
                height: 0.3,
                segments: 12,
            },
            Primitive::Cone {
                radius: 1.1,
                height: 0.5,
                segments: 3,
            },
            Primitive::Sphere {
                radius: 0.1,
                width_segments: 12,
                height_segments: 12,
            },
            Primitive::Torus {
                radius: 0.9,
                tube: 0.08,
                radial_segments: 8,
                tubular_segments: 24,
            },
        ]
    }

    #[test]
    fn test_every_primitive_validates() {
        for p in all_primitives() {
            let mesh = tessellate(&p, [0.5, 0.5, 0.5]);
            let v = MeshValidator::new(&mesh);
            let errors = v.validate_all();
            assert!(errors.is_empty(), "{p:?}: {errors:?}");
            assert!(v.triangle_count() > 0);
            assert!(v.has_uniform_color([0.5, 0.5, 0.5]));
        }
    }

    #[test]
    fn test_sprinkle_dimensions() {
        let mesh = tessellate(
            &Primitive::Box {
                width: 0.02,
                height: 0.08,
                depth: 0.02,
            },
            [1.0; 3],
        );
        let v = MeshValidator::new(&mesh);
        assert!(v.assert_dimensions_approx([0.02, 0.08, 0.02], 1e-4));
        assert!(!v.assert_dimensions_approx([0.08, 0.02, 0.02], 1e-4));
    }

    #[test]
    fn test_base_disc_dimensions() {
        let mesh = tessellate(
            &Primitive::Cylinder {
                radius_top: 1.1,
                radius_bottom: 1.1,
                height: 0.5,
                segments: 48,
            },
            [1.0; 3],
        );
        let v = MeshValidator::new(&mesh);
        assert!(v.assert_dimensions_approx([2.2, 0.5, 2.2], 1e-3));
    }

    #[test]
    fn test_stride_invalid() {
        let bad = MeshData {
            vertices: vec![0.0; 10],
            indices: vec![0, 1, 2],
        };
        let errors = MeshValidator::new(&bad).validate_all();
        assert!(errors.iter().any(|e| e.contains("multiple of 9")));
    }

    #[test]
    fn test_indices_out_of_range() {
        let bad = MeshData {
            vertices: vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0],
            indices: vec![0, 5, 2],
        };
        let v = MeshValidator::new(&bad);
        assert!(!v.are_indices_in_range());
        assert!(v.validate_all().iter().any(|e| e.contains("out of range")));
    }

    #[test]
    fn test_normals_not_normalized() {
        let bad = MeshData {
            vertices: vec![0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 0.5, 0.5, 0.5],
            indices: vec![],
        };
        assert!(!MeshValidator::new(&bad).are_normals_normalized(0.01));
    }

    #[test]
    fn test_empty_mesh_has_no_color() {
        let empty = MeshData::default();
        let v = MeshValidator::new(&empty);
        assert!(!v.has_uniform_color([1.0; 3]));
        assert_eq!(v.dimensions(), [0.0; 3]);
    }
}
