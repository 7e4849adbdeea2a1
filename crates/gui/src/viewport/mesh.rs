//! CPU tessellation of scene primitives into interleaved vertex buffers.

use glam::Vec3;

use crate::scene::Primitive;

/// Floats per vertex: position(3) + normal(3) + color(3)
pub const STRIDE: usize = 9;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds of all positions, or None for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut chunks = self.vertices.chunks_exact(STRIDE);
        let first = chunks.next()?;
        let mut min = Vec3::new(first[0], first[1], first[2]);
        let mut max = min;
        for v in chunks {
            let p = Vec3::new(v[0], v[1], v[2]);
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }
}

/// Tessellate a primitive in its local frame, centred on the origin
pub fn tessellate(primitive: &Primitive, color: [f32; 3]) -> MeshData {
    match *primitive {
        Primitive::Box {
            width,
            height,
            depth,
        } => cube(width, height, depth, color),
        Primitive::Cylinder {
            radius_top,
            radius_bottom,
            height,
            segments,
        } => frustum(radius_top, radius_bottom, height, segments, color),
        Primitive::Cone {
            radius,
            height,
            segments,
        } => frustum(0.0, radius, height, segments, color),
        Primitive::Sphere {
            radius,
            width_segments,
            height_segments,
        } => sphere(radius, height_segments, width_segments, color),
        Primitive::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => torus(radius, tube, radial_segments, tubular_segments, color),
    }
}

pub fn cube(w: f32, h: f32, d: f32, color: [f32; 3]) -> MeshData {
    let hw = w * 0.5;
    let hh = h * 0.5;
    let hd = d * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // +Z
        (
            [
                Vec3::new(-hw, -hh, hd),
                Vec3::new(hw, -hh, hd),
                Vec3::new(hw, hh, hd),
                Vec3::new(-hw, hh, hd),
            ],
            Vec3::Z,
        ),
        // -Z
        (
            [
                Vec3::new(hw, -hh, -hd),
                Vec3::new(-hw, -hh, -hd),
                Vec3::new(-hw, hh, -hd),
                Vec3::new(hw, hh, -hd),
            ],
            Vec3::NEG_Z,
        ),
        // +X
        (
            [
                Vec3::new(hw, -hh, hd),
                Vec3::new(hw, -hh, -hd),
                Vec3::new(hw, hh, -hd),
                Vec3::new(hw, hh, hd),
            ],
            Vec3::X,
        ),
        // -X
        (
            [
                Vec3::new(-hw, -hh, -hd),
                Vec3::new(-hw, -hh, hd),
                Vec3::new(-hw, hh, hd),
                Vec3::new(-hw, hh, -hd),
            ],
            Vec3::NEG_X,
        ),
        // +Y
        (
            [
                Vec3::new(-hw, hh, hd),
                Vec3::new(hw, hh, hd),
                Vec3::new(hw, hh, -hd),
                Vec3::new(-hw, hh, -hd),
            ],
            Vec3::Y,
        ),
        // -Y
        (
            [
                Vec3::new(-hw, -hh, -hd),
                Vec3::new(hw, -hh, -hd),
                Vec3::new(hw, -hh, hd),
                Vec3::new(-hw, -hh, hd),
            ],
            Vec3::NEG_Y,
        ),
    ];

    let mut vertices = Vec::with_capacity(24 * STRIDE);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / STRIDE) as u32;
        for v in quad {
            push_vert(&mut vertices, *v, *normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Truncated cone along Y. A zero top radius gives a cone with no top cap.
pub fn frustum(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
    color: [f32; 3],
) -> MeshData {
    let segments = segments.max(3);
    let hh = height * 0.5;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Outward side normal leans up by the radius drop over the height
    let lean = radius_bottom - radius_top;

    for i in 0..segments {
        let a0 = (i as f32) * std::f32::consts::TAU / segments as f32;
        let a1 = ((i + 1) as f32) * std::f32::consts::TAU / segments as f32;
        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();

        let n0 = Vec3::new(c0 * height, lean, s0 * height).normalize_or_zero();
        let n1 = Vec3::new(c1 * height, lean, s1 * height).normalize_or_zero();

        let base = (vertices.len() / STRIDE) as u32;
        push_vert(&mut vertices, Vec3::new(radius_bottom * c0, -hh, radius_bottom * s0), n0, color);
        push_vert(&mut vertices, Vec3::new(radius_bottom * c1, -hh, radius_bottom * s1), n1, color);
        push_vert(&mut vertices, Vec3::new(radius_top * c1, hh, radius_top * s1), n1, color);
        push_vert(&mut vertices, Vec3::new(radius_top * c0, hh, radius_top * s0), n0, color);

        // CCW seen from outside
        indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }

    if radius_top > 0.0 {
        add_cap(&mut vertices, &mut indices, radius_top, hh, segments, true, color);
    }
    if radius_bottom > 0.0 {
        add_cap(&mut vertices, &mut indices, radius_bottom, -hh, segments, false, color);
    }

    MeshData { vertices, indices }
}

pub fn sphere(radius: f32, rings: u32, sectors: u32, color: [f32; 3]) -> MeshData {
    let rings = rings.max(2);
    let sectors = sectors.max(3);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for r in 0..=rings {
        let phi = std::f32::consts::PI * r as f32 / rings as f32;
        let (sp, cp) = phi.sin_cos();

        for s in 0..=sectors {
            let theta = std::f32::consts::TAU * s as f32 / sectors as f32;
            let (st, ct) = theta.sin_cos();
            let n = Vec3::new(sp * ct, cp, sp * st);
            push_vert(&mut vertices, n * radius, n, color);
        }
    }

    for r in 0..rings {
        for s in 0..sectors {
            let i0 = r * (sectors + 1) + s;
            let i1 = i0 + 1;
            let i2 = i0 + sectors + 1;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
        }
    }

    MeshData { vertices, indices }
}

/// Torus lying in the XZ plane, ring centred on the origin
pub fn torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
    color: [f32; 3],
) -> MeshData {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for j in 0..=radial {
        let v = std::f32::consts::TAU * j as f32 / radial as f32;
        let (sv, cv) = v.sin_cos();
        for i in 0..=tubular {
            let u = std::f32::consts::TAU * i as f32 / tubular as f32;
            let (su, cu) = u.sin_cos();
            let ring_center = Vec3::new(radius * cu, 0.0, radius * su);
            let normal = Vec3::new(cv * cu, sv, cv * su);
            push_vert(&mut vertices, ring_center + normal * tube, normal, color);
        }
    }

    for j in 0..radial {
        for i in 0..tubular {
            let a = j * (tubular + 1) + i;
            let b = a + tubular + 1;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    MeshData { vertices, indices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn add_cap(
    vertices: &mut Vec<f32>,
    indices: &mut Vec<u32>,
    radius: f32,
    y: f32,
    segments: u32,
    facing_up: bool,
    color: [f32; 3],
) {
    let normal = if facing_up { Vec3::Y } else { Vec3::NEG_Y };
    let center_idx = (vertices.len() / STRIDE) as u32;
    push_vert(vertices, Vec3::new(0.0, y, 0.0), normal, color);

    for i in 0..segments {
        let angle = (i as f32) * std::f32::consts::TAU / segments as f32;
        push_vert(
            vertices,
            Vec3::new(radius * angle.cos(), y, radius * angle.sin()),
            normal,
            color,
        );
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        let (a, b) = (center_idx + 1 + i, center_idx + 1 + next);
        if facing_up {
            indices.extend_from_slice(&[center_idx, b, a]);
        } else {
            indices.extend_from_slice(&[center_idx, a, b]);
        }
    }
}
