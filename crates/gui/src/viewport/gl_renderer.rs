use glow::HasContext;

use super::mesh::{self, MeshData};
use super::FrameSnapshot;

// ── Render parameters ────────────────────────────────────────

/// Parameters for rendering the viewport
pub struct RenderParams {
    /// Viewport rectangle [x, y, width, height] in pixels
    pub viewport: [f32; 4],
}

// ── GPU mesh handles ─────────────────────────────────────────

struct GpuMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ibo: glow::Buffer,
    index_count: i32,
}

// ── Main GL renderer ─────────────────────────────────────────

pub struct GlRenderer {
    mesh_program: glow::Program,
    /// One GPU mesh per draw item, in draw-list order
    meshes: Vec<GpuMesh>,
    /// (scene version, item count) of the uploaded meshes. Per-frame changes
    /// (rotation, color fade, icing drop) travel as uniforms, but the icing
    /// node comes and goes without a version bump, hence the count.
    cache_key: Option<(u64, usize)>,
}

impl GlRenderer {
    pub fn new(gl: &glow::Context) -> Result<Self, String> {
        let mesh_program = compile_program(gl, MESH_VERT, MESH_FRAG)?;
        Ok(Self {
            mesh_program,
            meshes: Vec::new(),
            cache_key: None,
        })
    }

    /// Re-tessellate and upload when the scene changed structurally
    pub fn sync(&mut self, gl: &glow::Context, frame: &FrameSnapshot) {
        let key = (frame.version, frame.items.len());
        if self.cache_key == Some(key) {
            return;
        }

        self.clear_meshes(gl);
        for item in &frame.items {
            // White vertices; the material color is applied as a uniform
            let data = mesh::tessellate(&item.primitive, [1.0, 1.0, 1.0]);
            match upload_mesh(gl, &data) {
                Ok(gpu) => self.meshes.push(gpu),
                Err(e) => {
                    tracing::error!("Mesh upload failed: {e}");
                    self.clear_meshes(gl);
                    return;
                }
            }
        }
        tracing::debug!("Uploaded {} meshes (scene v{})", self.meshes.len(), frame.version);
        self.cache_key = Some(key);
    }

    fn clear_meshes(&mut self, gl: &glow::Context) {
        for mesh in self.meshes.drain(..) {
            unsafe {
                gl.delete_vertex_array(mesh.vao);
                gl.delete_buffer(mesh.vbo);
                gl.delete_buffer(mesh.ibo);
            }
        }
        self.cache_key = None;
    }

    /// Render the snapshot over whatever egui painted underneath
    pub fn paint(&self, gl: &glow::Context, frame: &FrameSnapshot, params: &RenderParams) {
        unsafe {
            gl.viewport(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.scissor(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.enable(glow::SCISSOR_TEST);

            // Keep the backdrop: depth only
            gl.clear(glow::DEPTH_BUFFER_BIT);
            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);
            gl.enable(glow::CULL_FACE);
            gl.cull_face(glow::BACK);

            gl.use_program(Some(self.mesh_program));

            let ambient = glam::Vec3::from(frame.ambient.color) * frame.ambient.intensity;
            let sun = glam::Vec3::from(frame.directional.color) * frame.directional.intensity;
            let light_dir = frame.directional.direction();
            set_uniform_vec3(gl, self.mesh_program, "u_ambient", &ambient);
            set_uniform_vec3(gl, self.mesh_program, "u_light_color", &sun);
            set_uniform_vec3(gl, self.mesh_program, "u_light_dir", &light_dir);

            for (mesh, item) in self.meshes.iter().zip(&frame.items) {
                let mvp = frame.view_projection * item.world;
                set_uniform_mat4(gl, self.mesh_program, "u_mvp", &mvp);
                set_uniform_mat4(gl, self.mesh_program, "u_model", &item.world);
                let tint = glam::Vec3::from(item.material.color);
                set_uniform_vec3(gl, self.mesh_program, "u_tint", &tint);
                draw_mesh(gl, mesh);
            }

            gl.disable(glow::CULL_FACE);
            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::SCISSOR_TEST);
            gl.use_program(None);
        }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        self.clear_meshes(gl);
        unsafe {
            gl.delete_program(self.mesh_program);
        }
    }
}

// ── GPU upload ───────────────────────────────────────────────

fn upload_mesh(gl: &glow::Context, data: &MeshData) -> Result<GpuMesh, String> {
    unsafe {
        let vao = gl.create_vertex_array()?;
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer()?;
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck_cast_slice(&data.vertices),
            glow::STATIC_DRAW,
        );

        // position, normal, color at locations 0, 1, 2
        let stride = (mesh::STRIDE * 4) as i32;
        for (location, offset) in [(0u32, 0i32), (1, 3), (2, 6)] {
            gl.enable_vertex_attrib_array(location);
            gl.vertex_attrib_pointer_f32(location, 3, glow::FLOAT, false, stride, offset * 4);
        }

        let ibo = gl.create_buffer()?;
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck_cast_slice(&data.indices),
            glow::STATIC_DRAW,
        );

        gl.bind_vertex_array(None);

        Ok(GpuMesh {
            vao,
            vbo,
            ibo,
            index_count: data.indices.len() as i32,
        })
    }
}

// ── Draw calls ───────────────────────────────────────────────

unsafe fn draw_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    gl.bind_vertex_array(Some(mesh.vao));
    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.ibo));
    gl.draw_elements(glow::TRIANGLES, mesh.index_count, glow::UNSIGNED_INT, 0);
    gl.bind_vertex_array(None);
}

// ── Shader compilation ───────────────────────────────────────

unsafe fn compile_stage(
    gl: &glow::Context,
    kind: u32,
    src: &str,
) -> Result<glow::Shader, String> {
    let shader = gl.create_shader(kind)?;
    gl.shader_source(shader, src);
    gl.compile_shader(shader);
    if gl.get_shader_compile_status(shader) {
        return Ok(shader);
    }
    let log = gl.get_shader_info_log(shader);
    gl.delete_shader(shader);
    Err(format!("shader stage {kind:#x} failed: {log}"))
}

fn compile_program(
    gl: &glow::Context,
    vert_src: &str,
    frag_src: &str,
) -> Result<glow::Program, String> {
    unsafe {
        let vert = compile_stage(gl, glow::VERTEX_SHADER, vert_src)?;
        let frag = match compile_stage(gl, glow::FRAGMENT_SHADER, frag_src) {
            Ok(frag) => frag,
            Err(e) => {
                gl.delete_shader(vert);
                return Err(e);
            }
        };

        let program = gl.create_program()?;
        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        gl.detach_shader(program, vert);
        gl.detach_shader(program, frag);
        gl.delete_shader(vert);
        gl.delete_shader(frag);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(format!("cake shader failed to link: {log}"));
        }
        Ok(program)
    }
}

// ── Uniform setters ──────────────────────────────────────────

fn set_uniform_mat4(gl: &glow::Context, program: glow::Program, name: &str, mat: &glam::Mat4) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_matrix_4_f32_slice(loc.as_ref(), false, &mat.to_cols_array());
    }
}

fn set_uniform_vec3(gl: &glow::Context, program: glow::Program, name: &str, v: &glam::Vec3) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_3_f32(loc.as_ref(), v.x, v.y, v.z);
    }
}

// ── Byte cast helper ─────────────────────────────────────────

fn bytemuck_cast_slice<T: Copy>(slice: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(slice.as_ptr() as *const u8, std::mem::size_of_val(slice)) }
}

// ── Shaders ──────────────────────────────────────────────────

const MESH_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;
uniform mat4 u_model;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec3 a_color;

out vec3 v_normal;
out vec3 v_color;

void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
    v_normal = transpose(inverse(mat3(u_model))) * a_normal;
    v_color = a_color;
}
"#;

const MESH_FRAG: &str = r#"#version 330 core
uniform vec3 u_tint;
uniform vec3 u_ambient;
uniform vec3 u_light_color;
uniform vec3 u_light_dir;

in vec3 v_normal;
in vec3 v_color;

out vec4 frag_color;

void main() {
    vec3 n = normalize(v_normal);
    float diffuse = max(dot(n, u_light_dir), 0.0);
    vec3 light = u_ambient * 0.4 + u_light_color * diffuse;
    frag_color = vec4(min(v_color * u_tint * light, vec3(1.0)), 1.0);
}
"#;
