use glam::{Mat4, Vec3};

/// Scene uniform block for GPU.
///
/// Matches the WGSL layout
/// `struct SceneUniforms { view_matrix: mat4x4<f32>, camera_position: vec3<f32>, screen_resolution: vec2<f32> }`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_matrix: [[f32; 4]; 4],
    /// Written once at startup; the default shader reads the position from `view_matrix`
    pub camera_position: [f32; 3],
    pub _pad0: f32,
    pub screen_resolution: [f32; 2],
    pub _pad1: [f32; 2],
}

impl SceneUniforms {
    pub fn new(view_matrix: Mat4, camera_position: Vec3, width: u32, height: u32) -> Self {
        Self {
            view_matrix: view_matrix.to_cols_array_2d(),
            camera_position: camera_position.to_array(),
            _pad0: 0.0,
            screen_resolution: [width as f32, height as f32],
            _pad1: [0.0; 2],
        }
    }

    pub fn set_view_matrix(&mut self, view_matrix: Mat4) {
        self.view_matrix = view_matrix.to_cols_array_2d();
    }

    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.screen_resolution = [width as f32, height as f32];
    }
}

/// Full-screen quad vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
}

impl QuadVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Two triangles covering clip space, drawn as a triangle strip
pub const FULLSCREEN_QUAD: [QuadVertex; 4] = [
    QuadVertex { position: [-1.0, -1.0, 0.0] },
    QuadVertex { position: [1.0, -1.0, 0.0] },
    QuadVertex { position: [-1.0, 1.0, 0.0] },
    QuadVertex { position: [1.0, 1.0, 0.0] },
];
