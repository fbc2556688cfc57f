/// Camera uniform buffer data for the renderer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad1: f32,
    pub forward: [f32; 3],
    pub _pad2: f32,
}

/// Scene animation parameters applied as model-transform offsets
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct AnimationUniform {
    pub clap_offset: f32,
    pub prop_scale: f32,
    pub wheel_angle: f32, // Degrees
    pub _pad: f32,
}
