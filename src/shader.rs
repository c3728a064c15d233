use bytemuck::{Pod, Zeroable};

/// WGSL for the instanced circle renderer (`vs_main` / `fs_main`).
pub const CIRCLE_SHADER: &str = include_str!("shader.wgsl");

/// Per-frame uniforms of [`CIRCLE_SHADER`].
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// Surface size in pixels.
    pub resolution: [f32; 2],
    pub _padding: [f32; 2],
}
