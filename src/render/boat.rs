use super::helpers;
use crate::constants::{AMBIENT_INTENSITY, LIGHT_DIRECTION};
use glam::Mat4;
use ripple_core::{boat_hull, BoatPose, HullVertex};
use wgpu::util::DeviceExt;

/// Host mirror of `BoatUniforms` in `boat.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BoatUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) light: [f32; 4],
}

impl BoatUniforms {
    pub(crate) fn new(view_proj: Mat4, pose: &BoatPose) -> Self {
        let [lx, ly, lz] = LIGHT_DIRECTION;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: pose.model_matrix().to_cols_array_2d(),
            color: pose.color.extend(1.0).to_array(),
            light: [lx, ly, lz, AMBIENT_INTENSITY],
        }
    }
}

pub(crate) struct BoatResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
}

pub(crate) fn create_boat_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
) -> BoatResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("boat_shader"),
        source: wgpu::ShaderSource::Wgsl(ripple_core::BOAT_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("boat_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("boat_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_mesh_pipeline(
        device,
        "boat_pipeline",
        &pl,
        &shader,
        ("vs_boat", "fs_boat"),
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<HullVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        },
        color_format,
        depth_format,
    );
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("boat_uniforms"),
        size: std::mem::size_of::<BoatUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("boat_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let hull = boat_hull();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("boat_vertices"),
        contents: bytemuck::cast_slice(&hull),
        usage: wgpu::BufferUsages::VERTEX,
    });

    BoatResources {
        pipeline,
        uniform_buffer,
        bind_group,
        vertex_buffer,
        vertex_count: hull.len() as u32,
    }
}

impl BoatResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}
