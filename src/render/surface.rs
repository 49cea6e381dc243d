use super::helpers;
use glam::Mat4;
use ripple_core::{
    base_color, plane_grid, FrameInputs, SurfaceVertex, MAX_RIPPLES, SURFACE_SEGMENTS,
    SURFACE_SIZE,
};
use wgpu::util::DeviceExt;

/// Host mirror of `SurfaceUniforms` in `surface.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SurfaceUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) base_color: [f32; 4],
    pub(crate) wave: [f32; 4],
    pub(crate) clock: [f32; 4],
    pub(crate) ripples: [[f32; 4]; MAX_RIPPLES],
}

impl SurfaceUniforms {
    pub(crate) fn new(view_proj: Mat4, inputs: &FrameInputs) -> Self {
        let [r, g, b] = base_color();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            base_color: [r, g, b, 1.0],
            wave: inputs.params.packed(),
            clock: [inputs.time, 0.0, 0.0, 0.0],
            ripples: inputs.snapshot.slots,
        }
    }
}

pub(crate) struct SurfaceResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    // kept alive for the bind group
    _texture: wgpu::Texture,
}

fn create_bind_group(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("surface_bg"),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

pub(crate) fn create_surface_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
) -> SurfaceResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("surface_shader"),
        source: wgpu::ShaderSource::Wgsl(ripple_core::SURFACE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("surface_bgl"),
        entries: &[
            helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("surface_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_mesh_pipeline(
        device,
        "surface_pipeline",
        &pl,
        &shader,
        ("vs_surface", "fs_surface"),
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SurfaceVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2],
        },
        color_format,
        depth_format,
    );

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("surface_uniforms"),
        size: std::mem::size_of::<SurfaceUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("surface_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    // White placeholder until the real texture arrives
    let (texture, view) =
        helpers::create_rgba_texture(device, queue, "surface_placeholder", 1, 1, &[255; 4]);
    let bind_group = create_bind_group(device, &bgl, &uniform_buffer, &view, &sampler);

    let mesh = plane_grid(SURFACE_SIZE, SURFACE_SIZE, SURFACE_SEGMENTS, SURFACE_SEGMENTS);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("surface_vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("surface_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    SurfaceResources {
        pipeline,
        uniform_buffer,
        bgl,
        bind_group,
        sampler,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        _texture: texture,
    }
}

impl SurfaceResources {
    /// Replace the sampled texture and rebuild the bind group around it.
    pub(crate) fn set_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) {
        let (texture, view) =
            helpers::create_rgba_texture(device, queue, "surface_texture", width, height, rgba);
        self.bind_group =
            create_bind_group(device, &self.bgl, &self.uniform_buffer, &view, &self.sampler);
        self._texture = texture;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
