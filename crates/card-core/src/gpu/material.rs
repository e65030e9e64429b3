use super::helpers;
use crate::compositor::MaskCompositor;
use crate::layout::{CardFace, FaceMaterial, FaceSide};
use crate::texture::ImageRgba;
use crate::uniforms::{CircleUniforms, MaskUniforms, PlaneUniforms};
use glam::Mat4;
use wgpu::util::DeviceExt;

/// Shared bind group layout and the two plane pipelines built from `MASK_WGSL`.
pub(crate) struct PlanePipelines {
    pub(crate) bgl: wgpu::BindGroupLayout, // plane, mask, circles, texture, sampler
    pub(crate) mask: wgpu::RenderPipeline,
    pub(crate) image: wgpu::RenderPipeline,
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

pub(crate) fn create_plane_pipelines(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> PlanePipelines {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mask_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::MASK_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("plane_bgl"),
        entries: &[
            uniform_entry(0, wgpu::ShaderStages::VERTEX),
            uniform_entry(1, wgpu::ShaderStages::FRAGMENT),
            uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            wgpu::BindGroupLayoutEntry {
                binding: 3,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 4,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("plane_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let mask = helpers::make_plane_pipeline(device, &pl, &shader, "fs_mask", color_format);
    let image = helpers::make_plane_pipeline(device, &pl, &shader, "fs_image", color_format);
    PlanePipelines { bgl, mask, image }
}

/// GPU side of one card face: its uniform buffers, texture and bind group.
///
/// The circle buffer is filled once here; `update` only rewrites the plane
/// transform and the per-frame mask scalars.
pub struct FaceResources {
    pub(crate) side: FaceSide,
    masked: bool,
    plane_buffer: wgpu::Buffer,
    mask_buffer: wgpu::Buffer,
    circle_buffer: wgpu::Buffer,
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl FaceResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pipelines: &PlanePipelines,
        sampler: &wgpu::Sampler,
        face: &CardFace,
        image: &ImageRgba,
    ) -> Self {
        let (mask_uniforms, circle_uniforms, masked) = match &face.material {
            FaceMaterial::Masked(mask) => (*mask.uniforms(), *mask.circle_uniforms(), true),
            FaceMaterial::Image => (
                MaskUniforms::default(),
                bytemuck::Zeroable::zeroed(),
                false,
            ),
        };
        let plane_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("plane_uniforms"),
            size: std::mem::size_of::<PlaneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let mask_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mask_uniforms"),
            contents: bytemuck::bytes_of(&mask_uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let circle_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("circle_uniforms"),
            contents: bytemuck::bytes_of::<CircleUniforms>(&circle_uniforms),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let (texture, view) =
            helpers::create_image_texture(device, queue, image_label(face.side), image);
        let bind_group = create_face_bind_group(
            device,
            pipelines,
            sampler,
            [&plane_buffer, &mask_buffer, &circle_buffer],
            &view,
        );
        Self {
            side: face.side,
            masked,
            plane_buffer,
            mask_buffer,
            circle_buffer,
            _texture: texture,
            bind_group,
        }
    }

    /// Swap the face artwork. Uniform buffers are kept; only the texture and
    /// bind group are rebuilt.
    pub(crate) fn set_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pipelines: &PlanePipelines,
        sampler: &wgpu::Sampler,
        image: &ImageRgba,
    ) {
        let (texture, view) =
            helpers::create_image_texture(device, queue, image_label(self.side), image);
        self.bind_group = create_face_bind_group(
            device,
            pipelines,
            sampler,
            [&self.plane_buffer, &self.mask_buffer, &self.circle_buffer],
            &view,
        );
        self._texture = texture;
    }

    pub(crate) fn update(&self, queue: &wgpu::Queue, face: &CardFace, view_proj: Mat4, card: Mat4) {
        let plane = PlaneUniforms::new(view_proj, face.placement.scaled_model(card));
        queue.write_buffer(&self.plane_buffer, 0, bytemuck::bytes_of(&plane));
        if let FaceMaterial::Masked(mask) = &face.material {
            write_mask_uniforms(queue, &self.mask_buffer, mask);
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, pipelines: &PlanePipelines) {
        rpass.set_pipeline(if self.masked {
            &pipelines.mask
        } else {
            &pipelines.image
        });
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..6, 0..1);
    }
}

fn image_label(side: FaceSide) -> &'static str {
    match side {
        FaceSide::Front => "front_image",
        FaceSide::Back => "back_image",
    }
}

// Buffers in binding order: plane, mask, circles
fn create_face_bind_group(
    device: &wgpu::Device,
    pipelines: &PlanePipelines,
    sampler: &wgpu::Sampler,
    buffers: [&wgpu::Buffer; 3],
    view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    let [plane, mask, circles] = buffers;
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("plane_bg"),
        layout: &pipelines.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: plane.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: mask.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: circles.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

pub(crate) fn write_mask_uniforms(queue: &wgpu::Queue, buffer: &wgpu::Buffer, mask: &MaskCompositor) {
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(mask.uniforms()));
}
