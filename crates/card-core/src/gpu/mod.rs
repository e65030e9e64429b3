//! wgpu renderer for the card's image planes, shared by the web and native
//! frontends. Surface and device setup stay with the frontend.

mod helpers;
mod material;

pub use material::FaceResources;

use crate::camera::Camera;
use crate::constants::CLEAR_COLOR;
use crate::layout::{Card, FaceSide};
use crate::texture::ImageRgba;
use material::{create_plane_pipelines, PlanePipelines};

pub struct CardRenderer {
    pipelines: PlanePipelines,
    sampler: wgpu::Sampler,
    faces: Vec<FaceResources>,
    clear_color: wgpu::Color,
}

impl CardRenderer {
    /// Build per-face GPU resources. The back face shows `back_image` when
    /// given, otherwise the front artwork.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color_format: wgpu::TextureFormat,
        card: &Card,
        front_image: &ImageRgba,
        back_image: Option<&ImageRgba>,
    ) -> Self {
        let pipelines = create_plane_pipelines(device, color_format);
        let sampler = helpers::create_image_sampler(device);
        let faces = card
            .faces()
            .map(|face| {
                let image = match face.side {
                    FaceSide::Front => front_image,
                    FaceSide::Back => back_image.unwrap_or(front_image),
                };
                FaceResources::new(device, queue, &pipelines, &sampler, face, image)
            })
            .collect::<Vec<_>>();
        log::info!("[render] card renderer ready: faces={}", faces.len());
        Self {
            pipelines,
            sampler,
            faces,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        }
    }

    /// Rebind one face to new artwork. Returns false when the card has no such face.
    /// Pair with [`Card::set_image_size`] when the proportions change.
    pub fn set_face_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        side: FaceSide,
        image: &ImageRgba,
    ) -> bool {
        let Some(res) = self.faces.iter_mut().find(|f| f.side == side) else {
            return false;
        };
        res.set_image(device, queue, &self.pipelines, &self.sampler, image);
        log::info!(
            "[render] {:?} image replaced: {}x{}",
            side,
            image.width(),
            image.height()
        );
        true
    }

    /// Upload this frame's transforms and mask uniforms. Call after `Card::tick`.
    pub fn update(&self, queue: &wgpu::Queue, card: &Card, camera: &Camera) {
        let view_proj = camera.view_proj();
        for res in &self.faces {
            if let Some(face) = card.face(res.side) {
                res.update(queue, face, view_proj, card.transform);
            }
        }
    }

    /// Clear `target` and draw the faces back to front.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("card_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        for res in &self.faces {
            res.draw(&mut rpass, &self.pipelines);
        }
    }
}
