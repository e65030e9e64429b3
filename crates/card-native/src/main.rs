use card_core::gpu::CardRenderer;
use card_core::{
    screen_to_world_ray, Camera, Card, CardLayout, FaceMaterial, FaceSpec, ImageRgba,
    MaskCompositor, MaskConfig, DEMO_IMAGE_HEIGHT, DEMO_IMAGE_WIDTH,
};
use glam::Vec2;
use std::time::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

// Clamp for frames delivered after a long stall (window drag, debugger)
const MAX_FRAME_DT: f32 = 0.1;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: CardRenderer,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        card: &Card,
        image: &ImageRgba,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let renderer = CardRenderer::new(&device, &queue, format, card, image, None);
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            width,
            height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn camera(&self) -> Camera {
        Camera::looking_at_card(self.width as f32 / self.height.max(1) as f32)
    }

    /// Whether the cursor at `pos` (physical pixels) is over the front image.
    fn pick(&self, card: &Card, pos: Vec2) -> bool {
        let ray = screen_to_world_ray(
            &self.camera(),
            self.width as f32,
            self.height as f32,
            pos.x,
            pos.y,
        );
        card.front_hit(ray)
    }

    fn render(&mut self, card: &Card) -> Result<(), wgpu::SurfaceError> {
        self.renderer.update(&self.queue, card, &self.camera());
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.renderer.render(&mut encoder, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Masked front over the demo artwork. The demo has no back face.
fn build_card(image: &ImageRgba) -> anyhow::Result<Card> {
    let mask = MaskCompositor::new(MaskConfig::showcase())?;
    let front = FaceSpec {
        material: FaceMaterial::Masked(mask),
        image_size: Some(image.size()),
    };
    Ok(Card::new(&CardLayout::default(), Some(front), None))
}

/// Info by default; filters found in `env` (normally `RUST_LOG`) win.
fn logger_builder(env: env_logger::Env) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info).parse_env(env);
    builder
}

fn main() -> anyhow::Result<()> {
    logger_builder(env_logger::Env::default()).init();

    let image = ImageRgba::demo_pattern(DEMO_IMAGE_WIDTH, DEMO_IMAGE_HEIGHT);
    let mut card = build_card(&image)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Bokeh Card (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, &card, &image))?;
    let mut hovered = false;
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let hit = state.pick(&card, Vec2::new(position.x as f32, position.y as f32));
            if hit != hovered {
                log::info!("[pointer] hover {}", if hit { "enter" } else { "leave" });
            }
            hovered = hit;
        }
        Event::WindowEvent {
            event: WindowEvent::CursorLeft { .. },
            ..
        } => hovered = false,
        Event::AboutToWait => {
            let now = Instant::now();
            let dt_sec = (now - last_frame).as_secs_f32().min(MAX_FRAME_DT);
            last_frame = now;
            card.tick(dt_sec, hovered);
            match state.render(&card) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
