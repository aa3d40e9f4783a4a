use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::data::resolution::Resolution;

#[derive(Debug, Error)]
pub enum PixelsPresenterError {
    #[error(transparent)]
    PixelFormat(#[from] PixelFormatError),
    #[error("failed to resize pixels texture: {0}")]
    Texture(#[from] pixels::TextureError),
}

/// Shows frames in a window through a `pixels` surface, with egui drawn on
/// top.
///
/// `present` only uploads the frame into the `pixels` buffer; nothing reaches
/// the screen until [`PixelsPresenter::draw`] runs from the redraw handler.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    status: String,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, resolution: Resolution) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(resolution.width(), resolution.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            window,
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            status: String::new(),
        })
    }

    /// Status text of the last presented frame.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Maps a physical window position to a frame pixel, or `None` when the
    /// position is outside the drawn frame.
    #[must_use]
    pub fn window_pos_to_pixel(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        let (px, py) = self.pixels.window_pos_to_pixel((x as f32, y as f32)).ok()?;

        Some((u32::try_from(px).ok()?, u32::try_from(py).ok()?))
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.surface_width = width;
        self.surface_height = height;
        self.pixels.resize_surface(width, height)
    }

    /// Draws the current frame and the egui output to the window.
    pub fn draw(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };
        let textures_delta = egui_output.textures_delta;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl FramePresenterPort for PixelsPresenter {
    type Error = PixelsPresenterError;

    fn resize(&mut self, resolution: Resolution) -> Result<(), PixelsPresenterError> {
        self.pixels.resize_buffer(resolution.width(), resolution.height())?;

        let _ = self
            .window
            .request_inner_size(PhysicalSize::new(resolution.width(), resolution.height()));

        Ok(())
    }

    fn present(&mut self, frame: &FrameData<'_>) -> Result<(), PixelsPresenterError> {
        copy_rgb_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut())?;

        self.status.clear();
        self.status.push_str(frame.status);

        log::trace!("frame {} uploaded in {:?}", frame.generation, frame.render_duration);

        Ok(())
    }
}
