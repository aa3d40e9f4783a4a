use egui::{Color32, Context, RichText};
use egui_winit::State as EguiWinitState;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use crate::controllers::explorer::ExplorerSession;
use crate::core::navigation::command::NavCommand;
use crate::input::gui::errors::GuiError;
use crate::input::gui::keymap::{command_for_click, command_for_key, command_for_wheel};
use crate::presenters::pixels::presenter::PixelsPresenter;

const STATUS_FONT_SIZE: f32 = 24.0;

pub struct GuiApp {
    window: &'static Window,
    session: ExplorerSession<PixelsPresenter>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    cursor: Option<PhysicalPosition<f64>>,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        session: ExplorerSession<PixelsPresenter>,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            session,
            egui_ctx,
            egui_state,
            cursor: None,
        }
    }

    fn queue(&mut self, command: NavCommand) {
        log::debug!("queued {command}");

        self.session.queue(command);
        self.window.request_redraw();
    }

    /// Forwards the event to egui, then turns it into navigation commands
    /// unless egui used it.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<(), GuiError> {
        let response = self.egui_state.on_window_event(self.window, event);

        if response.repaint {
            self.window.request_redraw();
        }

        if let WindowEvent::CursorMoved { position, .. } = event {
            self.cursor = Some(*position);
        }

        if response.consumed {
            return Ok(());
        }

        match event {
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(command) = command_for_key(code) {
                        self.queue(command);
                    }
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let pixel = self
                    .cursor
                    .and_then(|pos| self.session.presenter().window_pos_to_pixel(pos.x, pos.y));

                if let Some(command) = pixel.and_then(|(x, y)| command_for_click(*button, x, y)) {
                    self.queue(command);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(command) = command_for_wheel(*delta) {
                    self.queue(command);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }
            WindowEvent::Resized(size) => {
                self.session
                    .presenter_mut()
                    .resize_surface(size.width, size.height)?;
                self.window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);

                let size = self.window.inner_size();
                self.session
                    .presenter_mut()
                    .resize_surface(size.width, size.height)?;
                self.window.request_redraw();
            }
            _ => {}
        }

        Ok(())
    }

    /// Renders a new frame if commands are pending, then draws it with the
    /// status overlay. Returns `false` once the session has quit.
    pub fn redraw(&mut self) -> Result<bool, GuiError> {
        if (self.session.pending() > 0 || self.session.generation() == 0) && !self.session.step()? {
            return Ok(false);
        }

        let raw_input = self.egui_state.take_egui_input(self.window);
        let status = self.session.presenter().status().to_owned();

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Area::new(egui::Id::new("status"))
                .fixed_pos(egui::pos2(10.0, 10.0))
                .show(ctx, |ui| {
                    ui.label(
                        RichText::new(&status)
                            .color(Color32::WHITE)
                            .size(STATUS_FONT_SIZE),
                    );
                });
        });

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        self.session.presenter_mut().draw(egui_output, &self.egui_ctx)?;

        Ok(true)
    }
}
