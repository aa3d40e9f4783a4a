use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::explorer::ExplorerSession;
use crate::controllers::explorer::data::explorer_config::ExplorerConfig;
use crate::input::gui::errors::GuiError;
use crate::input::gui::gui_app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the explorer window and runs until it is closed or `Esc` is pressed.
pub fn run_gui(config: ExplorerConfig) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;
    let resolution = config.resolution;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(PhysicalSize::new(resolution.width(), resolution.height()))
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, resolution)?;
    let session = ExplorerSession::new(config, presenter)?;
    let mut app = GuiApp::new(window, &event_loop, session);
    let mut failure: Option<GuiError> = None;

    window.request_redraw();

    event_loop.run(|event, elwt| {
        let result = match event {
            Event::WindowEvent { ref event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    Ok(())
                }
                WindowEvent::RedrawRequested => app.redraw().map(|running| {
                    if !running {
                        log::info!("explorer closed");
                        elwt.exit();
                    }
                }),
                other => app.handle_window_event(other),
            },
            _ => Ok(()),
        };

        if let Err(err) = result {
            log::error!("{err}");
            failure = Some(err);
            elwt.exit();
        }
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
