use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::controllers::explorer::data::explorer_config::ExplorerConfig;
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_frame::render_frame::FrameRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::navigation::command::NavCommand;
use crate::core::navigation::controller::{NavigationController, NavigationState};
use crate::core::navigation::status::status_text;

/// One run of the explorer.
///
/// The session owns the view, the resolution and the pixel buffer. Commands
/// are only ever applied from [`ExplorerSession::apply_pending`], never while
/// [`ExplorerSession::render_frame`] holds the buffer, so each frame is
/// rendered from a single consistent view.
pub struct ExplorerSession<P: FramePresenterPort> {
    navigation: NavigationController,
    state: NavigationState,
    colour_map: MandelbrotColourMapKinds,
    renderer: FrameRenderer,
    presenter: P,
    pending: VecDeque<NavCommand>,
    buffer: PixelBuffer,
    generation: u64,
    last_render_duration: Option<Duration>,
    quit: bool,
}

impl<P: FramePresenterPort> ExplorerSession<P> {
    pub fn new(config: ExplorerConfig, mut presenter: P) -> Result<Self, ExplorerError> {
        let renderer = FrameRenderer::new(config.threads)?;

        presenter
            .resize(config.resolution)
            .map_err(ExplorerError::presenter)?;

        log::info!(
            "session started at {} with {} render threads, colour map {}",
            config.resolution,
            renderer.threads(),
            config.colour_map
        );

        Ok(Self {
            navigation: NavigationController::new(config.view),
            state: NavigationState {
                view: config.view,
                resolution: config.resolution,
            },
            colour_map: config.colour_map,
            renderer,
            presenter,
            pending: VecDeque::new(),
            buffer: PixelBuffer::new(config.resolution),
            generation: 0,
            last_render_duration: None,
            quit: false,
        })
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.state.view
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.state.resolution
    }

    #[must_use]
    pub fn colour_map(&self) -> MandelbrotColourMapKinds {
        self.colour_map
    }

    /// Number of frames presented so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn is_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn status(&self) -> String {
        status_text(&self.state.view, self.state.resolution)
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn queue(&mut self, command: NavCommand) {
        self.pending.push_back(command);
    }

    pub fn queue_all(&mut self, commands: impl IntoIterator<Item = NavCommand>) {
        self.pending.extend(commands);
    }

    /// Applies queued commands in order.
    ///
    /// A `Quit` stops the session and discards whatever was queued behind it.
    /// Returns the number of commands applied.
    pub fn apply_pending(&mut self) -> Result<usize, ExplorerError> {
        let mut applied = 0;

        while let Some(command) = self.pending.pop_front() {
            applied += 1;

            let transition = self.navigation.apply(self.state, command);
            self.state = transition.state;

            log::trace!("applied {command}");

            if transition.resolution_changed {
                let resolution = self.state.resolution;

                log::info!("resolution changed to {resolution}");

                self.buffer = PixelBuffer::new(resolution);
                self.presenter
                    .resize(resolution)
                    .map_err(ExplorerError::presenter)?;
            }

            if transition.quit {
                let dropped = self.pending.len();
                self.pending.clear();
                self.quit = true;

                log::info!("quit requested, {dropped} queued commands dropped");
                break;
            }
        }

        Ok(applied)
    }

    /// Renders the current view into the session buffer and presents it.
    ///
    /// Returns the generation number of the presented frame.
    pub fn render_frame(&mut self) -> Result<u64, ExplorerError> {
        let view = self.state.view;
        let algorithm = MandelbrotAlgorithm::from_view(&view);
        let colour_map = mandelbrot_colour_map_factory(self.colour_map, view.max_iterations());

        let start = Instant::now();
        self.renderer
            .render_into(&view, &algorithm, &colour_map, &mut self.buffer);
        let render_duration = start.elapsed();

        self.generation += 1;
        self.last_render_duration = Some(render_duration);

        log::debug!(
            "frame {} rendered at {} in {:?}",
            self.generation,
            self.state.resolution,
            render_duration
        );

        let status = self.status();
        let frame = FrameData {
            generation: self.generation,
            pixel_buffer: &self.buffer,
            status: &status,
            render_duration,
        };

        self.presenter
            .present(&frame)
            .map_err(ExplorerError::presenter)?;

        Ok(self.generation)
    }

    /// Applies pending commands and, unless one of them was `Quit`, renders
    /// and presents a frame. Returns whether the session is still running.
    pub fn step(&mut self) -> Result<bool, ExplorerError> {
        self.apply_pending()?;

        if self.quit {
            return Ok(false);
        }

        self.render_frame()?;

        Ok(true)
    }

    /// Runs the session with the given commands until a `Quit` is seen or
    /// the queue is drained, presenting one final frame if not quit.
    pub fn run_script(
        &mut self,
        commands: impl IntoIterator<Item = NavCommand>,
    ) -> Result<bool, ExplorerError> {
        self.queue_all(commands);
        self.step()
    }
}
