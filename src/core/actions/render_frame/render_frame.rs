use std::num::NonZeroUsize;

use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::resolution::Resolution;
use crate::core::data::view_state::ViewState;
use crate::core::util::calculate_worker_threads::calculate_worker_threads;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Fills one row of RGB bytes for row index `y`.
fn render_row<Alg, CMap>(
    y: u32,
    row: &mut [u8],
    resolution: Resolution,
    view: &ViewState,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let point = pixel_to_complex_coords(x as u32, y, resolution, view);
        let colour = colour_map.map(algorithm.compute(point));

        pixel[0] = colour.r;
        pixel[1] = colour.g;
        pixel[2] = colour.b;
    }
}

/// Renders frames on a dedicated rayon pool.
///
/// Rows are disjoint slices of the output buffer, so workers never share a
/// mutable cell. [`FrameRenderer::render_into`] returns only once every row
/// has been written.
#[derive(Debug)]
pub struct FrameRenderer {
    pool: rayon::ThreadPool,
}

impl FrameRenderer {
    pub fn new(threads: Option<NonZeroUsize>) -> Result<Self, RenderError> {
        let num_threads = calculate_worker_threads(threads);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("mandelbrot-render-{index}"))
            .build()?;

        log::debug!("render pool started with {num_threads} threads");

        Ok(Self { pool })
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Overwrites every pixel of `buffer` for the given view snapshot.
    pub fn render_into<Alg, CMap>(
        &self,
        view: &ViewState,
        algorithm: &Alg,
        colour_map: &CMap,
        buffer: &mut PixelBuffer,
    ) where
        Alg: FractalAlgorithm + Sync,
        CMap: ColourMap<Alg::Success> + Sync,
    {
        let resolution = buffer.resolution();
        let stride = buffer.row_stride();

        self.pool.install(|| {
            buffer
                .buffer_mut()
                .par_chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| {
                    render_row(y as u32, row, resolution, view, algorithm, colour_map);
                });
        });
    }

    #[must_use]
    pub fn render<Alg, CMap>(
        &self,
        view: &ViewState,
        resolution: Resolution,
        algorithm: &Alg,
        colour_map: &CMap,
    ) -> PixelBuffer
    where
        Alg: FractalAlgorithm + Sync,
        CMap: ColourMap<Alg::Success> + Sync,
    {
        let mut buffer = PixelBuffer::new(resolution);
        self.render_into(view, algorithm, colour_map, &mut buffer);
        buffer
    }
}

/// Single-threaded reference renderer.
#[must_use]
pub fn render_frame_serial<Alg, CMap>(
    view: &ViewState,
    resolution: Resolution,
    algorithm: &Alg,
    colour_map: &CMap,
) -> PixelBuffer
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut buffer = PixelBuffer::new(resolution);
    let stride = buffer.row_stride();

    for (y, row) in buffer.buffer_mut().chunks_mut(stride).enumerate() {
        render_row(y as u32, row, resolution, view, algorithm, colour_map);
    }

    buffer
}
