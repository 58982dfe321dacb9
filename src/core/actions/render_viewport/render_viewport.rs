use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::render_viewport::ports::colour_map::ColourMap;
use crate::core::actions::render_viewport::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, write_pixel};
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::colour_map_factory;
use crate::core::util::plane_mapping::{ASPECT_RATIO, screen_to_plane, to_plane_bounds};
use crate::core::util::row_bands::{calculate_render_bands, rows_per_band};

#[must_use]
pub fn compute_view_bounds(viewport: &Viewport) -> PlaneBounds {
    to_plane_bounds(viewport, ASPECT_RATIO)
}

/// Renders the request to an RGBA buffer. A zero-sized surface yields an
/// empty buffer.
#[must_use]
pub fn render_viewport(request: &RenderRequest) -> PixelBuffer {
    let Ok(pixel_buffer) = render_viewport_cancelable(request, &NeverCancel) else {
        unreachable!("NeverCancel token should never signal cancellation")
    };

    pixel_buffer
}

/// Like [`render_viewport`], but abandons the frame as soon as `cancel`
/// fires. Cancellation is checked before every row of sample blocks.
pub fn render_viewport_cancelable<C>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled>
where
    C: CancelToken,
{
    let colour_map = colour_map_factory(request.colour_scheme);

    render_viewport_with(request, &MandelbrotAlgorithm, &colour_map, cancel)
}

#[instrument(
    skip_all,
    name = "render_viewport",
    fields(
        id = request.id,
        width = request.width,
        height = request.height,
        quality = request.quality,
        max_iterations = request.max_iterations,
    )
)]
pub(crate) fn render_viewport_with<Alg, Map, C>(
    request: &RenderRequest,
    algorithm: &Alg,
    colour_map: &Map,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled>
where
    Alg: EscapeTimeAlgorithm,
    Map: ColourMap,
    C: CancelToken,
{
    if request.is_degenerate() {
        debug!("zero-sized surface, returning empty buffer");
        return Ok(PixelBuffer::empty());
    }

    let sampler = BlockSampler {
        algorithm,
        colour_map,
        bounds: request.plane_bounds(),
        width: request.width,
        height: request.height,
        max_iterations: request.max_iterations,
        stride: request.sample_stride() as usize,
    };

    let row_bytes = request.width as usize * BYTES_PER_PIXEL;
    let block_row_bytes = row_bytes * sampler.stride;
    let block_rows = request.height.div_ceil(request.sample_stride());
    let bands = calculate_render_bands(block_rows);
    let block_rows_per_band = rows_per_band(block_rows, bands) as usize;

    let mut pixel_buffer = PixelBuffer::new(request.width, request.height);

    pixel_buffer
        .buffer_mut()
        .par_chunks_mut(block_row_bytes * block_rows_per_band)
        .enumerate()
        .try_for_each(|(band_index, band)| {
            let first_block_row = band_index * block_rows_per_band;

            for (offset, block_row) in band.chunks_mut(block_row_bytes).enumerate() {
                cancel.check()?;

                let py = (first_block_row + offset) * sampler.stride;
                sampler.fill_block_row(block_row, row_bytes, py);
            }

            Ok(())
        })?;

    debug!(bands, "frame rendered");
    Ok(pixel_buffer)
}

struct BlockSampler<'a, Alg, Map> {
    algorithm: &'a Alg,
    colour_map: &'a Map,
    bounds: PlaneBounds,
    width: u32,
    height: u32,
    max_iterations: u32,
    stride: usize,
}

impl<Alg, Map> BlockSampler<'_, Alg, Map>
where
    Alg: EscapeTimeAlgorithm,
    Map: ColourMap,
{
    /// Fills one row of `stride`-sized blocks starting at screen row `py`.
    /// Each block takes the colour sampled at its top-left pixel; blocks on
    /// the right and bottom edges are cut short by the surface.
    fn fill_block_row(&self, block_row: &mut [u8], row_bytes: usize, py: usize) {
        let (first_row, remaining_rows) = block_row.split_at_mut(row_bytes);

        for (block_index, block) in first_row
            .chunks_mut(self.stride * BYTES_PER_PIXEL)
            .enumerate()
        {
            let px = block_index * self.stride;
            let point = screen_to_plane(px as f64, py as f64, self.width, self.height, &self.bounds);
            let iteration = self.algorithm.escape_time(point, self.max_iterations);
            let colour = self.colour_map.map(iteration, self.max_iterations);

            for pixel in block.chunks_exact_mut(BYTES_PER_PIXEL) {
                write_pixel(pixel, colour);
            }
        }

        for row in remaining_rows.chunks_exact_mut(row_bytes) {
            row.copy_from_slice(first_row);
        }
    }
}
