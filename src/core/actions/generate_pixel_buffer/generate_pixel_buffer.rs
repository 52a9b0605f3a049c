use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::canvas::CanvasDimensions;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, OPAQUE, PixelBuffer};

/// Colours row-major `input` values into an opaque RGBA buffer.
///
/// Each pixel slot is filled with a single four-byte copy. Values beyond the
/// canvas are ignored; pixels without a value stay zeroed.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    canvas: CanvasDimensions,
) -> PixelBuffer
where
    T: Copy,
    CMap: ColourMap<T>,
{
    let mut pixel_buffer = PixelBuffer::new(canvas);

    for (slot, &value) in pixel_buffer
        .bytes_mut()
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(input)
    {
        slot.copy_from_slice(&mapper.map(value).to_rgba(OPAQUE));
    }

    pixel_buffer
}

/// Parallel variant of [`generate_pixel_buffer`]; the output is identical.
pub fn generate_pixel_buffer_rayon<T, CMap>(
    input: &[T],
    mapper: &CMap,
    canvas: CanvasDimensions,
) -> PixelBuffer
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
{
    let mut pixel_buffer = PixelBuffer::new(canvas);
    let pixel_count = input.len().min(canvas.pixel_count());

    pixel_buffer.bytes_mut()[..pixel_count * BYTES_PER_PIXEL]
        .par_chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(input[..pixel_count].par_iter())
        .for_each(|(slot, &value)| {
            slot.copy_from_slice(&mapper.map(value).to_rgba(OPAQUE));
        });

    pixel_buffer
}
