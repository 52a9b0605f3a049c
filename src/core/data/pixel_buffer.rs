use thiserror::Error;

use crate::core::data::canvas::CanvasDimensions;

pub const BYTES_PER_PIXEL: usize = 4;
pub const OPAQUE: u8 = 255;

fn canvas_to_buffer_size(canvas: CanvasDimensions) -> usize {
    canvas.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("canvas needs {expected} bytes but buffer holds {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA raster, four bytes per pixel.
///
/// The renderer builds one of these per frame and hands it over by value;
/// nothing in the engine keeps a reference once it has been returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    canvas: CanvasDimensions,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// A fully transparent black buffer sized for `canvas`.
    #[must_use]
    pub fn new(canvas: CanvasDimensions) -> Self {
        Self {
            canvas,
            buffer: vec![0; canvas_to_buffer_size(canvas)],
        }
    }

    pub fn from_data(
        canvas: CanvasDimensions,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = canvas_to_buffer_size(canvas);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasDimensions {
        self.canvas
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Gives up the raw bytes, e.g. for blitting onto a display surface.
    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let index = self.index_of(x, y)?;
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }

        Some((y as usize * self.canvas.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(CanvasDimensions::new(10, 10));

        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_with_zero_dimension_is_empty() {
        let buffer = PixelBuffer::new(CanvasDimensions::new(0, 600));

        assert!(buffer.is_empty());
        assert_eq!(buffer.pixel(0, 0), None);
    }

    #[test]
    fn test_from_data_valid() {
        let canvas = CanvasDimensions::new(2, 1);
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // pixel (0,0) - red
            0, 255, 0, 255, // pixel (1,0) - green
        ];

        let buffer = PixelBuffer::from_data(canvas, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), data.as_slice());
        assert_eq!(buffer.pixel(1, 0), Some([0, 255, 0, 255]));
    }

    #[test]
    fn test_from_data_wrong_size() {
        let canvas = CanvasDimensions::new(2, 2);

        assert_eq!(
            PixelBuffer::from_data(canvas, vec![0; 12]).unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected: 16,
                actual: 12
            }
        );
    }

    #[test]
    fn test_pixel_reads_rgba_at_row_major_offset() {
        let mut data = vec![0; 3 * 3 * 4];
        data[16..20].copy_from_slice(&[10, 20, 30, 255]);

        let buffer = PixelBuffer::from_data(CanvasDimensions::new(3, 3), data).unwrap();

        assert_eq!(buffer.pixel(1, 1), Some([10, 20, 30, 255]));
        assert_eq!(buffer.pixel(0, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_pixel_out_of_bounds_is_none() {
        let buffer = PixelBuffer::new(CanvasDimensions::new(3, 3));

        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(0, 3), None);
    }

    #[test]
    fn test_into_data_hands_over_bytes() {
        let buffer = PixelBuffer::from_data(CanvasDimensions::new(1, 1), vec![1, 2, 3, 255]).unwrap();

        assert_eq!(buffer.into_data(), vec![1, 2, 3, 255]);
    }
}
