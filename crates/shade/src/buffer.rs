use crate::{Color, PixelSink};

/// An in-memory width x height color grid; the reference [`PixelSink`].
///
/// Writes outside the surface are dropped, so triangles overhanging the
/// edges rasterize without clipping logic in the caller.
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// A `width` x `height` surface cleared to black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at `(x, y)`, or `None` outside the surface.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Row-major RGB bytes, top row first. The form image writers want.
    pub fn to_rgb8_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_rgb8());
        }
        bytes
    }
}

impl PixelSink for PixelBuffer {
    fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_black() {
        let buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.get(0, 0), Some(Color::BLACK));
        assert_eq!(buffer.get(3, 2), Some(Color::BLACK));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut buffer = PixelBuffer::new(4, 3);
        buffer.set(2, 1, Color::GREEN);
        assert_eq!(buffer.get(2, 1), Some(Color::GREEN));
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut buffer = PixelBuffer::new(4, 3);
        buffer.set(-1, 0, Color::RED);
        buffer.set(4, 0, Color::RED);
        buffer.set(0, 3, Color::RED);
        assert_eq!(buffer.to_rgb8_bytes(), vec![0; 4 * 3 * 3]);
    }

    #[test]
    fn rgb8_export_is_row_major() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set(1, 0, Color::RED);
        buffer.set(0, 1, Color::BLUE);
        let bytes = buffer.to_rgb8_bytes();
        assert_eq!(&bytes[3..6], &[255, 0, 0]);
        assert_eq!(&bytes[6..9], &[0, 0, 255]);
    }
}
