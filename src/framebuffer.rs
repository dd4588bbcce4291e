//! Framebuffer
//!
//! Flat row-major pixel buffer of packed colors - the canvas everything
//! renders to. Pixel (x, y) lives at linear index `x + y * width`.
//!
//! Addressing outside the buffer is a caller bug, never bad external
//! input, so bounds violations fail fast with a descriptive panic
//! instead of clamping or returning an error.

use crate::color::PackedColor;

pub struct Framebuffer {
    pixels: Vec<PackedColor>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Allocate a `width * height` buffer with every pixel set to `fill`
    pub fn new(width: u32, height: u32, fill: PackedColor) -> Self {
        Self {
            pixels: vec![fill; (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw pixel slice in row-major order, length `width * height`
    #[inline]
    pub fn pixels(&self) -> &[PackedColor] {
        &self.pixels
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} framebuffer",
            x,
            y,
            self.width,
            self.height
        );
        (x + y * self.width) as usize
    }

    /// Write one pixel. Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: PackedColor) {
        let idx = self.pixel_index(x, y);
        self.pixels[idx] = color;
    }

    /// Read one pixel. Panics if (x, y) is out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> PackedColor {
        self.pixels[self.pixel_index(x, y)]
    }

    /// Fill the half-open rectangle `[x, x+w) x [y, y+h)` with a solid color.
    ///
    /// Always an opaque overwrite - no blending with existing content.
    /// The whole rectangle must lie within the buffer; a rect that hangs
    /// over the edge is a caller bug and panics.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: PackedColor) {
        assert!(
            x + w <= self.width && y + h <= self.height,
            "rect {}x{} at ({}, {}) exceeds {}x{} framebuffer",
            w,
            h,
            x,
            y,
            self.width,
            self.height
        );
        for row in y..y + h {
            // Compute the row's starting index once, then walk it
            let mut idx = (x + row * self.width) as usize;
            for _ in 0..w {
                self.pixels[idx] = color;
                idx += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: PackedColor = PackedColor::rgb(255, 255, 255);
    const RED: PackedColor = PackedColor::rgb(255, 0, 0);
    const BLUE: PackedColor = PackedColor::rgb(0, 0, 255);

    #[test]
    fn test_new_fills_every_pixel() {
        let fb = Framebuffer::new(7, 3, WHITE);
        assert_eq!(fb.pixels().len(), 21);
        assert!(fb.pixels().iter().all(|&p| p == WHITE));
    }

    #[test]
    fn test_set_get_row_major() {
        let mut fb = Framebuffer::new(4, 4, WHITE);
        fb.set(2, 1, RED);
        assert_eq!(fb.get(2, 1), RED);
        // (2, 1) is linear index 6 in a 4-wide buffer
        assert_eq!(fb.pixels()[6], RED);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut fb = Framebuffer::new(4, 4, WHITE);
        fb.set(4, 0, RED);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_fill_rect_overhang_panics() {
        let mut fb = Framebuffer::new(4, 4, WHITE);
        fb.fill_rect(2, 2, 3, 1, RED);
    }

    #[test]
    fn test_fill_rect_covers_exactly_the_rect() {
        let mut fb = Framebuffer::new(8, 8, WHITE);
        fb.fill_rect(2, 3, 3, 2, RED);
        for y in 0..8 {
            for x in 0..8 {
                let inside = (2..5).contains(&x) && (3..5).contains(&y);
                assert_eq!(fb.get(x, y), if inside { RED } else { WHITE });
            }
        }
    }

    #[test]
    fn test_disjoint_fills_commute() {
        let mut a = Framebuffer::new(8, 8, WHITE);
        a.fill_rect(0, 0, 4, 4, RED);
        a.fill_rect(4, 4, 4, 4, BLUE);

        let mut b = Framebuffer::new(8, 8, WHITE);
        b.fill_rect(4, 4, 4, 4, BLUE);
        b.fill_rect(0, 0, 4, 4, RED);

        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_overlapping_fill_is_last_writer_wins() {
        let mut fb = Framebuffer::new(8, 8, WHITE);
        fb.fill_rect(0, 0, 6, 6, RED);
        fb.fill_rect(4, 4, 4, 4, BLUE);
        // Overlap region takes the later color, no blending
        assert_eq!(fb.get(5, 5), BLUE);
        assert_eq!(fb.get(3, 3), RED);
        assert_eq!(fb.get(7, 7), BLUE);
    }
}
