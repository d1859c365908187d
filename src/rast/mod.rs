//! Rasterizer support.

pub mod text_5x8;

use font_5x8::GLYPH_ROWS;

/// Display memory for a column-addressed monochrome LCD.
///
/// Memory is split into `H` row groups ("pages") of `GLYPH_ROWS` pixel rows
/// each. Within a page there is one byte per pixel column, `W` columns wide,
/// and bit `i` of a byte is pixel row `i` of the page. This matches the
/// controller's memory layout, so the whole buffer can be shipped to the
/// controller with `as_bytes`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Framebuffer<const W: usize, const H: usize>([[u8; W]; H]);

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    /// Creates a cleared framebuffer.
    pub const fn new() -> Self {
        Framebuffer([[0; W]; H])
    }

    /// Width in pixels.
    pub const fn width(&self) -> usize {
        W
    }

    /// Height in row groups.
    pub const fn pages(&self) -> usize {
        H
    }

    pub fn clear(&mut self) {
        for page in &mut self.0 {
            *page = [0; W];
        }
    }

    /// Returns row group `page`.
    ///
    /// # Panics
    ///
    /// If `page >= H`.
    pub fn page(&self, page: usize) -> &[u8; W] {
        &self.0[page]
    }

    pub(crate) fn page_mut(&mut self, page: usize) -> &mut [u8; W] {
        &mut self.0[page]
    }

    /// The whole buffer, page by page, in controller order.
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: `[[u8; W]; H]` is laid out as `W * H` contiguous bytes with
        // no padding, and the slice borrows `self`.
        unsafe {
            core::slice::from_raw_parts(self.0.as_ptr() as *const u8, W * H)
        }
    }

    /// Checks whether the pixel at (`x`, `y`) is lit, with `y` in pixel rows
    /// (not row groups).
    ///
    /// # Panics
    ///
    /// If the pixel is outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        let page = y / GLYPH_ROWS;
        let bit = y % GLYPH_ROWS;
        self.0[page][x] & (1 << bit) != 0
    }
}

impl<const W: usize, const H: usize> Default for Framebuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clear() {
        let fb = Framebuffer::<100, 8>::new();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.pages(), 8);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.as_bytes().len(), 800);
    }

    #[test]
    fn bytes_are_page_major() {
        let mut fb = Framebuffer::<4, 2>::new();
        fb.page_mut(0)[1] = 0xAA;
        fb.page_mut(1)[3] = 0x01;
        assert_eq!(fb.as_bytes(), &[0, 0xAA, 0, 0, 0, 0, 0, 0x01]);
        assert_eq!(fb.page(1), &[0, 0, 0, 0x01]);
    }

    #[test]
    fn pixels_span_pages() {
        let mut fb = Framebuffer::<4, 2>::new();
        fb.page_mut(0)[0] = 0x80;
        fb.page_mut(1)[2] = 0x01;
        assert!(fb.pixel(0, 7));
        assert!(!fb.pixel(0, 6));
        assert!(fb.pixel(2, 8));
        assert!(!fb.pixel(2, 0));

        fb.clear();
        assert!(!fb.pixel(0, 7));
        assert!(!fb.pixel(2, 8));
    }

    #[test]
    #[should_panic]
    fn pixel_below_buffer() {
        Framebuffer::<4, 2>::new().pixel(0, 16);
    }
}
