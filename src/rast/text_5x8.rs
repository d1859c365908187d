//! Text renderer using 5x8 pixel glyphs in spaced cells.
//!
//! Cells are addressed by (column, row) on the grid described by a
//! `Geometry`. Drawing a cell overwrites the whole cell, spacer included, so
//! redrawing text never leaves stale pixels behind. There is no wrapping or
//! scrolling at this level.

use font_5x8::{Font, Glyph, GLYPH_COLS};

use super::Framebuffer;
use crate::geometry::Geometry;

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    /// Draws `glyph` into the cell at (`col`, `row`).
    ///
    /// # Panics
    ///
    /// If the cell is not on `geometry`'s grid, or the grid does not fit in
    /// this framebuffer.
    pub fn draw_glyph(
        &mut self,
        geometry: &Geometry,
        col: usize,
        row: usize,
        glyph: &Glyph,
    ) {
        let (x, page) = match geometry.cell_origin(col, row) {
            Some(origin) => origin,
            None => panic!(
                "cell ({}, {}) outside {}x{} grid",
                col,
                row,
                geometry.cols(),
                geometry.rows(),
            ),
        };
        let cell_end = x + geometry.cell_width();
        assert!(
            cell_end <= W && page < H,
            "grid does not fit a {}x{} framebuffer",
            W,
            H,
        );

        let cell = &mut self.page_mut(page)[x..cell_end];
        let (pixels, spacer) = cell.split_at_mut(GLYPH_COLS);
        pixels.copy_from_slice(glyph.columns());
        for c in spacer {
            *c = 0;
        }
    }

    /// Draws the glyph for `code` into the cell at (`col`, `row`). Codes
    /// without a glyph draw as blanks.
    ///
    /// # Panics
    ///
    /// As for `draw_glyph`.
    pub fn draw_char(
        &mut self,
        geometry: &Geometry,
        font: &Font,
        col: usize,
        row: usize,
        code: u8,
    ) {
        self.draw_glyph(geometry, col, row, font.resolve(code))
    }

    /// Draws `text` on `row`, starting at `col` and stopping at the right edge
    /// of the grid. Returns the number of cells drawn.
    ///
    /// # Panics
    ///
    /// If `row` is not on the grid, or the grid does not fit in this
    /// framebuffer.
    pub fn draw_text(
        &mut self,
        geometry: &Geometry,
        font: &Font,
        col: usize,
        row: usize,
        text: &[u8],
    ) -> usize {
        assert!(row < geometry.rows(), "row {} outside grid", row);
        let room = geometry.cols().saturating_sub(col);
        let n = text.len().min(room);
        for (i, &code) in text[..n].iter().enumerate() {
            self.draw_char(geometry, font, col + i, row, code);
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DisplayConfig;
    use crate::LcdFramebuffer as Lcd;
    use font_5x8::FONT;

    fn nxt() -> Geometry {
        Geometry::new(&DisplayConfig::default()).unwrap()
    }

    #[test]
    fn glyph_lands_in_cell() {
        let g = nxt();
        let mut fb = Lcd::new();
        fb.draw_char(&g, &FONT, 2, 3, b'A');

        assert_eq!(&fb.page(3)[12..18], &[0x7E, 0x09, 0x09, 0x09, 0x7E, 0]);
        // Nothing else touched.
        let lit = fb.as_bytes().iter().filter(|&&b| b != 0).count();
        assert_eq!(lit, 5);
    }

    #[test]
    fn redraw_clears_cell() {
        let g = nxt();
        let mut fb = Lcd::new();
        for b in fb.page_mut(0).iter_mut() {
            *b = 0xFF;
        }
        fb.draw_char(&g, &FONT, 0, 0, b'!');
        assert_eq!(&fb.page(0)[0..6], &[0, 0, 0x5F, 0, 0, 0]);
        assert_eq!(fb.page(0)[6], 0xFF);

        // Unprintable codes blank the cell.
        fb.draw_char(&g, &FONT, 1, 0, 0x07);
        assert_eq!(&fb.page(0)[6..12], &[0; 6]);
    }

    #[test]
    fn text_stops_at_right_edge() {
        let g = nxt();
        let mut fb = Lcd::new();
        let drawn = fb.draw_text(&g, &FONT, 12, 1, b"Hello");
        assert_eq!(drawn, 4);
        assert_eq!(&fb.page(1)[72..77], FONT.resolve(b'H').columns());
        assert_eq!(&fb.page(1)[90..95], FONT.resolve(b'l').columns());
        // Pixels past the last cell stay dark.
        assert_eq!(&fb.page(1)[96..], &[0; 4]);

        assert_eq!(fb.draw_text(&g, &FONT, 16, 1, b"x"), 0);
        assert_eq!(fb.draw_text(&g, &FONT, 0, 2, b""), 0);
    }

    #[test]
    fn last_cell_fits() {
        let g = nxt();
        let mut fb = Lcd::new();
        fb.draw_char(&g, &FONT, g.cols() - 1, g.rows() - 1, b'~');
        assert_eq!(&fb.page(7)[90..95], FONT.resolve(b'~').columns());
    }

    #[test]
    #[should_panic]
    fn cell_off_grid() {
        let g = nxt();
        Lcd::new().draw_char(&g, &FONT, 16, 0, b'A');
    }

    #[test]
    #[should_panic]
    fn grid_larger_than_buffer() {
        let g = nxt();
        Framebuffer::<60, 8>::new().draw_char(&g, &FONT, 10, 0, b'A');
    }
}
