//! Character grid geometry.
//!
//! The display is divided into a grid of character cells. A cell is one glyph
//! wide plus a spacer column, and one row group tall.
//!
//! # Units
//!
//! Horizontal quantities are in pixels. Vertical quantities are in *row
//! groups*: the LCD controller addresses display memory in horizontal bands
//! of `GLYPH_ROWS` pixels (one byte per column per band), and a text row is
//! exactly one band. So a display's height is given in row groups, and the
//! number of text rows is that same number. Nothing here ever scales
//! vertically.

use core::fmt;

use font_5x8::GLYPH_COLS;
use smart_default::SmartDefault;

/// Problems with a display configuration. These are detected once, by
/// `Geometry::new`, and mean the integrator has described an impossible
/// display.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A cell must be at least one pixel wide.
    ZeroCellWidth,
    /// The glyph plus spacer overflows a `usize`.
    CellTooWide { glyph_width: usize, spacer_width: usize },
    /// The display is narrower than a single cell.
    TooNarrow { width_px: usize, cell_width: usize },
    /// The display has no row groups at all.
    NoRows,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ZeroCellWidth => f.write_str("cell width is zero"),
            ConfigError::CellTooWide { glyph_width, spacer_width } => write!(
                f,
                "cell width {} + {} px overflows",
                glyph_width, spacer_width,
            ),
            ConfigError::TooNarrow { width_px, cell_width } => write!(
                f,
                "display is {} px wide, less than one {} px cell",
                width_px, cell_width,
            ),
            ConfigError::NoRows => f.write_str("display has no row groups"),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for ConfigError {}

/// Width of a cell: the glyph plus the gap to its right.
pub fn cell_width(
    glyph_width: usize,
    spacer_width: usize,
) -> Result<usize, ConfigError> {
    glyph_width
        .checked_add(spacer_width)
        .ok_or(ConfigError::CellTooWide {
            glyph_width,
            spacer_width,
        })
}

/// Number of whole cells that fit across `display_width_px`. Any leftover
/// pixels on the right are unused.
pub fn columns_of_cells(
    display_width_px: usize,
    cell_width: usize,
) -> Result<usize, ConfigError> {
    if cell_width == 0 {
        return Err(ConfigError::ZeroCellWidth);
    }
    Ok(display_width_px / cell_width)
}

/// Number of text rows. The height is already in row groups, which are one
/// cell tall, so this is the identity.
pub fn rows_of_cells(display_height_rows: usize) -> usize {
    display_height_rows
}

/// Physical description of a display, as reported by its driver.
///
/// The default is the NXT brick's LCD.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct DisplayConfig {
    /// Visible width in pixels.
    #[default = 100]
    pub width_px: usize,
    /// Visible height in row groups (see the module docs).
    #[default = 8]
    pub height_rows: usize,
    /// Blank columns between adjacent glyphs.
    #[default = 1]
    pub spacer_px: usize,
}

/// Validated grid geometry for a display. Compute this once when the display
/// is brought up; it never changes afterwards.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Geometry {
    cell_width: usize,
    cols: usize,
    rows: usize,
}

impl Geometry {
    pub fn new(config: &DisplayConfig) -> Result<Self, ConfigError> {
        Self::derive(config).map_err(|e| {
            log::warn!("rejecting display config {:?}: {}", config, e);
            e
        })
    }

    fn derive(config: &DisplayConfig) -> Result<Self, ConfigError> {
        let cell_width = cell_width(GLYPH_COLS, config.spacer_px)?;
        // Every cell holds a whole glyph; draw_glyph relies on this.
        assert!(cell_width >= GLYPH_COLS);
        let cols = columns_of_cells(config.width_px, cell_width)?;
        if cols == 0 {
            return Err(ConfigError::TooNarrow {
                width_px: config.width_px,
                cell_width,
            });
        }
        let rows = rows_of_cells(config.height_rows);
        if rows == 0 {
            return Err(ConfigError::NoRows);
        }

        log::debug!(
            "text grid: {}x{} cells, {} px per cell, {} px unused",
            cols,
            rows,
            cell_width,
            config.width_px - cols * cell_width,
        );
        Ok(Geometry {
            cell_width,
            cols,
            rows,
        })
    }

    /// Width of one cell in pixels, including the spacer.
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Number of cells per text row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of text rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Finds the top-left corner of the cell at (`col`, `row`), as a pixel x
    /// coordinate and a row group. Returns `None` if the cell is off the grid.
    pub fn cell_origin(&self, col: usize, row: usize) -> Option<(usize, usize)> {
        if col < self.cols && row < self.rows {
            Some((col * self.cell_width, row))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_width_includes_spacer() {
        assert_eq!(cell_width(5, 1), Ok(6));
        assert_eq!(cell_width(5, 0), Ok(5));
    }

    #[test]
    fn columns_round_down() {
        assert_eq!(columns_of_cells(84, cell_width(5, 1).unwrap()), Ok(14));
        assert_eq!(columns_of_cells(100, 6), Ok(16));
        assert_eq!(columns_of_cells(5, 6), Ok(0));
    }

    #[test]
    fn zero_cell_width_is_rejected() {
        assert_eq!(columns_of_cells(84, 0), Err(ConfigError::ZeroCellWidth));
        assert_eq!(columns_of_cells(0, 0), Err(ConfigError::ZeroCellWidth));
    }

    #[test]
    fn cell_width_overflow_is_rejected() {
        assert_eq!(
            cell_width(5, usize::MAX),
            Err(ConfigError::CellTooWide {
                glyph_width: 5,
                spacer_width: usize::MAX
            }),
        );
        assert_eq!(cell_width(0, usize::MAX), Ok(usize::MAX));
    }

    #[test]
    fn huge_spacer_is_rejected() {
        for &spacer_px in &[usize::MAX, usize::MAX - 4] {
            let config = DisplayConfig {
                spacer_px,
                ..DisplayConfig::default()
            };
            assert_eq!(
                Geometry::new(&config),
                Err(ConfigError::CellTooWide {
                    glyph_width: GLYPH_COLS,
                    spacer_width: spacer_px
                }),
                "spacer {}",
                spacer_px,
            );
        }

        // Fits in a usize, but no display is that wide.
        let config = DisplayConfig {
            spacer_px: usize::MAX - GLYPH_COLS,
            ..DisplayConfig::default()
        };
        assert_eq!(
            Geometry::new(&config),
            Err(ConfigError::TooNarrow {
                width_px: 100,
                cell_width: usize::MAX
            }),
        );
    }

    #[test]
    fn rows_are_row_groups() {
        assert_eq!(rows_of_cells(64), 64);
        assert_eq!(rows_of_cells(8), 8);
    }

    #[test]
    fn default_is_nxt_lcd() {
        let config = DisplayConfig::default();
        assert_eq!(config.width_px, crate::LCD_WIDTH);
        assert_eq!(config.height_rows, crate::LCD_HEIGHT);
        assert_eq!(config.spacer_px, 1);

        let g = Geometry::new(&config).unwrap();
        assert_eq!(g.cell_width(), 6);
        assert_eq!(g.cols(), 16);
        assert_eq!(g.rows(), 8);
    }

    #[test]
    fn narrow_display() {
        let config = DisplayConfig {
            width_px: 84,
            height_rows: 6,
            ..DisplayConfig::default()
        };
        let g = Geometry::new(&config).unwrap();
        assert_eq!((g.cols(), g.rows()), (14, 6));

        let config = DisplayConfig {
            width_px: 5,
            ..DisplayConfig::default()
        };
        assert_eq!(
            Geometry::new(&config),
            Err(ConfigError::TooNarrow {
                width_px: 5,
                cell_width: 6
            }),
        );
    }

    #[test]
    fn no_rows() {
        let config = DisplayConfig {
            height_rows: 0,
            ..DisplayConfig::default()
        };
        assert_eq!(Geometry::new(&config), Err(ConfigError::NoRows));
    }

    #[test]
    fn cell_origins() {
        let g = Geometry::new(&DisplayConfig::default()).unwrap();
        assert_eq!(g.cell_origin(0, 0), Some((0, 0)));
        assert_eq!(g.cell_origin(3, 2), Some((18, 2)));
        assert_eq!(g.cell_origin(15, 7), Some((90, 7)));
        assert_eq!(g.cell_origin(16, 0), None);
        assert_eq!(g.cell_origin(0, 8), None);
    }

    #[test]
    fn errors_display() {
        assert_eq!(
            ConfigError::TooNarrow { width_px: 5, cell_width: 6 }.to_string(),
            "display is 5 px wide, less than one 6 px cell",
        );
    }
}
