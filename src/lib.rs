//! Text output for small column-addressed monochrome LCDs.
//!
//! The display driver owns a [`rast::Framebuffer`] and ships it to the LCD
//! controller on every refresh. This crate provides the pieces in between
//! text and that buffer:
//!
//! - [`geometry`] works out, once at startup, how many character cells fit on
//!   the display, and rejects impossible configurations.
//! - [`rast::text_5x8`] draws glyphs from a [`Font`] into cells.
//!
//! The glyph table itself lives in the `font_5x8` crate and is re-exported
//! here. Nothing in the drawing path allocates, blocks, or fails on bad input
//! text: unprintable codes draw as blanks.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod geometry;
pub mod rast;

pub use font_5x8::{
    is_printable, Font, Glyph, END_CHAR, FIRST_CHAR, FONT, GLYPH_COLS,
    GLYPH_COUNT, GLYPH_ROWS,
};

/// Width of the NXT LCD in pixels.
pub const LCD_WIDTH: usize = 100;
/// Height of the NXT LCD in row groups (64 pixels).
pub const LCD_HEIGHT: usize = 8;

/// Framebuffer sized for the NXT LCD.
pub type LcdFramebuffer = rast::Framebuffer<LCD_WIDTH, LCD_HEIGHT>;
