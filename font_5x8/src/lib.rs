//! A fixed 5x8 pixel font for column-addressed monochrome displays.
//!
//! Glyphs are stored column-major: each glyph is `GLYPH_COLS` bytes, and bit
//! `i` of each byte is pixel row `i` of that column, counting down from the
//! top. This is the same layout the LCD controller uses for a row group of
//! display memory, so a glyph column can be copied straight into the
//! framebuffer.
//!
//! Only printable ASCII (`FIRST_CHAR .. END_CHAR`) has glyphs. Everything else
//! resolves to the blank glyph; see [`Font::resolve`].

#![cfg_attr(not(test), no_std)]

mod table;

use core::convert::TryFrom;

use static_assertions::{assert_eq_size, const_assert, const_assert_eq};

/// Width of a glyph in pixels.
pub const GLYPH_COLS: usize = 5;
/// Height of a glyph in pixels. This is also the height of one row group of
/// display memory.
pub const GLYPH_ROWS: usize = 8;

/// Code of the first character in the table. Codes below it are unprintable.
pub const FIRST_CHAR: u8 = 0x20;
/// Code one past the last character in the table. Codes at or above it are
/// unprintable.
pub const END_CHAR: u8 = 0x80;

/// Number of glyphs in the table.
pub const GLYPH_COUNT: usize = (END_CHAR - FIRST_CHAR) as usize;

const_assert!(GLYPH_ROWS <= 8);
const_assert_eq!(GLYPH_COUNT, 96);

/// Bitmap for a single character.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[repr(transparent)]
pub struct Glyph(pub [u8; GLYPH_COLS]);

assert_eq_size!(Glyph, [u8; GLYPH_COLS]);

impl Glyph {
    /// The all-clear glyph.
    pub const BLANK: Self = Glyph([0; GLYPH_COLS]);

    /// Returns the bitmask for column `x`.
    ///
    /// # Panics
    ///
    /// If `x >= GLYPH_COLS`.
    pub fn column(&self, x: usize) -> u8 {
        self.0[x]
    }

    /// Checks whether the pixel at column `x`, row `y` is lit.
    ///
    /// # Panics
    ///
    /// If `x >= GLYPH_COLS` or `y >= GLYPH_ROWS`.
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        assert!(y < GLYPH_ROWS);
        self.0[x] & (1 << y) != 0
    }

    /// Checks whether every pixel is clear.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    pub fn columns(&self) -> &[u8; GLYPH_COLS] {
        &self.0
    }
}

/// Checks whether `code` has a glyph of its own. Text can be filtered with
/// this before rendering, but it isn't required: `Font::resolve` accepts any
/// code.
pub fn is_printable(code: u8) -> bool {
    code >= FIRST_CHAR && code < END_CHAR
}

/// Maps a code to its table index, if it has one.
fn index_of(code: u8) -> Option<usize> {
    code.checked_sub(FIRST_CHAR)
        .map(usize::from)
        .filter(|&i| i < GLYPH_COUNT)
}

/// A complete glyph table, one entry per printable character.
///
/// Word-aligned so that the table can be block-copied into RAM.
#[repr(align(4))]
pub struct Font([Glyph; GLYPH_COUNT]);

impl Font {
    /// Wraps a table. Entry `k` must be the glyph for `FIRST_CHAR + k`, and
    /// entry 0 (space) doubles as the fallback glyph.
    pub const fn new(glyphs: [Glyph; GLYPH_COUNT]) -> Self {
        Font(glyphs)
    }

    /// Number of glyphs in the table.
    pub fn glyph_count(&self) -> usize {
        self.0.len()
    }

    /// Returns the glyph at table index `index`.
    ///
    /// Most callers want `resolve`, which takes a character code instead.
    ///
    /// # Panics
    ///
    /// If `index >= GLYPH_COUNT`.
    pub fn glyph_at(&self, index: usize) -> &Glyph {
        assert!(
            index < GLYPH_COUNT,
            "glyph index {} out of range (table holds {})",
            index,
            GLYPH_COUNT,
        );
        &self.0[index]
    }

    /// The glyph used for codes outside the printable range.
    pub fn fallback(&self) -> &Glyph {
        &self.0[0]
    }

    /// Returns the glyph to draw for `code`.
    ///
    /// This is total: unprintable codes (control characters, DEL and up, etc.)
    /// get the fallback glyph rather than an error, so a driver can hand it
    /// arbitrary bytes. It runs in constant time and is safe to call from the
    /// refresh interrupt.
    pub fn resolve(&self, code: u8) -> &Glyph {
        match index_of(code) {
            Some(i) => &self.0[i],
            None => self.fallback(),
        }
    }

    /// Like `resolve`, but for a `char`. Anything outside ASCII gets the
    /// fallback glyph.
    pub fn resolve_char(&self, c: char) -> &Glyph {
        match u8::try_from(u32::from(c)) {
            Ok(code) => self.resolve(code),
            Err(_) => self.fallback(),
        }
    }

    /// The whole table, in code order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.0
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "ram-font", target_os = "none"))] {
        /// The built-in font. With `ram-font` it lives in `.data` and is
        /// copied out of flash at reset.
        #[link_section = ".data.font_5x8"]
        pub static FONT: Font = Font::new(table::GLYPHS);
    } else {
        /// The built-in font.
        pub static FONT: Font = Font::new(table::GLYPHS);
    }
}
