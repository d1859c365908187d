//! Glyph data for the 5x8 font.
//!
//! Generated from the font grid image; do not edit by hand. Entry `k` is the
//! glyph for code `FIRST_CHAR + k`. Each byte is one column, left to right,
//! with bit 0 at the top.

use crate::{Glyph, GLYPH_COUNT};

pub(crate) const GLYPHS: [Glyph; GLYPH_COUNT] = [
    Glyph([0x00, 0x00, 0x00, 0x00, 0x00]), // 0x20 space
    Glyph([0x00, 0x00, 0x5F, 0x00, 0x00]), // 0x21 '!'
    Glyph([0x00, 0x07, 0x00, 0x07, 0x00]), // 0x22 '"'
    Glyph([0x14, 0x3E, 0x14, 0x3E, 0x14]), // 0x23 '#'
    Glyph([0x55, 0xAA, 0x55, 0xAA, 0x55]), // 0x24 '$'
    Glyph([0x26, 0x16, 0x08, 0x34, 0x32]), // 0x25 '%'
    Glyph([0xAA, 0x55, 0xAA, 0x55, 0xAA]), // 0x26 '&'
    Glyph([0x00, 0x00, 0x07, 0x00, 0x00]), // 0x27 "'"
    Glyph([0x00, 0x1C, 0x22, 0x41, 0x00]), // 0x28 '('
    Glyph([0x00, 0x41, 0x22, 0x1C, 0x00]), // 0x29 ')'
    Glyph([0x2A, 0x1C, 0x7F, 0x1C, 0x2A]), // 0x2A '*'
    Glyph([0x08, 0x08, 0x3E, 0x08, 0x08]), // 0x2B '+'
    Glyph([0x00, 0x50, 0x30, 0x00, 0x00]), // 0x2C ','
    Glyph([0x08, 0x08, 0x08, 0x08, 0x08]), // 0x2D '-'
    Glyph([0x00, 0x60, 0x60, 0x00, 0x00]), // 0x2E '.'
    Glyph([0x20, 0x10, 0x08, 0x04, 0x02]), // 0x2F '/'
    Glyph([0x3E, 0x51, 0x49, 0x45, 0x3E]), // 0x30 '0'
    Glyph([0x00, 0x42, 0x7F, 0x40, 0x00]), // 0x31 '1'
    Glyph([0x42, 0x61, 0x51, 0x49, 0x46]), // 0x32 '2'
    Glyph([0x21, 0x41, 0x45, 0x4B, 0x31]), // 0x33 '3'
    Glyph([0x18, 0x14, 0x12, 0x7F, 0x10]), // 0x34 '4'
    Glyph([0x27, 0x45, 0x45, 0x45, 0x39]), // 0x35 '5'
    Glyph([0x3C, 0x4A, 0x49, 0x49, 0x30]), // 0x36 '6'
    Glyph([0x01, 0x01, 0x79, 0x05, 0x03]), // 0x37 '7'
    Glyph([0x36, 0x49, 0x49, 0x49, 0x36]), // 0x38 '8'
    Glyph([0x06, 0x49, 0x49, 0x29, 0x1E]), // 0x39 '9'
    Glyph([0x00, 0x36, 0x36, 0x00, 0x00]), // 0x3A ':'
    Glyph([0x00, 0x56, 0x36, 0x00, 0x00]), // 0x3B ';'
    Glyph([0x08, 0x14, 0x22, 0x41, 0x00]), // 0x3C '<'
    Glyph([0x14, 0x14, 0x14, 0x14, 0x14]), // 0x3D '='
    Glyph([0x41, 0x22, 0x14, 0x08, 0x00]), // 0x3E '>'
    Glyph([0x02, 0x01, 0x59, 0x05, 0x02]), // 0x3F '?'
    Glyph([0x3E, 0x41, 0x49, 0x55, 0x1E]), // 0x40 '@'
    Glyph([0x7E, 0x09, 0x09, 0x09, 0x7E]), // 0x41 'A'
    Glyph([0x7F, 0x49, 0x49, 0x49, 0x3E]), // 0x42 'B'
    Glyph([0x3E, 0x41, 0x41, 0x41, 0x22]), // 0x43 'C'
    Glyph([0x7F, 0x41, 0x41, 0x22, 0x1C]), // 0x44 'D'
    Glyph([0x7F, 0x49, 0x49, 0x49, 0x41]), // 0x45 'E'
    Glyph([0x7F, 0x09, 0x09, 0x09, 0x01]), // 0x46 'F'
    Glyph([0x3E, 0x41, 0x41, 0x49, 0x3A]), // 0x47 'G'
    Glyph([0x7F, 0x08, 0x08, 0x08, 0x7F]), // 0x48 'H'
    Glyph([0x00, 0x41, 0x7F, 0x41, 0x00]), // 0x49 'I'
    Glyph([0x20, 0x40, 0x41, 0x3F, 0x01]), // 0x4A 'J'
    Glyph([0x7F, 0x08, 0x14, 0x22, 0x41]), // 0x4B 'K'
    Glyph([0x7F, 0x40, 0x40, 0x40, 0x40]), // 0x4C 'L'
    Glyph([0x7F, 0x02, 0x04, 0x02, 0x7F]), // 0x4D 'M'
    Glyph([0x7F, 0x04, 0x08, 0x10, 0x7F]), // 0x4E 'N'
    Glyph([0x3E, 0x41, 0x41, 0x41, 0x3E]), // 0x4F 'O'
    Glyph([0x7F, 0x09, 0x09, 0x09, 0x06]), // 0x50 'P'
    Glyph([0x3E, 0x41, 0x51, 0x21, 0x5E]), // 0x51 'Q'
    Glyph([0x7F, 0x09, 0x19, 0x29, 0x46]), // 0x52 'R'
    Glyph([0x26, 0x49, 0x49, 0x49, 0x32]), // 0x53 'S'
    Glyph([0x01, 0x01, 0x7F, 0x01, 0x01]), // 0x54 'T'
    Glyph([0x3F, 0x40, 0x40, 0x40, 0x3F]), // 0x55 'U'
    Glyph([0x1F, 0x20, 0x40, 0x20, 0x1F]), // 0x56 'V'
    Glyph([0x7F, 0x20, 0x18, 0x20, 0x7F]), // 0x57 'W'
    Glyph([0x63, 0x14, 0x08, 0x14, 0x63]), // 0x58 'X'
    Glyph([0x03, 0x04, 0x78, 0x04, 0x03]), // 0x59 'Y'
    Glyph([0x61, 0x51, 0x49, 0x45, 0x43]), // 0x5A 'Z'
    Glyph([0x00, 0x7F, 0x41, 0x41, 0x00]), // 0x5B '['
    Glyph([0x02, 0x04, 0x08, 0x10, 0x20]), // 0x5C '\\'
    Glyph([0x00, 0x41, 0x41, 0x7F, 0x00]), // 0x5D ']'
    Glyph([0x04, 0x02, 0x01, 0x02, 0x04]), // 0x5E '^'
    Glyph([0x40, 0x40, 0x40, 0x40, 0x40]), // 0x5F '_'
    Glyph([0x00, 0x01, 0x02, 0x04, 0x00]), // 0x60 '`'
    Glyph([0x20, 0x54, 0x54, 0x54, 0x78]), // 0x61 'a'
    Glyph([0x7F, 0x48, 0x44, 0x44, 0x38]), // 0x62 'b'
    Glyph([0x30, 0x48, 0x48, 0x48, 0x20]), // 0x63 'c'
    Glyph([0x38, 0x44, 0x44, 0x48, 0x7F]), // 0x64 'd'
    Glyph([0x38, 0x54, 0x54, 0x54, 0x18]), // 0x65 'e'
    Glyph([0x08, 0x7E, 0x09, 0x09, 0x02]), // 0x66 'f'
    Glyph([0x0C, 0x52, 0x52, 0x52, 0x3E]), // 0x67 'g'
    Glyph([0x7F, 0x08, 0x04, 0x04, 0x78]), // 0x68 'h'
    Glyph([0x00, 0x44, 0x7D, 0x40, 0x00]), // 0x69 'i'
    Glyph([0x20, 0x40, 0x40, 0x3D, 0x00]), // 0x6A 'j'
    Glyph([0x7F, 0x10, 0x28, 0x44, 0x00]), // 0x6B 'k'
    Glyph([0x00, 0x41, 0x7F, 0x40, 0x00]), // 0x6C 'l'
    Glyph([0x7C, 0x04, 0x18, 0x04, 0x78]), // 0x6D 'm'
    Glyph([0x7C, 0x08, 0x04, 0x04, 0x78]), // 0x6E 'n'
    Glyph([0x38, 0x44, 0x44, 0x44, 0x38]), // 0x6F 'o'
    Glyph([0xFC, 0x14, 0x14, 0x14, 0x08]), // 0x70 'p'
    Glyph([0x08, 0x14, 0x14, 0x18, 0x7C]), // 0x71 'q'
    Glyph([0x7C, 0x08, 0x04, 0x04, 0x08]), // 0x72 'r'
    Glyph([0x48, 0x54, 0x54, 0x54, 0x20]), // 0x73 's'
    Glyph([0x04, 0x3F, 0x44, 0x40, 0x20]), // 0x74 't'
    Glyph([0x3C, 0x40, 0x40, 0x20, 0x7C]), // 0x75 'u'
    Glyph([0x1C, 0x20, 0x40, 0x20, 0x1C]), // 0x76 'v'
    Glyph([0x3C, 0x40, 0x38, 0x40, 0x3C]), // 0x77 'w'
    Glyph([0x44, 0x28, 0x10, 0x28, 0x44]), // 0x78 'x'
    Glyph([0x0C, 0x50, 0x50, 0x50, 0x3C]), // 0x79 'y'
    Glyph([0x44, 0x64, 0x54, 0x4C, 0x44]), // 0x7A 'z'
    Glyph([0x00, 0x08, 0x36, 0x41, 0x00]), // 0x7B '{'
    Glyph([0x00, 0x00, 0x7F, 0x00, 0x00]), // 0x7C '|'
    Glyph([0x00, 0x41, 0x36, 0x08, 0x00]), // 0x7D '}'
    Glyph([0x00, 0x07, 0x00, 0x07, 0x00]), // 0x7E '~'
    Glyph([0x08, 0x1C, 0x2A, 0x08, 0x08]), // 0x7F DEL
];
