//! Glyph metrics for the legacy 256-slot code page.
//!
//! The atlas is a 16x16 grid of 8x8 cells. A character's position in [`GLYPH_CHARS`] is its
//! atlas index, and the hex digit at the same position in [`GLYPH_WIDTHS`] is its advance in
//! unscaled pixels. NUL slots are unused and never match.

use std::sync::LazyLock;

use craftfont_core::alloc::HashMap;

/// Side length of one atlas cell in unscaled pixels.
pub const CELL_SIZE: u32 = 8;

/// Height of a rendered line in unscaled pixels: one cell plus a row for the underline.
pub const LINE_HEIGHT: u32 = 9;

/// Cells per atlas row.
pub const GLYPHS_PER_ROW: usize = 16;

/// Number of slots in the code page.
pub const GLYPH_COUNT: usize = 256;

/// Largest accepted scale factor: a full row of scaled atlas cells must fit in `i32` pixels.
pub const MAX_SCALE: u32 = i32::MAX as u32 / (GLYPHS_PER_ROW as u32 * CELL_SIZE);

/// Fixed advance of the space and non-breaking space characters, unscaled.
pub const SPACE_WIDTH: u32 = 4;

const NO_BREAK_SPACE: char = '\u{00a0}';

/// Characters in atlas order, one row of 16 per line.
pub const GLYPH_CHARS: &str = concat!(
    "\u{00c0}\u{00c1}\u{00c2}\u{00c8}\u{00ca}\u{00cb}\u{00cd}\u{00d3}\u{00d4}\u{00d5}\u{00da}\u{00df}\u{00e3}\u{00f5}\u{011f}\u{0130}",
    "\u{0131}\u{0152}\u{0153}\u{015e}\u{015f}\u{0174}\u{0175}\u{017e}\u{0207}\u{0000}\u{0000}\u{0000}\u{0000}\u{0000}\u{0000}\u{0000}",
    " !\"#$%&'()*+,-./",
    "0123456789:;<=>?",
    "@ABCDEFGHIJKLMNO",
    "PQRSTUVWXYZ[\\]^_",
    "`abcdefghijklmno",
    "pqrstuvwxyz{|}~\u{0000}",
    "\u{00c7}\u{00fc}\u{00e9}\u{00e2}\u{00e4}\u{00e0}\u{00e5}\u{00e7}\u{00ea}\u{00eb}\u{00e8}\u{00ef}\u{00ee}\u{00ec}\u{00c4}\u{00c5}",
    "\u{00c9}\u{00e6}\u{00c6}\u{00f4}\u{00f6}\u{00f2}\u{00fb}\u{00f9}\u{00ff}\u{00d6}\u{00dc}\u{00f8}\u{00a3}\u{00d8}\u{00d7}\u{0192}",
    "\u{00e1}\u{00ed}\u{00f3}\u{00fa}\u{00f1}\u{00d1}\u{00aa}\u{00ba}\u{00bf}\u{00ae}\u{00ac}\u{00bd}\u{00bc}\u{00a1}\u{00ab}\u{00bb}",
    "\u{2591}\u{2592}\u{2593}\u{2502}\u{2524}\u{2561}\u{2562}\u{2556}\u{2555}\u{2563}\u{2551}\u{2557}\u{255d}\u{255c}\u{255b}\u{2510}",
    "\u{2514}\u{2534}\u{252c}\u{251c}\u{2500}\u{253c}\u{255e}\u{255f}\u{255a}\u{2554}\u{2569}\u{2566}\u{2560}\u{2550}\u{256c}\u{2567}",
    "\u{2568}\u{2564}\u{2565}\u{2559}\u{2558}\u{2552}\u{2553}\u{256b}\u{256a}\u{2518}\u{250c}\u{2588}\u{2584}\u{258c}\u{2590}\u{2580}",
    "\u{03b1}\u{03b2}\u{0393}\u{03c0}\u{03a3}\u{03c3}\u{03bc}\u{03c4}\u{03a6}\u{0398}\u{03a9}\u{03b4}\u{221e}\u{2205}\u{2208}\u{2229}",
    "\u{2261}\u{00b1}\u{2265}\u{2264}\u{2320}\u{2321}\u{00f7}\u{2248}\u{00b0}\u{2219}\u{00b7}\u{221a}\u{207f}\u{00b2}\u{25a0}\u{0000}",
);

/// Advance widths in hex digits, same order as [`GLYPH_CHARS`].
pub const GLYPH_WIDTHS: &str = concat!(
    "6666664666666664",
    "4676666661111111",
    "4256666355562626",
    "6666666666225656",
    "7666666664666666",
    "6666666666646466",
    "3666665662653666",
    "6666466666652576",
    "6666666666646366",
    "6666666666666646",
    "6366666667666266",
    "8996668868888866",
    "9999999999999999",
    "9999999996999599",
    "8778788878879967",
    "7777967876697671",
);

/// Read-only lookup built once from the two tables.
struct GlyphTable {
    indices: HashMap<char, usize>,
    widths: [u8; GLYPH_COUNT],
}

impl GlyphTable {
    fn build() -> Self {
        let mut indices = HashMap::with_capacity(GLYPH_COUNT);
        for (index, c) in GLYPH_CHARS.chars().enumerate() {
            if c != '\0' {
                indices.entry(c).or_insert(index);
            }
        }

        let mut widths = [0u8; GLYPH_COUNT];
        for (slot, digit) in widths.iter_mut().zip(GLYPH_WIDTHS.chars()) {
            *slot = digit.to_digit(16).unwrap_or(0) as u8;
        }

        Self { indices, widths }
    }
}

static TABLE: LazyLock<GlyphTable> = LazyLock::new(GlyphTable::build);

/// Atlas index of `c`, or `None` when the code page has no glyph for it.
pub fn glyph_index(c: char) -> Option<usize> {
    TABLE.indices.get(&c).copied()
}

/// Column and row of an atlas index.
pub fn glyph_cell(index: usize) -> (usize, usize) {
    (index % GLYPHS_PER_ROW, index / GLYPHS_PER_ROW)
}

/// Advance of `c` in pixels at `scale`. Characters outside the code page are zero-width.
pub fn glyph_width(c: char, scale: u32) -> u32 {
    if c == ' ' || c == NO_BREAK_SPACE {
        return SPACE_WIDTH * scale;
    }
    glyph_index(c)
        .map(|index| TABLE.widths[index] as u32 * scale)
        .unwrap_or(0)
}

/// Advance of an unformatted string. Bold glyphs are double-struck one unit apart, so each
/// takes one extra scaled unit.
pub fn string_width(text: &str, bold: bool, scale: u32) -> u32 {
    let bold_extra = if bold { scale } else { 0 };
    text.chars()
        .map(|c| glyph_width(c, scale) + bold_extra)
        .fold(0, u32::saturating_add)
}
