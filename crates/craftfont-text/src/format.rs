//! Formatting-code parser.
//!
//! Splits a string annotated with `§` codes into styled runs:
//!
//! | code | effect |
//! |------|--------|
//! | `0`-`9`, `a`-`f` | reset to the baseline, then set the color |
//! | `k` | reserved (obfuscation is not rendered) |
//! | `l` | bold |
//! | `m` | strikethrough |
//! | `n` | underline |
//! | `o` | italic |
//! | `r` | reset to the baseline |
//!
//! Anything else after a marker is kept as literal text, marker included. A marker at the
//! very end of the input is dropped.
//!
//! ```
//! use craftfont_text::format::parse_formatted;
//!
//! let runs = parse_formatted("§1Red§2stone", false, 1);
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].text, "Red");
//! assert_eq!(runs[1].offset, 18);
//! ```

use std::str::Chars;

use crate::glyph::string_width;
use crate::style::{ColorCode, StyleState};

/// The formatting marker, U+00A7.
pub const FORMAT_MARKER: char = '\u{00a7}';

/// A maximal substring drawn under one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub style: StyleState,
    /// Horizontal offset of the run from the start of the formatted string, in pixels.
    pub offset: u32,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: StyleState) -> Self {
        Self {
            text: text.into(),
            style,
            offset: 0,
        }
    }

    /// Pixel advance of this run's glyphs.
    pub fn width(&self, scale: u32) -> u32 {
        string_width(&self.text, self.style.bold, scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Normal,
    ExpectCode,
}

/// Single-pass parser yielding [`TextRun`]s in order.
pub struct FormattingParser<'a> {
    chars: Chars<'a>,
    state: ParseState,
    pending: String,
    baseline: StyleState,
    style: StyleState,
    cursor: u32,
    scale: u32,
}

impl<'a> FormattingParser<'a> {
    /// Parse `text`. With `shadow` set, the baseline style resolves from the dim palette.
    pub fn new(text: &'a str, shadow: bool, scale: u32) -> Self {
        let baseline = StyleState::baseline(shadow);
        Self {
            chars: text.chars(),
            state: ParseState::Normal,
            pending: String::new(),
            baseline,
            style: baseline,
            cursor: 0,
            scale,
        }
    }

    /// Close the pending text as a run and advance the cursor past it.
    fn take_run(&mut self) -> Option<TextRun> {
        if self.pending.is_empty() {
            return None;
        }
        let run = TextRun {
            text: std::mem::take(&mut self.pending),
            style: self.style,
            offset: self.cursor,
        };
        self.cursor = self.cursor.saturating_add(run.width(self.scale));
        Some(run)
    }

    fn apply_code(&mut self, code: char) {
        if let Some(color) = ColorCode::from_char(code) {
            self.style = self.baseline.with_color(color);
            return;
        }

        self.style = match code {
            'k' => self.style,
            'l' => self.style.bold(),
            'm' => self.style.strikethrough(),
            'n' => self.style.underline(),
            'o' => self.style.italic(),
            'r' => self.baseline,
            other => {
                tracing::debug!("Unknown formatting code {:?}, keeping it as text", other);
                self.pending.push(FORMAT_MARKER);
                self.pending.push(other);
                self.style
            }
        };
    }
}

impl Iterator for FormattingParser<'_> {
    type Item = TextRun;

    fn next(&mut self) -> Option<TextRun> {
        while let Some(c) = self.chars.next() {
            match self.state {
                ParseState::Normal if c == FORMAT_MARKER => {
                    self.state = ParseState::ExpectCode;
                    if let Some(run) = self.take_run() {
                        return Some(run);
                    }
                }
                ParseState::Normal => self.pending.push(c),
                ParseState::ExpectCode => {
                    self.apply_code(c);
                    self.state = ParseState::Normal;
                }
            }
        }

        // A dangling marker leaves nothing in `pending`, so it simply disappears.
        self.take_run()
    }
}

/// Collect all runs of `text`.
pub fn parse_formatted(text: &str, shadow: bool, scale: u32) -> Vec<TextRun> {
    FormattingParser::new(text, shadow, scale).collect()
}

/// Total advance of a formatted string; markers and codes take no space.
pub fn formatted_width(text: &str, scale: u32) -> u32 {
    FormattingParser::new(text, false, scale)
        .map(|run| run.width(scale))
        .fold(0, u32::saturating_add)
}
