//! Glyph renderer: paints the timer onto the terminal.
//!
//! Drawing is split into two layers so the once-per-second path stays
//! cheap:
//!
//! - `draw_static` paints everything that survives between ticks: the
//!   colon separators, the task line, the mode label, the quote and the
//!   key help. Called once per layout (startup and resize).
//! - `draw_time` repaints only the time fields whose value changed
//!   since the previous call, one glyph row at a time.
//!
//! All output goes through a buffered writer over the locked stdout and
//! is flushed once per call, so a frame reaches the terminal as a
//! single write.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthChar;

use crate::font::{GlyphSet, COLON};
use crate::ui::layout::Layout;

/// Key bindings shown under the clock.
const HELP_LINE: &str = "[space] pause   [q] quit";

/// One line of encouragement, picked per task so it stays stable for
/// the whole session.
const QUOTES: &[&str] = &[
    "the work is the reward",
    "one thing at a time",
    "slow is smooth, smooth is fast",
    "begin, the rest follows",
    "attention is a finite gift",
];

/// Time fields of the HH:MM:SS display, addressed by glyph cell.
///
/// The display is eight cells wide. Fields occupy two cells each and
/// colons sit in the gaps:
///
/// ```text
/// cell:   0   1   2   3   4   5   6   7
///        [ hours ] : [minutes] : [seconds]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    /// Glyph cell of the field's tens digit.
    fn cell_offset(self) -> u16 {
        match self {
            Field::Hours => 0,
            Field::Minutes => 3,
            Field::Seconds => 6,
        }
    }
}

/// Glyph cells occupied by the two colon separators.
const COLON_CELLS: [u16; 2] = [2, 5];

/// Paints glyphs and chrome for one layout, remembering the last drawn
/// field values so unchanged fields are skipped.
pub struct GlyphRenderer {
    last_fields: Option<(u8, u8, u8)>,
    blink: bool,
}

impl GlyphRenderer {
    pub fn new(blink: bool) -> Self {
        Self {
            last_fields: None,
            blink,
        }
    }

    /// Draws everything except the time fields and forgets the previous
    /// field values, so the next `draw_time` repaints all three.
    pub fn draw_static(
        &mut self,
        layout: Layout,
        font: &GlyphSet,
        task: &str,
        label: &str,
        quote: &str,
    ) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::with_capacity(8192, stdout.lock());

        queue!(out, Clear(ClearType::All))?;

        for cell in COLON_CELLS {
            if self.blink {
                queue!(out, SetAttribute(Attribute::SlowBlink))?;
            }
            Self::glyph_into(&mut out, layout, font, cell, COLON)?;
            queue!(out, SetAttribute(Attribute::Reset))?;
        }

        let below = layout.origin_row + font.height;

        queue!(out, SetAttribute(Attribute::Bold))?;
        Self::line_into(&mut out, layout, below + 1, task)?;
        queue!(out, SetAttribute(Attribute::Reset))?;

        queue!(out, SetAttribute(Attribute::Dim))?;
        Self::line_into(&mut out, layout, below + 2, label)?;
        Self::line_into(&mut out, layout, below + 5, HELP_LINE)?;
        queue!(out, SetAttribute(Attribute::Reset))?;

        let quote_attr = if self.blink {
            Attribute::SlowBlink
        } else {
            Attribute::Dim
        };
        queue!(out, SetAttribute(quote_attr))?;
        Self::line_into(&mut out, layout, below + 4, quote)?;
        queue!(out, SetAttribute(Attribute::Reset))?;

        out.flush()?;
        self.last_fields = None;
        Ok(())
    }

    /// Repaints the time fields that differ from the last call. Right
    /// after `draw_static` all three are repainted.
    pub fn draw_time(
        &mut self,
        layout: Layout,
        font: &GlyphSet,
        fields: (u8, u8, u8),
    ) -> io::Result<()> {
        let prev = self.last_fields;

        if changed(prev, fields, Field::Hours) {
            self.draw_field(layout, font, Field::Hours, fields.0)?;
        }
        if changed(prev, fields, Field::Minutes) {
            self.draw_field(layout, font, Field::Minutes, fields.1)?;
        }
        if changed(prev, fields, Field::Seconds) {
            self.draw_field(layout, font, Field::Seconds, fields.2)?;
        }

        self.last_fields = Some(fields);
        Ok(())
    }

    /// Repaints one field unconditionally and remembers its value.
    pub fn draw_field(
        &mut self,
        layout: Layout,
        font: &GlyphSet,
        field: Field,
        value: u8,
    ) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::with_capacity(8192, stdout.lock());
        Self::field_into(&mut out, layout, font, field, value)?;
        out.flush()?;

        if let Some(fields) = self.last_fields.as_mut() {
            match field {
                Field::Hours => fields.0 = value,
                Field::Minutes => fields.1 = value,
                Field::Seconds => fields.2 = value,
            }
        }
        Ok(())
    }

    /// Rewrites the mode label line, clearing its previous content
    /// first so a shorter label leaves no tail behind.
    pub fn draw_mode_label(
        &mut self,
        layout: Layout,
        font: &GlyphSet,
        label: &str,
    ) -> io::Result<()> {
        let row = layout.origin_row + font.height + 2;

        let stdout = io::stdout();
        let mut out = io::BufWriter::with_capacity(8192, stdout.lock());

        queue!(out, MoveTo(0, row), Clear(ClearType::CurrentLine))?;
        queue!(out, SetAttribute(Attribute::Dim))?;
        Self::line_into(&mut out, layout, row, label)?;
        queue!(out, SetAttribute(Attribute::Reset))?;

        out.flush()
    }

    /// Writes a two-digit field as tens and units glyphs.
    fn field_into<W: Write>(
        out: &mut W,
        layout: Layout,
        font: &GlyphSet,
        field: Field,
        value: u8,
    ) -> io::Result<()> {
        let value = value.min(99);
        let cell = field.cell_offset();
        Self::glyph_into(out, layout, font, cell, (value / 10) as usize)?;
        Self::glyph_into(out, layout, font, cell + 1, (value % 10) as usize)
    }

    /// Writes one glyph at the given display cell, row by row.
    fn glyph_into<W: Write>(
        out: &mut W,
        layout: Layout,
        font: &GlyphSet,
        cell: u16,
        index: usize,
    ) -> io::Result<()> {
        let col = layout.origin_col + cell * font.width;
        for (i, row) in font.glyph(index).iter().enumerate() {
            queue!(out, MoveTo(col, layout.origin_row + i as u16))?;
            write!(out, "{}", row)?;
        }
        Ok(())
    }

    /// Writes a line of text centered on the screen.
    fn line_into<W: Write>(out: &mut W, layout: Layout, row: u16, text: &str) -> io::Result<()> {
        let (col, text) = centered(text, layout.cols);
        queue!(out, MoveTo(col, row))?;
        write!(out, "{}", text)
    }
}

/// True when the field's value differs from its previously drawn one.
/// With no previous frame every field counts as changed.
fn changed(prev: Option<(u8, u8, u8)>, next: (u8, u8, u8), field: Field) -> bool {
    match prev {
        None => true,
        Some(prev) => match field {
            Field::Hours => prev.0 != next.0,
            Field::Minutes => prev.1 != next.1,
            Field::Seconds => prev.2 != next.2,
        },
    }
}

/// Centers `text` within `cols` columns, truncating on display width
/// so wide characters never push past the right edge.
fn centered(text: &str, cols: u16) -> (u16, String) {
    let max = cols.saturating_sub(2) as usize;
    let mut width = 0usize;
    let mut kept = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        kept.push(ch);
    }
    let col = (cols as usize).saturating_sub(width) / 2;
    (col as u16, kept)
}

/// Picks a quote for the session. The choice depends only on the task
/// name, so the same task always gets the same line.
pub fn pick_quote(task: &str) -> &'static str {
    let sum: usize = task.bytes().map(|b| b as usize).sum();
    QUOTES[sum % QUOTES.len()]
}

/// Renders a font sample for `--preview`: the digit strip followed by a
/// clock face, as plain lines suitable for a scrolling terminal.
pub fn preview_lines(font: &GlyphSet) -> Vec<String> {
    let height = font.height as usize;
    let mut lines = Vec::with_capacity(height * 2 + 1);

    for row in 0..height {
        let mut line = String::new();
        for digit in 0..10 {
            line.push_str(font.glyph(digit)[row]);
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push(String::new());

    let sample = [1, 2, COLON, 3, 4, COLON, 5, 6];
    for row in 0..height {
        let mut line = String::new();
        for index in sample {
            line.push_str(font.glyph(index)[row]);
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}
