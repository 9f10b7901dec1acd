//! Placement of the glyph block on the screen.
//!
//! Pure math: given the window size and a font's metrics, find the
//! centered origin of the "HH:MM:SS" block and check that the window
//! can actually hold it plus the reserved text lines. Re-run on every
//! resize before anything is drawn.

use crate::error::{Result, TimerError};
use crate::font::GlyphSet;

/// Cells across the display: two digits per field, three fields, two
/// colons.
pub const DISPLAY_CELLS: u16 = 8;

/// Rows that must stay free for the task, mode-label, quote, and help
/// lines below the block.
pub const RESERVED_ROWS: u16 = 10;

/// Columns kept free at the edges.
pub const RESERVED_COLS: u16 = 2;

/// A validated placement for one window size and font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: u16,
    pub cols: u16,
    pub origin_row: u16,
    pub origin_col: u16,
}

impl Layout {
    /// Center the glyph block, or report the space it would need.
    pub fn compute(
        rows: u16,
        cols: u16,
        font: &GlyphSet,
        displayed_chars: u16,
        reserved_rows: u16,
        reserved_cols: u16,
    ) -> Result<Layout> {
        let block_width = font.width * displayed_chars;
        let min_rows = font.height + reserved_rows + 1;
        let min_cols = block_width + reserved_cols + 1;

        if rows < min_rows || cols < min_cols {
            return Err(TimerError::InsufficientSpace {
                min_rows,
                min_cols,
                rows,
                cols,
            });
        }

        Ok(Layout {
            rows,
            cols,
            origin_row: (rows - font.height) / 2,
            origin_col: (cols - block_width) / 2,
        })
    }
}
