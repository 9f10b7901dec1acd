//! Shipped glyph tables.
//!
//! Each glyph is exactly `height` rows of exactly `width` cells; slot
//! 10 is the colon. The parent module's tests enforce the grid.

use super::GlyphSet;

/// Compact seven-segment style. The default.
pub(super) static SHORT: GlyphSet = GlyphSet {
    name: "short",
    width: 3,
    height: 3,
    glyphs: [
        // 0
        &[" _ ", "| |", "|_|"],
        // 1
        &["   ", "  |", "  |"],
        // 2
        &[" _ ", " _|", "|_ "],
        // 3
        &[" _ ", " _|", " _|"],
        // 4
        &["   ", "|_|", "  |"],
        // 5
        &[" _ ", "|_ ", " _|"],
        // 6
        &[" _ ", "|_ ", "|_|"],
        // 7
        &[" _ ", "  |", "  |"],
        // 8
        &[" _ ", "|_|", "|_|"],
        // 9
        &[" _ ", "|_|", " _|"],
        // colon
        &["   ", " . ", " . "],
    ],
};

/// Rounded, parenthesis-heavy style.
pub(super) static BULBHEAD: GlyphSet = GlyphSet {
    name: "bulbhead",
    width: 6,
    height: 4,
    glyphs: [
        // 0
        &["  __  ", " /  \\ ", "(    )", " \\__/ "],
        // 1
        &[" __   ", "(  )  ", " )(   ", "(__)  "],
        // 2
        &[" ___  ", "(__ \\ ", " / _/ ", "(____)"],
        // 3
        &[" ___  ", "(__ ) ", " (_ \\ ", "(___/ "],
        // 4
        &[" __ __", "( )( )", "(_  _)", "  (_) "],
        // 5
        &[" ____ ", "( ___)", " \\__ \\", "(___/ "],
        // 6
        &["  __  ", " / _) ", "( _ \\ ", " \\__/ "],
        // 7
        &[" ____ ", "(__  )", "  / / ", " (_/  "],
        // 8
        &[" ___  ", "( _ ) ", "/ _ \\ ", "\\___/ "],
        // 9
        &[" ___  ", "( _ \\ ", " \\_  )", "  (_/ "],
        // colon
        &["      ", "  ()  ", "      ", "  ()  "],
    ],
};

/// The characters themselves, one cell each.
pub(super) static RAW: GlyphSet = GlyphSet {
    name: "raw",
    width: 1,
    height: 1,
    glyphs: [
        &["0"],
        &["1"],
        &["2"],
        &["3"],
        &["4"],
        &["5"],
        &["6"],
        &["7"],
        &["8"],
        &["9"],
        &[":"],
    ],
};
