//! Glyph fonts for the time display.
//!
//! A font is a table of 11 symbols (the digits 0-9 plus the colon),
//! each a fixed grid of `height` rows by `width` printable cells.
//! Fonts are static data; the registry resolves a name to its
//! [`GlyphSet`] or reports it unknown together with the names that do
//! exist. There is no silent fallback.

mod data;

use crate::error::{Result, TimerError};

/// Symbol slot of the colon glyph.
pub const COLON: usize = 10;

/// Symbols per font: digits 0-9 plus the colon.
pub const SET_SIZE: usize = 11;

/// Name used when neither the command line nor the config picks one.
pub const DEFAULT_FONT: &str = "short";

/// One font: 11 glyphs on a fixed `width` x `height` cell grid.
#[derive(Debug)]
pub struct GlyphSet {
    pub name: &'static str,
    pub width: u16,
    pub height: u16,
    glyphs: [&'static [&'static str]; SET_SIZE],
}

impl GlyphSet {
    /// Rows of the glyph for a digit (0-9) or [`COLON`].
    pub fn glyph(&self, symbol: usize) -> &'static [&'static str] {
        self.glyphs[symbol]
    }
}

static REGISTRY: &[&GlyphSet] = &[&data::SHORT, &data::BULBHEAD, &data::RAW];

/// Resolve a font by name (case-insensitive).
pub fn lookup(name: &str) -> Result<&'static GlyphSet> {
    let needle = name.to_ascii_lowercase();
    REGISTRY
        .iter()
        .find(|f| f.name == needle)
        .copied()
        .ok_or_else(|| TimerError::UnknownFont {
            name: name.to_string(),
            available: names(),
        })
}

/// Names of all shipped fonts, registry order.
pub fn names() -> Vec<&'static str> {
    REGISTRY.iter().map(|f| f.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_glyph_fills_its_grid() {
        for font in REGISTRY {
            for symbol in 0..SET_SIZE {
                let rows = font.glyph(symbol);
                assert_eq!(
                    rows.len(),
                    font.height as usize,
                    "font {} symbol {} row count",
                    font.name,
                    symbol
                );
                for (i, row) in rows.iter().enumerate() {
                    assert_eq!(
                        row.chars().count(),
                        font.width as usize,
                        "font {} symbol {} row {}",
                        font.name,
                        symbol,
                        i
                    );
                }
            }
        }
    }

    #[test]
    fn test_lookup_known_fonts() {
        for name in names() {
            let font = lookup(name).unwrap();
            assert_eq!(font.name, name);
        }
        // case does not matter
        assert_eq!(lookup("SHORT").unwrap().name, "short");
    }

    #[test]
    fn test_lookup_default_font() {
        assert!(lookup(DEFAULT_FONT).is_ok());
    }

    #[test]
    fn test_unknown_font_is_an_error_not_a_fallback() {
        let err = lookup("fraktur").unwrap_err();
        match err {
            TimerError::UnknownFont { name, available } => {
                assert_eq!(name, "fraktur");
                assert_eq!(available, names());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
