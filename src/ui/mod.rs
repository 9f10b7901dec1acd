//! User interface: screen geometry and glyph drawing.
//!
//! This module provides all UI-related functionality:
//!
//! - **layout**: Fits the HH:MM:SS block into the terminal and centers it
//! - **renderer**: Paints glyphs and the static chrome around them
//!
//! Layouts are recomputed from scratch on every resize; the renderer
//! holds no geometry of its own and takes the current `Layout` on each
//! call.

pub mod layout;
pub mod renderer;

pub use layout::Layout;
pub use renderer::{Field, GlyphRenderer};
