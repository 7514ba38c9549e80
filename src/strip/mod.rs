//! Alpha stripping: compositing transparent images onto white.

mod composite;
mod stripper;

pub use composite::{flatten, white_canvas, Mask, BACKGROUND};
pub use stripper::{AlphaStripper, Config, FileAction, PalettePolicy, DEFAULT_PATTERN};
