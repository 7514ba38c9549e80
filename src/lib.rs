//! # alphastrip
//!
//! Flatten transparent PNG files onto a white background, in place.
//!
//! Every file in a directory whose name matches a glob pattern is decoded
//! and classified. Images with an alpha channel (or a palette transparency
//! key) are composited onto white and rewritten as opaque RGB; opaque
//! images are left byte-for-byte untouched. A file that fails to decode or
//! write is reported and the run moves on.
//!
//! ## Example
//!
//! ```no_run
//! use alphastrip::{AlphaStripper, Config};
//!
//! # fn main() -> alphastrip::Result<()> {
//! let stripper = AlphaStripper::new(Config::default());
//! let report = stripper.process("Assets.xcassets/AppIcon.appiconset", "AppIcon-*.png")?;
//!
//! println!("{} fixed, {} skipped, {} failed", report.fixed(), report.skipped(), report.errors());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod report;
pub mod strip;

pub use error::{Error, ErrorKind, Result};
pub use report::{ConsoleProgress, FileReport, Outcome, ProcessingReport, Progress};
pub use strip::{AlphaStripper, Config, PalettePolicy, DEFAULT_PATTERN};
