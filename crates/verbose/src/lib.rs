//! Conditional console diagnostics: formatted, color-coded messages that are
//! emitted only when verbose mode is turned on.
//!
//! Each [`Category`] fixes the colored header written before the message:
//!
//! - [`Category::Info`]: `>>info   :` in cyan
//! - [`Category::Warning`]: `>>warning:` in orange
//! - [`Category::Alert`]: `>>alert  :` in red
//! - [`Category::Track`]: `>>track  :` in green, followed by a timestamp
//! - [`Category::Debug`]: `>>debug  :` in yellow
//!
//! An [`Emitter`] holds the two verbosity flags. Construct one near process
//! startup, share it by reference, and toggle the flags at any time. Every
//! message is gated: nothing is written unless verbose mode is on (debug
//! messages also surface when only debug mode is on).
//!
//! # Usage
//!
//! ```
//! use verbose::{Category, Emitter, emitf, emitln};
//!
//! let em = Emitter::new(true, false);
//! emitln!(em, Category::Info, "everything is ok");
//! emitf!(em, Category::Warning, "value should be greater than {}\n", 10);
//! ```

pub mod category;
pub mod emitter;
mod macros;

pub use category::Category;
pub use emitter::{Emitter, assert_fmt};
