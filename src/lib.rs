//! A box and glue layout engine. Paragraphs are built from boxes, elastic glue,
//! and penalties, broken into lines either greedily or with the Knuth-Plass
//! algorithm, and rendered through a pluggable [Renderer].

mod colour;
pub use colour::*;

mod error;
pub use error::*;

/// Layout nodes, boxes, and paragraph line breaking
pub mod layout;

mod pdf;
pub use pdf::*;

pub(crate) mod refs;

mod renderer;
pub use renderer::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
