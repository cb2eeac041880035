//! Box and glue layout of paragraphs.
//!
//! A paragraph is a list of [LayoutNode]s: boxes with fixed geometry, [Glue]
//! that can stretch or shrink, and [Penalty] items marking where lines may (or
//! must) break. A [ParBox] takes such a list and lays it out into lines, either
//! by simple first-fit wrapping or with the optimal breaks found by
//! [breaks::find_lines].
//!
//! Layout happens in two passes: [LayoutBox::calc_layout] measures a box and
//! everything inside it, then [LayoutBox::place] and [LayoutBox::render] position
//! and draw it through a [Renderer](crate::Renderer).
//!
//! # Example
//!
//! ```
//! use gridtext_layout::layout::{text_to_nodes, BreakConfig, BreakMode, LayoutBox, ParBox};
//! use gridtext_layout::{PdfRenderer, Pt, Renderer, Style};
//!
//! let mut renderer = PdfRenderer::new();
//! let style = Style::new().with("font-size", 10.0);
//! let nodes = text_to_nodes("A paragraph broken into justified lines", &style, &renderer);
//!
//! let config = BreakConfig {
//!     tolerance: 3.0,
//!     ..Default::default()
//! };
//! let mut par = ParBox::new(nodes, Pt(12.0), Pt(0.0)).with_break_mode(BreakMode::Optimal(config));
//! par.calc_layout(Pt(120.0), Pt(0.0));
//! par.place(Pt(0.0), Pt(0.0));
//! par.render(&mut renderer, Pt(72.0), Pt(720.0));
//!
//! assert_eq!(par.lines(), 2);
//! assert_eq!(renderer.collect_grobs().len(), 6);
//! ```

pub mod breaks;
mod glue;
mod margins;
mod node;
mod par_box;
mod penalty;
mod rect_box;
mod text_box;

pub use breaks::{BreakConfig, FitnessClass, LineBreak};
pub use glue::*;
pub use margins::*;
pub use node::*;
pub use par_box::*;
pub use penalty::*;
pub use rect_box::*;
pub use text_box::*;
