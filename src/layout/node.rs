use super::{Glue, Penalty};
use crate::renderer::Renderer;
use crate::units::Pt;
use derive_more::From;
use std::fmt;

/// Which kind of paragraph item a [LayoutNode] is
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    Box,
    Glue,
    Penalty,
}

/// Anything with geometry that can be laid out, placed, and rendered.
///
/// Layout is a two phase protocol. First [calc_layout](LayoutBox::calc_layout)
/// measures the box (children before parents), then [place](LayoutBox::place)
/// records where the parent put it and [render](LayoutBox::render) draws it
/// (parents before children). Calling `place` or `render` before `calc_layout`
/// leaves the geometry undefined.
pub trait LayoutBox {
    /// Width of the box
    fn width(&self) -> Pt;

    /// Height above the baseline
    fn ascent(&self) -> Pt;

    /// Depth below the baseline
    fn descent(&self) -> Pt;

    fn height(&self) -> Pt {
        self.ascent() + self.descent()
    }

    /// Vertical shift of the baseline
    fn voff(&self) -> Pt;

    /// Compute the box's own size. Boxes that wrap use `width_hint` as the
    /// available width; fixed-size boxes ignore both hints. Calling this again
    /// with the same hints reproduces the same geometry.
    fn calc_layout(&mut self, width_hint: Pt, height_hint: Pt);

    /// Record the box's offset in the coordinate system of its parent
    fn place(&mut self, x: Pt, y: Pt);

    /// Draw the box (and its children) relative to the reference point of the
    /// enclosing box
    fn render(&self, renderer: &mut dyn Renderer, xref: Pt, yref: Pt);
}

/// One item of a paragraph stream
#[derive(From)]
pub enum LayoutNode {
    Box(Box<dyn LayoutBox>),
    Glue(Glue),
    Penalty(Penalty),
}

/// The content of a paragraph, in reading order
pub type NodeList = Vec<LayoutNode>;

impl LayoutNode {
    /// Wrap any [LayoutBox] as a node
    pub fn boxed<B: LayoutBox + 'static>(b: B) -> LayoutNode {
        LayoutNode::Box(Box::new(b))
    }

    pub fn glue(width: Pt, stretch: Pt, shrink: Pt) -> LayoutNode {
        LayoutNode::Glue(Glue::new(width, stretch, shrink))
    }

    pub fn penalty(penalty: f64, width: Pt, flagged: bool) -> LayoutNode {
        LayoutNode::Penalty(Penalty::new(penalty, width, flagged))
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            LayoutNode::Box(_) => NodeType::Box,
            LayoutNode::Glue(_) => NodeType::Glue,
            LayoutNode::Penalty(_) => NodeType::Penalty,
        }
    }

    /// Box width, nominal glue width, or the width a penalty adds when taken
    pub fn width(&self) -> Pt {
        match self {
            LayoutNode::Box(b) => b.width(),
            LayoutNode::Glue(g) => g.width(),
            LayoutNode::Penalty(p) => p.width(),
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(self, LayoutNode::Box(_))
    }
}

impl fmt::Debug for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutNode::Box(b) => f
                .debug_struct("Box")
                .field("width", &b.width())
                .field("ascent", &b.ascent())
                .field("descent", &b.descent())
                .finish(),
            LayoutNode::Glue(g) => g.fmt(f),
            LayoutNode::Penalty(p) => p.fmt(f),
        }
    }
}
