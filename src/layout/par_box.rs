use super::breaks::{self, content_end, BreakConfig};
use super::{LayoutBox, LayoutNode, NodeList};
use crate::error::LayoutError;
use crate::renderer::Renderer;
use crate::units::Pt;
use log::{debug, warn};

/// How a [ParBox] decides where its lines end
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BreakMode {
    /// First-fit wrapping: a box that would overflow the line starts a new one
    #[default]
    Greedy,
    /// Globally optimal breaks, with glue stretched or shrunk to justify every
    /// line but the last. Falls back to [BreakMode::Greedy] if no set of breaks
    /// satisfies the tolerance.
    ///
    /// A line that breaks at a [Penalty](super::Penalty) with a width is
    /// justified to leave that width empty after its last box, for the caller
    /// to fill.
    Optimal(BreakConfig),
}

/// Lays out a list of nodes horizontally, breaking lines where they would
/// exceed the available width.
///
/// The reference point of a paragraph is the left end of the baseline of its
/// *last* line; all earlier lines are folded into the ascent.
///
/// ```
/// use gridtext_layout::layout::{LayoutBox, LayoutNode, ParBox, RectBox};
/// use gridtext_layout::Pt;
///
/// let nodes = [30.0, 40.0, 20.0, 50.0]
///     .into_iter()
///     .map(|w| LayoutNode::boxed(RectBox::new(Pt(w), Pt(10.0))))
///     .collect();
/// let mut par = ParBox::new(nodes, Pt(12.0), Pt(5.0));
/// par.calc_layout(Pt(80.0), Pt(0.0));
///
/// assert_eq!(par.lines(), 2);
/// assert_eq!(par.ascent(), Pt(10.0 + 12.0));
/// ```
pub struct ParBox {
    nodes: NodeList,
    vspacing: Pt,
    hspacing: Pt,
    mode: BreakMode,
    width: Pt,
    ascent: Pt,
    descent: Pt,
    voff: Pt,
    // upward shift that puts the last line on the baseline
    multiline_shift: Pt,
    lines: usize,
    x: Pt,
    y: Pt,
    laid_out: bool,
}

impl ParBox {
    /// `vspacing` is the distance between consecutive baselines, `hspacing` the
    /// fixed space greedy wrapping puts after every box
    pub fn new(nodes: NodeList, vspacing: Pt, hspacing: Pt) -> ParBox {
        ParBox {
            nodes,
            vspacing,
            hspacing,
            mode: BreakMode::default(),
            width: Pt::ZERO,
            ascent: Pt::ZERO,
            descent: Pt::ZERO,
            voff: Pt::ZERO,
            multiline_shift: Pt::ZERO,
            lines: 0,
            x: Pt::ZERO,
            y: Pt::ZERO,
            laid_out: false,
        }
    }

    pub fn with_break_mode(mut self, mode: BreakMode) -> ParBox {
        self.mode = mode;
        self
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    /// Number of lines produced by the last [calc_layout](LayoutBox::calc_layout)
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Optimal break positions for this paragraph; see [breaks::compute_breaks].
    /// Independent of, and not used by, greedy layout.
    pub fn compute_breaks(
        &self,
        line_lengths: &[Pt],
        tolerance: f64,
        fitness_demerit: f64,
        flagged_demerit: f64,
    ) -> Result<Vec<usize>, LayoutError> {
        let config = BreakConfig {
            tolerance,
            fitness_demerit,
            flagged_demerit,
            ..Default::default()
        };
        self.compute_breaks_with(line_lengths, &config)
    }

    pub fn compute_breaks_with(
        &self,
        line_lengths: &[Pt],
        config: &BreakConfig,
    ) -> Result<Vec<usize>, LayoutError> {
        breaks::compute_breaks(&self.nodes, line_lengths, config)
    }

    fn layout_greedy(&mut self, width_hint: Pt, height_hint: Pt) {
        let mut x_off = Pt::ZERO;
        let mut y_off = Pt::ZERO;
        let mut lines = 0;
        let mut ascent = Pt::ZERO;
        let mut descent = Pt::ZERO;
        let mut line_has_box = false;

        for node in self.nodes.iter_mut() {
            match node {
                LayoutNode::Box(b) => {
                    b.calc_layout(width_hint, height_hint);
                    // never wrap before the first box of a line
                    if line_has_box && x_off + b.width() > width_hint {
                        x_off = Pt::ZERO;
                        y_off -= self.vspacing;
                        lines += 1;
                        descent = Pt::ZERO;
                    }
                    b.place(x_off, y_off);
                    x_off += b.width() + self.hspacing;
                    line_has_box = true;

                    descent = descent.max(b.descent());
                    if lines == 0 {
                        ascent = ascent.max(b.ascent());
                    }
                }
                LayoutNode::Glue(g) => x_off += g.width(),
                LayoutNode::Penalty(_) => {}
            }
        }

        let line_count = if line_has_box { lines + 1 } else { 0 };
        self.finish_layout(line_count, ascent, descent, width_hint);
    }

    fn layout_optimal(
        &mut self,
        width_hint: Pt,
        height_hint: Pt,
        config: &BreakConfig,
    ) -> Result<(), LayoutError> {
        for node in self.nodes.iter_mut() {
            if let LayoutNode::Box(b) = node {
                b.calc_layout(width_hint, height_hint);
            }
        }
        let lines = breaks::find_lines(&self.nodes, &[width_hint], config)?;

        let node_count = self.nodes.len();
        let mut ascent = Pt::ZERO;
        let mut descent = Pt::ZERO;
        let mut start = 0;
        for (line_no, line) in lines.iter().enumerate() {
            let end = content_end(self.nodes[line.position].node_type(), line.position, node_count);
            let y_off = -(self.vspacing * line_no as f32);
            let mut x_off = Pt::ZERO;
            descent = Pt::ZERO;

            for node in self.nodes[start..end].iter_mut() {
                match node {
                    LayoutNode::Box(b) => {
                        b.place(x_off, y_off);
                        x_off += b.width();
                        descent = descent.max(b.descent());
                        if line_no == 0 {
                            ascent = ascent.max(b.ascent());
                        }
                    }
                    LayoutNode::Glue(g) => x_off += g.adjusted_width(line.ratio),
                    LayoutNode::Penalty(_) => {}
                }
            }
            // a line ending at a penalty keeps the penalty's width free at its
            // right edge; whatever it stands for (a hyphen) is not drawn here
            start = line.position + 1;
        }

        debug!("set paragraph of {} nodes as {} lines", node_count, lines.len());
        self.finish_layout(lines.len(), ascent, descent, width_hint);
        Ok(())
    }

    fn finish_layout(&mut self, lines: usize, ascent: Pt, descent: Pt, width_hint: Pt) {
        self.lines = lines;
        self.multiline_shift = self.vspacing * lines.saturating_sub(1) as f32;
        self.ascent = ascent + self.multiline_shift;
        self.descent = descent;
        self.width = width_hint;
        self.laid_out = true;
    }
}

impl LayoutBox for ParBox {
    fn width(&self) -> Pt {
        self.width
    }

    fn ascent(&self) -> Pt {
        self.ascent
    }

    fn descent(&self) -> Pt {
        self.descent
    }

    fn voff(&self) -> Pt {
        self.voff
    }

    fn calc_layout(&mut self, width_hint: Pt, height_hint: Pt) {
        match self.mode.clone() {
            BreakMode::Greedy => self.layout_greedy(width_hint, height_hint),
            BreakMode::Optimal(config) => {
                if let Err(e) = self.layout_optimal(width_hint, height_hint, &config) {
                    warn!("{e}; falling back to greedy line wrapping");
                    self.layout_greedy(width_hint, height_hint);
                }
            }
        }
    }

    fn place(&mut self, x: Pt, y: Pt) {
        self.x = x;
        self.y = y;
    }

    fn render(&self, renderer: &mut dyn Renderer, xref: Pt, yref: Pt) {
        debug_assert!(self.laid_out, "ParBox rendered before calc_layout");
        let x = xref + self.x;
        let y = yref + self.voff + self.y + self.multiline_shift;
        for node in self.nodes.iter() {
            if let LayoutNode::Box(b) = node {
                b.render(renderer, x, y);
            }
        }
    }
}
