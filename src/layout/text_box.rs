use super::{Glue, LayoutBox, LayoutNode, NodeList, Penalty};
use crate::renderer::{Renderer, TextDetails};
use crate::style::Style;
use crate::units::Pt;

/// A run of text drawn in a single style. Its metrics come from the renderer
/// when the box is created; layout hints are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    label: String,
    style: Style,
    details: TextDetails,
    voff: Pt,
    x: Pt,
    y: Pt,
}

impl TextBox {
    pub fn new<S: Into<String>>(label: S, style: Style, renderer: &dyn Renderer) -> TextBox {
        let label = label.into();
        let details = renderer.text_details(&label, &style);
        TextBox {
            label,
            style,
            details,
            voff: Pt::ZERO,
            x: Pt::ZERO,
            y: Pt::ZERO,
        }
    }

    /// Shift the baseline up (positive) or down (negative), e.g. for super- and
    /// subscripts
    pub fn with_voff(mut self, voff: Pt) -> TextBox {
        self.voff = voff;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn details(&self) -> &TextDetails {
        &self.details
    }
}

impl LayoutBox for TextBox {
    fn width(&self) -> Pt {
        self.details.width
    }

    fn ascent(&self) -> Pt {
        self.details.ascent
    }

    fn descent(&self) -> Pt {
        self.details.descent
    }

    fn voff(&self) -> Pt {
        self.voff
    }

    fn calc_layout(&mut self, _width_hint: Pt, _height_hint: Pt) {}

    fn place(&mut self, x: Pt, y: Pt) {
        self.x = x;
        self.y = y;
    }

    fn render(&self, renderer: &mut dyn Renderer, xref: Pt, yref: Pt) {
        renderer.text(
            &self.label,
            xref + self.x,
            yref + self.y + self.voff,
            &self.style,
        );
    }
}

/// Split `text` into a paragraph stream: one [TextBox] per word, elastic glue
/// the width of a space between words, and a forced break at every newline and
/// at the end. Each forced break is preceded by fill glue so the line it ends
/// is set ragged.
///
/// ```
/// use gridtext_layout::layout::{text_to_nodes, NodeType};
/// use gridtext_layout::{PdfRenderer, Style};
///
/// let renderer = PdfRenderer::new();
/// let nodes = text_to_nodes("Hello world", &Style::new(), &renderer);
/// let kinds: Vec<NodeType> = nodes.iter().map(|n| n.node_type()).collect();
/// assert_eq!(
///     kinds,
///     [NodeType::Box, NodeType::Glue, NodeType::Box, NodeType::Glue, NodeType::Penalty]
/// );
/// ```
pub fn text_to_nodes(text: &str, style: &Style, renderer: &dyn Renderer) -> NodeList {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    if text.trim().is_empty() {
        return NodeList::new();
    }

    let space = renderer.text_details(" ", style).space;
    let mut nodes = NodeList::new();
    for (li, line) in text.split('\n').enumerate() {
        if li > 0 {
            close_line(&mut nodes);
        }
        for (wi, word) in line.split_whitespace().enumerate() {
            if wi > 0 {
                nodes.push(LayoutNode::glue(space, space * 0.5, space * 0.33));
            }
            nodes.push(LayoutNode::boxed(TextBox::new(word, style.clone(), renderer)));
        }
    }
    close_line(&mut nodes);
    nodes
}

fn close_line(nodes: &mut NodeList) {
    nodes.push(LayoutNode::Glue(Glue::fill()));
    nodes.push(LayoutNode::Penalty(Penalty::forced()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NodeType;
    use crate::renderer::mock::MonoRenderer;
    use crate::renderer::Grob;

    #[test]
    fn measures_with_the_renderer() {
        let renderer = MonoRenderer::default();
        let b = TextBox::new("abc", Style::new(), &renderer);
        assert_eq!(b.width(), Pt(30.0));
        assert_eq!(b.ascent(), Pt(8.0));
        assert_eq!(b.descent(), Pt(2.0));
        assert_eq!(b.height(), Pt(10.0));
    }

    #[test]
    fn renders_at_its_placed_baseline() {
        let mut renderer = MonoRenderer::default();
        let style = Style::new().with("color", "#ff0000");
        let mut b = TextBox::new("hi", style.clone(), &renderer).with_voff(Pt(3.0));
        b.calc_layout(Pt(100.0), Pt(100.0));
        b.place(Pt(5.0), Pt(-12.0));
        b.render(&mut renderer, Pt(10.0), Pt(50.0));

        assert_eq!(
            renderer.collect_grobs(),
            vec![Grob::Text {
                label: "hi".into(),
                x: Pt(15.0),
                y: Pt(41.0),
                style,
            }]
        );
    }

    #[test]
    fn newlines_become_forced_breaks() {
        let renderer = MonoRenderer::default();
        let nodes = text_to_nodes("one two\r\nthree", &Style::new(), &renderer);
        let kinds: Vec<NodeType> = nodes.iter().map(|n| n.node_type()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeType::Box,
                NodeType::Glue,
                NodeType::Box,
                NodeType::Glue,
                NodeType::Penalty,
                NodeType::Box,
                NodeType::Glue,
                NodeType::Penalty,
            ]
        );
        match &nodes[1] {
            LayoutNode::Glue(g) => {
                assert_eq!(g.width(), Pt(10.0));
                assert_eq!(g.stretch(), Pt(5.0));
            }
            other => panic!("expected glue, got {other:?}"),
        }
    }

    #[test]
    fn blank_text_has_no_nodes() {
        let renderer = MonoRenderer::default();
        assert!(text_to_nodes(" \n\t", &Style::new(), &renderer).is_empty());
    }
}
