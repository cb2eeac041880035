use super::{LayoutBox, Margin};
use crate::renderer::Renderer;
use crate::style::Style;
use crate::units::Pt;

/// A fixed-size rectangle sitting on the baseline, surrounded by a [Margin].
/// Its size never depends on the layout hints.
#[derive(Debug, Clone, PartialEq)]
pub struct RectBox {
    width: Pt,
    height: Pt,
    margin: Margin,
    style: Style,
    radius: Pt,
    x: Pt,
    y: Pt,
}

impl RectBox {
    pub fn new(width: Pt, height: Pt) -> RectBox {
        RectBox {
            width,
            height,
            margin: Margin::empty(),
            style: Style::default(),
            radius: Pt::ZERO,
            x: Pt::ZERO,
            y: Pt::ZERO,
        }
    }

    pub fn with_margin(mut self, margin: Margin) -> RectBox {
        self.margin = margin;
        self
    }

    pub fn with_style(mut self, style: Style) -> RectBox {
        self.style = style;
        self
    }

    /// Round the corners of the drawn rectangle
    pub fn with_radius(mut self, radius: Pt) -> RectBox {
        self.radius = radius;
        self
    }
}

impl LayoutBox for RectBox {
    fn width(&self) -> Pt {
        self.width + self.margin.horizontal()
    }

    fn ascent(&self) -> Pt {
        self.height + self.margin.top
    }

    fn descent(&self) -> Pt {
        self.margin.bottom
    }

    fn voff(&self) -> Pt {
        Pt::ZERO
    }

    fn calc_layout(&mut self, _width_hint: Pt, _height_hint: Pt) {}

    fn place(&mut self, x: Pt, y: Pt) {
        self.x = x;
        self.y = y;
    }

    fn render(&self, renderer: &mut dyn Renderer, xref: Pt, yref: Pt) {
        renderer.rect(
            xref + self.x + self.margin.left,
            yref + self.y,
            self.width,
            self.height,
            &self.style,
            self.radius,
        );
    }
}
