use crate::style::Style;
use crate::units::Pt;

/// Metrics of a rendered text run
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextDetails {
    /// width of the label
    pub width: Pt,
    /// ascent from the baseline
    pub ascent: Pt,
    /// descent below the baseline
    pub descent: Pt,
    /// width of a space in the same style
    pub space: Pt,
}

/// A drawable primitive recorded by a [Renderer]
#[derive(Debug, Clone, PartialEq)]
pub enum Grob {
    /// A text run whose baseline starts at (x, y)
    Text {
        label: String,
        x: Pt,
        y: Pt,
        style: Style,
    },
    /// A rectangle with its lower-left corner at (x, y)
    Rect {
        x: Pt,
        y: Pt,
        width: Pt,
        height: Pt,
        style: Style,
        radius: Pt,
    },
}

/// The drawing surface that boxes render into. Coordinates are absolute device
/// coordinates with y pointing up, as in PDF.
///
/// A renderer is owned by whoever drives the render pass and is only lent to
/// boxes for the duration of [LayoutBox::render](crate::layout::LayoutBox::render).
pub trait Renderer {
    /// Draw a text run with its baseline starting at (x, y)
    fn text(&mut self, label: &str, x: Pt, y: Pt, style: &Style);

    /// Measure a text run without drawing it
    fn text_details(&self, label: &str, style: &Style) -> TextDetails;

    /// Draw a rectangle, rounding the corners when `radius` is positive
    fn rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt, style: &Style, radius: Pt);

    /// Drain everything drawn so far, in draw order
    fn collect_grobs(&mut self) -> Vec<Grob>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Records grobs and measures every character as 10pt wide, 8pt ascent,
    /// 2pt descent
    #[derive(Debug, Default)]
    pub(crate) struct MonoRenderer {
        grobs: Vec<Grob>,
    }

    impl Renderer for MonoRenderer {
        fn text(&mut self, label: &str, x: Pt, y: Pt, style: &Style) {
            self.grobs.push(Grob::Text {
                label: label.to_string(),
                x,
                y,
                style: style.clone(),
            });
        }

        fn text_details(&self, label: &str, _style: &Style) -> TextDetails {
            TextDetails {
                width: Pt(10.0 * label.chars().count() as f32),
                ascent: Pt(8.0),
                descent: Pt(2.0),
                space: Pt(10.0),
            }
        }

        fn rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt, style: &Style, radius: Pt) {
            self.grobs.push(Grob::Rect {
                x,
                y,
                width,
                height,
                style: style.clone(),
                radius,
            });
        }

        fn collect_grobs(&mut self) -> Vec<Grob> {
            std::mem::take(&mut self.grobs)
        }
    }
}
