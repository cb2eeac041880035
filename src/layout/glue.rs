use crate::units::Pt;

/// Elastic spacing between boxes. The nominal `width` is what the glue measures
/// as; `stretch` and `shrink` bound how far line breaking may widen or narrow it
/// to fill a line.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Glue {
    width: Pt,
    stretch: Pt,
    shrink: Pt,
}

impl Glue {
    /// Stretch large enough to absorb any realistic amount of slack, used for
    /// fill glue that closes a ragged line.
    pub const INFINITY: Pt = Pt(100_000.0);

    pub fn new(width: Pt, stretch: Pt, shrink: Pt) -> Glue {
        Glue {
            width,
            stretch,
            shrink,
        }
    }

    /// Glue that can stretch without limit and has no natural width
    pub fn fill() -> Glue {
        Glue::new(Pt::ZERO, Glue::INFINITY, Pt::ZERO)
    }

    /// The nominal width, regardless of elasticity
    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn stretch(&self) -> Pt {
        self.stretch
    }

    pub fn shrink(&self) -> Pt {
        self.shrink
    }

    /// The width this glue takes once a line has been set with adjustment ratio `ratio`
    pub fn adjusted_width(&self, ratio: f64) -> Pt {
        if ratio >= 0.0 {
            self.width + self.stretch * ratio as f32
        } else {
            self.width + self.shrink * ratio as f32
        }
    }
}
