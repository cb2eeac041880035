use crate::units::Pt;

/// A possible break point. Breaking here costs `penalty` demerits; a penalty of
/// [Penalty::INFINITY] or more forbids the break, one of `-INFINITY` or less
/// forces it. `width` is the width of material that appears only if the break is
/// taken (such as a hyphen), and `flagged` marks breaks that should not be
/// stacked on consecutive lines.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Penalty {
    penalty: f64,
    width: Pt,
    flagged: bool,
}

impl Penalty {
    /// Magnitude at which a penalty is treated as infinite
    pub const INFINITY: f64 = 10_000.0;

    pub fn new(penalty: f64, width: Pt, flagged: bool) -> Penalty {
        Penalty {
            penalty,
            width,
            flagged,
        }
    }

    /// A break that must be taken
    pub fn forced() -> Penalty {
        Penalty::new(-Penalty::INFINITY, Pt::ZERO, false)
    }

    /// A position where breaking is never allowed
    pub fn prohibited() -> Penalty {
        Penalty::new(Penalty::INFINITY, Pt::ZERO, false)
    }

    /// A flagged break that inserts visible material of `width`, e.g. a hyphen
    pub fn hyphen(penalty: f64, width: Pt) -> Penalty {
        Penalty::new(penalty, width, true)
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn flagged(&self) -> bool {
        self.flagged
    }

    pub fn is_forced(&self) -> bool {
        self.penalty <= -Penalty::INFINITY
    }

    pub fn is_prohibited(&self) -> bool {
        self.penalty >= Penalty::INFINITY
    }
}
