use crate::units::Pt;

/// Margin or padding around a box, in the same top / right / bottom / left
/// order as CSS. Margins are plain guidelines; nothing prevents content from
/// overflowing them.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margin {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margin {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margin {
        Margin {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margin {
        let value: Pt = value.into();
        Margin::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margin {
        Margin::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margin {
        Margin::default()
    }

    /// Combined left and right margin
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Combined top and bottom margin
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }
}
