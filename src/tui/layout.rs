//! Responsive breakpoints for the wizard screen.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

/// Columns the particle canvases were designed for
pub const CANVAS_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: no room for the logo canvas
    Compact,
    /// 60-79 cols: canvas drawn, clipped at the edges
    Normal,
    /// 80+ cols: canvas drawn whole, centered
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=79 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Whether the header shows the particle logo
    pub fn shows_logo(&self) -> bool {
        self.at_least(Breakpoint::Normal)
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}
