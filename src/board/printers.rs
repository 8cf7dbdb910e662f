use itertools::Itertools;

use super::consts::*;
use crate::prelude::*;

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board {{ {}, {} }}", BoardString::from(self), self.outcome())
    }

    /// Pretty print, as a grid.
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let rows = self
            .cells()
            .chunks(COLS)
            .map(|row| format!(" {} ", row.iter().join(" | ")))
            .join("\n---+---+---\n");
        write!(f, "{}", rows)
    }
}
