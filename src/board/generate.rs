use arrayvec::ArrayVec;

use super::consts::*;
use crate::prelude::*;

/// A list of moves that never needs to allocate, since there are at most nine.
pub type MoveList = ArrayVec<Move, SIZE>;

impl Board
{
    /// Generates every empty cell, in row-major order.
    ///
    /// The order is part of the search's contract: ties between equally good moves go to the first one generated.
    pub fn legal_moves(&self) -> MoveList
    {
        itertools::iproduct!(0 .. ROWS, 0 .. COLS)
            .map(|(row, col)| Move::at(row * COLS + col))
            .filter(|mv| self.get(*mv).is_empty())
            .collect()
    }
}
