use crate::prelude::*;

mod cell;
mod checks;
mod generate;
mod moves;
mod notation;
mod outcome;
mod printers;

pub use cell::{Cell, Mark};
pub use generate::MoveList;
pub use moves::Move;
pub use notation::BoardString;
pub use outcome::{Outcome, WinLine, LINES};

pub mod consts
{
    pub const ROWS: usize = 3;
    pub const COLS: usize = 3;
    pub const SIZE: usize = ROWS * COLS;
}

use consts::*;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
/// A 3x3 board, stored row-major.
///
/// Boards are plain values: the search copies them freely, and anything it places speculatively is
/// cleared again before control returns to the caller.
pub struct Board
{
    cells: [Cell; SIZE],
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            write!(f, "{}", BoardString::from(self))
        }
    }
}

impl Board
{
    /// Gets the cells of this board in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE]
    {
        &self.cells
    }

    /// Clears a cell. Used to take back speculative or undone moves.
    pub fn clear(&mut self, mv: Move)
    {
        self.cells[mv.index()] = Cell::Empty;
    }

    /// Counts the cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize
    {
        let cell = Cell::from(mark);
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn get(&self, mv: Move) -> Cell
    {
        self.cells[mv.index()]
    }

    /// Whether no mark has been placed yet.
    pub fn is_empty(&self) -> bool
    {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool
    {
        !self.cells.iter().any(Cell::is_empty)
    }

    /// The number of marks on the board.
    pub fn len(&self) -> usize
    {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns a new, empty board.
    pub fn new() -> Self
    {
        Board::default()
    }

    /// Places a mark without checking the target cell.
    ///
    /// This is the search's hot path; the caller guarantees the cell is empty.
    pub fn place(&mut self, mv: Move, mark: Mark)
    {
        debug_assert!(self.get(mv).is_empty(), "cell {} is already taken on\n{:#}", mv, self);
        self.cells[mv.index()] = mark.into();
    }

    /// Plays a mark into an empty cell, or returns an error explaining why it can't be.
    pub fn play(&mut self, mv: Move, mark: Mark) -> Result<()>
    {
        self.ensure_empty(mv)?;
        self.place(mv, mark);
        Ok(())
    }

    /// Gets the mark to move, assuming X moved first and the players alternated.
    pub fn to_move(&self) -> Mark
    {
        if self.count(Mark::X) > self.count(Mark::O)
        {
            Mark::O
        }
        else
        {
            Mark::X
        }
    }
}
