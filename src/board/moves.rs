use lazy_static::lazy_static;
use regex::Regex;

use super::consts::*;
use crate::prelude::*;

lazy_static! {
    /// Accepts `r,c` with optional parentheses and whitespace, such as `(1, 2)`.
    static ref MOVE_PATTERN: Regex =
        Regex::new(r"^\(?\s*(?<row>[0-9]+)\s*,\s*(?<col>[0-9]+)\s*\)?$").expect("move pattern is a valid regex");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A placement on the board, addressed by zero-based row and column.
///
/// A move says nothing about which mark is placed; that is decided by whoever plays it.
pub struct Move
{
    pub row: u8,
    pub col: u8,
}

impl Move
{
    /// Returns the move at the given row-major cell index.
    pub const fn at(index: usize) -> Move
    {
        Move {
            row: (index / COLS) as u8,
            col: (index % COLS) as u8,
        }
    }

    /// Gets the row-major cell index of this move.
    pub const fn index(&self) -> usize
    {
        self.row as usize * COLS + self.col as usize
    }

    /// Creates a move, provided it lies on the board.
    pub fn new(row: u8, col: u8) -> Result<Move>
    {
        if row as usize >= ROWS || col as usize >= COLS
        {
            return Err(Error::off_board(row, col));
        }
        Ok(Move { row, col })
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Move
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Some(caps) = MOVE_PATTERN.captures(s.trim())
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let Ok(row) = caps["row"].parse::<u8>()
        else
        {
            let err = Error::for_parse::<u8>(caps["row"].into());
            return Err(err.chain_parse::<Self>(s.into()));
        };

        let Ok(col) = caps["col"].parse::<u8>()
        else
        {
            let err = Error::for_parse::<u8>(caps["col"].into());
            return Err(err.chain_parse::<Self>(s.into()));
        };

        Move::new(row, col)
    }
}
