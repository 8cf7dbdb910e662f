use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use super::consts::*;
use crate::prelude::*;

lazy_static! {
    /// Three rows of three cells separated by slashes, such as `XX./OO./...`.
    static ref BOARD_PATTERN: Regex =
        Regex::new(r"^(?i)[XO._-]{3}/[XO._-]{3}/[XO._-]{3}$").expect("board pattern is a valid regex");
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a syntactically-valid board string, normalised to `X`, `O` and `.`.
///
/// A board string only proves its syntax; whether the position could arise in a game is checked by
/// [`Board::check`] when it is turned into a board.
pub struct BoardString(String);

impl std::fmt::Display for BoardString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BoardString
{
    fn as_ref(&self) -> &str
    {
        self.0.as_str()
    }
}

impl FromStr for BoardString
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let s = s.trim();
        if !BOARD_PATTERN.is_match(s)
        {
            return Err(Error::for_parse::<Self>(s.into()));
        }

        let normalised = s
            .split('/')
            .map(|row| row.chars().filter_map(|c| Cell::try_from(c).ok()).map(|cell| cell.short()).collect::<String>())
            .join("/");
        Ok(BoardString(normalised))
    }
}

impl From<&Board> for BoardString
{
    fn from(value: &Board) -> Self
    {
        let s = value.cells().chunks(COLS).map(|row| row.iter().map(Cell::short).collect::<String>()).join("/");
        BoardString(s)
    }
}

impl From<BoardString> for Board
{
    fn from(value: BoardString) -> Self
    {
        let mut board = Board::default();
        for (i, c) in value.0.chars().filter(|c| *c != '/').enumerate()
        {
            if let Some(mark) = Cell::try_from(c).ok().and_then(|cell| cell.mark())
            {
                board.place(Move::at(i), mark);
            }
        }
        board
    }
}

impl FromStr for Board
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let board_string = s.parse::<BoardString>()?;
        let board = Board::from(board_string);
        if let Err(err) = board.check()
        {
            return Err(err.chain(Error::unreachable(format!("'{}' is not a reachable position.", s))));
        }
        Ok(board)
    }
}
