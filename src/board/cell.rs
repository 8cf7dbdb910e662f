use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The two marks in a game of noughts and crosses.
///
/// X conventionally moves first.
pub enum Mark
{
    X = 1,
    O = 2,
}

impl Mark
{
    /// Gets the opposing mark.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::X => Self::O,
            | Self::O => Self::X,
        }
    }

    /// Returns the symbol for this mark, for use in board notation.
    pub fn short(&self) -> char
    {
        match self
        {
            | Self::X => 'X',
            | Self::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.short())
    }
}

impl FromStr for Mark
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "X" | "x" => Ok(Self::X),
            | "O" | "o" => Ok(Self::O),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// The contents of a single square on the board.
pub enum Cell
{
    #[default]
    Empty = 0,
    X = 1,
    O = 2,
}

impl Cell
{
    pub fn is_empty(&self) -> bool
    {
        *self == Cell::Empty
    }

    /// Gets the mark occupying this cell, if there is one.
    pub fn mark(&self) -> Option<Mark>
    {
        match self
        {
            | Self::Empty => None,
            | Self::X => Some(Mark::X),
            | Self::O => Some(Mark::O),
        }
    }

    /// Returns the symbol for this cell; empty cells print as a dot.
    pub fn short(&self) -> char
    {
        self.mark().map(|mark| mark.short()).unwrap_or('.')
    }
}

impl From<Mark> for Cell
{
    fn from(value: Mark) -> Self
    {
        match value
        {
            | Mark::X => Cell::X,
            | Mark::O => Cell::O,
        }
    }
}

impl TryFrom<char> for Cell
{
    type Error = Error;
    fn try_from(value: char) -> std::result::Result<Self, Self::Error>
    {
        match value
        {
            | 'X' | 'x' => Ok(Cell::X),
            | 'O' | 'o' => Ok(Cell::O),
            | '.' | '-' | '_' => Ok(Cell::Empty),
            | _ => Err(Error::for_parse::<Self>(value.into())),
        }
    }
}

impl std::fmt::Display for Cell
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.short())
    }
}
