use crate::prelude::*;

/// The eight winning lines as row-major cell indices.
///
/// The order is rows top to bottom, columns left to right, the main diagonal, then the anti-diagonal.
/// When a board somehow holds several lines, the first one in this order is the one reported.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Represents the current state of the game, derived from the board contents alone.
pub enum Outcome
{
    #[default]
    InProgress,
    Draw,
    Win(Mark),
}

impl Outcome
{
    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool
    {
        !matches!(self, Outcome::InProgress)
    }

    /// Gets the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark>
    {
        match self
        {
            | Outcome::Win(mark) => Some(*mark),
            | _ => None,
        }
    }
}

impl std::fmt::Display for Outcome
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Self::InProgress => write!(f, "InProgress"),
            | Self::Draw => write!(f, "Draw"),
            | Self::Win(mark) => write!(f, "{}Wins", mark),
        }
    }
}

impl FromStr for Outcome
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "InProgress" => Ok(Self::InProgress),
            | "Draw" => Ok(Self::Draw),
            | "XWins" => Ok(Self::Win(Mark::X)),
            | "OWins" => Ok(Self::Win(Mark::O)),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The three aligned cells of a completed line, ordered from one endpoint to the other.
pub struct WinLine
{
    cells: [Move; 3],
}

impl WinLine
{
    fn new(line: [usize; 3]) -> Self
    {
        WinLine {
            cells: line.map(Move::at),
        }
    }

    pub fn cells(&self) -> [Move; 3]
    {
        self.cells
    }

    /// The endpoint the line is drawn from.
    pub fn start(&self) -> Move
    {
        self.cells[0]
    }

    /// The endpoint the line is drawn to.
    pub fn end(&self) -> Move
    {
        self.cells[2]
    }
}

impl std::fmt::Display for WinLine
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

impl Board
{
    /// Classifies the board as won, drawn or still in progress.
    ///
    /// A win comes with the first completed line found, in [`LINES`] order.
    pub fn classify(&self) -> (Outcome, Option<WinLine>)
    {
        for line in LINES.iter()
        {
            if let Some(mark) = self.completed(line)
            {
                return (Outcome::Win(mark), Some(WinLine::new(*line)));
            }
        }

        if self.is_full()
        {
            (Outcome::Draw, None)
        }
        else
        {
            (Outcome::InProgress, None)
        }
    }

    /// Shorthand for the outcome half of [`Board::classify`].
    pub fn outcome(&self) -> Outcome
    {
        self.classify().0
    }

    /// Returns the mark holding all three cells of a line.
    pub(super) fn completed(&self, line: &[usize; 3]) -> Option<Mark>
    {
        let [a, b, c] = *line;
        let cells = self.cells();
        match cells[a].mark()
        {
            | Some(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
            | _ => None,
        }
    }
}
