use crate::board::{
    consts::{COLS, ROWS},
    Mark,
    Move,
    Outcome,
};

pub type Result<T> = anyhow::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// An error raised anywhere between the protocol stream and the board.
///
/// The kind is what callers match on; the message is for people, and may carry a chain of causes.
pub struct Error
{
    pub kind: Kind,
    pub msg:  String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind
{
    /// A command needs a board, but `newgame` has not been sent yet.
    GameNotStarted,
    /// The board already shows a win or a draw.
    GameOver,
    InternalError,
    /// A coordinate off the board, or a cell that is already taken.
    InvalidMove,
    /// A board that no sequence of legal moves could produce.
    InvalidState,
    IoError,
    LoggerError,
    ParseError,
    TooManyUndos,
    UnrecognizedCommand,
    /// The engine was asked to move for the side that is not to move.
    WrongTurn,
}

impl std::fmt::Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self.msg.is_empty()
        {
            | true => write!(f, "{:?}", self.kind),
            | false => write!(f, "{:?}: {}", self.kind, self.msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{
    fn from(value: std::io::Error) -> Self
    {
        Error::new(Kind::IoError, value.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for Error
{
    fn from(value: flexi_logger::FlexiLoggerError) -> Self
    {
        Error::new(Kind::LoggerError, value.to_string())
    }
}

impl Error
{
    /// Creates a new error.
    pub fn new(kind: Kind, msg: String) -> Error
    {
        Error { kind, msg }
    }

    /// Creates an error with no message.
    pub fn empty(kind: Kind) -> Error
    {
        Error::new(kind, String::new())
    }

    /// Wraps this error as the cause of `base`, which keeps its kind.
    pub fn chain(&self, base: Error) -> Error
    {
        let cause = self.to_string();
        let msg = match cause.is_empty()
        {
            | true => base.msg,
            | false => format!("{}\n\tdue to {}", base.msg, cause),
        };
        Error::new(base.kind, msg)
    }

    /// Wraps this error as the cause of a failure to parse `s` as a `T`.
    pub fn chain_parse<T>(&self, s: String) -> Error
    {
        self.chain(Error::for_parse::<T>(s))
    }

    /// Whether the server has to stop, rather than report the error and carry on.
    pub fn fatal(&self) -> bool
    {
        matches!(self.kind, Kind::InternalError | Kind::IoError)
    }

    /// Creates a parse error for a particular type.
    pub fn for_parse<T>(s: String) -> Error
    {
        Error::new(Kind::ParseError, format!("'{}' is not a valid {}.", s, Error::type_name::<T>()))
    }

    /// The game ended with the given outcome.
    pub fn game_over(outcome: Outcome) -> Error
    {
        Error::new(Kind::GameOver, format!("The game has ended ({}).", outcome))
    }

    /// The coordinate lies outside the grid.
    pub fn off_board(row: u8, col: u8) -> Error
    {
        Error::new(Kind::InvalidMove, format!("Cell {},{} is off the {}x{} board.", row, col, ROWS, COLS))
    }

    /// The cell already holds a mark.
    pub fn taken(mv: Move, mark: Mark) -> Error
    {
        Error::new(Kind::InvalidMove, format!("Cell {} is already taken by {}.", mv, mark))
    }

    /// There are fewer moves in the history than were asked to be taken back.
    pub fn too_many_undos(asked: usize, played: usize) -> Error
    {
        Error::new(Kind::TooManyUndos, format!("Cannot undo {} moves, only {} were played.", asked, played))
    }

    /// The board cannot arise from legal play.
    pub fn unreachable(reason: String) -> Error
    {
        Error::new(Kind::InvalidState, reason)
    }

    /// The engine was asked for a move while the other mark is to move.
    pub fn wrong_turn(to_move: Mark, engine: Mark) -> Error
    {
        Error::new(Kind::WrongTurn, format!("It is {}'s turn, but the engine plays {}.", to_move, engine))
    }

    /// Computes the basename for the parameterized type.
    pub fn type_name<T>() -> &'static str
    {
        let type_name = std::any::type_name::<T>();
        type_name.split("::").last().unwrap_or(type_name)
    }
}
