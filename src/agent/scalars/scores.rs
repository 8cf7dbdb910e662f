use crate::prelude::*;

pub mod consts
{
    /// The score of a win on the very next ply.
    pub const WIN: i32 = 10;

    /// The score of a drawn board.
    pub const DRAW: i32 = 0;

    /// The unbounded search window. Any magnitude above [`WIN`] would do.
    pub const INF: i32 = 9999;
}

pub use consts::*;

/// Embed the ply into winning or losing scores, so that faster wins and slower losses score higher.
pub fn normalize(score: i32, ply: i32) -> i32
{
    if score >= WIN
    {
        score - ply
    }
    else if score <= -WIN
    {
        score + ply
    }
    else
    {
        score
    }
}

/// Scores a finished game from the perspective of `mark`, or returns `None` if the game is still going.
pub fn terminal(outcome: Outcome, mark: Mark, ply: i32) -> Option<i32>
{
    match outcome
    {
        | Outcome::InProgress => None,
        | Outcome::Draw => Some(DRAW),
        | Outcome::Win(winner) if winner == mark => Some(normalize(WIN, ply)),
        | Outcome::Win(_) => Some(normalize(-WIN, ply)),
    }
}
