use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A particular line taken by the engine, which is a continuation, the score of its first move, and where it ends.
pub struct Variation
{
    pub moves:   ArrayVec<Move, { scalars::MAXIMUM_PLY }>,
    pub score:   i32,
    pub outcome: Outcome,
}

impl std::fmt::Display for Variation
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let moves = if self.moves.is_empty() { "none".into() } else { self.moves.iter().join(" ") };
        write!(f, "{} ({}, score {})", moves, self.outcome, self.score)
    }
}
