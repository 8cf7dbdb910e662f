use crate::prelude::*;

mod engine;
mod parallel;
pub mod scalars;
mod search;
pub mod variation;

pub use engine::Engine;
pub use search::SearchStats;
pub use variation::*;

/// A trait representing a policy by which a move is picked for one mark.
///
/// The collaborator holding the game asks the agent for a move and applies it itself.
pub trait Agent
{
    /// Returns the best move for this agent's mark in the current position, or `None` if the board is full.
    fn best_move(&mut self, board: &Board) -> Option<Move>;

    /// The mark this agent plays.
    fn mark(&self) -> Mark;

    /// Returns a new agent. Agents are instanced so that they can keep internal state.
    fn new(options: EngineOptions) -> Self
    where
        Self: Sized;
}
