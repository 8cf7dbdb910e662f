use minimax::{Evaluation, Evaluator, Game, Negamax, Strategy, Winner};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A board together with the mark to move, which is the state the minimax crate searches over.
///
/// The mark to move is carried explicitly rather than inferred, so any mark can be searched for on any board.
pub struct Position
{
    pub board:   Board,
    pub to_move: Mark,
}

#[derive(Clone, Copy, Debug)]
pub struct TicTacToe;

impl Game for TicTacToe
{
    type S = Position;
    type M = Move;

    fn generate_moves(state: &Self::S, moves: &mut Vec<Self::M>)
    {
        moves.extend(state.board.legal_moves());
    }

    fn get_winner(state: &Self::S) -> Option<Winner>
    {
        match state.board.outcome()
        {
            | Outcome::InProgress => None,
            | Outcome::Draw => Some(Winner::Draw),
            | Outcome::Win(mark) => Some(match mark == state.to_move
            {
                | true => Winner::PlayerToMove,
                | false => Winner::PlayerJustMoved,
            }),
        }
    }

    fn apply(state: &mut Self::S, m: Self::M) -> Option<Self::S>
    {
        let mut new_state = *state;
        new_state.board.place(m, state.to_move);
        new_state.to_move = state.to_move.flip();
        Some(new_state)
    }

    fn zobrist_hash(state: &Self::S) -> u64
    {
        // Base-3 digits for the cells, then one bit for the mark to move.
        let cells = state.board.cells().iter().fold(0u64, |hash, cell| 3 * hash + *cell as u64);
        2 * cells + (state.to_move == Mark::O) as u64
    }

    fn notation(_state: &Self::S, mv: Self::M) -> Option<String>
    {
        Some(mv.to_string())
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// A flat evaluator. The reference search always reaches the end of the game, so only terminal scores matter.
pub struct TerminalEval;

impl Evaluator for TerminalEval
{
    type G = TicTacToe;
    fn evaluate(&self, _s: &<Self::G as Game>::S) -> Evaluation
    {
        0
    }
}

/// An agent backed by the minimax crate's negamax, searching to the end of the game.
///
/// It plays perfectly, but makes no promise about which of several equally good moves it picks.
pub struct Reference
{
    mark:     Mark,
    strategy: Negamax<TerminalEval>,
}

impl Agent for Reference
{
    fn best_move(&mut self, board: &Board) -> Option<Move>
    {
        let position = Position {
            board:   *board,
            to_move: self.mark,
        };
        self.strategy.choose_move(&position)
    }

    fn mark(&self) -> Mark
    {
        self.mark
    }

    fn new(options: EngineOptions) -> Self
    {
        Reference {
            mark:     options.mark,
            strategy: Negamax::new(TerminalEval, crate::board::consts::SIZE as u8),
        }
    }
}
