use crate::prelude::*;

use super::scalars::*;

#[derive(Clone, Copy, Debug)]
/// The window and ply of one node in the alpha-beta search.
pub(super) struct AlphaBetaSearchData
{
    pub a:          i32,
    pub b:          i32,
    pub depth:      i32,
    pub maximizing: bool,
}

impl AlphaBetaSearchData
{
    /// The data for the reply to a root move: the opponent is to move, with the full window.
    pub(super) const ROOT_REPLY: AlphaBetaSearchData = AlphaBetaSearchData {
        a:          -INF,
        b:          INF,
        depth:      0,
        maximizing: false,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters collected over one search.
pub struct SearchStats
{
    /// Boards classified, terminal or not.
    pub nodes:   u64,
    /// Sibling loops cut short by the window.
    pub cutoffs: u64,
}

impl SearchStats
{
    /// Merge another worker's counters into this one.
    pub fn merge(&mut self, other: &SearchStats)
    {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

impl Engine
{
    /// Scores the board in this engine's perspective with minimax and alpha-beta pruning.
    ///
    /// `depth` is the number of plies already made below the root, and `maximizing` says whether the engine is to move.
    /// Every speculative mark is cleared again, so the board comes back exactly as it went in.
    pub fn evaluate(&self, board: &mut Board, depth: i32, maximizing: bool, alpha: i32, beta: i32) -> i32
    {
        let data = AlphaBetaSearchData {
            a: alpha,
            b: beta,
            depth,
            maximizing,
        };
        Self::alpha_beta(self.mark(), board, data, &mut SearchStats::default())
    }

    // Performs alpha-beta search.
    pub(super) fn alpha_beta(mark: Mark, board: &mut Board, search_data: AlphaBetaSearchData, stats: &mut SearchStats) -> i32
    {
        stats.nodes += 1;

        if let Some(score) = terminal(board.outcome(), mark, search_data.depth)
        {
            return score;
        }

        let mut data = search_data;
        let (to_move, mut best) = if data.maximizing { (mark, -INF) } else { (mark.flip(), INF) };

        for mv in board.legal_moves()
        {
            let next_data = AlphaBetaSearchData {
                depth: data.depth + 1,
                maximizing: !data.maximizing,
                ..data
            };

            board.place(mv, to_move);
            let score = Self::alpha_beta(mark, board, next_data, stats);
            board.clear(mv);

            if data.maximizing
            {
                best = best.max(score);
                data.a = data.a.max(best);
            }
            else
            {
                best = best.min(score);
                data.b = data.b.min(best);
            }

            // Nothing left in this loop can change what an ancestor will pick.
            if data.b <= data.a
            {
                stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Scores one root move: the engine's mark goes down, and the opponent replies.
    pub(super) fn score_root(mark: Mark, board: &mut Board, mv: Move, stats: &mut SearchStats) -> i32
    {
        board.place(mv, mark);
        let score = Self::alpha_beta(mark, board, AlphaBetaSearchData::ROOT_REPLY, stats);
        board.clear(mv);

        log::trace!("{} as {} scores {}", mv, mark, score);
        score
    }
}
