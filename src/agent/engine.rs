use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// A perfect-play engine based on exhaustive alpha-beta search.
///
/// The engine holds no game state; every call searches the board it is handed.
pub struct Engine
{
    options: EngineOptions,
}

impl Agent for Engine
{
    fn best_move(&mut self, board: &Board) -> Option<Move>
    {
        self.choose_move(board)
    }

    fn mark(&self) -> Mark
    {
        self.options.mark
    }

    fn new(options: EngineOptions) -> Self
    {
        Engine { options }
    }
}

impl Engine
{
    /// Scores every legal move for this engine's mark, in generation order.
    ///
    /// Each move is searched with the full window, so every score is exact rather than a bound.
    pub fn analyze(&self, board: &Board) -> Vec<(Move, i32)>
    {
        debug_assert!(board.outcome().winner().is_none(), "cannot search a finished game:\n{:#}", board);

        let moves = board.legal_moves();
        let (scores, stats) = if self.options.threads > 1 && moves.len() > 1
        {
            self.analyze_parallel(board, &moves)
        }
        else
        {
            self.analyze_sequential(board, &moves)
        };

        log::debug!(
            "searched {} moves for {} ({} nodes, {} cutoffs, {} threads)",
            moves.len(),
            self.mark(),
            stats.nodes,
            stats.cutoffs,
            self.options.threads.max(1)
        );
        scores
    }

    /// Returns the best move for this engine's mark, or `None` if the board is full.
    ///
    /// Of equally scored moves, the first one generated wins.
    pub fn choose_move(&self, board: &Board) -> Option<Move>
    {
        Self::pick(&self.analyze(board)).map(|(mv, _)| mv)
    }

    /// Returns the continuation expected when both sides play perfectly from here, with this engine moving first.
    pub fn line(&self, board: &Board) -> Variation
    {
        let mut scratch = *board;
        let mut variation = Variation::default();

        if let Some((mv, score)) = Self::pick(&self.analyze(&scratch))
        {
            scratch.place(mv, self.mark());
            variation.moves.push(mv);
            variation.score = score;

            let movers = [self.mirror(), *self];
            while !scratch.outcome().is_terminal()
            {
                let mover = movers[(variation.moves.len() - 1) % 2];
                let Some(mv) = mover.choose_move(&scratch)
                else
                {
                    break;
                };
                scratch.place(mv, mover.mark());
                variation.moves.push(mv);
            }
        }

        variation.outcome = scratch.outcome();
        variation
    }

    /// Returns an engine with the same options playing the opposing mark.
    pub fn mirror(&self) -> Engine
    {
        Engine::new(self.options.flipped())
    }

    pub fn options(&self) -> &EngineOptions
    {
        &self.options
    }

    /// Scores the root moves on a single scratch board.
    fn analyze_sequential(&self, board: &Board, moves: &MoveList) -> (Vec<(Move, i32)>, SearchStats)
    {
        let mark = self.mark();
        let mut scratch = *board;
        let mut stats = SearchStats::default();

        let scores = moves
            .iter()
            .map(|mv| (*mv, Self::score_root(mark, &mut scratch, *mv, &mut stats)))
            .collect();
        (scores, stats)
    }

    /// Picks the first strictly-best scored move.
    fn pick(scores: &[(Move, i32)]) -> Option<(Move, i32)>
    {
        let mut best: Option<(Move, i32)> = None;
        for (mv, score) in scores.iter().copied()
        {
            if best.map_or(true, |(_, best_score)| score > best_score)
            {
                best = Some((mv, score));
            }
        }
        best
    }
}
