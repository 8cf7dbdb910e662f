use std::thread;

use crate::prelude::*;

impl Engine
{
    /// Scores the root moves across scoped threads.
    ///
    /// Every thread works on its own copy of the board, and the scores come back in the order the moves were generated,
    /// so ties resolve exactly as they do on a single thread.
    pub(super) fn analyze_parallel(&self, board: &Board, moves: &MoveList) -> (Vec<(Move, i32)>, SearchStats)
    {
        let mark = self.mark();
        let threads = self.options().threads.clamp(1, moves.len().max(1));
        let per_thread = moves.len().div_ceil(threads).max(1);

        let results = thread::scope(|scope| {
            let handles = moves
                .chunks(per_thread)
                .map(|chunk| {
                    scope.spawn(move || {
                        let mut scratch = *board;
                        let mut stats = SearchStats::default();
                        let scores = chunk
                            .iter()
                            .map(|mv| (*mv, Self::score_root(mark, &mut scratch, *mv, &mut stats)))
                            .collect::<Vec<_>>();
                        (scores, stats)
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect::<Vec<_>>()
        });

        let mut scores = Vec::with_capacity(moves.len());
        let mut stats = SearchStats::default();
        for (chunk_scores, chunk_stats) in results
        {
            scores.extend(chunk_scores);
            stats.merge(&chunk_stats);
        }
        (scores, stats)
    }
}
