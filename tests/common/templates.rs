use std::collections::HashSet;

use noughts::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Parses a board string, which the test assumes to be valid.
pub fn board(raw_string: &str) -> Board
{
    let possibly_board: Result<Board> = raw_string.parse::<Board>();
    assert!(possibly_board.is_ok(), "\tdue to {}", possibly_board.unwrap_err());
    possibly_board.unwrap()
}

/// Collects every board reachable from the empty board with X moving first, including finished ones.
pub fn reachable() -> Vec<Board>
{
    fn visit(board: Board, seen: &mut HashSet<Board>, out: &mut Vec<Board>)
    {
        if !seen.insert(board)
        {
            return;
        }
        out.push(board);

        if board.outcome().is_terminal()
        {
            return;
        }

        let mark = board.to_move();
        for mv in board.legal_moves()
        {
            let mut next = board;
            next.place(mv, mark);
            visit(next, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    visit(Board::default(), &mut seen, &mut out);
    out
}

/// Plain minimax with no pruning, scoring wins as `10 - depth` and losses as `depth - 10` for `mark`.
pub fn brute_force(board: &mut Board, mark: Mark, depth: i32, maximizing: bool) -> i32
{
    match board.outcome()
    {
        | Outcome::Win(winner) if winner == mark => return 10 - depth,
        | Outcome::Win(_) => return depth - 10,
        | Outcome::Draw => return 0,
        | Outcome::InProgress =>
        {}
    }

    let to_move = if maximizing { mark } else { mark.flip() };
    let scores = board
        .legal_moves()
        .into_iter()
        .map(|mv| {
            board.place(mv, to_move);
            let score = brute_force(board, mark, depth + 1, !maximizing);
            board.clear(mv);
            score
        })
        .collect::<Vec<i32>>();

    if maximizing
    {
        scores.into_iter().max().unwrap()
    }
    else
    {
        scores.into_iter().min().unwrap()
    }
}

/// The brute-force score of every root move for `mark`.
pub fn brute_force_root(board: &Board, mark: Mark) -> Vec<(Move, i32)>
{
    let mut scratch = *board;
    board
        .legal_moves()
        .into_iter()
        .map(|mv| {
            scratch.place(mv, mark);
            let score = brute_force(&mut scratch, mark, 0, false);
            scratch.clear(mv);
            (mv, score)
        })
        .collect()
}

/// Alternates two agents from the given board until the game ends, and returns the final board.
pub fn play_out(x: &mut dyn Agent, o: &mut dyn Agent, start: Board) -> Board
{
    assert_eq!(x.mark(), Mark::X);
    assert_eq!(o.mark(), Mark::O);

    let mut board = start;
    while !board.outcome().is_terminal()
    {
        let agent: &mut dyn Agent = if board.to_move() == Mark::X { &mut *x } else { &mut *o };
        let mv = agent.best_move(&board).expect("an unfinished board has a legal move");
        board.play(mv, agent.mark()).expect("agents only pick empty cells");
    }
    board
}

/// An agent that picks uniformly among the legal moves.
pub struct RandomAgent
{
    mark: Mark,
    rng:  StdRng,
}

impl RandomAgent
{
    pub fn seeded(mark: Mark, seed: u64) -> Self
    {
        RandomAgent {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent
{
    fn best_move(&mut self, board: &Board) -> Option<Move>
    {
        board.legal_moves().choose(&mut self.rng).copied()
    }

    fn mark(&self) -> Mark
    {
        self.mark
    }

    fn new(options: EngineOptions) -> Self
    {
        RandomAgent::seeded(options.mark, 0)
    }
}
