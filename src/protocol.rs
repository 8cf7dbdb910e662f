use std::{io::BufRead, time::Duration};

use clap::{Parser, ValueEnum};
use itertools::Itertools;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
/// The move-choosing policies the server can run.
pub enum StrategyKind
{
    /// this crate's alpha-beta engine
    AlphaBeta,
    /// the minimax crate's negamax
    Reference,
}

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ServerOptions
{
    #[arg(short, long, default_value = "O")]
    /// mark played by the engine (X moves first)
    pub engine: Mark,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, default_value_t = 1)]
    /// number of search threads (0 for one per core)
    pub num_threads: usize,

    #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set)]
    /// whether the engine replies on its own after each move
    pub autoreply: bool,

    #[arg(short, long, default_value_t = 0)]
    /// pause before an automatic reply, in milliseconds
    pub delay_ms: u64,

    #[arg(short, long, value_enum, default_value_t = StrategyKind::AlphaBeta)]
    /// policy used to pick the engine's moves
    pub strategy: StrategyKind,
}

/// A line-oriented game server.
///
/// The server owns everything about the game in progress: the board, the move history, and whose turn it is.
/// The agent only ever sees a copy of the board.
pub struct Server
{
    options: ServerOptions,
    board:   Option<Board>,
    history: Vec<Move>,
    agent:   Box<dyn Agent>,
    running: bool,
}

impl Server
{
    /// Creates a new server with the given capabilities.
    pub fn new(mut options: ServerOptions) -> Self
    {
        options.num_threads = if options.num_threads == 0
        {
            std::thread::available_parallelism().map(|nzu| nzu.into()).unwrap_or(1)
        }
        else
        {
            options.num_threads
        };

        let engine_options = EngineOptions::new(options.engine).with_threads(options.num_threads);
        let agent: Box<dyn Agent> = match options.strategy
        {
            | StrategyKind::AlphaBeta => Box::new(Engine::new(engine_options)),
            | StrategyKind::Reference => Box::new(Reference::new(engine_options)),
        };

        Server {
            options,
            board: None,
            history: Vec::new(),
            agent,
            running: true,
        }
    }

    /// Executes a single command line, returning the full response including its `ok` footer.
    ///
    /// Recoverable errors become part of the response; only fatal errors are returned.
    pub fn execute(&mut self, line: &str) -> Result<String>
    {
        let args: Vec<&str> = line.split_whitespace().collect();
        let cmd = *args.first().unwrap_or(&"");
        let rest = args.get(1 ..).unwrap_or(&[]);

        self.apply(cmd, rest)
    }

    /// Whether the server is still accepting commands.
    pub fn running(&self) -> bool
    {
        self.running
    }

    /// Serves commands from stdin until it closes or the server is told to exit.
    pub fn run(&mut self) -> Result<()>
    {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines()
        {
            let line = line?;
            match self.execute(&line)
            {
                | Ok(response) => print!("{}", response),
                | Err(err) =>
                {
                    print!("{}", Self::err(&err));
                    return Err(err);
                }
            }

            if !self.running
            {
                break;
            }
        }
        Ok(())
    }
}

impl Server
{
    /// Matches the command to the server's functionality.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<String>
    {
        let result = match cmd
        {
            | "" => Ok(String::new()),
            | "analyze" => self.analyze(),
            | "bestmove" => self.best_move(),
            | "exit" | "quit" => self.exit(),
            | "info" => self.info(),
            | "line" => self.line(),
            | "newgame" => self.new_game(args),
            | "options" => self.options(),
            | "play" => self.play_move(args),
            | "state" => self.state(),
            | "undo" => self.undo(args),
            | "validmoves" => self.valid_moves(),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        };

        match result
        {
            | Ok(body) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                Ok(Self::ok(body))
            }
            | Err(err) => match err.fatal()
            {
                | true => Err(err),
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    Ok(Self::err(&err))
                }
            },
        }
    }

    /// Scores every move for the mark to move.
    fn analyze(&self) -> Result<String>
    {
        let board = self.ensure_in_progress()?;
        let engine = self.analyst(board);

        let scores = engine.analyze(board).iter().map(|(mv, score)| format!("{}:{}", mv, score)).join(";");
        Ok(format!("{}\n", scores))
    }

    /// Builds an alpha-beta engine for the mark to move, whatever agent the server is running.
    fn analyst(&self, board: &Board) -> Engine
    {
        let options = EngineOptions::new(board.to_move()).with_threads(self.options.num_threads);
        Engine::new(options)
    }

    /// Plays the engine's move if autoreply is on and it is the engine's turn.
    fn autoreply(&mut self) -> Result<Option<Move>>
    {
        if !self.options.autoreply
        {
            return Ok(None);
        }

        let mark = self.agent.mark();
        let board = *self.ensure_started()?;
        if board.outcome().is_terminal() || board.to_move() != mark
        {
            return Ok(None);
        }

        if self.options.delay_ms > 0
        {
            std::thread::sleep(Duration::from_millis(self.options.delay_ms));
        }

        let Some(mv) = self.agent.best_move(&board)
        else
        {
            return Ok(None);
        };

        if let Err(err) = self.ensure_started_mut()?.play(mv, mark)
        {
            let base = Error::new(Kind::InternalError, format!("The engine picked an illegal move {}.", mv));
            return Err(err.chain(base));
        }
        self.history.push(mv);

        log::info!("engine plays {} as {}", mv, mark);
        Ok(Some(mv))
    }

    /// Returns the agent's move in this position, without playing it.
    fn best_move(&mut self) -> Result<String>
    {
        let mark = self.agent.mark();
        let board = *self.ensure_in_progress()?;
        if board.to_move() != mark
        {
            return Err(Error::wrong_turn(board.to_move(), mark));
        }

        let mv = self.agent.best_move(&board).map(|mv| mv.to_string()).unwrap_or("none".into());
        Ok(format!("{}\n", mv))
    }

    /// Ensures there is a game in progress on this server.
    fn ensure_in_progress(&self) -> Result<&Board>
    {
        let board = self.ensure_started()?;
        match board.outcome()
        {
            | Outcome::InProgress => Ok(board),
            | outcome => Err(Error::game_over(outcome)),
        }
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started(&self) -> Result<&Board>
    {
        match self.board.as_ref()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started_mut(&mut self) -> Result<&mut Board>
    {
        match self.board.as_mut()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Formats an error for the stream.
    fn err(err: &Error) -> String
    {
        Self::ok(format!("err\n{}\n", err))
    }

    /// Stops the server after this command.
    fn exit(&mut self) -> Result<String>
    {
        self.running = false;
        Ok(String::new())
    }

    /// Prints the server's ID.
    fn info(&self) -> Result<String>
    {
        Ok(format!("id {} v{}\nengine {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), self.agent.mark()))
    }

    /// Prints the perfect-play continuation for the mark to move.
    fn line(&self) -> Result<String>
    {
        let board = self.ensure_in_progress()?;
        Ok(format!("{}\n", self.analyst(board).line(board)))
    }

    /// Creates a new game, optionally from a board string.
    fn new_game(&mut self, args: &[&str]) -> Result<String>
    {
        let board = match args.is_empty()
        {
            | true => Board::default(),
            | false => args.join(" ").parse::<Board>()?,
        };

        self.board = Some(board);
        self.history.clear();

        let reply = self.autoreply()?;
        self.report(reply)
    }

    /// Appends the ok footer to a response.
    fn ok(body: String) -> String
    {
        format!("{}ok\n", body)
    }

    /// Prints the active options.
    fn options(&self) -> Result<String>
    {
        let strategy = self.options.strategy.to_possible_value().map(|v| v.get_name().to_owned()).unwrap_or_default();
        Ok(format!(
            "engine {}\nthreads {}\nautoreply {}\ndelay-ms {}\nstrategy {}\n",
            self.agent.mark(),
            self.options.num_threads,
            self.options.autoreply,
            self.options.delay_ms,
            strategy
        ))
    }

    /// Plays the given move for the mark to move.
    fn play_move(&mut self, args: &[&str]) -> Result<String>
    {
        if args.is_empty()
        {
            return Err(Error::new(Kind::ParseError, "You must provide a move.".into()));
        }

        let mv = args.join(" ").parse::<Move>()?;
        let mark = self.ensure_in_progress()?.to_move();

        self.ensure_started_mut()?.play(mv, mark)?;
        self.history.push(mv);
        log::debug!("{} plays {}", mark, mv);

        let reply = self.autoreply()?;
        self.report(reply)
    }

    /// Prints the board, its state, and the engine's automatic reply if it made one.
    fn report(&self, reply: Option<Move>) -> Result<String>
    {
        let board = self.ensure_started()?;
        let reply = reply.map(|mv| format!("reply {}\n", mv)).unwrap_or_default();
        Ok(format!("{}{}\n{}", reply, board, self.state()?))
    }

    /// Prints the outcome of the game, with the winning line if there is one.
    fn state(&self) -> Result<String>
    {
        let board = self.ensure_started()?;
        let state = match board.classify()
        {
            | (outcome, Some(line)) => format!("{} {}\n", outcome, line),
            | (outcome, None) => format!("{}\n", outcome),
        };
        Ok(state)
    }

    /// Undoes the given number of moves on the current board.
    fn undo(&mut self, args: &[&str]) -> Result<String>
    {
        self.ensure_started()?;

        let mut n: usize = 1;
        if let Some(arg) = args.first()
        {
            let Ok(num) = arg.parse::<usize>()
            else
            {
                return Err(Error::for_parse::<usize>((*arg).into()));
            };
            n = num;
        }

        if n > self.history.len()
        {
            return Err(Error::too_many_undos(n, self.history.len()));
        }

        let undone = self.history.split_off(self.history.len() - n);
        let board = self.ensure_started_mut()?;
        for mv in undone.iter().rev()
        {
            board.clear(*mv);
        }

        self.report(None)
    }

    /// Gets all of the valid moves in this position.
    fn valid_moves(&self) -> Result<String>
    {
        let board = self.ensure_started()?;
        let movelist = match board.outcome().is_terminal()
        {
            | true => String::new(),
            | false => board.legal_moves().iter().join(";"),
        };
        let movelist = if movelist.is_empty() { "none".into() } else { movelist };

        Ok(format!("{}\n", movelist))
    }
}
