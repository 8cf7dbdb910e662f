mod common;
use clap::Parser;
use common::*;
use noughts::prelude::*;

fn server(args: &[&str]) -> Server
{
    let argv = std::iter::once("noughts").chain(args.iter().copied());
    Server::new(ServerOptions::parse_from(argv))
}

#[cfg(test)]
mod protocol
{
    use super::*;

    #[test]
    fn info()
    {
        let _setup = setup::setup();
        let response = server(&[]).execute("info").unwrap();
        assert!(response.starts_with("id noughts v"), "{}", response);
        assert!(response.ends_with("engine O\nok\n"), "{}", response);
    }

    #[test]
    fn commands_before_newgame()
    {
        let _setup = setup::setup();
        let mut server = server(&[]);
        for cmd in ["play 0,0", "bestmove", "state", "validmoves", "undo"]
        {
            let response = server.execute(cmd).unwrap();
            assert_eq!(response, "err\nGameNotStarted\nok\n", "{}", cmd);
        }
    }

    #[test]
    fn unknown_command()
    {
        let _setup = setup::setup();
        let response = server(&[]).execute("resign").unwrap();
        assert_eq!(response, "err\nUnrecognizedCommand: resign\nok\n");
    }

    #[test]
    fn engine_replies_to_the_center()
    {
        let _setup = setup::setup();
        let mut server = server(&[]);
        assert_eq!(server.execute("newgame").unwrap(), ".../.../...\nInProgress\nok\n");
        assert_eq!(server.execute("play 1,1").unwrap(), "reply 0,0\nO../.X./...\nInProgress\nok\n");
        assert_eq!(server.execute("validmoves").unwrap(), "0,1;0,2;1,0;1,2;2,0;2,1;2,2\nok\n");
    }

    #[test]
    fn engine_moves_first_as_x()
    {
        let _setup = setup::setup();
        let mut server = server(&["--engine", "X"]);
        assert_eq!(server.execute("newgame").unwrap(), "reply 0,0\nX../.../...\nInProgress\nok\n");
    }

    #[test]
    fn engine_takes_the_win_from_a_loaded_board()
    {
        let _setup = setup::setup();
        let mut server = server(&[]);
        assert_eq!(server.execute("newgame XX./OO./X..").unwrap(), "reply 1,2\nXX./OOO/X..\nOWins 1,0-1,2\nok\n");

        let response = server.execute("play 2,2").unwrap();
        assert!(response.starts_with("err\nGameOver"), "{}", response);
        assert_eq!(server.execute("validmoves").unwrap(), "none\nok\n");
    }

    #[test]
    fn human_win_ends_the_game()
    {
        let _setup = setup::setup();
        let mut server = server(&[]);
        server.execute("newgame XX./OO./...").unwrap();
        assert_eq!(server.execute("play 0,2").unwrap(), "XXX/OO./...\nXWins 0,0-0,2\nok\n");
        assert_eq!(server.execute("state").unwrap(), "XWins 0,0-0,2\nok\n");

        let response = server.execute("bestmove").unwrap();
        assert!(response.starts_with("err\nGameOver"), "{}", response);
    }

    #[test]
    fn bestmove_without_autoreply()
    {
        let _setup = setup::setup();
        let mut server = server(&["--engine", "X", "--autoreply", "false"]);
        assert_eq!(server.execute("newgame").unwrap(), ".../.../...\nInProgress\nok\n");
        assert_eq!(server.execute("bestmove").unwrap(), "0,0\nok\n");

        server.execute("play 0,0").unwrap();
        let response = server.execute("bestmove").unwrap();
        assert!(response.starts_with("err\nWrongTurn"), "{}", response);
    }

    #[test]
    fn reference_strategy_plays_legal_moves()
    {
        let _setup = setup::setup();
        let mut server = server(&["--strategy", "reference"]);
        server.execute("newgame").unwrap();

        let response = server.execute("play 1,1").unwrap();
        assert!(response.starts_with("reply "), "{}", response);
        assert!(response.ends_with("InProgress\nok\n"), "{}", response);
        assert!(server.execute("options").unwrap().contains("strategy reference\n"));
    }

    #[test]
    fn illegal_moves()
    {
        let _setup = setup::setup();
        let mut server = server(&["--autoreply", "false"]);
        server.execute("newgame").unwrap();
        server.execute("play 0,0").unwrap();

        for (cmd, kind) in [("play 0,0", "InvalidMove"), ("play 3,3", "InvalidMove"), ("play x", "ParseError"), ("play", "ParseError")]
        {
            let response = server.execute(cmd).unwrap();
            assert!(response.starts_with(&format!("err\n{}", kind)), "{}: {}", cmd, response);
        }
        assert_eq!(server.execute("state").unwrap(), "InProgress\nok\n");
    }

    #[test]
    fn undo_takes_back_both_moves()
    {
        let _setup = setup::setup();
        let mut server = server(&[]);
        server.execute("newgame").unwrap();
        server.execute("play 1,1").unwrap();

        assert_eq!(server.execute("undo 2").unwrap(), ".../.../...\nInProgress\nok\n");

        let response = server.execute("undo").unwrap();
        assert!(response.starts_with("err\nTooManyUndos"), "{}", response);
        let response = server.execute("undo two").unwrap();
        assert!(response.starts_with("err\nParseError"), "{}", response);
    }

    #[test]
    fn analysis_is_for_the_mark_to_move()
    {
        let _setup = setup::setup();
        let mut server = server(&["--autoreply", "false"]);
        server.execute("newgame XX./OO./X..").unwrap();

        let response = server.execute("analyze").unwrap();
        assert!(response.contains("1,2:10"), "{}", response);
        assert_eq!(server.execute("line").unwrap(), "1,2 (OWins, score 10)\nok\n");
    }

    #[test]
    fn malformed_newgame_keeps_nothing()
    {
        let _setup = setup::setup();
        let mut server = server(&[]);
        for raw in ["XXX/X../...", "O../.../...", "XXX/OO./O.."]
        {
            let response = server.execute(&format!("newgame {}", raw)).unwrap();
            assert!(response.starts_with("err\nInvalidState"), "{}: {}", raw, response);
            assert_eq!(server.execute("state").unwrap(), "err\nGameNotStarted\nok\n");
        }
    }

    #[test]
    fn players_alternate_from_a_loaded_board()
    {
        let _setup = setup::setup();
        let mut server = server(&[]);
        assert_eq!(server.execute("newgame X../.../...").unwrap(), "reply 1,1\nX../.O./...\nInProgress\nok\n");

        let response = server.execute("play 0,1").unwrap();
        assert!(response.starts_with("reply "), "{}", response);
        let board = response.lines().nth(1).unwrap().parse::<Board>().unwrap();
        assert_eq!(board.count(Mark::X), board.count(Mark::O));
    }

    #[test]
    fn exit_stops_the_server()
    {
        let _setup = setup::setup();
        let mut server = server(&[]);
        assert!(server.running());
        assert_eq!(server.execute("exit").unwrap(), "ok\n");
        assert!(!server.running());
    }
}
