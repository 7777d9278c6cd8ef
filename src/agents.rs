/// Differing kinds of agents that can play the game
use crate::chess_errors::*;
use crate::game::Agent;
use crate::game_state::Game;
use crate::moves::Move;
use crate::pieces::GlyphStyle;
use crate::positions::Square;
use crate::utils::destinations;
use std::collections::VecDeque;
use std::io::{self, stdout, Read, Stdin, Write};
use text_io::try_read;

/// What a human typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Moves(Square),
    Board,
    Json,
    Help,
    Resign,
    Nothing,
}

const HELP: &str = "Commands:
  e2e4, a7a8q   play a move (promotion letter q, r, b or n)
  moves e2      list where the piece on e2 may go
  board         show the board again
  json          print the game as JSON
  resign        leave the game";

pub fn parse_command(line: &str) -> ChessResult<Command> {
    let mut words = line.split_whitespace();
    let cmd = match words.next() {
        None => return Ok(Command::Nothing),
        Some(w) => w.to_ascii_lowercase(),
    };
    match cmd.as_str() {
        "moves" => {
            let sq = words
                .next()
                .ok_or_else(|| ChessError::InvalidNotation(line.to_string()))?;
            Ok(Command::Moves(sq.parse()?))
        }
        "board" => Ok(Command::Board),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "resign" | "quit" | "exit" => Ok(Command::Resign),
        other => Ok(Command::Play(other.parse()?)),
    }
}

/// Plays whatever is typed on its input, stdin unless told otherwise.
/// Closing the input abandons the game.
pub struct HumanAgent<R: Read = Stdin> {
    style: GlyphStyle,
    input: R,
}

impl HumanAgent<Stdin> {
    pub fn new(style: GlyphStyle) -> Self {
        HumanAgent::with_input(style, io::stdin())
    }
}

impl<R: Read> HumanAgent<R> {
    pub fn with_input(style: GlyphStyle, input: R) -> Self {
        HumanAgent { style, input }
    }

    /// None once the input is exhausted. text_io alone reports EOF as an empty line.
    fn next_line(&mut self) -> Option<Result<String, text_io::Error>> {
        let mut consumed = false;
        let line: Result<String, _> = try_read!(
            "{}\n",
            (&mut self.input)
                .bytes()
                .map_while(Result::ok)
                .inspect(|_| consumed = true)
        );
        if consumed {
            Some(line)
        } else {
            None
        }
    }

    fn show(&self, game: &Game) {
        println!("\n{}", game.board().display_with(self.style));
        if let Ok(true) = game.is_in_check(game.side_to_move()) {
            println!("Check!");
        }
    }
}

impl<R: Read> Agent for HumanAgent<R> {
    fn play_move(&mut self, game: &Game) -> ChessResult<Option<Move>> {
        self.show(game);
        loop {
            print!("{} to move (help for commands): ", game.side_to_move());
            let _ = stdout().flush();
            let line = match self.next_line() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    println!("{}", e);
                    continue;
                }
                // Input closed
                None => return Ok(None),
            };

            let cmd = match parse_command(&line) {
                Ok(cmd) => cmd,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };
            match cmd {
                Command::Play(mv) => return Ok(Some(mv)),
                Command::Resign => return Ok(None),
                Command::Moves(sq) => match game.valid_moves(sq) {
                    None => println!("No piece on {}", sq),
                    Some(moves) if moves.is_empty() => println!("The piece on {} cannot move", sq),
                    Some(moves) => {
                        let targets: Vec<String> =
                            destinations(&moves).iter().map(|s| s.to_string()).collect();
                        println!("{}", targets.join(" "));
                    }
                },
                Command::Board => self.show(game),
                Command::Json => println!("{}", game.to_json()?),
                Command::Help => println!("{}", HELP),
                Command::Nothing => {}
            }
        }
    }

    fn rejected(&mut self, err: &ChessError) -> ChessResult<()> {
        println!("{}", err);
        Ok(())
    }
}

/// Replays a fixed list of moves, then abandons the game.
pub struct ScriptedAgent {
    moves: VecDeque<Move>,
}

impl ScriptedAgent {
    pub fn new(moves: Vec<Move>) -> Self {
        ScriptedAgent {
            moves: moves.into(),
        }
    }

    pub fn from_notation(moves: &[&str]) -> ChessResult<Self> {
        let moves = moves
            .iter()
            .map(|m| m.parse())
            .collect::<ChessResult<Vec<Move>>>()?;
        Ok(ScriptedAgent::new(moves))
    }
}

impl Agent for ScriptedAgent {
    fn play_move(&mut self, _game: &Game) -> ChessResult<Option<Move>> {
        Ok(self.moves.pop_front())
    }
}
