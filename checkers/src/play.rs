//! Line-based game between a human and an engine.

use crate::display::{render_board, status_line};
use crate::worker::EngineWorker;
use anyhow::{anyhow, Context, Result};
use checkers_agents::{Difficulty, Engine};
use checkers_core::{Color, GameState, Move, MoveParseError, MovePath, Variant};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

const HELP: &str = "Enter moves as visited squares, e.g. 5,0-4,1 or 4,3x2,1x0,3.
Commands: moves, new, undo, help, quit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(MovePath),
    Moves,
    New,
    Undo,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "moves" => Ok(Command::Moves),
            "new" => Ok(Command::New),
            "undo" => Ok(Command::Undo),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => other.parse().map(Command::Move),
        }
    }
}

pub struct Session {
    variant: Variant,
    human: Color,
    state: GameState,
    /// Positions before each human move, for undo.
    history: Vec<GameState>,
    worker: EngineWorker,
}

impl Session {
    pub fn new(variant: Variant, human: Color, engine: Engine) -> Self {
        Session {
            variant,
            human,
            state: GameState::new(variant),
            history: Vec::new(),
            worker: EngineWorker::spawn(engine),
        }
    }

    pub fn with_difficulty(variant: Variant, human: Color, difficulty: Difficulty) -> Self {
        Self::new(variant, human, Engine::new(difficulty))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn engine_to_move(&self) -> bool {
        !self.state.result().is_over() && self.state.current_color() != self.human
    }

    /// Finds the legal move a path refers to.
    ///
    /// A full path always works. A plain `from-to` is also accepted when
    /// exactly one legal move links those squares.
    pub fn resolve(&self, path: &MovePath) -> Option<Move> {
        let (&from, &target) = (path.0.first()?, path.0.last()?);
        let candidates = self.state.legal_moves_from(from);
        if let Some(mv) = candidates.iter().find(|mv| path.matches(mv)) {
            return Some(mv.clone());
        }

        let mut same_ends = candidates
            .iter()
            .filter(|mv| path.0.len() == 2 && mv.to() == target);
        match (same_ends.next(), same_ends.next()) {
            (Some(mv), None) => Some(mv.clone()),
            _ => None,
        }
    }

    pub fn play_human(&mut self, mv: &Move) {
        self.history.push(self.state.clone());
        self.state.apply_move(mv);
    }

    /// Lets the engine move if it is its turn.
    ///
    /// The session is synchronous: this blocks until the worker answers, so
    /// input is only read between engine moves. `new` and `undo` still bump
    /// the worker generation, which drops any reply left over from an
    /// abandoned request before the next one is answered.
    pub fn engine_turn(&mut self) -> Result<Option<Move>> {
        if !self.engine_to_move() {
            return Ok(None);
        }
        let generation = self.worker.request(self.state.clone());
        debug!(generation, "waiting for engine");
        let mv = self
            .worker
            .wait()
            .ok_or_else(|| anyhow!("engine worker stopped"))??;
        self.state.apply_move(&mv);
        Ok(Some(mv))
    }

    /// Takes back the last human move and the engine reply to it.
    pub fn undo(&mut self) -> bool {
        self.worker.invalidate();
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                true
            }
            None => false,
        }
    }

    pub fn restart(&mut self) {
        self.worker.invalidate();
        self.history.clear();
        self.state = GameState::new(self.variant);
    }
}

/// Runs the game loop until `quit` or the end of `input`.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> Result<()> {
    info!(
        variant = %session.variant,
        human = %session.human,
        engine = session.worker.name(),
        "game started"
    );
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    let mut redraw = true;
    loop {
        while let Some(mv) = session.engine_turn()? {
            writeln!(out, "Engine plays: {mv}")?;
            redraw = true;
        }
        if redraw {
            let state = session.state();
            writeln!(out, "\n{}{}", render_board(state.board()), status_line(state))?;
            redraw = false;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        debug!(?command, "input");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Moves => {
                for mv in session.state.iter_legal_moves() {
                    writeln!(out, "  {mv}")?;
                }
            }
            Command::New => {
                session.restart();
                writeln!(out, "New game")?;
                redraw = true;
            }
            Command::Undo => {
                if session.undo() {
                    redraw = true;
                } else {
                    writeln!(out, "Nothing to undo")?;
                }
            }
            Command::Move(path) => {
                if session.state.result().is_over() {
                    writeln!(out, "The game is over; type new or quit")?;
                } else if let Some(mv) = session.resolve(&path) {
                    session.play_human(&mv);
                    redraw = true;
                } else {
                    writeln!(out, "Not a legal move; type moves to list them")?;
                }
            }
        }
    }
    Ok(())
}
