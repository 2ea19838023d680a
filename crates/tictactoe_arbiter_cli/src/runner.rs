//! Drives an arbiter from scripts or from a terminal.

use crate::script::MatchScript;
use std::io::{BufRead, Write};
use tictactoe_arbiter::{Arbiter, ErrorCode, GameEngine, GameId, GameRecord, MemoryStore, Move, PlayerId, Tile};
use tracing::{debug, info, instrument, warn};

/// A move the arbiter refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the move in the script, starting at 0.
    pub index: usize,
    /// The refused move.
    pub action: Move,
    /// Wire code, if the arbiter assigned one.
    pub code: Option<ErrorCode>,
    /// Human-readable reason.
    pub message: String,
}

/// Outcome of a replay.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// The record after the last scripted move.
    pub record: GameRecord,
    /// Number of accepted moves.
    pub accepted: usize,
    /// Refused moves in script order.
    pub rejected: Vec<Rejection>,
}

/// Plays every scripted move against a fresh in-memory arbiter.
///
/// Rejected moves are reported and skipped, the way a client would see
/// them; only store failures abort the replay.
#[instrument(skip_all, fields(game_id = %script.game_id()))]
pub fn replay<W: Write>(script: &MatchScript, out: &mut W, show_boards: bool) -> anyhow::Result<ReplayReport> {
    let arbiter = Arbiter::new(MemoryStore::new());
    let id = script.id();
    let (initiator, opponent) = script.players();
    arbiter.setup_game(id.clone(), initiator, opponent)?;

    let mut accepted = 0;
    let mut rejected = Vec::new();
    for (index, scripted) in script.moves().iter().enumerate() {
        let action = scripted.to_move();
        match arbiter.play_move(&id, action.player(), action.tile()) {
            Ok(record) => {
                accepted += 1;
                writeln!(out, "#{} {}: accepted, {}", index + 1, action, record.status())?;
                if show_boards {
                    writeln!(out, "{}\n", record.board())?;
                }
            }
            Err(err) => {
                let code = err.code();
                if code.is_none() {
                    return Err(err.into());
                }
                writeln!(out, "#{} {}: rejected, {}", index + 1, action, describe(&err, code))?;
                rejected.push(Rejection {
                    index,
                    action,
                    code,
                    message: err.to_string(),
                });
            }
        }
    }

    let record = arbiter.fetch(&id)?;
    info!(accepted, rejected = rejected.len(), status = %record.status(), "Replay finished");
    Ok(ReplayReport {
        record,
        accepted,
        rejected,
    })
}

fn describe(err: &impl std::fmt::Display, code: Option<ErrorCode>) -> String {
    match code {
        Some(code) => format!("{} [{}]", err, code),
        None => err.to_string(),
    }
}

/// What a line of hot-seat input asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place on a tile.
    Place(Tile),
    /// Leave the game.
    Quit,
}

/// Parses `row column`, `row,column` or `quit`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Some(Command::Quit);
    }
    let mut parts = line.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Place(Tile::new(row, column)))
}

/// Local two-player game on one terminal.
#[derive(Debug)]
pub struct HotSeat {
    arbiter: Arbiter<MemoryStore>,
    id: GameId,
}

impl HotSeat {
    /// Sets up a game between the two identities.
    #[instrument(skip_all, fields(initiator = %initiator, opponent = %opponent))]
    pub fn new(initiator: PlayerId, opponent: PlayerId) -> anyhow::Result<Self> {
        let arbiter = Arbiter::new(MemoryStore::new());
        let id = GameId::new("hot-seat");
        arbiter.setup_game(id.clone(), initiator, opponent)?;
        Ok(Self { arbiter, id })
    }

    /// Reads moves from `input` until the game ends, input runs out or the
    /// players quit. Returns the last record.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> anyhow::Result<GameRecord> {
        let mut record = self.arbiter.fetch(&self.id)?;
        writeln!(out, "{}\n", record.board())?;
        prompt(&record, out)?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Some(Command::Quit) => {
                    debug!("Players quit");
                    break;
                }
                Some(Command::Place(tile)) => {
                    let actor = record.current_player().clone();
                    match self.arbiter.play_move(&self.id, &actor, tile) {
                        Ok(next) => {
                            record = next;
                            writeln!(out, "{}\n", record.board())?;
                        }
                        Err(err) => {
                            if err.code().is_none() {
                                return Err(err.into());
                            }
                            warn!(error = %err, "Move refused");
                            writeln!(out, "Refused: {}", describe(&err, err.code()))?;
                        }
                    }
                }
                None => writeln!(out, "Enter a move as `row column` (0-2), or `quit`.")?,
            }

            if !record.is_active() {
                break;
            }
            prompt(&record, out)?;
        }

        writeln!(out, "Game {}.", record.status())?;
        Ok(record)
    }
}

fn prompt<W: Write>(record: &GameRecord, out: &mut W) -> std::io::Result<()> {
    let open = GameEngine::legal_tiles(record).len();
    writeln!(
        out,
        "Turn {}: {} ({}) to move, {} open tiles",
        record.turn(),
        record.current_player(),
        record.current_sign(),
        open
    )
}
