//! Playback controller for a move list.
//!
//! The controller owns a private working copy of the starting cube and walks
//! the move list forward and backward. Auto-play is modeled as a single
//! optional deadline: `play` arms it, every other transport operation clears
//! it before touching state, and [`Playback::tick`] only fires when it is
//! armed and due. There is never more than one pending tick.
//!
//! Time is passed in explicitly, so the controller can be driven by a tokio
//! task (see [`crate::session`]) or stepped deterministically in tests.

use cubist_cube::{parse, Cubestring, Move};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, trace, warn};

use crate::config::PlaybackConfig;
use crate::error::{Error, Result};
use crate::events::{PlaybackEvent, PlaybackState, PlaybackStatus, StepDirection};
use crate::solver::Solver;
use crate::surface::{Frame, Surface};

/// Transport controls, as sent by UI triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    Play,
    Pause,
    StepForward,
    StepBackward,
    Reset,
}

/// A playback session over one move list.
pub struct Playback<S: Surface> {
    config: PlaybackConfig,
    origin: Cubestring,
    working: Cubestring,
    moves: Vec<String>,
    cursor: usize,
    state: PlaybackState,
    pending_tick: Option<Instant>,
    surface: S,
}

impl<S: Surface> Playback<S> {
    /// Open a session.
    ///
    /// The starting cube is copied; the caller's value is never touched again.
    /// Move tokens are kept as given and parsed one at a time as they are
    /// applied.
    pub fn start<I, T>(
        moves: I,
        starting: &Cubestring,
        mut surface: S,
        config: PlaybackConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();
        if moves.is_empty() {
            return Err(Error::EmptyMoveList);
        }

        let working = *starting;
        let status = PlaybackStatus {
            cursor: 0,
            total_moves: moves.len(),
            state: PlaybackState::Idle,
        };
        surface.open(&Frame {
            cube: working,
            status,
        });

        let mut playback = Self {
            config,
            origin: working,
            working,
            moves,
            cursor: 0,
            state: PlaybackState::Idle,
            pending_tick: None,
            surface,
        };
        playback.emit(PlaybackEvent::Started { status });
        Ok(playback)
    }

    /// Open a session from cubestring text, rejecting anything that is not
    /// exactly 54 facelet symbols.
    pub fn start_from_str<I, T>(
        moves: I,
        starting: &str,
        surface: S,
        config: PlaybackConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let starting: Cubestring = starting.parse()?;
        Self::start(moves, &starting, surface, config)
    }

    /// Ask a solver for a solution and open a session on it.
    pub fn from_solver<V>(
        solver: &V,
        cube: &Cubestring,
        surface: S,
        config: PlaybackConfig,
    ) -> Result<Self>
    where
        V: Solver + ?Sized,
    {
        cube.validate()?;
        if cube.is_solved() {
            return Err(Error::AlreadySolved);
        }
        let solution = solver.solve(cube)?;
        let tokens: Vec<&str> = solution.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(Error::AlreadySolved);
        }
        Self::start(tokens, cube, surface, config)
    }

    /// Number of moves applied so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of moves in the list.
    pub fn total_moves(&self) -> usize {
        self.moves.len()
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Snapshot of the playback position.
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            cursor: self.cursor,
            total_moves: self.moves.len(),
            state: self.state,
        }
    }

    /// The working cube with `cursor` moves applied.
    pub fn working(&self) -> &Cubestring {
        &self.working
    }

    /// The cube the session started from.
    pub fn origin(&self) -> &Cubestring {
        &self.origin
    }

    /// The move tokens, as supplied.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// The token that the next forward step would apply.
    pub fn current_move(&self) -> Option<&str> {
        self.moves.get(self.cursor).map(String::as_str)
    }

    /// When the pending auto-play tick is due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_tick
    }

    /// What the surface is currently showing.
    pub fn frame(&self) -> Frame {
        Frame {
            cube: self.working,
            status: self.status(),
        }
    }

    /// Dispatch a transport control. Returns whether anything changed.
    pub fn apply_transport(&mut self, transport: Transport, now: Instant) -> bool {
        match transport {
            Transport::Play => self.play(now),
            Transport::Pause => self.pause(),
            Transport::StepForward => self.step_forward(),
            Transport::StepBackward => self.step_backward(),
            Transport::Reset => self.reset(),
        }
    }

    /// Start auto-play. The first move is applied one move duration from `now`.
    ///
    /// No-op at the end of the list or when already playing.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.at_end() || self.state == PlaybackState::Playing {
            return false;
        }
        self.state = PlaybackState::Playing;
        self.schedule(now);
        self.emit(PlaybackEvent::Playing {
            status: self.status(),
        });
        true
    }

    /// Stop auto-play, cancelling the pending tick.
    pub fn pause(&mut self) -> bool {
        if self.state == PlaybackState::Paused {
            return false;
        }
        self.halt(None);
        true
    }

    /// Fire the pending tick if it is due: apply one move and re-arm unless
    /// the list is exhausted.
    ///
    /// The next deadline counts from the one that just fired, not from `now`,
    /// so a late tick does not push back the rest of the list.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match self.pending_tick {
            Some(due) if due <= now => due,
            _ => return false,
        };
        self.pending_tick = None;

        if !self.advance() {
            return false;
        }
        if self.state == PlaybackState::Playing {
            self.schedule(due);
        } else {
            debug!(total = self.moves.len(), "auto-play reached the end");
        }
        true
    }

    /// Apply one move. Pauses auto-play first.
    ///
    /// No-op at the end of the list.
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.interrupt();
        self.advance()
    }

    /// Take back one move. Pauses auto-play first.
    ///
    /// The working cube is rebuilt by replaying the list from the start, which
    /// costs O(cursor) turns per step. That is fine for solver-length lists;
    /// much longer lists would want per-move inverses instead.
    pub fn step_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.interrupt();

        let target = self.cursor - 1;
        let rebuilt = self.replay(target).and_then(|cube| {
            let undone = parse(&self.moves[target])?;
            Ok((cube, undone))
        });
        let (cube, undone) = match rebuilt {
            Ok(pair) => pair,
            Err(err) => {
                self.fault(target, &err);
                return false;
            }
        };

        self.working = cube;
        self.cursor = target;
        self.settle();
        self.render();
        self.emit(PlaybackEvent::Step {
            status: self.status(),
            direction: StepDirection::Backward,
            notation: undone,
        });
        true
    }

    /// Return to the starting cube.
    ///
    /// No-op when already idle at the beginning of the list.
    pub fn reset(&mut self) -> bool {
        if self.cursor == 0 && self.state == PlaybackState::Idle {
            return false;
        }
        self.pending_tick = None;
        self.cursor = 0;
        self.working = self.origin;
        self.state = PlaybackState::Idle;
        self.render();
        self.emit(PlaybackEvent::Reset {
            status: self.status(),
        });
        true
    }

    /// Tear the session down and hand the surface back.
    pub fn close(mut self) -> S {
        self.pending_tick = None;
        self.state = PlaybackState::Idle;
        self.emit(PlaybackEvent::Closed {
            status: self.status(),
        });
        self.surface.teardown();
        self.surface
    }

    fn at_end(&self) -> bool {
        self.cursor == self.moves.len()
    }

    fn schedule(&mut self, from: Instant) {
        let due = from + self.config.move_duration;
        trace!(cursor = self.cursor, ?due, "tick scheduled");
        self.pending_tick = Some(due);
    }

    /// Pause before a manual step if auto-play is running.
    fn interrupt(&mut self) {
        if self.state == PlaybackState::Playing {
            self.halt(None);
        }
    }

    fn halt(&mut self, fault: Option<String>) {
        self.pending_tick = None;
        self.state = PlaybackState::Paused;
        self.emit(PlaybackEvent::Paused {
            status: self.status(),
            fault,
        });
    }

    /// Settled state after a manual step: idle at either end, paused between.
    fn settle(&mut self) {
        self.state = if self.cursor == 0 || self.at_end() {
            PlaybackState::Idle
        } else {
            PlaybackState::Paused
        };
    }

    /// Parse and apply the move under the cursor.
    fn advance(&mut self) -> bool {
        let token = &self.moves[self.cursor];
        let mv = match parse(token) {
            Ok(mv) => mv,
            Err(err) => {
                self.fault(self.cursor, &err.into());
                return false;
            }
        };

        self.working = self.working.apply(mv);
        self.cursor += 1;
        if self.state != PlaybackState::Playing || self.at_end() {
            self.settle();
        }
        self.render();
        self.emit(PlaybackEvent::Step {
            status: self.status(),
            direction: StepDirection::Forward,
            notation: mv,
        });
        true
    }

    /// The starting cube with the first `count` moves applied.
    fn replay(&self, count: usize) -> Result<Cubestring> {
        let mut cube = self.origin;
        for token in &self.moves[..count] {
            let mv: Move = parse(token)?;
            cube = cube.apply(mv);
        }
        Ok(cube)
    }

    fn fault(&mut self, index: usize, err: &Error) {
        warn!(index, token = %self.moves[index], error = %err, "playback halted on bad move");
        self.halt(Some(err.to_string()));
    }

    fn render(&mut self) {
        let frame = self.frame();
        self.surface.render(&frame);
    }

    fn emit(&mut self, event: PlaybackEvent) {
        let status = event.status();
        debug!(
            event = event.name(),
            cursor = status.cursor,
            total = status.total_moves,
            state = ?status.state,
            "playback transition"
        );
        self.surface.notify(&event);
    }
}
