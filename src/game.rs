//! The game's state machine.
//!
//! [`GameController::step`] advances the game by exactly one tick: it
//! consumes that tick's [`InputEvents`] and writes what should be shown into a
//! [`DisplayMatrix`]. All state that survives between ticks lives in a single
//! [`GameSession`], so a game can be replayed deterministically from a list of
//! events.
//!
//! ```text
//! Init ──▶ Setting ──▶ Authoring ──▶ Memorize ──▶ Reproduce ──▶ Verdict
//!  ▲                                                               │
//!  └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every arrow is a confirm click. In `Verdict` the frames cycle on their
//! own, and previous / next jump to a frame and restart its cycle.

use crate::color::Color;
use crate::frame::{FrameSet, GRID_HEIGHT, GRID_WIDTH, MAX_FRAMES, MIN_FRAMES};
use crate::input::{Direction, InputEvents};
use crate::log::{debug, info};
use crate::matrix::DisplayMatrix;
use crate::wire::LedWire;

/// Color of the idle face.
pub const IDLE_COLOR: Color = Color::Magenta;

/// Color of the sequence length digit.
pub const SETTING_COLOR: Color = Color::Blue;

/// Color of the verdict checkmark.
pub const CORRECT_COLOR: Color = Color::Green;

/// Color of the verdict cross.
pub const WRONG_COLOR: Color = Color::Red;

/// Stand-in for a background cell under the cursor, so the cursor stays visible.
pub const CURSOR_COLOR: Color = Color::White;

/// Top-level game states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Idle face, waiting for a new game.
    #[default]
    Init,
    /// Choosing how many frames to play.
    Setting,
    /// Drawing the target frames.
    Authoring,
    /// Browsing the target frames to memorize them.
    Memorize,
    /// Redrawing the frames from memory.
    Reproduce,
    /// Cycling through target, attempt and result for each frame.
    Verdict,
}

impl GameState {
    /// `true` in the two states that run the frame editor.
    #[inline]
    pub fn is_editing(self) -> bool {
        matches!(self, GameState::Authoring | GameState::Reproduce)
    }
}

/// What the verdict shows for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VerdictPhase {
    /// The authored frame.
    #[default]
    Authored,
    /// The player's frame.
    Player,
    /// Checkmark or cross.
    Compare,
}

impl VerdictPhase {
    /// Following phase; `Compare` wraps to `Authored`.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            VerdictPhase::Authored => VerdictPhase::Player,
            VerdictPhase::Player => VerdictPhase::Compare,
            VerdictPhase::Compare => VerdictPhase::Authored,
        }
    }
}

/// Position being edited or viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Frame index, always below the sequence length.
    pub frame: usize,
    /// Column, always below [`GRID_WIDTH`].
    pub x: usize,
    /// Row, always below [`GRID_HEIGHT`].
    pub y: usize,
}

impl Cursor {
    /// Frame 0, cell (0, 0).
    pub const ORIGIN: Cursor = Cursor { frame: 0, x: 0, y: 0 };

    /// Horizontal move. Crossing the left or right edge steps to the
    /// neighbouring frame and wraps `x`; at the first or last frame the cursor
    /// stays put.
    pub fn move_horizontal(&mut self, direction: Direction, len: usize) {
        match direction {
            Direction::Negative => {
                if self.x > 0 {
                    self.x -= 1;
                } else if self.frame > 0 {
                    self.frame -= 1;
                    self.x = GRID_WIDTH - 1;
                }
            }
            Direction::Positive => {
                if self.x + 1 < GRID_WIDTH {
                    self.x += 1;
                } else if self.frame + 1 < len {
                    self.frame += 1;
                    self.x = 0;
                }
            }
            Direction::Neutral => {}
        }
    }

    /// Vertical move. Wraps around within the frame.
    pub fn move_vertical(&mut self, direction: Direction) {
        match direction {
            Direction::Negative => self.y = (self.y + GRID_HEIGHT - 1) % GRID_HEIGHT,
            Direction::Positive => self.y = (self.y + 1) % GRID_HEIGHT,
            Direction::Neutral => {}
        }
    }
}

/// Which sequence the frame editor works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Authored,
    Player,
}

/// Everything the game remembers between ticks.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    sequence_len: usize,
    cursor: Cursor,
    verdict_phase: VerdictPhase,
    blink_on: bool,
    authored: FrameSet,
    player: FrameSet,
}

impl GameSession {
    /// A fresh session in `Init`.
    pub fn new() -> Self {
        Self {
            state: GameState::Init,
            sequence_len: MIN_FRAMES,
            cursor: Cursor::ORIGIN,
            verdict_phase: VerdictPhase::Authored,
            blink_on: false,
            authored: FrameSet::new(),
            player: FrameSet::new(),
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of frames in play.
    #[inline]
    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    /// Cursor position. Meaningful in `Authoring`, `Memorize`, `Reproduce`
    /// (frame only) and `Verdict` (frame only).
    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current verdict phase.
    #[inline]
    pub fn verdict_phase(&self) -> VerdictPhase {
        self.verdict_phase
    }

    /// The frames to memorize.
    #[inline]
    pub fn authored(&self) -> &FrameSet {
        &self.authored
    }

    /// The player's reproduction.
    #[inline]
    pub fn player(&self) -> &FrameSet {
        &self.player
    }

    /// How many of the frames in play the player reproduced exactly.
    pub fn score(&self) -> usize {
        self.authored
            .frames()
            .iter()
            .zip(self.player.frames())
            .take(self.sequence_len)
            .filter(|(authored, player)| authored.matches(player))
            .count()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a [`GameSession`] one tick at a time.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    session: GameSession,
}

impl GameController {
    /// A controller in `Init`.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Resumes from an existing session.
    pub fn with_session(session: GameSession) -> Self {
        Self { session }
    }

    /// The session being driven.
    #[inline]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> GameState {
        self.session.state
    }

    /// Advances the game by one tick.
    pub fn step<W: LedWire>(&mut self, events: &InputEvents, display: &mut DisplayMatrix<W>) {
        match self.session.state {
            GameState::Init => self.step_init(events, display),
            GameState::Setting => self.step_setting(events, display),
            GameState::Authoring => {
                if events.confirm {
                    self.session.cursor.frame = 0;
                    self.enter(GameState::Memorize);
                } else {
                    self.edit(Target::Authored, events, display);
                }
            }
            GameState::Memorize => self.step_memorize(events, display),
            GameState::Reproduce => {
                if events.confirm {
                    self.session.verdict_phase = VerdictPhase::Authored;
                    self.session.cursor.frame = 0;
                    self.enter(GameState::Verdict);
                    info!(
                        "score {}/{}",
                        self.session.score(),
                        self.session.sequence_len
                    );
                } else {
                    self.edit(Target::Player, events, display);
                }
            }
            GameState::Verdict => self.step_verdict(events, display),
        }
    }

    fn enter(&mut self, next: GameState) {
        debug!("{:?} -> {:?}", self.session.state, next);
        self.session.state = next;
    }

    fn step_init<W: LedWire>(&mut self, events: &InputEvents, display: &mut DisplayMatrix<W>) {
        display.show_smile(IDLE_COLOR);

        if events.confirm {
            self.session.sequence_len = MIN_FRAMES;
            self.enter(GameState::Setting);
        }
    }

    fn step_setting<W: LedWire>(&mut self, events: &InputEvents, display: &mut DisplayMatrix<W>) {
        let session = &mut self.session;

        if events.confirm {
            session.authored.reset(session.sequence_len);
            session.cursor = Cursor::ORIGIN;
            self.enter(GameState::Authoring);
            return;
        }

        if events.wants_previous() && session.sequence_len > MIN_FRAMES {
            session.sequence_len -= 1;
        }
        if events.wants_next() && session.sequence_len < MAX_FRAMES {
            session.sequence_len += 1;
        }
        debug!("sequence length {}", session.sequence_len);

        display.show_digit(session.sequence_len, SETTING_COLOR);
    }

    fn step_memorize<W: LedWire>(&mut self, events: &InputEvents, display: &mut DisplayMatrix<W>) {
        let session = &mut self.session;

        if events.confirm {
            session.player.reset(session.sequence_len);
            session.cursor = Cursor::ORIGIN;
            self.enter(GameState::Reproduce);
            return;
        }

        if events.wants_previous() && session.cursor.frame > 0 {
            session.cursor.frame -= 1;
        }
        if events.wants_next() && session.cursor.frame + 1 < session.sequence_len {
            session.cursor.frame += 1;
        }

        if let Some(frame) = session.authored.get(session.cursor.frame) {
            display.set_all(frame);
        }
    }

    fn step_verdict<W: LedWire>(&mut self, events: &InputEvents, display: &mut DisplayMatrix<W>) {
        if events.confirm {
            self.enter(GameState::Init);
            return;
        }

        let session = &mut self.session;
        let before = session.cursor.frame;
        if events.wants_previous() && session.cursor.frame > 0 {
            session.cursor.frame -= 1;
        }
        if events.wants_next() && session.cursor.frame + 1 < session.sequence_len {
            session.cursor.frame += 1;
        }
        if session.cursor.frame != before {
            session.verdict_phase = VerdictPhase::Authored;
        }

        let index = session.cursor.frame;
        let (Some(authored), Some(player)) = (session.authored.get(index), session.player.get(index))
        else {
            return;
        };

        match session.verdict_phase {
            VerdictPhase::Authored => display.set_all(authored),
            VerdictPhase::Player => display.set_all(player),
            VerdictPhase::Compare if authored.matches(player) => display.show_check(CORRECT_COLOR),
            VerdictPhase::Compare => display.show_cross(WRONG_COLOR),
        }

        if session.verdict_phase == VerdictPhase::Compare {
            session.cursor.frame = (index + 1) % session.sequence_len;
        }
        session.verdict_phase = session.verdict_phase.next();
    }

    /// The frame editor shared by `Authoring` and `Reproduce`.
    fn edit<W: LedWire>(&mut self, target: Target, events: &InputEvents, display: &mut DisplayMatrix<W>) {
        let GameSession {
            sequence_len,
            cursor,
            blink_on,
            authored,
            player,
            ..
        } = &mut self.session;
        let frames = match target {
            Target::Authored => authored,
            Target::Player => player,
        };

        if let Some(direction) = events.x {
            cursor.move_horizontal(direction, *sequence_len);
        }
        if let Some(direction) = events.y {
            cursor.move_vertical(direction);
        }

        let Some(frame) = frames.get_mut(cursor.frame) else {
            return;
        };

        let mut color = frame.get(cursor.x, cursor.y).unwrap_or_default();
        if events.decrement {
            color = color.prev();
        }
        if events.increment {
            color = color.next();
        }
        frame.set(cursor.x, cursor.y, color);

        let overlay = match (*blink_on, color.is_background()) {
            (true, true) => CURSOR_COLOR,
            (true, false) => color,
            (false, _) => Color::Black,
        };
        let mut shown = *frame;
        shown.set(cursor.x, cursor.y, overlay);
        display.set_all(&shown);
        *blink_on = !*blink_on;
    }
}
