//! Game controller - owns every entity and counter and runs the state machine
//!
//! The controller is driven from two directions:
//!
//! - [`Game::update`] once per fixed tick (or [`Game::pump`] with elapsed time)
//! - [`Game::handle_input`] for every key press
//!
//! Both run on the caller's thread; nothing here blocks or performs I/O.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::feedback::FeedbackText;
use crate::judge::{judge, select_target, Judgment};
use crate::overlay::MessageOverlay;
use crate::scoreboard::Scoreboard;
use crate::snapshot::GameSnapshot;
use crate::symbol::FallingSymbol;
use crate::ticker::Ticker;
use crate::types::{GamePhase, Glyph, Key};

/// What the runner should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The game loop controller.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    phase: GamePhase,
    /// Active symbols in spawn order (oldest first).
    symbols: Vec<FallingSymbol>,
    feedback: Vec<FeedbackText>,
    scoreboard: Scoreboard,
    overlay: MessageOverlay,
    ticker: Ticker,
    rng: Pcg32,
    spawn_timer_ms: u32,
    next_symbol_id: u32,
    /// Increments on every return to the ready screen.
    game_number: u32,
    last_judgment: Option<Judgment>,
    redraw_requested: bool,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: GamePhase::Ready,
            symbols: Vec::new(),
            feedback: Vec::new(),
            scoreboard: Scoreboard::new(config.total_spawns),
            overlay: MessageOverlay::new(),
            ticker: Ticker::new(config.tick_ms),
            rng: Pcg32::seed_from_u64(config.seed),
            spawn_timer_ms: 0,
            next_symbol_id: 0,
            game_number: 0,
            last_judgment: None,
            redraw_requested: true,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn combo(&self) -> u32 {
        self.scoreboard.combo()
    }

    pub fn spawns_remaining(&self) -> u32 {
        self.scoreboard.spawns_remaining()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn symbols(&self) -> &[FallingSymbol] {
        &self.symbols
    }

    pub fn feedback_texts(&self) -> &[FeedbackText] {
        &self.feedback
    }

    pub fn overlay(&self) -> &MessageOverlay {
        &self.overlay
    }

    /// Direct access for custom overlay messages.
    pub fn overlay_mut(&mut self) -> &mut MessageOverlay {
        self.redraw_requested = true;
        &mut self.overlay
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    /// Take and clear the most recent judgment.
    pub fn take_last_judgment(&mut self) -> Option<Judgment> {
        self.last_judgment.take()
    }

    /// Returns true once per redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Handle one key press.
    pub fn handle_input(&mut self, key: Key) -> Flow {
        match (self.phase, key) {
            (_, Key::Quit) => {
                log::info!("quit requested in {} state", self.phase.as_str());
                return Flow::Quit;
            }
            (GamePhase::Playing, Key::Char(c))
                if FallingSymbol::is_valid_key(c, self.config.accept_any_key) =>
            {
                if !self.symbols.is_empty() {
                    self.judge_press(c);
                }
            }
            // Space is a character like any other once every key is accepted.
            (GamePhase::Playing, Key::Start) if self.config.accept_any_key => {
                if !self.symbols.is_empty() {
                    self.judge_press(' ');
                }
            }
            (GamePhase::Ready, Key::Start) => self.start(),
            (GamePhase::GameEnded, Key::Start) => self.return_to_ready(),
            _ => {}
        }
        Flow::Continue
    }

    /// Advance the ticker by `elapsed_ms` and run every tick that became due.
    ///
    /// Returns the number of updates run.
    pub fn pump(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.ticker.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            if !self.ticker.is_running() {
                break;
            }
            self.update();
            ran += 1;
        }
        ran
    }

    /// One fixed tick. Only `Playing` changes state; a redraw is always
    /// requested.
    pub fn update(&mut self) {
        if self.phase == GamePhase::Playing {
            self.update_spawn_timer();
            self.update_symbols();
            self.update_feedback();

            if self.scoreboard.budget_exhausted() && self.symbols.is_empty() {
                self.end_game();
            }
        }
        self.redraw_requested = true;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_from(
            self.phase,
            &self.scoreboard,
            self.game_number,
            self.config.playfield,
            &self.symbols,
            &self.feedback,
            &self.overlay,
        );
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn start(&mut self) {
        self.phase = GamePhase::Playing;
        self.ticker.start();
        self.redraw_requested = true;
        log::info!(
            "game {} started: {} spawns, seed {}",
            self.game_number,
            self.scoreboard.total_spawns(),
            self.config.seed
        );
    }

    fn end_game(&mut self) {
        self.phase = GamePhase::GameEnded;
        self.feedback.clear();
        self.overlay.show_game_over(self.scoreboard.score());
        self.ticker.stop();
        log::info!(
            "game {} ended with score {}",
            self.game_number,
            self.scoreboard.score()
        );
    }

    fn return_to_ready(&mut self) {
        self.phase = GamePhase::Ready;
        self.scoreboard.reset();
        self.symbols.clear();
        self.feedback.clear();
        self.spawn_timer_ms = 0;
        self.next_symbol_id = 0;
        self.last_judgment = None;
        self.game_number = self.game_number.wrapping_add(1);
        self.overlay.show_start();
        self.redraw_requested = true;
        log::info!("back to ready screen");
    }

    fn update_spawn_timer(&mut self) {
        self.spawn_timer_ms = self.spawn_timer_ms.saturating_add(self.config.tick_ms);
        if self.spawn_timer_ms >= self.config.spawn_interval_ms {
            self.spawn_symbol();
            self.spawn_timer_ms = 0;
        }
    }

    fn spawn_symbol(&mut self) {
        if !self.scoreboard.take_spawn() {
            return;
        }

        let playfield = self.config.playfield;
        let columns = playfield.spawn_columns();
        let col = if columns == 0 {
            0
        } else {
            self.rng.random_range(0..columns)
        };
        let glyph = Glyph::ALL[self.rng.random_range(0..Glyph::ALL.len())];
        let pos = playfield.spawn_position(col);

        self.symbols.push(FallingSymbol::new(
            self.next_symbol_id,
            pos,
            playfield.symbol_size,
            glyph,
        ));
        self.next_symbol_id = self.next_symbol_id.wrapping_add(1);
        log::debug!(
            "spawned {:?} at x={} ({} left)",
            glyph,
            pos.x,
            self.scoreboard.spawns_remaining()
        );
    }

    fn update_symbols(&mut self) {
        let dy = self.config.fall_per_tick();
        let bottom = self.config.playfield.height;

        for symbol in &mut self.symbols {
            symbol.advance(dy);
        }

        let before = self.symbols.len();
        self.symbols.retain(|s| s.y() <= bottom);
        let missed = before - self.symbols.len();
        if missed > 0 {
            self.scoreboard.break_combo();
            log::debug!("{} symbol(s) fell through unjudged", missed);
        }
    }

    fn update_feedback(&mut self) {
        let dt = self.config.tick_ms;
        for text in &mut self.feedback {
            text.decay(dt);
        }
        self.feedback.retain(|t| !t.is_expired());
    }

    fn judge_press(&mut self, key: char) {
        let playfield = self.config.playfield;
        let Some(index) = select_target(&self.symbols, &playfield) else {
            return;
        };

        let target = self.symbols.remove(index);
        let judgment = judge(&target, key, self.scoreboard.combo(), &playfield);
        self.scoreboard.apply(&judgment);

        self.feedback.push(FeedbackText::new(
            judgment.message(),
            target.position(),
            judgment.verdict.color(),
            self.config.feedback_lifetime_ms,
        ));
        self.last_judgment = Some(judgment);
        self.redraw_requested = true;

        log::debug!(
            "key {} on {:?} at y={}: {:?} (+{}, combo {})",
            key,
            target.glyph(),
            target.y(),
            judgment.verdict,
            judgment.points,
            self.scoreboard.combo()
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
