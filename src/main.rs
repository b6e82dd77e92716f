//! Terminal rhythm game runner (default binary).
//!
//! crossterm for input, the framebuffer renderer from `rhythm_master::term`
//! for output, and a fixed tick driven by wall-clock time fed into the game.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use rhythm_master::config::RunConfig;
use rhythm_master::core::{Flow, Game, GameSnapshot};
use rhythm_master::input::map_key_event;
use rhythm_master::{logging, runner};
use rhythm_master::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll timeout while no tick is scheduled (ready and game-over screens).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    config.validate()?;
    log::info!("starting with {:?}", config.game);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Game::new(config.game));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("game loop failed: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut game: Game) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = None;
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let size = Viewport::new(w, h);
        let resized = viewport != Some(size);
        if game.take_redraw_request() || resized {
            if resized {
                term.invalidate();
                viewport = Some(size);
            }
            game.snapshot_into(&mut snap);
            view.render_into(&snap, size, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = game
            .ticker()
            .until_next_ms()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(IDLE_POLL);

        let mut key = None;
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(ev) if ev.kind == KeyEventKind::Press => key = Some(map_key_event(ev)),
                Event::Resize(..) => viewport = None,
                _ => {}
            }
        }

        // Feed whole milliseconds only; the remainder carries into the next pass.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);
        if runner::step(&mut game, elapsed_ms, key) == Flow::Quit {
            return Ok(());
        }
    }
}
