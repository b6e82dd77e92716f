//! Integration tests for the game loop, driven through the public facade.

use rhythm_master::core::{Flow, Game, GameConfig, MAX_CATCHUP_TICKS};
use rhythm_master::types::{GamePhase, Glyph, Key, Verdict};

/// One symbol, spawned on the first tick, falling 10 px per 30 ms tick.
fn one_symbol() -> GameConfig {
    GameConfig {
        total_spawns: 1,
        tick_ms: 30,
        spawn_interval_ms: 30,
        speed_factor: 3,
        ..GameConfig::default()
    }
    .with_seed(99)
}

fn started(config: GameConfig) -> Game {
    let mut game = Game::new(config);
    assert_eq!(game.handle_input(Key::Start), Flow::Continue);
    game
}

/// Run `ticks` ticks through the ticker, as the binary does.
fn run_ticks(game: &mut Game, ticks: u32) {
    let step = game.config().tick_ms;
    for _ in 0..ticks {
        assert_eq!(game.pump(step), 1);
    }
}

fn glyph_of_first(game: &Game) -> Glyph {
    game.symbols()[0].glyph()
}

#[test]
fn test_nice_hit_scenario() {
    let mut game = started(one_symbol());
    run_ticks(&mut game, 55); // y = 450
    let key = glyph_of_first(&game).as_char();

    game.handle_input(Key::Char(key));

    let j = game.take_last_judgment().unwrap();
    assert_eq!(j.verdict, Verdict::Nice);
    assert_eq!(game.score(), 10);
    assert_eq!(game.combo(), 1);
    assert!(game.symbols().is_empty());
}

#[test]
fn test_perfect_hit_scenario() {
    let mut game = started(one_symbol());
    run_ticks(&mut game, 75); // y = 650
    let key = glyph_of_first(&game).as_char().to_ascii_lowercase();

    game.handle_input(Key::Char(key));

    let j = game.take_last_judgment().unwrap();
    assert_eq!(j.verdict, Verdict::Perfect);
    assert_eq!(game.score(), 20);
    assert_eq!(game.combo(), 1);
    assert_eq!(game.feedback_texts()[0].message(), "PERFECT! +20");
}

#[test]
fn test_too_soon_scenario_ignores_key() {
    let mut game = started(one_symbol());
    run_ticks(&mut game, 20); // y = 100
    let wrong = Glyph::ALL
        .iter()
        .find(|g| **g != glyph_of_first(&game))
        .unwrap()
        .as_char();

    game.handle_input(Key::Char(wrong));

    assert_eq!(game.take_last_judgment().unwrap().verdict, Verdict::TooSoon);
    assert_eq!(game.score(), 0);
    assert_eq!(game.combo(), 0);
    assert!(game.symbols().is_empty());
    assert_eq!(game.feedback_texts()[0].message(), "TOO SOON!");
}

#[test]
fn test_budget_exhausted_ends_game() {
    let mut game = started(one_symbol());
    run_ticks(&mut game, 90); // y = 800, still on the field
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.symbols().len(), 1);

    run_ticks(&mut game, 1);
    assert_eq!(game.phase(), GamePhase::GameEnded);
    assert!(!game.is_ticking());
    assert_eq!(game.overlay().line1(), "You scored: 0");
    assert_eq!(game.overlay().line2(), "Press SPACE to start a new game!");

    // Stopped ticker swallows time.
    assert_eq!(game.pump(10_000), 0);
}

#[test]
fn test_restart_resets_everything() {
    let mut game = started(one_symbol());
    run_ticks(&mut game, 60);
    let key = glyph_of_first(&game).as_char();
    game.handle_input(Key::Char(key));
    while game.phase() == GamePhase::Playing {
        game.update();
    }
    assert_eq!(game.overlay().line1(), "You scored: 10");

    game.handle_input(Key::Start);
    assert_eq!(game.phase(), GamePhase::Ready);
    assert_eq!(game.score(), 0);
    assert_eq!(game.combo(), 0);
    assert_eq!(game.spawns_remaining(), 1);
    assert!(game.symbols().is_empty());
    assert!(game.feedback_texts().is_empty());
    assert_eq!(game.overlay().line1(), "Press SPACE to start!");

    game.handle_input(Key::Start);
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn test_unrecognized_keys_change_nothing() {
    let mut game = started(one_symbol());
    run_ticks(&mut game, 60);
    let before = game.snapshot();

    for key in [Key::Other, Key::Char('Q'), Key::Char('7'), Key::Start] {
        assert_eq!(game.handle_input(key), Flow::Continue);
    }

    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_unrecognized_keys_change_nothing_when_ready() {
    let mut game = Game::new(one_symbol());
    let before = game.snapshot();

    for key in [Key::Other, Key::Char('W'), Key::Char('Q'), Key::Char('d')] {
        assert_eq!(game.handle_input(key), Flow::Continue);
    }

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.phase(), GamePhase::Ready);
    assert!(!game.is_ticking());
}

#[test]
fn test_unrecognized_keys_change_nothing_when_ended() {
    let mut game = started(one_symbol());
    while game.phase() == GamePhase::Playing {
        game.update();
    }
    let before = game.snapshot();

    for key in [Key::Other, Key::Char('W'), Key::Char('Q'), Key::Char('S')] {
        assert_eq!(game.handle_input(key), Flow::Continue);
    }

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.phase(), GamePhase::GameEnded);
    assert!(game.take_last_judgment().is_none());
}

#[test]
fn test_quit_from_every_phase() {
    let mut game = Game::new(one_symbol());
    assert_eq!(game.handle_input(Key::Quit), Flow::Quit);
    game.handle_input(Key::Start);
    assert_eq!(game.handle_input(Key::Quit), Flow::Quit);
}

#[test]
fn test_pump_catches_up_with_a_cap() {
    let mut game = started(one_symbol());
    assert_eq!(game.pump(15), 0);
    assert_eq!(game.pump(15), 1);
    assert_eq!(game.pump(30 * 100), MAX_CATCHUP_TICKS);
}

#[test]
fn test_same_seed_same_game() {
    let config = GameConfig {
        total_spawns: 8,
        ..GameConfig::default()
    }
    .with_seed(2024);
    let mut a = started(config);
    let mut b = started(config);
    for _ in 0..200 {
        a.update();
        b.update();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_accept_any_key_judges_unknown_letters() {
    let config = GameConfig {
        accept_any_key: true,
        ..one_symbol()
    };
    let mut game = started(config);
    run_ticks(&mut game, 60);

    game.handle_input(Key::Char('Q'));

    assert_eq!(game.take_last_judgment().unwrap().verdict, Verdict::Incorrect);
    assert!(game.symbols().is_empty());
}
