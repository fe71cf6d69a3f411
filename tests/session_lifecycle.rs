use water_catch::consts::*;
use water_catch::sim::{DragState, EndReason, GamePhase};
use water_catch::{GameConfig, MemoryStore, NullPresenter, Session, Surface};

fn seeded(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

fn new_session(config: GameConfig) -> Session<MemoryStore, NullPresenter> {
    Session::new(config, MemoryStore::new(), NullPresenter)
}

/// Advance in capped frame-sized chunks
fn run_for(session: &mut Session<MemoryStore, NullPresenter>, ms: u32) {
    let mut left = ms;
    while left > 0 {
        let dt = left.min(MAX_FRAME_MS);
        session.advance(dt);
        left -= dt;
    }
}

#[test]
fn idle_session_does_nothing() {
    let mut session = new_session(seeded(1));
    assert_eq!(session.phase(), GamePhase::Idle);
    run_for(&mut session, 5_000);
    assert!(session.drops().is_empty());
    assert!(!session.timers_armed());
    assert!(!session.input_attached());
}

#[test]
fn spawn_then_fall() {
    let mut session = new_session(seeded(2));
    session.start();

    run_for(&mut session, 999);
    assert!(session.drops().is_empty());

    // Spawn at t=1000, then physics at 1020, 1050, 1080
    run_for(&mut session, 101);
    assert_eq!(session.drops().len(), 1);
    assert_eq!(session.drops()[0].pos.y, 3.0 * FALL_STEP);
    assert_eq!(session.time_left(), Some(SESSION_SECONDS - 1));
}

#[test]
fn pause_freezes_and_resume_continues() {
    let mut session = new_session(seeded(3));
    session.start();
    run_for(&mut session, 1_100);

    session.pause();
    let drops = session.drops().to_vec();
    let time_left = session.time_left();
    run_for(&mut session, 10_000);
    assert_eq!(session.drops(), &drops[..]);
    assert_eq!(session.time_left(), time_left);
    assert_eq!(session.score(), 0);

    session.resume();
    run_for(&mut session, PHYSICS_TICK_MS);
    assert_eq!(session.drops()[0].pos.y, drops[0].pos.y + FALL_STEP);
}

#[test]
fn timed_session_ends_by_the_clock() {
    let mut session = new_session(seeded(4));
    session.start();
    run_for(&mut session, (SESSION_SECONDS + 1) * 1000);

    assert_eq!(session.phase(), GamePhase::Ended);
    assert!(!session.timers_armed());
    assert!(!session.input_attached());
    assert_eq!(session.end_reason(), Some(EndReason::TimeUp));
    assert_eq!(session.time_left(), Some(0));
}

#[test]
fn untimed_session_never_times_out() {
    let mut session = new_session(GameConfig {
        seed: Some(5),
        ..GameConfig::untimed()
    });
    session.start();
    run_for(&mut session, 2 * SESSION_SECONDS * 1000);

    assert_eq!(session.time_left(), None);
    assert_ne!(session.end_reason(), Some(EndReason::TimeUp));
}

#[test]
fn drag_moves_player_within_bounds() {
    let mut session = new_session(GameConfig {
        surface: Surface::new(400.0, 700.0),
        ..seeded(6)
    });
    session.start();
    let player = session.player().clone();

    // Misses the player: nothing happens
    assert!(!session.drag_start(10.0, 10.0));
    session.drag_move(300.0);
    assert_eq!(session.player().x(), player.x());

    assert!(session.drag_start(player.x() + 32.0, player.pos.y + 32.0));
    session.drag_move(1_000.0);
    assert_eq!(session.player().x(), 400.0 - PLAYER_WIDTH);
    session.drag_move(-1_000.0);
    assert_eq!(session.player().x(), 0.0);

    session.pointer_leave();
    assert_eq!(session.drag_state(), DragState::Idle);
}

#[test]
fn step_player_clamps_at_walls() {
    let mut session = new_session(seeded(7));
    session.start();
    for _ in 0..100 {
        session.step_player(-STEP_AMOUNT);
    }
    assert_eq!(session.player().x(), 0.0);
    for _ in 0..100 {
        session.step_player(STEP_AMOUNT);
    }
    assert_eq!(session.player().x(), session.surface().width - PLAYER_WIDTH);
}

#[test]
fn ended_session_ignores_input_until_restart() {
    let mut session = new_session(seeded(8));
    session.start();
    run_for(&mut session, (SESSION_SECONDS + 1) * 1000);
    assert_eq!(session.phase(), GamePhase::Ended);

    let x = session.player().x();
    session.step_player(STEP_AMOUNT);
    session.pause();
    session.resume();
    assert_eq!(session.player().x(), x);
    assert_eq!(session.phase(), GamePhase::Ended);

    session.restart();
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.time_left(), Some(SESSION_SECONDS));
    assert!(session.drops().is_empty());
}
