//! End-to-end sessions against file-backed stores

mod common;

use bookquiz::app::{App, AppState};
use bookquiz::clock::TickOutcome;
use bookquiz::store::{JsonFileStore, Store};
use bookquiz::{Leaderboard, UserStats};

use common::{
    answer_correctly, answer_wrongly, expire_clock, file_backed_app, sample_pool, temp_config,
};

fn next_and_answer_correctly(app: &mut App) {
    app.next_question().unwrap();
    answer_correctly(app);
}

#[test]
fn test_full_session_persists_stats_and_score() {
    let (_dir, config) = temp_config();
    let (mut app, ticker) = file_backed_app(&config, sample_pool(10), 42);

    app.start_exploration().unwrap();
    answer_correctly(&mut app); // +20
    next_and_answer_correctly(&mut app); // +25
    app.next_question().unwrap();
    answer_wrongly(&mut app);
    next_and_answer_correctly(&mut app); // +20

    expire_clock(&mut app, &ticker);
    assert_eq!(app.state(), AppState::GameOver);
    assert!(app.submit_score("Hana").unwrap());

    let stats: UserStats = JsonFileStore::new(config.stats_path()).load();
    assert_eq!(stats.xp, 65);
    assert_eq!(stats.correct_answers, 3);
    assert_eq!(stats.total_attempts, 4);
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.best_streak, 2);
    assert_eq!(stats.unlocked_badges, vec!["start".to_string()]);

    let board: Leaderboard = JsonFileStore::new(config.leaderboard_path()).load();
    assert_eq!(board.len(), 1);
    assert_eq!(board.entries()[0].name, "Hana");
    assert_eq!(board.entries()[0].score, 65);
}

#[test]
fn test_progress_survives_restart() {
    let (_dir, config) = temp_config();

    {
        let (mut app, _ticker) = file_backed_app(&config, sample_pool(5), 1);
        app.start_exploration().unwrap();
        answer_correctly(&mut app);
        next_and_answer_correctly(&mut app);
    }

    let (mut app, _ticker) = file_backed_app(&config, sample_pool(5), 2);
    assert_eq!(app.stats().xp, 45);
    assert_eq!(app.stats().streak, 2);

    // The streak carries over, so the next answer is already the third in a row
    app.start_exploration().unwrap();
    answer_correctly(&mut app);
    assert_eq!(app.last_result().unwrap().xp_gained, 30);
    assert_eq!(app.stats().xp, 75);
}

#[test]
fn test_no_repeats_until_pool_exhausted() {
    let (_dir, config) = temp_config();
    let (mut app, _ticker) = file_backed_app(&config, sample_pool(6), 7);

    let mut seen = vec![app.start_exploration().unwrap().item_id];
    for _ in 0..5 {
        answer_wrongly(&mut app);
        seen.push(app.next_question().unwrap().item_id);
    }
    seen.sort();
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_streak_bonus_extends_session() {
    let (_dir, config) = temp_config();
    let (mut app, ticker) = file_backed_app(&config, sample_pool(10), 3);

    app.start_exploration().unwrap();
    let epoch = ticker.active().unwrap();
    for _ in 0..10 {
        app.on_tick(epoch);
    }

    answer_correctly(&mut app);
    for _ in 0..4 {
        next_and_answer_correctly(&mut app);
    }

    let result = app.last_result().unwrap();
    assert_eq!(result.bonus_secs, 3);
    assert!(result.new_badges.iter().any(|b| b.id == "streak_5"));
    assert_eq!(app.remaining_secs(), 53);

    // 20 + 25 + 30 + 35 + 40
    assert_eq!(app.session_score(), 150);
    assert_eq!(app.stats().level, 2);
}

#[test]
fn test_abandoned_session_never_reaches_game_over() {
    let (_dir, config) = temp_config();
    let (mut app, ticker) = file_backed_app(&config, sample_pool(3), 9);

    app.start_exploration().unwrap();
    let epoch = ticker.active().unwrap();
    app.go_home();

    for _ in 0..120 {
        assert_eq!(app.on_tick(epoch), TickOutcome::Stale);
    }
    assert_eq!(app.state(), AppState::Home);
    assert_eq!(ticker.active(), None);
}

#[test]
fn test_short_time_budget() {
    let (_dir, mut config) = temp_config();
    config.game.time_budget_secs = 2;
    let (mut app, ticker) = file_backed_app(&config, sample_pool(3), 11);

    app.start_exploration().unwrap();
    let epoch = ticker.active().unwrap();
    assert_eq!(
        app.on_tick(epoch),
        TickOutcome::Running { remaining_secs: 1 }
    );
    assert_eq!(app.on_tick(epoch), TickOutcome::Expired);
    assert_eq!(app.state(), AppState::GameOver);
    assert_eq!(app.session_score(), 0);
}
