//! Hall of fame across sessions

mod common;

use bookquiz::app::AppState;
use bookquiz::leaderboard::{normalize_name, rank_of};
use bookquiz::store::{JsonFileStore, Store};
use bookquiz::{Leaderboard, LeaderboardEntry};

use common::{answer_correctly, expire_clock, file_backed_app, sample_pool, temp_config};

/// Play one session answering `correct` questions right, then record `name`
fn play_and_submit(config: &bookquiz::config::Config, correct: usize, name: &str) -> bool {
    let (mut app, ticker) = file_backed_app(config, sample_pool(10), correct as u64);
    app.start_exploration().unwrap();
    for i in 0..correct {
        if i > 0 {
            app.next_question().unwrap();
        }
        answer_correctly(&mut app);
    }
    expire_clock(&mut app, &ticker);
    app.submit_score(name).unwrap()
}

#[test]
fn test_board_is_ranked_and_bounded() {
    let (_dir, mut config) = temp_config();
    config.game.streak_policy = bookquiz::progression::StreakPolicy::ResetPerSession;
    config.leaderboard.max_entries = 3;

    assert!(play_and_submit(&config, 1, "One"));
    assert!(play_and_submit(&config, 3, "Three"));
    assert!(play_and_submit(&config, 0, "Zero"));
    assert!(play_and_submit(&config, 2, "Two"));

    let board: Leaderboard = JsonFileStore::new(config.leaderboard_path()).load();
    let ranked: Vec<(&str, u32)> = board
        .entries()
        .iter()
        .map(|e| (e.name.as_str(), e.score))
        .collect();
    assert_eq!(ranked, vec![("Three", 75), ("Two", 45), ("One", 20)]);
}

#[test]
fn test_names_are_trimmed_and_truncated() {
    let (_dir, config) = temp_config();
    assert!(play_and_submit(&config, 0, "  Bartholomew the Bold  "));

    let board: Leaderboard = JsonFileStore::new(config.leaderboard_path()).load();
    assert_eq!(board.entries()[0].name, "Bartholome");
}

#[test]
fn test_blank_name_writes_nothing() {
    let (_dir, config) = temp_config();
    let (mut app, ticker) = file_backed_app(&config, sample_pool(3), 0);
    app.start_exploration().unwrap();
    expire_clock(&mut app, &ticker);

    assert!(!app.submit_score("").unwrap());
    assert!(!app.submit_score(" \t ").unwrap());
    assert_eq!(app.state(), AppState::GameOver);
    assert!(!config.leaderboard_path().exists());
}

#[test]
fn test_equal_scores_keep_submission_order() {
    let (_dir, config) = temp_config();
    let store = JsonFileStore::<Leaderboard>::new(config.leaderboard_path());
    store
        .save(&Leaderboard::from_entries(vec![LeaderboardEntry::new(
            "Early", 0, "2026-01-01",
        )]))
        .unwrap();

    assert!(play_and_submit(&config, 0, "Late"));

    let names: Vec<String> = store
        .load()
        .into_entries()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Early", "Late"]);
}

#[test]
fn test_rank_after_submission() {
    let (_dir, config) = temp_config();
    assert!(play_and_submit(&config, 1, "First"));

    let (mut app, ticker) = file_backed_app(&config, sample_pool(10), 5);
    app.start_exploration().unwrap();
    expire_clock(&mut app, &ticker);
    assert!(app.submit_score("  Second  ").unwrap());

    let name = normalize_name("  Second  ", config.leaderboard.name_max_chars).unwrap();
    assert_eq!(rank_of(app.leaderboard(), &name, app.session_score()), Some(2));
}

#[test]
fn test_zero_length_names_write_nothing() {
    let (_dir, mut config) = temp_config();
    config.leaderboard.name_max_chars = 0;

    assert!(!play_and_submit(&config, 1, "Mina"));
    assert!(!config.leaderboard_path().exists());
}

#[test]
fn test_corrupt_board_starts_empty() {
    let (dir, config) = temp_config();
    std::fs::write(dir.path().join("leaderboard.json"), "{ not json").unwrap();

    let (app, _ticker) = file_backed_app(&config, sample_pool(3), 0);
    assert!(app.leaderboard().is_empty());
}
